//! # LaTeX macro export
//!
//! Turns a node (or any rendered text) into a LaTeX macro, so that values computed in Rust
//! can be referenced from a document:
//! - `def` (alias `definition`) -> `\def\NAME{body}`
//! - `newcommand` -> `\newcommand{\NAME}{body}`
//! - `renewcommand` -> `\renewcommand{\NAME}{body}`
//!
//! What goes into the body of a node's macro is chosen by [`LatexVariableContent`]:
//! `float` (raw numeric result), `str` (formatted result), `valunit` (formatted result with
//! unit), `symb` (symbolic rendering), `subst` (substituted rendering), `all` (full display).
//!
//! ```rust, ignore
//! let v = Variable::new("a", 3.25, "m");
//! assert_eq!(v.to_latex_variable_valunit("aValue", "def")?, r"\def\aValue{3.25 \ \mathrm{m}}");
//! ```
use crate::symbolic::latex_error::{LatexExprError, LatexResult};
use crate::symbolic::latex_node::LatexNode;
use itertools::Itertools;
use std::fmt::Display;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, EnumString};

/// LaTeX command used to define the macro
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumString, strum_macros::Display)]
pub enum MacroCommand {
    #[strum(to_string = "def", serialize = "definition")]
    Def,
    #[strum(serialize = "newcommand")]
    NewCommand,
    #[strum(serialize = "renewcommand")]
    RenewCommand,
}

impl MacroCommand {
    pub fn parse(command: &str) -> LatexResult<MacroCommand> {
        MacroCommand::from_str(command).map_err(|_| LatexExprError::InvalidMacroCommand {
            command: command.to_string(),
            valid: MacroCommand::iter().map(|c| format!("'{}'", c)).join(", "),
        })
    }

    pub fn define(&self, name: &str, body: &str) -> String {
        match self {
            MacroCommand::Def => format!(r"\def\{}{{{}}}", name, body),
            MacroCommand::NewCommand => format!(r"\newcommand{{\{}}}{{{}}}", name, body),
            MacroCommand::RenewCommand => format!(r"\renewcommand{{\{}}}{{{}}}", name, body),
        }
    }
}

/// Part of the node placed into the macro body
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumString, strum_macros::Display)]
#[strum(ascii_case_insensitive)]
pub enum LatexVariableContent {
    #[strum(serialize = "float")]
    Float,
    #[strum(serialize = "str")]
    Str,
    #[strum(serialize = "valunit")]
    ValUnit,
    #[strum(serialize = "symb")]
    Symb,
    #[strum(serialize = "subst")]
    Subst,
    #[strum(serialize = "all")]
    All,
}

impl LatexVariableContent {
    pub fn parse(what: &str) -> LatexResult<LatexVariableContent> {
        LatexVariableContent::from_str(what).map_err(|_| LatexExprError::InvalidDisplaySelector {
            what: what.to_string(),
            valid: LatexVariableContent::iter()
                .map(|c| format!("'{}'", c))
                .join(", "),
        })
    }
}

/// Wraps `body` into a LaTeX macro `name` using `command` (`def`, `newcommand`, `renewcommand`)
pub fn to_latex_variable(name: &str, body: impl Display, command: &str) -> LatexResult<String> {
    let command = MacroCommand::parse(command)?;
    Ok(command.define(name, &body.to_string()))
}

/// Macro export for every tree node
pub trait ToLatexVariable: LatexNode {
    /// # Arguments
    /// * `name` - macro name without the leading backslash
    /// * `what` - one of `float`, `str`, `valunit`, `symb`, `subst`, `all` (case-insensitive)
    /// * `command` - one of `def`, `newcommand`, `renewcommand`
    fn to_latex_variable(&self, name: &str, what: &str, command: &str) -> LatexResult<String> {
        let body = match LatexVariableContent::parse(what)? {
            LatexVariableContent::Float => self.result()?.to_string(),
            LatexVariableContent::Str => self.str_result(None, None)?,
            LatexVariableContent::ValUnit => self.str_result_with_unit()?,
            LatexVariableContent::Symb => self.str_symbolic(),
            LatexVariableContent::Subst => self.str_substituted(),
            LatexVariableContent::All => self.str_full(),
        };
        to_latex_variable(name, body, command)
    }
    fn to_latex_variable_float(&self, name: &str, command: &str) -> LatexResult<String> {
        self.to_latex_variable(name, "float", command)
    }
    fn to_latex_variable_str(&self, name: &str, command: &str) -> LatexResult<String> {
        self.to_latex_variable(name, "str", command)
    }
    fn to_latex_variable_valunit(&self, name: &str, command: &str) -> LatexResult<String> {
        self.to_latex_variable(name, "valunit", command)
    }
    fn to_latex_variable_symb(&self, name: &str, command: &str) -> LatexResult<String> {
        self.to_latex_variable(name, "symb", command)
    }
    fn to_latex_variable_subst(&self, name: &str, command: &str) -> LatexResult<String> {
        self.to_latex_variable(name, "subst", command)
    }
    fn to_latex_variable_all(&self, name: &str, command: &str) -> LatexResult<String> {
        self.to_latex_variable(name, "all", command)
    }
}

impl<T: LatexNode + ?Sized> ToLatexVariable for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_macro_commands() {
        assert_eq!(to_latex_variable("x", "1.5", "def").unwrap(), r"\def\x{1.5}");
        assert_eq!(
            to_latex_variable("x", "1.5", "definition").unwrap(),
            r"\def\x{1.5}"
        );
        assert_eq!(
            to_latex_variable("x", 2, "newcommand").unwrap(),
            r"\newcommand{\x}{2}"
        );
        assert_eq!(
            to_latex_variable("x", r"\pi", "renewcommand").unwrap(),
            r"\renewcommand{\x}{\pi}"
        );
    }

    #[test]
    fn test_invalid_command() {
        match to_latex_variable("x", "1", "let") {
            Err(LatexExprError::InvalidMacroCommand { command, valid }) => {
                assert_eq!(command, "let");
                assert!(valid.contains("'newcommand'"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_selector_parsing() {
        assert_eq!(
            LatexVariableContent::parse("VALUNIT").unwrap(),
            LatexVariableContent::ValUnit
        );
        assert_eq!(
            LatexVariableContent::parse("Symb").unwrap(),
            LatexVariableContent::Symb
        );
        assert!(matches!(
            LatexVariableContent::parse("value"),
            Err(LatexExprError::InvalidDisplaySelector { .. })
        ));
    }
}
