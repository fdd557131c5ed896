//! Saving and restoring sets of variables, so that values computed in one session can be
//! reused in another one.
//!
//! The file is a TOML document with one table per stored variable:
//! ```toml
//! [F]
//! name = "F"
//! value = 2.34
//! unit = "kN"
//! format = "%.2f"
//! unit_format = "\\mathrm{%s}"
//! exponent = 0
//! ```
//! `value` is omitted for variables without value.
use crate::symbolic::latex_error::{LatexExprError, LatexResult};
use crate::symbolic::latex_format::{DEFAULT_NUMBER_FORMAT, DEFAULT_UNIT_FORMAT};
use crate::symbolic::latex_node::LatexNode;
use crate::symbolic::latex_variable::Variable;
use log::info;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use toml::{Table, Value};

/// `latexexprglobals.toml` in the temporary directory
pub fn default_storage_path() -> PathBuf {
    std::env::temp_dir().join("latexexprglobals.toml")
}

fn variable_to_table(v: &Variable) -> Table {
    let mut table = Table::new();
    table.insert("name".to_string(), Value::String(v.name()));
    if let Some(value) = v.value() {
        table.insert("value".to_string(), Value::Float(value));
    }
    table.insert("unit".to_string(), Value::String(v.unit()));
    table.insert(
        "format".to_string(),
        Value::String(v.number_format().pattern().to_string()),
    );
    table.insert("unit_format".to_string(), Value::String(v.unit_format()));
    table.insert("exponent".to_string(), Value::Integer(v.exponent() as i64));
    table
}

fn string_field(key: &str, table: &Table, field: &str, default: &str) -> LatexResult<String> {
    match table.get(field) {
        None => Ok(default.to_string()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(LatexExprError::Persistence(format!(
            "'{}.{}' should be a string, got {}",
            key,
            field,
            other.type_str()
        ))),
    }
}

fn table_to_variable(key: &str, table: &Table) -> LatexResult<Variable> {
    let name = string_field(key, table, "name", key)?;
    let value = match table.get("value") {
        None => None,
        Some(Value::Float(f)) => Some(*f),
        Some(Value::Integer(i)) => Some(*i as f64),
        Some(other) => {
            return Err(LatexExprError::Persistence(format!(
                "'{}.value' should be a number, got {}",
                key,
                other.type_str()
            )));
        }
    };
    let exponent = match table.get("exponent") {
        None => 0,
        Some(Value::Integer(i)) => i32::try_from(*i).map_err(|_| {
            LatexExprError::Persistence(format!("'{}.exponent' out of range: {}", key, i))
        })?,
        Some(other) => {
            return Err(LatexExprError::Persistence(format!(
                "'{}.exponent' should be an integer, got {}",
                key,
                other.type_str()
            )));
        }
    };
    let unit = string_field(key, table, "unit", "")?;
    let format = string_field(key, table, "format", DEFAULT_NUMBER_FORMAT)?;
    let unit_format = string_field(key, table, "unit_format", DEFAULT_UNIT_FORMAT)?;
    let variable = Variable::new(&name, value, &unit)
        .with_format(&format)?
        .with_unit_format(&unit_format)
        .with_exponent(exponent);
    Ok(variable)
}

/// Writes the variables to `path`, keys of the map become the table names
pub fn save_variables(path: &Path, variables: &BTreeMap<String, Variable>) -> LatexResult<()> {
    let mut document = Table::new();
    for (key, v) in variables {
        document.insert(key.clone(), Value::Table(variable_to_table(v)));
    }
    fs::write(path, document.to_string())?;
    info!("{} variable(s) saved to {}", variables.len(), path.display());
    Ok(())
}

/// Reads variables written by [`save_variables`]
pub fn load_variables(path: &Path) -> LatexResult<BTreeMap<String, Variable>> {
    let content = fs::read_to_string(path)?;
    let document = content
        .parse::<Table>()
        .map_err(|e| LatexExprError::Persistence(format!("{}: {}", path.display(), e)))?;
    let mut variables = BTreeMap::new();
    for (key, item) in document.iter() {
        match item {
            Value::Table(table) => {
                variables.insert(key.clone(), table_to_variable(key, table)?);
            }
            other => {
                return Err(LatexExprError::Persistence(format!(
                    "'{}' should be a table, got {}",
                    key,
                    other.type_str()
                )));
            }
        }
    }
    info!("{} variable(s) loaded from {}", variables.len(), path.display());
    Ok(variables)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use tempfile::tempdir;

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("vars.toml");
        let mut vars = BTreeMap::new();
        vars.insert(
            "force".to_string(),
            Variable::new("F", 4.34, "kN").with_exponent(-2),
        );
        vars.insert(
            "area".to_string(),
            Variable::new("A_{1}", 0.125, "m^2")
                .with_format("%.4f")
                .unwrap()
                .with_unit_format(r"\mathbf{%s}"),
        );
        vars.insert("q".to_string(), Variable::symbolic("q"));
        save_variables(&path, &vars).unwrap();

        let loaded = load_variables(&path).unwrap();
        assert_eq!(loaded.len(), 3);
        let force = &loaded["force"];
        assert_eq!(force.to_string(), r"F = { 434.00 \cdot 10^{-2} } \ \mathrm{kN}");
        let area = &loaded["area"];
        assert_relative_eq!(area.value().unwrap(), 0.125);
        assert_eq!(area.to_string(), r"A_{1} = 0.1250 \ \mathbf{m^2}");
        assert!(loaded["q"].is_symbolic());
        assert_eq!(loaded["q"].name(), "q");
    }

    #[test]
    fn test_malformed_documents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[x]\nvalue = \"three\"\n").unwrap();
        assert!(matches!(
            load_variables(&path),
            Err(LatexExprError::Persistence(_))
        ));
        fs::write(&path, "x = 1\n").unwrap();
        assert!(matches!(
            load_variables(&path),
            Err(LatexExprError::Persistence(_))
        ));
        fs::write(&path, "[x\n").unwrap();
        assert!(matches!(
            load_variables(&path),
            Err(LatexExprError::Persistence(_))
        ));
        assert!(matches!(
            load_variables(&dir.path().join("missing.toml")),
            Err(LatexExprError::Io(_))
        ));
    }

    #[test]
    fn test_default_path() {
        assert!(default_storage_path().ends_with("latexexprglobals.toml"));
    }
}
