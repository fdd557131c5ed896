//! # Expression
//!
//! Named wrapper around one node (usually an [`Operation`](crate::symbolic::latex_operation::Operation)),
//! adding its own name, unit and formatting. This is the piece a user names and reuses, and
//! the one producing the canonical four-part rendering
//! `name = symbolic = substituted = result unit`.
//!
//! Inside a bigger tree an expression renders as its name (symbolic mode) or its formatted
//! result (substituted mode), i.e. it behaves like a variable whose value is computed.
//!
//! # Example
//! ```rust, ignore
//! let v1 = Variable::new("H_{ello}", 3.25, "m");
//! let v2 = Variable::new("W^{orld}", 5.63, "m");
//! let e1 = Expression::new("E_{xample}", &v1 + &v2, "m");
//! assert_eq!(
//!     e1.to_string(),
//!     r"E_{xample} = {H_{ello}} + {W^{orld}} = 3.25 + 5.63 = 8.88 \ \mathrm{m}"
//! );
//! ```
use crate::symbolic::latex_error::LatexResult;
use crate::symbolic::latex_format::{DEFAULT_UNIT_FORMAT, NumberFormat, render_value};
use crate::symbolic::latex_node::{LatexNode, Node};
use std::fmt;

/// Named expression: name, unit, formatting and the wrapped node
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    name: String,
    operation: Box<Node>,
    unit: String,
    format: NumberFormat,
    unit_format: String,
    exponent: i32,
}

impl Expression {
    /// # Arguments
    /// * `name` - symbolic (LaTeX) name of the expression
    /// * `operation` - wrapped node; variables, operations, expressions and numbers are accepted
    /// * `unit` - physical unit of the result
    pub fn new(name: &str, operation: impl Into<Node>, unit: &str) -> Expression {
        Expression {
            name: name.to_string(),
            operation: Box::new(operation.into()),
            unit: unit.to_string(),
            format: NumberFormat::default(),
            unit_format: DEFAULT_UNIT_FORMAT.to_string(),
            exponent: 0,
        }
    }

    pub fn with_format(mut self, pattern: &str) -> LatexResult<Expression> {
        self.format = NumberFormat::parse(pattern)?;
        Ok(self)
    }
    pub fn with_number_format(mut self, format: NumberFormat) -> Expression {
        self.format = format;
        self
    }
    pub fn with_unit_format(mut self, unit_format: &str) -> Expression {
        self.unit_format = unit_format.to_string();
        self
    }
    pub fn with_exponent(mut self, exponent: i32) -> Expression {
        self.exponent = exponent;
        self
    }
    pub fn with_unit(mut self, unit: &str) -> Expression {
        self.unit = unit.to_string();
        self
    }

    /// the wrapped node
    pub fn operation(&self) -> &Node {
        &self.operation
    }
    /// Replaces the wrapped node, keeping name, unit and formatting
    pub fn set_operation(&mut self, operation: impl Into<Node>) {
        self.operation = Box::new(operation.into());
    }
    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }
}

impl LatexNode for Expression {
    fn name(&self) -> String {
        self.name.clone()
    }
    fn unit(&self) -> String {
        self.unit.clone()
    }
    fn unit_format(&self) -> String {
        self.unit_format.clone()
    }
    fn number_format(&self) -> NumberFormat {
        self.format.clone()
    }
    fn exponent(&self) -> i32 {
        self.exponent
    }
    fn is_symbolic(&self) -> bool {
        self.operation.is_symbolic()
    }
    fn result(&self) -> LatexResult<f64> {
        self.operation.result()
    }
    fn str_symbolic(&self) -> String {
        format!("{{{}}}", self.name)
    }
    fn str_substituted(&self) -> String {
        match self.operation.result() {
            Ok(result) => render_value(result, &self.format, self.exponent),
            Err(_) => self.str_symbolic(),
        }
    }
    fn str_result(&self, format: Option<&NumberFormat>, exponent: Option<i32>) -> LatexResult<String> {
        let result = self.result()?;
        Ok(render_value(
            result,
            format.unwrap_or(&self.format),
            exponent.unwrap_or(self.exponent),
        ))
    }
    fn str_full(&self) -> String {
        let symbolic = self.operation.str_symbolic();
        match self.str_result_with_unit() {
            Ok(result) => format!(
                "{} = {} = {} = {}",
                self.name,
                symbolic,
                self.operation.str_substituted(),
                result
            ),
            Err(_) => format!("{} = {}", self.name, symbolic),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.str_full())
    }
}
