//! # Node of the expression tree
//!
//! Every element of the tree ([`Variable`], [`Operation`], [`Expression`]) offers the same
//! rendering capability, described by the [`LatexNode`] trait:
//! - `str_symbolic` - formula with names only, e.g. `{a} + {b}`
//! - `str_substituted` - formula with values inserted, e.g. `3.25 + 5.63`
//! - `str_result` - formatted numeric result, e.g. `8.88`
//! - `result` - raw numeric result
//! - `is_symbolic` - true if any variable of the subtree has no value yet
//!
//! [`Node`] is the closed set of the three variants; the trait is dispatched on it by
//! `enum_dispatch`, so operations store their operands as `Vec<Node>` without boxing trait objects.
use crate::symbolic::latex_error::LatexResult;
use crate::symbolic::latex_expression::Expression;
use crate::symbolic::latex_format::{DEFAULT_UNIT_FORMAT, NumberFormat, render_with_unit};
use crate::symbolic::latex_operation::Operation;
use crate::symbolic::latex_variable::Variable;
use enum_dispatch::enum_dispatch;
use std::fmt;

/// Common rendering contract of all tree nodes
#[enum_dispatch(Node)]
pub trait LatexNode {
    /// symbolic name of the node (empty for an operation)
    fn name(&self) -> String;
    /// physical unit (empty for an operation)
    fn unit(&self) -> String;
    fn unit_format(&self) -> String {
        DEFAULT_UNIT_FORMAT.to_string()
    }
    /// format used for the node's own result
    fn number_format(&self) -> NumberFormat;
    /// exponent used for the node's own result, 0 = no scientific representation
    fn exponent(&self) -> i32;
    fn is_symbolic(&self) -> bool;
    fn result(&self) -> LatexResult<f64>;
    fn str_symbolic(&self) -> String;
    fn str_substituted(&self) -> String;
    /// Formatted result. `None` arguments mean "use the node's own format/exponent".
    fn str_result(&self, format: Option<&NumberFormat>, exponent: Option<i32>) -> LatexResult<String>;
    /// canonical full rendering, also used by `Display`
    fn str_full(&self) -> String;

    /// formatted result followed by the formatted unit
    fn str_result_with_unit(&self) -> LatexResult<String> {
        let result = self.str_result(None, None)?;
        Ok(render_with_unit(&result, &self.unit(), &self.unit_format()))
    }
    /// Snapshot of the current result as a new variable, optionally renamed
    fn to_variable(&self, new_name: Option<&str>) -> LatexResult<Variable> {
        Variable::from_node(self, new_name)
    }
}

/// Any node of the expression tree
#[enum_dispatch]
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Variable(Variable),
    Operation(Operation),
    Expression(Expression),
}

impl Node {
    /// kind of the node for messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Node::Variable(_) => "Variable",
            Node::Operation(_) => "Operation",
            Node::Expression(_) => "Expression",
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.str_full())
    }
}

impl From<&Variable> for Node {
    fn from(v: &Variable) -> Self {
        Node::Variable(v.clone())
    }
}
impl From<&Operation> for Node {
    fn from(o: &Operation) -> Self {
        Node::Operation(o.clone())
    }
}
impl From<&Expression> for Node {
    fn from(e: &Expression) -> Self {
        Node::Expression(e.clone())
    }
}
impl From<&Node> for Node {
    fn from(n: &Node) -> Self {
        n.clone()
    }
}

// numeric literals become synthetic variables named by their value
impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Node::Variable(Variable::literal_float(value))
    }
}
impl From<i32> for Node {
    fn from(value: i32) -> Self {
        Node::Variable(Variable::literal_int(value as i64))
    }
}
impl From<i64> for Node {
    fn from(value: i64) -> Self {
        Node::Variable(Variable::literal_int(value))
    }
}
impl From<u32> for Node {
    fn from(value: u32) -> Self {
        Node::Variable(Variable::literal_int(value as i64))
    }
}
impl From<usize> for Node {
    fn from(value: usize) -> Self {
        Node::Variable(Variable::literal_int(value as i64))
    }
}

/// Collects heterogeneous operands into `Vec<Node>`
/// Usage: nodes![v1, 2, o1] -> vec![Node::from(v1), Node::from(2), Node::from(o1)]
#[macro_export]
macro_rules! nodes {
    ($($arg:expr),* $(,)?) => {
        vec![$($crate::symbolic::latex_node::Node::from($arg)),*]
    };
}
