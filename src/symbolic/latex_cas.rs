//! # Computer algebra bridge
//!
//! Simplification, expansion, factorization, collection, cancellation and partial fraction
//! decomposition are not implemented here: they are delegated to an external computer
//! algebra system (CAS) behind the [`CasEngine`] trait. This module only translates trees
//! to the generic CAS node set [`CasExpr`] and back.
//!
//! - [`to_external`] turns a node into a `CasExpr` plus a [`SymbolTable`] remembering which
//!   symbol stands for which (shared) [`Variable`]. Variables without value always become
//!   symbols; with `substitute_floats == true` variables with value become numbers.
//!   Expressions are transparent, `max`/`min` have no CAS counterpart and fail.
//! - [`from_external`] rebuilds a node from the CAS result: symbols are resolved back to the
//!   original variables, so the rewritten tree still shares values with the input tree.
//!   Differences, negations, fractions, square roots and logarithms are recognised to give
//!   a readable LaTeX form.
//!
//! Translation gaps are reported as [`LatexExprError::CasTranslation`]; nothing is guessed.
//!
//! # Example
//! ```rust, ignore
//! struct MyEngine; // wraps some CAS
//! impl CasEngine for MyEngine {
//!     fn apply(&self, op: CasOperation, expr: &CasExpr) -> LatexResult<CasExpr> { ... }
//! }
//! let simplified = simplify(&e1, &MyEngine, false)?;
//! ```
use crate::symbolic::latex_error::{LatexExprError, LatexResult};
use crate::symbolic::latex_node::{LatexNode, Node};
use crate::symbolic::latex_operation::{
    self, Operation, OperationKind, abs, add2, cos, cosh, div, exp, ln, log, mul, neg,
    rbrackets, sin, sinh, sqrt, sub, tan, tanh,
};
use crate::symbolic::latex_variable::{self, Variable};
use log::{debug, warn};
use std::collections::HashMap;

/// Generic node set of a computer algebra system
#[derive(Debug, Clone, PartialEq)]
pub enum CasExpr {
    Integer(i64),
    Float(f64),
    /// p/q
    Rational(i64, i64),
    Symbol(String),
    Add(Vec<CasExpr>),
    Mul(Vec<CasExpr>),
    Pow(Box<CasExpr>, Box<CasExpr>),
    /// argument, optional base (natural logarithm when None)
    Log(Box<CasExpr>, Option<Box<CasExpr>>),
    Abs(Box<CasExpr>),
    Sin(Box<CasExpr>),
    Cos(Box<CasExpr>),
    Tan(Box<CasExpr>),
    Sinh(Box<CasExpr>),
    Cosh(Box<CasExpr>),
    Tanh(Box<CasExpr>),
    Exp(Box<CasExpr>),
    /// Euler number
    E,
    Pi,
}

impl CasExpr {
    pub fn boxed(self) -> Box<CasExpr> {
        Box::new(self)
    }
    pub fn symbol(name: &str) -> CasExpr {
        CasExpr::Symbol(name.to_string())
    }
    /// `self^-1`
    pub fn inverse(self) -> CasExpr {
        CasExpr::Pow(self.boxed(), CasExpr::Integer(-1).boxed())
    }
    /// `-1 * self`
    pub fn negated(self) -> CasExpr {
        CasExpr::Mul(vec![CasExpr::Integer(-1), self])
    }
}

/// Rewriting requested from the engine
#[derive(Debug, Clone, PartialEq)]
pub enum CasOperation {
    Simplify,
    Expand,
    Factor,
    /// collect terms with respect to the given symbols
    Collect(Vec<String>),
    Cancel,
    Apart,
}

/// External computer algebra system
pub trait CasEngine {
    fn apply(&self, operation: CasOperation, expr: &CasExpr) -> LatexResult<CasExpr>;
}

/// Symbol name <-> variable correspondence of one translation
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    symbols: HashMap<String, Variable>,
}

impl SymbolTable {
    pub fn new() -> SymbolTable {
        SymbolTable::default()
    }
    /// Registers the variable and returns its symbol name. The same variable always gets the
    /// same symbol, a different variable with an already used name gets a numbered one.
    pub fn insert(&mut self, variable: &Variable) -> String {
        if let Some(symbol) = self.symbol_of(variable) {
            return symbol;
        }
        let name = variable.name();
        let mut symbol = name.clone();
        let mut n = 1;
        while self.symbols.contains_key(&symbol) {
            symbol = format!("{}_{}", name, n);
            n += 1;
        }
        self.symbols.insert(symbol.clone(), variable.clone());
        symbol
    }
    pub fn get(&self, symbol: &str) -> Option<&Variable> {
        self.symbols.get(symbol)
    }
    /// symbol standing for the variable, if registered
    pub fn symbol_of(&self, variable: &Variable) -> Option<String> {
        self.symbols
            .iter()
            .find(|(_, v)| v.shares_data_with(variable))
            .map(|(s, _)| s.clone())
    }
    pub fn len(&self) -> usize {
        self.symbols.len()
    }
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

//________________________________TO EXTERNAL_____________________________________

/// Translates a node into the CAS representation
pub fn to_external(node: &Node, substitute_floats: bool) -> LatexResult<(CasExpr, SymbolTable)> {
    let mut table = SymbolTable::new();
    let expr = node_to_cas(node, substitute_floats, &mut table)?;
    debug!("tree translated to CAS: {:?}", expr);
    Ok((expr, table))
}

fn number_to_cas(value: f64) -> CasExpr {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        CasExpr::Integer(value as i64)
    } else {
        CasExpr::Float(value)
    }
}

fn variable_to_cas(v: &Variable, substitute_floats: bool, table: &mut SymbolTable) -> CasExpr {
    let name = v.name();
    if let Some(value) = v.value() {
        // literals are named by their own value
        if name.parse::<f64>().is_ok() {
            return number_to_cas(value);
        }
        if name == latex_variable::e().name() && value == std::f64::consts::E {
            return CasExpr::E;
        }
        if name == latex_variable::pi().name() && value == std::f64::consts::PI {
            return CasExpr::Pi;
        }
        if substitute_floats {
            return number_to_cas(value);
        }
    }
    CasExpr::Symbol(table.insert(v))
}

fn node_to_cas(node: &Node, substitute_floats: bool, table: &mut SymbolTable) -> LatexResult<CasExpr> {
    match node {
        Node::Variable(v) => Ok(variable_to_cas(v, substitute_floats, table)),
        Node::Expression(e) => node_to_cas(e.operation(), substitute_floats, table),
        Node::Operation(o) => operation_to_cas(o, substitute_floats, table),
    }
}

fn operation_to_cas(
    o: &Operation,
    substitute_floats: bool,
    table: &mut SymbolTable,
) -> LatexResult<CasExpr> {
    use OperationKind as K;
    let mut args = o
        .args()
        .iter()
        .map(|a| node_to_cas(a, substitute_floats, table))
        .collect::<LatexResult<Vec<CasExpr>>>()?;
    // arity was checked when the operation was built
    let first = args.remove(0);
    let expr = match o.kind() {
        K::None | K::Pos | K::RBrackets | K::SBrackets | K::CBrackets | K::ABrackets => first,
        K::Add => {
            args.insert(0, first);
            CasExpr::Add(args)
        }
        K::Mul => {
            args.insert(0, first);
            CasExpr::Mul(args)
        }
        K::Max | K::Min => {
            let msg = format!("operation '{}' has no CAS counterpart", o.kind());
            warn!("{}", msg);
            return Err(LatexExprError::CasTranslation(msg));
        }
        K::Sub => CasExpr::Add(vec![first, args.remove(0).negated()]),
        K::Div | K::Div2 => CasExpr::Mul(vec![first, args.remove(0).inverse()]),
        K::Pow => CasExpr::Pow(first.boxed(), args.remove(0).boxed()),
        K::Root => CasExpr::Pow(args.remove(0).boxed(), first.inverse().boxed()),
        K::Log => CasExpr::Log(args.remove(0).boxed(), Some(first.boxed())),
        K::Neg => first.negated(),
        K::Abs => CasExpr::Abs(first.boxed()),
        K::Sqr => CasExpr::Pow(first.boxed(), CasExpr::Integer(2).boxed()),
        K::Sqrt => CasExpr::Pow(first.boxed(), CasExpr::Rational(1, 2).boxed()),
        K::Sin => CasExpr::Sin(first.boxed()),
        K::Cos => CasExpr::Cos(first.boxed()),
        K::Tan => CasExpr::Tan(first.boxed()),
        K::Sinh => CasExpr::Sinh(first.boxed()),
        K::Cosh => CasExpr::Cosh(first.boxed()),
        K::Tanh => CasExpr::Tanh(first.boxed()),
        K::Exp => CasExpr::Exp(first.boxed()),
        K::Ln => CasExpr::Log(first.boxed(), None),
        K::Log10 => CasExpr::Log(first.boxed(), Some(CasExpr::Integer(10).boxed())),
    };
    Ok(expr)
}

//________________________________FROM EXTERNAL___________________________________

/// Rebuilds a node from the CAS representation, resolving symbols through `table`
pub fn from_external(expr: &CasExpr, table: &SymbolTable) -> LatexResult<Node> {
    let node = cas_to_node(expr, table)?;
    debug!("CAS result translated back: {}", node.str_symbolic());
    Ok(node)
}

/// If the expression is "minus something", returns that something
fn split_negative(expr: &CasExpr) -> Option<CasExpr> {
    match expr {
        CasExpr::Integer(i) if *i < 0 => i.checked_neg().map(CasExpr::Integer),
        CasExpr::Float(f) if *f < 0.0 => Some(CasExpr::Float(-f)),
        CasExpr::Rational(p, q) if *p < 0 => p.checked_neg().map(|p| CasExpr::Rational(p, *q)),
        CasExpr::Mul(factors) if !factors.is_empty() => {
            let rest = &factors[1..];
            if factors[0] == CasExpr::Integer(-1) {
                match rest.len() {
                    0 => Some(CasExpr::Integer(1)),
                    1 => Some(rest[0].clone()),
                    _ => Some(CasExpr::Mul(rest.to_vec())),
                }
            } else {
                let coefficient = split_negative(&factors[0])?;
                if matches!(coefficient, CasExpr::Mul(_)) {
                    return None;
                }
                let mut positive = vec![coefficient];
                positive.extend_from_slice(rest);
                Some(CasExpr::Mul(positive))
            }
        }
        _ => None,
    }
}

/// sums and differences need brackets inside products and as power bases
fn bracketed(expr: &CasExpr, table: &SymbolTable) -> LatexResult<Node> {
    let node = cas_to_node(expr, table)?;
    let needs_brackets = match expr {
        CasExpr::Add(_) => true,
        CasExpr::Integer(_) | CasExpr::Float(_) | CasExpr::Rational(_, _) => {
            split_negative(expr).is_some()
        }
        _ => false,
    };
    Ok(if needs_brackets {
        Node::Operation(rbrackets(node))
    } else {
        node
    })
}

fn power_base(expr: &CasExpr, table: &SymbolTable) -> LatexResult<Node> {
    match expr {
        CasExpr::Mul(_) | CasExpr::Pow(_, _) => Ok(Node::Operation(rbrackets(cas_to_node(expr, table)?))),
        _ => bracketed(expr, table),
    }
}

fn product(factors: Vec<Node>) -> LatexResult<Node> {
    let mut factors = factors;
    Ok(match factors.len() {
        0 => Node::from(1),
        1 => factors.remove(0),
        _ => Node::Operation(mul(factors)?),
    })
}

fn cas_to_node(expr: &CasExpr, table: &SymbolTable) -> LatexResult<Node> {
    if let Some(positive) = split_negative(expr) {
        return Ok(Node::Operation(neg(cas_to_node(&positive, table)?)));
    }
    let node = match expr {
        CasExpr::Integer(i) => Node::from(*i),
        CasExpr::Float(f) => Node::from(*f),
        CasExpr::Rational(p, q) => Node::Operation(div(Node::from(*p), Node::from(*q))),
        CasExpr::Symbol(s) => match table.get(s) {
            Some(v) => Node::Variable(v.clone()),
            None => {
                warn!("CAS returned unknown symbol '{}'", s);
                return Err(LatexExprError::UnknownSymbol(s.clone()));
            }
        },
        CasExpr::E => Node::Variable(latex_variable::e()),
        CasExpr::Pi => Node::Variable(latex_variable::pi()),
        CasExpr::Add(terms) => {
            let (first, rest) = terms.split_first().ok_or_else(|| {
                LatexExprError::CasTranslation("empty sum returned by CAS".to_string())
            })?;
            let mut acc = cas_to_node(first, table)?;
            for term in rest {
                acc = match split_negative(term) {
                    Some(positive) => Node::Operation(sub(acc, bracketed(&positive, table)?)),
                    None => Node::Operation(add2(acc, cas_to_node(term, table)?)),
                };
            }
            acc
        }
        CasExpr::Mul(factors) => {
            let mut numerator = Vec::new();
            let mut denominator = Vec::new();
            for factor in factors {
                match factor {
                    CasExpr::Pow(base, e) if **e == CasExpr::Integer(-1) => {
                        denominator.push(bracketed(base, table)?)
                    }
                    CasExpr::Rational(p, q) => {
                        if *p != 1 {
                            numerator.push(Node::from(*p));
                        }
                        denominator.push(Node::from(*q));
                    }
                    _ => numerator.push(bracketed(factor, table)?),
                }
            }
            if factors.is_empty() {
                return Err(LatexExprError::CasTranslation(
                    "empty product returned by CAS".to_string(),
                ));
            }
            if denominator.is_empty() {
                product(numerator)?
            } else {
                Node::Operation(div(product(numerator)?, product(denominator)?))
            }
        }
        CasExpr::Pow(base, e) => match e.as_ref() {
            CasExpr::Integer(-1) => Node::Operation(div(1, cas_to_node(base, table)?)),
            CasExpr::Rational(1, 2) => Node::Operation(sqrt(cas_to_node(base, table)?)),
            _ => Node::Operation(latex_operation::pow(
                power_base(base, table)?,
                cas_to_node(e, table)?,
            )),
        },
        CasExpr::Log(arg, None) => Node::Operation(ln(cas_to_node(arg, table)?)),
        CasExpr::Log(arg, Some(base)) => Node::Operation(log(
            cas_to_node(base, table)?,
            cas_to_node(arg, table)?,
        )),
        CasExpr::Abs(a) => Node::Operation(abs(cas_to_node(a, table)?)),
        CasExpr::Sin(a) => Node::Operation(sin(cas_to_node(a, table)?)),
        CasExpr::Cos(a) => Node::Operation(cos(cas_to_node(a, table)?)),
        CasExpr::Tan(a) => Node::Operation(tan(cas_to_node(a, table)?)),
        CasExpr::Sinh(a) => Node::Operation(sinh(cas_to_node(a, table)?)),
        CasExpr::Cosh(a) => Node::Operation(cosh(cas_to_node(a, table)?)),
        CasExpr::Tanh(a) => Node::Operation(tanh(cas_to_node(a, table)?)),
        CasExpr::Exp(a) => Node::Operation(exp(cas_to_node(a, table)?)),
    };
    Ok(node)
}

//________________________________ENTRY POINTS____________________________________

fn rewrite(
    node: Node,
    engine: &dyn CasEngine,
    operation: CasOperation,
    substitute_floats: bool,
) -> LatexResult<Node> {
    match node {
        Node::Variable(_) => Ok(node),
        Node::Expression(mut e) => {
            let rewritten = rewrite_tree(e.operation(), engine, operation, substitute_floats)?;
            e.set_operation(rewritten);
            Ok(Node::Expression(e))
        }
        Node::Operation(_) => rewrite_tree(&node, engine, operation, substitute_floats),
    }
}

fn rewrite_tree(
    node: &Node,
    engine: &dyn CasEngine,
    operation: CasOperation,
    substitute_floats: bool,
) -> LatexResult<Node> {
    let (expr, table) = to_external(node, substitute_floats)?;
    debug!("applying {:?}", operation);
    let result = engine.apply(operation, &expr)?;
    from_external(&result, &table)
}

/// Simplifies the tree. Variables are returned unchanged, an expression keeps its name,
/// unit and formatting and only its wrapped node is rewritten.
pub fn simplify(
    node: impl Into<Node>,
    engine: &dyn CasEngine,
    substitute_floats: bool,
) -> LatexResult<Node> {
    rewrite(node.into(), engine, CasOperation::Simplify, substitute_floats)
}

pub fn expand(
    node: impl Into<Node>,
    engine: &dyn CasEngine,
    substitute_floats: bool,
) -> LatexResult<Node> {
    rewrite(node.into(), engine, CasOperation::Expand, substitute_floats)
}

pub fn factor(
    node: impl Into<Node>,
    engine: &dyn CasEngine,
    substitute_floats: bool,
) -> LatexResult<Node> {
    rewrite(node.into(), engine, CasOperation::Factor, substitute_floats)
}

/// Collects terms with respect to `syms`, which must be variables
pub fn collect(
    node: impl Into<Node>,
    syms: &[Node],
    engine: &dyn CasEngine,
    substitute_floats: bool,
) -> LatexResult<Node> {
    let node = node.into();
    let mut variables = Vec::with_capacity(syms.len());
    for s in syms {
        match s {
            Node::Variable(v) => variables.push(v.clone()),
            other => {
                return Err(LatexExprError::WrongArgumentType {
                    expected: "Variable".to_string(),
                    got: other.type_name().to_string(),
                });
            }
        }
    }
    let target = match &node {
        Node::Expression(e) => e.operation().clone(),
        _ => node.clone(),
    };
    if let Node::Variable(_) = target {
        return Ok(node);
    }
    let (expr, table) = to_external(&target, substitute_floats)?;
    let names = variables
        .iter()
        .map(|v| table.symbol_of(v).unwrap_or_else(|| v.name()))
        .collect();
    let result = engine.apply(CasOperation::Collect(names), &expr)?;
    let rewritten = from_external(&result, &table)?;
    match node {
        Node::Expression(mut e) => {
            e.set_operation(rewritten);
            Ok(Node::Expression(e))
        }
        _ => Ok(rewritten),
    }
}

pub fn cancel(
    node: impl Into<Node>,
    engine: &dyn CasEngine,
    substitute_floats: bool,
) -> LatexResult<Node> {
    rewrite(node.into(), engine, CasOperation::Cancel, substitute_floats)
}

/// partial fraction decomposition
pub fn apart(
    node: impl Into<Node>,
    engine: &dyn CasEngine,
    substitute_floats: bool,
) -> LatexResult<Node> {
    rewrite(node.into(), engine, CasOperation::Apart, substitute_floats)
}
