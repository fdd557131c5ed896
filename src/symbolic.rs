#![allow(non_snake_case)]
/// errors of all parts of the crate
pub mod latex_error;
/// printf-like number formats, exponent shifting, bracketing of negative values and units
///# Example
/// ```
/// use latexexpr::symbolic::latex_format::{NumberFormat, render_value, render_with_unit};
/// let format = NumberFormat::parse("%.2f").unwrap();
/// assert_eq!(render_value(-1.5, &format, 0), r"\left( -1.50 \right)");
/// assert_eq!(render_value(4.34, &format, -2), r"{ 434.00 \cdot 10^{-2} }");
/// assert_eq!(render_with_unit("1.50", "kN", r"\mathrm{%s}"), r"1.50 \ \mathrm{kN}");
/// ```
/// ________________________________________________________________________________________________________________________________
pub mod latex_format;
///____________________________________________________________________________________________________________________________
/// # Variable
/// leaf of the tree: named value with unit, shared by all trees it takes part in
///# Example
/// ```
/// use latexexpr::symbolic::latex_variable::Variable;
/// let v8 = Variable::new("F", None, "kN");
/// assert_eq!(v8.to_string(), "F");
/// v8.set_value(2.34);
/// assert_eq!(v8.to_string(), r"F = 2.34 \ \mathrm{kN}");
/// ```
pub mod latex_variable;
/// # Operation
/// operation node: kind (one of the fixed set) + operands, builder functions for every kind
///# Example
/// ```
/// use latexexpr::symbolic::latex_variable::Variable;
/// use latexexpr::symbolic::latex_operation::{sqrt, sqr, sum};
/// use latexexpr::symbolic::latex_node::LatexNode;
/// use latexexpr::nodes;
/// let a = Variable::new("a", 3.0, "m");
/// let b = Variable::new("b", 4.0, "m");
/// let c = sqrt(sum(nodes![sqr(&a), sqr(&b)]).unwrap());
/// assert_eq!(c.str_symbolic(), r"\sqrt{ {a}^2 + {b}^2 }");
/// assert_eq!(c.str_substituted(), r"\sqrt{ 3.00^2 + 4.00^2 }");
/// assert_eq!(c.result().unwrap(), 5.0);
/// ```
pub mod latex_operation;
/// # Expression
/// named wrapper around a node, produces `name = symbolic = substituted = result unit`
///# Example
/// ```
/// use latexexpr::symbolic::latex_variable::Variable;
/// use latexexpr::symbolic::latex_expression::Expression;
/// let v1 = Variable::new("H_{ello}", 3.25, "m");
/// let v2 = Variable::new("W^{orld}", 5.63, "m");
/// let e1 = Expression::new("E_{xample}", &v1 + &v2, "m");
/// assert_eq!(
///     e1.to_string(),
///     r"E_{xample} = {H_{ello}} + {W^{orld}} = 3.25 + 5.63 = 8.88 \ \mathrm{m}"
/// );
/// ```
pub mod latex_expression;
/// common rendering trait and the node enum
pub mod latex_node;
/// `+ - * /` and unary `-` building operations
pub mod latex_overloading;
/// export of nodes as LaTeX macros (`\def`, `\newcommand`, `\renewcommand`)
///# Example
/// ```
/// use latexexpr::symbolic::latex_variable::Variable;
/// use latexexpr::symbolic::latex_macro::ToLatexVariable;
/// let v = Variable::new("a", 3.25, "m");
/// assert_eq!(
///     v.to_latex_variable_valunit("aValue", "def").unwrap(),
///     r"\def\aValue{3.25 \ \mathrm{m}}"
/// );
/// ```
pub mod latex_macro;
/// translation of trees to and from an external computer algebra system
pub mod latex_cas;
#[cfg(test)]
mod latex_engine_tests;
