//! # Operation
//!
//! Mathematical operation applied to one, two or more operands. Operands may be
//! variables, expressions or other operations, which builds the hierarchy of the tree.
//!
//! The set of operations is fixed ([`OperationKind`]), each kind has an arity class:
//! - n-ary (2 or more operands): `+`, `*`, `max`, `min`
//! - binary: `-`, `/` (as `\frac{}{}`), `//` (as `a / b`), `pow`, `root`, `log`
//! - unary: none, `neg`, `pos`, `abs`, `sqr`, `sqrt`, `sin`, `cos`, `tan`, `sinh`, `cosh`,
//!   `tanh`, `exp`, `ln`, `log10` and the brackets `()`, `[]`, `{}`, `<>`
//!
//! LaTeX emission and numeric evaluation are two tables indexed by the kind
//! ([`OperationKind::latex`], [`OperationKind::evaluate`]); symbolic and substituted
//! rendering use the same emission table and differ only in how operands are rendered.
//! The arity is checked once at construction, so the tables can rely on it.
//!
//! Numeric edge cases (division by zero, logarithm of negative numbers, ...) are not
//! treated specially, they give whatever `f64` arithmetic gives (inf, NaN).
//!
//! # Example
//! ```rust, ignore
//! let v1 = Variable::new("a", 3.0, "m");
//! let v2 = Variable::new("b", 4.0, "m");
//! let o = sqrt(sum(nodes![sqr(&v1), sqr(&v2)])?);
//! assert_eq!(o.str_symbolic(), r"\sqrt{ {a}^2 + {b}^2 }");
//! ```
use crate::symbolic::latex_error::{LatexExprError, LatexResult};
use crate::symbolic::latex_format::{NumberFormat, render_value};
use crate::symbolic::latex_node::{LatexNode, Node};
use itertools::Itertools;
use log::trace;
use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, EnumString};

/// Supported operations, textual keys as used by `from_key`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, strum_macros::Display)]
pub enum OperationKind {
    #[strum(serialize = "")]
    None,
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "-")]
    Sub,
    #[strum(serialize = "*")]
    Mul,
    #[strum(serialize = "/")]
    Div,
    #[strum(serialize = "//")]
    Div2,
    #[strum(serialize = "neg")]
    Neg,
    #[strum(serialize = "pos")]
    Pos,
    #[strum(serialize = "abs")]
    Abs,
    #[strum(serialize = "max")]
    Max,
    #[strum(serialize = "min")]
    Min,
    #[strum(serialize = "pow")]
    Pow,
    #[strum(serialize = "sqr")]
    Sqr,
    #[strum(serialize = "root")]
    Root,
    #[strum(serialize = "sqrt")]
    Sqrt,
    #[strum(serialize = "sin")]
    Sin,
    #[strum(serialize = "cos")]
    Cos,
    #[strum(serialize = "tan")]
    Tan,
    #[strum(serialize = "sinh")]
    Sinh,
    #[strum(serialize = "cosh")]
    Cosh,
    #[strum(serialize = "tanh")]
    Tanh,
    #[strum(serialize = "exp")]
    Exp,
    #[strum(serialize = "log")]
    Log,
    #[strum(serialize = "ln")]
    Ln,
    #[strum(serialize = "log10")]
    Log10,
    #[strum(serialize = "()")]
    RBrackets,
    #[strum(serialize = "[]")]
    SBrackets,
    #[strum(to_string = "{{}}", serialize = "{}")]
    CBrackets,
    #[strum(serialize = "<>")]
    ABrackets,
}

/// Number of operands an operation takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Unary,
    Binary,
    /// two or more
    Nary,
}

impl Arity {
    pub fn accepts(&self, n: usize) -> bool {
        match self {
            Arity::Unary => n == 1,
            Arity::Binary => n == 2,
            Arity::Nary => n >= 2,
        }
    }
    pub fn describe(&self) -> &'static str {
        match self {
            Arity::Unary => "exactly 1",
            Arity::Binary => "exactly 2",
            Arity::Nary => "2 or more",
        }
    }
}

impl OperationKind {
    /// parses the textual key of the operation, e.g. "+", "sqrt", "()"
    pub fn from_key(key: &str) -> LatexResult<OperationKind> {
        OperationKind::from_str(key).map_err(|_| LatexExprError::UnsupportedOperation {
            kind: key.to_string(),
            supported: OperationKind::supported_keys(),
        })
    }
    /// all keys, quoted and comma separated
    pub fn supported_keys() -> String {
        OperationKind::iter().map(|k| format!("'{}'", k)).join(", ")
    }

    pub fn arity(&self) -> Arity {
        use OperationKind::*;
        match self {
            Add | Mul | Max | Min => Arity::Nary,
            Sub | Div | Div2 | Pow | Root | Log => Arity::Binary,
            None | Neg | Pos | Abs | Sqr | Sqrt | Sin | Cos | Tan | Sinh | Cosh | Tanh | Exp
            | Ln | Log10 | RBrackets | SBrackets | CBrackets | ABrackets => Arity::Unary,
        }
    }

    /// LaTeX emission table: combines already rendered operands
    pub fn latex(&self, a: &[String]) -> String {
        use OperationKind::*;
        match self {
            Add => a.join(" + "),
            Mul => a.join(r" \cdot "),
            Max => format!(r"\max{{\left( {} \right)}}", a.join(", ")),
            Min => format!(r"\min{{\left( {} \right)}}", a.join(", ")),
            Sub => format!("{} - {}", a[0], a[1]),
            Div => format!(r"\frac{{ {} }}{{ {} }}", a[0], a[1]),
            Div2 => format!("{} / {}", a[0], a[1]),
            Pow => format!("{{ {} }}^{{ {} }}", a[0], a[1]),
            Root => format!(r"\sqrt[ {} ]{{ {} }}", a[0], a[1]),
            Log => format!(r"\log_{{ {} }}{{ {} }}", a[0], a[1]),
            None | Pos => a[0].clone(),
            Neg => format!(r"\left( - {} \right)", a[0]),
            Abs => format!(r"\left| {} \right|", a[0]),
            Sqr => format!("{}^2", a[0]),
            Sqrt => format!(r"\sqrt{{ {} }}", a[0]),
            Sin => format!(r"\sin{{ {} }}", a[0]),
            Cos => format!(r"\cos{{ {} }}", a[0]),
            Tan => format!(r"\tan{{ {} }}", a[0]),
            Sinh => format!(r"\sinh{{ {} }}", a[0]),
            Cosh => format!(r"\cosh{{ {} }}", a[0]),
            Tanh => format!(r"\tanh{{ {} }}", a[0]),
            Exp => format!(r"\mathrm{{e}}^{{ {} }}", a[0]),
            Ln => format!(r"\ln{{ {} }}", a[0]),
            Log10 => format!(r"\log_{{10}}{{ {} }}", a[0]),
            RBrackets => format!(r"\left( {} \right)", a[0]),
            SBrackets => format!(r"\left[ {} \right]", a[0]),
            CBrackets => format!(r"\left\{{ {} \right\}}", a[0]),
            ABrackets => format!(r"\left\langle {} \right\rangle", a[0]),
        }
    }

    /// Evaluation table: combines numeric results of operands
    pub fn evaluate(&self, v: &[f64]) -> f64 {
        use OperationKind::*;
        match self {
            Add => v.iter().sum(),
            Mul => v.iter().product(),
            Max => v.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            Min => v.iter().copied().fold(f64::INFINITY, f64::min),
            Sub => v[0] - v[1],
            Div | Div2 => v[0] / v[1],
            Pow => v[0].powf(v[1]),
            Root => v[1].powf(1.0 / v[0]),
            Log => v[1].ln() / v[0].ln(),
            None | Pos | RBrackets | SBrackets | CBrackets | ABrackets => v[0],
            Neg => -v[0],
            Abs => v[0].abs(),
            Sqr => v[0].powi(2),
            Sqrt => v[0].sqrt(),
            Sin => v[0].sin(),
            Cos => v[0].cos(),
            Tan => v[0].tan(),
            Sinh => v[0].sinh(),
            Cosh => v[0].cosh(),
            Tanh => v[0].tanh(),
            Exp => v[0].exp(),
            Ln => v[0].ln(),
            Log10 => v[0].ln() / 10f64.ln(),
        }
    }
}

/// which rendering of operands is requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Symbolic,
    Substituted,
}

/// Operation node: kind + operands
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    kind: OperationKind,
    args: Vec<Node>,
    format: NumberFormat,
    exponent: i32,
}

impl Operation {
    /// Creates operation of given kind, checks number of operands
    pub fn new(kind: OperationKind, args: Vec<Node>) -> LatexResult<Operation> {
        let arity = kind.arity();
        if !arity.accepts(args.len()) {
            return Err(LatexExprError::WrongArity {
                kind: kind.to_string(),
                expected: arity.describe().to_string(),
                got: args.len(),
            });
        }
        trace!("operation '{}' with {} operand(s)", kind, args.len());
        Ok(Operation {
            kind,
            args,
            format: NumberFormat::default(),
            exponent: 0,
        })
    }
    /// Creates operation from its textual key, e.g. `Operation::from_key("+", nodes![a, b])`
    pub fn from_key(key: &str, args: Vec<Node>) -> LatexResult<Operation> {
        Operation::new(OperationKind::from_key(key)?, args)
    }
    // arity is guaranteed by the callers: the fixed-arity builders below
    fn unary(kind: OperationKind, a: Node) -> Operation {
        Operation {
            kind,
            args: vec![a],
            format: NumberFormat::default(),
            exponent: 0,
        }
    }
    fn binary(kind: OperationKind, a: Node, b: Node) -> Operation {
        Operation {
            kind,
            args: vec![a, b],
            format: NumberFormat::default(),
            exponent: 0,
        }
    }

    pub fn with_format(mut self, pattern: &str) -> LatexResult<Operation> {
        self.format = NumberFormat::parse(pattern)?;
        Ok(self)
    }
    pub fn with_number_format(mut self, format: NumberFormat) -> Operation {
        self.format = format;
        self
    }
    pub fn with_exponent(mut self, exponent: i32) -> Operation {
        self.exponent = exponent;
        self
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }
    pub fn args(&self) -> &[Node] {
        &self.args
    }

    /// renders operands in the requested mode and combines them by the emission table
    pub fn render(&self, mode: RenderMode) -> String {
        let rendered: Vec<String> = self
            .args
            .iter()
            .map(|a| match mode {
                RenderMode::Symbolic => a.str_symbolic(),
                RenderMode::Substituted => a.str_substituted(),
            })
            .collect();
        self.kind.latex(&rendered)
    }
}

impl LatexNode for Operation {
    fn name(&self) -> String {
        String::new()
    }
    fn unit(&self) -> String {
        String::new()
    }
    fn number_format(&self) -> NumberFormat {
        self.format.clone()
    }
    fn exponent(&self) -> i32 {
        self.exponent
    }
    fn is_symbolic(&self) -> bool {
        self.args.iter().any(|a| a.is_symbolic())
    }
    fn result(&self) -> LatexResult<f64> {
        let values = self
            .args
            .iter()
            .map(|a| a.result())
            .collect::<LatexResult<Vec<f64>>>()?;
        Ok(self.kind.evaluate(&values))
    }
    fn str_symbolic(&self) -> String {
        self.render(RenderMode::Symbolic)
    }
    fn str_substituted(&self) -> String {
        self.render(RenderMode::Substituted)
    }
    fn str_result(&self, format: Option<&NumberFormat>, exponent: Option<i32>) -> LatexResult<String> {
        let result = self.result()?;
        Ok(render_value(
            result,
            format.unwrap_or(&self.format),
            exponent.unwrap_or(self.exponent),
        ))
    }
    /// `symbolic = substituted`, variables without value stay as `{name}` in both halves
    fn str_full(&self) -> String {
        format!("{} = {}", self.str_symbolic(), self.str_substituted())
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.str_full())
    }
}

//___________________________________BUILDERS____________________________________

fn nary<I, T>(kind: OperationKind, args: I) -> LatexResult<Operation>
where
    I: IntoIterator<Item = T>,
    T: Into<Node>,
{
    Operation::new(kind, args.into_iter().map(Into::into).collect())
}

/// `arg0 + arg1 + ... + argN`
pub fn sum<I: IntoIterator<Item = T>, T: Into<Node>>(args: I) -> LatexResult<Operation> {
    nary(OperationKind::Add, args)
}
/// alias for [`sum`]
pub fn add<I: IntoIterator<Item = T>, T: Into<Node>>(args: I) -> LatexResult<Operation> {
    sum(args)
}
/// alias for [`sum`]
pub fn plus<I: IntoIterator<Item = T>, T: Into<Node>>(args: I) -> LatexResult<Operation> {
    sum(args)
}
/// `arg0 \cdot arg1 \cdot ... \cdot argN`
pub fn mul<I: IntoIterator<Item = T>, T: Into<Node>>(args: I) -> LatexResult<Operation> {
    nary(OperationKind::Mul, args)
}
/// alias for [`mul`]
pub fn times<I: IntoIterator<Item = T>, T: Into<Node>>(args: I) -> LatexResult<Operation> {
    mul(args)
}
pub fn max<I: IntoIterator<Item = T>, T: Into<Node>>(args: I) -> LatexResult<Operation> {
    nary(OperationKind::Max, args)
}
pub fn min<I: IntoIterator<Item = T>, T: Into<Node>>(args: I) -> LatexResult<Operation> {
    nary(OperationKind::Min, args)
}
/// two-operand sum, used by the `+` operator
pub fn add2(a: impl Into<Node>, b: impl Into<Node>) -> Operation {
    Operation::binary(OperationKind::Add, a.into(), b.into())
}
/// two-operand product, used by the `*` operator
pub fn mul2(a: impl Into<Node>, b: impl Into<Node>) -> Operation {
    Operation::binary(OperationKind::Mul, a.into(), b.into())
}

/// `a - b`
pub fn sub(a: impl Into<Node>, b: impl Into<Node>) -> Operation {
    Operation::binary(OperationKind::Sub, a.into(), b.into())
}
/// alias for [`sub`]
pub fn minus(a: impl Into<Node>, b: impl Into<Node>) -> Operation {
    sub(a, b)
}
/// division typeset as `\frac{ a }{ b }`
pub fn div(a: impl Into<Node>, b: impl Into<Node>) -> Operation {
    Operation::binary(OperationKind::Div, a.into(), b.into())
}
/// division typeset as `a / b`
pub fn div2(a: impl Into<Node>, b: impl Into<Node>) -> Operation {
    Operation::binary(OperationKind::Div2, a.into(), b.into())
}
/// `a^b`
pub fn pow(a: impl Into<Node>, b: impl Into<Node>) -> Operation {
    Operation::binary(OperationKind::Pow, a.into(), b.into())
}
/// `b^(1/a)`, typeset as `\sqrt[ a ]{ b }`
pub fn root(a: impl Into<Node>, b: impl Into<Node>) -> Operation {
    Operation::binary(OperationKind::Root, a.into(), b.into())
}
/// logarithm of `b` with base `a`
pub fn log(a: impl Into<Node>, b: impl Into<Node>) -> Operation {
    Operation::binary(OperationKind::Log, a.into(), b.into())
}

/// operation doing nothing, renders its operand as is
pub fn none(a: impl Into<Node>) -> Operation {
    Operation::unary(OperationKind::None, a.into())
}
pub fn neg(a: impl Into<Node>) -> Operation {
    Operation::unary(OperationKind::Neg, a.into())
}
/// "positivition", does nothing actually
pub fn pos(a: impl Into<Node>) -> Operation {
    Operation::unary(OperationKind::Pos, a.into())
}
pub fn abs(a: impl Into<Node>) -> Operation {
    Operation::unary(OperationKind::Abs, a.into())
}
pub fn sqr(a: impl Into<Node>) -> Operation {
    Operation::unary(OperationKind::Sqr, a.into())
}
pub fn sqrt(a: impl Into<Node>) -> Operation {
    Operation::unary(OperationKind::Sqrt, a.into())
}
pub fn sin(a: impl Into<Node>) -> Operation {
    Operation::unary(OperationKind::Sin, a.into())
}
pub fn cos(a: impl Into<Node>) -> Operation {
    Operation::unary(OperationKind::Cos, a.into())
}
pub fn tan(a: impl Into<Node>) -> Operation {
    Operation::unary(OperationKind::Tan, a.into())
}
pub fn sinh(a: impl Into<Node>) -> Operation {
    Operation::unary(OperationKind::Sinh, a.into())
}
pub fn cosh(a: impl Into<Node>) -> Operation {
    Operation::unary(OperationKind::Cosh, a.into())
}
pub fn tanh(a: impl Into<Node>) -> Operation {
    Operation::unary(OperationKind::Tanh, a.into())
}
pub fn exp(a: impl Into<Node>) -> Operation {
    Operation::unary(OperationKind::Exp, a.into())
}
pub fn ln(a: impl Into<Node>) -> Operation {
    Operation::unary(OperationKind::Ln, a.into())
}
pub fn log10(a: impl Into<Node>) -> Operation {
    Operation::unary(OperationKind::Log10, a.into())
}
/// wraps operand into `\left( ... \right)`
pub fn rbrackets(a: impl Into<Node>) -> Operation {
    Operation::unary(OperationKind::RBrackets, a.into())
}
/// alias for [`rbrackets`]
pub fn brackets(a: impl Into<Node>) -> Operation {
    rbrackets(a)
}
/// wraps operand into `\left[ ... \right]`
pub fn sbrackets(a: impl Into<Node>) -> Operation {
    Operation::unary(OperationKind::SBrackets, a.into())
}
/// wraps operand into `\left\{ ... \right\}`
pub fn cbrackets(a: impl Into<Node>) -> Operation {
    Operation::unary(OperationKind::CBrackets, a.into())
}
/// wraps operand into `\left\langle ... \right\rangle`
pub fn abrackets(a: impl Into<Node>) -> Operation {
    Operation::unary(OperationKind::ABrackets, a.into())
}
