// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
//! # latexexpr
//!
//! Expression trees of named, unit-bearing variables rendered as LaTeX in three ways:
//! symbolic (names only), substituted (values inserted) and numeric result with unit,
//! combined into `name = symbolic = substituted = result unit`.
//!
//! ```
//! use latexexpr::prelude::*;
//! let v1 = Variable::new("H_{ello}", 3.25, "m");
//! let v2 = Variable::new("W^{orld}", 5.63, "m");
//! let e1 = Expression::new("E_{xample}", &v1 + &v2, "m");
//! println!("{}", e1);
//! ```
pub mod Utils;
pub mod symbolic;

/// everything needed to build and render trees
pub mod prelude {
    pub use crate::nodes;
    pub use crate::symbolic::latex_error::{LatexExprError, LatexResult};
    pub use crate::symbolic::latex_expression::Expression;
    pub use crate::symbolic::latex_format::NumberFormat;
    pub use crate::symbolic::latex_macro::{ToLatexVariable, to_latex_variable};
    pub use crate::symbolic::latex_node::{LatexNode, Node};
    pub use crate::symbolic::latex_operation::*;
    pub use crate::symbolic::latex_overloading::LatexOps;
    pub use crate::symbolic::latex_variable::{Variable, e, one, pi, two, zero};
}
