//! # Operator overloading
//!
//! Arithmetic operators on tree nodes build [`Operation`]s instead of computing numbers:
//! `&a + &b` is the same as `add2(&a, &b)`, `-&a` is `neg(&a)`, and so on. Any side may also
//! be a plain `f64` or `i32`, which is wrapped into a literal variable.
//!
//! | operator | kind |
//! |---|---|
//! | `a + b` | `+` |
//! | `a - b` | `-` |
//! | `a * b` | `*` |
//! | `a / b` | `/` (`\frac{}{}`) |
//! | `-a` | `neg` |
//!
//! Rust has no operators for power and slash division, so they come as methods of
//! [`LatexOps`]: `a.pow(2)`, `a.div2(&b)`.
//!
//! Operands passed by value are moved into the new node. Variables are shared handles,
//! so `v.clone() + 1` still refers to the same value cell as `v`.
use crate::symbolic::latex_expression::Expression;
use crate::symbolic::latex_node::Node;
use crate::symbolic::latex_operation::{self, Operation, add2, div, mul2, neg, sub};
use crate::symbolic::latex_variable::Variable;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

// node type on the left, anything convertible to a node on the right
macro_rules! impl_node_ops {
    ($($t:ty),*) => {
        $(
            impl<R: Into<Node>> Add<R> for $t {
                type Output = Operation;
                fn add(self, rhs: R) -> Operation {
                    add2(self, rhs)
                }
            }
            impl<R: Into<Node>> Sub<R> for $t {
                type Output = Operation;
                fn sub(self, rhs: R) -> Operation {
                    sub(self, rhs)
                }
            }
            impl<R: Into<Node>> Mul<R> for $t {
                type Output = Operation;
                fn mul(self, rhs: R) -> Operation {
                    mul2(self, rhs)
                }
            }
            impl<R: Into<Node>> Div<R> for $t {
                type Output = Operation;
                fn div(self, rhs: R) -> Operation {
                    div(self, rhs)
                }
            }
            impl Neg for $t {
                type Output = Operation;
                fn neg(self) -> Operation {
                    neg(self)
                }
            }
            impl LatexOps for $t {}
        )*
    };
}

impl_node_ops!(
    Node, &Node, Variable, &Variable, Operation, &Operation, Expression, &Expression
);

// number on the left
macro_rules! impl_literal_ops {
    ($lit:ty => $($t:ty),*) => {
        $(
            impl Add<$t> for $lit {
                type Output = Operation;
                fn add(self, rhs: $t) -> Operation {
                    add2(self, rhs)
                }
            }
            impl Sub<$t> for $lit {
                type Output = Operation;
                fn sub(self, rhs: $t) -> Operation {
                    sub(self, rhs)
                }
            }
            impl Mul<$t> for $lit {
                type Output = Operation;
                fn mul(self, rhs: $t) -> Operation {
                    mul2(self, rhs)
                }
            }
            impl Div<$t> for $lit {
                type Output = Operation;
                fn div(self, rhs: $t) -> Operation {
                    div(self, rhs)
                }
            }
        )*
    };
}

impl_literal_ops!(f64 => Node, &Node, Variable, &Variable, Operation, &Operation, Expression, &Expression);
impl_literal_ops!(i32 => Node, &Node, Variable, &Variable, Operation, &Operation, Expression, &Expression);

impl<R: Into<Node>> AddAssign<R> for Node {
    fn add_assign(&mut self, rhs: R) {
        *self = Node::Operation(add2(self.clone(), rhs));
    }
}

impl<R: Into<Node>> SubAssign<R> for Node {
    fn sub_assign(&mut self, rhs: R) {
        *self = Node::Operation(sub(self.clone(), rhs));
    }
}

impl<R: Into<Node>> MulAssign<R> for Node {
    fn mul_assign(&mut self, rhs: R) {
        *self = Node::Operation(mul2(self.clone(), rhs));
    }
}

impl<R: Into<Node>> DivAssign<R> for Node {
    fn div_assign(&mut self, rhs: R) {
        *self = Node::Operation(div(self.clone(), rhs));
    }
}

/// Method form of the operations without an operator symbol
pub trait LatexOps: Into<Node> + Sized {
    /// `{ self }^{ exponent }`
    fn pow(self, exponent: impl Into<Node>) -> Operation {
        latex_operation::pow(self, exponent)
    }
    /// `self / rhs` typeset with a slash
    fn div2(self, rhs: impl Into<Node>) -> Operation {
        latex_operation::div2(self, rhs)
    }
    fn sqr(self) -> Operation {
        latex_operation::sqr(self)
    }
    fn sqrt(self) -> Operation {
        latex_operation::sqrt(self)
    }
    /// unary plus
    fn pos(self) -> Operation {
        latex_operation::pos(self)
    }
    fn abs(self) -> Operation {
        latex_operation::abs(self)
    }
    /// wraps into round brackets
    fn brackets(self) -> Operation {
        latex_operation::rbrackets(self)
    }
}
