use serde::{Deserialize, Serialize};

use crate::op::Op;
use crate::value::Value;

/// An expression tree node, as produced by the hosting parser.
///
/// The tree is immutable during evaluation; even unary minus produces a
/// fresh [`Value`] rather than rewriting the leaf it came from, so the same
/// subtree can safely be evaluated more than once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    // A binary operation. `css_slash` is set by the parser when a '/' is a
    // literal CSS shorthand separator (e.g. `12px/1.5`) rather than division.
    Binary {
        left: Box<Expr>,
        op: Op,
        right: Box<Expr>,

        #[serde(default)]
        css_slash: bool,
    },

    // A unary operation
    Unary { op: Op, operand: Box<Expr> },

    // A literal leaf carrying a concrete value
    Literal(Value),

    // A variable reference, resolved through the symbol table
    Variable(String),
}

impl Expr {
    pub fn binary(left: Expr, op: Op, right: Expr) -> Self {
        Expr::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
            css_slash: false,
        }
    }

    /// A division node flagged by the parser as a literal slash.
    pub fn css_slash(left: Expr, right: Expr) -> Self {
        Expr::Binary {
            left: Box::new(left),
            op: Op::Div,
            right: Box::new(right),
            css_slash: true,
        }
    }

    pub fn unary(op: Op, operand: Expr) -> Self {
        Expr::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn literal(value: Value) -> Self {
        Expr::Literal(value)
    }

    pub fn variable<S: Into<String>>(name: S) -> Self {
        Expr::Variable(name.into())
    }
}
