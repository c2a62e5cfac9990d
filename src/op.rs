use std::fmt;

use serde::{Deserialize, Serialize};

/// The operators the evaluator understands.
///
/// An `Op` is an immutable descriptor attached to a binary or unary
/// expression node by the parser; the evaluators only ever read it.
/// `LogicalNot` is unary-only and never reaches binary dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Op {
    /// '+'
    Plus,

    /// '-'
    Minus,

    /// '*'
    Mul,

    /// '/'
    Div,

    /// 'and'
    LogicalAnd,

    /// 'or'
    LogicalOr,

    /// 'not'
    LogicalNot,
}

impl Op {
    /// True for the four numeric/color operators.
    pub fn is_arithmetic(self) -> bool {
        matches!(self, Op::Plus | Op::Minus | Op::Mul | Op::Div)
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Op::Plus => "+",
            Op::Minus => "-",
            Op::Mul => "*",
            Op::Div => "/",
            Op::LogicalAnd => "and",
            Op::LogicalOr => "or",
            Op::LogicalNot => "not",
        };

        write!(f, "{}", symbol)
    }
}
