//! Centralised error hierarchy for the **expression evaluation core**.
//!
//! Compute dispatch and both evaluators convert every failure mode into one
//! of the variants defined here, so callers see a uniform `Result<T>` alias
//! and the hosting compiler can turn any variant into a positioned
//! diagnostic. No unsupported combination is ever swallowed into a silent
//! absent value.
//!
//! The module **does not** print diagnostics itself.

use thiserror::Error;

use crate::op::Op;
use crate::value::ValueKind;

/// Canonical error type used throughout the evaluation core.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum EvalError {
    /// Compute dispatch has no rule for this operator/kind pairing.
    #[error("unsupported operand types: {left} {op} {right}")]
    UnsupportedOperandTypes {
        op: Op,

        /// Kind of the left operand.
        left: ValueKind,

        /// Kind of the right operand.
        right: ValueKind,
    },

    /// A unary operator was applied to a kind it is not defined for.
    #[error("unsupported operand for unary '{op}': {operand}")]
    UnsupportedUnaryOperand { op: Op, operand: ValueKind },

    /// Both numbers carried a unit and the units differ.
    #[error("incompatible units: '{left_unit}' and '{right_unit}'")]
    IncompatibleUnits {
        left_unit: String,
        right_unit: String,
    },

    /// Division by a zero-valued number amount, never a silent infinity.
    #[error("division by zero")]
    DivisionByZero,

    /// A value used in boolean context has no boolean coercion.
    #[error("a {value} cannot be used in boolean context")]
    MissingBooleanCapability { value: ValueKind },

    /// A variable reference did not resolve through the symbol table.
    #[error("undefined variable '${name}'")]
    UndefinedVariable { name: String },

    /// A binary node flagged as a literal css slash did not have number
    /// literals on both sides. The flag is set by the parser, so this
    /// indicates an upstream bug rather than a user error.
    #[error("literal slash requires number literals on both sides")]
    InvalidSlashOperands,

    /// Expression nesting exceeded the evaluator's recursion guard.
    #[error("expression nesting exceeds {limit} levels")]
    NestingTooDeep { limit: usize },
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, EvalError>;
