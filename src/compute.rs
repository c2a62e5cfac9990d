//! Typed compute dispatch: given an operator and two concrete values,
//! produce a result value or report exactly why the combination is
//! undefined.
//!
//! Dispatch is an exhaustive match over `(Op, left kind, right kind)`; the
//! compiler's exhaustiveness checking stands in for a runtime dispatch
//! table, so an unhandled pairing is a compile error rather than a missing
//! cell discovered at runtime.

use log::debug;

use crate::error::{EvalError, Result};
use crate::op::Op;
use crate::value::{pack_hex, unpack_hex, Value, ValueKind};

/// Applies a binary operator to two concrete values.
///
/// Any (op, kind, kind) combination outside the supported matrix fails with
/// [`EvalError::UnsupportedOperandTypes`] naming the operator and both
/// operand kinds; it never silently produces an absent value.
pub fn compute(op: Op, left: &Value, right: &Value) -> Result<Value> {
    debug!("Dispatching: {} {} {}", left, op, right);

    match op {
        Op::Plus => match (left, right) {
            (Value::Number { amount: a, unit: ua }, Value::Number { amount: b, unit: ub }) => {
                number_math(op, *a, ua, *b, ub)
            }

            // hex + number is commutative
            (Value::Number { amount, .. }, Value::HexColor { hex })
            | (Value::HexColor { hex }, Value::Number { amount, .. }) => {
                hex_color_math(op, *hex, *amount)
            }

            (Value::RgbColor { r, g, b }, Value::Number { amount, .. }) => {
                rgb_color_math(op, *r, *g, *b, *amount)
            }

            (Value::RgbaColor { r, g, b, a }, Value::Number { amount, .. }) => {
                rgba_color_math(op, *r, *g, *b, *a, *amount)
            }

            _ => Err(unsupported(op, left, right)),
        },

        Op::Minus | Op::Mul | Op::Div => match (left, right) {
            (Value::Number { amount: a, unit: ua }, Value::Number { amount: b, unit: ub }) => {
                number_math(op, *a, ua, *b, ub)
            }

            (Value::HexColor { hex }, Value::Number { amount, .. }) => {
                hex_color_math(op, *hex, *amount)
            }

            (Value::RgbColor { r, g, b }, Value::Number { amount, .. }) => {
                rgb_color_math(op, *r, *g, *b, *amount)
            }

            (Value::RgbaColor { r, g, b, a }, Value::Number { amount, .. }) => {
                rgba_color_math(op, *r, *g, *b, *a, *amount)
            }

            _ => Err(unsupported(op, left, right)),
        },

        Op::LogicalAnd | Op::LogicalOr | Op::LogicalNot => Err(unsupported(op, left, right)),
    }
}

/// Applies a logical binary operator to two boolean values.
///
/// Defined only for `LogicalAnd`/`LogicalOr` over `(Boolean, Boolean)`;
/// everything else is an unsupported pairing.
pub fn compute_boolean(op: Op, left: &Value, right: &Value) -> Result<Value> {
    debug!("Dispatching boolean: {} {} {}", left, op, right);

    match (op, left, right) {
        (Op::LogicalAnd, Value::Boolean(a), Value::Boolean(b)) => Ok(Value::Boolean(*a && *b)),

        (Op::LogicalOr, Value::Boolean(a), Value::Boolean(b)) => Ok(Value::Boolean(*a || *b)),

        _ => Err(unsupported(op, left, right)),
    }
}

/// Reports whether a value is one of the foldable constant kinds, used by
/// the pipeline to decide whether further constant-folding passes apply.
pub fn is_constant_value(value: &Value) -> bool {
    matches!(
        value.kind(),
        ValueKind::Number | ValueKind::HexColor | ValueKind::RgbColor | ValueKind::RgbaColor
    )
}

fn unsupported(op: Op, left: &Value, right: &Value) -> EvalError {
    EvalError::UnsupportedOperandTypes {
        op,
        left: left.kind(),
        right: right.kind(),
    }
}

/// Raw f64 arithmetic shared by number math and channel math.
fn arith(op: Op, a: f64, b: f64) -> Result<f64> {
    match op {
        Op::Plus => Ok(a + b),

        Op::Minus => Ok(a - b),

        Op::Mul => Ok(a * b),

        Op::Div if b == 0.0 => Err(EvalError::DivisionByZero),

        Op::Div => Ok(a / b),

        // compute() routes logical operators away before reaching here
        Op::LogicalAnd | Op::LogicalOr | Op::LogicalNot => Err(EvalError::UnsupportedOperandTypes {
            op,
            left: ValueKind::Number,
            right: ValueKind::Number,
        }),
    }
}

/// Unit rule for number/number math: differing non-empty units are an
/// error, a single unit is adopted, no units stays unitless.
fn unify_units(left: &Option<String>, right: &Option<String>) -> Result<Option<String>> {
    match (left, right) {
        (Some(lu), Some(ru)) if lu != ru => Err(EvalError::IncompatibleUnits {
            left_unit: lu.clone(),
            right_unit: ru.clone(),
        }),

        (Some(lu), _) => Ok(Some(lu.clone())),

        (_, ru) => Ok(ru.clone()),
    }
}

fn number_math(op: Op, a: f64, ua: &Option<String>, b: f64, ub: &Option<String>) -> Result<Value> {
    let unit = unify_units(ua, ub)?;
    let amount = arith(op, a, b)?;

    Ok(Value::Number { amount, unit })
}

/// Applies the operator to one color channel and clamps to [0, 255].
fn channel(op: Op, c: u8, n: f64) -> Result<u8> {
    let raw = arith(op, f64::from(c), n)?;

    Ok(raw.round().clamp(0.0, 255.0) as u8)
}

fn hex_color_math(op: Op, hex: u32, n: f64) -> Result<Value> {
    let (r, g, b) = unpack_hex(hex);

    Ok(Value::HexColor {
        hex: pack_hex(channel(op, r, n)?, channel(op, g, n)?, channel(op, b, n)?),
    })
}

fn rgb_color_math(op: Op, r: u8, g: u8, b: u8, n: f64) -> Result<Value> {
    Ok(Value::RgbColor {
        r: channel(op, r, n)?,
        g: channel(op, g, n)?,
        b: channel(op, b, n)?,
    })
}

fn rgba_color_math(op: Op, r: u8, g: u8, b: u8, a: f64, n: f64) -> Result<Value> {
    // alpha passes through untouched
    Ok(Value::RgbaColor {
        r: channel(op, r, n)?,
        g: channel(op, g, n)?,
        b: channel(op, b, n)?,
        a,
    })
}
