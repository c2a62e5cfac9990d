use std::fmt;

use serde::{Deserialize, Serialize};

/// O(1) discriminant for a [`Value`], used by compute dispatch and by error
/// reporting. Kept separate from `Value` so errors can name an operand kind
/// without cloning the operand itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueKind {
    Number,

    HexColor,

    RgbColor,

    RgbaColor,

    Boolean,

    String,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Number => "number",
            ValueKind::HexColor => "hex color",
            ValueKind::RgbColor => "rgb color",
            ValueKind::RgbaColor => "rgba color",
            ValueKind::Boolean => "boolean",
            ValueKind::String => "string",
        };

        write!(f, "{}", name)
    }
}

/// A concrete stylesheet value, the closed set of things an expression can
/// fold down to.
///
/// Invariants: color channels are always in [0, 255] (compute clamps after
/// every color operation), `RgbaColor` alpha stays in [0, 1], and a `Number`
/// unit is `None` rather than an empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// A numeric quantity, optionally carrying a unit such as `px` or `em`.
    Number { amount: f64, unit: Option<String> },

    /// A 24-bit packed RGB hex literal, e.g. `#ff0000`.
    HexColor { hex: u32 },

    /// An `rgb(r, g, b)` color.
    RgbColor { r: u8, g: u8, b: u8 },

    /// An `rgba(r, g, b, a)` color; alpha is untouched by arithmetic.
    RgbaColor { r: u8, g: u8, b: u8, a: f64 },

    /// A boolean, produced by boolean-context evaluation.
    Boolean(bool),

    /// A string; `quoted` records whether the source literal carried quotes.
    Str { quoted: bool, text: String },
}

impl Value {
    /// A unitless number.
    pub fn number(amount: f64) -> Self {
        Value::Number { amount, unit: None }
    }

    /// A number with a unit; an empty unit normalizes to `None`.
    pub fn number_with_unit(amount: f64, unit: &str) -> Self {
        let unit = if unit.is_empty() {
            None
        } else {
            Some(unit.to_string())
        };

        Value::Number { amount, unit }
    }

    /// A hex color; only the low 24 bits are kept.
    pub fn hex_color(hex: u32) -> Self {
        Value::HexColor { hex: hex & 0x00ff_ffff }
    }

    /// An unquoted string, as produced by the css-slash path.
    pub fn unquoted<S: Into<String>>(text: S) -> Self {
        Value::Str {
            quoted: false,
            text: text.into(),
        }
    }

    /// Reports which kind this value is.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Number { .. } => ValueKind::Number,
            Value::HexColor { .. } => ValueKind::HexColor,
            Value::RgbColor { .. } => ValueKind::RgbColor,
            Value::RgbaColor { .. } => ValueKind::RgbaColor,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Str { .. } => ValueKind::String,
        }
    }

    /// Boolean-coercion capability.
    ///
    /// `Some` for kinds that make sense in a conditional position: a boolean
    /// is itself, a number is truthy when non-zero, a string when non-empty.
    /// Colors have no meaningful truth value and return `None`, which the
    /// boolean-context evaluator reports as a missing capability.
    pub fn truthiness(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            Value::Number { amount, .. } => Some(*amount != 0.0),
            Value::Str { text, .. } => Some(!text.is_empty()),
            Value::HexColor { .. } | Value::RgbColor { .. } | Value::RgbaColor { .. } => None,
        }
    }
}

/// Splits a packed 24-bit hex word into its (r, g, b) channels.
pub fn unpack_hex(hex: u32) -> (u8, u8, u8) {
    (
        ((hex >> 16) & 0xff) as u8,
        ((hex >> 8) & 0xff) as u8,
        (hex & 0xff) as u8,
    )
}

/// Packs (r, g, b) channels back into a 24-bit hex word.
pub fn pack_hex(r: u8, g: u8, b: u8) -> u32 {
    (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number { amount, unit } => {
                // 12.0 renders as "12", 1.5 stays "1.5"
                if amount.fract() == 0.0 {
                    write!(f, "{:.0}", amount)?;
                } else {
                    write!(f, "{}", amount)?;
                }

                match unit {
                    Some(unit) => write!(f, "{}", unit),
                    None => Ok(()),
                }
            }

            Value::HexColor { hex } => write!(f, "#{:06x}", hex),

            Value::RgbColor { r, g, b } => write!(f, "rgb({}, {}, {})", r, g, b),

            Value::RgbaColor { r, g, b, a } => write!(f, "rgba({}, {}, {}, {})", r, g, b, a),

            Value::Boolean(b) => write!(f, "{}", b),

            Value::Str { quoted, text } => {
                if *quoted {
                    write!(f, "\"{}\"", text)
                } else {
                    write!(f, "{}", text)
                }
            }
        }
    }
}
