use crate::expr::Expr;

/// Converts an expression tree to a prefix diagnostic form
/// (no heap allocations except `String` joins for output).
pub struct Printer;

impl Printer {
    pub fn print(expr: &Expr) -> String {
        match expr {
            // ── binary operator / literal slash ────────────────────────
            Expr::Binary {
                left,
                op,
                right,
                css_slash,
            } => {
                if *css_slash {
                    format!("(css-slash {} {})", Self::print(left), Self::print(right))
                } else {
                    format!("({} {} {})", op, Self::print(left), Self::print(right))
                }
            }

            // ── unary operator ─────────────────────────────────────────
            Expr::Unary { op, operand } => format!("({} {})", op, Self::print(operand)),

            // ── literal leaf ───────────────────────────────────────────
            Expr::Literal(value) => value.to_string(),

            // ── variable reference ─────────────────────────────────────
            Expr::Variable(name) => format!("${}", name),
        }
    }
}
