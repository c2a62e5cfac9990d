//! The two recursive tree-walking evaluators: arithmetic mode for general
//! expression positions and boolean-context mode for conditional positions.
//!
//! Both modes are eager: left and right are always fully reduced before the
//! operator is applied, so symbol-table lookups happen on both sides in a
//! deterministic order. Neither evaluator holds state across calls.

use log::{debug, info};

use crate::compute::{compute, compute_boolean};
use crate::error::{EvalError, Result};
use crate::expr::Expr;
use crate::op::Op;
use crate::symbols::SymbolTable;
use crate::value::{Value, ValueKind};

/// Recursion guard; nesting past this depth fails instead of overflowing
/// the stack on a pathological tree.
pub const MAX_DEPTH: usize = 256;

/// Folds an expression tree down to a single concrete value.
pub fn evaluate(expr: &Expr, symbols: &SymbolTable) -> Result<Value> {
    Evaluator::new(symbols).evaluate(expr)
}

/// Folds an expression tree appearing in a conditional position down to a
/// `Boolean` value.
pub fn evaluate_boolean(expr: &Expr, symbols: &SymbolTable) -> Result<Value> {
    Evaluator::new(symbols).evaluate_boolean(expr)
}

/// A single evaluation pass over one tree, borrowing the symbol table
/// read-only for its duration.
pub struct Evaluator<'a> {
    symbols: &'a SymbolTable,
}

impl<'a> Evaluator<'a> {
    pub fn new(symbols: &'a SymbolTable) -> Self {
        Evaluator { symbols }
    }

    /// Arithmetic-mode evaluation.
    pub fn evaluate(&self, expr: &Expr) -> Result<Value> {
        let value = self.eval(expr, 0)?;
        info!("Expression evaluated to: {}", value);
        Ok(value)
    }

    fn eval(&self, expr: &Expr, depth: usize) -> Result<Value> {
        check_depth(depth)?;
        debug!("Evaluating expression: {:?}", expr);

        match expr {
            // an already-reduced literal evaluates to itself
            Expr::Literal(value) => Ok(value.clone()),

            Expr::Variable(name) => {
                let resolved = self.resolve(name)?;
                self.eval(&resolved, depth + 1)
            }

            Expr::Unary { op, operand } => {
                let value = self.eval(operand, depth + 1)?;
                apply_unary(*op, value)
            }

            Expr::Binary {
                left,
                op,
                right,
                css_slash,
            } => {
                // A parser-flagged literal slash is never dispatched as
                // division; it folds to an unquoted string instead.
                if *css_slash && *op == Op::Div {
                    return render_css_slash(left, right);
                }

                let lval = self.eval(left, depth + 1)?;
                let rval = self.eval(right, depth + 1)?;
                debug!("Left operand: {}, Right operand: {}", lval, rval);

                compute(*op, &lval, &rval)
            }
        }
    }

    /// Boolean-context evaluation; always a `Boolean` on success.
    pub fn evaluate_boolean(&self, expr: &Expr) -> Result<Value> {
        let value = Value::Boolean(self.eval_boolean(expr, 0)?);
        info!("Boolean context evaluated to: {}", value);
        Ok(value)
    }

    fn eval_boolean(&self, expr: &Expr, depth: usize) -> Result<bool> {
        check_depth(depth)?;
        debug!("Evaluating in boolean context: {:?}", expr);

        match expr {
            Expr::Literal(value) => coerce(value),

            Expr::Variable(name) => {
                let resolved = self.resolve(name)?;
                self.eval_boolean(&resolved, depth + 1)
            }

            Expr::Unary { op, operand } => match op {
                Op::LogicalNot => Ok(!self.eval_boolean(operand, depth + 1)?),

                // operands in boolean context are boolean-typed, and 'not'
                // is the only unary operator defined over booleans
                op => Err(EvalError::UnsupportedUnaryOperand {
                    op: *op,
                    operand: ValueKind::Boolean,
                }),
            },

            Expr::Binary { left, op, right, .. } => {
                // both sides reduce before combination, same ordering as
                // arithmetic mode
                let lval = Value::Boolean(self.eval_boolean(left, depth + 1)?);
                let rval = Value::Boolean(self.eval_boolean(right, depth + 1)?);

                coerce(&compute_boolean(*op, &lval, &rval)?)
            }
        }
    }

    fn resolve(&self, name: &str) -> Result<Expr> {
        debug!("Looking up variable '${}'", name);

        self.symbols
            .resolve(name)
            .ok_or_else(|| EvalError::UndefinedVariable {
                name: name.to_string(),
            })
    }
}

/// Coerces a leaf value through its truthiness capability.
fn coerce(value: &Value) -> Result<bool> {
    value
        .truthiness()
        .ok_or(EvalError::MissingBooleanCapability { value: value.kind() })
}

/// The only unary arithmetic operator is minus over a number; it produces a
/// fresh negated value and leaves the source leaf untouched.
fn apply_unary(op: Op, value: Value) -> Result<Value> {
    match (op, value) {
        (Op::Minus, Value::Number { amount, unit }) => Ok(Value::Number {
            amount: -amount,
            unit,
        }),

        (op, value) => Err(EvalError::UnsupportedUnaryOperand {
            op,
            operand: value.kind(),
        }),
    }
}

/// Folds a literal-slash node like `12px/1.5` into the unquoted string
/// `"12px/1.5"`. Both sides must be number literals; the parser guarantees
/// this when it sets the flag, so anything else is surfaced as an upstream
/// contract breach.
fn render_css_slash(left: &Expr, right: &Expr) -> Result<Value> {
    match (left, right) {
        (Expr::Literal(lval @ Value::Number { .. }), Expr::Literal(rval @ Value::Number { .. })) => {
            Ok(Value::unquoted(format!("{}/{}", lval, rval)))
        }

        _ => Err(EvalError::InvalidSlashOperands),
    }
}

fn check_depth(depth: usize) -> Result<()> {
    if depth > MAX_DEPTH {
        Err(EvalError::NestingTooDeep { limit: MAX_DEPTH })
    } else {
        Ok(())
    }
}
