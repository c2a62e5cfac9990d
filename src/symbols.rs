use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use log::debug;

use crate::expr::Expr;

/// Variable bindings for one scope, chained to an optional enclosing scope.
///
/// A binding maps a variable name to the *expression* it was declared with,
/// not a pre-folded value; the evaluators re-evaluate resolved expressions
/// recursively. The table is treated as read-only for the duration of an
/// evaluation call.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    values: HashMap<String, Expr>,
    enclosing: Option<Rc<RefCell<SymbolTable>>>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable {
            values: HashMap::new(),
            enclosing: None,
        }
    }

    pub fn with_enclosing(enclosing: Rc<RefCell<SymbolTable>>) -> Self {
        SymbolTable {
            values: HashMap::new(),
            enclosing: Some(enclosing),
        }
    }

    pub fn define(&mut self, name: &str, expr: Expr) {
        debug!("Defining variable '${}'", name);
        self.values.insert(name.to_string(), expr);
    }

    /// Looks a name up in this scope, then through the enclosing chain.
    pub fn resolve(&self, name: &str) -> Option<Expr> {
        if let Some(expr) = self.values.get(name) {
            debug!("Resolved variable '${}'", name);
            Some(expr.clone())
        } else if let Some(enclosing) = &self.enclosing {
            enclosing.borrow().resolve(name)
        } else {
            debug!("Variable '${}' not found in any scope", name);
            None
        }
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        SymbolTable::new()
    }
}
