use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// A single lexical scope.
///
/// Maps names to values and optionally links to the enclosing scope,
/// forming a chain from the innermost block out to the globals. Lookups
/// and assignments walk the chain outward; declarations always act on
/// this scope alone.
#[derive(Debug, Default)]
pub struct Environment {
    enclosing: Option<Rc<RefCell<Environment>>>,
    values: HashMap<String, Value>,
}

impl Environment {
    /// Creates a scope with no parent, used for the globals.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scope nested inside `enclosing`.
    #[must_use]
    pub fn with_enclosing(enclosing: Rc<RefCell<Environment>>) -> Self {
        Self { enclosing: Some(enclosing),
               values: HashMap::new() }
    }

    /// Declares a name in this scope.
    ///
    /// # Returns
    /// `true` if the name was newly declared, `false` if this scope already
    /// holds it. Shadowing a name from an enclosing scope is allowed and
    /// counts as a new declaration.
    pub fn define(&mut self, name: &str, value: Value) -> bool {
        if self.values.contains_key(name) {
            return false;
        }

        self.values.insert(name.to_string(), value);
        true
    }

    /// Looks up a name, walking outward through enclosing scopes.
    ///
    /// # Errors
    /// - `UndefinedVariable` if no scope in the chain declares the name.
    pub fn get(&self, name: &str, line: usize) -> EvalResult<Value> {
        if let Some(value) = self.values.get(name) {
            return Ok(value.clone());
        }

        match &self.enclosing {
            Some(enclosing) => enclosing.borrow().get(name, line),
            None => Err(RuntimeError::UndefinedVariable { name: name.to_string(),
                                                          line }),
        }
    }

    /// Assigns to an existing name, walking outward through enclosing
    /// scopes.
    ///
    /// Assignment never declares: the innermost scope holding the name is
    /// updated, and a name no scope declares is an error.
    ///
    /// # Errors
    /// - `UndefinedVariable` if no scope in the chain declares the name.
    pub fn assign(&mut self, name: &str, value: Value, line: usize) -> EvalResult<()> {
        if let Some(slot) = self.values.get_mut(name) {
            *slot = value;
            return Ok(());
        }

        match &self.enclosing {
            Some(enclosing) => enclosing.borrow_mut().assign(name, value, line),
            None => Err(RuntimeError::UndefinedVariable { name: name.to_string(),
                                                          line }),
        }
    }
}
