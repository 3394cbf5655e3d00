use std::{cell::RefCell, rc::Rc};

use crate::{
    ast::FunctionDecl,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Flow, Interpreter},
            environment::Environment,
        },
        value::Value,
    },
};

/// A value that can be invoked with arguments.
///
/// Implemented by user-declared functions and by the native functions. The
/// interpreter checks arity before calling, so implementations may assume
/// `arguments.len() == self.arity()`.
pub trait Callable {
    /// The number of arguments the callable accepts.
    fn arity(&self) -> usize;

    /// Invokes the callable.
    ///
    /// # Parameters
    /// - `interpreter`: The running interpreter, for body execution and I/O.
    /// - `line`: Source line of the call site, for error reporting.
    /// - `arguments`: The evaluated argument values, in order.
    ///
    /// # Errors
    /// Any `RuntimeError` raised while running the callable.
    fn call(&self, interpreter: &mut Interpreter, line: usize, arguments: Vec<Value>)
            -> EvalResult<Value>;

    /// A short display form, such as `<fn name>`.
    fn describe(&self) -> String;
}

/// A user-declared function together with its captured closure.
///
/// The closure is the environment that was current at declaration time.
/// Each call creates a fresh scope nested inside it, so the function sees
/// the variables that surrounded its declaration rather than those at the
/// call site, and recursive calls do not share locals.
pub struct Function {
    declaration: Rc<FunctionDecl>,
    closure: Rc<RefCell<Environment>>,
}

impl Function {
    #[must_use]
    pub fn new(declaration: Rc<FunctionDecl>, closure: Rc<RefCell<Environment>>) -> Self {
        Self { declaration, closure }
    }
}

impl Callable for Function {
    fn arity(&self) -> usize {
        self.declaration.params.len()
    }

    fn call(&self, interpreter: &mut Interpreter, _line: usize, arguments: Vec<Value>)
            -> EvalResult<Value> {
        let mut scope = Environment::with_enclosing(Rc::clone(&self.closure));
        for (param, argument) in self.declaration.params.iter().zip(arguments) {
            // A duplicate parameter name is a redeclaration in the call
            // scope, caught the same way `let` catches one.
            if !scope.define(param, argument) {
                return Err(RuntimeError::AlreadyDeclared { name: param.clone(),
                                                           line: self.declaration.line });
            }
        }

        let flow = interpreter.execute_block(&self.declaration.body,
                                             Rc::new(RefCell::new(scope)))?;

        match flow {
            Flow::Return { value, .. } => Ok(value),
            Flow::Normal => Ok(Value::Null),
        }
    }

    fn describe(&self) -> String {
        format!("<fn {}>", self.declaration.name)
    }
}
