use std::{
    cell::RefCell,
    io::{self, BufRead, Write},
    mem,
    rc::Rc,
};

use crate::{
    ast::{Expr, Stmt},
    error::RuntimeError,
    interpreter::{
        evaluator::{callable::Function, environment::Environment, native},
        value::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Result of executing a statement.
///
/// Most statements complete normally; a `return` statement instead carries
/// its value upward through enclosing blocks and loops until the active
/// function call unwraps it.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    Normal,
    Return {
        /// The returned value; null for a bare `return;`.
        value: Value,
        /// Line of the `return` keyword, for reporting a return that no
        /// call boundary catches.
        line: usize,
    },
}

/// Stores the runtime evaluation state.
///
/// This struct holds the current environment chain and the input and output
/// streams used by `print` and `input`.
///
/// ## Usage
///
/// An `Interpreter` is created once and reused across runs, so variables and
/// functions declared in one chunk of source remain visible to the next. This
/// is what lets a session build up state line by line.
pub struct Interpreter {
    pub(in crate::interpreter::evaluator) environment: Rc<RefCell<Environment>>,
    pub(in crate::interpreter::evaluator) output: Box<dyn Write>,
    pub(in crate::interpreter::evaluator) input: Box<dyn BufRead>,
}

#[allow(clippy::new_without_default)]
impl Interpreter {
    /// Creates an interpreter wired to standard input and output.
    ///
    /// The global environment is created with the native functions already
    /// installed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_io(Box::new(io::stdout()),
                      Box::new(io::BufReader::new(io::stdin())))
    }

    /// Creates an interpreter with custom input and output streams.
    ///
    /// Useful for capturing `print` output or scripting `input` responses.
    #[must_use]
    pub fn with_io(output: Box<dyn Write>, input: Box<dyn BufRead>) -> Self {
        let globals = Rc::new(RefCell::new(Environment::new()));
        native::install(&globals);

        Self { environment: globals,
               output,
               input }
    }

    /// Executes a list of statements in order.
    ///
    /// Execution stops at the first runtime error; statements before it have
    /// already taken effect.
    ///
    /// # Parameters
    /// - `statements`: The program to execute.
    /// - `echo_expressions`: When set and the program is exactly one bare
    ///   expression statement, its value is printed after evaluation. Used
    ///   by the interactive session so `1 + 2;` answers `3`.
    ///
    /// # Errors
    /// The first `RuntimeError` raised by any statement. A `return` at the
    /// top level, outside any function, is one such error: the return signal
    /// is only meaningful at a call boundary.
    pub fn interpret(&mut self, statements: &[Stmt], echo_expressions: bool) -> EvalResult<()> {
        if echo_expressions {
            if let [Stmt::Expression { expr }] = statements {
                let value = self.evaluate(expr)?;
                self.write_line(&value);

                return Ok(());
            }
        }

        for statement in statements {
            if let Flow::Return { line, .. } = self.execute(statement)? {
                return Err(RuntimeError::ReturnOutsideFunction { line });
            }
        }

        Ok(())
    }

    /// Executes a single statement.
    ///
    /// # Returns
    /// `Flow::Normal` for ordinary completion, or `Flow::Return` carrying the
    /// value of an executed `return` statement.
    pub(in crate::interpreter::evaluator) fn execute(&mut self, statement: &Stmt)
                                                     -> EvalResult<Flow> {
        match statement {
            Stmt::Expression { expr } => {
                self.evaluate(expr)?;

                Ok(Flow::Normal)
            },
            Stmt::Print { expr } => {
                let value = self.evaluate(expr)?;
                self.write_line(&value);

                Ok(Flow::Normal)
            },
            Stmt::Let { name, initializer, line } => {
                let value = match initializer {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Null,
                };

                self.define(name, value, *line)?;

                Ok(Flow::Normal)
            },
            Stmt::Function(declaration) => {
                let function = Function::new(Rc::new(declaration.clone()),
                                             Rc::clone(&self.environment));

                self.define(&declaration.name,
                            Value::Callable(Rc::new(function)),
                            declaration.line)?;

                Ok(Flow::Normal)
            },
            Stmt::If { condition, then_branch, else_branch } => {
                if self.evaluate(condition)?.is_truthy() {
                    self.execute(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch)
                } else {
                    Ok(Flow::Normal)
                }
            },
            Stmt::While { condition, body } => {
                while self.evaluate(condition)?.is_truthy() {
                    match self.execute(body)? {
                        Flow::Normal => {},
                        flow @ Flow::Return { .. } => return Ok(flow),
                    }
                }

                Ok(Flow::Normal)
            },
            Stmt::Return { value, line } => {
                let value = match value {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Null,
                };

                Ok(Flow::Return { value, line: *line })
            },
            Stmt::Block { statements } => {
                let environment = Environment::with_enclosing(Rc::clone(&self.environment));
                self.execute_block(statements, Rc::new(RefCell::new(environment)))
            },
        }
    }

    /// Executes statements inside the given environment.
    ///
    /// The interpreter's current environment is swapped out for the duration
    /// and restored afterwards, whether execution completes, returns, or
    /// fails.
    pub(in crate::interpreter::evaluator) fn execute_block(&mut self,
                                                           statements: &[Stmt],
                                                           environment: Rc<RefCell<Environment>>)
                                                           -> EvalResult<Flow> {
        let previous = mem::replace(&mut self.environment, environment);

        let mut result = Ok(Flow::Normal);
        for statement in statements {
            match self.execute(statement) {
                Ok(Flow::Normal) => {},
                other => {
                    result = other;
                    break;
                },
            }
        }

        self.environment = previous;
        result
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches based on expression variant: literals, groupings, unary and
    /// binary operations, logical operators, the ternary conditional,
    /// variables, assignments, and calls.
    ///
    /// # Errors
    /// Any `RuntimeError` raised by the expression or a subexpression.
    pub(in crate::interpreter::evaluator) fn evaluate(&mut self, expr: &Expr)
                                                      -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value.clone())),
            Expr::Grouping { expr, .. } => self.evaluate(expr),
            Expr::Unary { op, expr, line } => self.eval_unary(*op, expr, *line),
            Expr::Binary { left, op, right, line } => self.eval_binary(left, *op, right, *line),
            Expr::Logical { left, op, right, .. } => self.eval_logical(left, *op, right),
            Expr::Ternary { condition,
                            then_branch,
                            else_branch,
                            .. } => self.eval_ternary(condition, then_branch, else_branch),
            Expr::Variable { name, line } => self.environment.borrow().get(name, *line),
            Expr::Assign { name, value, line } => {
                let value = self.evaluate(value)?;
                self.environment.borrow_mut().assign(name, value.clone(), *line)?;

                Ok(value)
            },
            Expr::Call { callee, arguments, line } => self.eval_call(callee, arguments, *line),
        }
    }

    /// Evaluates a call expression.
    ///
    /// The callee is evaluated first, then each argument in order, before
    /// the callable itself runs.
    ///
    /// # Errors
    /// - `NotCallable` if the callee is not a function.
    /// - `ArityMismatch` if the argument count differs from the declared
    ///   parameter count.
    /// - Any error raised by the callee's body.
    fn eval_call(&mut self, callee: &Expr, arguments: &[Expr], line: usize) -> EvalResult<Value> {
        let callee = self.evaluate(callee)?;

        let mut values = Vec::with_capacity(arguments.len());
        for argument in arguments {
            values.push(self.evaluate(argument)?);
        }

        match callee {
            Value::Callable(callable) => {
                if values.len() != callable.arity() {
                    return Err(RuntimeError::ArityMismatch { expected: callable.arity(),
                                                             found: values.len(),
                                                             line });
                }

                callable.call(self, line, values)
            },
            _ => Err(RuntimeError::NotCallable { line }),
        }
    }

    /// Declares a name in the current scope.
    ///
    /// # Errors
    /// - `AlreadyDeclared` if the name already exists in this scope.
    fn define(&mut self, name: &str, value: Value, line: usize) -> EvalResult<()> {
        if self.environment.borrow_mut().define(name, value) {
            Ok(())
        } else {
            Err(RuntimeError::AlreadyDeclared { name: name.to_string(),
                                                line })
        }
    }

    /// Prints a value followed by a newline to the interpreter's output.
    pub(in crate::interpreter::evaluator) fn write_line(&mut self, value: &Value) {
        let _ = writeln!(self.output, "{value}");
        let _ = self.output.flush();
    }
}
