use std::{
    cell::RefCell,
    rc::Rc,
    time::{SystemTime, UNIX_EPOCH},
};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            callable::Callable,
            core::{EvalResult, Interpreter},
            environment::Environment,
        },
        value::Value,
    },
};

/// Installs the native functions into the given environment.
///
/// Called once when the global environment is created, so `print`, `clock`
/// and `input` are in scope for every program.
pub fn install(globals: &Rc<RefCell<Environment>>) {
    let mut globals = globals.borrow_mut();

    globals.define("print", Value::Callable(Rc::new(Print)));
    globals.define("clock", Value::Callable(Rc::new(Clock)));
    globals.define("input", Value::Callable(Rc::new(Input)));
}

/// The native `print(value)` function.
///
/// Writes the stringified value and a newline to the interpreter's output,
/// then returns `null`.
struct Print;

impl Callable for Print {
    fn arity(&self) -> usize {
        1
    }

    fn call(&self, interpreter: &mut Interpreter, _line: usize, arguments: Vec<Value>)
            -> EvalResult<Value> {
        for argument in &arguments {
            interpreter.write_line(argument);
        }

        Ok(Value::Null)
    }

    fn describe(&self) -> String {
        "<native fn>".to_string()
    }
}

/// The native `clock()` function.
///
/// Returns the number of milliseconds since the Unix epoch as a number,
/// suitable for measuring elapsed time by subtraction.
struct Clock;

impl Callable for Clock {
    fn arity(&self) -> usize {
        0
    }

    fn call(&self, _interpreter: &mut Interpreter, _line: usize, _arguments: Vec<Value>)
            -> EvalResult<Value> {
        let millis = SystemTime::now().duration_since(UNIX_EPOCH)
                                      .map_or(0.0, |elapsed| elapsed.as_secs_f64() * 1000.0);

        Ok(Value::Number(millis))
    }

    fn describe(&self) -> String {
        "<native fn>".to_string()
    }
}

/// The native `input()` function.
///
/// Reads one line from the interpreter's input and returns it as a string
/// without the trailing newline. Returns `null` at end of input.
struct Input;

impl Callable for Input {
    fn arity(&self) -> usize {
        0
    }

    fn call(&self, interpreter: &mut Interpreter, line: usize, _arguments: Vec<Value>)
            -> EvalResult<Value> {
        let mut buffer = String::new();

        match interpreter.input.read_line(&mut buffer) {
            Ok(0) => Ok(Value::Null),
            Ok(_) => {
                if buffer.ends_with('\n') {
                    buffer.pop();
                    if buffer.ends_with('\r') {
                        buffer.pop();
                    }
                }

                Ok(Value::Str(buffer))
            },
            Err(_) => Err(RuntimeError::InputFailed { line }),
        }
    }

    fn describe(&self) -> String {
        "<native fn>".to_string()
    }
}
