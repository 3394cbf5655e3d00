use std::fmt;

/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: type
/// mismatches, division by zero, undefined variables, arity mismatches,
/// calling something that is not callable, and failed reads from input.
pub mod runtime_error;
/// Syntax errors.
///
/// Defines all error types that can occur while scanning or parsing source
/// code. Syntax errors are collected rather than thrown: one pass over a
/// source text reports every lexical and structural problem it can find.
pub mod syntax_error;

pub use runtime_error::RuntimeError;
pub use syntax_error::SyntaxError;

/// The combined failure of one pipeline run.
///
/// A run refuses to evaluate when any syntax error was collected, so the two
/// cases are mutually exclusive: either the collected syntax errors are
/// reported as a batch, or evaluation started and stopped at one runtime
/// error.
#[derive(Debug)]
pub enum RunError {
    /// Every syntax error collected while scanning and parsing.
    Syntax(Vec<SyntaxError>),
    /// The runtime error that terminated evaluation.
    Runtime(RuntimeError),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax(errors) => {
                let mut first = true;
                for error in errors {
                    if !first {
                        writeln!(f)?;
                    }
                    write!(f, "{error}")?;
                    first = false;
                }
                Ok(())
            },
            Self::Runtime(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for RunError {}
