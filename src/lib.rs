//! # min
//!
//! min is a small dynamically typed scripting language interpreter written in
//! Rust. It scans, parses, and executes C-style programs with variables,
//! functions, closures, and control flow, reporting every syntax error in a
//! single pass before any code runs.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::RunError,
    interpreter::{evaluator::core::Interpreter, lexer, parser},
};

/// The syntax tree the parser produces and the evaluator walks.
///
/// Declares the `Expr` and `Stmt` enums, their operator enums, and the
/// shared `FunctionDecl` node. Every node records the source line of the
/// token that identifies it, so later phases can report errors against the
/// original text without keeping the text around.
///
/// # Responsibilities
/// - One variant per language construct, statements and expressions alike.
/// - Source lines on every node for error reporting.
/// - Plain owned data: the tree has no interior mutability and no
///   back-references.
pub mod ast;
/// Every way a program can fail, and how each failure prints.
///
/// Syntax errors (scanning and parsing) and runtime errors live in separate
/// enums because they behave differently: syntax errors are collected in
/// batches before anything runs, while a runtime error stops execution on
/// the spot. `RunError` joins the two for callers of the pipeline.
///
/// # Responsibilities
/// - One variant per failure kind, each carrying its source line.
/// - `Display` impls that render the `[line N] ...` report format.
/// - `std::error::Error` impls so the errors box and propagate cleanly.
pub mod error;
/// The pipeline itself: scanner, parser, values, and evaluator.
///
/// Each stage lives in its own submodule and only the stage boundaries are
/// shared: the scanner hands the parser a token list, the parser hands the
/// evaluator a statement list, and the evaluator computes `value::Value`s.
/// The [`run`] function at the crate root drives the stages in order.
///
/// # Responsibilities
/// - Houses the scanner, parser, evaluator, and runtime value types.
/// - Keeps stage interfaces narrow so each stage is testable alone.
/// - Surfaces stage failures through the `error` module's types.
pub mod interpreter;

/// Runs a chunk of source code on the given interpreter.
///
/// The source is scanned and parsed in full first; every syntax error found
/// anywhere in the chunk is collected, and if any exist, nothing executes.
/// Only a chunk that parses cleanly is handed to the evaluator.
///
/// # Parameters
/// - `interpreter`: The interpreter to run on. State persists across calls,
///   so a session can feed chunks one at a time.
/// - `source`: The source code to run.
/// - `echo_expressions`: When set, bare expression statements print their
///   value, as the interactive session expects.
///
/// # Errors
/// - `RunError::Syntax` with every collected syntax error if the chunk does
///   not parse.
/// - `RunError::Runtime` if execution raises a runtime error.
///
/// # Examples
/// ```
/// use min::{interpreter::evaluator::core::Interpreter, run};
///
/// let mut interpreter = Interpreter::new();
/// assert!(run(&mut interpreter, "let x = 2 + 2;", false).is_ok());
///
/// // 'y' is never declared, so this raises a runtime error.
/// assert!(run(&mut interpreter, "let z = y + 1;", false).is_err());
/// ```
pub fn run(interpreter: &mut Interpreter,
           source: &str,
           echo_expressions: bool)
           -> Result<(), RunError> {
    let (tokens, mut errors) = lexer::scan(source);
    let (statements, parse_errors) = parser::parse(&tokens);

    errors.extend(parse_errors);
    if !errors.is_empty() {
        return Err(RunError::Syntax(errors));
    }

    interpreter.interpret(&statements, echo_expressions)
               .map_err(RunError::Runtime)
}
