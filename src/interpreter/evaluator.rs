/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations in expressions, including
/// arithmetic, comparisons, equality, the comma operator, short-circuiting
/// logical operators, and the ternary conditional.
pub mod binary;

/// Callable values.
///
/// Defines the `Callable` trait shared by user-declared functions and
/// natives, plus the user function implementation with its captured closure.
pub mod callable;

/// Interpreter state and statement execution.
///
/// Contains the `Interpreter` struct, expression dispatch, statement
/// execution, and block scoping.
pub mod core;

/// Lexical environments.
///
/// Implements the scope chain: each environment maps names to values and
/// optionally links to the enclosing scope.
pub mod environment;

/// Native functions.
///
/// Implements the built-in `print`, `clock`, and `input` functions installed
/// into the global scope.
pub mod native;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation and logical NOT.
pub mod unary;
