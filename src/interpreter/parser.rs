/// Parser state, token helpers, and panic-mode recovery.
///
/// Contains the `Parser` struct with its token cursor, the collected
/// diagnostics, and the synchronization routine that skips to the next
/// statement boundary after a structural error.
pub mod core;

/// The expression grammar.
///
/// One method per precedence level, from the comma operator at the bottom to
/// primary expressions at the top, each delegating to the next-tighter level.
pub mod expression;

/// The statement and declaration grammar.
///
/// Covers declarations (`function`, `let`) and statements (`if`, `while`,
/// `for`, `print`, `return`, blocks, expression statements), including the
/// desugaring of `for` loops into `while` loops.
pub mod statement;

pub use self::core::parse;
