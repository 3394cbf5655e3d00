#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while scanning or parsing.
pub enum SyntaxError {
    /// The scanner met a character that starts no token.
    UnexpectedCharacter {
        /// The offending character, as it appeared in the source.
        lexeme: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A string literal ran to the end of input without a closing `"`.
    UnterminatedString {
        /// The source line where scanning gave up.
        line: usize,
    },
    /// A `/* ... */` comment ran to the end of input without a closing `*/`.
    UnterminatedBlockComment {
        /// The source line where scanning gave up.
        line: usize,
    },
    /// The parser needed a specific token and found something else.
    Expected {
        /// What the parser needed, e.g. `Expect ')' after expression.`
        message: String,
        /// The lexeme actually found; empty at end of input.
        found: String,
        /// The source line of the found token.
        line: usize,
    },
    /// The left-hand side of `=` was not a plain variable.
    InvalidAssignmentTarget {
        /// The source line of the `=`.
        line: usize,
    },
    /// A call supplied more arguments than the language allows.
    TooManyArguments {
        /// The source line of the excess argument.
        line: usize,
    },
    /// A function declared more parameters than the language allows.
    TooManyParameters {
        /// The source line of the excess parameter.
        line: usize,
    },
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { lexeme, line } => {
                write!(f, "[line {line}] Error: Unexpected character \"{lexeme}\"")
            },

            Self::UnterminatedString { line } => {
                write!(f, "[line {line}] Error: Unterminated string.")
            },

            Self::UnterminatedBlockComment { line } => {
                write!(f, "[line {line}] Error: Unterminated block comment.")
            },

            Self::Expected {
                message,
                found,
                line,
            } => {
                if found.is_empty() {
                    write!(f, "[line {line}] Error at end: {message}")
                } else {
                    write!(f, "[line {line}] Error at '{found}': {message}")
                }
            },

            Self::InvalidAssignmentTarget { line } => {
                write!(f, "[line {line}] Error at '=': Invalid assignment target.")
            },

            Self::TooManyArguments { line } => {
                write!(f, "[line {line}] Error: Cannot have more than 8 arguments.")
            },

            Self::TooManyParameters { line } => {
                write!(f, "[line {line}] Error: Cannot have more than 8 parameters.")
            },
        }
    }
}

impl std::error::Error for SyntaxError {}
