#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can be raised during evaluation.
pub enum RuntimeError {
    /// Read or assigned a variable that is not bound anywhere in the scope
    /// chain.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Declared a name that already exists in the current scope.
    AlreadyDeclared {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A unary operator needed a number operand.
    OperandMustBeNumber {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A binary operator needed two number operands.
    OperandsMustBeNumbers {
        /// The source line where the error occurred.
        line: usize,
    },
    /// `+` was applied to operands that are neither numbers nor strings.
    UnsupportedAddition {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The right operand of `/` was zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The callee of a call expression was not a callable value.
    NotCallable {
        /// The source line of the call.
        line: usize,
    },
    /// A callable was invoked with the wrong number of arguments.
    ArityMismatch {
        /// The argument count the callable requires.
        expected: usize,
        /// The argument count actually supplied.
        found: usize,
        /// The source line of the call.
        line: usize,
    },
    /// The `input` native function failed to read a line.
    InputFailed {
        /// The source line of the call.
        line: usize,
    },
    /// A `return` executed outside any function body.
    ReturnOutsideFunction {
        /// The source line of the `return` keyword.
        line: usize,
    },
}

impl RuntimeError {
    /// Gets the source line this error points at.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::UndefinedVariable { line, .. }
            | Self::AlreadyDeclared { line, .. }
            | Self::OperandMustBeNumber { line }
            | Self::OperandsMustBeNumbers { line }
            | Self::UnsupportedAddition { line }
            | Self::DivisionByZero { line }
            | Self::NotCallable { line }
            | Self::ArityMismatch { line, .. }
            | Self::InputFailed { line }
            | Self::ReturnOutsideFunction { line } => *line,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name, line } => {
                write!(f, "[line {line}] Undefined variable '{name}'.")
            },
            Self::AlreadyDeclared { name, line } => {
                write!(f, "[line {line}] Identifier '{name}' has already been declared.")
            },
            Self::OperandMustBeNumber { line } => {
                write!(f, "[line {line}] Operand must be a number.")
            },
            Self::OperandsMustBeNumbers { line } => {
                write!(f, "[line {line}] Operands must be numbers.")
            },
            Self::UnsupportedAddition { line } => {
                write!(f, "[line {line}] Addition operation not supported for operands.")
            },
            Self::DivisionByZero { line } => {
                write!(f, "[line {line}] Cannot divide by zero.")
            },
            Self::NotCallable { line } => {
                write!(f, "[line {line}] Can only call functions and classes.")
            },
            Self::ArityMismatch {
                expected,
                found,
                line,
            } => {
                write!(f, "[line {line}] Expected {expected} arguments but got {found}.")
            },
            Self::InputFailed { line } => {
                write!(f, "[line {line}] Could not read from input.")
            },
            Self::ReturnOutsideFunction { line } => {
                write!(f, "[line {line}] Cannot return from top-level code.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
