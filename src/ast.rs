/// Represents a literal value embedded directly in source code.
///
/// `LiteralValue` covers the constants the scanner can produce: numbers,
/// strings, booleans and `null`. Literal expressions carry one of these, and
/// the evaluator converts them into runtime values without further work.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// The absence of a value: `null`.
    Null,
    /// A boolean literal: `true` or `false`.
    Bool(bool),
    /// A 64-bit floating-point number literal.
    Number(f64),
    /// A string literal, with the surrounding quotes removed.
    Str(String),
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<String> for LiteralValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

/// A prefix operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Numeric negation: `-x`.
    Negate,
    /// Logical not on truthiness: `!x`.
    Not,
}

/// An infix binary operator.
///
/// The comma operator is part of this set: it evaluates both operands and
/// yields the right one, so it needs no node of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+` (numeric addition or string concatenation).
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `,` (sequence: evaluate left for effect, yield right).
    Comma,
}

/// A short-circuiting logical operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOperator {
    /// `&&`
    And,
    /// `||`
    Or,
}

/// An abstract syntax tree node representing an expression.
///
/// Each variant models one syntactic construct and carries the source line of
/// the token that identifies it, so runtime errors can point back at the
/// offending location. The tree is exclusively owned top-down and contains no
/// back-references.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A constant value.
    Literal {
        /// The literal itself.
        value: LiteralValue,
        /// Line number in the source code.
        line: usize,
    },
    /// A parenthesized expression.
    Grouping {
        /// The inner expression.
        expr: Box<Self>,
        /// Line number of the opening parenthesis.
        line: usize,
    },
    /// A prefix operation (`-x`, `!x`).
    Unary {
        /// The operator to apply.
        op: UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number of the operator.
        line: usize,
    },
    /// An infix binary operation.
    Binary {
        /// Left operand.
        left: Box<Self>,
        /// The operator.
        op: BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number of the operator.
        line: usize,
    },
    /// A short-circuiting `&&` / `||` operation.
    Logical {
        /// Left operand.
        left: Box<Self>,
        /// The operator.
        op: LogicalOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number of the operator.
        line: usize,
    },
    /// A conditional `?:` expression.
    ///
    /// Both branches are evaluated before one is selected; see the evaluator
    /// for the exact contract.
    Ternary {
        /// The condition expression.
        condition: Box<Self>,
        /// Expression selected when the condition is truthy.
        then_branch: Box<Self>,
        /// Expression selected when the condition is falsy.
        else_branch: Box<Self>,
        /// Line number of the `?`.
        line: usize,
    },
    /// A variable read.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// An assignment to an existing variable.
    Assign {
        /// Name of the assignment target.
        name: String,
        /// The value expression.
        value: Box<Self>,
        /// Line number of the `=`.
        line: usize,
    },
    /// A call expression: `callee(arguments...)`.
    Call {
        /// The expression producing the callable.
        callee: Box<Self>,
        /// Argument expressions, in call order.
        arguments: Vec<Self>,
        /// Line number of the closing parenthesis.
        line: usize,
    },
}

impl Expr {
    /// Gets the source line this expression reports errors at.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Grouping { line, .. }
            | Self::Unary { line, .. }
            | Self::Binary { line, .. }
            | Self::Logical { line, .. }
            | Self::Ternary { line, .. }
            | Self::Variable { line, .. }
            | Self::Assign { line, .. }
            | Self::Call { line, .. } => *line,
        }
    }
}

/// A user function declaration.
///
/// Shared between the `Stmt::Function` node that declares it and the callable
/// value created when the declaration executes.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    /// The function name.
    pub name: String,
    /// Parameter names, in declaration order.
    pub params: Vec<String>,
    /// The statements of the body.
    pub body: Vec<Stmt>,
    /// Line number of the function name.
    pub line: usize,
}

/// An abstract syntax tree node representing a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// An expression evaluated for its side effects.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
    },
    /// A `print` statement: evaluate and write the stringified value.
    Print {
        /// The expression to print.
        expr: Expr,
    },
    /// A `let` declaration with an optional initializer.
    Let {
        /// Name of the declared variable.
        name: String,
        /// Initializer expression; the variable defaults to null without one.
        initializer: Option<Expr>,
        /// Line number of the variable name.
        line: usize,
    },
    /// A function declaration.
    Function(FunctionDecl),
    /// An `if` statement with an optional `else` branch.
    If {
        /// The condition, tested for truthiness.
        condition: Expr,
        /// Statement executed when the condition is truthy.
        then_branch: Box<Self>,
        /// Statement executed when the condition is falsy.
        else_branch: Option<Box<Self>>,
    },
    /// A `while` loop. `for` loops desugar into this in the parser.
    While {
        /// The loop condition, tested before every iteration.
        condition: Expr,
        /// The loop body.
        body: Box<Self>,
    },
    /// A `return` statement with an optional value.
    Return {
        /// The returned expression; defaults to null.
        value: Option<Expr>,
        /// Line number of the `return` keyword.
        line: usize,
    },
    /// A braced block introducing a new scope.
    Block {
        /// The statements of the block, in order.
        statements: Vec<Self>,
    },
}
