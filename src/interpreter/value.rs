use std::fmt;
use std::rc::Rc;

use crate::ast::LiteralValue;
use crate::interpreter::evaluator::callable::Callable;

/// A runtime value.
///
/// The tagged union the evaluator computes with: `null`, booleans, 64-bit
/// floating-point numbers, strings, arrays, and callables. Values are cheap
/// to clone; arrays clone their elements, and callables are shared behind a
/// reference count (a cloned function value is the same function).
#[derive(Clone)]
pub enum Value {
    /// The absence of a value.
    Null,
    /// A boolean.
    Bool(bool),
    /// A 64-bit floating-point number.
    Number(f64),
    /// A string.
    Str(String),
    /// An array of values. No expression form constructs these; they exist
    /// for native functions and embedding.
    Array(Vec<Value>),
    /// A callable: a user-defined function or a native one.
    Callable(Rc<dyn Callable>),
}

impl Value {
    /// Whether the value counts as true in a conditional.
    ///
    /// Null is false; booleans are themselves; numbers are false only at
    /// exactly zero; strings and arrays are false only when empty; everything
    /// else is true.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0,
            Self::Str(s) => !s.is_empty(),
            Self::Array(elements) => !elements.is_empty(),
            Self::Callable(_) => true,
        }
    }
}

impl From<LiteralValue> for Value {
    fn from(literal: LiteralValue) -> Self {
        match literal {
            LiteralValue::Null => Self::Null,
            LiteralValue::Bool(b) => Self::Bool(b),
            LiteralValue::Number(n) => Self::Number(n),
            LiteralValue::Str(s) => Self::Str(s),
        }
    }
}

/// Value equality: null equals only null, and otherwise both operands must
/// have the same type. There is no cross-type coercion, so `0 == false` is
/// false. Numbers compare by IEEE-754 equality and callables by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Callable(a), Self::Callable(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Stringification: null prints as `null`, booleans as `true`/`false`, and
/// integral numbers without a decimal point.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Array(elements) => {
                write!(f, "[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{element}")?;
                }
                write!(f, "]")
            },
            Self::Callable(callable) => write!(f, "{}", callable.describe()),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "Null"),
            Self::Bool(b) => write!(f, "Bool({b})"),
            Self::Number(n) => write!(f, "Number({n})"),
            Self::Str(s) => write!(f, "Str({s:?})"),
            Self::Array(elements) => f.debug_tuple("Array").field(elements).finish(),
            Self::Callable(callable) => write!(f, "Callable({})", callable.describe()),
        }
    }
}
