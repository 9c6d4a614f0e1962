/// A declared variable type.
///
/// The language only has two: `inteiro`/`integer` and `lógico`/`boolean`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    /// 64-bit signed integer.
    Integer,
    /// Truth value.
    Boolean,
}

impl Type {
    /// The value every variable of this type starts with.
    ///
    /// # Example
    /// ```
    /// use lalg::interpreter::value::{Type, Value};
    ///
    /// assert_eq!(Type::Integer.default_value(), Value::Integer(0));
    /// assert_eq!(Type::Boolean.default_value(), Value::Boolean(false));
    /// ```
    #[must_use]
    pub const fn default_value(self) -> Value {
        match self {
            Self::Integer => Value::Integer(0),
            Self::Boolean => Value::Boolean(false),
        }
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer => write!(f, "integer"),
            Self::Boolean => write!(f, "boolean"),
        }
    }
}

/// Represents a runtime value in the interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    /// A 64-bit integer.
    Integer(i64),
    /// A boolean, produced by comparisons, boolean variables and `read`.
    Boolean(bool),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl Value {
    /// The type this value belongs to.
    #[must_use]
    pub const fn type_of(self) -> Type {
        match self {
            Self::Integer(_) => Type::Integer,
            Self::Boolean(_) => Type::Boolean,
        }
    }

    /// The value as an integer, with booleans counting as `0` and `1`.
    #[must_use]
    pub fn as_integer(self) -> i64 {
        match self {
            Self::Integer(n) => n,
            Self::Boolean(b) => i64::from(b),
        }
    }

    /// The value as a boolean, with any non-zero integer counting as `true`.
    #[must_use]
    pub const fn is_truthy(self) -> bool {
        match self {
            Self::Integer(n) => n != 0,
            Self::Boolean(b) => b,
        }
    }

    /// Converts the value so it can be stored in a variable of type `ty`.
    ///
    /// # Example
    /// ```
    /// use lalg::interpreter::value::{Type, Value};
    ///
    /// assert_eq!(Value::Integer(1).coerce_to(Type::Boolean), Value::Boolean(true));
    /// assert_eq!(Value::Boolean(true).coerce_to(Type::Integer), Value::Integer(1));
    /// ```
    #[must_use]
    pub fn coerce_to(self, ty: Type) -> Self {
        match ty {
            Type::Integer => Self::Integer(self.as_integer()),
            Type::Boolean => Self::Boolean(self.is_truthy()),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
        }
    }
}
