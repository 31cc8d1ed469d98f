/// Represents a runtime value produced by evaluating one statement.
///
/// The language has a single computable type, the 64-bit signed integer.
/// Declarations (`let` statements and `func` definitions) do not produce a
/// number; they produce a human-readable acknowledgment that can be printed
/// but not computed with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// An integer result.
    Integer(i64),
    /// A declaration acknowledgment, such as `Variable 'x' = 10` or
    /// `Function 'f' defined`.
    Declaration(String),
}

impl Value {
    /// Returns the integer carried by this value, if it is one.
    ///
    /// Declarations have no numeric reading; callers that require an
    /// integer turn `None` into a runtime error at their own offset.
    ///
    /// ## Example
    /// ```
    /// use nitlang::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Integer(7).as_integer(), Some(7));
    /// assert_eq!(Value::Declaration("Function 'f' defined".to_string()).as_integer(),
    ///            None);
    /// ```
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            Self::Declaration(_) => None,
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Declaration(text) => write!(f, "{text}"),
        }
    }
}
