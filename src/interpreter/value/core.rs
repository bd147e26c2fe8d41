use std::{cmp::Ordering, rc::Rc};

use ordered_float::OrderedFloat;

use crate::{
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::{checked_index, usize_to_f64_checked},
};

/// Represents a runtime value in the interpreter.
///
/// This enum models every type a variable can hold, an expression can
/// produce, or a function can return.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point). Number literals,
    /// counts and indices all use this one type.
    Number(f64),
    /// An immutable string.
    String(Rc<str>),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators and consumed by conditions.
    Bool(bool),
    /// An ordered array of `Value` elements.
    Array(Rc<Vec<Self>>),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v.into())
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(v))
    }
}

impl Value {
    /// The name of the value's type, as shown in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Bool(_) => "bool",
            Self::Array(_) => "array",
        }
    }

    /// Decides whether the value counts as true in a condition.
    ///
    /// Booleans are taken as-is, numbers are true when non-zero, strings and
    /// arrays when non-empty.
    ///
    /// # Example
    /// ```
    /// use rill::interpreter::value::core::Value;
    ///
    /// assert!(Value::Number(2.0).is_truthy());
    /// assert!(!Value::from("").is_truthy());
    /// assert!(!Value::from(Vec::new()).is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Number(n) => *n != 0.0,
            Self::String(s) => !s.is_empty(),
            Self::Bool(b) => *b,
            Self::Array(a) => !a.is_empty(),
        }
    }

    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    pub fn as_number(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            _ => Err(RuntimeError::TypeError { details: format!("Expected a number, found {}",
                                                                self.type_name()),
                                               line }),
        }
    }

    /// Borrows the value as a string slice, or returns an error if it is not
    /// a string.
    pub fn as_str(&self, line: usize) -> EvalResult<&str> {
        match self {
            Self::String(s) => Ok(s),
            _ => Err(RuntimeError::TypeError { details: format!("Expected a string, found {}",
                                                                self.type_name()),
                                               line }),
        }
    }

    /// Returns the number of elements of an array, or characters of a string.
    ///
    /// # Errors
    /// Returns a `TypeError` for numbers and booleans.
    pub fn length(&self, line: usize) -> EvalResult<usize> {
        match self {
            Self::String(s) => Ok(s.chars().count()),
            Self::Array(a) => Ok(a.len()),
            _ => Err(RuntimeError::TypeError { details: format!("Values of type {} have no length",
                                                                self.type_name()),
                                               line }),
        }
    }

    /// Returns the element at `index`.
    ///
    /// Arrays yield their element; strings yield a one-character string.
    ///
    /// # Errors
    /// - `IndexOutOfBounds` if `index` is negative or not below the length.
    /// - `TypeError` if the value cannot be indexed.
    ///
    /// # Example
    /// ```
    /// use rill::interpreter::value::core::Value;
    ///
    /// let values = Value::from(vec![Value::Number(4.0), Value::Number(8.0)]);
    /// assert_eq!(values.element(1, 1).unwrap(), Value::Number(8.0));
    /// assert!(values.element(2, 1).is_err());
    ///
    /// assert_eq!(Value::from("abc").element(0, 1).unwrap(), Value::from("a"));
    /// ```
    pub fn element(&self, index: i64, line: usize) -> EvalResult<Self> {
        match self {
            Self::Array(a) => Ok(a[checked_index(index, a.len(), line)?].clone()),
            Self::String(s) => {
                let len = s.chars().count();
                let position = checked_index(index, len, line)?;
                s.chars()
                 .nth(position)
                 .map(|c| Self::from(c.to_string()))
                 .ok_or(RuntimeError::IndexOutOfBounds { len,
                                                         found: index,
                                                         line })
            },
            _ => Err(RuntimeError::TypeError { details: format!("Cannot index a value of type {}",
                                                                self.type_name()),
                                               line }),
        }
    }

    /// Returns the elements an `each` loop walks: the items of an array or
    /// the characters of a string.
    ///
    /// # Errors
    /// Returns a `TypeError` for numbers and booleans.
    pub fn elements(&self, line: usize) -> EvalResult<Vec<Self>> {
        match self {
            Self::Array(a) => Ok(a.to_vec()),
            Self::String(s) => Ok(s.chars().map(|c| Self::from(c.to_string())).collect()),
            _ => Err(RuntimeError::TypeError { details: format!("Cannot iterate over a value of type {}",
                                                                self.type_name()),
                                               line }),
        }
    }

    /// Orders two values for the `<`, `<=`, `>` and `>=` operators.
    ///
    /// Numbers, strings and booleans compare with their natural ordering;
    /// arrays compare lexicographically by element. Numbers use a total
    /// order, so `NaN` sorts above every other number instead of making the
    /// comparison fail.
    ///
    /// # Errors
    /// Returns `UnorderedComparison` when the two values (or a pair of
    /// array elements) are of different types.
    ///
    /// # Example
    /// ```
    /// use std::cmp::Ordering;
    ///
    /// use rill::interpreter::value::core::Value;
    ///
    /// let a = Value::from(vec![Value::Number(1.0), Value::Number(2.0)]);
    /// let b = Value::from(vec![Value::Number(1.0), Value::Number(3.0)]);
    ///
    /// assert_eq!(a.compare(&b, 1).unwrap(), Ordering::Less);
    /// assert!(Value::Number(1.0).compare(&Value::from("1"), 1).is_err());
    /// ```
    pub fn compare(&self, other: &Self, line: usize) -> EvalResult<Ordering> {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => Ok(OrderedFloat(*a).cmp(&OrderedFloat(*b))),
            (Self::String(a), Self::String(b)) => Ok(a.cmp(b)),
            (Self::Bool(a), Self::Bool(b)) => Ok(a.cmp(b)),
            (Self::Array(a), Self::Array(b)) => {
                for (x, y) in a.iter().zip(b.iter()) {
                    let ordering = x.compare(y, line)?;
                    if ordering != Ordering::Equal {
                        return Ok(ordering);
                    }
                }
                Ok(a.len().cmp(&b.len()))
            },
            _ => Err(RuntimeError::UnorderedComparison { left: self.type_name(),
                                                         right: other.type_name(),
                                                         line }),
        }
    }

    /// Returns the length of the value as a number value.
    pub fn length_value(&self, line: usize) -> EvalResult<Self> {
        Ok(Self::Number(usize_to_f64_checked(self.length(line)?, line)?))
    }
}

/// Formats a number the way the language prints it: integral values keep a
/// trailing `.0`.
fn fmt_number(n: f64, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e16 {
        write!(f, "{n:.1}")
    } else {
        write!(f, "{n}")
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => fmt_number(*n, f),
            Self::String(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Array(a) => {
                write!(f, "[")?;

                for (index, value) in a.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    match value {
                        Self::String(s) => write!(f, "\"{s}\"")?,
                        other => write!(f, "{other}")?,
                    }
                }

                write!(f, "]")
            },
        }
    }
}
