use std::{cmp::Ordering, rc::Rc};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, utils::check_arity},
        value::core::Value,
    },
    util::num::usize_to_f64_checked,
};

/// Methods available on arrays.
pub const ARRAY_METHODS: &[&str] = &["len", "push", "pop", "contains", "sort", "reverse", "join"];
/// Methods available on strings.
pub const STRING_METHODS: &[&str] = &["len", "upper", "lower", "trim", "contains", "split"];
/// Methods available on numbers.
pub const NUMBER_METHODS: &[&str] = &["floor", "ceil", "round", "abs", "sqrt"];

impl Value {
    /// The names of the methods this value's type supports.
    ///
    /// Booleans have none.
    #[must_use]
    pub const fn methods(&self) -> &'static [&'static str] {
        match self {
            Self::Array(_) => ARRAY_METHODS,
            Self::String(_) => STRING_METHODS,
            Self::Number(_) => NUMBER_METHODS,
            Self::Bool(_) => &[],
        }
    }

    /// Calls a method on this value.
    ///
    /// Dispatch is on the value's type and the method name. Array methods
    /// that mutate (`push`, `pop`, `sort`, `reverse`) update `self` in place;
    /// every other method leaves it untouched.
    ///
    /// # Returns
    /// The method's result, or `None` for methods that only mutate.
    ///
    /// # Errors
    /// - `UnknownMethod` if the type has no method of that name.
    /// - `ArgumentCountMismatch` for a wrong number of arguments.
    /// - Method-specific errors such as popping from an empty array.
    ///
    /// # Example
    /// ```
    /// use rill::interpreter::value::core::Value;
    ///
    /// let mut values = Value::from(vec![Value::Number(3.0), Value::Number(1.0)]);
    ///
    /// values.call_method("push", &[Value::Number(2.0)], 1).unwrap();
    /// values.call_method("sort", &[], 1).unwrap();
    /// assert_eq!(values.to_string(), "[1.0, 2.0, 3.0]");
    ///
    /// let joined = values.call_method("join", &[Value::from("-")], 1).unwrap();
    /// assert_eq!(joined, Some(Value::from("1.0-2.0-3.0")));
    ///
    /// assert!(Value::Bool(true).call_method("len", &[], 1).is_err());
    /// ```
    pub fn call_method(&mut self,
                       name: &str,
                       args: &[Self],
                       line: usize)
                       -> EvalResult<Option<Self>> {
        let type_name = self.type_name();

        let result = match self {
            Self::Array(items) => array_method(items, name, args, line),
            Self::String(text) => string_method(text, name, args, line),
            Self::Number(n) => number_method(*n, name, args, line),
            Self::Bool(_) => None,
        };

        result.unwrap_or_else(|| {
                  Err(RuntimeError::UnknownMethod { method: name.to_string(),
                                                    type_name,
                                                    line })
              })
    }
}

fn array_method(items: &mut Rc<Vec<Value>>,
                name: &str,
                args: &[Value],
                line: usize)
                -> Option<EvalResult<Option<Value>>> {
    let result = match name {
        "len" => check_arity::<0>(name, args, line).and_then(|[]| count(items.len(), line)),
        "push" => check_arity::<1>(name, args, line).map(|[value]| {
                                                        Rc::make_mut(items).push(value.clone());
                                                        None
                                                    }),
        "pop" => check_arity::<0>(name, args, line).and_then(|[]| {
            Rc::make_mut(items).pop().map(Some).ok_or_else(|| {
                                                   RuntimeError::InvalidArgument { details: "Cannot pop from an empty array".to_string(),
                                                                                   line }
                                               })
        }),
        "contains" => {
            check_arity::<1>(name, args, line).map(|[value]| Some(Value::Bool(items.contains(value))))
        },
        "sort" => check_arity::<0>(name, args, line).and_then(|[]| {
                                                        *items = Rc::new(sorted(items, line)?);
                                                        Ok(None)
                                                    }),
        "reverse" => check_arity::<0>(name, args, line).map(|[]| {
                                                           Rc::make_mut(items).reverse();
                                                           None
                                                       }),
        "join" => check_arity::<1>(name, args, line).and_then(|[separator]| {
            let separator = separator.as_str(line)?;
            let joined = items.iter()
                              .map(ToString::to_string)
                              .collect::<Vec<_>>()
                              .join(separator);
            Ok(Some(Value::from(joined)))
        }),
        _ => return None,
    };

    Some(result)
}

fn count(n: usize, line: usize) -> EvalResult<Option<Value>> {
    Ok(Some(Value::Number(usize_to_f64_checked(n, line)?)))
}

/// Returns the elements sorted in ascending order.
///
/// # Errors
/// Returns `UnorderedComparison` if two elements cannot be ordered against
/// each other.
fn sorted(items: &[Value], line: usize) -> EvalResult<Vec<Value>> {
    let mut failure = None;
    let mut result = items.to_vec();

    result.sort_by(|a, b| {
              a.compare(b, line).unwrap_or_else(|e| {
                                    failure.get_or_insert(e);
                                    Ordering::Equal
                                })
          });

    failure.map_or(Ok(result), Err)
}

fn string_method(text: &Rc<str>,
                 name: &str,
                 args: &[Value],
                 line: usize)
                 -> Option<EvalResult<Option<Value>>> {
    let result = match name {
        "len" => check_arity::<0>(name, args, line).and_then(|[]| count(text.chars().count(), line)),
        "upper" => check_arity::<0>(name, args, line).map(|[]| Some(Value::from(text.to_uppercase()))),
        "lower" => check_arity::<0>(name, args, line).map(|[]| Some(Value::from(text.to_lowercase()))),
        "trim" => check_arity::<0>(name, args, line).map(|[]| Some(Value::from(text.trim()))),
        "contains" => check_arity::<1>(name, args, line).and_then(|[needle]| {
                                                            let needle = needle.as_str(line)?;
                                                            Ok(Some(Value::Bool(text.contains(needle))))
                                                        }),
        "split" => check_arity::<1>(name, args, line).and_then(|[separator]| {
            let separator = separator.as_str(line)?;
            if separator.is_empty() {
                return Err(RuntimeError::InvalidArgument { details: "split() separator must not be empty".to_string(),
                                                           line });
            }

            let parts = text.split(separator).map(Value::from).collect::<Vec<_>>();
            Ok(Some(Value::from(parts)))
        }),
        _ => return None,
    };

    Some(result)
}

fn number_method(n: f64,
                 name: &str,
                 args: &[Value],
                 line: usize)
                 -> Option<EvalResult<Option<Value>>> {
    let result = match name {
        "floor" => n.floor(),
        "ceil" => n.ceil(),
        "round" => n.round(),
        "abs" => n.abs(),
        "sqrt" => {
            if n < 0.0 {
                return Some(Err(RuntimeError::InvalidArgument { details: format!("Cannot take the square root of {n}"),
                                                                line }));
            }
            n.sqrt()
        },
        _ => return None,
    };

    Some(check_arity::<0>(name, args, line).map(|[]| Some(Value::Number(result))))
}
