use std::collections::HashMap;

use crate::{
    ast::{AssignOperator, Node},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// The scope names currently resolve in: the innermost call frame, or
    /// the global scope outside of any function.
    fn current_scope(&self) -> &HashMap<String, Value> {
        self.frames.last().unwrap_or(&self.globals)
    }

    fn current_scope_mut(&mut self) -> &mut HashMap<String, Value> {
        match self.frames.last_mut() {
            Some(frame) => frame,
            None => &mut self.globals,
        }
    }

    /// Retrieves the value of a variable from the current scope.
    ///
    /// Inside a function call only its own frame is visible; globals are not
    /// searched.
    ///
    /// # Returns
    /// `Some(&Value)` if found, or `None` if the variable is undefined.
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<&Value> {
        self.current_scope().get(name)
    }

    /// Mutable access to a variable in the current scope.
    pub fn get_variable_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.current_scope_mut().get_mut(name)
    }

    /// Creates or overwrites a variable in the current scope.
    ///
    /// # Example
    /// ```
    /// use rill::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let mut context = Context::new();
    /// context.set_variable("x", Value::Number(1.0));
    /// context.set_variable("x", Value::from("one"));
    ///
    /// assert_eq!(context.get_variable("x"), Some(&Value::from("one")));
    /// ```
    pub fn set_variable(&mut self, name: &str, value: Value) {
        self.current_scope_mut().insert(name.to_string(), value);
    }

    /// Removes a variable from the current scope.
    ///
    /// Removing a name that is not bound does nothing.
    pub fn remove_variable(&mut self, name: &str) -> Option<Value> {
        self.current_scope_mut().remove(name)
    }

    /// Evaluates an assignment and stores the result in the current scope.
    ///
    /// - `=` stores the right-hand value.
    /// - `+=`, `-=`, `*=` and `/=` combine the current value with the
    ///   right-hand value using the arithmetic rules of the binary operators.
    /// - `++` and `--` add or subtract one.
    ///
    /// Compound operators read the target before the right-hand side runs,
    /// so a method call on the right that mutates the target does not change
    /// the left operand.
    ///
    /// # Returns
    /// The value that was stored.
    ///
    /// # Errors
    /// - `UnknownVariable` if a compound operator targets an unbound name.
    /// - `MissingValue` if the right-hand side produces no value.
    /// - Any error from the arithmetic itself.
    pub(crate) fn eval_assignment(&mut self,
                                  target: &str,
                                  op: AssignOperator,
                                  value: Option<&Node>,
                                  line: usize)
                                  -> EvalResult<Option<Value>> {
        let current = match op.arithmetic() {
            Some(arithmetic) => {
                let current = self.get_variable(target).cloned().ok_or_else(|| {
                                                                    RuntimeError::UnknownVariable { name: target.to_string(),
                                                                                                    line }
                                                                })?;
                Some((arithmetic, current))
            },
            None => None,
        };

        let rhs = match value {
            Some(node) => self.eval_value(node)?,
            None if op == AssignOperator::Set => return Err(RuntimeError::MissingValue { line }),
            None => Value::Number(1.0),
        };

        let result = match current {
            None => rhs,
            Some((arithmetic, current)) => Self::eval_binary(arithmetic, &current, &rhs, line)?,
        };

        self.set_variable(target, result.clone());
        Ok(Some(result))
    }
}

/// Checks that a builtin or method received exactly `N` arguments.
///
/// # Returns
/// The arguments as a fixed-size array, ready to be destructured.
///
/// # Errors
/// Returns `ArgumentCountMismatch` naming `name` otherwise.
///
/// # Example
/// ```
/// use rill::interpreter::{evaluator::utils::check_arity, value::core::Value};
///
/// let args = [Value::Number(1.0), Value::Number(2.0)];
///
/// let [low, high] = check_arity::<2>("random", &args, 1).unwrap();
/// assert_eq!((low, high), (&Value::Number(1.0), &Value::Number(2.0)));
///
/// assert!(check_arity::<1>("len", &args, 1).is_err());
/// ```
pub fn check_arity<'a, const N: usize>(name: &str,
                                       args: &'a [Value],
                                       line: usize)
                                       -> EvalResult<&'a [Value; N]> {
    args.try_into()
        .map_err(|_| RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                           expected: N.to_string(),
                                                           found: args.len(),
                                                           line })
}
