use crate::{
    ast::Call,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates `receiver.method(arguments)`.
    ///
    /// The arguments are evaluated first, then the receiver variable is
    /// looked up in the current scope and the call is dispatched through the
    /// method table of its value. Mutating methods such as `push` change the
    /// stored variable itself.
    ///
    /// # Errors
    /// - `UnknownVariable` if the receiver is not bound.
    /// - `UnknownMethod` if the value's type has no such method.
    /// - Any error raised by the method.
    pub(crate) fn eval_method_call(&mut self,
                                   receiver: &str,
                                   call: &Call,
                                   line: usize)
                                   -> EvalResult<Option<Value>> {
        let arguments = call.arguments
                            .iter()
                            .map(|argument| self.eval_value(argument))
                            .collect::<EvalResult<Vec<_>>>()?;

        let value = self.get_variable_mut(receiver).ok_or_else(|| {
                                                       RuntimeError::UnknownVariable { name: receiver.to_string(),
                                                                                       line }
                                                   })?;

        value.call_method(&call.name, &arguments, line)
    }
}
