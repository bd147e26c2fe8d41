use std::io::Write;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Writes one line of text to the context's output sink.
    ///
    /// # Errors
    /// Returns `RuntimeError::Output` if the sink fails.
    pub(crate) fn write_line(&mut self, text: &str, line: usize) -> EvalResult<()> {
        writeln!(self.output, "{text}").map_err(|e| RuntimeError::Output { details: e.to_string(),
                                                                          line })
    }
}

/// Prints each argument on its own line.
///
/// Values are formatted using their `Display` implementation. Called with no
/// arguments it prints an empty line.
///
/// # Returns
/// Always `None`.
///
/// # Example
/// ```
/// use rill::interpreter::{
///     evaluator::{core::Context, function::print::println},
///     value::core::Value,
/// };
///
/// let mut context = Context::with_output(std::io::sink());
/// let result = println(&mut context, &[Value::Number(42.0), Value::from("hi")], 1).unwrap();
///
/// assert_eq!(result, None);
/// ```
pub fn println(context: &mut Context, args: &[Value], line: usize) -> EvalResult<Option<Value>> {
    if args.is_empty() {
        context.write_line("", line)?;
    }

    for arg in args {
        context.write_line(&arg.to_string(), line)?;
    }

    Ok(None)
}

/// Prints all arguments on one line, separated by single spaces.
pub fn print(context: &mut Context, args: &[Value], line: usize) -> EvalResult<Option<Value>> {
    let text = args.iter()
                   .map(ToString::to_string)
                   .collect::<Vec<_>>()
                   .join(" ");

    context.write_line(&text, line)?;
    Ok(None)
}
