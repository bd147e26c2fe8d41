use std::{collections::HashMap, io::Write, rc::Rc};

use rand::{SeedableRng, rngs::StdRng};

use crate::{
    ast::{FunctionDef, Node, Program},
    error::RuntimeError,
    interpreter::value::core::Value,
    util::num::truncate_to_i64,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the global scope, the stack of
/// call frames, all user defined functions, the output sink used by the
/// printing builtins and the random number generator.
///
/// ## Usage
///
/// `Context` is created once per run. Several contexts can coexist in one
/// process; nothing is shared between them.
///
/// Name resolution looks only at the innermost call frame while a function
/// runs and at the global scope otherwise. Blocks do not open scopes.
pub struct Context {
    /// Variables assigned outside of any function.
    pub globals:       HashMap<String, Value>,
    /// One map of local variables per active user function call.
    pub frames:        Vec<HashMap<String, Value>>,
    /// A mapping from function names to their [`FunctionDef`] definitions.
    pub functions:     HashMap<String, Rc<FunctionDef>>,
    pub(crate) output: Box<dyn Write>,
    pub(crate) rng:    StdRng,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Creates a context that writes to standard output and draws random
    /// numbers from an entropy-seeded generator.
    #[must_use]
    pub fn new() -> Self {
        Self::with_output(std::io::stdout())
    }

    /// Creates a context that writes program output to `output`.
    ///
    /// # Example
    /// ```
    /// use rill::interpreter::{evaluator::core::Context, parser::core::Parser};
    ///
    /// let program = Parser::new("println(1 + 1)").unwrap().parse().unwrap();
    ///
    /// let mut context = Context::with_output(std::io::sink());
    /// assert!(context.evaluate(&program).is_ok());
    /// ```
    #[must_use]
    pub fn with_output(output: impl Write + 'static) -> Self {
        Self { globals:   HashMap::new(),
               frames:    Vec::new(),
               functions: HashMap::new(),
               output:    Box::new(output),
               rng:       StdRng::from_entropy(), }
    }

    /// Reseeds the random number generator so that `random` produces a
    /// reproducible sequence.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Runs every top-level statement of `program` in order.
    ///
    /// # Returns
    /// The value of the last statement that produced one, or `None` if no
    /// statement did.
    ///
    /// # Errors
    /// Returns the first runtime error; execution stops there.
    ///
    /// # Example
    /// ```
    /// use rill::interpreter::{
    ///     evaluator::core::Context, parser::core::Parser, value::core::Value,
    /// };
    ///
    /// let program = Parser::new("x = 2 + 3 * 4").unwrap().parse().unwrap();
    /// let mut context = Context::new();
    ///
    /// assert_eq!(context.evaluate(&program).unwrap(), Some(Value::Number(14.0)));
    /// assert_eq!(context.get_variable("x"), Some(&Value::Number(14.0)));
    /// ```
    pub fn evaluate(&mut self, program: &Program) -> EvalResult<Option<Value>> {
        self.eval_body(&program.statements)
    }

    /// Evaluates a node and returns the resulting value.
    ///
    /// This is the single dispatch point of the evaluator: every AST variant
    /// is handled here, either directly or by a specialized routine.
    ///
    /// # Returns
    /// `Some(Value)` for nodes that produce a value, or `None` for constructs
    /// that do not yield one (loops, function definitions, calls without a
    /// result).
    pub fn eval(&mut self, node: &Node) -> EvalResult<Option<Value>> {
        match node {
            Node::Num { value, .. } => Ok(Some(Value::Number(*value))),
            Node::String { value, .. } => Ok(Some(Value::from(value.as_str()))),
            Node::Array { elements, .. } => {
                let values = elements.iter()
                                     .map(|element| self.eval_value(element))
                                     .collect::<EvalResult<Vec<_>>>()?;
                Ok(Some(Value::from(values)))
            },
            Node::Var { name, line } => {
                let value = self.get_variable(name)
                                .cloned()
                                .ok_or_else(|| RuntimeError::UnknownVariable { name: name.clone(),
                                                                               line: *line, })?;
                Ok(Some(value))
            },
            Node::BinOp { left,
                          op,
                          right,
                          line, } => {
                let left = self.eval_value(left)?;
                let right = self.eval_value(right)?;
                Self::eval_binary(*op, &left, &right, *line).map(Some)
            },
            Node::UnaryOp { op, operand, line } => {
                let value = self.eval_value(operand)?;
                Self::eval_unary(*op, &value, *line).map(Some)
            },
            Node::Assign { target,
                           op,
                           value,
                           line, } => self.eval_assignment(target, *op, value.as_deref(), *line),
            Node::Conditional { cases, else_case, .. } => {
                self.eval_conditional(cases, else_case.as_deref())
            },
            Node::Repeat { count, body, line } => self.eval_repeat(count, body, *line),
            Node::While { condition, body, .. } => self.eval_while(condition, body),
            Node::Each { iterator,
                         iterable,
                         body,
                         line, } => self.eval_each(iterator, iterable, body, *line),
            Node::DefineFunction(def) => {
                self.define_function(def)?;
                Ok(None)
            },
            Node::CallFunction(call) => self.eval_call(call),
            Node::CallArray { name, index, line } => {
                let position = self.eval_value(index)?.as_number(*line)?;
                let position = truncate_to_i64(position, *line)?;

                let container = self.get_variable(name)
                                    .ok_or_else(|| RuntimeError::UnknownVariable { name: name.clone(),
                                                                                   line: *line, })?;
                container.element(position, *line).map(Some)
            },
            Node::CallMethod { receiver, call, line } => {
                self.eval_method_call(receiver, call, *line)
            },
        }
    }

    /// Evaluates a node that must produce a value.
    ///
    /// # Errors
    /// Returns `MissingValue` if the node yields nothing, such as a call to a
    /// function without a `return`.
    pub fn eval_value(&mut self, node: &Node) -> EvalResult<Value> {
        self.eval(node)?
            .ok_or(RuntimeError::MissingValue { line: node.line_number() })
    }

    /// Runs a statement list in order.
    ///
    /// # Returns
    /// The value of the last statement that produced one.
    pub fn eval_body(&mut self, statements: &[Node]) -> EvalResult<Option<Value>> {
        let mut last = None;

        for statement in statements {
            if let Some(value) = self.eval(statement)? {
                last = Some(value);
            }
        }

        Ok(last)
    }
}
