use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::{Call, FunctionDef},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            function::{convert, print, random},
        },
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the context (for output and random numbers), a slice
/// of evaluated argument values and the line number. It returns an optional
/// value wrapped in `EvalResult`.
type BuiltinFn = fn(&mut Context, &[Value], usize) -> EvalResult<Option<Value>>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `Variadic` accepts any number of arguments, including none.
#[derive(Clone, Copy)]
enum Arity {
    Exact(usize),
    Variadic,
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: Arity,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "println" => { arity: Arity::Variadic, func: print::println },
    "print"   => { arity: Arity::Variadic, func: print::print },
    "random"  => { arity: Arity::Exact(2), func: random::random },
    "len"     => { arity: Arity::Exact(1), func: convert::len },
    "str"     => { arity: Arity::Exact(1), func: convert::str },
    "num"     => { arity: Arity::Exact(1), func: convert::num },
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    const fn check(self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == m,
            Self::Variadic => true,
        }
    }
}

impl std::fmt::Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{n}"),
            Self::Variadic => write!(f, "any number of"),
        }
    }
}

/// Whether `name` belongs to a builtin function.
///
/// # Example
/// ```
/// use rill::interpreter::evaluator::function::core::is_builtin;
///
/// assert!(is_builtin("println"));
/// assert!(!is_builtin("area"));
/// ```
#[must_use]
pub fn is_builtin(name: &str) -> bool {
    BUILTIN_FUNCTIONS.contains(&name)
}

impl Context {
    /// Evaluates a function call.
    ///
    /// Arguments are evaluated left to right first. The evaluator then checks
    /// whether the name matches a builtin; if so, it verifies arity and runs
    /// the builtin. Otherwise it calls the user-defined function of that
    /// name.
    ///
    /// # Returns
    /// The function result, or `None` for builtins without a result and user
    /// functions without `return`.
    ///
    /// # Errors
    /// - `ArgumentCountMismatch` if the arity does not match.
    /// - `UnknownFunction` if no function of that name exists.
    pub(crate) fn eval_call(&mut self, call: &Call) -> EvalResult<Option<Value>> {
        let arguments = call.arguments
                            .iter()
                            .map(|argument| self.eval_value(argument))
                            .collect::<EvalResult<Vec<_>>>()?;

        if let Some(builtin) = BUILTIN_TABLE.iter().find(|b| b.name == call.name) {
            if !builtin.arity.check(arguments.len()) {
                return Err(RuntimeError::ArgumentCountMismatch { name:     call.name.clone(),
                                                                 expected: builtin.arity.to_string(),
                                                                 found:    arguments.len(),
                                                                 line:     call.line, });
            }
            return (builtin.func)(self, &arguments, call.line);
        }

        self.call_user_defined_function(&call.name, arguments, call.line)
    }

    /// Executes a user-defined function.
    ///
    /// A fresh frame is pushed holding only the parameters, bound
    /// positionally to the arguments. The body runs in that frame, then the
    /// `return` expression (if any) is evaluated in it, and the frame is
    /// popped again, also when the body fails.
    ///
    /// There is no limit on call depth.
    fn call_user_defined_function(&mut self,
                                  name: &str,
                                  arguments: Vec<Value>,
                                  line: usize)
                                  -> EvalResult<Option<Value>> {
        let function = self.functions.get(name).cloned().ok_or_else(|| {
                                                              RuntimeError::UnknownFunction { name: name.to_string(),
                                                                                              line }
                                                          })?;

        if arguments.len() != function.parameters.len() {
            return Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                             expected: function.parameters
                                                                               .len()
                                                                               .to_string(),
                                                             found: arguments.len(),
                                                             line });
        }

        let frame = function.parameters
                            .iter()
                            .cloned()
                            .zip(arguments)
                            .collect::<HashMap<_, _>>();

        self.frames.push(frame);
        let result = self.run_function_body(&function);
        self.frames.pop();

        result
    }

    fn run_function_body(&mut self, function: &FunctionDef) -> EvalResult<Option<Value>> {
        self.eval_body(&function.body)?;

        match &function.return_expr {
            Some(expr) => self.eval_value(expr).map(Some),
            None => Ok(None),
        }
    }

    /// Registers a user-defined function.
    ///
    /// # Errors
    /// - `BuiltinFunctionRedefinition` if the name belongs to a builtin.
    /// - `FunctionAlreadyDefined` if a user function of that name exists.
    pub(crate) fn define_function(&mut self, def: &Rc<FunctionDef>) -> EvalResult<()> {
        if is_builtin(&def.name) {
            return Err(RuntimeError::BuiltinFunctionRedefinition { name: def.name.clone(),
                                                                   line: def.line, });
        }
        if self.functions.contains_key(&def.name) {
            return Err(RuntimeError::FunctionAlreadyDefined { name: def.name.clone(),
                                                              line: def.line, });
        }

        self.functions.insert(def.name.clone(), Rc::clone(def));
        Ok(())
    }
}
