#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to read a variable that is not bound in the current scope.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a function that is neither a builtin nor user-defined.
    UnknownFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a method the receiver's type does not provide.
    UnknownMethod {
        /// The name of the method.
        method:    String,
        /// The type name of the receiver.
        type_name: &'static str,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// Attempted to define a function that already exists.
    FunctionAlreadyDefined {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted to define a function with the name of a builtin.
    BuiltinFunctionRedefinition {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The wrong number of arguments was supplied to a function or method.
    ArgumentCountMismatch {
        /// The name of the function or method.
        name:     String,
        /// Human-readable description of the accepted argument count.
        expected: String,
        /// The number of arguments actually supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A value had an unexpected or incompatible type.
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Tried to order two values that have no common ordering.
    UnorderedComparison {
        /// Type name of the left operand.
        left:  &'static str,
        /// Type name of the right operand.
        right: &'static str,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An argument was invalid or out of range.
    InvalidArgument {
        /// Details about why the argument is invalid.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// An expression that had to produce a value produced none.
    MissingValue {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to access an element outside the bounds of an array or string.
    IndexOutOfBounds {
        /// The length of the indexed value.
        len:   usize,
        /// The index that was actually requested.
        found: i64,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Writing program output failed.
    Output {
        /// The underlying I/O error message.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, line } => {
                write!(f, "Error on line {line}: Unknown variable '{name}'.")
            },
            Self::UnknownFunction { name, line } => {
                write!(f, "Error on line {line}: Unknown function '{name}'.")
            },
            Self::UnknownMethod { method,
                                  type_name,
                                  line, } => write!(f,
                                                    "Error on line {line}: Values of type {type_name} have no method '{method}'."),
            Self::FunctionAlreadyDefined { name, line } => write!(f,
                                                                  "Error on line {line}: Function '{name}' is already defined."),
            Self::BuiltinFunctionRedefinition { name, line } => write!(f,
                                                                       "Error on line {line}: Cannot redefine built-in function '{name}'."),
            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found,
                                          line, } => write!(f,
                                                            "Error on line {line}: '{name}' takes {expected} argument(s) but {found} were given."),
            Self::TypeError { details, line } => {
                write!(f, "Error on line {line}: Type error: {details}.")
            },
            Self::UnorderedComparison { left, right, line } => write!(f,
                                                                      "Error on line {line}: Cannot order a value of type {left} against a value of type {right}."),
            Self::InvalidArgument { details, line } => {
                write!(f, "Error on line {line}: Invalid argument: {details}.")
            },
            Self::MissingValue { line } => write!(f, "Error on line {line}: Value missing."),
            Self::IndexOutOfBounds { len, found, line } => write!(f,
                                                                  "Error on line {line}: Index out of bounds. Length is {len}, but found index {found}."),
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::Output { details, line } => {
                write!(f, "Error on line {line}: Failed to write output: {details}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
