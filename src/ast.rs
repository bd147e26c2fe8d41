use std::rc::Rc;

/// A whole parsed program.
///
/// The top-level statements in source order. Produced once by
/// [`crate::interpreter::parser::core::Parser::parse`] and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// Top-level statements in source order.
    pub statements: Vec<Node>,
}

/// An abstract syntax tree (AST) node.
///
/// Covers expressions and statements alike: the grammar decides where each
/// variant may appear, the evaluator handles all of them through one
/// exhaustive `match`. Every node owns its children and carries the line it
/// started on.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A binary arithmetic or comparison operation.
    BinOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A prefix `+` or `-`.
    UnaryOp {
        /// The operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
        /// Line number in the source code.
        line:    usize,
    },
    /// A number literal.
    Num {
        /// The literal value.
        value: f64,
        /// Line number in the source code.
        line:  usize,
    },
    /// A string literal, quotes excluded.
    String {
        /// The literal text.
        value: String,
        /// Line number in the source code.
        line:  usize,
    },
    /// An array literal such as `[1, 2, 3]`.
    Array {
        /// Element expressions in source order.
        elements: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// Reference to a variable by name.
    Var {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// Plain, compound, increment or decrement assignment.
    Assign {
        /// The variable being assigned.
        target: String,
        /// The assignment operator.
        op:     AssignOperator,
        /// The right-hand side; absent for `++` and `--`.
        value:  Option<Box<Self>>,
        /// Line number in the source code.
        line:   usize,
    },
    /// A full `if` / `elseif` / `else` chain.
    Conditional {
        /// The `if` arm followed by every `elseif` arm, in order.
        cases:     Vec<If>,
        /// The final `else` arm, if any. Its condition is always `None`.
        else_case: Option<Box<If>>,
        /// Line number in the source code.
        line:      usize,
    },
    /// `repeat <count> then ... end`.
    Repeat {
        /// How many times to run the body, truncated towards zero.
        count: Box<Self>,
        /// The loop body.
        body:  Vec<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// `while <comparison> then ... end`.
    While {
        /// Checked before every iteration.
        condition: Box<Self>,
        /// The loop body.
        body:      Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// `each <name> in <iterable> then ... end`.
    Each {
        /// The name bound to each element.
        iterator: String,
        /// Expression producing the array or string to walk.
        iterable: Box<Self>,
        /// The loop body.
        body:     Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// A function definition.
    DefineFunction(Rc<FunctionDef>),
    /// A call such as `println(x)` or `area(w, h)`.
    CallFunction(Call),
    /// Indexing into a named array, as in `values[2]`.
    CallArray {
        /// Name of the indexed variable.
        name:  String,
        /// The index expression.
        index: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A method call on a named variable, as in `values.push(4)`.
    CallMethod {
        /// Name of the receiver variable.
        receiver: String,
        /// The method name and its arguments.
        call:     Call,
        /// Line number in the source code.
        line:     usize,
    },
}

impl Node {
    /// Returns the source line this node started on.
    #[must_use]
    pub fn line_number(&self) -> usize {
        match self {
            Self::BinOp { line, .. }
            | Self::UnaryOp { line, .. }
            | Self::Num { line, .. }
            | Self::String { line, .. }
            | Self::Array { line, .. }
            | Self::Var { line, .. }
            | Self::Assign { line, .. }
            | Self::Conditional { line, .. }
            | Self::Repeat { line, .. }
            | Self::While { line, .. }
            | Self::Each { line, .. }
            | Self::CallArray { line, .. }
            | Self::CallMethod { line, .. } => *line,
            Self::DefineFunction(def) => def.line,
            Self::CallFunction(call) => call.line,
        }
    }
}

/// One arm of a conditional.
#[derive(Debug, Clone, PartialEq)]
pub struct If {
    /// The arm's comparison; `None` marks the `else` arm.
    pub condition: Option<Node>,
    /// Statements run when the arm is taken.
    pub body:      Vec<Node>,
    /// Line number in the source code.
    pub line:      usize,
}

/// A user-defined function as written in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The function name.
    pub name:        String,
    /// Parameter names, bound positionally.
    pub parameters:  Vec<String>,
    /// The body statements.
    pub body:        Vec<Node>,
    /// Expression following `return`, evaluated after the body.
    pub return_expr: Option<Node>,
    /// Line number in the source code.
    pub line:        usize,
}

/// A function call: a name and its argument expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    /// Name of the function or method.
    pub name:      String,
    /// Argument expressions in source order.
    pub arguments: Vec<Node>,
    /// Line number in the source code.
    pub line:      usize,
}

/// Operators that combine two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
}

impl BinaryOperator {
    /// Whether the operator is one of the six comparisons.
    #[must_use]
    pub const fn is_comparison(self) -> bool {
        matches!(self,
                 Self::Equal
                 | Self::NotEqual
                 | Self::Less
                 | Self::LessEqual
                 | Self::Greater
                 | Self::GreaterEqual)
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
        };
        write!(f, "{symbol}")
    }
}

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// `+x`
    Plus,
    /// `-x`
    Negate,
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plus => write!(f, "+"),
            Self::Negate => write!(f, "-"),
        }
    }
}

/// The operator of an assignment statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOperator {
    /// `=`
    Set,
    /// `+=`
    Add,
    /// `-=`
    Sub,
    /// `*=`
    Mul,
    /// `/=`
    Div,
    /// `++`
    Increment,
    /// `--`
    Decrement,
}

impl AssignOperator {
    /// The arithmetic operator a compound assignment applies, if any.
    ///
    /// `++` and `--` map to `+` and `-` with an implicit right-hand side of
    /// one.
    ///
    /// # Example
    /// ```
    /// use rill::ast::{AssignOperator, BinaryOperator};
    ///
    /// assert_eq!(AssignOperator::Mul.arithmetic(), Some(BinaryOperator::Mul));
    /// assert_eq!(AssignOperator::Decrement.arithmetic(), Some(BinaryOperator::Sub));
    /// assert_eq!(AssignOperator::Set.arithmetic(), None);
    /// ```
    #[must_use]
    pub const fn arithmetic(self) -> Option<BinaryOperator> {
        match self {
            Self::Set => None,
            Self::Add | Self::Increment => Some(BinaryOperator::Add),
            Self::Sub | Self::Decrement => Some(BinaryOperator::Sub),
            Self::Mul => Some(BinaryOperator::Mul),
            Self::Div => Some(BinaryOperator::Div),
        }
    }
}
