/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` covers every construct that yields a value: literals, variable
/// references, arithmetic, equality tests, conditionals, scoped `let`
/// bindings, function calls, and blocks. Each variant carries the byte
/// offset of the token that introduced it, used for error reporting.
///
/// Nodes are built once by the parser and never mutated afterwards; the
/// evaluator only ever borrows them.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// An integer literal, such as `42`.
    Number {
        /// The literal value.
        value:  i64,
        /// Byte offset in the source line.
        offset: usize,
    },
    /// Reference to a variable or parameter by name.
    Variable {
        /// Name of the variable.
        name:   String,
        /// Byte offset in the source line.
        offset: usize,
    },
    /// An arithmetic operation (`+`, `-`, `*`, `/`).
    BinaryOp {
        /// Left operand.
        left:   Box<Self>,
        /// The operator.
        op:     BinaryOperator,
        /// Right operand.
        right:  Box<Self>,
        /// Byte offset of the operator token.
        offset: usize,
    },
    /// An equality test (`==`), yielding 1 or 0.
    ///
    /// Comparisons do not chain: the grammar admits at most one `==` per
    /// comparison, so this variant never nests directly inside itself.
    Comparison {
        /// Left operand.
        left:   Box<Self>,
        /// The comparison operator.
        op:     ComparisonOperator,
        /// Right operand.
        right:  Box<Self>,
        /// Byte offset of the operator token.
        offset: usize,
    },
    /// Conditional expression: `if c then a else b`.
    ///
    /// Both branches are mandatory; only the taken branch is evaluated.
    IfExpr {
        /// The condition expression. Zero is false, anything else is true.
        condition:   Box<Self>,
        /// Expression evaluated when the condition is non-zero.
        then_branch: Box<Self>,
        /// Expression evaluated when the condition is zero.
        else_branch: Box<Self>,
        /// Byte offset of the `if` token.
        offset:      usize,
    },
    /// A scoped binding with an explicit continuation: `let x = v in body`.
    ///
    /// The binding lives in a child scope for exactly the duration of the
    /// body evaluation and is discarded afterwards.
    LetExpr {
        /// Name being bound.
        name:   String,
        /// The bound value expression, evaluated in the enclosing scope.
        value:  Box<Self>,
        /// The body evaluated with the binding in scope.
        body:   Box<Self>,
        /// Byte offset of the `let` token.
        offset: usize,
    },
    /// Function call expression: `#name(arg1, arg2, ...)`.
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Argument expressions, evaluated left to right in the caller's
        /// scope.
        arguments: Vec<Self>,
        /// Byte offset of the `#` token.
        offset:    usize,
    },
    /// A brace-delimited sequence of statements used as a function body.
    ///
    /// The block's value is the value of its last statement. An empty block
    /// is syntactically valid but has no value; evaluating one is a defined
    /// runtime error.
    Block {
        /// Statements inside the block.
        statements: Vec<Statement>,
        /// Byte offset of the opening brace.
        offset:     usize,
    },
}

impl Expr {
    /// Gets the source offset from `self`.
    ///
    /// ## Example
    /// ```
    /// use nitlang::ast::Expr;
    ///
    /// let expr = Expr::Variable { name:   "x".to_string(),
    ///                             offset: 4, };
    ///
    /// assert_eq!(expr.offset(), 4);
    /// ```
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::Number { offset, .. }
            | Self::Variable { offset, .. }
            | Self::BinaryOp { offset, .. }
            | Self::Comparison { offset, .. }
            | Self::IfExpr { offset, .. }
            | Self::LetExpr { offset, .. }
            | Self::FunctionCall { offset, .. }
            | Self::Block { offset, .. } => *offset,
        }
    }
}

/// Represents a named user-defined function.
///
/// A function binds an ordered list of parameter names to a body, which is
/// either a single expression or a block. Arity is fixed at definition time
/// and enforced at every call site. Functions are only ever registered in
/// the global scope.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:   String,
    /// The parameter names, in binding order. Duplicates are permitted;
    /// the last positional binding wins.
    pub params: Vec<String>,
    /// The body evaluated when the function is called.
    pub body:   Expr,
    /// Byte offset of the `func` token.
    pub offset: usize,
}

/// Represents a top-level statement.
///
/// Statements are the units parsed from input lines. A statement either
/// mutates the enclosing scope (`let`, `func`) or is a bare expression
/// evaluated for its value.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A durable variable binding: `let x = 10` with no continuation.
    ///
    /// At the top level this writes into the global scope; inside a function
    /// body block it writes into that call's local scope.
    Let {
        /// The name of the variable.
        name:   String,
        /// The bound value expression.
        value:  Expr,
        /// Byte offset of the `let` token.
        offset: usize,
    },
    /// A function definition: `func f(a, b) = body`.
    Function(FunctionDef),
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr:   Expr,
        /// Byte offset of the first token.
        offset: usize,
    },
}

/// Represents an arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Floor division (`/`)
    Div,
}

/// Represents a comparison operator.
///
/// Equality is the only comparison the language supports. Keeping it as a
/// closed enum means an unsupported operator cannot reach the evaluator at
/// all.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ComparisonOperator {
    /// Equal to (`==`)
    Equal,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Equal => write!(f, "=="),
        }
    }
}
