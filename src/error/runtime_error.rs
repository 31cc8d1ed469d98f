#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// Every variant carries the byte offset of the AST node whose evaluation
/// failed. No runtime error is caught or retried internally: each one aborts
/// the current top-level evaluation and propagates to the caller, leaving
/// the global scope exactly as previous calls left it.
pub enum RuntimeError {
    /// Tried to read a variable that is not bound anywhere in the scope
    /// chain.
    UnknownVariable {
        /// The name of the variable.
        name:     String,
        /// The byte offset of the reference.
        position: usize,
    },
    /// Called a function that was never defined.
    UnknownFunction {
        /// The name of the function.
        name:     String,
        /// The byte offset of the call.
        position: usize,
    },
    /// A function was called with the wrong number of arguments.
    ArityMismatch {
        /// The name of the function.
        name:     String,
        /// The number of parameters the function declares.
        expected: usize,
        /// The number of arguments actually supplied.
        found:    usize,
        /// The byte offset of the call.
        position: usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The byte offset of the division.
        position: usize,
    },
    /// Arithmetic overflowed the 64-bit integer range.
    Overflow {
        /// The byte offset of the operation.
        position: usize,
    },
    /// A function body was an empty block, which has no value.
    EmptyBlock {
        /// The byte offset of the block.
        position: usize,
    },
    /// A declaration acknowledgment was used where an integer is required.
    ///
    /// Raised when a block's last statement is a `let` declaration and the
    /// resulting acknowledgment flows into an arithmetic context.
    DeclarationAsValue {
        /// The byte offset of the consuming operation.
        position: usize,
    },
    /// Function calls nested deeper than the interpreter's call-depth limit.
    RecursionLimit {
        /// The configured depth limit.
        limit:    usize,
        /// The byte offset of the call that exceeded it.
        position: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, position } => {
                write!(f, "Error at position {position}: Unknown variable '{name}'.")
            },
            Self::UnknownFunction { name, position } => {
                write!(f, "Error at position {position}: Unknown function '{name}'.")
            },
            Self::ArityMismatch { name,
                                  expected,
                                  found,
                                  position, } => write!(f,
                "Error at position {position}: Function '{name}' expects {expected} arguments, got {found}."),

            Self::DivisionByZero { position } => {
                write!(f, "Error at position {position}: Division by zero.")
            },
            Self::Overflow { position } => write!(f,
                "Error at position {position}: Integer overflow while trying to compute result."),

            Self::EmptyBlock { position } => {
                write!(f, "Error at position {position}: Function body is an empty block and has no value.")
            },
            Self::DeclarationAsValue { position } => write!(f,
                "Error at position {position}: A declaration has no numeric value and cannot be used here."),

            Self::RecursionLimit { limit, position } => {
                write!(f, "Error at position {position}: Recursion limit of {limit} calls exceeded.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
