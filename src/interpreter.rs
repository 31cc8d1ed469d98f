/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST recursively, dispatching on node kind. It
/// manages the chain of scope frames, the durable global scope, and the
/// global function table, and it reports runtime errors such as unknown
/// names or division by zero.
///
/// # Responsibilities
/// - Evaluates statements and expressions against the session state.
/// - Maintains the push/pop discipline on the current scope.
/// - Enforces arity, the recursion limit, and integer-only arithmetic.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads one raw source line and produces a sequence of tokens,
/// each paired with its byte offset. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into offset-tagged tokens.
/// - Distinguishes keywords from identifiers and `==` from `=`.
/// - Reports lexical errors for invalid characters and oversized literals.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a recursive-descent parser over the token stream: one
/// production per function, with precedence encoded in the call structure.
/// One call parses exactly one statement or expression and demands that it
/// spans the whole input line.
///
/// # Responsibilities
/// - Builds one AST root per source line.
/// - Enforces the context-sensitive `let` rules and non-chaining equality.
/// - Reports syntax errors with the offending token and its offset.
pub mod parser;
/// Runtime values.
///
/// Defines the [`value::Value`] type: an integer result or a declaration
/// acknowledgment.
pub mod value;
