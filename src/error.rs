/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code. Parse errors include invalid characters, syntax mistakes, unexpected
/// tokens, and oversized literals, all detected before evaluation.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: unknown
/// names, arity mismatches, division by zero, arithmetic overflow, and the
/// recursion limit.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
