/// Precedence levels for binary expressions.
///
/// Implements the comparison, additive, and multiplicative levels plus the
/// atomic factor rule, including parenthesized expressions and `#`-sigil
/// function calls. Each precedence level is one function, and arithmetic is
/// left-associative at each level.
pub mod binary;
/// Block parsing.
///
/// Parses brace-delimited statement sequences used as function bodies.
pub mod block;
/// Expression entry points.
///
/// Defines the `ParseResult` alias and the top of the expression grammar:
/// conditionals, scoped `let ... in` bindings, and the descent into the
/// precedence levels.
pub mod core;
/// Statement parsing.
///
/// Parses the three statement forms (`let` bindings, `func` definitions,
/// bare expressions) and provides the root `parse` function that demands
/// exactly one statement per input line.
pub mod statement;
/// Shared parsing helpers.
///
/// Comma-separated lists, identifier parsing, and mandatory-token
/// consumption, used across the other parser modules.
pub mod utils;
