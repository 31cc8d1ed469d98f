//! # nitlang
//!
//! nitlang is a small expression-and-function language interpreter written
//! in Rust. It turns one source line at a time into an abstract syntax tree
//! and evaluates that tree directly, with durable global `let` bindings and
//! named functions persisting across lines like a session.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{
    evaluator::core::Interpreter, lexer::tokenize, parser::statement::parse, value::Value,
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and related types
/// that represent the syntactic structure of source code as a tree. The AST
/// is built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source offsets to AST nodes for error reporting.
/// - Keeps the node set closed so every variant has an evaluator handler.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating code. It standardizes error reporting and carries detailed
/// information about failures, including byte offsets for user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches source offsets and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representation, and error handling to provide a complete runtime for
/// source code evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and values.
/// - Provides entry points for interpreting one line or a whole script.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Evaluates one source line against an existing session.
///
/// The line must contain exactly one statement or expression. Declarations
/// (`let` at the top level, `func` anywhere) mutate the interpreter's
/// durable global state, so later calls observe them; expression lines
/// return their integer result.
///
/// # Errors
/// Returns the first lexing, parsing, or runtime error the line produces.
/// The session state from before the failing call is left intact, so a
/// caller can report the error and keep going with the next line.
///
/// # Examples
/// ```
/// use nitlang::{eval_line, interpreter::evaluator::core::Interpreter};
///
/// let mut session = Interpreter::new();
///
/// eval_line(&mut session, "func double(n) = n * 2").unwrap();
/// let value = eval_line(&mut session, "#double(21)").unwrap();
/// assert_eq!(value.to_string(), "42");
///
/// // 'y' is not defined, so this line fails, but the session survives.
/// assert!(eval_line(&mut session, "y + 1").is_err());
/// assert!(eval_line(&mut session, "#double(1)").is_ok());
/// ```
pub fn eval_line(interpreter: &mut Interpreter,
                 source: &str)
                 -> Result<Value, Box<dyn std::error::Error>> {
    let tokens = tokenize(source)?;
    let statement = parse(&tokens)?;
    let value = interpreter.eval_statement(&statement)?;

    Ok(value)
}

/// Runs a whole script in a fresh session and returns the last value.
///
/// Each non-empty line of `source` is fed through [`eval_line`] in order,
/// sharing one interpreter, so declarations on earlier lines are visible to
/// later ones. Returns `None` for a script with no non-empty lines.
///
/// # Errors
/// Aborts on the first failing line and returns its error.
///
/// # Examples
/// ```
/// use nitlang::run_script;
///
/// let value = run_script("let base = 5\nfunc f() = base + 1\n#f()").unwrap();
/// assert_eq!(value.unwrap().to_string(), "6");
/// ```
pub fn run_script(source: &str) -> Result<Option<Value>, Box<dyn std::error::Error>> {
    let mut interpreter = Interpreter::new();
    let mut result = None;

    for line in source.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        result = Some(eval_line(&mut interpreter, line)?);
    }

    Ok(result)
}
