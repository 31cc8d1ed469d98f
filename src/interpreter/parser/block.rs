use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, statement::parse_statement},
    },
};

/// Parses a block delimited by braces.
///
/// A block consists of zero or more statements and is only valid as a
/// function body. Parsing continues until a closing `}` token is
/// encountered. An empty block parses successfully; evaluating it is a
/// defined runtime error.
///
/// Grammar: `block := "{" statement* "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned after the opening brace.
/// - `offset`: Byte offset of the opening brace.
///
/// # Returns
/// A block expression containing all parsed statements.
///
/// # Errors
/// - `UnexpectedEndOfInput` when the closing brace is missing.
/// - Propagates any errors from statement parsing.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>, offset: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut statements = Vec::new();

    loop {
        match tokens.peek() {
            Some((Token::RBrace, _)) => {
                tokens.next();
                break;
            },
            Some(_) => statements.push(parse_statement(tokens)?),
            None => return Err(ParseError::UnexpectedEndOfInput { position: offset }),
        }
    }

    Ok(Expr::Block { statements, offset })
}
