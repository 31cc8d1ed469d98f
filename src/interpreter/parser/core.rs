use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_comparison,
            utils::{expect_token, parse_identifier},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing. An expression is one of:
///
/// - an `if ... then ... else ...` conditional,
/// - a scoped `let ... in ...` binding,
/// - a comparison, the lowest-precedence operator level.
///
/// A `let` lacking `in` is a hard error here: in expression position a
/// binding must have an explicit continuation.
///
/// Grammar: `expression := if | let_in | comparison`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, offset)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::If, offset)) => {
            let offset = *offset;
            tokens.next();
            parse_if(tokens, offset)
        },
        Some((Token::Let, offset)) => {
            let offset = *offset;
            tokens.next();
            parse_let_expression(tokens, offset)
        },
        _ => parse_comparison(tokens),
    }
}

/// Parses an `if` expression.
///
/// Syntax: `if <condition> then <expression> else <expression>`
///
/// Both branches are mandatory. The condition and branches are full
/// expressions, so conditionals nest freely.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `if` keyword.
/// - `offset`: Byte offset of the `if` token.
///
/// # Errors
/// - `UnexpectedToken` if `then` or `else` is missing.
/// - Propagates any errors from sub-expression parsing.
pub fn parse_if<'a, I>(tokens: &mut Peekable<I>, offset: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let condition = parse_expression(tokens)?;
    expect_token(tokens, &Token::Then, offset)?;
    let then_branch = parse_expression(tokens)?;
    expect_token(tokens, &Token::Else, offset)?;
    let else_branch = parse_expression(tokens)?;

    Ok(Expr::IfExpr { condition: Box::new(condition),
                      then_branch: Box::new(then_branch),
                      else_branch: Box::new(else_branch),
                      offset })
}

/// Parses a scoped `let` binding in expression position.
///
/// Syntax: `let <identifier> = <expression> in <expression>`
///
/// The `in` continuation is required: without it the binding would be a
/// durable statement, which is not a valid expression.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `let` keyword.
/// - `offset`: Byte offset of the `let` token.
///
/// # Errors
/// - `LetWithoutIn` when the `in` keyword is absent.
/// - Propagates any errors from identifier or sub-expression parsing.
pub fn parse_let_expression<'a, I>(tokens: &mut Peekable<I>, offset: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let name = parse_identifier(tokens)?;
    expect_token(tokens, &Token::Equals, offset)?;
    let value = parse_expression(tokens)?;

    match tokens.peek() {
        Some((Token::In, _)) => {
            tokens.next();
        },
        _ => return Err(ParseError::LetWithoutIn { position: offset }),
    }

    let body = parse_expression(tokens)?;

    Ok(Expr::LetExpr { name,
                       value: Box::new(value),
                       body: Box::new(body),
                       offset })
}
