use std::iter::Peekable;

use crate::{
    ast::{Expr, FunctionDef, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{expect_token, parse_comma_separated, parse_identifier},
        },
    },
};

/// Parses exactly one statement and requires that it consumes all input.
///
/// This is the root of the parser: one source line is one statement. Any
/// token left over after the statement is a syntax error, which is also how
/// non-chaining equality is enforced (`a == b == c` leaves `== c` behind).
///
/// # Parameters
/// - `tokens`: The full token sequence of one source line.
///
/// # Returns
/// The single AST root for the line.
///
/// # Errors
/// - `TrailingTokens` when input remains after one complete statement.
/// - Propagates any errors from statement parsing.
///
/// # Example
/// ```
/// use nitlang::interpreter::{lexer::tokenize, parser::statement::parse};
///
/// let tokens = tokenize("1 + 2").unwrap();
/// assert!(parse(&tokens).is_ok());
///
/// let tokens = tokenize("1 + 2 3").unwrap();
/// assert!(parse(&tokens).is_err());
/// ```
pub fn parse(tokens: &[(Token, usize)]) -> ParseResult<Statement> {
    let mut iter = tokens.iter().peekable();
    let statement = parse_statement(&mut iter)?;

    if let Some((tok, position)) = iter.peek() {
        return Err(ParseError::TrailingTokens { token:    format!("{tok:?}"),
                                                position: *position, });
    }

    Ok(statement)
}

/// Parses a single statement.
///
/// A statement may be one of:
/// - a variable binding (`let x = v`), or a scoped binding when followed by
///   `in` (`let x = v in body`, which is an expression used as a statement),
/// - a function definition (`func f(a, b) = body`),
/// - an expression used as a statement.
///
/// `let` is context-sensitive: here, at statement level, the `in`
/// continuation is optional and its absence makes the binding durable. In
/// expression position the continuation is mandatory.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, offset)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some(statement) = parse_let_statement(tokens)? {
        return Ok(statement);
    }
    if let Some(statement) = parse_function_definition(tokens)? {
        return Ok(statement);
    }

    let offset = tokens.peek().map_or(0, |(_, o)| *o);
    let expr = parse_expression(tokens)?;

    Ok(Statement::Expression { expr, offset })
}

/// Parses a `let` binding at statement level.
///
/// Two forms share the prefix `let <identifier> = <expression>`:
///
/// - without `in`: a durable binding into the enclosing scope, returned as
///   [`Statement::Let`];
/// - with `in <expression>`: a scoped binding, returned as an expression
///   statement wrapping [`Expr::LetExpr`].
///
/// If the next token is not `let`, this function returns `Ok(None)` and
/// does not consume any input.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the bound name is not an identifier,
/// - `=` is missing,
/// - the value or body expression is malformed.
fn parse_let_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Let, offset)) = tokens.peek() {
        let offset = *offset;
        tokens.next();

        let name = parse_identifier(tokens)?;
        expect_token(tokens, &Token::Equals, offset)?;
        let value = parse_expression(tokens)?;

        if let Some((Token::In, _)) = tokens.peek() {
            tokens.next();
            let body = parse_expression(tokens)?;
            let expr = Expr::LetExpr { name,
                                       value: Box::new(value),
                                       body: Box::new(body),
                                       offset };
            return Ok(Some(Statement::Expression { expr, offset }));
        }

        return Ok(Some(Statement::Let { name, value, offset }));
    }

    Ok(None)
}

/// Parses a function definition.
///
/// Syntax: `func <name>(param1, param2, ...) = <expression or block>`
///
/// The body is a brace-delimited block when the token after `=` is `{`,
/// otherwise a single expression. Parameters must be plain identifiers;
/// duplicate names are accepted and bind sequentially, last one winning.
///
/// If the next token is not `func`, this function returns `Ok(None)` and
/// does not consume any input.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the name or a parameter is not an identifier,
/// - parentheses or the `=` are missing,
/// - the body fails to parse.
fn parse_function_definition<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Func, offset)) = tokens.peek() {
        let offset = *offset;
        tokens.next();

        let name = parse_identifier(tokens)?;
        expect_token(tokens, &Token::LParen, offset)?;
        let params = parse_comma_separated(tokens, parse_identifier, &Token::RParen)?;
        expect_token(tokens, &Token::Equals, offset)?;

        let body = match tokens.peek() {
            Some((Token::LBrace, brace_offset)) => {
                let brace_offset = *brace_offset;
                tokens.next();
                parse_block(tokens, brace_offset)?
            },
            _ => parse_expression(tokens)?,
        };

        return Ok(Some(Statement::Function(FunctionDef { name,
                                                         params,
                                                         body,
                                                         offset })));
    }

    Ok(None)
}
