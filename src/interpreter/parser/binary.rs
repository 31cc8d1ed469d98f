use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, ComparisonOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{parse_comma_separated, parse_identifier},
        },
    },
};

/// Parses the comparison level, the loosest-binding operator.
///
/// Equality does not chain: at most one `==` is consumed here, so
/// `a == b == c` leaves `== c` unconsumed and fails the root parse as
/// trailing tokens.
///
/// The rule is: `comparison := additive ("==" additive)?`
///
/// # Parameters
/// - `tokens`: Token stream with offset information.
///
/// # Returns
/// Either the plain additive expression or a `Expr::Comparison` node.
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let left = parse_additive(tokens)?;

    if let Some((Token::EqualEqual, offset)) = tokens.peek() {
        let offset = *offset;
        tokens.next();
        let right = parse_additive(tokens)?;
        return Ok(Expr::Comparison { left: Box::new(left),
                                     op: ComparisonOperator::Equal,
                                     right: Box::new(right),
                                     offset });
    }

    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with offset information.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_multiplicative(tokens)?;
    loop {
        if let Some((token, offset)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let offset = *offset;
            tokens.next();
            let right = parse_multiplicative(tokens)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    offset };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`, which bind tighter than
/// the additive level.
///
/// The rule is: `multiplicative := factor (("*" | "/") factor)*`
///
/// # Parameters
/// - `tokens`: Token stream with offset information.
///
/// # Returns
/// A binary expression tree combining factor-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_factor(tokens)?;
    loop {
        if let Some((token, offset)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            let offset = *offset;
            tokens.next();
            let right = parse_factor(tokens)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    offset };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses an atomic factor.
///
/// A factor is one of:
///
/// - an integer literal,
/// - a variable reference,
/// - a parenthesized expression,
/// - a function call, introduced by the `#` sigil: `#name(args)`.
///
/// The rule is:
/// `factor := NUMBER | IDENT | "(" expression ")" | "#" IDENT "(" args ")"`
///
/// # Parameters
/// - `tokens`: Token stream with offset information.
///
/// # Errors
/// - `ExpectedClosingParen` for an unterminated parenthesized expression.
/// - `UnexpectedToken` / `UnexpectedEndOfInput` for anything that cannot
///   start a factor.
pub fn parse_factor<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Number(value), offset)) => Ok(Expr::Number { value:  *value,
                                                                  offset: *offset, }),

        Some((Token::Identifier(name), offset)) => Ok(Expr::Variable { name:   name.clone(),
                                                                       offset: *offset, }),

        Some((Token::LParen, offset)) => {
            let node = parse_expression(tokens)?;
            match tokens.next() {
                Some((Token::RParen, _)) => Ok(node),
                Some((_, position)) => {
                    Err(ParseError::ExpectedClosingParen { position: *position })
                },
                None => Err(ParseError::ExpectedClosingParen { position: *offset }),
            }
        },

        Some((Token::Hash, offset)) => parse_function_call(tokens, *offset),

        Some((tok, position)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected number, identifier, '(' or '#', found {tok:?}"),
                                              position: *position, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { position: 0 }),
    }
}

/// Parses a function call after its `#` sigil has been consumed.
///
/// Syntax: `#<identifier>(<expression> ("," <expression>)*)`
///
/// Argument expressions are full expressions, so calls nest and may contain
/// conditionals or scoped bindings.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the function name.
/// - `offset`: Byte offset of the `#` token.
fn parse_function_call<'a, I>(tokens: &mut Peekable<I>, offset: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let name = parse_identifier(tokens)?;

    match tokens.next() {
        Some((Token::LParen, _)) => {},
        Some((tok, position)) => {
            return Err(ParseError::UnexpectedToken { token: format!("Expected '(' after function name, found {tok:?}"),
                                                     position: *position, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { position: offset }),
    }

    let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;

    Ok(Expr::FunctionCall { name, arguments, offset })
}

/// Maps an operator token to its arithmetic operator, if it is one.
const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
