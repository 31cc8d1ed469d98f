use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language. Whitespace is
/// skipped and never tokenized; there is no comment syntax, so `#` always
/// introduces a function call.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    ///
    /// Literals are non-negative maximal digit runs; there is no literal
    /// negative number. A run that overflows `i64` fails the scan.
    #[regex(r"[0-9]+", parse_integer)]
    Number(i64),
    /// `func`
    #[token("func")]
    Func,
    /// `if`
    #[token("if")]
    If,
    /// `then`
    #[token("then")]
    Then,
    /// `else`
    #[token("else")]
    Else,
    /// `let`
    #[token("let")]
    Let,
    /// `in`
    #[token("in")]
    In,
    /// Identifier tokens; variable or function names such as `x` or `fact`.
    ///
    /// Keywords are reserved: an exact keyword match always wins over this
    /// rule, so `let` or `func` can never name a variable.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `#` — the call-site sigil.
    #[token("#")]
    Hash,
    /// `==` — lexed greedily, so `==` never splits into two `=`.
    #[token("==")]
    EqualEqual,
    /// `=`
    #[token("=")]
    Equals,
}

/// Converts a source line into a sequence of tokens.
///
/// Each token is paired with the 0-based byte offset at which it starts,
/// used by the parser and evaluator for error reporting. Consumption is
/// total: every character is either part of a token, whitespace, or the
/// cause of an error. End of input is represented by the end of the
/// returned sequence.
///
/// # Errors
/// - `InvalidCharacter` for a character that belongs to no token.
/// - `LiteralTooLarge` for a digit run that does not fit in an `i64`.
///
/// # Example
/// ```
/// use nitlang::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("1 + x").unwrap();
/// assert_eq!(tokens[1], (Token::Plus, 2));
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        match token {
            Ok(tok) => tokens.push((tok, position)),
            Err(()) => {
                let slice = lexer.slice();
                // The only rule that can fail after matching is the integer
                // literal; everything else reaching here is an unknown
                // character.
                if slice.starts_with(|c: char| c.is_ascii_digit()) {
                    return Err(ParseError::LiteralTooLarge { position });
                }
                let character = slice.chars().next().unwrap_or_default();
                return Err(ParseError::InvalidCharacter { character, position });
            },
        }
    }

    Ok(tokens)
}

/// Parses an integer literal from the current token slice.
///
/// Returns `None` when the digit run does not fit in an `i64`, which turns
/// the token into a lex error at that span.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}
