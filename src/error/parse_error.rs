#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
///
/// Every variant carries the 0-based byte offset in the source line where
/// the error was detected.
pub enum ParseError {
    /// The lexer encountered a character that belongs to no token.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// The byte offset where the character appears.
        position:  usize,
    },
    /// An integer literal does not fit in a 64-bit signed integer.
    LiteralTooLarge {
        /// The byte offset where the literal starts.
        position: usize,
    },
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// A description of the token encountered and what was expected.
        token:    String,
        /// The byte offset of the token.
        position: usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The byte offset of the last consumed token.
        position: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The byte offset where `)` was expected.
        position: usize,
    },
    /// A `let` binding appeared in expression position without `in`.
    ///
    /// `let x = v` is only a statement at the top level of a line or block;
    /// wherever an expression is required it must read `let x = v in body`.
    LetWithoutIn {
        /// The byte offset of the `let` token.
        position: usize,
    },
    /// Found extra tokens after one complete statement was parsed.
    TrailingTokens {
        /// The first extra token.
        token:    String,
        /// The byte offset of that token.
        position: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { character, position } => {
                write!(f, "Error at position {position}: Invalid character '{character}'.")
            },

            Self::LiteralTooLarge { position } => {
                write!(f, "Error at position {position}: Integer literal is too large.")
            },

            Self::UnexpectedToken { token, position } => {
                write!(f, "Error at position {position}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { position } => {
                write!(f, "Error at position {position}: Unexpected end of input.")
            },

            Self::ExpectedClosingParen { position } => write!(f,
                "Error at position {position}: Expected closing parenthesis ')' but none found."),

            Self::LetWithoutIn { position } => write!(f,
                "Error at position {position}: 'let' without 'in' is not allowed in expression position. Use 'let x = ... in ...'."),

            Self::TrailingTokens { token, position } => write!(f,
                "Error at position {position}: Extra tokens after statement. Check your input: {token}"),
        }
    }
}

impl std::error::Error for ParseError {}
