use crate::interpreter::lexer::{Token, TokenKind};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing.
pub enum ParseError {
    /// A specific token kind was required but a different one was found.
    ExpectedToken {
        /// The kind the grammar required.
        expected: TokenKind,
        /// Where in the grammar it was required, e.g. `after 📦`.
        context:  &'static str,
        /// The token actually found.
        found:    Token,
    },
    /// An expression cannot start with the found token.
    ExpectedExpression {
        /// The token actually found.
        found: Token,
    },
    /// A number literal could not be represented as an `f64`.
    InvalidNumber {
        /// The literal's source text.
        lexeme: String,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// A group, block or body opened more levels than the parser allows.
    NestingTooDeep {
        /// The token that opened the level over the limit.
        found: Token,
        /// The number of levels allowed.
        limit: usize,
    },
}

impl ParseError {
    /// The offending token, if the error carries one.
    #[must_use]
    pub const fn token(&self) -> Option<&Token> {
        match self {
            Self::ExpectedToken { found, .. }
            | Self::ExpectedExpression { found }
            | Self::NestingTooDeep { found, .. } => Some(found),
            Self::InvalidNumber { .. } => None,
        }
    }

    /// The source line where the error occurred.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::ExpectedToken { found, .. }
            | Self::ExpectedExpression { found }
            | Self::NestingTooDeep { found, .. } => found.line,
            Self::InvalidNumber { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExpectedToken { expected,
                                  context,
                                  found, } => write!(f,
                                                     "Error on line {}: Expected {expected} {context}, found {found}.",
                                                     found.line),

            Self::ExpectedExpression { found } => {
                write!(f, "Error on line {}: Unexpected token: {found}.", found.line)
            },

            Self::InvalidNumber { lexeme, line } => {
                write!(f, "Error on line {line}: Invalid number literal '{lexeme}'.")
            },

            Self::NestingTooDeep { found, limit } => {
                write!(f,
                       "Error on line {}: Nesting exceeds {limit} levels at {found}.",
                       found.line)
            },
        }
    }
}

impl std::error::Error for ParseError {}
