use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{MAX_NESTING_DEPTH, ParseResult},
    },
};

/// Returns the kind of the next token without consuming it.
///
/// An exhausted iterator reads as [`TokenKind::EndOfInput`], so callers never
/// have to distinguish a missing end marker from a present one.
pub(in crate::interpreter::parser) fn peek_kind<'a, I>(tokens: &mut Peekable<I>) -> TokenKind
    where I: Iterator<Item = &'a Token>
{
    tokens.peek().map_or(TokenKind::EndOfInput, |token| token.kind)
}

/// Returns a copy of the next token for error reporting.
///
/// An exhausted iterator yields an end marker on line 1.
pub(in crate::interpreter::parser) fn current_token<'a, I>(tokens: &mut Peekable<I>) -> Token
    where I: Iterator<Item = &'a Token>
{
    tokens.peek()
          .map_or_else(|| Token::new(TokenKind::EndOfInput, "", 1), |token| (*token).clone())
}

/// Consumes the next token if it has the given kind.
///
/// # Returns
/// `true` when a token was consumed.
pub(in crate::interpreter::parser) fn consume_if<'a, I>(tokens: &mut Peekable<I>,
                                                        kind: TokenKind)
                                                        -> bool
    where I: Iterator<Item = &'a Token>
{
    tokens.next_if(|token| token.kind == kind).is_some()
}

/// Consumes the next token, which must have the `expected` kind.
///
/// # Parameters
/// - `tokens`: Token iterator.
/// - `expected`: The required token kind.
/// - `context`: Where the token is required, used in the error message.
///
/// # Errors
/// Returns `ParseError::ExpectedToken` carrying the token actually found. The
/// offending token is not consumed.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: TokenKind,
                                                    context: &'static str)
                                                    -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next_if(|token| token.kind == expected) {
        Some(token) => Ok(token),
        None => Err(ParseError::ExpectedToken { expected,
                                                context,
                                                found: current_token(tokens) }),
    }
}

/// Enters one more nesting level below `depth`.
///
/// # Errors
/// Returns `ParseError::NestingTooDeep` at `token` once [`MAX_NESTING_DEPTH`]
/// levels are already open.
pub(in crate::interpreter::parser) fn nested(depth: usize, token: &Token) -> ParseResult<usize> {
    if depth >= MAX_NESTING_DEPTH {
        return Err(ParseError::NestingTooDeep { found: token.clone(),
                                                limit: MAX_NESTING_DEPTH, });
    }

    Ok(depth + 1)
}
