use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{current_token, expect, nested},
        },
    },
};

/// Parses a primary expression.
///
/// Grammar: `primary := NUMBER | IDENTIFIER | "(" expression ")"`
///
/// # Errors
/// - `ExpectedExpression` if the next token cannot start an expression.
/// - `ExpectedToken` if a group is not closed by `)`.
/// - `NestingTooDeep` if a group opens beyond the nesting limit.
/// - `InvalidNumber` if a number literal does not convert to `f64`.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let token = match tokens.next_if(|token| {
                                matches!(token.kind,
                                         TokenKind::Number
                                         | TokenKind::Identifier
                                         | TokenKind::LParen)
                            }) {
        Some(token) => token,
        None => return Err(ParseError::ExpectedExpression { found: current_token(tokens) }),
    };

    match token.kind {
        TokenKind::Number => parse_number(token),
        TokenKind::LParen => {
            let inner = parse_expression(tokens, nested(depth, token)?)?;
            expect(tokens, TokenKind::RParen, "to close '('")?;
            Ok(inner)
        },
        _ => Ok(Expr::Variable { name: token.lexeme.clone(),
                                 line: token.line, }),
    }
}

/// Converts a NUMBER token into a literal node.
///
/// Only ASCII digit runs have a numeric value; a run of other decimal digits
/// such as `٣٤` scans as a NUMBER but is rejected here.
fn parse_number(token: &Token) -> ParseResult<Expr> {
    let value = token.lexeme
                     .parse::<f64>()
                     .map_err(|_| ParseError::InvalidNumber { lexeme: token.lexeme.clone(),
                                                              line:   token.line, })?;

    Ok(Expr::Number { value,
                      line: token.line })
}
