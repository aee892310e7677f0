use std::iter::Peekable;

use crate::{
    ast::Statement,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::ParseResult,
            statement::parse_statement,
            utils::{expect, nested, peek_kind},
        },
    },
};

/// Parses a block delimited by braces.
///
/// A block consists of zero or more statements. Parsing continues until a
/// closing `}` token or the end of input is reached.
///
/// Grammar: `block := "{" statement* "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the opening brace.
/// - `depth`: Nesting level outside the block.
///
/// # Errors
/// Returns `ExpectedToken` when the opening brace is missing or the input
/// ends before the closing brace, and `NestingTooDeep` when the block opens
/// beyond the nesting limit.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let opening = expect(tokens, TokenKind::LBrace, "to open a block")?;
    let depth = nested(depth, opening)?;
    let mut statements = Vec::new();

    while !matches!(peek_kind(tokens), TokenKind::RBrace | TokenKind::EndOfInput) {
        statements.push(parse_statement(tokens, depth)?);
    }

    expect(tokens, TokenKind::RBrace, "to close the block")?;

    Ok(Statement::Block { statements,
                          line: opening.line })
}
