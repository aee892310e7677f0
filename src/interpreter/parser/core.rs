use std::iter::{self, Peekable};

use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{binary::parse_equality, statement::parse_statement, utils::peek_kind},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// How deeply groups, blocks and `❓`/`🔁` bodies may nest inside each other.
///
/// Parsing and evaluation recurse once per level, so the limit keeps both on
/// the stack of an ordinary thread.
pub const MAX_NESTING_DEPTH: usize = 100;

/// Parses a complete token sequence into the program's top-level statements.
///
/// # Errors
/// Returns the first `ParseError` encountered. No partial program is
/// returned.
///
/// A sequence that does not end with the end-of-input marker is read as if
/// one followed its last token, on that token's line.
///
/// # Example
/// ```
/// use emojilang::{
///     ast::Statement,
///     interpreter::{lexer::scan, parser::core::parse},
/// };
///
/// let program = parse(&scan("📦 x == 1; 📢 x")).unwrap();
///
/// assert_eq!(program.len(), 2);
/// assert!(matches!(program[1], Statement::Print { .. }));
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Vec<Statement>> {
    match tokens.last() {
        Some(last) if !last.is_end() => {
            let end = Token::new(TokenKind::EndOfInput, "", last.line);
            parse_program(&mut tokens.iter().chain(iter::once(&end)).peekable())
        },
        _ => parse_program(&mut tokens.iter().peekable()),
    }
}

/// Parses statements until the end of input.
///
/// Grammar: `program := (";" | statement)* END_OF_INPUT`
///
/// Stray semicolons between top-level statements are skipped.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a Token>
{
    let mut statements = Vec::new();

    loop {
        match peek_kind(tokens) {
            TokenKind::EndOfInput => break,
            TokenKind::Semicolon => {
                tokens.next();
            },
            _ => statements.push(parse_statement(tokens, 0)?),
        }
    }

    Ok(statements)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, equality, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := equality`
///
/// `depth` is the nesting level of the enclosing construct; see
/// [`MAX_NESTING_DEPTH`].
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_equality(tokens, depth)
}
