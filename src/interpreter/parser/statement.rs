use std::iter::Peekable;

use crate::{
    ast::Statement,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{consume_if, current_token, expect, nested, peek_kind},
        },
    },
};

/// The identifier that introduces the else-branch of a `❓` statement.
pub const ELSE_KEYWORD: &str = "else";

/// Parses a single statement.
///
/// A statement may be one of:
/// - an assignment (`📦 name == expression`).
/// - a print statement (`📢 expression`).
/// - a conditional (`❓ condition body`, optionally followed by `else body`).
/// - a loop (`🔁 condition body`).
/// - a block (`{ statement* }`).
/// - an expression, which is printed.
///
/// Parsing is attempted in that order; the first matching construct is
/// returned. If none match, the input is parsed as an expression statement.
///
/// # Parameters
/// - `tokens`: Token iterator.
/// - `depth`: How many blocks and bodies enclose this statement.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    if let Some(statement) = parse_assignment(tokens, depth)? {
        return Ok(statement);
    }
    if let Some(statement) = parse_print(tokens, depth)? {
        return Ok(statement);
    }
    if let Some(statement) = parse_if(tokens, depth)? {
        return Ok(statement);
    }
    if let Some(statement) = parse_while(tokens, depth)? {
        return Ok(statement);
    }
    if peek_kind(tokens) == TokenKind::LBrace {
        return parse_block(tokens, depth);
    }

    parse_expression_statement(tokens, depth)
}

/// Parses `📦 IDENTIFIER == expression ;?`.
///
/// The `==` token doubles as the assignment separator.
///
/// # Errors
/// Returns `ExpectedToken` if the identifier or the `==` is missing.
///
/// # Returns
/// - `Ok(Some(statement))` if an assignment was parsed,
/// - `Ok(None)` if the next token is not `📦`.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>,
                           depth: usize)
                           -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a Token>
{
    let Some(keyword) = tokens.next_if(|token| token.kind == TokenKind::Assign) else {
        return Ok(None);
    };

    let name = expect(tokens, TokenKind::Identifier, "after 📦")?;
    expect(tokens, TokenKind::EqualEqual, "after the assigned name")?;
    let value = parse_expression(tokens, depth)?;
    consume_if(tokens, TokenKind::Semicolon);

    Ok(Some(Statement::VariableAssignment { name: name.lexeme.clone(),
                                            value,
                                            line: keyword.line }))
}

/// Parses `📢 expression ;?`.
fn parse_print<'a, I>(tokens: &mut Peekable<I>,
                      depth: usize)
                      -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a Token>
{
    let Some(keyword) = tokens.next_if(|token| token.kind == TokenKind::Print) else {
        return Ok(None);
    };

    let value = parse_expression(tokens, depth)?;
    consume_if(tokens, TokenKind::Semicolon);

    Ok(Some(Statement::Print { value,
                               line: keyword.line }))
}

/// Parses `❓ condition body (else body)?`.
///
/// The else-branch is introduced by an identifier spelled exactly `else`. Any
/// other identifier after the then-branch is left in the stream and starts
/// the next statement.
fn parse_if<'a, I>(tokens: &mut Peekable<I>,
                   depth: usize)
                   -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a Token>
{
    let Some(keyword) = tokens.next_if(|token| token.kind == TokenKind::If) else {
        return Ok(None);
    };

    let condition = parse_expression(tokens, depth)?;
    let then_branch = parse_body(tokens, depth)?;

    let else_branch = if tokens.next_if(|token| {
                                   token.kind == TokenKind::Identifier
                                   && token.lexeme == ELSE_KEYWORD
                               })
                               .is_some()
    {
        Some(Box::new(parse_body(tokens, depth)?))
    } else {
        None
    };

    Ok(Some(Statement::If { condition,
                            then_branch: Box::new(then_branch),
                            else_branch,
                            line: keyword.line }))
}

/// Parses `🔁 condition body`.
fn parse_while<'a, I>(tokens: &mut Peekable<I>,
                      depth: usize)
                      -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a Token>
{
    let Some(keyword) = tokens.next_if(|token| token.kind == TokenKind::While) else {
        return Ok(None);
    };

    let condition = parse_expression(tokens, depth)?;
    let body = parse_body(tokens, depth)?;

    Ok(Some(Statement::While { condition,
                               body: Box::new(body),
                               line: keyword.line }))
}

/// Parses the body of a `❓` or `🔁`: a block, or else a single statement.
///
/// A single-statement body counts as one nesting level, like a block.
fn parse_body<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    if peek_kind(tokens) == TokenKind::LBrace {
        parse_block(tokens, depth)
    } else {
        let depth = nested(depth, &current_token(tokens))?;
        parse_statement(tokens, depth)
    }
}

/// Parses a bare expression, which is displayed like a print statement.
fn parse_expression_statement<'a, I>(tokens: &mut Peekable<I>,
                                     depth: usize)
                                     -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let line = current_token(tokens).line;
    let value = parse_expression(tokens, depth)?;
    consume_if(tokens, TokenKind::Semicolon);

    Ok(Statement::Print { value, line })
}
