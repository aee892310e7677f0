use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, primary::parse_primary},
    },
};

/// Parses equality expressions.
///
/// The rule is: `equality := comparison (("==" | "!=") comparison)*`
pub fn parse_equality<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_left_associative(tokens, depth, parse_comparison, |op| {
        matches!(op, BinaryOperator::Equal | BinaryOperator::NotEqual)
    })
}

/// Parses relational expressions.
///
/// The rule is: `comparison := term ((">" | "<") term)*`
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_left_associative(tokens, depth, parse_term, |op| {
        matches!(op, BinaryOperator::Greater | BinaryOperator::Less)
    })
}

/// Parses addition and subtraction expressions.
///
/// The rule is: `term := factor (("➕" | "➖") factor)*`
pub fn parse_term<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_left_associative(tokens, depth, parse_factor, |op| {
        matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
    })
}

/// Parses multiplication and division expressions.
///
/// The rule is: `factor := primary (("✖" | "➗") primary)*`
pub fn parse_factor<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_left_associative(tokens, depth, parse_primary, |op| {
        matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
    })
}

/// Folds one precedence level into a left-leaning `BinaryOp` tree.
///
/// Parses an operand with `operand`, then, while the next token maps to an
/// operator accepted by `accepts`, consumes it and parses another operand.
/// `a ➖ b ➖ c` therefore becomes `(a ➖ b) ➖ c`.
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `depth`: Current nesting level, passed on to `operand`.
/// - `operand`: Parser for the next-higher precedence level.
/// - `accepts`: Selects the operators that belong to this level.
fn parse_left_associative<'a, I>(tokens: &mut Peekable<I>,
                                 depth: usize,
                                 operand: fn(&mut Peekable<I>, usize) -> ParseResult<Expr>,
                                 accepts: fn(BinaryOperator) -> bool)
                                 -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = operand(tokens, depth)?;

    while let Some(token) = tokens.peek() {
        let op = match BinaryOperator::from_token(token.kind) {
            Some(op) if accepts(op) => op,
            _ => break,
        };

        let line = token.line;
        tokens.next(); // consume operator

        let right = operand(tokens, depth)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                line };
    }

    Ok(left)
}
