use std::mem;

use crate::interpreter::lexer::TokenKind;

/// The binary operators recognized by the evaluator.
///
/// The first four are floating-point arithmetic; the last four are
/// comparisons that produce `1.0` for true and `0.0` for false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`➕`).
    Add,
    /// Subtraction (`➖`).
    Sub,
    /// Multiplication (`✖`).
    Mul,
    /// Division (`➗`).
    Div,
    /// Greater than (`>`).
    Greater,
    /// Less than (`<`).
    Less,
    /// Equal to (`==`).
    Equal,
    /// Not equal to (`!=`).
    NotEqual,
}

impl BinaryOperator {
    /// Maps a token kind to its binary operator.
    ///
    /// Returns `None` for every token kind that is not an operator.
    ///
    /// # Example
    /// ```
    /// use emojilang::{ast::BinaryOperator, interpreter::lexer::TokenKind};
    ///
    /// assert_eq!(BinaryOperator::from_token(TokenKind::Star), Some(BinaryOperator::Mul));
    /// assert_eq!(BinaryOperator::from_token(TokenKind::LBrace), None);
    /// ```
    #[must_use]
    pub const fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(Self::Add),
            TokenKind::Minus => Some(Self::Sub),
            TokenKind::Star => Some(Self::Mul),
            TokenKind::Slash => Some(Self::Div),
            TokenKind::Greater => Some(Self::Greater),
            TokenKind::Less => Some(Self::Less),
            TokenKind::EqualEqual => Some(Self::Equal),
            TokenKind::BangEqual => Some(Self::NotEqual),
            _ => None,
        }
    }

}

/// An expression node.
///
/// Expressions are side-effect free and always evaluate to an `f64`. Operator
/// chains nest to the left, so `1 ➕ 1 ➕ ...` is as deep as it is long.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A binary operation such as `a ➕ b` or `a < b`.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number of the operator token.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A numeric literal.
    Number {
        /// The literal's value.
        value: f64,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use emojilang::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::BinaryOp { line, .. } | Self::Variable { line, .. } | Self::Number { line, .. } => {
                *line
            },
        }
    }
}

/// Drops operand trees through a work list instead of recursively, so a long
/// operator chain cannot exhaust the stack.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_operands(self, &mut pending);

        while let Some(mut expr) = pending.pop() {
            detach_operands(&mut expr, &mut pending);
        }
    }
}

/// Moves both operands of a `BinaryOp` onto `pending`, leaving leaf
/// placeholders behind.
fn detach_operands(expr: &mut Expr, pending: &mut Vec<Expr>) {
    if let Expr::BinaryOp { left, right, line, .. } = expr {
        let line = *line;
        pending.push(mem::replace(left.as_mut(), Expr::Number { value: 0.0, line }));
        pending.push(mem::replace(right.as_mut(), Expr::Number { value: 0.0, line }));
    }
}

/// A statement node.
///
/// A program is an ordered `Vec<Statement>`. Every child node is owned by
/// exactly one parent.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `📦 name == value`: creates or overwrites a variable.
    VariableAssignment {
        /// Name of the variable.
        name:  String,
        /// The value expression.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `📢 value`, or a bare expression: writes the value as one output line.
    Print {
        /// The printed expression.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `{ ... }`: runs its statements in order. Blocks do not open a scope.
    Block {
        /// Statements inside the block; may be empty.
        statements: Vec<Self>,
        /// Line number of the opening brace.
        line:       usize,
    },
    /// `❓ condition body (else body)?`
    If {
        /// The condition; any non-zero value is true.
        condition:   Expr,
        /// Runs when the condition is non-zero.
        then_branch: Box<Self>,
        /// Runs when the condition is zero, if present.
        else_branch: Option<Box<Self>>,
        /// Line number in the source code.
        line:        usize,
    },
    /// `🔁 condition body`
    While {
        /// Evaluated before every iteration.
        condition: Expr,
        /// Runs while the condition is non-zero.
        body:      Box<Self>,
        /// Line number in the source code.
        line:      usize,
    },
}

impl Statement {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::VariableAssignment { line, .. }
            | Self::Print { line, .. }
            | Self::Block { line, .. }
            | Self::If { line, .. }
            | Self::While { line, .. } => *line,
        }
    }
}
