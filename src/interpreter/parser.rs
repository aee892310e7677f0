/// Parser entry points.
///
/// Contains the `parse` function, the program loop and the expression entry
/// point shared by every statement form.
pub mod core;

/// Binary operator parsing.
///
/// One function per precedence level, each folding left-associative operator
/// chains into nested `BinaryOp` nodes.
pub mod binary;

/// Primary expressions: numbers, variables and parenthesized groups.
pub mod primary;

/// Brace-delimited blocks.
pub mod block;

/// Statement parsing.
///
/// Implements assignment, print, `❓`, `🔁`, blocks and bare expression
/// statements.
pub mod statement;

/// Cursor helpers shared by the other parser modules.
pub mod utils;
