/// Binary operator evaluation logic.
///
/// Implements the floating-point arithmetic and the comparisons that yield
/// `1.0` or `0.0`.
pub mod binary;

/// Core evaluation logic and context management.
///
/// Contains the runtime context, the variable environment and expression
/// evaluation.
pub mod core;

/// Statement execution.
///
/// Runs assignments, print statements, blocks, conditionals and loops.
pub mod statement;
