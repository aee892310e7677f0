//! # emojilang
//!
//! emojilang is a tiny interpreter for a language whose keywords are emoji.
//! Source text is scanned into tokens, parsed by recursive descent into a
//! syntax tree, and executed directly by a tree-walking evaluator. Every value
//! is an `f64`; comparisons yield `1.0` or `0.0`.
//!
//! ```text
//! 📦 x == 1
//! 🔁 x < 5 {
//!     📢 x
//!     📦 x == x ➕ 1
//! }
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use crate::{
    error::Error,
    interpreter::{
        evaluator::core::{Context, Environment},
        lexer::scan,
        parser::core::parse,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Statement` and `Expr` enums that represent a
/// program as a tree. The tree is built by the parser and walked by the
/// evaluator.
///
/// # Responsibilities
/// - Defines statement, expression and operator types for every construct.
/// - Attaches source lines to nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines the errors raised while parsing or evaluating code.
/// Errors are structured values carrying the offending token, variable name
/// and source line, so hosts can branch on the kind of failure.
///
/// # Responsibilities
/// - Defines one error enum per phase and a crate-level [`error::Error`].
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing and evaluation.
///
/// # Responsibilities
/// - Coordinates the lexer, parser and evaluator.
/// - Provides entry points for each phase.
pub mod interpreter;
/// General numeric helpers shared by the evaluator and hosts.
pub mod util;

/// Scans, parses and executes a whole program.
///
/// Printed lines are written to `output` in execution order. On success the
/// final environment is returned.
///
/// # Errors
/// Returns [`Error::Parse`] if the source does not match the grammar, in which
/// case nothing is executed, or [`Error::Runtime`] for the first failure
/// during execution. Lines printed before a runtime failure have already been
/// written.
///
/// # Examples
/// ```
/// use emojilang::run;
///
/// let mut output = Vec::new();
/// let variables = run("📦 x == 1; 🔁 x < 3 { 📢 x; 📦 x == x ➕ 1 }", &mut output).unwrap();
///
/// assert_eq!(String::from_utf8(output).unwrap(), "1.0\n2.0\n");
/// assert_eq!(variables["x"], 3.0);
///
/// // Reading a variable that was never assigned fails.
/// assert!(run("📢 y", Vec::new()).is_err());
/// ```
pub fn run<W: Write>(source: &str, output: W) -> Result<Environment, Error> {
    let tokens = scan(source);
    let program = parse(&tokens)?;

    let mut context = Context::with_output(output);
    context.execute(&program)?;

    Ok(context.into_variables())
}
