/// The evaluator module executes AST nodes.
///
/// The evaluator walks the syntax tree, evaluates expressions, maintains the
/// single variable environment and writes printed lines to its output.
///
/// # Responsibilities
/// - Executes assignments, prints, blocks, conditionals and loops.
/// - Performs floating-point arithmetic and comparisons.
/// - Reports runtime errors such as reading an unassigned variable.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a flat sequence of
/// tokens: emoji keywords and operators, punctuation, numbers and
/// identifiers. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input into tokens with kind, lexeme and line.
/// - Recognizes emoji symbols as whole Unicode scalar values.
/// - Silently drops characters the language does not know.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser consumes the token sequence by recursive descent with one token
/// of lookahead and constructs the program's statements.
///
/// # Responsibilities
/// - Converts tokens into statement and expression nodes.
/// - Enforces operator precedence and left associativity.
/// - Reports grammar violations together with the offending token.
pub mod parser;
