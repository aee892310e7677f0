/// Parsing errors.
///
/// Defines the errors raised while building the syntax tree: a required token
/// that is missing, or an expression that cannot start at the current token.
/// Each error carries the offending token so hosts can point at it.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised during evaluation, such as reading a variable
/// that was never assigned.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure of a complete run: either the program did not parse or it
/// stopped while executing.
#[derive(Debug)]
pub enum Error {
    /// The source text did not match the grammar. Nothing was executed.
    Parse(ParseError),
    /// Execution stopped at the first runtime failure.
    Runtime(RuntimeError),
}

impl From<ParseError> for Error {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<RuntimeError> for Error {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
