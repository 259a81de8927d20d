use thiserror::Error;

/// Lexing and parsing errors.
///
/// Defines all error types that can occur before evaluation: characters that
/// start no token, malformed integer literals, and tokens that do not fit the
/// grammar.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating statements.
pub mod runtime_error;

pub use parse_error::{LexError, ParseError};
pub use runtime_error::RuntimeError;

/// Any failure of the interpretation pipeline.
///
/// The three stages keep their own error types; this enum lets them compose
/// with `?` in [`crate::get_result`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The source could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The tokens do not form a program.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// A statement failed during evaluation.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
