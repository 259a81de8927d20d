use thiserror::Error;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// Tried to read a variable that has not been assigned yet.
    #[error("Error on line {line}: Unknown variable '{name}'.")]
    UnknownVariable {
        /// The name of the variable, as written in the source.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
}
