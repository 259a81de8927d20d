use thiserror::Error;

use crate::interpreter::lexer::TokenKind;

/// Represents all errors that can occur while tokenizing source text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A character that does not start any token.
    #[error("Error on line {line}: Unexpected character '{character}'.")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// An integer literal with more than one digit that starts with `0`.
    #[error("Error on line {line}: Integer literal '{literal}' has a leading zero.")]
    LeadingZero {
        /// The literal as written.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

/// Represents all errors that can occur while parsing a token stream.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A token of one kind was required but another was found.
    #[error("Error on line {line}: Expected {expected} but got {found}.")]
    UnexpectedToken {
        /// The kind the grammar requires at this position.
        expected: TokenKind,
        /// The kind actually found.
        found:    TokenKind,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An operand was required but the token cannot start one.
    #[error("Error on line {line}: Expected an expression but got {found}.")]
    ExpectedExpression {
        /// The kind actually found.
        found: TokenKind,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The token stream ended without the closing `EOF` token.
    #[error("Error on line {line}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// The line of the last token in the stream, `1` for an empty
        /// stream. `0` when raised by a parser below `parse_program`.
        line: usize,
    },
}
