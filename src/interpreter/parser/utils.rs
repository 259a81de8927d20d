use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
    },
};

/// Returns the next token without consuming it.
///
/// A well-formed stream always ends with [`Token::Eof`], so running out of
/// tokens only happens for streams that were not produced by
/// [`crate::interpreter::lexer::tokenize`].
///
/// # Errors
/// Returns `UnexpectedEndOfInput` if the stream is exhausted. A `Peekable`
/// cannot look back, so the error carries line `0`;
/// [`crate::interpreter::parser::statement::parse_program`] replaces it with
/// the line of the last token in the stream.
pub fn peek_token<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<&'a (Token, usize)>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    tokens.peek()
          .copied()
          .ok_or(ParseError::UnexpectedEndOfInput { line: 0 })
}

/// Consumes the next token if it has the `expected` kind.
///
/// On a mismatch the cursor stays where it is and an `UnexpectedToken` error
/// naming both kinds is returned.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
/// - `expected`: The kind the grammar requires here.
///
/// # Returns
/// The consumed `(Token, line)` pair.
pub fn expect_token<'a, I>(tokens: &mut Peekable<I>,
                           expected: TokenKind)
                           -> ParseResult<&'a (Token, usize)>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let entry = peek_token(tokens)?;
    let found = entry.0.kind();
    if found != expected {
        return Err(ParseError::UnexpectedToken { expected,
                                                 found,
                                                 line: entry.1 });
    }
    tokens.next();
    Ok(entry)
}

/// Parses an identifier and returns its name (as written) and line.
///
/// # Errors
/// Returns `UnexpectedToken` if the next token is not an identifier.
pub fn parse_identifier<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<(String, usize)>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match expect_token(tokens, TokenKind::Ident)? {
        (Token::Identifier(name), line) => Ok((name.clone(), *line)),
        (token, line) => Err(ParseError::UnexpectedToken { expected: TokenKind::Ident,
                                                           found:    token.kind(),
                                                           line:     *line, }),
    }
}
