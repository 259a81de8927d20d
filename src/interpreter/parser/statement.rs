use std::iter::Peekable;

use tracing::debug;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect_token, parse_identifier, peek_token},
        },
    },
};

/// Parses a whole program.
///
/// A program is a sequence of assignments closed by the `EOF` token:
///
/// ```text
///     program := assignment* EOF
/// ```
///
/// An empty program (the stream is just `EOF`) yields no statements. Parsing
/// stops at the first error; there is no recovery.
///
/// # Parameters
/// - `tokens`: The complete token stream produced by the lexer.
///
/// # Returns
/// The statements in source order.
///
/// # Example
/// ```
/// use varcalc::interpreter::{lexer::tokenize, parser::statement::parse_program};
///
/// let tokens = tokenize("a = 1; b = a * 2;").unwrap();
/// let program = parse_program(&tokens).unwrap();
/// assert_eq!(program.len(), 2);
/// assert_eq!(program[1].to_string(), "b = (a * 2);");
///
/// let tokens = tokenize("a = 1").unwrap();
/// assert!(parse_program(&tokens).is_err());
/// ```
pub fn parse_program(tokens: &[(Token, usize)]) -> ParseResult<Vec<Statement>> {
    let last_line = tokens.last().map_or(1, |(_, line)| *line);

    parse_statements(tokens).map_err(|e| match e {
                                ParseError::UnexpectedEndOfInput { .. } => {
                                    ParseError::UnexpectedEndOfInput { line: last_line }
                                },
                                other => other,
                            })
}

fn parse_statements(tokens: &[(Token, usize)]) -> ParseResult<Vec<Statement>> {
    let mut iter = tokens.iter().peekable();
    let mut statements = Vec::new();

    while !matches!(peek_token(&mut iter)?, (Token::Eof, _)) {
        statements.push(parse_assignment(&mut iter)?);
    }
    expect_token(&mut iter, TokenKind::Eof)?;

    debug!(count = statements.len(), "parsed program");
    Ok(statements)
}

/// Parses a single assignment statement.
///
/// The form is fixed: `<identifier> = <expression> ;`. Each part is matched
/// against the current token only; a mismatch aborts with an
/// `UnexpectedToken` error naming the expected and the found kind.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the assigned identifier.
///
/// # Returns
/// A parsed [`Statement`].
pub fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (name, line) = parse_identifier(tokens)?;
    expect_token(tokens, TokenKind::Assign)?;
    let value = parse_expression(tokens)?;
    expect_token(tokens, TokenKind::Semicolon)?;

    Ok(Statement { name, value, line })
}
