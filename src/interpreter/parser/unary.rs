use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect_token, peek_token},
        },
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `+`  (identity)
/// - `-`  (numeric negation)
///
/// Unary operators are right-associative and may be stacked, so an input like
/// `+-x` is parsed as `+( -x )`.
///
/// If no unary operator is present, the function delegates to
/// [`parse_primary`].
///
/// Grammar:
/// ```text
///     unary := ("+" | "-") unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a primary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let op = match tokens.peek() {
        Some((Token::Plus, _)) => UnaryOperator::Plus,
        Some((Token::Minus, _)) => UnaryOperator::Negate,
        _ => return parse_primary(tokens),
    };
    let (_, line) = peek_token(tokens)?;
    tokens.next();

    let expr = parse_unary(tokens)?;
    Ok(Expr::UnaryOp { op,
                       expr: Box::new(expr),
                       line: *line })
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar:
/// - integer literals
/// - identifiers
/// - parenthesized expressions
///
/// Grammar:
/// ```text
///     primary := INTEGER
///              | IDENT
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure. Any other token
/// is reported as `ExpectedExpression` and left unconsumed.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match peek_token(tokens)? {
        (Token::Integer(value), line) => {
            tokens.next();
            Ok(Expr::Number { value: value.clone(),
                              line:  *line, })
        },
        (Token::Identifier(name), line) => {
            tokens.next();
            Ok(Expr::Variable { name: name.clone(),
                                line: *line, })
        },
        (Token::LParen, _) => parse_grouping(tokens),
        (tok, line) => Err(ParseError::ExpectedExpression { found: tok.kind(),
                                                            line:  *line, }),
    }
}

/// Parses a parenthesized expression `( expr )`.
///
/// The parentheses only steer precedence; no node is created for them.
///
/// # Errors
/// Returns `UnexpectedToken` if the closing `)` is missing.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect_token(tokens, TokenKind::LParen)?;
    let expr = parse_expression(tokens)?;
    expect_token(tokens, TokenKind::RParen)?;
    Ok(expr)
}
