use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_additive},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, addition and subtraction, and
/// recursively descends through the precedence hierarchy:
///
/// ```text
///     expr   := term (("+" | "-") term)*
///     term   := factor ("*" factor)*
///     factor := ("+" | "-") factor | "(" expr ")" | INTEGER | IDENT
/// ```
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
///
/// # Example
/// ```
/// use varcalc::interpreter::{lexer::tokenize, parser::core::parse_expression};
///
/// let tokens = tokenize("10 - 2 - 3").unwrap();
/// let expr = parse_expression(&mut tokens.iter().peekable()).unwrap();
/// assert_eq!(expr.to_string(), "((10 - 2) - 3)");
/// ```
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_additive(tokens)
}
