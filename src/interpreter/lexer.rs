use std::fmt;

use logos::Logos;
use num_bigint::BigInt;
use tracing::debug;

use crate::error::LexError;

/// Represents a lexical token in the source input.
///
/// Structural tokens carry no payload. Identifiers keep their text exactly as
/// written, and integer literals carry their (unbounded) value.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = LexFailure)]
pub enum Token {
    /// Identifier tokens such as `x`, `Total` or `_tmp1`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// Integer literal tokens, such as `42` or `0`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(BigInt),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `=`
    #[token("=")]
    Equals,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `;`
    #[token(";")]
    Semicolon,
    /// Blanks, tabs and newlines.
    #[regex(r"\s+", |lex| {
        let newlines     = lex.slice().chars().filter(|&c| c == '\n').count();
        lex.extras.line += newlines;
        logos::Skip
    })]
    Whitespace,
    /// End of input. Never produced by the scanner itself; [`tokenize`]
    /// appends exactly one as the final token.
    Eof,
}

impl Token {
    /// Returns the kind of this token, dropping any payload.
    ///
    /// ## Example
    /// ```
    /// use varcalc::interpreter::lexer::{Token, TokenKind};
    ///
    /// assert_eq!(Token::Identifier("x".to_string()).kind(), TokenKind::Ident);
    /// assert_eq!(Token::Semicolon.kind(), TokenKind::Semicolon);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Identifier(_) => TokenKind::Ident,
            Self::Integer(_) => TokenKind::Integer,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Star => TokenKind::Mul,
            Self::Equals => TokenKind::Assign,
            Self::LParen => TokenKind::LParen,
            Self::RParen => TokenKind::RParen,
            Self::Semicolon => TokenKind::Semicolon,
            Self::Whitespace => TokenKind::Whitespace,
            Self::Eof => TokenKind::Eof,
        }
    }
}

/// The kind of a token, without its payload.
///
/// Parse errors are reported in terms of kinds: "expected `X` but got `Y`".
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Ident,
    Integer,
    Plus,
    Minus,
    Mul,
    Assign,
    LParen,
    RParen,
    Semicolon,
    /// Skipped by [`tokenize`]; only a hand-built stream can contain it, and
    /// no grammar rule accepts it.
    Whitespace,
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ident => "IDENT",
            Self::Integer => "INTEGER",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Mul => "MUL",
            Self::Assign => "ASSIGN",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::Semicolon => "SEMICOLON",
            Self::Whitespace => "WHITESPACE",
            Self::Eof => "EOF",
        };
        f.write_str(name)
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1 }
    }
}

/// Raw failure reported by the scanner. [`tokenize`] turns it into a
/// [`LexError`] with the offending text and line attached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LexFailure {
    /// No token starts with the current character.
    #[default]
    UnrecognizedCharacter,
    /// A multi-digit integer literal starts with `0`.
    LeadingZero,
}

/// Parses an integer literal from the current token slice.
///
/// A literal longer than one digit must not start with `0`; a lone `0` is
/// accepted.
fn parse_integer(lex: &logos::Lexer<Token>) -> Result<BigInt, LexFailure> {
    let digits = lex.slice();
    if digits.len() > 1 && digits.starts_with('0') {
        return Err(LexFailure::LeadingZero);
    }
    digits.parse().map_err(|_| LexFailure::UnrecognizedCharacter)
}

/// Converts source text into a token stream.
///
/// Every token is paired with the line it starts on. The stream always ends
/// with exactly one [`Token::Eof`], also for empty input. On failure no
/// tokens are returned at all.
///
/// # Errors
/// - [`LexError::UnexpectedCharacter`] for a character that starts no token.
/// - [`LexError::LeadingZero`] for literals such as `007`.
///
/// # Example
/// ```
/// use varcalc::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("x = 1;").unwrap();
/// assert_eq!(tokens.len(), 5);
/// assert_eq!(tokens.last(), Some(&(Token::Eof, 1)));
///
/// assert!(tokenize("x = 007;").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let line = lexer.extras.line;
        match token {
            Ok(tok) => tokens.push((tok, line)),
            Err(LexFailure::LeadingZero) => {
                return Err(LexError::LeadingZero { literal: lexer.slice().to_string(),
                                                   line });
            },
            Err(LexFailure::UnrecognizedCharacter) => {
                let character = lexer.slice().chars().next().unwrap_or_default();
                return Err(LexError::UnexpectedCharacter { character, line });
            },
        }
    }

    tokens.push((Token::Eof, lexer.extras.line));
    debug!(count = tokens.len(), "tokenized source");
    Ok(tokens)
}
