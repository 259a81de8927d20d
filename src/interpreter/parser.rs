/// Core parsing entry point and shared result type.
///
/// Exposes [`core::parse_expression`], the top of the precedence hierarchy.
pub mod core;

/// Binary operator parsing.
///
/// Additive and multiplicative levels, both left-associative.
pub mod binary;

/// Unary operators and primary expressions.
///
/// Prefix `+`/`-`, parenthesized groups, integer literals and variables.
pub mod unary;

/// Statement and program parsing.
pub mod statement;

/// Token matching helpers shared by the other parser modules.
pub mod utils;
