//! # varcalc
//!
//! varcalc is an interpreter for tiny programs of integer assignments such as
//! `x = 2 + 3 * 4; y = -x;`. It lexes, parses and evaluates the whole program
//! and reports the final value of every variable in order of first
//! assignment.
//!
//! Parsing and evaluation are recursive, so the stack depth grows with the
//! nesting depth of expressions. Inputs nested thousands of levels deep may
//! exhaust the stack.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    error::Error,
    interpreter::{
        evaluator::core::Context, lexer::tokenize, parser::statement::parse_program,
        report::Report,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and the `Statement` struct that
/// represent a program as a tree. The AST is built by the parser and
/// traversed by the evaluator.
///
/// # Responsibilities
/// - Defines the four expression kinds and the assignment statement.
/// - Attaches source lines to AST nodes for error reporting.
pub mod ast;
/// Provides error types for lexing, parsing, and evaluation.
///
/// Each stage has its own error enum carrying the line of the failure. The
/// top-level [`error::Error`] unifies them.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing and evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// The output line printed for any failed program.
pub const ERROR_OUTPUT: &str = "error";

/// Runs the whole pipeline and returns the final bindings.
///
/// The source is lexed completely, then parsed completely, then evaluated.
/// Every call uses a fresh evaluation context.
///
/// # Errors
/// Returns the first lexing, parsing or evaluation error.
///
/// # Examples
/// ```
/// use varcalc::{error::Error, get_result};
///
/// let report = get_result("X = 5; y = x + 1;").unwrap();
/// assert_eq!(report.to_string(), "x = 5 y = 6");
///
/// // 'y' is not defined.
/// assert!(matches!(get_result("x = y;"), Err(Error::Runtime(_))));
/// ```
pub fn get_result(source: &str) -> Result<Report, Error> {
    let tokens = tokenize(source)?;
    let program = parse_program(&tokens)?;

    let mut context = Context::new();
    context.run(&program)?;

    Ok(context.report())
}

/// Interprets a program and returns its output line.
///
/// On success this is the report; on any failure it is [`ERROR_OUTPUT`]. The
/// kind of failure is only visible in the logs.
///
/// # Examples
/// ```
/// use varcalc::interpret;
///
/// assert_eq!(interpret("x = 1; y = 2; x = 3;"), "x = 3 y = 2");
/// assert_eq!(interpret("x = 007;"), "error");
/// assert_eq!(interpret(""), "");
/// ```
#[must_use]
pub fn interpret(source: &str) -> String {
    match get_result(source) {
        Ok(report) => report.to_string(),
        Err(e) => {
            debug!(error = %e, "interpretation failed");
            ERROR_OUTPUT.to_string()
        },
    }
}
