use num_bigint::BigInt;
use varcalc::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::{Error, LexError, ParseError, RuntimeError},
    get_result,
    interpreter::{
        evaluator::core::Context,
        lexer::{Token, TokenKind, tokenize},
        parser::{
            core::parse_expression,
            statement::{parse_assignment, parse_program},
        },
    },
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).unwrap()
                    .iter()
                    .map(|(token, _)| token.kind())
                    .collect()
}

fn parse_single(source: &str) -> Expr {
    let tokens = tokenize(source).unwrap();
    let mut program = parse_program(&tokens).unwrap();
    assert_eq!(program.len(), 1, "Source: {source}");
    program.remove(0).value
}

#[test]
fn empty_source_is_a_single_eof() {
    assert_eq!(tokenize("").unwrap(), vec![(Token::Eof, 1)]);
    assert_eq!(kinds(" \t\n "), vec![TokenKind::Eof]);
}

#[test]
fn tokens_cover_every_kind() {
    use TokenKind::{Assign, Eof, Ident, Integer, LParen, Minus, Mul, Plus, RParen, Semicolon};

    assert_eq!(kinds("x = (1 + y) * -2;"),
               vec![Ident, Assign, LParen, Integer, Plus, Ident, RParen, Mul, Minus, Integer,
                    Semicolon, Eof]);
}

#[test]
fn token_payloads_keep_source_text() {
    let tokens = tokenize("MixedCase_1 = 0;").unwrap();
    assert_eq!(tokens[0].0, Token::Identifier("MixedCase_1".to_string()));
    assert_eq!(tokens[2].0, Token::Integer(BigInt::from(0)));
}

#[test]
fn tokens_record_their_line() {
    let tokens = tokenize("a = 1;\n\nb = 2;").unwrap();
    let lines: Vec<usize> = tokens.iter().map(|(_, line)| *line).collect();
    assert_eq!(lines, vec![1, 1, 1, 1, 3, 3, 3, 3, 3]);
}

#[test]
fn digit_run_followed_by_letters_splits() {
    assert_eq!(kinds("12ab"),
               vec![TokenKind::Integer, TokenKind::Ident, TokenKind::Eof]);
}

#[test]
fn lex_errors_are_reported() {
    assert_eq!(tokenize("x = 007;"),
               Err(LexError::LeadingZero { literal: "007".to_string(),
                                           line:    1, }));
    assert_eq!(tokenize("x = 1;\ny = 5 & 2;"),
               Err(LexError::UnexpectedCharacter { character: '&',
                                                   line:      2, }));
}

#[test]
fn additive_and_multiplicative_chains_lean_left() {
    assert_eq!(parse_single("x = a - b - c;").to_string(), "((a - b) - c)");
    assert_eq!(parse_single("x = a * b * c;").to_string(), "((a * b) * c)");
    assert_eq!(parse_single("x = a + b * c - d;").to_string(), "((a + (b * c)) - d)");
}

#[test]
fn unary_operators_stack() {
    assert_eq!(parse_single("x = --5;"),
               Expr::UnaryOp { op:   UnaryOperator::Negate,
                               expr: Box::new(Expr::UnaryOp { op:   UnaryOperator::Negate,
                                                              expr: Box::new(Expr::Number { value: BigInt::from(5),
                                                                                            line:  1, }),
                                                              line: 1, }),
                               line: 1, });
    assert_eq!(parse_single("x = +-y;").to_string(), "(+(-y))");
}

#[test]
fn unary_binds_tighter_than_multiplication() {
    assert_eq!(parse_single("x = -(3 + 4) * -2;").to_string(), "((-(3 + 4)) * (-2))");
}

#[test]
fn binary_nodes_carry_the_operator() {
    match parse_single("x = 1 * 2;") {
        Expr::BinaryOp { op, .. } => assert_eq!(op, BinaryOperator::Mul),
        other => panic!("Expected a binary node, found {other:?}"),
    }
}

#[test]
fn empty_token_stream_is_an_empty_program() {
    let tokens = tokenize("").unwrap();
    assert!(parse_program(&tokens).unwrap().is_empty());
}

#[test]
fn parse_errors_name_expected_and_found_kinds() {
    let tokens = tokenize("x = 5").unwrap();
    assert_eq!(parse_program(&tokens),
               Err(ParseError::UnexpectedToken { expected: TokenKind::Semicolon,
                                                 found:    TokenKind::Eof,
                                                 line:     1, }));

    let tokens = tokenize("x = (1;").unwrap();
    assert_eq!(parse_program(&tokens),
               Err(ParseError::UnexpectedToken { expected: TokenKind::RParen,
                                                 found:    TokenKind::Semicolon,
                                                 line:     1, }));

    let tokens = tokenize("x = *;").unwrap();
    assert_eq!(parse_program(&tokens),
               Err(ParseError::ExpectedExpression { found: TokenKind::Mul,
                                                    line:  1, }));

    let tokens = tokenize("1 = x;").unwrap();
    assert_eq!(parse_program(&tokens),
               Err(ParseError::UnexpectedToken { expected: TokenKind::Ident,
                                                 found:    TokenKind::Integer,
                                                 line:     1, }));
}

#[test]
fn expression_stops_before_a_closing_token() {
    let tokens = tokenize("1 + 2 )").unwrap();
    let mut iter = tokens.iter().peekable();

    let expr = parse_expression(&mut iter).unwrap();
    assert_eq!(expr.to_string(), "(1 + 2)");
    assert_eq!(iter.peek().map(|(token, _)| token.kind()), Some(TokenKind::RParen));
}

#[test]
fn mismatch_does_not_advance_the_cursor() {
    let tokens = tokenize("x = 1 ) ;").unwrap();
    let mut iter = tokens.iter().peekable();

    assert_eq!(parse_assignment(&mut iter),
               Err(ParseError::UnexpectedToken { expected: TokenKind::Semicolon,
                                                 found:    TokenKind::RParen,
                                                 line:     1, }));
    assert_eq!(iter.peek().map(|(token, _)| token.kind()), Some(TokenKind::RParen));
}

#[test]
fn stream_without_eof_is_rejected() {
    let tokens = vec![(Token::Identifier("x".to_string()), 1), (Token::Equals, 2)];
    assert_eq!(parse_program(&tokens),
               Err(ParseError::UnexpectedEndOfInput { line: 2 }));
    assert_eq!(parse_program(&[]),
               Err(ParseError::UnexpectedEndOfInput { line: 1 }));
}

#[test]
fn whitespace_token_is_not_end_of_input() {
    assert_ne!(Token::Whitespace.kind(), TokenKind::Eof);

    let tokens = vec![(Token::Whitespace, 1), (Token::Eof, 1)];
    assert_eq!(parse_program(&tokens),
               Err(ParseError::UnexpectedToken { expected: TokenKind::Ident,
                                                 found:    TokenKind::Whitespace,
                                                 line:     1, }));

    let tokens = vec![(Token::Identifier("x".to_string()), 1),
                      (Token::Equals, 1),
                      (Token::Integer(BigInt::from(1)), 1),
                      (Token::Semicolon, 1),
                      (Token::Whitespace, 2)];
    assert_eq!(parse_program(&tokens),
               Err(ParseError::UnexpectedToken { expected: TokenKind::Ident,
                                                 found:    TokenKind::Whitespace,
                                                 line:     2, }));
}

#[test]
fn expressions_keep_their_source_line() {
    let tokens = tokenize("a = 1;\n\nb = a\n  * -2;").unwrap();
    let program = parse_program(&tokens).unwrap();

    assert_eq!(program[0].value.line_number(), 1);
    assert_eq!(program[1].line, 3);
    match &program[1].value {
        Expr::BinaryOp { left, right, .. } => {
            assert_eq!(left.line_number(), 3);
            assert_eq!(right.line_number(), 4);
        },
        other => panic!("Expected a binary node, found {other:?}"),
    }
}

#[test]
fn unknown_variable_names_the_identifier_as_written() {
    assert_eq!(get_result("a = 1;\nb = A + Missing;"),
               Err(Error::Runtime(RuntimeError::UnknownVariable { name: "Missing".to_string(),
                                                                  line: 2, })));
}

#[test]
fn error_kinds_stay_distinct() {
    assert!(matches!(get_result("x = 01;"), Err(Error::Lex(_))));
    assert!(matches!(get_result("x = 1"), Err(Error::Parse(_))));
    assert!(matches!(get_result("x = y;"), Err(Error::Runtime(_))));
}

#[test]
fn context_tracks_first_assignment_order() {
    let tokens = tokenize("b = 1; A = 2; B = 3; c = a;").unwrap();
    let program = parse_program(&tokens).unwrap();

    let mut ctx = Context::new();
    ctx.run(&program).unwrap();

    assert_eq!(ctx.order(), ["b", "a", "c"]);
    assert_eq!(ctx.get_variable("B"), Some(&BigInt::from(3)));
    assert_eq!(ctx.report().to_string(), "b = 3 a = 2 c = 2");
    assert_eq!(ctx.report().entries(),
               [("b".to_string(), BigInt::from(3)),
                ("a".to_string(), BigInt::from(2)),
                ("c".to_string(), BigInt::from(2))]);
}

#[test]
fn empty_program_has_an_empty_report() {
    let report = get_result("").unwrap();
    assert!(report.is_empty());
    assert!(report.entries().is_empty());

    assert!(!get_result("x = 1;").unwrap().is_empty());
}

#[test]
fn failed_statement_keeps_earlier_bindings_in_context() {
    let tokens = tokenize("a = 1; b = nope; c = 3;").unwrap();
    let program = parse_program(&tokens).unwrap();

    let mut ctx = Context::new();
    assert!(ctx.run(&program).is_err());
    assert_eq!(ctx.order(), ["a"]);
}

#[test]
fn error_messages_are_descriptive() {
    let err = get_result("x = 5").unwrap_err();
    assert_eq!(err.to_string(), "Error on line 1: Expected SEMICOLON but got EOF.");

    let err = get_result("x = 007;").unwrap_err();
    assert_eq!(err.to_string(),
               "Error on line 1: Integer literal '007' has a leading zero.");
}
