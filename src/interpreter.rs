/// The evaluator module executes statements and computes results.
///
/// The evaluator walks each statement's expression tree against the variable
/// environment, binds the result, and records the order in which variables
/// were first assigned.
///
/// # Responsibilities
/// - Evaluates AST nodes with unbounded integer arithmetic.
/// - Resolves variables case-insensitively.
/// - Reports reads of unassigned variables as runtime errors.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens:
/// identifiers, integer literals, operators and delimiters, closed by a single
/// end-of-input token.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with line information.
/// - Rejects integer literals with leading zeros.
/// - Reports characters that start no token.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a recursive-descent parser with one token of lookahead. It
/// turns the token stream into a sequence of assignment statements.
///
/// # Responsibilities
/// - Converts tokens into expression trees honoring precedence and
///   associativity.
/// - Reports the expected and found token kind on a syntax error.
pub mod parser;
/// The final output of a successful run.
pub mod report;
