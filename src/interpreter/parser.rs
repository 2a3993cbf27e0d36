/// Parser entry points.
///
/// Contains the program-level entry point, the shared result type and the
/// top of the expression grammar.
pub mod core;

/// Statement parsing.
///
/// Implements one function per statement form: `def`, `let`, `print`,
/// blocks, `if`, `while`, `call` and `return`.
pub mod statement;

/// Binary operator parsing.
///
/// Implements the left-associative relational, additive and multiplicative
/// precedence levels.
pub mod binary;

/// Primary and postfix expression parsing.
///
/// Handles literals, names, parenthesized expressions, function literals and
/// the single optional call suffix.
pub mod primary;

/// Block parsing.
///
/// Parses brace-delimited statement sequences, used both as statements and as
/// function bodies.
pub mod block;

/// Utility functions for the parser.
///
/// Provides token expectation helpers, identifier parsing and comma-separated
/// list handling.
pub mod utils;
