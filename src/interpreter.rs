/// The evaluator module executes the syntax tree.
///
/// The evaluator walks statements and expressions, applies operators, binds
/// names in the scope chain, calls functions and writes printed values to the
/// interpreter's output sink.
///
/// # Responsibilities
/// - Executes statements and reports how each one finished.
/// - Evaluates expressions, including calls with dynamically scoped bodies.
/// - Reports runtime errors such as undefined names or type mismatches.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// paired with the line it was found on.
pub mod lexer;
/// The parser module builds the syntax tree from tokens.
///
/// The parser is recursive descent, with one function per grammar rule. It
/// rejects reserved keywords in identifier and expression positions.
pub mod parser;
/// Lexical environments.
///
/// A scope is a frame of bindings with an optional borrowed parent. Lookups
/// walk outward through the chain.
pub mod scope;
/// The value module defines the runtime data types for evaluation.
///
/// Integers, reals, booleans, functions and the absent value, with their
/// truthiness, equality and display rules.
pub mod value;
