use std::fmt;

use logos::Logos;
use tracing::debug;

use crate::error::LexError;

/// Result type used by the lexer.
pub type LexResult<T> = Result<T, LexError>;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
///
/// Only identifiers and integer literals carry their source text; every other
/// token is fully described by its tag.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Integer literal tokens, such as `42`. The text is converted to a
    /// number by the parser.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Integer(String),
    /// `and`
    #[token("and")]
    And,
    /// `or`
    #[token("or")]
    Or,
    /// `not`
    #[token("not")]
    Not,
    /// `def`
    #[token("def")]
    Def,
    /// `let`
    #[token("let")]
    Let,
    /// `print`
    #[token("print")]
    Print,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `while`
    #[token("while")]
    While,
    /// `fn`
    #[token("fn")]
    Fn,
    /// `return`
    #[token("return")]
    Return,
    /// `call`
    #[token("call")]
    Call,
    /// Identifier tokens: a run of ASCII letters that is not a keyword, kept
    /// verbatim (`Print` is an identifier, `print` a keyword).
    #[regex(r"[a-zA-Z]+", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `,`
    #[token(",")]
    Comma,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `<>`
    #[token("<>")]
    LessGreater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `<`
    #[token("<")]
    Less,
    /// `=`
    #[token("=")]
    Equals,
    /// `=>`
    #[token("=>")]
    Arrow,

    /// Line breaks only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Any whitespace other than a line break, including Unicode spaces.
    #[regex(r"[\s--\n]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Integer(text) | Self::Identifier(text) => return write!(f, "'{text}'"),
            Self::And => "and",
            Self::Or => "or",
            Self::Not => "not",
            Self::Def => "def",
            Self::Let => "let",
            Self::Print => "print",
            Self::If => "if",
            Self::Else => "else",
            Self::While => "while",
            Self::Fn => "fn",
            Self::Return => "return",
            Self::Call => "call",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::Semicolon => ";",
            Self::Comma => ",",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::EqualEqual => "==",
            Self::LessGreater => "<>",
            Self::GreaterEqual => ">=",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::Less => "<",
            Self::Equals => "=",
            Self::Arrow => "=>",
            Self::NewLine => "newline",
            Self::Ignored => "whitespace",
        };
        write!(f, "'{text}'")
    }
}

/// Tokenizes the complete source text.
///
/// Each token is paired with the line it starts on. Whitespace and newlines
/// are skipped; the first character that does not begin a token stops
/// lexing with a [`LexError`].
///
/// # Example
/// ```
/// use quill::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("print x;").unwrap();
/// let kinds: Vec<Token> = tokens.into_iter().map(|(token, _)| token).collect();
///
/// assert_eq!(kinds,
///            vec![Token::Print, Token::Identifier("x".to_string()), Token::Semicolon]);
/// ```
pub fn tokenize(source: &str) -> LexResult<Vec<(Token, usize)>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.extras.line));
        } else {
            let character = lexer.slice().chars().next().unwrap_or_default();
            return Err(LexError::UnexpectedCharacter { character,
                                                       line: lexer.extras.line });
        }
    }

    debug!(count = tokens.len(), lines = lexer.extras.line, "tokenized source");
    Ok(tokens)
}
