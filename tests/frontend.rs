use quill::{
    ast::{BinaryOperator, Expr, Statement},
    error::{LexError, ParseError},
    interpreter::{
        lexer::{Token, tokenize},
        parser::core::parse,
    },
};

fn kinds(source: &str) -> Vec<Token> {
    tokenize(source).unwrap()
                    .into_iter()
                    .map(|(token, _)| token)
                    .collect()
}

fn parse_source(source: &str) -> Result<Vec<Statement>, ParseError> {
    parse(&tokenize(source).unwrap()).map(|program| program.statements)
}

fn int(value: i64) -> Box<Expr> {
    Box::new(Expr::IntLiteral { value, line: 1 })
}

fn binary(left: Box<Expr>, op: BinaryOperator, right: Box<Expr>) -> Box<Expr> {
    Box::new(Expr::Binary { left,
                            op,
                            right,
                            line: 1 })
}

fn printed_expr(source: &str) -> Expr {
    match parse_source(source).unwrap().as_slice() {
        [Statement::Print { expr, .. }] => expr.clone(),
        other => panic!("Expected a single print statement, got {other:?}"),
    }
}

#[test]
fn tokenizes_arithmetic_statement() {
    let int = |text: &str| Token::Integer(text.to_string());

    assert_eq!(kinds("print 1 + 2 * (3 + 4);"),
               vec![Token::Print,
                    int("1"),
                    Token::Plus,
                    int("2"),
                    Token::Star,
                    Token::LParen,
                    int("3"),
                    Token::Plus,
                    int("4"),
                    Token::RParen,
                    Token::Semicolon]);
}

#[test]
fn multi_character_operators_take_the_longest_match() {
    assert_eq!(kinds("<> <= >= == => < > ="),
               vec![Token::LessGreater,
                    Token::LessEqual,
                    Token::GreaterEqual,
                    Token::EqualEqual,
                    Token::Arrow,
                    Token::Less,
                    Token::Greater,
                    Token::Equals]);
}

#[test]
fn keywords_are_case_sensitive_whole_words() {
    assert_eq!(kinds("Print print define fn"),
               vec![Token::Identifier("Print".to_string()),
                    Token::Print,
                    Token::Identifier("define".to_string()),
                    Token::Fn]);
    assert_eq!(kinds("and or not"), vec![Token::And, Token::Or, Token::Not]);
}

#[test]
fn tokens_carry_their_line() {
    let tokens = tokenize("def x = 1;\n\r\nprint\tx;").unwrap();
    let lines: Vec<usize> = tokens.iter().map(|(_, line)| *line).collect();

    assert_eq!(lines, vec![1, 1, 1, 1, 1, 3, 3, 3]);
}

#[test]
fn all_non_newline_whitespace_separates_tokens() {
    assert_eq!(kinds("print\u{0B}1\u{A0};\u{3000}"),
               vec![Token::Print, Token::Integer("1".to_string()), Token::Semicolon]);

    let tokens = tokenize("def\u{0B}x = 1;\n\u{A0}print x;").unwrap();
    assert_eq!(tokens.last(), Some(&(Token::Semicolon, 2)));
}

#[test]
fn unexpected_characters_stop_lexing() {
    assert_eq!(tokenize("print 1;\nprint $;"),
               Err(LexError::UnexpectedCharacter { character: '$',
                                                   line:      2, }));
    assert!(tokenize("print x_y;").is_err());
}

#[test]
fn lexing_and_parsing_are_deterministic() {
    let source = "def f = fn(a) => { if (a < 2) return a; return f(a - 1); }; print f(5);";

    let first = tokenize(source).unwrap();
    let second = tokenize(source).unwrap();
    assert_eq!(first, second);
    assert_eq!(parse(&first).unwrap(), parse(&second).unwrap());
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(printed_expr("print 1 + 2 * 3;"),
               *binary(int(1), BinaryOperator::Add, binary(int(2), BinaryOperator::Mul, int(3))));
}

#[test]
fn subtraction_is_left_associative() {
    assert_eq!(printed_expr("print 2 - 3 - 4;"),
               *binary(binary(int(2), BinaryOperator::Sub, int(3)), BinaryOperator::Sub, int(4)));
}

#[test]
fn comparison_has_the_lowest_precedence() {
    assert_eq!(printed_expr("print 1 + 2 < 4 / 2;"),
               *binary(binary(int(1), BinaryOperator::Add, int(2)),
                       BinaryOperator::Less,
                       binary(int(4), BinaryOperator::Div, int(2))));
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(printed_expr("print (1 + 2) * 3;"),
               *binary(binary(int(1), BinaryOperator::Add, int(2)), BinaryOperator::Mul, int(3)));
}

#[test]
fn function_literals_and_calls() {
    let statements = parse_source("def add = fn(a, b) => { return a + b; };\ncall add(1, 2);").unwrap();

    match &statements[0] {
        Statement::Def { name,
                         value: Expr::FnLiteral(function),
                         .. } => {
            assert_eq!(name, "add");
            assert_eq!(function.params, vec!["a".to_string(), "b".to_string()]);
            assert!(matches!(&function.body, Statement::Block { statements, .. } if statements.len() == 1));
        },
        other => panic!("Expected a function definition, got {other:?}"),
    }

    match &statements[1] {
        Statement::Call { expr: Expr::FuncCall { callee, arguments, line },
                          .. } => {
            assert_eq!(**callee, Expr::Name { name: "add".to_string(),
                                              line: 2 });
            assert_eq!(arguments.len(), 2);
            assert_eq!(*line, 2);
        },
        other => panic!("Expected a call statement, got {other:?}"),
    }
}

#[test]
fn else_attaches_to_the_nearest_if() {
    match parse_source("if (1) if (0) print 1; else print 2;").unwrap().as_slice() {
        [Statement::If { then_branch,
                         else_branch: None,
                         .. }] => {
            assert!(matches!(**then_branch, Statement::If { else_branch: Some(_), .. }));
        },
        other => panic!("Unexpected parse: {other:?}"),
    }
}

#[test]
fn calls_cannot_be_chained() {
    assert!(matches!(parse_source("call f()();"),
                     Err(ParseError::UnexpectedToken { .. })));
}

#[test]
fn bare_expressions_are_not_statements() {
    assert!(matches!(parse_source("x;"), Err(ParseError::ExpectedStatement { line: 1, .. })));
    assert!(matches!(parse_source("Print x;"), Err(ParseError::ExpectedStatement { .. })));
}

#[test]
fn reserved_keywords_are_rejected() {
    for (source, reserved) in [("def and = 1;", "and"), ("print not;", "not"), ("or;", "or")] {
        match parse_source(source) {
            Err(ParseError::ReservedKeyword { keyword, .. }) => assert_eq!(keyword, reserved),
            other => panic!("Expected reserved keyword error for {source:?}, got {other:?}"),
        }
    }
}

#[test]
fn premature_end_reports_the_last_line() {
    assert!(matches!(parse_source("def f = fn() => {\nprint 1;"),
                     Err(ParseError::UnexpectedEndOfInput { line: 2, .. })));
    assert!(matches!(parse_source("print 1"),
                     Err(ParseError::UnexpectedEndOfInput { line: 1, .. })));
}

#[test]
fn oversized_literals_are_rejected() {
    assert!(matches!(parse_source("print 99999999999999999999;"),
                     Err(ParseError::LiteralTooLarge { .. })));
    assert!(parse_source("print 9223372036854775807;").is_ok());
}

#[test]
fn empty_programs_parse() {
    assert_eq!(parse_source("").unwrap(), Vec::new());
    assert_eq!(parse_source("  \n\n ").unwrap(), Vec::new());
}
