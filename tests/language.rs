use std::fs;

use quill::{
    error::{Error, LexError, ParseError, RuntimeError},
    run, run_with_output,
};
use walkdir::WalkDir;

#[test]
fn program_files_match_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/programs").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "ql"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                             panic!("Failed to read \
                                                                     {expected_path:?}: {e}")
                                                         });

        count += 1;
        match run(&source) {
            Ok(output) => assert_eq!(output, expected, "Output of {path:?} differs"),
            Err(e) => panic!("Program {path:?} failed:\n{source}\nError: {e:?}"),
        }
    }

    assert!(count > 0, "No programs found in tests/programs");
}

fn assert_success(src: &str) {
    if let Err(e) = run(src) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) {
    if run(src).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

fn assert_output(src: &str, expected: &str) {
    match run(src) {
        Ok(output) => assert_eq!(output, expected, "Unexpected output for:\n{src}"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn runtime_error(src: &str) -> RuntimeError {
    match run(src) {
        Err(Error::Runtime(e)) => e,
        other => panic!("Expected a runtime error, got {other:?}"),
    }
}

#[test]
fn arithmetic_and_precedence() {
    assert_output("print 1 + 2 * (3 + 4);", "15\n");
    assert_output("print 2 - 3 - 4;", "-5\n");
    assert_output("print (2 - 3) * 4;", "-4\n");
    assert_output("print 10 - 2 * 3;", "4\n");
}

#[test]
fn division_is_real_valued() {
    assert_output("print 7 / 2;", "3.5\n");
    assert_output("print 6 / 3;", "2\n");
    assert_output("print 1 / 4 + 1;", "1.25\n");
    assert_output("print 1 / 0;", "inf\n");
    assert_output("print 0 / 0;", "NaN\n");
}

#[test]
fn comparisons() {
    assert_output("print 1 < 2; print 2 <= 2; print 3 > 4; print 4 >= 5;",
                  "true\ntrue\nfalse\nfalse\n");
    assert_output("print 2 == 2; print 2 <> 2; print 1 / 2 < 1;", "true\nfalse\ntrue\n");
    assert_output("print 0 / 0 == 0 / 0; print 0 / 0 < 1;", "false\nfalse\n");
    assert_output("print 1 == 1 == 1;", "false\n");
    assert_output("print 1 <> (1 < 2); print 1 / 2 <> 1 / 2;", "true\nfalse\n");
}

#[test]
fn function_values_compare_by_identity() {
    assert_output("def f = fn() => {}; def g = f; print f == g; print f == fn() => {};",
                  "true\nfalse\n");
    assert_output("def f = fn() => {}; print f() == f();", "true\n");
}

#[test]
fn truthiness_of_conditions() {
    assert_output("if (0) print 1; else print 2;", "2\n");
    assert_output("if (5) print 1; else print 2;", "1\n");
    assert_output("def f = fn() => {}; if (f()) print 1; else print 2;", "2\n");
    assert_output("def f = fn() => {}; if (f) print 1; else print 2;", "1\n");
    assert_output("if (0 / 0) print 1; else print 2;", "2\n");
}

#[test]
fn else_binds_to_nearest_if() {
    assert_output("if (1) if (0) print 1; else print 2;", "2\n");
    assert_output("if (0) if (1) print 1; else print 2;", "");
}

#[test]
fn bindings_and_blocks() {
    assert_output("def x = 1; { let x = 2; } print x;", "2\n");
    assert_output("def x = 1; { def x = 2; } print x;", "1\n");
    assert_failure("{ def t = 1; } print t;");
    assert_success("def x = 1; { def x = 2; { def x = 3; } }");
}

#[test]
fn while_loop_sums() {
    assert_output("def i = 1; def sum = 0; while (i <= 10) { let sum = sum + i; let i = i + 1; } \
                   print sum;",
                  "55\n");
}

#[test]
fn recursive_fibonacci() {
    assert_output("def fib = fn(n) => { if (n < 2) return n; return fib(n - 1) + fib(n - 2); }; \
                   print fib(15);",
                  "610\n");
}

#[test]
fn calls_use_the_callers_scope() {
    assert_output("def show = fn() => { print z; }; def z = 1; call show(); { def z = 2; call \
                   show(); }",
                  "1\n2\n");
    assert_output("def bump = fn() => { let counter = counter + 1; }; def counter = 0; call \
                   bump(); call bump(); print counter;",
                  "2\n");
}

#[test]
fn argument_binding() {
    assert_output("def f = fn(a, b) => { print a; print b; }; call f(1);", "1\nnone\n");
    assert_output("def f = fn(a) => { return a; }; print f(1, 2);", "1\n");
    assert_output("def f = fn() => { return 7; }; print f();", "7\n");
}

#[test]
fn evaluation_order_is_left_to_right() {
    assert_output("def log = fn(n) => { print n; return n; }; print log(1) + log(2);",
                  "1\n2\n3\n");
    assert_output("def log = fn(n) => { print n; return n; }; def f = fn(a, b) => { return a - \
                   b; }; print f(log(5), log(3));",
                  "5\n3\n2\n");
}

#[test]
fn return_stops_the_function() {
    assert_output("def f = fn() => { return 1; print 2; }; print f();", "1\n");
    assert_output("def f = fn(n) => { while (1) { { if (n == 3) return n; } let n = n + 1; } \
                   }; print f(0);",
                  "3\n");
    assert_output("def f = fn() => { print 1; }; print f();", "1\nnone\n");
}

#[test]
fn function_body_may_shadow_a_parameter() {
    assert_output("def f = fn(n) => { def n = 2; print n; }; call f(1);", "2\n");
    assert_output("def f = fn(n) => { { def n = 3; } return n; }; print f(1);", "1\n");
}

#[test]
fn duplicate_definition_fails() {
    let e = runtime_error("def x = 1; def x = 2;");
    assert!(matches!(e, RuntimeError::DuplicateDefinition { ref name, line: 1 } if name == "x"));

    let e = runtime_error("def f = fn(a, a) => {}; call f(1, 2);");
    assert!(matches!(e, RuntimeError::DuplicateDefinition { .. }));
}

#[test]
fn undefined_names_fail() {
    let e = runtime_error("let y = 1;");
    assert!(matches!(e, RuntimeError::UndefinedName { ref name, line: 1 } if name == "y"));

    let e = runtime_error("def x = 1;\n\nprint y;");
    assert!(matches!(e, RuntimeError::UndefinedName { line: 3, .. }));

    let e = runtime_error("def f = fn() => { def local = 1; }; call f(); print local;");
    assert!(matches!(e, RuntimeError::UndefinedName { .. }));
}

#[test]
fn return_outside_function_fails() {
    assert!(matches!(runtime_error("return 1;"),
                     RuntimeError::ReturnOutsideFunction { line: 1 }));
    assert!(matches!(runtime_error("print 1;\nwhile (1) { return 2; }"),
                     RuntimeError::ReturnOutsideFunction { line: 2 }));
}

#[test]
fn calling_a_non_function_fails() {
    let e = runtime_error("def x = 1; call x();");
    assert!(matches!(e, RuntimeError::NotCallable { ref found, .. } if found == "1"));
}

#[test]
fn operand_type_errors() {
    assert!(matches!(runtime_error("print (1 < 2) + 1;"), RuntimeError::TypeError { .. }));
    assert!(matches!(runtime_error("def f = fn() => {}; print f < 1;"),
                     RuntimeError::TypeError { .. }));
    assert!(matches!(runtime_error("def f = fn() => {}; print f() / 2;"),
                     RuntimeError::TypeError { .. }));
}

#[test]
fn large_integers_round_when_promoted_to_real() {
    assert_output("print 9007199254740993 / 1;", "9007199254740992\n");
    assert_output("print 9007199254740991 / 1;", "9007199254740991\n");
    assert_output("def big = 9007199254740993; print big < 1 / 2; print big > 1 / 2;",
                  "false\ntrue\n");
    assert_output("print 10000000000000000 == 1 / 2;", "false\n");
    assert_output("print 9223372036854775807 + 1 / 2;", "9223372036854776000\n");
}

#[test]
fn integer_overflow_fails() {
    assert!(matches!(runtime_error("print 9223372036854775807 + 1;"),
                     RuntimeError::Overflow { line: 1 }));
    assert!(matches!(runtime_error("print 4611686018427387904 * 2;"),
                     RuntimeError::Overflow { .. }));
}

#[test]
fn phase_errors_are_reported() {
    assert!(matches!(run("print 1 @ 2;"),
                     Err(Error::Lex(LexError::UnexpectedCharacter { character: '@',
                                                                    line:      1, }))));
    assert!(matches!(run("print 1"), Err(Error::Parse(ParseError::UnexpectedEndOfInput { .. }))));
    assert!(matches!(run("print 9223372036854775808;"),
                     Err(Error::Parse(ParseError::LiteralTooLarge { .. }))));
}

#[test]
fn error_messages_name_the_line() {
    let message = run("let y = 1;").unwrap_err().to_string();
    assert_eq!(message, "Error on line 1: Undefined name 'y'.");

    let message = run("print 1;\ndef and = 2;").unwrap_err().to_string();
    assert_eq!(message, "Error on line 2: Keyword 'and' is reserved.");
}

#[test]
fn output_before_an_error_is_kept() {
    let mut output = Vec::new();
    let result = run_with_output("print 1; print 2; call missing(); print 3;", &mut output);

    assert!(matches!(result, Err(Error::Runtime(RuntimeError::UndefinedName { .. }))));
    assert_eq!(String::from_utf8(output).unwrap(), "1\n2\n");
}

#[test]
fn parse_errors_produce_no_output() {
    let mut output = Vec::new();
    let result = run_with_output("print 1; print 2 +;", &mut output);

    assert!(matches!(result, Err(Error::Parse(_))));
    assert!(output.is_empty());
}
