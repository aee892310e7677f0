use std::{
    fs::{self},
    io::{self, Write},
};

use emojilang::{
    error::{Error, ParseError, RuntimeError},
    interpreter::lexer::TokenKind,
    run,
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_dsl_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = run(&code, io::sink()) {
                panic!("DSL example {} in {:?} failed:\n{}\nError: {:?}",
                       i + 1,
                       path,
                       code,
                       e);
            }
        }
    }

    assert!(count > 0, "No DSL examples found in book/src");
}

fn extract_dsl_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```emoji") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn output_of(src: &str) -> String {
    let mut output = Vec::new();
    if let Err(e) = run(src, &mut output) {
        panic!("Script failed: {e}");
    }
    String::from_utf8(output).expect("output is UTF-8")
}

fn assert_output(src: &str, expected: &str) {
    assert_eq!(output_of(src), expected, "unexpected output for script:\n{src}");
}

fn assert_failure(src: &str) -> (Error, String) {
    let mut output = Vec::new();
    match run(src, &mut output) {
        Ok(_) => panic!("Script succeeded but was expected to fail"),
        Err(e) => (e, String::from_utf8(output).expect("output is UTF-8")),
    }
}

#[test]
fn assignment_then_print() {
    assert_output("📦 x == 5\n📢 x", "5.0\n");

    let variables = run("📦 x == 5", io::sink()).unwrap();
    assert_eq!(variables.get("x"), Some(&5.0));
}

#[test]
fn both_print_symbols_work() {
    assert_output("📢 1\n🖨 2\n🖨\u{fe0f} 3", "1.0\n2.0\n3.0\n");
}

#[test]
fn reassignment_overwrites() {
    assert_output("📦 x == 1\n📦 x == x ➕ 41\n📢 x", "42.0\n");
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_output("📢 2 ➕ 3 ✖ 4", "14.0\n");
    assert_output("📢 2 ✖ 3 ➕ 4", "10.0\n");
    assert_output("📢 2 ✖\u{fe0f} 3 ➕ 4", "10.0\n");
}

#[test]
fn operators_are_left_associative() {
    assert_output("📢 10 ➖ 3 ➖ 2", "5.0\n");
    assert_output("📢 8 ➗ 4 ➗ 2", "1.0\n");
}

#[test]
fn comparisons_yield_one_or_zero() {
    assert_output("📢 5 > 3", "1.0\n");
    assert_output("📢 5 < 3", "0.0\n");
    assert_output("📢 5 == 5", "1.0\n");
    assert_output("📢 5 != 5", "0.0\n");
    assert_output("📢 1 ➕ 1 == 2", "1.0\n");
}

#[test]
fn division_follows_floating_point_rules() {
    assert_output("📢 7 ➗ 2", "3.5\n");
    assert_output("📢 1 ➗ 0", "Infinity\n");
    assert_output("📢 0 ➖ 1 ➗ 0", "-Infinity\n");
    assert_output("📢 0 ➗ 0", "NaN\n");
}

#[test]
fn large_and_small_magnitudes() {
    assert_output("📢 10000000", "10000000.0\n");
    assert_output("📢 1000000000000000", "1000000000000000.0\n");
    assert_output("📢 100000000 ✖ 100000000", "1e16\n");
    assert_output("📢 1 ➗ 10000", "0.0001\n");
    assert_output("📢 1 ➗ 10000000", "1e-7\n");
}

#[test]
fn long_operator_chains_evaluate() {
    let terms = 10_000;
    let sum = format!("📦 total == 1{}\n📢 total", " ➕ 1".repeat(terms));
    assert_output(&sum, "10001.0\n");

    let nested_right = format!("📢 2 ✖ ({})", "1 ➖ ".repeat(terms) + "1");
    assert_output(&nested_right, "-19998.0\n");
}

#[test]
fn deep_nesting_is_error() {
    let depth = 2000;
    let groups = format!("📢 1\n📢 {}1{}", "(".repeat(depth), ")".repeat(depth));
    let (error, output) = assert_failure(&groups);

    assert!(output.is_empty());
    match error {
        Error::Parse(ParseError::NestingTooDeep { found, limit }) => {
            assert_eq!(found.kind, TokenKind::LParen);
            assert_eq!(found.line, 2);
            assert!(limit < depth);
        },
        other => panic!("expected a parse error, got {other:?}"),
    }

    let (error, _) = assert_failure(&"{".repeat(depth));
    assert!(error.to_string().starts_with("Error on line 1: Nesting exceeds"),
            "unexpected message: {error}");
}

#[test]
fn parentheses_group_expressions() {
    assert_output("📢 (2 ➕ 3) ✖ 4", "20.0\n");
    assert_output("📢 10 ➖ (3 ➖ 2)", "9.0\n");
}

#[test]
fn bare_expressions_are_printed() {
    assert_output("📦 a == 6\na ✖ 7", "42.0\n");
}

#[test]
fn semicolons_are_optional() {
    assert_output(";; 📦 x == 1; 📢 x; ;", "1.0\n");
    assert_output("📦 x == 1 📢 x", "1.0\n");
}

#[test]
fn unknown_characters_are_ignored() {
    assert_output("📢 1 ➕ 2 @@ $$ %", "3.0\n");
    assert_output("📦 x = == 1 !\n📢 x", "1.0\n");
}

#[test]
fn unicode_digits_are_rejected() {
    let (error, _) = assert_failure("📢 ٣٤");
    assert!(matches!(error, Error::Parse(ParseError::InvalidNumber { line: 1, .. })));
}

#[test]
fn unicode_identifiers() {
    assert_output("📦 größe == 3\n📢 größe ✖ 2", "6.0\n");
}

#[test]
fn if_else_branches() {
    assert_output("📦 x == 2\n❓ x > 1 { 📢 1 } else { 📢 0 }", "1.0\n");
    assert_output("📦 x == 0\n❓ x > 1 { 📢 1 } else { 📢 0 }", "0.0\n");
    assert_output("❓ 0 { 📢 1 }", "");
}

#[test]
fn single_statement_bodies() {
    assert_output("❓ 1 📢 7", "7.0\n");
    assert_output("❓ 0 📢 7 else 📢 8", "8.0\n");
    assert_output("📦 n == 3\n🔁 n > 0 📦 n == n ➖ 1\n📢 n", "0.0\n");
}

#[test]
fn identifier_after_if_is_not_swallowed() {
    assert_output("📦 y == 4\n❓ 0 📢 1\ny", "4.0\n");
}

#[test]
fn blocks_share_one_environment() {
    assert_output("{ 📦 a == 1 { 📦 b == a ➕ 1 } }\n📢 b", "2.0\n");
    assert_output("{ }", "");
}

#[test]
fn countdown_loop_terminates() {
    let src = "📦 n == 3\n📦 count == 0\n🔁 n > 0 { 📦 n == n ➖ 1; 📦 count == count ➕ 1 }";
    let variables = run(src, io::sink()).unwrap();

    assert_eq!(variables["n"], 0.0);
    assert_eq!(variables["count"], 3.0);
}

#[test]
fn counting_loop_end_to_end() {
    let src = "📦 x == 1; 🔁 x < 5 { 📢 x; 📦 x == x ➕ 1 }";
    let mut output = Vec::new();
    let variables = run(src, &mut output).unwrap();

    assert_eq!(String::from_utf8(output).unwrap(), "1.0\n2.0\n3.0\n4.0\n");
    assert_eq!(variables["x"], 5.0);
}

#[test]
fn unknown_variable_is_error() {
    let (error, output) = assert_failure("📢 1\n📢 y\n📢 2");

    assert_eq!(output, "1.0\n");
    match error {
        Error::Runtime(RuntimeError::UnknownVariable { name, line }) => {
            assert_eq!(name, "y");
            assert_eq!(line, 2);
        },
        other => panic!("expected an unknown variable error, got {other:?}"),
    }
}

#[test]
fn unknown_variable_message() {
    let (error, _) = assert_failure("📦 x == y");
    assert_eq!(error.to_string(), "Error on line 1: Unknown variable 'y'.");
}

#[test]
fn runs_do_not_share_variables() {
    run("📦 x == 1", io::sink()).unwrap();
    assert_failure("📢 x");
}

#[test]
fn missing_identifier_after_assign_is_error() {
    let (error, output) = assert_failure("📢 1\n📦 == 5");

    assert!(output.is_empty(), "nothing may run when parsing fails");
    match error {
        Error::Parse(ParseError::ExpectedToken { expected, found, .. }) => {
            assert_eq!(expected, TokenKind::Identifier);
            assert_eq!(found.kind, TokenKind::EqualEqual);
            assert_eq!(found.line, 2);
        },
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[test]
fn missing_separator_after_assigned_name_is_error() {
    let (error, _) = assert_failure("📦 x 5");

    match error {
        Error::Parse(e @ ParseError::ExpectedToken { expected: TokenKind::EqualEqual, .. }) => {
            assert_eq!(e.token().map(|t| t.lexeme.as_str()), Some("5"));
        },
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[test]
fn unclosed_block_is_error() {
    let (error, output) = assert_failure("📢 1\n{ 📢 2");

    assert!(output.is_empty());
    match error {
        Error::Parse(ParseError::ExpectedToken { expected, found, .. }) => {
            assert_eq!(expected, TokenKind::RBrace);
            assert_eq!(found.kind, TokenKind::EndOfInput);
        },
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[test]
fn unclosed_group_is_error() {
    let (error, _) = assert_failure("📢 (1 ➕ 2");
    assert!(matches!(error,
                     Error::Parse(ParseError::ExpectedToken { expected: TokenKind::RParen,
                                                              .. })));
}

#[test]
fn operator_cannot_start_expression() {
    let (error, _) = assert_failure("📢 ➕ 1");

    match error {
        Error::Parse(ParseError::ExpectedExpression { found }) => {
            assert_eq!(found.kind, TokenKind::Plus);
        },
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[test]
fn stray_semicolon_inside_block_is_error() {
    assert_failure("{ ; }");
}

#[test]
fn parse_error_message_names_the_token() {
    let (error, _) = assert_failure("📦 == 5");
    assert_eq!(error.to_string(),
               "Error on line 1: Expected IDENTIFIER after 📦, found EQUAL_EQUAL(==).");
}

struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn failing_output_is_error() {
    match run("📦 x == 1\n📢 x", BrokenPipe) {
        Err(Error::Runtime(RuntimeError::Output { line, .. })) => assert_eq!(line, 2),
        other => panic!("expected an output error, got {other:?}"),
    }
}

#[test]
fn example_works() {
    let contents = fs::read_to_string("tests/example.emj").unwrap();
    assert_output(&contents, "1.0\n1.0\n2.0\n3.0\n5.0\n8.0\n13.0\n21.0\n34.0\n55.0\n120.0\n");
}
