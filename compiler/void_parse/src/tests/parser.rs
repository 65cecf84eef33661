//! Core parser tests.
//!
//! Most assertions compare the canonical stringification, which shows the
//! grouping the parser chose.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;
use void_ir::{Expression, FunctionId, Identifier, Program, Statement};

use crate::parse;

fn parse_ok(source: &str) -> Program {
    let output = parse(source);
    assert!(
        !output.has_errors(),
        "unexpected errors for {source:?}: {:?}",
        output.error_summary()
    );
    output.program
}

fn render(source: &str) -> String {
    parse_ok(source).to_string()
}

fn render_each(source: &str) -> Vec<String> {
    parse_ok(source)
        .statements
        .iter()
        .map(ToString::to_string)
        .collect()
}

#[test]
fn test_parse_literals() {
    let program = parse_ok("1 00234\ntrue false \"hi\" x");
    assert_eq!(
        program.statements,
        vec![
            Statement::Expression(Expression::Integer(1)),
            Statement::Expression(Expression::Integer(234)),
            Statement::Expression(Expression::Boolean(true)),
            Statement::Expression(Expression::Boolean(false)),
            Statement::Expression(Expression::Str("hi".to_string())),
            Statement::Expression(Expression::Identifier(Identifier::new("x"))),
        ]
    );
}

#[test]
fn test_parse_let_and_return() {
    assert_eq!(
        render_each("let x = 5; let s = \"hello, world!\"; return x;"),
        vec!["let x = 5", "let s = \"hello, world!\"", "return x"]
    );
}

#[test]
fn test_semicolons_are_optional() {
    assert_eq!(render_each("let x = 5\nx"), vec!["let x = 5", "x"]);
}

#[test]
fn test_empty_statements() {
    assert!(parse_ok(";;;").statements.is_empty());
}

#[test]
fn test_prefix_and_infix_precedence() {
    let cases = [
        ("-1+2*3<=false", "(((-1) + (2 * 3)) <= false)"),
        ("!false==true", "((!false) == true)"),
        ("-a * b", "((-a) * b)"),
        ("!-a", "(!(-a))"),
        ("a + b - c", "((a + b) - c)"),
        ("a * b / c", "((a * b) / c)"),
        ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
        ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
        ("5 >= 4 != 3 <= 4", "((5 >= 4) != (3 <= 4))"),
        ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))"),
    ];
    for (source, expected) in cases {
        assert_eq!(render(source), expected, "source: {source}");
    }
}

#[test]
fn test_groups_override_precedence() {
    assert_eq!(render("(1 + 2) / 3"), "((1 + 2) / 3)");
    assert_eq!(render("!(1 + 2 / 3) + 4"), "((!(1 + (2 / 3))) + 4)");
    assert_eq!(render("-(5 + 5)"), "(-(5 + 5))");
    assert_eq!(render("((1))"), "1");
}

#[test]
fn test_semicolon_ends_expression() {
    assert_eq!(render_each("1 + 2; 3"), vec!["(1 + 2)", "3"]);
}

#[test]
fn test_parse_if() {
    assert_eq!(
        render("if (true) { return false } else { return 0 }"),
        "if (true) { return false } else { return 0 }"
    );
    assert_eq!(render("if (1 + 2) { 0 } else { 0 }"), "if ((1 + 2)) { 0 } else { 0 }");
    assert_eq!(render("if (false) {} else {}"), "if (false) {} else {}");
    assert_eq!(render("if (true) {}"), "if (true) {}");
}

#[test]
fn test_parse_function_literals() {
    assert_eq!(render("fn(a, b, c, d) { return d; }"), "fn (a, b, c, d) { return d }");
    assert_eq!(render("fn() {}"), "fn () {}");
    assert_eq!(render("fn(a,) {}"), "fn (a) {}");
    assert_eq!(
        render("let a = fn(x, y) { return x + y; };"),
        "let a = fn (x, y) { return (x + y) }"
    );
}

#[test]
fn test_block_concatenates_statements() {
    assert_eq!(render("fn() { let a = 1; a }"), "fn () { let a = 1a }");
}

#[test]
fn test_parse_arrays() {
    assert_eq!(
        render("[1 + 2 + -1 + -2, fn() {}]"),
        "[(((1 + 2) + (-1)) + (-2)), fn () {}]"
    );
    assert_eq!(render("[]"), "[]");
    assert_eq!(render("[1, 2,]"), "[1, 2]");
}

#[test]
fn test_parse_calls_and_indexing() {
    assert_eq!(
        render("fn(a, b) { return a + b }(1, 2)"),
        "fn (a, b) { return (a + b) }(1, 2)"
    );
    assert_eq!(
        render("add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))"),
        "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))"
    );
    assert_eq!(render("[1, 2, 3, 4][0]"), "[1, 2, 3, 4][0]");
    assert_eq!(render("[fn() {}][0]()"), "[fn () {}][0]()");
    assert_eq!(render("a * [1, 2][b * c] * d"), "((a * [1, 2][(b * c)]) * d)");
    assert_eq!(render("a + b(c * d)[0]"), "(a + b((c * d))[0])");
}

#[test]
fn test_function_ids_are_preorder() {
    let program = parse_ok("let f = fn(x) { fn(y) { x + y } }; fn() {}");
    let ids: Vec<FunctionId> = program.functions().iter().map(|f| f.id).collect();
    assert_eq!(
        ids,
        vec![FunctionId::new(0), FunctionId::new(1), FunctionId::new(2)]
    );
    let inner = program.function(FunctionId::new(1)).unwrap();
    assert_eq!(inner.to_string(), "fn (y) { (x + y) }");
}

#[test]
fn test_deeply_nested_groups() {
    let depth = 20_000;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(render(&source), "1");
}
