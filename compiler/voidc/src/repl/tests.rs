#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use pretty_assertions::assert_eq;
use void_eval::buffer_handler;

fn transcript(input: &str) -> (String, String) {
    let print = buffer_handler();
    let mut session = Session::with_print_handler(print.clone());
    let mut output = Vec::new();
    run(&mut session, input.as_bytes(), &mut output).unwrap();
    (String::from_utf8(output).unwrap(), print.get_output())
}

#[test]
fn test_prints_each_result() {
    let (output, _) = transcript("let x = 2;\nx * 21\n");
    assert_eq!(output, ">> null\n>> 42\n>> \n");
}

#[test]
fn test_exit_stops_loop() {
    let (output, _) = transcript("1\nexit\n2\n");
    assert_eq!(output, ">> 1\n>> ");
}

#[test]
fn test_state_and_errors_across_lines() {
    let (output, _) = transcript("let f = fn(x) { x + 1 };\nf(true)\nf(1)\n");
    assert_eq!(
        output,
        ">> null\n>> <error: type mismatch: BOOLEAN + INTEGER>\n>> 2\n>> \n"
    );
}

#[test]
fn test_puts_goes_to_print_handler() {
    let (output, printed) = transcript("puts(\"hi\")\r\n");
    assert_eq!(output, ">> null\n>> \n");
    assert_eq!(printed, "<puts: hi>\n");
}
