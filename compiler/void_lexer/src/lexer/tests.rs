use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;

/// Helper: scan and return `(kind, literal)` pairs, excluding the final Eof.
fn scan(source: &str) -> Vec<(TokenKind, String)> {
    tokenize(source)
        .into_iter()
        .filter(|t| !t.is(TokenKind::Eof))
        .map(|t| (t.kind, t.literal))
        .collect()
}

fn kinds(source: &str) -> Vec<TokenKind> {
    scan(source).into_iter().map(|(kind, _)| kind).collect()
}

fn tok(kind: TokenKind, literal: &str) -> (TokenKind, String) {
    (kind, literal.to_string())
}

// ─── Operators ─────────────────────────────────────────────────────────

#[test]
fn single_char_operators() {
    use TokenKind::*;
    assert_eq!(
        kinds("=+-!*/<>,:;(){}[]"),
        vec![
            Assign,
            Plus,
            Minus,
            Bang,
            Asterisk,
            Slash,
            Less,
            Greater,
            Comma,
            Colon,
            Semicolon,
            LeftParen,
            RightParen,
            LeftBrace,
            RightBrace,
            LeftBracket,
            RightBracket,
        ]
    );
}

#[test]
fn two_char_operators() {
    assert_eq!(
        scan("== != <= >= = ! < >"),
        vec![
            tok(TokenKind::Equal, "=="),
            tok(TokenKind::NotEqual, "!="),
            tok(TokenKind::LessEqual, "<="),
            tok(TokenKind::GreaterEqual, ">="),
            tok(TokenKind::Assign, "="),
            tok(TokenKind::Bang, "!"),
            tok(TokenKind::Less, "<"),
            tok(TokenKind::Greater, ">"),
        ]
    );
}

#[test]
fn triple_equals_splits_left_to_right() {
    assert_eq!(kinds("==="), vec![TokenKind::Equal, TokenKind::Assign]);
}

// ─── Literals ──────────────────────────────────────────────────────────

#[test]
fn minus_is_separate_from_integer() {
    assert_eq!(
        scan("-10-1 12345"),
        vec![
            tok(TokenKind::Minus, "-"),
            tok(TokenKind::Int, "10"),
            tok(TokenKind::Minus, "-"),
            tok(TokenKind::Int, "1"),
            tok(TokenKind::Int, "12345"),
        ]
    );
}

#[test]
fn leading_zeros_stay_in_literal() {
    assert_eq!(scan("00234"), vec![tok(TokenKind::Int, "00234")]);
}

#[test]
fn adjacent_strings() {
    assert_eq!(
        scan(r#""1234""4321""#),
        vec![tok(TokenKind::Str, "1234"), tok(TokenKind::Str, "4321")]
    );
}

#[test]
fn string_has_no_escapes() {
    assert_eq!(
        scan(r#""a\n b" x"#),
        vec![tok(TokenKind::Str, r"a\n b"), tok(TokenKind::Ident, "x")]
    );
}

#[test]
fn empty_string() {
    assert_eq!(scan(r#""""#), vec![tok(TokenKind::Str, "")]);
}

#[test]
fn unterminated_string_is_illegal() {
    assert_eq!(
        scan(r#"let s = "abc"#),
        vec![
            tok(TokenKind::Let, "let"),
            tok(TokenKind::Ident, "s"),
            tok(TokenKind::Assign, "="),
            tok(TokenKind::Illegal, "\"abc"),
        ]
    );
}

// ─── Identifiers & Keywords ────────────────────────────────────────────

#[test]
fn keywords() {
    use TokenKind::*;
    assert_eq!(
        kinds("let fn true false if else return"),
        vec![Let, Function, True, False, If, Else, Return]
    );
}

#[test]
fn identifiers() {
    assert_eq!(
        scan("foo _bar x1 fnord letter"),
        vec![
            tok(TokenKind::Ident, "foo"),
            tok(TokenKind::Ident, "_bar"),
            tok(TokenKind::Ident, "x1"),
            tok(TokenKind::Ident, "fnord"),
            tok(TokenKind::Ident, "letter"),
        ]
    );
}

#[test]
fn digits_then_letters_split() {
    assert_eq!(
        scan("12ab"),
        vec![tok(TokenKind::Int, "12"), tok(TokenKind::Ident, "ab")]
    );
}

// ─── Errors & EOF ──────────────────────────────────────────────────────

#[test]
fn illegal_characters_advance() {
    assert_eq!(
        scan("a @ λ # b"),
        vec![
            tok(TokenKind::Ident, "a"),
            tok(TokenKind::Illegal, "@"),
            tok(TokenKind::Illegal, "λ"),
            tok(TokenKind::Illegal, "#"),
            tok(TokenKind::Ident, "b"),
        ]
    );
}

#[test]
fn repeated_eof() {
    let mut lexer = Lexer::new("  x ");
    assert_eq!(lexer.next_token(), Token::new(TokenKind::Ident, "x"));
    for _ in 0..3 {
        assert_eq!(lexer.next_token(), Token::eof());
    }
}

#[test]
fn empty_and_blank_input() {
    assert_eq!(tokenize(""), vec![Token::eof()]);
    assert_eq!(tokenize(" \t\r\n"), vec![Token::eof()]);
}

#[test]
fn full_statement() {
    use TokenKind::*;
    let source = "let add = fn(x, y) { x + y; };\nadd(five, [1, 2][0]);";
    assert_eq!(
        kinds(source),
        vec![
            Let, Ident, Assign, Function, LeftParen, Ident, Comma, Ident, RightParen, LeftBrace,
            Ident, Plus, Ident, Semicolon, RightBrace, Semicolon, Ident, LeftParen, Ident, Comma,
            LeftBracket, Int, Comma, Int, RightBracket, LeftBracket, Int, RightBracket,
            RightParen, Semicolon,
        ]
    );
}

// ─── Property Tests ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn never_panics_and_ends_with_single_eof(source in "\\PC{0,64}") {
        let tokens = tokenize(&source);
        let eofs = tokens.iter().filter(|t| t.is(TokenKind::Eof)).count();
        prop_assert_eq!(eofs, 1);
        prop_assert!(tokens.last().is_some_and(|t| t.is(TokenKind::Eof)));
    }

    #[test]
    fn literals_cover_all_non_whitespace(
        source in "[a-z0-9_=!<>+*/,;:(){}\\[\\] \t\r\n-]{0,64}"
    ) {
        let joined: String = scan(&source).into_iter().map(|(_, lit)| lit).collect();
        let expected: String = source.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        prop_assert_eq!(joined, expected);
    }

    #[test]
    fn integer_literal_is_one_token(n in any::<u64>()) {
        let text = n.to_string();
        prop_assert_eq!(scan(&text), vec![tok(TokenKind::Int, &text)]);
    }

    #[test]
    fn quoted_text_round_trips(text in "[^\"]{0,32}") {
        let source = format!("\"{text}\"");
        prop_assert_eq!(scan(&source), vec![tok(TokenKind::Str, &text)]);
    }
}
