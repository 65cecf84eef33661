use super::*;

#[test]
fn test_keyword_lookup() {
    assert_eq!(TokenKind::keyword("fn"), Some(TokenKind::Function));
    assert_eq!(TokenKind::keyword("let"), Some(TokenKind::Let));
    assert_eq!(TokenKind::keyword("return"), Some(TokenKind::Return));
    assert_eq!(TokenKind::keyword("function"), None);
    assert_eq!(TokenKind::keyword("Let"), None);
    assert_eq!(TokenKind::keyword("lets"), None);
}

#[test]
fn test_kind_names_used_in_errors() {
    assert_eq!(TokenKind::Ident.name(), "ident");
    assert_eq!(TokenKind::Int.name(), "int");
    assert_eq!(TokenKind::Str.name(), "string");
    assert_eq!(TokenKind::LessEqual.to_string(), "less_equal");
    assert_eq!(TokenKind::RightBracket.to_string(), "right_bracket");
    assert_eq!(TokenKind::Function.to_string(), "function");
}

#[test]
fn test_eof_token() {
    let eof = Token::eof();
    assert!(eof.is(TokenKind::Eof));
    assert_eq!(eof.literal, "EOF");
    assert_eq!(eof.to_string(), "eof(EOF)");
}
