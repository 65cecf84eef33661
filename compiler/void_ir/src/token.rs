//! Lexical tokens.

use std::fmt;

/// Classification of a lexical unit.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // Special
    Illegal,
    Eof,

    // Literals and names
    Ident,
    Int,
    Str,

    // Operators
    Assign,
    Plus,
    Minus,
    Bang,
    Asterisk,
    Slash,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Equal,
    NotEqual,

    // Punctuation
    Comma,
    Colon,
    Semicolon,
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,

    // Keywords
    Function,
    Let,
    True,
    False,
    If,
    Else,
    Return,
}

impl TokenKind {
    /// Name of the kind as it appears in parser error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Illegal => "illegal",
            Self::Eof => "eof",
            Self::Ident => "ident",
            Self::Int => "int",
            Self::Str => "string",
            Self::Assign => "assign",
            Self::Plus => "plus",
            Self::Minus => "minus",
            Self::Bang => "bang",
            Self::Asterisk => "asterisk",
            Self::Slash => "slash",
            Self::Less => "less",
            Self::LessEqual => "less_equal",
            Self::Greater => "greater",
            Self::GreaterEqual => "greater_equal",
            Self::Equal => "equal",
            Self::NotEqual => "not_equal",
            Self::Comma => "comma",
            Self::Colon => "colon",
            Self::Semicolon => "semicolon",
            Self::LeftParen => "left_paren",
            Self::RightParen => "right_paren",
            Self::LeftBrace => "left_brace",
            Self::RightBrace => "right_brace",
            Self::LeftBracket => "left_bracket",
            Self::RightBracket => "right_bracket",
            Self::Function => "function",
            Self::Let => "let",
            Self::True => "true",
            Self::False => "false",
            Self::If => "if",
            Self::Else => "else",
            Self::Return => "return",
        }
    }

    /// Resolve an identifier-shaped word against the keyword set.
    ///
    /// Returns `None` for ordinary identifiers.
    pub fn keyword(word: &str) -> Option<TokenKind> {
        match word {
            "fn" => Some(Self::Function),
            "let" => Some(Self::Let),
            "true" => Some(Self::True),
            "false" => Some(Self::False),
            "if" => Some(Self::If),
            "else" => Some(Self::Else),
            "return" => Some(Self::Return),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token: its kind plus the exact source text it was scanned from.
///
/// String tokens carry the text between the quotes; the end-of-input token
/// carries `EOF`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    /// Literal carried by the end-of-input token.
    pub const EOF_LITERAL: &'static str = "EOF";

    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Token {
            kind,
            literal: literal.into(),
        }
    }

    pub fn eof() -> Self {
        Token::new(TokenKind::Eof, Self::EOF_LITERAL)
    }

    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind, self.literal)
    }
}

#[cfg(test)]
mod tests;
