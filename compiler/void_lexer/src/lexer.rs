use void_ir::{Token, TokenKind};

use crate::cursor::Cursor;

/// Single-lookahead scanner producing one token per call.
pub struct Lexer<'src> {
    cursor: Cursor<'src>,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Lexer {
            cursor: Cursor::new(source),
        }
    }

    /// Produce the next token.
    ///
    /// Whitespace before the token is skipped. After the input is exhausted
    /// this keeps returning [`TokenKind::Eof`].
    pub fn next_token(&mut self) -> Token {
        self.cursor.eat_whitespace();
        if self.cursor.is_eof() {
            return Token::eof();
        }

        let start = self.cursor.pos();
        match self.cursor.current() {
            b'=' => self.one_or_two(start, TokenKind::Assign, TokenKind::Equal),
            b'!' => self.one_or_two(start, TokenKind::Bang, TokenKind::NotEqual),
            b'<' => self.one_or_two(start, TokenKind::Less, TokenKind::LessEqual),
            b'>' => self.one_or_two(start, TokenKind::Greater, TokenKind::GreaterEqual),
            b'+' => self.single(start, TokenKind::Plus),
            b'-' => self.single(start, TokenKind::Minus),
            b'*' => self.single(start, TokenKind::Asterisk),
            b'/' => self.single(start, TokenKind::Slash),
            b',' => self.single(start, TokenKind::Comma),
            b':' => self.single(start, TokenKind::Colon),
            b';' => self.single(start, TokenKind::Semicolon),
            b'(' => self.single(start, TokenKind::LeftParen),
            b')' => self.single(start, TokenKind::RightParen),
            b'{' => self.single(start, TokenKind::LeftBrace),
            b'}' => self.single(start, TokenKind::RightBrace),
            b'[' => self.single(start, TokenKind::LeftBracket),
            b']' => self.single(start, TokenKind::RightBracket),
            b'"' => self.string(start),
            b'0'..=b'9' => self.integer(start),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(start),
            _ => self.illegal(start),
        }
    }

    // ─── Operators & Punctuation ───────────────────────────────────────

    fn single(&mut self, start: usize, kind: TokenKind) -> Token {
        self.cursor.advance();
        self.token(start, kind)
    }

    /// `x` or `x=`, e.g. `<` versus `<=`.
    fn one_or_two(&mut self, start: usize, one: TokenKind, two: TokenKind) -> Token {
        if self.cursor.peek() == b'=' {
            self.cursor.advance_n(2);
            self.token(start, two)
        } else {
            self.cursor.advance();
            self.token(start, one)
        }
    }

    // ─── Literals & Names ──────────────────────────────────────────────

    /// Maximal run of decimal digits. Sign and range are left to the parser.
    fn integer(&mut self, start: usize) -> Token {
        self.cursor.eat_while(|b| b.is_ascii_digit());
        self.token(start, TokenKind::Int)
    }

    fn identifier(&mut self, start: usize) -> Token {
        self.cursor.eat_while(is_ident_continue);
        let word = self.cursor.slice_from(start);
        let kind = TokenKind::keyword(word).unwrap_or(TokenKind::Ident);
        Token::new(kind, word)
    }

    /// `"..."` with no escape processing. The token literal excludes the quotes.
    ///
    /// Without a closing quote the rest of the input, opening quote
    /// included, becomes a single illegal token.
    fn string(&mut self, start: usize) -> Token {
        self.cursor.advance();
        let content_start = self.cursor.pos();
        if self.cursor.skip_to(b'"') {
            let content = self.cursor.slice_from(content_start);
            self.cursor.advance();
            Token::new(TokenKind::Str, content)
        } else {
            self.token(start, TokenKind::Illegal)
        }
    }

    // ─── Error tokens ──────────────────────────────────────────────────

    fn illegal(&mut self, start: usize) -> Token {
        self.cursor.advance_char();
        self.token(start, TokenKind::Illegal)
    }

    #[inline]
    fn token(&self, start: usize, kind: TokenKind) -> Token {
        Token::new(kind, self.cursor.slice_from(start))
    }
}

/// 256-byte lookup table for identifier continuation bytes.
/// `true` for a-z, A-Z, 0-9, and underscore.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_IDENT_CONTINUE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(
            i as u8,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_'
        );
        i += 1;
    }
    table
};

#[inline]
fn is_ident_continue(b: u8) -> bool {
    IS_IDENT_CONTINUE_TABLE[b as usize]
}

/// Scan `source` to completion.
///
/// The returned tokens end with exactly one [`TokenKind::Eof`].
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.is(TokenKind::Eof);
        tokens.push(token);
        if done {
            break;
        }
    }
    tokens
}

#[cfg(test)]
mod tests;
