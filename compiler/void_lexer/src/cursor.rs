//! Byte cursor over the source text.
//!
//! Positions are byte offsets into the original `&str`. The cursor only ever
//! stops on UTF-8 boundaries: ASCII bytes advance by one, and everything
//! else goes through [`Cursor::advance_char`], so slices taken between two
//! cursor positions are always valid `str` slices.

use memchr::memchr;

#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Cursor { source, pos: 0 }
    }

    /// Byte at the current position, or `0` past the end.
    ///
    /// Interior NUL bytes also read as `0`; use [`is_eof`](Self::is_eof) to
    /// tell them apart.
    #[inline]
    pub(crate) fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Byte one position ahead of current, or `0` past the end.
    #[inline]
    pub(crate) fn peek(&self) -> u8 {
        self.byte_at(self.pos + 1)
    }

    #[inline]
    fn byte_at(&self, index: usize) -> u8 {
        self.source.as_bytes().get(index).copied().unwrap_or(0)
    }

    #[inline]
    pub(crate) fn advance(&mut self) {
        debug_assert!(self.current().is_ascii(), "advance() on a non-ASCII byte");
        self.pos += 1;
    }

    #[inline]
    pub(crate) fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    /// Advance past one whole UTF-8 encoded code point.
    pub(crate) fn advance_char(&mut self) {
        let width = utf8_char_width(self.current());
        self.pos = (self.pos + width).min(self.source.len());
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    /// Source text from `start` to the current position.
    #[inline]
    pub(crate) fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.pos]
    }

    /// Advance while `pred` holds for the current byte.
    ///
    /// Stops at end of input since `0` never satisfies the predicates used
    /// by the lexer.
    #[inline]
    pub(crate) fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Skip space, tab, carriage return and line feed.
    pub(crate) fn eat_whitespace(&mut self) {
        self.eat_while(|b| matches!(b, b' ' | b'\t' | b'\r' | b'\n'));
    }

    /// Move to the next occurrence of `byte` at or after the current position.
    ///
    /// Returns `false` and moves to end of input when there is none.
    pub(crate) fn skip_to(&mut self, byte: u8) -> bool {
        let rest = &self.source.as_bytes()[self.pos..];
        match memchr(byte, rest) {
            Some(offset) => {
                self.pos += offset;
                true
            }
            None => {
                self.pos = self.source.len();
                false
            }
        }
    }
}

/// Byte width of the UTF-8 sequence introduced by `first`.
///
/// Continuation and invalid lead bytes count as width 1, which can only
/// happen if a caller is positioned mid-character.
#[inline]
fn utf8_char_width(first: u8) -> usize {
    match first {
        0x00..=0x7F => 1,
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}
