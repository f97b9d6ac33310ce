//! Byte cursor for line scanning.
//!
//! Offsets are absolute positions in the input buffer, so ranges taken
//! from a cursor that was limited to one line still index the whole input.

use crate::Range;

/// A cursor over a byte slice, optionally limited to a sub-range.
///
/// # Example
/// ```
/// use markdown2html::cursor::Cursor;
///
/// let input = b"## Heading";
/// let mut cursor = Cursor::new(input);
///
/// assert_eq!(cursor.skip_byte(b'#'), 2);
/// assert!(cursor.eat(b' '));
/// assert_eq!(cursor.rest(), b"Heading");
/// ```
#[derive(Clone, Copy)]
pub struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
    end: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor over a byte slice.
    #[inline]
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            pos: 0,
            end: input.len(),
        }
    }

    /// Create a cursor that only sees `range` of `input`.
    #[inline]
    pub fn within(input: &'a [u8], range: Range) -> Self {
        debug_assert!(range.end_usize() <= input.len());
        Self {
            input,
            pos: range.start_usize(),
            end: range.end_usize(),
        }
    }

    /// Current offset from the start of input.
    #[inline]
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Number of bytes remaining.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.end - self.pos
    }

    /// Check if cursor is at end of input.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.end
    }

    /// Peek the current byte without advancing.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        if self.is_eof() {
            None
        } else {
            Some(self.input[self.pos])
        }
    }

    /// Advance by n bytes.
    #[inline]
    pub fn advance(&mut self, n: usize) {
        debug_assert!(n <= self.remaining());
        self.pos = (self.pos + n).min(self.end);
    }

    /// Advance by 1 byte.
    #[inline]
    pub fn bump(&mut self) {
        self.advance(1);
    }

    /// Check if current position matches a byte.
    #[inline]
    pub fn at(&self, b: u8) -> bool {
        self.peek() == Some(b)
    }

    /// Check if current position matches any of the given bytes.
    #[inline]
    pub fn at_any(&self, bytes: &[u8]) -> bool {
        match self.peek() {
            Some(b) => bytes.contains(&b),
            None => false,
        }
    }

    /// Skip while predicate is true.
    #[inline]
    pub fn skip_while<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(u8) -> bool,
    {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if !predicate(b) {
                break;
            }
            self.bump();
        }
        self.pos - start
    }

    /// Decode the char at the cursor.
    #[inline]
    fn peek_char(&self) -> Option<char> {
        let rest = self.rest();
        let width = match *rest.first()? {
            b if b < 0x80 => return Some(b as char),
            b if b >= 0xF0 => 4,
            b if b >= 0xE0 => 3,
            _ => 2,
        };
        std::str::from_utf8(rest.get(..width)?).ok()?.chars().next()
    }

    /// Skip whitespace, Unicode included, the same set `str::trim` removes.
    #[inline]
    pub fn skip_whitespace(&mut self) -> usize {
        let start = self.pos;
        while self.eat_whitespace() {}
        self.pos - start
    }

    /// Consume one whitespace char if present.
    #[inline]
    pub fn eat_whitespace(&mut self) -> bool {
        match self.peek_char() {
            Some(c) if c.is_whitespace() => {
                self.advance(c.len_utf8());
                true
            }
            _ => false,
        }
    }

    /// Skip a run of one specific byte.
    #[inline]
    pub fn skip_byte(&mut self, b: u8) -> usize {
        self.skip_while(|c| c == b)
    }

    /// Skip a run of ASCII digits.
    #[inline]
    pub fn skip_digits(&mut self) -> usize {
        self.skip_while(|b| b.is_ascii_digit())
    }

    /// Consume a specific byte if present.
    #[inline]
    pub fn eat(&mut self, b: u8) -> bool {
        if self.at(b) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// The bytes between the cursor and its end.
    #[inline]
    pub fn rest(&self) -> &'a [u8] {
        &self.input[self.pos..self.end]
    }

    /// Range from the cursor to its end, with trailing whitespace trimmed.
    #[inline]
    pub fn rest_trimmed(&self) -> Range {
        let rest = self.rest();
        let len = match std::str::from_utf8(rest) {
            Ok(text) => text.trim_end().len(),
            Err(_) => rest.trim_ascii_end().len(),
        };
        Range::from_usize(self.pos, self.pos + len)
    }

    /// Advance past the next newline, returning the line without its
    /// terminator. A trailing `\r` is excluded as well.
    #[inline]
    pub fn consume_line(&mut self) -> Range {
        let start = self.pos;
        let (mut end, next) = match memchr::memchr(b'\n', self.rest()) {
            Some(i) => (start + i, start + i + 1),
            None => (self.end, self.end),
        };
        if end > start && self.input[end - 1] == b'\r' {
            end -= 1;
        }
        self.pos = next;
        Range::from_usize(start, end)
    }
}

impl std::fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor")
            .field("offset", &self.offset())
            .field("remaining", &self.remaining())
            .finish()
    }
}
