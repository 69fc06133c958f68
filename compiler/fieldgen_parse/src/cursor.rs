//! Byte cursor over a whitespace-free type string.
//!
//! The template grammar has exactly three structural bytes, `<`, `>` and `,`,
//! plus `*` directly after a `>`. Everything between structural bytes is name
//! text, so the cursor jumps straight to the next structural byte with
//! `memchr3` instead of stepping through identifiers.
//!
//! `current()` returns `0x00` at end of input. Structural bytes are ASCII, so
//! every position the cursor stops at is a `char` boundary and slicing is safe.

/// Cursor over a type string.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Cursor { source, pos: 0 }
    }

    /// The byte at the current position, or `0x00` at end of input.
    #[inline]
    pub(crate) fn current(&self) -> u8 {
        self.source.as_bytes().get(self.pos).copied().unwrap_or(0)
    }

    /// Advance past one byte. Only called on ASCII structural bytes.
    #[inline]
    pub(crate) fn advance(&mut self) {
        debug_assert!(self.current().is_ascii(), "advance over non-ASCII byte");
        self.pos += 1;
    }

    /// Advance past `byte` if it is the current byte.
    #[inline]
    pub(crate) fn eat(&mut self, byte: u8) -> bool {
        if !self.is_eof() && self.current() == byte {
            self.advance();
            true
        } else {
            false
        }
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    /// Source text between `start` and the current position.
    pub(crate) fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.pos]
    }

    /// Source text from the current position to the end.
    pub(crate) fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    /// Advance to the next `<`, `>` or `,` and return it, or return `0x00`
    /// with the cursor at end of input if there is none.
    pub(crate) fn skip_to_delim(&mut self) -> u8 {
        let remaining = self.rest().as_bytes();
        if let Some(offset) = memchr::memchr3(b'<', b'>', b',', remaining) {
            self.pos += offset;
            self.current()
        } else {
            self.pos = self.source.len();
            0
        }
    }
}
