//! Code-point cursor over lexer input.
//!
//! The cursor tracks three offsets into a `&str`:
//!
//! - `start`: first byte of the token being built
//! - `pos`: next byte to decode
//! - `last_width`: byte width of the most recently decoded code point
//!
//! State functions and matchers move `pos` forward with [`Cursor::next`],
//! undo exactly one step with [`Cursor::backup`], and cut tokens with
//! [`Cursor::take_pending`] or drop them with [`Cursor::ignore`].
//!
//! # End of Input
//!
//! End of input is the absence of a code point: [`Cursor::next`] returns
//! `None` and does not move. An interior U+0000 is an ordinary code point.
//!
//! # Invariant
//!
//! `0 <= start <= pos <= input.len()`, and both `start` and `pos` lie on
//! `char` boundaries.

use crate::Span;

/// Cursor over a borrowed input string.
///
/// The cursor is [`Copy`]; [`Checkpoint`] captures just the offsets when the
/// input reference is not needed.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    input: &'a str,
    /// Start of the pending token.
    start: usize,
    /// Current read position.
    pos: usize,
    /// Width of the last decoded code point. Zero after `backup()`, at EOF,
    /// and after anything that moves `start`.
    last_width: usize,
}

/// Saved cursor offsets for multi-step backtracking.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Checkpoint {
    start: usize,
    pos: usize,
    last_width: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            start: 0,
            pos: 0,
            last_width: 0,
        }
    }

    /// Decode and consume the code point at `pos`.
    ///
    /// Returns `None` at end of input without moving. Repeated calls at end
    /// of input keep returning `None`.
    #[inline]
    #[allow(
        clippy::should_implement_trait,
        reason = "single-step primitive paired with backup(), not an iterator"
    )]
    pub fn next(&mut self) -> Option<char> {
        let Some(c) = self.input[self.pos..].chars().next() else {
            self.last_width = 0;
            return None;
        };
        self.last_width = c.len_utf8();
        self.pos += self.last_width;
        Some(c)
    }

    /// Undo the most recent [`next()`](Self::next).
    ///
    /// Single-step undo, not a general rewind: only the last decoded code
    /// point can be stepped back over. The width is cleared afterwards, so a
    /// second `backup()` without an intervening `next()` does nothing.
    #[inline]
    pub fn backup(&mut self) {
        debug_assert!(self.pos - self.last_width >= self.start);
        self.pos -= self.last_width;
        self.last_width = 0;
    }

    /// Returns the next code point without consuming it.
    ///
    /// Leaves `start`, `pos` and `last_width` untouched, so a `backup()`
    /// after `peek()` still undoes the last `next()`.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Drop the pending token text: `start = pos`.
    ///
    /// The undo width is cleared too; `start` never moves backwards.
    #[inline]
    pub fn ignore(&mut self) {
        self.start = self.pos;
        self.last_width = 0;
    }

    /// Cut the pending text `input[start..pos)` and its span, then set
    /// `start = pos`.
    pub fn take_pending(&mut self) -> (&'a str, Span) {
        let span = self.pending_span();
        self.start = self.pos;
        self.last_width = 0;
        (&self.input[span.to_range()], span)
    }

    /// Text consumed since the last `ignore()` or `take_pending()`.
    #[inline]
    pub fn pending(&self) -> &'a str {
        &self.input[self.start..self.pos]
    }

    /// Span of [`pending()`](Self::pending).
    #[inline]
    pub fn pending_span(&self) -> Span {
        Span::new(self.start, self.pos)
    }

    /// Unconsumed input from `pos` to the end.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// The whole input.
    #[inline]
    pub fn input(&self) -> &'a str {
        self.input
    }

    /// Start offset of the pending token.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Byte width of the last decoded code point (0 if none is undoable).
    #[inline]
    pub fn last_width(&self) -> usize {
        self.last_width
    }

    /// Returns `true` once every byte has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Snapshot the offsets.
    #[inline]
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            start: self.start,
            pos: self.pos,
            last_width: self.last_width,
        }
    }

    /// Return to a snapshot taken from this cursor.
    ///
    /// A checkpoint from another input is clamped into this one: both
    /// offsets are pulled back to the end of input and to a char boundary,
    /// and the undo width is dropped if anything moved.
    pub fn restore(&mut self, checkpoint: Checkpoint) {
        let pos = self.floor_boundary(checkpoint.pos);
        let start = self.floor_boundary(checkpoint.start.min(pos));
        let last_width = if pos == checkpoint.pos
            && start == checkpoint.start
            && pos - start >= checkpoint.last_width
        {
            checkpoint.last_width
        } else {
            0
        };
        self.start = start;
        self.pos = pos;
        self.last_width = last_width;
    }

    /// Largest char boundary of the input at or below `offset`.
    fn floor_boundary(&self, offset: usize) -> usize {
        let mut offset = offset.min(self.input.len());
        while !self.input.is_char_boundary(offset) {
            offset -= 1;
        }
        offset
    }

    /// Consume `literal` if the remaining input starts with it.
    ///
    /// All-or-nothing: on a mismatch nothing moves. Multi-step helpers clear
    /// the single-step undo width.
    pub fn eat_str(&mut self, literal: &str) -> bool {
        if !self.rest().starts_with(literal) {
            return false;
        }
        self.pos += literal.len();
        self.last_width = 0;
        true
    }

    /// Advance while `pred` returns `true` for the next code point.
    ///
    /// Returns the number of code points consumed.
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> usize {
        let mut count = 0;
        for c in self.input[self.pos..].chars() {
            if !pred(c) {
                break;
            }
            self.pos += c.len_utf8();
            count += 1;
        }
        self.last_width = 0;
        count
    }

    /// Advance until `needle` is the next code point, or to end of input.
    ///
    /// Returns the number of bytes consumed. The needle itself is not
    /// consumed. ASCII needles use a `memchr` search.
    pub fn eat_until(&mut self, needle: char) -> usize {
        let rest = self.rest();
        let offset = match u8::try_from(needle) {
            Ok(byte) if byte.is_ascii() => memchr::memchr(byte, rest.as_bytes()),
            _ => rest.find(needle),
        };
        let consumed = offset.unwrap_or(rest.len());
        self.pos += consumed;
        self.last_width = 0;
        consumed
    }
}
