//! Per-run lexing state handed to grammar states.
//!
//! A [`Session`] bundles the [`Cursor`] over one input with the queue of
//! items emitted but not yet pulled by the consumer. States read and
//! consume input through it, cut tokens with [`Session::emit`], and report
//! grammar errors with [`Session::error`].
//!
//! The queue is a plain FIFO. It only absorbs steps that emit more than one
//! token before returning; nothing here is shared across threads.

use std::collections::VecDeque;
use std::fmt;

use easylex_core::{Cursor, Matcher, Span, Token};
use tracing::{debug, trace};

use crate::{LexError, Transition};

/// Cursor plus pending token queue for one lexing run.
pub struct Session<'src, K> {
    cursor: Cursor<'src>,
    queue: VecDeque<Result<Token<'src, K>, LexError>>,
    /// Total items pushed, used by the driver's progress guard.
    emitted: usize,
    /// Set once an error has been queued; later emissions are dropped.
    failed: bool,
}

impl<'src, K: fmt::Debug> Session<'src, K> {
    pub(crate) fn new(input: &'src str, queue_capacity: usize) -> Self {
        Session {
            cursor: Cursor::new(input),
            queue: VecDeque::with_capacity(queue_capacity),
            emitted: 0,
            failed: false,
        }
    }

    // --- Cursor primitives ---

    /// Consume the next code point. See [`Cursor::next`].
    #[inline]
    #[allow(
        clippy::should_implement_trait,
        reason = "mirrors Cursor::next, a single-step primitive"
    )]
    pub fn next(&mut self) -> Option<char> {
        self.cursor.next()
    }

    /// Undo the last [`next()`](Self::next). See [`Cursor::backup`].
    #[inline]
    pub fn backup(&mut self) {
        self.cursor.backup();
    }

    /// Look at the next code point without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.cursor.peek()
    }

    /// Drop the pending token text without emitting it.
    #[inline]
    pub fn ignore(&mut self) {
        self.cursor.ignore();
    }

    /// Text consumed since the last emission or `ignore()`.
    #[inline]
    pub fn pending(&self) -> &'src str {
        self.cursor.pending()
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.cursor.pos()
    }

    /// Returns `true` once all input has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.cursor.is_eof()
    }

    pub fn cursor(&self) -> &Cursor<'src> {
        &self.cursor
    }

    pub fn cursor_mut(&mut self) -> &mut Cursor<'src> {
        &mut self.cursor
    }

    // --- Matching ---

    /// Match `matcher` once. See [`Matcher::match_one`].
    #[inline]
    pub fn accept(&mut self, matcher: &Matcher) -> bool {
        matcher.match_one(&mut self.cursor)
    }

    /// Match `matcher` as many times as possible. See [`Matcher::match_run`].
    #[inline]
    pub fn accept_run(&mut self, matcher: &Matcher) -> bool {
        matcher.match_run(&mut self.cursor)
    }

    /// Consume `literal` if the input continues with it.
    #[inline]
    pub fn accept_str(&mut self, literal: &str) -> bool {
        self.cursor.eat_str(literal)
    }

    // --- Emission ---

    /// Emit the pending text as a token of `kind`.
    ///
    /// After a failure the token is dropped: nothing follows an error.
    pub fn emit(&mut self, kind: K) {
        let (text, span) = self.cursor.take_pending();
        if self.failed {
            trace!(?kind, ?span, "dropping emission after error");
            return;
        }
        trace!(?kind, text, ?span, "emit");
        self.queue.push_back(Ok(Token::new(kind, text, span)));
        self.emitted += 1;
    }

    /// Report a grammar error and end the session.
    ///
    /// Queues exactly one error item carrying `message` and the pending
    /// span, then returns [`Transition::Done`]. Tokens queued earlier are
    /// still delivered first.
    pub fn error<S>(&mut self, message: impl fmt::Display) -> Transition<S> {
        let err = LexError::grammar(message.to_string(), self.cursor.pending_span());
        self.fail(err);
        Transition::Done
    }

    /// Returns `true` once an error has been queued.
    #[inline]
    pub fn has_failed(&self) -> bool {
        self.failed
    }

    // --- Driver interface ---

    pub(crate) fn fail(&mut self, err: LexError) {
        if self.failed {
            trace!(%err, "dropping second error");
            return;
        }
        debug!(%err, "lexing failed");
        self.queue.push_back(Err(err));
        self.emitted += 1;
        self.failed = true;
    }

    #[inline]
    pub(crate) fn pop(&mut self) -> Option<Result<Token<'src, K>, LexError>> {
        self.queue.pop_front()
    }

    #[inline]
    pub(crate) fn emitted(&self) -> usize {
        self.emitted
    }

    #[inline]
    pub(crate) fn pending_span(&self) -> Span {
        self.cursor.pending_span()
    }

    #[inline]
    pub(crate) fn queued(&self) -> usize {
        self.queue.len()
    }
}

impl<K> fmt::Debug for Session<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("start", &self.cursor.start())
            .field("pos", &self.cursor.pos())
            .field("queued", &self.queue.len())
            .field("failed", &self.failed)
            .finish_non_exhaustive()
    }
}
