//! Pull-based driver for grammar state machines.
//!
//! [`Lexer::next_token`] alternates between draining the session's queue
//! and stepping the current state:
//!
//! 1. If an item is queued, return the oldest one.
//! 2. If the state is [`Transition::Done`], return `None` (end of stream).
//! 3. Otherwise run the state once, store the state it returns, and repeat.
//!
//! A step that emits nothing is normal; the driver simply steps again. A
//! machine that keeps stepping without consuming input or emitting is
//! stopped by the progress guard (see [`LexerConfig::max_idle_steps`]).

use std::fmt;
use std::iter::FusedIterator;

use easylex_core::Token;
use tracing::{debug, trace};

use crate::{LexError, LexerConfig, Session, State, Transition};

/// One lexing session driven by a grammar's states.
///
/// Yields `Ok(token)` for every emitted token in emission order, at most one
/// `Err` (after which nothing else is produced), then `None` forever.
pub struct Lexer<'src, K, S> {
    session: Session<'src, K>,
    state: Transition<S>,
    config: LexerConfig,
    /// State invocations so far.
    steps: usize,
    /// Consecutive steps that neither consumed input nor emitted.
    idle_steps: usize,
}

impl<'src, K, S> Lexer<'src, K, S>
where
    K: fmt::Debug,
    S: State<K> + fmt::Debug,
{
    /// Start lexing `input` from the `initial` state with default config.
    pub fn new(input: &'src str, initial: S) -> Self {
        Self::with_config(input, initial, LexerConfig::default())
    }

    /// Start lexing `input` from the `initial` state.
    pub fn with_config(input: &'src str, initial: S, config: LexerConfig) -> Self {
        debug!(len = input.len(), ?initial, "lexing started");
        Lexer {
            session: Session::new(input, config.queue_capacity),
            state: Transition::Next(initial),
            config,
            steps: 0,
            idle_steps: 0,
        }
    }

    /// Pull the next item.
    ///
    /// Returns `None` once the machine is done and everything it emitted has
    /// been returned. Calling again after that never runs a state.
    pub fn next_token(&mut self) -> Option<Result<Token<'src, K>, LexError>> {
        loop {
            if let Some(item) = self.session.pop() {
                return Some(item);
            }
            let Transition::Next(state) = self.state else {
                return None;
            };
            self.step(state);
        }
    }

    /// Run `state` once and record where it leads.
    fn step(&mut self, state: S) {
        let pos = self.session.pos();
        let emitted = self.session.emitted();
        self.steps += 1;
        trace!(step = self.steps, ?state, pos, "step");

        let next = state.step(&mut self.session);

        if self.session.has_failed() {
            self.state = Transition::Done;
            return;
        }

        if self.session.pos() == pos && self.session.emitted() == emitted {
            self.idle_steps += 1;
            let limit = self.config.max_idle_steps;
            if limit > 0 && self.idle_steps >= limit && !next.is_done() {
                debug!(steps = self.idle_steps, pos, ?next, "state machine stalled");
                let span = self.session.pending_span();
                self.session.fail(LexError::stalled(self.idle_steps, span));
                self.state = Transition::Done;
                return;
            }
        } else {
            self.idle_steps = 0;
        }

        if next.is_done() {
            debug!(steps = self.steps, pos = self.session.pos(), "lexing finished");
        }
        self.state = next;
    }

    /// Returns `true` once the machine is done and the queue is drained.
    pub fn is_done(&self) -> bool {
        self.state.is_done() && self.session.queued() == 0
    }

    /// Number of state invocations so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn session(&self) -> &Session<'src, K> {
        &self.session
    }

    pub fn config(&self) -> &LexerConfig {
        &self.config
    }
}

impl<'src, K, S> Iterator for Lexer<'src, K, S>
where
    K: fmt::Debug,
    S: State<K> + fmt::Debug,
{
    type Item = Result<Token<'src, K>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

impl<K, S> FusedIterator for Lexer<'_, K, S>
where
    K: fmt::Debug,
    S: State<K> + fmt::Debug,
{
}

impl<K, S: fmt::Debug> fmt::Debug for Lexer<'_, K, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lexer")
            .field("state", &self.state)
            .field("session", &self.session)
            .field("steps", &self.steps)
            .finish_non_exhaustive()
    }
}

/// Lex all of `input`, stopping at the first error.
pub fn tokenize<'src, K, S>(input: &'src str, initial: S) -> Result<Vec<Token<'src, K>>, LexError>
where
    K: fmt::Debug,
    S: State<K> + fmt::Debug,
{
    Lexer::new(input, initial).collect()
}
