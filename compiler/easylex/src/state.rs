//! State machine contract for grammars.
//!
//! A grammar is a set of states. Each step inspects the [`Session`],
//! optionally emits tokens, and names the state to run next, or
//! [`Transition::Done`] to end the session. Termination is an explicit
//! variant, so the driver never has an absent state to call.
//!
//! The usual shape is an enum of state identifiers whose `step` dispatches
//! with a `match`:
//!
//! ```text
//! #[derive(Clone, Copy, Debug)]
//! enum CalcState { Start, Number }
//!
//! impl State<CalcKind> for CalcState {
//!     fn step(self, session: &mut Session<'_, CalcKind>) -> Transition<Self> {
//!         match self {
//!             CalcState::Start => start(session),
//!             CalcState::Number => number(session),
//!         }
//!     }
//! }
//! ```
//!
//! Grammars that prefer the "function returns the next function" shape wrap
//! plain functions in [`StateFn`].

use std::fmt;

use crate::Session;

/// Outcome of one state step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Transition<S> {
    /// Run `S` on the next step.
    Next(S),
    /// Lexing has ended.
    Done,
}

impl<S> Transition<S> {
    /// Returns `true` for [`Transition::Done`].
    #[inline]
    pub fn is_done(&self) -> bool {
        matches!(self, Transition::Done)
    }
}

/// One state of a grammar's state machine.
pub trait State<K>: Copy {
    /// Advance the machine by one step.
    fn step(self, session: &mut Session<'_, K>) -> Transition<Self>;
}

/// A state backed by a plain function.
pub struct StateFn<K>(pub fn(&mut Session<'_, K>) -> Transition<StateFn<K>>);

impl<K> Clone for StateFn<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for StateFn<K> {}

impl<K> fmt::Debug for StateFn<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StateFn({:p})", self.0 as *const ())
    }
}

impl<K> State<K> for StateFn<K> {
    #[inline]
    fn step(self, session: &mut Session<'_, K>) -> Transition<Self> {
        (self.0)(session)
    }
}
