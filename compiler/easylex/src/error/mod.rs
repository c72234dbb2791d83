//! Lexer error types.
//!
//! An error is a value in the token stream, not a panic: the driver yields
//! it as the `Err` side of an item and then ends the session.

use easylex_core::Span;

/// A lexing error with the span of the input being built when it occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind} at {span}")]
pub struct LexError {
    /// WHAT went wrong.
    pub kind: LexErrorKind,
    /// WHERE: pending token text at the point of failure (may be empty).
    pub span: Span,
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// A state function found input its grammar cannot match.
    #[error("{message}")]
    Grammar { message: String },
    /// The state machine kept stepping without consuming or emitting.
    #[error("no progress after {steps} state transitions")]
    Stalled { steps: usize },
}

impl LexError {
    /// Grammar error reported by a state function.
    pub fn grammar(message: impl Into<String>, span: Span) -> Self {
        LexError {
            kind: LexErrorKind::Grammar {
                message: message.into(),
            },
            span,
        }
    }

    /// Stall detected by the driver's progress guard.
    pub fn stalled(steps: usize, span: Span) -> Self {
        LexError {
            kind: LexErrorKind::Stalled { steps },
            span,
        }
    }

    /// The error message without location.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

#[cfg(test)]
mod tests;
