//! Standalone building blocks for hand-written lexers.
//!
//! This crate has no easylex dependencies. It provides:
//!
//! - [`SourceBuffer`]: owned input with lossy UTF-8 decoding and encoding diagnostics
//! - [`Cursor`]: code-point stepping with single-step undo over a `&str`
//! - [`Matcher`]: composable predicates over upcoming input
//! - [`Token`] and [`Span`]: borrowed, positioned lexemes
//!
//! The session driver (token queue, state machine, errors) lives in `easylex`.

mod cursor;
mod matcher;
mod source_buffer;
mod span;
mod token;

pub use cursor::{Checkpoint, Cursor};
pub use matcher::{Matcher, TextMatcher};
pub use source_buffer::{EncodingIssue, EncodingIssueKind, SourceBuffer};
pub use span::Span;
pub use token::Token;
