//! Pull-based state machine driver for hand-written lexers.
//!
//! A grammar supplies its token kinds and its states; easylex supplies the
//! rest:
//!
//! - [`Session`]: cursor primitives, matchers, token emission, error reporting
//! - [`State`] / [`Transition`]: the step contract, with an explicit `Done`
//! - [`Lexer`]: the driver, pulled one token at a time (also an `Iterator`)
//! - [`LexError`]: grammar errors and stall detection as stream values
//!
//! The cursor, matcher and token types come from `easylex_core` and are
//! re-exported here.
//!
//! # Example
//!
//! ```text
//! fn start(s: &mut Session<'_, Kind>) -> Transition<StateFn<Kind>> {
//!     let digits = Matcher::new().accept_unicode_range('0', '9');
//!     if s.is_eof() {
//!         return Transition::Done;
//!     }
//!     if s.accept_run(&digits) {
//!         s.emit(Kind::Number);
//!         return Transition::Next(StateFn(start));
//!     }
//!     let found = s.peek();
//!     s.error(format_args!("unexpected {found:?}"))
//! }
//!
//! let tokens = tokenize("12", StateFn(start))?;
//! ```

mod config;
mod error;
mod lexer;
mod session;
mod state;

pub use config::LexerConfig;
pub use easylex_core::{
    Checkpoint, Cursor, EncodingIssue, EncodingIssueKind, Matcher, SourceBuffer, Span,
    TextMatcher, Token,
};
pub use error::{LexError, LexErrorKind};
pub use lexer::{tokenize, Lexer};
pub use session::Session;
pub use state::{State, StateFn, Transition};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=easylex=debug` or `RUST_LOG=easylex=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // A host application may already own the global subscriber.
            if let Err(err) = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init()
            {
                tracing::debug!(%err, "tracing subscriber already installed");
            }
        }
    });
}
