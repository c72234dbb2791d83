//! Composable code-point and literal matchers.
//!
//! A [`Matcher`] is an ordered union of branches. Each branch tests the
//! upcoming input through a [`Cursor`] and consumes it on success:
//!
//! | Builder                      | Succeeds when the next input is...        |
//! |------------------------------|-------------------------------------------|
//! | `accept_runes(set)`          | one code point contained in `set`         |
//! | `reject_runes(set)`          | one code point NOT contained in `set`     |
//! | `accept_unicode_range(a, b)` | one code point in `a..=b`                 |
//! | `accept_string(lit)`         | exactly `lit` (consumed all-or-nothing)   |
//! | `union(&other)`              | anything `other` matches                  |
//! | `accept_custom(m)`           | anything the [`TextMatcher`] `m` accepts  |
//!
//! Branches are tried in the order they were added and the first success
//! wins. A failed match never moves the cursor.
//!
//! # End of Input
//!
//! End of input never matches a single-code-point branch, including
//! `reject_runes`: the complement is taken over code points only. An empty
//! literal succeeds anywhere without consuming anything.
//!
//! # Sharing
//!
//! `union` captures a snapshot of the other matcher's branches in an
//! immutable, reference-counted node. Changing (rebuilding) the other value
//! afterwards does not affect matchers that already captured it, and
//! cloning a `Matcher` never deep-copies leaf text.

use std::fmt;
use std::sync::Arc;

use crate::Cursor;

/// A custom matcher leaf.
///
/// Implementations consume input through the cursor and report success.
/// They do not need to restore the cursor on failure; [`Matcher`] restores
/// it after any failing custom branch.
pub trait TextMatcher: Send + Sync {
    fn matches(&self, cursor: &mut Cursor<'_>) -> bool;
}

impl<F> TextMatcher for F
where
    F: Fn(&mut Cursor<'_>) -> bool + Send + Sync,
{
    fn matches(&self, cursor: &mut Cursor<'_>) -> bool {
        self(cursor)
    }
}

/// Ordered union of matcher branches.
///
/// The default matcher has no branches and never matches.
#[derive(Clone, Default)]
pub struct Matcher {
    branches: Vec<Branch>,
}

#[derive(Clone)]
enum Branch {
    Runes(Arc<str>),
    Reject(Arc<str>),
    Range { first: char, last: char },
    Literal(Arc<str>),
    Union(Arc<[Branch]>),
    Custom(Arc<dyn TextMatcher>),
}

impl Matcher {
    /// Create a matcher that matches nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept any single code point contained in `valid`.
    #[must_use]
    pub fn accept_runes(mut self, valid: &str) -> Self {
        self.branches.push(Branch::Runes(Arc::from(valid)));
        self
    }

    /// Accept any single code point NOT contained in `invalid`.
    ///
    /// Still consumes exactly one code point on success, and never matches
    /// end of input.
    #[must_use]
    pub fn reject_runes(mut self, invalid: &str) -> Self {
        self.branches.push(Branch::Reject(Arc::from(invalid)));
        self
    }

    /// Accept any single code point in `first..=last`.
    ///
    /// A range with `first > last` matches nothing.
    #[must_use]
    pub fn accept_unicode_range(mut self, first: char, last: char) -> Self {
        self.branches.push(Branch::Range { first, last });
        self
    }

    /// Accept the exact literal `s`, consumed atomically.
    #[must_use]
    pub fn accept_string(mut self, s: &str) -> Self {
        self.branches.push(Branch::Literal(Arc::from(s)));
        self
    }

    /// Accept whatever `other` accepts, as a single branch.
    ///
    /// Captures `other`'s branches as they are now.
    #[must_use]
    pub fn union(mut self, other: &Matcher) -> Self {
        if !other.branches.is_empty() {
            self.branches
                .push(Branch::Union(Arc::from(other.branches.as_slice())));
        }
        self
    }

    /// Accept whatever a custom [`TextMatcher`] accepts.
    #[must_use]
    pub fn accept_custom(mut self, matcher: impl TextMatcher + 'static) -> Self {
        self.branches.push(Branch::Custom(Arc::new(matcher)));
        self
    }

    /// Returns `true` if this matcher has no branches (never matches).
    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }

    /// Try to match once.
    ///
    /// On success the matched input is consumed. On failure the cursor is
    /// left exactly as it was, `last_width` included.
    pub fn match_one(&self, cursor: &mut Cursor<'_>) -> bool {
        let saved = cursor.checkpoint();
        if match_any(&self.branches, cursor) {
            return true;
        }
        cursor.restore(saved);
        false
    }

    /// Match as many times in a row as possible.
    ///
    /// Returns `true` if at least one match succeeded. Stops after a match
    /// that consumed nothing (an empty literal), so a run always terminates.
    pub fn match_run(&self, cursor: &mut Cursor<'_>) -> bool {
        let mut matched = false;
        loop {
            let before = cursor.pos();
            if !self.match_one(cursor) {
                break;
            }
            matched = true;
            if cursor.pos() == before {
                break;
            }
        }
        matched
    }
}

impl TextMatcher for Matcher {
    fn matches(&self, cursor: &mut Cursor<'_>) -> bool {
        self.match_one(cursor)
    }
}

/// Short-circuit OR over `branches`, in insertion order.
fn match_any(branches: &[Branch], cursor: &mut Cursor<'_>) -> bool {
    branches.iter().any(|branch| branch.matches(cursor))
}

impl Branch {
    fn matches(&self, cursor: &mut Cursor<'_>) -> bool {
        match self {
            Branch::Runes(valid) => next_if(cursor, |c| valid.contains(c)),
            Branch::Reject(invalid) => next_if(cursor, |c| !invalid.contains(c)),
            Branch::Range { first, last } => next_if(cursor, |c| (*first..=*last).contains(&c)),
            Branch::Literal(literal) => cursor.eat_str(literal),
            Branch::Union(branches) => match_any(branches, cursor),
            Branch::Custom(matcher) => {
                let saved = cursor.checkpoint();
                if matcher.matches(cursor) {
                    return true;
                }
                cursor.restore(saved);
                false
            }
        }
    }
}

/// Consume one code point if it satisfies `pred`, otherwise step back.
#[inline]
fn next_if(cursor: &mut Cursor<'_>, pred: impl Fn(char) -> bool) -> bool {
    if cursor.next().is_some_and(pred) {
        return true;
    }
    cursor.backup();
    false
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.branches).finish()
    }
}

impl fmt::Debug for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Branch::Runes(valid) => f.debug_tuple("Runes").field(valid).finish(),
            Branch::Reject(invalid) => f.debug_tuple("Reject").field(invalid).finish(),
            Branch::Range { first, last } => write!(f, "Range({first:?}..={last:?})"),
            Branch::Literal(literal) => f.debug_tuple("Literal").field(literal).finish(),
            Branch::Union(branches) => f.debug_tuple("Union").field(branches).finish(),
            Branch::Custom(_) => f.write_str("Custom"),
        }
    }
}

#[cfg(test)]
mod tests;
