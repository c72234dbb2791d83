//! Tokens cut from lexer input.

use crate::Span;

/// One lexical unit: a caller-defined kind plus the input text it covers.
///
/// `text` borrows from the input (`input[span.to_range()]`); no copy is made.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token<'src, K> {
    pub kind: K,
    pub text: &'src str,
    pub span: Span,
}

impl<'src, K> Token<'src, K> {
    #[inline]
    pub fn new(kind: K, text: &'src str, span: Span) -> Self {
        debug_assert_eq!(text.len(), span.len());
        Token { kind, text, span }
    }
}
