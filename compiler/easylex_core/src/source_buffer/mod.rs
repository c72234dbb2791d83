//! Owned lexer input with encoding diagnostics.
//!
//! A [`SourceBuffer`] is built either from text that is already valid UTF-8
//! or from raw bytes. Raw bytes are decoded with a replacement policy: every
//! maximal invalid UTF-8 sequence becomes a single U+FFFD, so decoding always
//! consumes at least one byte per step and never stalls.
//!
//! # Encoding Detection
//!
//! During construction, the buffer scans for encoding issues:
//! - UTF-8 BOM
//! - UTF-16 BOMs (wrong encoding)
//! - Interior null bytes
//! - Invalid UTF-8 sequences (raw-byte construction only)
//!
//! Issues are recorded as [`EncodingIssue`] values and never stop lexing.
//! A grammar that treats any of them as fatal inspects
//! [`SourceBuffer::encoding_issues`] and reports through its own error path.

use crate::Cursor;

/// Owned, decoded lexer input.
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Decoded text. Identical to the input for `&str` construction.
    text: String,
    /// Encoding issues detected during construction.
    encoding_issues: Vec<EncodingIssue>,
}

/// Encoding issue detected during source buffer construction.
///
/// `pos` and `len` are byte offsets into the ORIGINAL input. For lossy
/// construction they can differ from offsets into [`SourceBuffer::as_str`],
/// since each invalid sequence is replaced by a 3-byte U+FFFD.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodingIssue {
    /// What kind of encoding issue was detected.
    pub kind: EncodingIssueKind,
    /// Byte position in the original input.
    pub pos: usize,
    /// Byte length of the problematic sequence.
    pub len: usize,
}

/// Kind of encoding issue detected in source buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodingIssueKind {
    /// UTF-8 BOM (`0xEF 0xBB 0xBF`) at start.
    Utf8Bom,
    /// UTF-16 Little-Endian BOM (`0xFF 0xFE`) at start. Wrong encoding.
    Utf16LeBom,
    /// UTF-16 Big-Endian BOM (`0xFE 0xFF`) at start. Wrong encoding.
    Utf16BeBom,
    /// Null byte (U+0000) in the input.
    InteriorNull,
    /// Byte sequence that is not valid UTF-8; replaced by U+FFFD.
    InvalidUtf8,
}

impl SourceBuffer {
    /// Create a buffer from text that is already valid UTF-8.
    pub fn new(source: &str) -> Self {
        let mut encoding_issues = Vec::new();
        detect_bom(source.as_bytes(), &mut encoding_issues);
        detect_interior_nulls(source.as_bytes(), &mut encoding_issues);
        Self {
            text: source.to_owned(),
            encoding_issues,
        }
    }

    /// Create a buffer from raw bytes, replacing invalid UTF-8.
    ///
    /// Each maximal invalid sequence (as reported by [`std::str::Utf8Error`])
    /// is replaced by one U+FFFD and recorded as
    /// [`EncodingIssueKind::InvalidUtf8`].
    pub fn from_utf8_lossy(bytes: &[u8]) -> Self {
        let mut encoding_issues = Vec::new();
        detect_bom(bytes, &mut encoding_issues);
        detect_interior_nulls(bytes, &mut encoding_issues);

        let mut text = String::with_capacity(bytes.len());
        let mut offset = 0;
        while offset < bytes.len() {
            match std::str::from_utf8(&bytes[offset..]) {
                Ok(valid) => {
                    text.push_str(valid);
                    break;
                }
                Err(err) => {
                    let valid_len = err.valid_up_to();
                    if let Ok(valid) = std::str::from_utf8(&bytes[offset..offset + valid_len]) {
                        text.push_str(valid);
                    }
                    // `None` means the input ends mid-sequence: the rest is one bad run.
                    let bad_len = err
                        .error_len()
                        .unwrap_or(bytes.len() - offset - valid_len);
                    encoding_issues.push(EncodingIssue {
                        kind: EncodingIssueKind::InvalidUtf8,
                        pos: offset + valid_len,
                        len: bad_len,
                    });
                    text.push(char::REPLACEMENT_CHARACTER);
                    offset += valid_len + bad_len;
                }
            }
        }

        encoding_issues.sort_by_key(|issue| issue.pos);
        Self {
            text,
            encoding_issues,
        }
    }

    /// Returns the decoded text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.text)
    }

    /// Length of the decoded text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the decoded text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Encoding issues detected during construction, ordered by position.
    pub fn encoding_issues(&self) -> &[EncodingIssue] {
        &self.encoding_issues
    }
}

/// Detect byte order marks at the start of the input.
fn detect_bom(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    let kind = match source {
        [0xEF, 0xBB, 0xBF, ..] => Some((EncodingIssueKind::Utf8Bom, 3)),
        [0xFF, 0xFE, ..] => Some((EncodingIssueKind::Utf16LeBom, 2)),
        [0xFE, 0xFF, ..] => Some((EncodingIssueKind::Utf16BeBom, 2)),
        _ => None,
    };
    if let Some((kind, len)) = kind {
        issues.push(EncodingIssue { kind, pos: 0, len });
    }
}

/// Detect null bytes (U+0000) within the input.
///
/// Uses `memchr` for SIMD-accelerated null byte search instead of
/// byte-at-a-time iteration.
fn detect_interior_nulls(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    issues.extend(memchr::memchr_iter(0, source).map(|pos| EncodingIssue {
        kind: EncodingIssueKind::InteriorNull,
        pos,
        len: 1,
    }));
}
