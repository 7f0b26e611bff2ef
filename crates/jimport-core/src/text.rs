//! Line-based text utilities with terminator fidelity.
//!
//! The insertion algorithm works on lines, but file content must round-trip
//! byte-for-byte wherever it is not touched. Content is therefore split into
//! [`Line`] values that keep each line's terminator alongside its content, and
//! reassembly concatenates the original slices verbatim.
//!
//! ## Conventions
//!
//! - A "line" is a maximal run of content up to and including its terminator
//!   (`\n` or `\r\n`). The final line may have no terminator.
//! - Comparison helpers strip terminators and edge whitespace; output helpers
//!   never modify original content.

use std::fmt;

/// One line of a source document: content plus its original terminator.
///
/// Both fields borrow from the document, so a `Line` is cheap and the
/// original bytes can be re-emitted exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// Line content without the terminator.
    pub content: &'a str,
    /// The terminator as it appeared: `"\n"`, `"\r\n"`, or `""` for an
    /// unterminated final line.
    pub terminator: &'a str,
}

impl<'a> Line<'a> {
    /// Content with leading and trailing whitespace stripped.
    ///
    /// This is the comparison form used for duplicate detection.
    pub fn trimmed(&self) -> &'a str {
        self.content.trim()
    }

    /// Whether the line carried a terminator in the source.
    pub fn is_terminated(&self) -> bool {
        !self.terminator.is_empty()
    }
}

/// Split content into lines, preserving each line's terminator.
///
/// Empty content yields no lines. A trailing newline does NOT produce an
/// empty final line; `"a\n"` is one line, `"a\nb"` is two.
pub fn split_lines(content: &str) -> Vec<Line<'_>> {
    content
        .split_inclusive('\n')
        .map(|raw| {
            let without_lf = raw.strip_suffix('\n');
            let body = without_lf
                .map(|s| s.strip_suffix('\r').unwrap_or(s))
                .unwrap_or(raw);
            Line {
                content: body,
                terminator: &raw[body.len()..],
            }
        })
        .collect()
}

/// Dominant line ending of a document.
///
/// Decided by the terminator of the first terminated line; documents with no
/// terminator at all default to [`LineEnding::Lf`]. Inserted lines use this
/// ending; original lines always keep their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    /// Unix `\n`.
    Lf,
    /// Windows `\r\n`.
    CrLf,
}

impl LineEnding {
    /// The terminator string for this ending.
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

impl fmt::Display for LineEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineEnding::Lf => write!(f, "lf"),
            LineEnding::CrLf => write!(f, "crlf"),
        }
    }
}

/// Detect the line ending of a document.
pub fn detect_line_ending(content: &str) -> LineEnding {
    match content.find('\n') {
        Some(pos) if pos > 0 && content.as_bytes()[pos - 1] == b'\r' => LineEnding::CrLf,
        Some(_) => LineEnding::Lf,
        None => LineEnding::Lf,
    }
}

/// Count the number of lines in the content.
///
/// A trailing newline does not start a new line: `"a\n"` has one line.
pub fn line_count(content: &str) -> u32 {
    let newlines = content.bytes().filter(|&b| b == b'\n').count() as u32;
    if content.is_empty() {
        0
    } else if content.ends_with('\n') {
        newlines
    } else {
        newlines + 1
    }
}

// ============================================================================
// Tests
// ============================================================================
