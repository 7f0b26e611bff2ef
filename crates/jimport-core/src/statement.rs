//! Import statement model and FQN validation.
//!
//! An [`ImportStatement`] is the single semantic value the inserter works
//! with: the fully rendered line to insert. It is immutable once constructed
//! from a fully-qualified name and a kind flag, and construction is the only
//! place malformed input is rejected — the insertion algorithm itself is
//! total and never validates.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Import Kind
// ============================================================================

/// Whether the statement imports a type or a static member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportKind {
    /// `import {fqn};`
    Class,
    /// `import static {fqn};`
    Static,
}

impl fmt::Display for ImportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportKind::Class => write!(f, "class"),
            ImportKind::Static => write!(f, "static"),
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

/// Rejection reasons for a fully-qualified name.
#[derive(Debug, Error)]
pub enum StatementError {
    /// The FQN was empty.
    #[error("fully-qualified name is empty")]
    EmptyFqn,

    /// The FQN contained whitespace.
    #[error("fully-qualified name '{fqn}' contains whitespace")]
    ContainsWhitespace { fqn: String },

    /// A dot-separated segment was empty (leading/trailing/double dot).
    #[error("fully-qualified name '{fqn}' has an empty segment")]
    EmptySegment { fqn: String },

    /// A segment was not a valid Java identifier.
    #[error("fully-qualified name '{fqn}' has invalid segment '{segment}'")]
    InvalidSegment { fqn: String, segment: String },

    /// A `*` wildcard appeared somewhere other than the final segment.
    #[error("fully-qualified name '{fqn}' has a wildcard before the final segment")]
    WildcardNotLast { fqn: String },

    /// A static import needs an enclosing type plus a member.
    #[error("static import '{fqn}' needs at least an enclosing type and a member")]
    StaticWithoutMember { fqn: String },
}

impl StatementError {
    /// The FQN that was rejected (empty string for [`StatementError::EmptyFqn`]).
    pub fn fqn(&self) -> &str {
        match self {
            StatementError::EmptyFqn => "",
            StatementError::ContainsWhitespace { fqn }
            | StatementError::EmptySegment { fqn }
            | StatementError::InvalidSegment { fqn, .. }
            | StatementError::WildcardNotLast { fqn }
            | StatementError::StaticWithoutMember { fqn } => fqn,
        }
    }
}

// ============================================================================
// Import Statement
// ============================================================================

/// A fully rendered import line, validated at construction.
///
/// The rendered form is exactly `import {fqn};` or `import static {fqn};` —
/// a non-empty single line with no embedded line breaks, which is the
/// contract the insertion algorithm relies on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportStatement {
    kind: ImportKind,
    fqn: String,
    rendered: String,
}

impl ImportStatement {
    /// Build a statement from a kind and fully-qualified name.
    ///
    /// Validation rules:
    /// - non-empty, no whitespace anywhere;
    /// - dot-separated segments, each a Java identifier
    ///   (`[A-Za-z_$][A-Za-z0-9_$]*`);
    /// - a `*` wildcard is allowed only as the final segment;
    /// - static imports need at least two segments (type + member).
    pub fn new(kind: ImportKind, fqn: impl Into<String>) -> Result<Self, StatementError> {
        let fqn = fqn.into();
        validate_fqn(kind, &fqn)?;

        let rendered = match kind {
            ImportKind::Class => format!("import {};", fqn),
            ImportKind::Static => format!("import static {};", fqn),
        };

        Ok(ImportStatement {
            kind,
            fqn,
            rendered,
        })
    }

    /// The rendered import line (no terminator).
    pub fn render(&self) -> &str {
        &self.rendered
    }

    /// The fully-qualified name.
    pub fn fqn(&self) -> &str {
        &self.fqn
    }

    /// The import kind.
    pub fn kind(&self) -> ImportKind {
        self.kind
    }
}

impl fmt::Display for ImportStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}

// ============================================================================
// Validation
// ============================================================================

fn validate_fqn(kind: ImportKind, fqn: &str) -> Result<(), StatementError> {
    if fqn.is_empty() {
        return Err(StatementError::EmptyFqn);
    }
    if fqn.chars().any(char::is_whitespace) {
        return Err(StatementError::ContainsWhitespace {
            fqn: fqn.to_string(),
        });
    }

    let segments: Vec<&str> = fqn.split('.').collect();
    let last = segments.len() - 1;
    for (i, segment) in segments.iter().enumerate() {
        if segment.is_empty() {
            return Err(StatementError::EmptySegment {
                fqn: fqn.to_string(),
            });
        }
        if *segment == "*" {
            if i != last {
                return Err(StatementError::WildcardNotLast {
                    fqn: fqn.to_string(),
                });
            }
            continue;
        }
        if !is_java_identifier(segment) {
            return Err(StatementError::InvalidSegment {
                fqn: fqn.to_string(),
                segment: segment.to_string(),
            });
        }
    }

    if kind == ImportKind::Static && segments.len() < 2 {
        return Err(StatementError::StaticWithoutMember {
            fqn: fqn.to_string(),
        });
    }

    Ok(())
}

fn is_java_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

// ============================================================================
// Tests
// ============================================================================
