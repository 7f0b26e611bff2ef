//! JSON output types and serialization for CLI responses.
//!
//! These types form the machine contract of `jimport --format json`.
//!
//! ## Design Principles
//!
//! 1. **Structured JSON:** one response document per invocation
//! 2. **Status first:** every response has `status` as first field
//! 3. **Deterministic:** same input produces the same output (field order,
//!    per-file ordering follows the target list)
//! 4. **Versioned:** schema version in every response enables forward
//!    compatibility

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::apply::FileOutcome;
use crate::error::JimportError;
use crate::insert::Placement;
use crate::statement::ImportStatement;

/// Current schema version for all responses.
pub const SCHEMA_VERSION: &str = "1";

// ============================================================================
// Per-File Reporting
// ============================================================================

/// Stable outcome labels for one target file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    /// Import inserted, file rewritten.
    Added,
    /// Dry run: import would be inserted.
    WouldAdd,
    /// Import already present.
    SkippedDuplicate,
    /// Not a Java file.
    SkippedNotJava,
    /// Read or write failed.
    Failed,
}

/// One target file's result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    /// The path as given on the command line (or discovered by the walk).
    pub path: String,
    /// What happened.
    pub outcome: OutcomeKind,
    /// Where the import landed, for `added`/`would_add`/`skipped_duplicate`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement: Option<String>,
    /// 1-indexed anchor line in the original file, where applicable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    /// Unified diff preview (dry run only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<String>,
    /// Failure message (`failed` only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Stable error code (`failed` only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<u8>,
}

impl FileReport {
    /// Build a report from a per-file outcome.
    pub fn from_outcome(path: impl Into<String>, outcome: &FileOutcome) -> Self {
        let path = path.into();
        match outcome {
            FileOutcome::Added { placement } => FileReport {
                path,
                outcome: OutcomeKind::Added,
                placement: Some(placement.as_str().to_string()),
                line: placement_line(placement),
                diff: None,
                error: None,
                error_code: None,
            },
            FileOutcome::WouldAdd { placement, diff } => FileReport {
                path,
                outcome: OutcomeKind::WouldAdd,
                placement: Some(placement.as_str().to_string()),
                line: placement_line(placement),
                diff: Some(diff.clone()),
                error: None,
                error_code: None,
            },
            FileOutcome::SkippedDuplicate { line } => FileReport {
                path,
                outcome: OutcomeKind::SkippedDuplicate,
                placement: Some("already_present".to_string()),
                line: Some(*line),
                diff: None,
                error: None,
                error_code: None,
            },
            FileOutcome::SkippedNotJava => FileReport {
                path,
                outcome: OutcomeKind::SkippedNotJava,
                placement: None,
                line: None,
                diff: None,
                error: None,
                error_code: None,
            },
            FileOutcome::Failed { error } => FileReport {
                path,
                outcome: OutcomeKind::Failed,
                placement: None,
                line: None,
                diff: None,
                error: Some(error.to_string()),
                error_code: Some(error.error_code().code()),
            },
        }
    }
}

fn placement_line(placement: &Placement) -> Option<u32> {
    match placement {
        Placement::AlreadyPresent { line }
        | Placement::AfterLastImport { line }
        | Placement::AfterPackage { line } => Some(*line),
        Placement::TopOfFile => None,
    }
}

// ============================================================================
// Summary and Response
// ============================================================================

/// Aggregate counts across the batch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Summary {
    pub added: u32,
    pub skipped_duplicate: u32,
    pub skipped_not_java: u32,
    pub failed: u32,
}

impl Summary {
    /// Tally the reports. `would_add` counts as `added` for summary purposes.
    pub fn tally(reports: &[FileReport]) -> Self {
        let mut summary = Summary::default();
        for report in reports {
            match report.outcome {
                OutcomeKind::Added | OutcomeKind::WouldAdd => summary.added += 1,
                OutcomeKind::SkippedDuplicate => summary.skipped_duplicate += 1,
                OutcomeKind::SkippedNotJava => summary.skipped_not_java += 1,
                OutcomeKind::Failed => summary.failed += 1,
            }
        }
        summary
    }
}

/// Response for the `add` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddResponse {
    /// Status: "ok", or "partial" when some files failed.
    pub status: String,
    /// Schema version for compatibility.
    pub schema_version: String,
    /// The rendered import line.
    pub import: String,
    /// Whether this was a dry run.
    pub dry_run: bool,
    /// Per-file results, in target order.
    pub files: Vec<FileReport>,
    /// Aggregate counts.
    pub summary: Summary,
}

impl AddResponse {
    /// Assemble the response from per-file reports.
    pub fn new(statement: &ImportStatement, dry_run: bool, files: Vec<FileReport>) -> Self {
        let summary = Summary::tally(&files);
        let status = if summary.failed == 0 { "ok" } else { "partial" };
        AddResponse {
            status: status.to_string(),
            schema_version: SCHEMA_VERSION.to_string(),
            import: statement.render().to_string(),
            dry_run,
            files,
            summary,
        }
    }

    /// Exit code for the whole invocation: `0` when nothing failed,
    /// otherwise the first failed file's code.
    pub fn exit_code(&self) -> u8 {
        self.files
            .iter()
            .find_map(|report| report.error_code)
            .unwrap_or(0)
    }
}

// ============================================================================
// Error Response
// ============================================================================

/// Error information for JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Numeric error code.
    pub code: u8,
    /// Human-readable message.
    pub message: String,
}

/// Response emitted when the invocation fails before any file is processed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Status: "error".
    pub status: String,
    /// Schema version for compatibility.
    pub schema_version: String,
    /// Error information.
    pub error: ErrorInfo,
}

impl ErrorResponse {
    /// Create an error response from a JimportError.
    pub fn from_error(err: &JimportError) -> Self {
        ErrorResponse {
            status: "error".to_string(),
            schema_version: SCHEMA_VERSION.to_string(),
            error: ErrorInfo {
                code: err.error_code().code(),
                message: err.to_string(),
            },
        }
    }
}

// ============================================================================
// Emission
// ============================================================================

/// Emit a response as pretty-printed JSON to a writer.
pub fn emit_response<T: Serialize>(response: &T, writer: &mut impl Write) -> io::Result<()> {
    let json = serde_json::to_string_pretty(response)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(writer, "{}", json)
}

// ============================================================================
// Tests
// ============================================================================
