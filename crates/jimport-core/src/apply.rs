//! Per-file apply pipeline: read, insert, atomic write-back.
//!
//! Wraps the pure insertion core with the I/O boundary. Each file is a
//! self-contained read-modify-write cycle; a failure on one file is captured
//! in its [`FileOutcome`] and never aborts the rest of the batch.
//!
//! Write-back is atomic: content goes to a uniquely named temp file in the
//! same directory, which is then renamed over the original. A crash or
//! interruption mid-write leaves the original either fully old or fully new,
//! never partially overwritten.

use std::fs;
use std::io;
use std::path::Path;

use crate::diff::insertion_diff;
use crate::error::JimportError;
use crate::insert::{insert, Placement};
use crate::statement::ImportStatement;

// ============================================================================
// Per-File Outcome
// ============================================================================

/// What happened to one target file.
#[derive(Debug)]
pub enum FileOutcome {
    /// The import was inserted and the file rewritten.
    Added { placement: Placement },
    /// Dry run: the import would be inserted; `diff` previews the change.
    WouldAdd { placement: Placement, diff: String },
    /// The import line was already present (whitespace-tolerant match).
    SkippedDuplicate { line: u32 },
    /// Not a `.java` file; left untouched.
    SkippedNotJava,
    /// Reading or writing this file failed; the batch continues.
    Failed { error: JimportError },
}

// ============================================================================
// Applicability
// ============================================================================

/// Whether the path names a Java source file (case-insensitive extension).
pub fn is_java_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case("java"))
        .unwrap_or(false)
}

// ============================================================================
// Apply
// ============================================================================

/// Run the full read-modify-write cycle for one file.
///
/// With `dry_run` set, no file is written; the outcome carries a unified
/// diff preview instead.
pub fn apply_to_file(statement: &ImportStatement, path: &Path, dry_run: bool) -> FileOutcome {
    if !is_java_file(path) {
        tracing::warn!(path = %path.display(), "skipping non-Java file");
        return FileOutcome::SkippedNotJava;
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "failed to read");
            return FileOutcome::Failed {
                error: read_error(path, err),
            };
        }
    };

    let outcome = insert(statement, &content);
    if !outcome.changed {
        let line = match outcome.placement {
            Placement::AlreadyPresent { line } => line,
            _ => 0,
        };
        tracing::info!(path = %path.display(), line, "import already present");
        return FileOutcome::SkippedDuplicate { line };
    }

    if dry_run {
        let diff = insertion_diff(&path.display().to_string(), &content, &outcome.content);
        return FileOutcome::WouldAdd {
            placement: outcome.placement,
            diff,
        };
    }

    match atomic_write(path, outcome.content.as_bytes()) {
        Ok(()) => {
            tracing::info!(
                path = %path.display(),
                placement = outcome.placement.as_str(),
                "import added"
            );
            FileOutcome::Added {
                placement: outcome.placement,
            }
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "failed to write");
            FileOutcome::Failed {
                error: JimportError::apply(
                    format!("failed to write changes: {}", err),
                    path.display().to_string(),
                ),
            }
        }
    }
}

fn read_error(path: &Path, err: io::Error) -> JimportError {
    if err.kind() == io::ErrorKind::NotFound {
        JimportError::path_not_found(path.display().to_string())
    } else {
        JimportError::apply(
            format!("failed to read: {}", err),
            path.display().to_string(),
        )
    }
}

// ============================================================================
// Atomic File Operations
// ============================================================================

/// Write content to a file atomically using temp + rename.
///
/// This ensures readers see either old or new content, never partial writes.
/// If the process crashes:
/// - Before rename: temp file is orphaned (harmless)
/// - After rename: write completed successfully
///
/// The temp file name includes PID and timestamp to prevent collisions when
/// multiple processes write to the same file concurrently.
fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    use std::time::{SystemTime, UNIX_EPOCH};

    let pid = std::process::id();
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);

    let temp_path = path.with_file_name(format!(
        ".{}.{}.{}.tmp",
        path.file_name().unwrap_or_default().to_string_lossy(),
        pid,
        timestamp
    ));
    fs::write(&temp_path, content)?;
    fs::rename(&temp_path, path)?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
