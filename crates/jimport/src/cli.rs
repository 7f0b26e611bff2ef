//! CLI front door: command orchestration and output rendering.
//!
//! `run_add` is the whole pipeline behind `jimport add`: validate the FQN,
//! expand targets, run the per-file apply loop, and assemble the response.
//! Rendering (text vs JSON) and process exit codes stay in `main.rs`; the
//! functions here are plain data-in/data-out so they can be driven directly
//! from tests.
//!
//! ## Error Handling
//!
//! `run_add` returns `Err` only for whole-invocation failures (malformed
//! FQN, nothing to do). Per-file failures are embedded in the response and
//! reflected in its exit code after every file has been attempted.

use std::fmt::Write as _;
use std::path::PathBuf;

use jimport_core::apply::apply_to_file;
use jimport_core::error::JimportError;
use jimport_core::output::{AddResponse, FileReport, OutcomeKind};
use jimport_core::statement::{ImportKind, ImportStatement};

use crate::files::collect_targets;

// ============================================================================
// Options
// ============================================================================

/// Parsed options for the `add` command.
#[derive(Debug, Clone)]
pub struct AddOptions {
    /// Fully-qualified name to import.
    pub fqn: String,
    /// Class or static import.
    pub kind: ImportKind,
    /// Files or directories to process.
    pub paths: Vec<PathBuf>,
    /// Preview without writing.
    pub dry_run: bool,
}

// ============================================================================
// Command
// ============================================================================

/// Execute the `add` command.
pub fn run_add(opts: &AddOptions) -> Result<AddResponse, JimportError> {
    let statement = ImportStatement::new(opts.kind, opts.fqn.as_str())?;

    if opts.paths.is_empty() {
        return Err(JimportError::invalid_args(
            "provide at least one target file or directory",
        ));
    }
    let targets = collect_targets(&opts.paths);
    if targets.is_empty() {
        return Err(JimportError::invalid_args(
            "no Java files found under the given paths",
        ));
    }

    tracing::info!(
        import = statement.render(),
        targets = targets.len(),
        dry_run = opts.dry_run,
        "processing"
    );

    let files: Vec<FileReport> = targets
        .iter()
        .map(|path| {
            let outcome = apply_to_file(&statement, path, opts.dry_run);
            FileReport::from_outcome(path.display().to_string(), &outcome)
        })
        .collect();

    Ok(AddResponse::new(&statement, opts.dry_run, files))
}

// ============================================================================
// Text Rendering
// ============================================================================

/// Render the response as the human-readable report.
pub fn render_text(response: &AddResponse) -> String {
    let mut out = String::new();
    for file in &response.files {
        let line = match file.outcome {
            OutcomeKind::Added => format!("added: {}", file.path),
            OutcomeKind::WouldAdd => format!("would add: {}", file.path),
            OutcomeKind::SkippedDuplicate => format!("skipped (duplicate): {}", file.path),
            OutcomeKind::SkippedNotJava => format!("skipped (not a Java file): {}", file.path),
            OutcomeKind::Failed => format!(
                "failed: {} ({})",
                file.path,
                file.error.as_deref().unwrap_or("unknown error")
            ),
        };
        out.push_str(&line);
        out.push('\n');
        if let Some(diff) = &file.diff {
            out.push_str(diff);
        }
    }
    let _ = write!(
        out,
        "{}: {} added, {} skipped, {} failed",
        response.import,
        response.summary.added,
        response.summary.skipped_duplicate + response.summary.skipped_not_java,
        response.summary.failed
    );
    out.push('\n');
    out
}

// ============================================================================
// Tests
// ============================================================================
