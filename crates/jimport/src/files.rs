//! Target collection for the CLI.
//!
//! Positional arguments may name files or directories. Directories are
//! walked for `.java` files; explicit file arguments pass through unchanged
//! so that the per-file applicability check (and its warning) still sees
//! them. Collection is deterministic: walked results are sorted by path.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use jimport_core::apply::is_java_file;

/// Directory components that are never descended into.
const EXCLUDED_DIRS: [&str; 4] = ["target", "build", "out", "node_modules"];

/// Expand CLI path arguments into the list of target files.
///
/// - A directory argument contributes every non-hidden `.java` file below
///   it (sorted), skipping `target`, `build`, `out`, and `node_modules`
///   subtrees.
/// - Any other argument (existing file, missing path, whatever) is passed
///   through verbatim; the apply pipeline reports on it per file.
pub fn collect_targets(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut targets = Vec::new();
    for path in paths {
        if path.is_dir() {
            let mut found = walk_java_files(path);
            found.sort();
            tracing::debug!(
                dir = %path.display(),
                count = found.len(),
                "collected Java files"
            );
            targets.extend(found);
        } else {
            targets.push(path.clone());
        }
    }
    targets
}

fn walk_java_files(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| !is_excluded(entry.path(), root))
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file() && is_java_file(entry.path()))
        .map(|entry| entry.into_path())
        .collect()
}

/// Whether a walked path sits under a hidden or excluded component.
///
/// Only components below `root` count: the root itself may be `.` or live
/// inside a hidden directory the user explicitly named.
fn is_excluded(path: &Path, root: &Path) -> bool {
    let rel = match path.strip_prefix(root) {
        Ok(rel) => rel,
        Err(_) => return false,
    };
    rel.components().any(|c| {
        let name = c.as_os_str().to_string_lossy();
        name.starts_with('.') || EXCLUDED_DIRS.contains(&name.as_ref())
    })
}

// ============================================================================
// Tests
// ============================================================================
