//! The insertion algorithm: duplicate detection and placement precedence.
//!
//! This is the core of jimport. Given a rendered [`ImportStatement`] and a
//! file's content, it decides whether the import is already present and, if
//! not, where the new line goes:
//!
//! 1. After the LAST existing `import` line (no extra blank line).
//! 2. Else after the FIRST `package` line, followed by one blank line.
//! 3. Else at the top of the file, followed by one blank line.
//!
//! Detection is deliberately line-pattern based, not language-aware: a line
//! matching `^\s*import\s` or `^\s*package\s` counts wherever it appears,
//! even indented inside a class body. Callers depend on these line-based
//! semantics; do not replace them with a real parser.
//!
//! The function is total and pure: every (statement, content) pair maps to a
//! defined outcome, no I/O, no error path. Duplicate detection and position
//! scanning share a single pass over the lines; precedence is unaffected by
//! scan order.

use std::sync::LazyLock;

use regex::Regex;

use crate::statement::ImportStatement;
use crate::text::{detect_line_ending, split_lines, Line, LineEnding};

/// Matches plain and static import lines (`import ...` / `import static ...`).
static IMPORT_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*import\s").expect("import pattern is valid"));

/// Matches a package declaration line.
static PACKAGE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*package\s").expect("package pattern is valid"));

// ============================================================================
// Outcome Types
// ============================================================================

/// Where the import line was (or would be) placed.
///
/// `line` values are 1-indexed and refer to the matched line in the ORIGINAL
/// content: the existing duplicate, the last existing import, or the package
/// declaration the new line follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// A whitespace-tolerant duplicate already exists; nothing to do.
    AlreadyPresent { line: u32 },
    /// Inserted immediately after the last existing import line.
    AfterLastImport { line: u32 },
    /// Inserted after the package declaration, with a separating blank line.
    AfterPackage { line: u32 },
    /// No import or package line found; inserted at the very top, followed
    /// by a blank line.
    TopOfFile,
}

impl Placement {
    /// Stable snake_case name for JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Placement::AlreadyPresent { .. } => "already_present",
            Placement::AfterLastImport { .. } => "after_last_import",
            Placement::AfterPackage { .. } => "after_package",
            Placement::TopOfFile => "top_of_file",
        }
    }
}

/// Result of running the inserter over one document.
#[derive(Debug, Clone)]
pub struct InsertOutcome {
    /// The rewritten content (or the original, unchanged, for duplicates).
    pub content: String,
    /// Whether the content differs from the input.
    pub changed: bool,
    /// Where the import landed (or was found).
    pub placement: Placement,
}

// ============================================================================
// Insertion
// ============================================================================

/// Insert `statement` into `content`, idempotently.
///
/// Returns the full rewritten content with untouched lines preserved
/// byte-for-byte, including their original terminators. Inserted lines use
/// the document's detected line ending.
pub fn insert(statement: &ImportStatement, content: &str) -> InsertOutcome {
    let target = statement.render();
    let lines = split_lines(content);

    // Single pass: duplicate check and position scan together.
    let mut duplicate: Option<u32> = None;
    let mut last_import: Option<usize> = None;
    let mut package: Option<usize> = None;
    for (idx, line) in lines.iter().enumerate() {
        if duplicate.is_none() && line.trimmed() == target {
            duplicate = Some(idx as u32 + 1);
        }
        if IMPORT_LINE.is_match(line.content) {
            last_import = Some(idx);
        }
        if package.is_none() && PACKAGE_LINE.is_match(line.content) {
            package = Some(idx);
        }
    }

    if let Some(line) = duplicate {
        tracing::debug!(line, import = target, "duplicate found, skipping");
        return InsertOutcome {
            content: content.to_string(),
            changed: false,
            placement: Placement::AlreadyPresent { line },
        };
    }

    let ending = detect_line_ending(content);
    let (insert_after, blank_after, placement) = match (last_import, package) {
        (Some(idx), _) => (
            Some(idx),
            false,
            Placement::AfterLastImport {
                line: idx as u32 + 1,
            },
        ),
        (None, Some(idx)) => (
            Some(idx),
            true,
            Placement::AfterPackage {
                line: idx as u32 + 1,
            },
        ),
        (None, None) => (None, true, Placement::TopOfFile),
    };
    tracing::debug!(import = target, placement = placement.as_str(), "inserting");

    let content = match insert_after {
        Some(idx) => splice_after(&lines, idx, target, blank_after, ending),
        None => {
            // Top of file: import line, blank line, then the original content.
            let mut out =
                String::with_capacity(content.len() + target.len() + 2 * ending.as_str().len());
            out.push_str(target);
            out.push_str(ending.as_str());
            out.push_str(ending.as_str());
            out.push_str(content);
            out
        }
    };

    InsertOutcome {
        content,
        changed: true,
        placement,
    }
}

/// Rebuild the document with `target` spliced in after line `insert_after`.
///
/// Original lines pass through verbatim. If the anchor line is the final
/// line and unterminated, it is given the document's line ending first; the
/// inserted line then becomes the new unterminated final line (preserving
/// the document's missing-final-newline shape). A `blank_after` insertion on
/// an unterminated anchor terminates the import line instead, leaving the
/// blank implicit at end of file.
fn splice_after(
    lines: &[Line<'_>],
    insert_after: usize,
    target: &str,
    blank_after: bool,
    ending: LineEnding,
) -> String {
    let mut out = String::new();
    for (idx, line) in lines.iter().enumerate() {
        out.push_str(line.content);
        if idx != insert_after {
            out.push_str(line.terminator);
            continue;
        }

        if line.is_terminated() {
            out.push_str(line.terminator);
            out.push_str(target);
            out.push_str(ending.as_str());
            if blank_after {
                out.push_str(ending.as_str());
            }
        } else {
            out.push_str(ending.as_str());
            out.push_str(target);
            if blank_after {
                out.push_str(ending.as_str());
            }
        }
    }
    out
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statement::ImportKind;

    fn class_import(fqn: &str) -> ImportStatement {
        ImportStatement::new(ImportKind::Class, fqn).unwrap()
    }

    fn static_import(fqn: &str) -> ImportStatement {
        ImportStatement::new(ImportKind::Static, fqn).unwrap()
    }

    mod duplicate_detection {
        use super::*;

        #[test]
        fn exact_duplicate_is_skipped() {
            let stmt = class_import("java.util.List");
            let content = "package com.x;\n\nimport java.util.List;\n\npublic class Y {}\n";
            let outcome = insert(&stmt, content);
            assert!(!outcome.changed);
            assert_eq!(outcome.content, content);
            assert_eq!(
                outcome.placement,
                Placement::AlreadyPresent { line: 3 }
            );
        }

        #[test]
        fn duplicate_with_edge_whitespace_is_detected() {
            let stmt = class_import("java.util.List");
            let content = "package com.x;\n\n   import java.util.List;   \n";
            let outcome = insert(&stmt, content);
            assert!(!outcome.changed);
            assert_eq!(outcome.content, content);
        }

        #[test]
        fn internal_spacing_must_match_exactly() {
            let stmt = class_import("java.util.List");
            let content = "import  java.util.List;\n";
            let outcome = insert(&stmt, content);
            // Double space inside the line: not a duplicate, goes after it.
            assert!(outcome.changed);
            assert_eq!(
                outcome.content,
                "import  java.util.List;\nimport java.util.List;\n"
            );
        }

        #[test]
        fn static_and_class_forms_do_not_collide() {
            let stmt = static_import("java.util.Collections.emptyList");
            let content = "import java.util.Collections;\n";
            let outcome = insert(&stmt, content);
            assert!(outcome.changed);
        }
    }

    mod precedence {
        use super::*;

        #[test]
        fn after_last_import_wins_over_package() {
            let stmt = class_import("java.util.Map");
            let content = "package com.x;\n\nimport a.A;\nimport b.B;\n\npublic class Y {}\n";
            let outcome = insert(&stmt, content);
            assert_eq!(
                outcome.content,
                "package com.x;\n\nimport a.A;\nimport b.B;\nimport java.util.Map;\n\npublic class Y {}\n"
            );
            assert_eq!(
                outcome.placement,
                Placement::AfterLastImport { line: 4 }
            );
        }

        #[test]
        fn static_imports_count_as_imports() {
            let stmt = class_import("java.util.Map");
            let content = "package com.x;\nimport static a.B.c;\nclass Y {}\n";
            let outcome = insert(&stmt, content);
            assert_eq!(
                outcome.content,
                "package com.x;\nimport static a.B.c;\nimport java.util.Map;\nclass Y {}\n"
            );
        }

        #[test]
        fn after_package_adds_blank_line() {
            let stmt = class_import("java.util.List");
            let content = "package com.x;\n\npublic class Y {}\n";
            let outcome = insert(&stmt, content);
            // Immediately after the package line, then one separating blank;
            // the file's own blank line follows untouched.
            assert_eq!(
                outcome.content,
                "package com.x;\nimport java.util.List;\n\n\npublic class Y {}\n"
            );
            assert_eq!(outcome.placement, Placement::AfterPackage { line: 1 });
        }

        #[test]
        fn package_directly_followed_by_code() {
            let stmt = class_import("java.util.List");
            let content = "package com.x;\npublic class Y {}\n";
            let outcome = insert(&stmt, content);
            assert_eq!(
                outcome.content,
                "package com.x;\nimport java.util.List;\n\npublic class Y {}\n"
            );
        }

        #[test]
        fn first_package_line_is_the_anchor() {
            // A second "package" line (nonsensical Java, but pattern-visible)
            // must not attract the insertion.
            let stmt = class_import("a.B");
            let content = "package com.x;\npackage com.y;\nclass Y {}\n";
            let outcome = insert(&stmt, content);
            assert!(outcome.content.starts_with("package com.x;\nimport a.B;\n"));
        }

        #[test]
        fn top_of_file_fallback() {
            let stmt = class_import("java.util.List");
            let content = "public class Y {}\n";
            let outcome = insert(&stmt, content);
            assert_eq!(
                outcome.content,
                "import java.util.List;\n\npublic class Y {}\n"
            );
            assert_eq!(outcome.placement, Placement::TopOfFile);
        }

        #[test]
        fn indented_import_still_matches() {
            // Pattern-based, not scope-aware: an indented import is an anchor.
            let stmt = class_import("a.B");
            let content = "class Y {\n    import weird.Thing;\n}\n";
            let outcome = insert(&stmt, content);
            assert_eq!(
                outcome.content,
                "class Y {\n    import weird.Thing;\nimport a.B;\n}\n"
            );
        }

        #[test]
        fn import_in_word_does_not_match() {
            // "imports" or "importance" must not anchor anything.
            let stmt = class_import("a.B");
            let content = "// importance of imports\nclass Y {}\n";
            let outcome = insert(&stmt, content);
            assert_eq!(outcome.placement, Placement::TopOfFile);
        }
    }

    mod edge_cases {
        use super::*;

        #[test]
        fn empty_content_gets_import_and_blank_line() {
            let stmt = class_import("java.util.List");
            let outcome = insert(&stmt, "");
            assert_eq!(outcome.content, "import java.util.List;\n\n");
            assert_eq!(outcome.placement, Placement::TopOfFile);
        }

        #[test]
        fn missing_final_newline_after_import_anchor() {
            let stmt = class_import("b.B");
            let content = "import a.A;";
            let outcome = insert(&stmt, content);
            // The new import becomes the unterminated final line.
            assert_eq!(outcome.content, "import a.A;\nimport b.B;");
        }

        #[test]
        fn missing_final_newline_after_package_anchor() {
            let stmt = class_import("a.B");
            let content = "package com.x;";
            let outcome = insert(&stmt, content);
            assert_eq!(outcome.content, "package com.x;\nimport a.B;\n");
        }

        #[test]
        fn crlf_content_gets_crlf_insertions() {
            let stmt = class_import("java.util.List");
            let content = "package com.x;\r\n\r\npublic class Y {}\r\n";
            let outcome = insert(&stmt, content);
            assert_eq!(
                outcome.content,
                "package com.x;\r\nimport java.util.List;\r\n\r\n\r\npublic class Y {}\r\n"
            );
        }

        #[test]
        fn crlf_duplicate_detected() {
            let stmt = class_import("java.util.List");
            let content = "package com.x;\r\nimport java.util.List;\r\n";
            let outcome = insert(&stmt, content);
            assert!(!outcome.changed);
        }

        #[test]
        fn unrelated_lines_never_move() {
            let stmt = class_import("z.Z");
            let content = "package p;\nimport a.A;\n\nclass C {\n  int x;\n}\n";
            let outcome = insert(&stmt, content);
            let original: Vec<&str> = content.lines().collect();
            let rewritten: Vec<&str> = outcome.content.lines().collect();
            // Original lines form a subsequence of the output, in order.
            let mut it = rewritten.iter();
            for line in &original {
                assert!(
                    it.any(|l| l == line),
                    "line {:?} lost or reordered",
                    line
                );
            }
        }
    }

    mod properties {
        use super::*;

        #[test]
        fn idempotence_across_shapes() {
            let stmt = class_import("java.util.List");
            let contents = [
                "",
                "public class Y {}\n",
                "package com.x;\n\npublic class Y {}\n",
                "package com.x;\nimport a.A;\nclass Y {}\n",
                "import a.A;",
                "package com.x;",
                "package com.x;\r\n\r\nclass Y {}\r\n",
            ];
            for content in contents {
                let first = insert(&stmt, content);
                let second = insert(&stmt, &first.content);
                assert!(
                    !second.changed,
                    "second insert changed content for {:?}",
                    content
                );
                assert_eq!(second.content, first.content);
            }
        }

        #[test]
        fn insert_then_reinsert_is_stable() {
            let stmt = class_import("java.util.List");
            let outcome = insert(&stmt, "package com.x;\n\npublic class Y {}\n");
            assert!(outcome.changed);
            assert!(outcome
                .content
                .starts_with("package com.x;\nimport java.util.List;\n"));
            let again = insert(&stmt, &outcome.content);
            assert!(!again.changed);
            assert_eq!(again.content, outcome.content);
        }
    }
}
