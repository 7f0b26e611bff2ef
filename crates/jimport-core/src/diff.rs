//! Unified diff rendering for dry-run previews.
//!
//! An insertion touches one contiguous block of lines, so the diff is a
//! single hunk: common prefix, inserted lines, common suffix. This is a
//! simplified generator for preview output — it produces one hunk with up
//! to three context lines per side and does not coalesce multiple edits
//! (there is only ever one).

use crate::text::split_lines;

/// Maximum context lines on each side of the hunk.
const CONTEXT: usize = 3;

/// Render a unified diff between `old` and `new` content of `path`.
///
/// Returns an empty string when the contents are equal. Line comparison is
/// content-based; the `\ No newline at end of file` marker is emitted when
/// the hunk reaches an unterminated final line.
pub fn insertion_diff(path: &str, old: &str, new: &str) -> String {
    if old == new {
        return String::new();
    }

    let old_lines: Vec<&str> = split_lines(old).iter().map(|l| l.content).collect();
    let new_lines: Vec<&str> = split_lines(new).iter().map(|l| l.content).collect();

    // Common prefix and suffix, suffix bounded so the regions never overlap.
    let mut prefix = 0;
    while prefix < old_lines.len()
        && prefix < new_lines.len()
        && old_lines[prefix] == new_lines[prefix]
    {
        prefix += 1;
    }
    let mut suffix = 0;
    while suffix < old_lines.len().min(new_lines.len()) - prefix
        && old_lines[old_lines.len() - 1 - suffix] == new_lines[new_lines.len() - 1 - suffix]
    {
        suffix += 1;
    }

    let removed = &old_lines[prefix..old_lines.len() - suffix];
    let inserted = &new_lines[prefix..new_lines.len() - suffix];

    let ctx_before = prefix.min(CONTEXT);
    let ctx_after = suffix.min(CONTEXT);

    let old_count = removed.len() + ctx_before + ctx_after;
    let new_count = inserted.len() + ctx_before + ctx_after;
    let old_start = if old_count == 0 { prefix } else { prefix - ctx_before + 1 };
    let new_start = if new_count == 0 { prefix } else { prefix - ctx_before + 1 };

    let mut diff = String::new();
    diff.push_str(&format!("--- a/{}\n", path));
    diff.push_str(&format!("+++ b/{}\n", path));
    diff.push_str(&format!(
        "@@ -{},{} +{},{} @@\n",
        old_start, old_count, new_start, new_count
    ));

    for line in &old_lines[prefix - ctx_before..prefix] {
        diff.push_str(&format!(" {}\n", line));
    }
    for (i, line) in removed.iter().enumerate() {
        diff.push_str(&format!("-{}\n", line));
        if suffix == 0 && i == removed.len() - 1 && !old.ends_with('\n') {
            diff.push_str("\\ No newline at end of file\n");
        }
    }
    for (i, line) in inserted.iter().enumerate() {
        diff.push_str(&format!("+{}\n", line));
        if suffix == 0 && i == inserted.len() - 1 && !new.ends_with('\n') {
            diff.push_str("\\ No newline at end of file\n");
        }
    }
    for line in &new_lines[new_lines.len() - suffix..new_lines.len() - suffix + ctx_after] {
        diff.push_str(&format!(" {}\n", line));
    }

    diff
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_content_yields_empty_diff() {
        assert_eq!(insertion_diff("A.java", "x\n", "x\n"), "");
    }

    #[test]
    fn insertion_in_middle() {
        let old = "package p;\nimport a.A;\nclass C {}\n";
        let new = "package p;\nimport a.A;\nimport b.B;\nclass C {}\n";
        let diff = insertion_diff("src/C.java", old, new);
        assert_eq!(
            diff,
            "--- a/src/C.java\n\
             +++ b/src/C.java\n\
             @@ -1,3 +1,4 @@\n \
             package p;\n \
             import a.A;\n\
             +import b.B;\n \
             class C {}\n"
        );
    }

    #[test]
    fn insertion_at_top() {
        let old = "class C {}\n";
        let new = "import a.A;\n\nclass C {}\n";
        let diff = insertion_diff("C.java", old, new);
        assert_eq!(
            diff,
            "--- a/C.java\n\
             +++ b/C.java\n\
             @@ -1,1 +1,3 @@\n\
             +import a.A;\n\
             +\n \
             class C {}\n"
        );
    }

    #[test]
    fn context_is_limited_to_three_lines() {
        let old = "l1\nl2\nl3\nl4\nl5\nimport a.A;\nl7\nl8\nl9\nl10\n";
        let new = "l1\nl2\nl3\nl4\nl5\nimport a.A;\nimport b.B;\nl7\nl8\nl9\nl10\n";
        let diff = insertion_diff("F.java", old, new);
        assert!(diff.contains("@@ -4,6 +4,7 @@"), "got:\n{}", diff);
        assert!(!diff.contains(" l2\n"), "too much leading context:\n{}", diff);
        assert!(!diff.contains(" l10\n"), "too much trailing context:\n{}", diff);
    }

    #[test]
    fn missing_final_newline_marked() {
        let old = "import a.A;";
        let new = "import a.A;\nimport b.B;";
        let diff = insertion_diff("F.java", old, new);
        assert!(
            diff.ends_with("+import b.B;\n\\ No newline at end of file\n"),
            "got:\n{}",
            diff
        );
    }
}
