use similar::{ChangeTag, TextDiff};
use std::path::Path;

/// Lines of unchanged context around each hunk
const CONTEXT_LINES: usize = 3;

/// Render a unified diff between two versions of a file.
///
/// Returns an empty string when both versions are equal.
pub fn render_unified_diff(path: &Path, before: &str, after: &str) -> String {
    if before == after {
        return String::new();
    }

    let old_header = format!("a/{}", path.display());
    let new_header = format!("b/{}", path.display());
    let diff = TextDiff::from_lines(before, after);

    diff.unified_diff()
        .context_radius(CONTEXT_LINES)
        .header(&old_header, &new_header)
        .to_string()
}

/// Count inserted and deleted lines between two texts
pub fn line_stats(before: &str, after: &str) -> (usize, usize) {
    let diff = TextDiff::from_lines(before, after);
    let mut inserted = 0;
    let mut deleted = 0;

    for change in diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Insert => inserted += 1,
            ChangeTag::Delete => deleted += 1,
            ChangeTag::Equal => {}
        }
    }

    (inserted, deleted)
}
