use std::ops::Range;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::replace::{count_occurrences, replace_first_matching_line_endings, to_crlf};
use crate::error::{PatchError, PatchResult};
use crate::utils::fs::{read_text, write_text};

/// Options controlling how a patch is applied
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatchOptions {
    /// Read and transform, but leave the file on disk untouched
    pub dry_run: bool,
    /// Fail instead of rewriting unchanged content when the search text is absent
    pub strict: bool,
}

/// What a single run did to its target
#[derive(Debug, Clone)]
pub struct PatchOutcome {
    pub path: PathBuf,
    /// Byte range of the replaced match in the original text
    pub span: Option<Range<usize>>,
    /// Occurrences of the search text in the original text
    pub occurrences: usize,
    pub written: bool,
    pub before: String,
    pub after: String,
}

impl PatchOutcome {
    pub fn matched(&self) -> bool {
        self.span.is_some()
    }

    pub fn changed(&self) -> bool {
        self.before != self.after
    }
}

/// Replaces one literal block of text in a file, in place
#[derive(Debug, Clone, Default)]
pub struct Patcher {
    options: PatchOptions,
}

impl Patcher {
    pub fn new(options: PatchOptions) -> Self {
        Self { options }
    }

    /// Replace the first occurrence of `search` in the file at `path` with `replace`.
    ///
    /// A search block with LF line endings also matches a CRLF file; the
    /// replacement is then written with CRLF endings too.
    ///
    /// The whole file is read before anything is written. When the search
    /// text is absent the original content is written back unchanged,
    /// unless the patcher is strict, in which case nothing is written and
    /// [`PatchError::PatternNotFound`] is returned.
    pub fn apply(
        &self,
        path: impl AsRef<Path>,
        search: &str,
        replace: &str,
    ) -> PatchResult<PatchOutcome> {
        let path = path.as_ref();
        let before = read_text(path)?;

        let replacement = replace_first_matching_line_endings(&before, search, replace);
        let occurrences = if replacement.crlf {
            count_occurrences(&before, &to_crlf(search))
        } else {
            count_occurrences(&before, search)
        };

        match &replacement.span {
            Some(span) => {
                debug!(
                    "Found search text at bytes {}..{} in {}",
                    span.start,
                    span.end,
                    path.display()
                );
                if occurrences > 1 {
                    warn!(
                        "{} occurrences of search text in {}, replacing only the first",
                        occurrences,
                        path.display()
                    );
                }
            }
            None if self.options.strict => {
                return Err(PatchError::pattern_not_found(path));
            }
            None => {
                warn!(
                    "Search text not found in {}, content left unchanged",
                    path.display()
                );
            }
        }

        let written = if self.options.dry_run {
            info!("Dry run, not writing {}", path.display());
            false
        } else {
            write_text(path, &replacement.content)?;
            info!("Wrote {}", path.display());
            true
        };

        Ok(PatchOutcome {
            path: path.to_path_buf(),
            span: replacement.span,
            occurrences,
            written,
            before,
            after: replacement.content,
        })
    }
}

/// Apply a patch with default options
pub fn apply(path: impl AsRef<Path>, search: &str, replace: &str) -> PatchResult<PatchOutcome> {
    Patcher::default().apply(path, search, replace)
}
