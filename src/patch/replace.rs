use std::borrow::Cow;
use std::ops::Range;
use tracing::debug;

/// Result of replacing the first occurrence of a literal in some text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    /// Text after the replacement
    pub content: String,
    /// Byte range of the match in the original text
    pub span: Option<Range<usize>>,
    /// Search and replacement were rewritten to CRLF before matching
    pub crlf: bool,
}

impl Replacement {
    /// Returns whether the search text was found
    pub fn matched(&self) -> bool {
        self.span.is_some()
    }
}

/// Replace the first (leftmost) occurrence of `search` in `content` with `replace`.
///
/// Matching is exact and literal. Text outside the matched span is kept
/// byte for byte. An empty `search` matches at offset 0.
pub fn replace_first(content: &str, search: &str, replace: &str) -> Replacement {
    let Some(start) = content.find(search) else {
        debug!("Search text not present ({} bytes)", search.len());
        return Replacement {
            content: content.to_string(),
            span: None,
            crlf: false,
        };
    };

    let end = start + search.len();
    debug!("Replacing bytes {}..{}", start, end);

    let mut result = String::with_capacity(content.len() - search.len() + replace.len());
    result.push_str(&content[..start]);
    result.push_str(replace);
    result.push_str(&content[end..]);

    Replacement {
        content: result,
        span: Some(start..end),
        crlf: false,
    }
}

/// Returns whether `content` uses CRLF line endings
pub fn uses_crlf(content: &str) -> bool {
    content.contains("\r\n")
}

/// Rewrite every line ending in `text` as CRLF
pub fn to_crlf(text: &str) -> Cow<'_, str> {
    if !text.contains('\n') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\n', "\r\n"))
}

/// Like [`replace_first`], but a multi-line `search` written with LF endings
/// still matches a CRLF file.
///
/// The literal search always runs first. Only when it misses and `content`
/// uses CRLF are `search` and `replace` rewritten to CRLF and tried again, so
/// the inserted block keeps the file's line endings.
pub fn replace_first_matching_line_endings(
    content: &str,
    search: &str,
    replace: &str,
) -> Replacement {
    let literal = replace_first(content, search, replace);
    if literal.matched() || !uses_crlf(content) {
        return literal;
    }

    let crlf_search = to_crlf(search);
    if crlf_search == search {
        return literal;
    }

    let mut retry = replace_first(content, &crlf_search, &to_crlf(replace));
    if retry.matched() {
        debug!("Search text matched after converting line endings to CRLF");
        retry.crlf = true;
        return retry;
    }
    literal
}

/// Count non-overlapping occurrences of `search` in `content`
pub fn count_occurrences(content: &str, search: &str) -> usize {
    if search.is_empty() {
        return 1;
    }
    content.matches(search).count()
}
