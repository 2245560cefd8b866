pub mod patcher;
pub mod replace;

pub use patcher::{apply, PatchOptions, PatchOutcome, Patcher};
pub use replace::{
    count_occurrences, replace_first, replace_first_matching_line_endings, to_crlf, uses_crlf,
    Replacement,
};
