pub mod fs;
pub mod paths;

pub use fs::{read_text, write_text};
pub use paths::expand_tilde;
