use std::path::{Path, PathBuf};

/// Expand the tilde in a path to the home directory
pub fn expand_tilde(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();

    match path.strip_prefix("~") {
        Ok(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => path.to_path_buf(),
        },
        Err(_) => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_tilde() {
        let home = dirs::home_dir().unwrap();
        let path = expand_tilde("~/test.txt");
        assert_eq!(path, home.join("test.txt"));

        let path = expand_tilde("/tmp/test.txt");
        assert_eq!(path, PathBuf::from("/tmp/test.txt"));

        let path = expand_tilde("~user/test.txt");
        assert_eq!(path, PathBuf::from("~user/test.txt"));
    }
}
