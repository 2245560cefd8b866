use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for textpatch
#[derive(Error, Debug)]
pub enum PatchError {
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Permission denied: {}", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("File is not valid UTF-8: {}", path.display())]
    Encoding {
        path: PathBuf,
        source: std::string::FromUtf8Error,
    },

    #[error("IO error on {}", path.display())]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Search text not found in {}", path.display())]
    PatternNotFound { path: PathBuf },

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Parse error: {message}")]
    ParseError { message: String },
}

impl PatchError {
    /// Classify an IO error against the file it happened on
    pub fn from_io(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match err.kind() {
            ErrorKind::NotFound => Self::NotFound { path },
            ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Io { source: err, path },
        }
    }

    pub fn encoding(path: impl Into<PathBuf>, source: std::string::FromUtf8Error) -> Self {
        Self::Encoding {
            path: path.into(),
            source,
        }
    }

    pub fn pattern_not_found(path: impl Into<PathBuf>) -> Self {
        Self::PatternNotFound { path: path.into() }
    }

    /// Create a new invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a new parse error
    pub fn parse_error(message: impl Into<String>) -> Self {
        Self::ParseError {
            message: message.into(),
        }
    }

    /// Path the error refers to, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::NotFound { path }
            | Self::PermissionDenied { path }
            | Self::Encoding { path, .. }
            | Self::Io { path, .. }
            | Self::PatternNotFound { path } => Some(path),
            Self::InvalidArgument { .. } | Self::ParseError { .. } => None,
        }
    }
}

impl From<serde_json::Error> for PatchError {
    fn from(error: serde_json::Error) -> Self {
        PatchError::parse_error(error.to_string())
    }
}

impl From<serde_yaml::Error> for PatchError {
    fn from(error: serde_yaml::Error) -> Self {
        PatchError::parse_error(error.to_string())
    }
}

impl From<toml::de::Error> for PatchError {
    fn from(error: toml::de::Error) -> Self {
        PatchError::parse_error(error.to_string())
    }
}

/// Result type alias using PatchError
pub type PatchResult<T> = Result<T, PatchError>;

/// Contextual error mapping function
pub fn map_io_err<P: Into<PathBuf>>(path: P) -> impl FnOnce(std::io::Error) -> PatchError {
    let path = path.into();
    move |err| PatchError::from_io(err, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_kind_classification() {
        let err = PatchError::from_io(io::Error::from(ErrorKind::NotFound), "/tmp/a.js");
        assert!(matches!(err, PatchError::NotFound { .. }));

        let err = PatchError::from_io(io::Error::from(ErrorKind::PermissionDenied), "/tmp/a.js");
        assert!(matches!(err, PatchError::PermissionDenied { .. }));

        let err = PatchError::from_io(io::Error::from(ErrorKind::Interrupted), "/tmp/a.js");
        assert!(matches!(err, PatchError::Io { .. }));
    }

    #[test]
    fn test_cause_not_repeated_in_message() {
        use std::error::Error;

        let bytes = vec![0xFF, b'a'];
        let utf8_err = String::from_utf8(bytes).unwrap_err();
        let cause = utf8_err.utf8_error().to_string();

        let err = PatchError::encoding("/tmp/c.js", utf8_err);
        assert_eq!(err.to_string(), "File is not valid UTF-8: /tmp/c.js");
        assert_eq!(err.source().unwrap().to_string(), cause);

        let err = PatchError::from_io(io::Error::other("disk on fire"), "/tmp/d.js");
        assert_eq!(err.to_string(), "IO error on /tmp/d.js");
        assert_eq!(err.source().unwrap().to_string(), "disk on fire");
    }

    #[test]
    fn test_error_path() {
        let err = map_io_err("/tmp/b.js")(io::Error::from(ErrorKind::NotFound));
        assert_eq!(err.path(), Some(Path::new("/tmp/b.js")));
        assert_eq!(err.to_string(), "File not found: /tmp/b.js");

        assert!(PatchError::invalid_argument("missing").path().is_none());
    }
}
