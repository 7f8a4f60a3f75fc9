//! Error types for theme loading.

use std::path::PathBuf;

/// Result type alias for theme operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading a theme.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The theme document is not valid TOML or does not match the theme layout.
    #[error("Theme parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// File I/O error.
    #[error("Failed to read theme '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_names_path() {
        let err = Error::io(
            "themes/missing.toml",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        let message = err.to_string();
        assert!(message.contains("themes/missing.toml"));
        assert!(message.contains("no such file"));
    }
}
