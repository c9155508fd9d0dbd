//! Error type shared by the conversion stages

use std::path::{Path, PathBuf};

use crate::stream::StreamError;

/// Error from one stage of the conversion (fetch, decode, emit).
///
/// None of these are recovered from: they propagate to `main` and end the
/// run with a non-zero status.
#[derive(Debug)]
pub enum ConvertError {
    /// Download failed (HTTP status, connection, or writing the temp file)
    Network(StreamError),
    /// Input is not readable Parquet or lacks an expected column
    Decode(String),
    /// Output could not be removed, created or written
    Filesystem { path: PathBuf, source: std::io::Error },
}

impl std::fmt::Display for ConvertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network(e) => write!(f, "network: {e}"),
            Self::Decode(msg) => write!(f, "decode: {msg}"),
            Self::Filesystem { path, source } => {
                write!(f, "filesystem: {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Network(e) => Some(e),
            Self::Decode(_) => None,
            Self::Filesystem { source, .. } => Some(source),
        }
    }
}

impl ConvertError {
    /// Filesystem error tagged with the path it happened on
    pub fn fs(path: &Path, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn missing_column(name: &str) -> Self {
        Self::Decode(format!("missing column `{name}`"))
    }

    /// Short stage label for log lines
    pub fn stage(&self) -> &'static str {
        match self {
            Self::Network(_) => "fetch",
            Self::Decode(_) => "decode",
            Self::Filesystem { .. } => "emit",
        }
    }
}

impl From<StreamError> for ConvertError {
    fn from(e: StreamError) -> Self {
        Self::Network(e)
    }
}

impl From<parquet::errors::ParquetError> for ConvertError {
    fn from(e: parquet::errors::ParquetError) -> Self {
        Self::Decode(e.to_string())
    }
}

impl From<arrow::error::ArrowError> for ConvertError {
    fn from(e: arrow::error::ArrowError) -> Self {
        Self::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;

    #[test]
    fn display_network() {
        let err = ConvertError::from(StreamError::Http {
            status: Some(404),
            message: "not found".to_string(),
        });
        assert_eq!(format!("{err}"), "network: HTTP 404: not found");
        assert_eq!(err.stage(), "fetch");
    }

    #[test]
    fn display_missing_column() {
        let err = ConvertError::missing_column("Book");
        assert_eq!(format!("{err}"), "decode: missing column `Book`");
        assert_eq!(err.stage(), "decode");
    }

    #[test]
    fn display_filesystem_includes_path() {
        let err = ConvertError::fs(
            Path::new("data/hadith/index.json"),
            std::io::Error::new(ErrorKind::PermissionDenied, "denied"),
        );
        let msg = format!("{err}");
        assert!(msg.starts_with("filesystem: data/hadith/index.json"));
        assert!(msg.contains("denied"));
        assert_eq!(err.stage(), "emit");
    }

    #[test]
    fn filesystem_source_is_io_error() {
        use std::error::Error;
        let err = ConvertError::fs(Path::new("x"), std::io::Error::other("boom"));
        assert!(err.source().is_some());
    }
}
