//! HTTP download into a scoped temporary file.
//!
//! Uses async reqwest on a current-thread tokio runtime, but presents a
//! blocking interface: the pipeline is strictly sequential.

use std::io::Write;
use std::path::Path;
use std::sync::LazyLock;

use futures_util::StreamExt;
use indicatif::ProgressBar;
use tempfile::NamedTempFile;

use crate::progress::upgrade_to_bar;

/// Error types for stream operations
#[derive(Debug)]
pub enum StreamError {
    /// HTTP error with optional status code
    Http {
        status: Option<u16>,
        message: String,
    },
    /// I/O error
    Io(std::io::Error),
}

impl std::fmt::Display for StreamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http {
                status: Some(s),
                message,
            } => write!(f, "HTTP {s}: {message}"),
            Self::Http {
                status: None,
                message,
            } => write!(f, "HTTP error: {message}"),
            Self::Io(e) => write!(f, "IO error: {e}"),
        }
    }
}

impl std::error::Error for StreamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http { .. } => None,
            Self::Io(e) => Some(e),
        }
    }
}

impl StreamError {
    /// Create HTTP error from reqwest error
    pub fn from_reqwest(e: &reqwest::Error) -> Self {
        Self::Http {
            status: e.status().map(|s| s.as_u16()),
            message: e.to_string(),
        }
    }
}

impl From<std::io::Error> for StreamError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Shared async HTTP client.
static SHARED_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .user_agent(concat!("hadithline/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("failed to build HTTP client")
});

/// Shared tokio runtime for HTTP operations.
static SHARED_RUNTIME: LazyLock<tokio::runtime::Runtime> = LazyLock::new(|| {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to build tokio runtime")
});

/// A downloaded resource living in a temporary file.
///
/// The file is deleted when this value is dropped, on success and on
/// every error path of whatever stage still holds it.
#[derive(Debug)]
pub struct Download {
    file: NamedTempFile,
    bytes: u64,
}

impl Download {
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Number of body bytes written to the file
    pub fn bytes(&self) -> u64 {
        self.bytes
    }
}

/// HTTP GET → temporary file (suffix `suffix`), no retry.
///
/// `pb` is upgraded to a byte bar once the content length is known.
pub fn download_to_tempfile(
    url: &str,
    suffix: &str,
    pb: &ProgressBar,
) -> Result<Download, StreamError> {
    let mut file = tempfile::Builder::new()
        .prefix("hadithline-")
        .suffix(suffix)
        .tempfile()?;
    log::debug!("Downloading {url} -> {}", file.path().display());

    let bytes = SHARED_RUNTIME.block_on(async {
        let response = SHARED_CLIENT
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| StreamError::from_reqwest(&e))?;

        if let Some(total) = response.content_length() {
            upgrade_to_bar(pb, total);
        }

        let mut written = 0u64;
        let mut body = response.bytes_stream();
        while let Some(chunk) = body.next().await {
            let chunk = chunk.map_err(|e| StreamError::from_reqwest(&e))?;
            file.write_all(&chunk)?;
            written += chunk.len() as u64;
            pb.set_position(written);
        }
        Ok::<_, StreamError>(written)
    })?;

    file.flush()?;
    Ok(Download { file, bytes })
}
