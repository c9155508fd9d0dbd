//! Hadithline Core - Common infrastructure for the hadith dataset converter
//!
//! This crate provides the reusable pieces of the pipeline: HTTP download
//! into a scoped temporary file, the stage error type, logging and progress.

pub mod error;
pub mod logging;
pub mod progress;
pub mod stream;

// Re-exports for convenience
pub use error::ConvertError;
pub use logging::{IndicatifLogger, init_logging};
pub use progress::{ProgressContext, fmt_mb, fmt_num};
pub use stream::{Download, StreamError, download_to_tempfile};
