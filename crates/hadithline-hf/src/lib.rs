//! Hadithline HF - HuggingFace hadith dataset converter
//!
//! Downloads the `meeAtif/hadith_datasets` Parquet export and reshapes its
//! flat rows into per-collection, per-book JSON files for static serving.
//!
//! # Example
//!
//! ```ignore
//! use hadithline_core::ProgressContext;
//! use hadithline_hf::{Config, run};
//!
//! let config = Config {
//!     output_dir: "data/hadith".into(),
//!     ..Default::default()
//! };
//!
//! let summary = run(&config, &ProgressContext::new())?;
//! println!("Wrote {} books", summary.books);
//! ```

pub mod collection;
pub mod config;
pub mod decode;
pub mod emit;
pub mod fields;
pub mod report;
pub mod runner;
pub mod schema;
pub mod transform;

// Re-exports
pub use config::Config;
pub use runner::{Summary, run};
