//! Converter configuration

use std::path::PathBuf;

/// Parquet export of `meeAtif/hadith_datasets` (train split, single shard)
pub const DEFAULT_PARQUET_URL: &str =
    "https://huggingface.co/api/datasets/meeAtif/hadith_datasets/parquet/default/train/0.parquet";

/// Runtime configuration for the converter
#[derive(Debug, Clone)]
pub struct Config {
    /// Remote Parquet file to download
    pub url: String,
    /// Local Parquet file; when set, the download is skipped
    pub input: Option<PathBuf>,
    /// Output root. Removed and recreated on every run.
    pub output_dir: PathBuf,
    /// Print the collection/grade summary to stdout
    pub print_summary: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: DEFAULT_PARQUET_URL.to_string(),
            input: None,
            output_dir: PathBuf::from("data/hadith"),
            print_summary: true,
        }
    }
}
