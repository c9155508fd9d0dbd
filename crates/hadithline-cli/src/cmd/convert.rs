//! Convert subcommand - download the dataset and write the JSON tree

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use hadithline_core::{ProgressContext, fmt_num};

use crate::config::Config;

#[derive(Args, Debug, Default)]
pub struct ConvertArgs {
    /// Parquet URL to download (default: `source.url` from config)
    #[arg(long)]
    pub url: Option<String>,

    /// Convert a local Parquet file instead of downloading
    #[arg(short, long, conflicts_with = "url")]
    pub input: Option<PathBuf>,

    /// Output directory; removed and recreated on every run
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Don't print the collection/grade summary
    #[arg(long)]
    pub no_summary: bool,
}

/// CLI flags override config file values
fn resolve(args: ConvertArgs, config: &Config) -> hadithline_hf::Config {
    hadithline_hf::Config {
        url: args.url.unwrap_or_else(|| config.source.url.clone()),
        input: args.input,
        output_dir: args.output.unwrap_or_else(|| config.output.dir.clone()),
        print_summary: !args.no_summary,
    }
}

pub fn run(args: ConvertArgs, config: &Config, progress: &ProgressContext) -> Result<()> {
    let hf_config = resolve(args, config);
    let summary = hadithline_hf::run(&hf_config, progress)?;

    log::info!(
        "Converted {} hadiths into {} books across {} collections in {:.1}s",
        fmt_num(summary.rows),
        fmt_num(summary.books),
        summary.collections,
        summary.elapsed.as_secs_f64()
    );
    Ok(())
}
