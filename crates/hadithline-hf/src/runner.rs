//! Main runner: fetch → decode → transform → emit → summary

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use hadithline_core::{
    ConvertError, Download, ProgressContext, download_to_tempfile, fmt_mb, fmt_num,
};

use crate::config::Config;
use crate::decode::read_rows;
use crate::emit::write_output;
use crate::report::print_summary;
use crate::transform::Library;

/// Conversion summary
#[derive(Debug)]
pub struct Summary {
    /// Input rows, one hadith each
    pub rows: usize,
    /// Book files written
    pub books: usize,
    /// Collections in `index.json`
    pub collections: usize,
    pub elapsed: Duration,
}

/// Run the full conversion.
///
/// The downloaded Parquet file lives in a temporary file owned by this
/// function; it is removed when the run returns, successfully or not.
pub fn run(config: &Config, progress: &ProgressContext) -> Result<Summary> {
    let start = Instant::now();

    // Dropped when `run` returns, after every stage that could still fail
    let download: Download;
    let input: &Path = match &config.input {
        Some(path) => path,
        None => {
            download = fetch(&config.url, progress)?;
            download.path()
        }
    };

    let stage = progress.stage_line("decode");
    stage.set_message(input.display().to_string());
    log::info!("Reading {}...", input.display());
    let rows =
        read_rows(input).with_context(|| format!("Failed to decode {}", input.display()))?;
    let row_count = rows.len();
    stage.finish_with_message(format!("{} rows", fmt_num(row_count)));
    log::info!("Read {} rows", fmt_num(row_count));

    let stage = progress.stage_line("transform");
    log::info!("Converting to book structure...");
    let library = Library::from_rows(rows);
    stage.finish_with_message(format!(
        "{} books in {} collections",
        fmt_num(library.books().len()),
        library.index().len()
    ));

    let stage = progress.stage_line("emit");
    stage.set_message(config.output_dir.display().to_string());
    log::info!("Writing output files...");
    let index = write_output(&library, &config.output_dir).with_context(|| {
        format!("Failed to write output to {}", config.output_dir.display())
    })?;
    stage.finish_and_clear();

    if config.print_summary {
        print_summary(&index, &library)?;
    }
    log::info!("Done! Output written to {}", config.output_dir.display());

    Ok(Summary {
        rows: row_count,
        books: library.books().len(),
        collections: index.len(),
        elapsed: start.elapsed(),
    })
}

fn fetch(url: &str, progress: &ProgressContext) -> Result<Download> {
    log::info!("Downloading parquet from {url}...");
    let pb = progress.download_bar("fetch");
    let download = download_to_tempfile(url, ".parquet", &pb)
        .map_err(ConvertError::from)
        .with_context(|| format!("Failed to download {url}"))?;
    pb.finish_and_clear();
    log::info!("Downloaded {}", fmt_mb(download.bytes()));
    Ok(download)
}
