//! hadithline - convert the HuggingFace hadith dataset into static JSON
//!
//! Downloads the Parquet export, groups it per collection and book, and
//! writes one JSON file per book plus an `index.json` catalog.

use anyhow::Result;
use clap::{Parser, Subcommand};
use hadithline_core::ConvertError;

mod cmd;
mod config;

use config::Config;

#[derive(Parser)]
#[command(name = "hadithline")]
#[command(about = "Convert the HuggingFace hadith dataset into per-book JSON files")]
#[command(version)]
struct Cli {
    /// Defaults to `convert` when omitted
    #[command(subcommand)]
    command: Option<Command>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Config file path (default: ./hadithline.toml or ~/.config/hadithline/config.toml)
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Download the dataset and write the JSON tree
    Convert(cmd::convert::ConvertArgs),
    /// Show current configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Progress context (TTY auto-detect)
    let progress = hadithline_core::ProgressContext::new();

    // Logging:
    //   TTY:     quiet (warn) unless --debug  (stage lines show activity)
    //   non-TTY: info unless --debug          (logs are the only progress indicator)
    let is_tty = progress.is_tty();
    let multi = if is_tty { Some(progress.multi()) } else { None };
    let quiet = if is_tty { !cli.debug } else { false };
    hadithline_core::init_logging(quiet, cli.debug, multi);

    let config = if let Some(path) = cli.config {
        Config::from_file(&path)?
    } else {
        Config::load()?
    };

    let command = cli
        .command
        .unwrap_or_else(|| Command::Convert(Default::default()));

    let result = match command {
        Command::Convert(args) => cmd::convert::run(args, &config, &progress),
        Command::Config => {
            use comfy_table::{
                Cell, Color, Table, modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL,
            };

            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .apply_modifier(UTF8_ROUND_CORNERS)
                .set_header(vec![
                    Cell::new("Setting").fg(Color::Cyan),
                    Cell::new("Value").fg(Color::Cyan),
                ]);
            table.add_row(vec!["Source URL", &config.source.url]);
            table.add_row(vec![
                "Output directory",
                &config.output.dir.display().to_string(),
            ]);

            eprintln!("\n{table}");
            Ok(())
        }
    };

    if let Err(e) = &result {
        if let Some(stage) = e.chain().find_map(|c| c.downcast_ref::<ConvertError>()) {
            log::error!("{} stage failed", stage.stage());
        }
    }
    result
}
