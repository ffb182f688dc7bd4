use std::path::PathBuf;

use clap::{Parser, ValueEnum};

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `mentor` binary.
#[derive(Debug, Parser)]
#[command(
    name = "mentor",
    version,
    about = "MathMentor - knowledge mind map with AI insights"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw (defaults to `general.default_format`)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding the insight store (overrides `store.dir`)
    #[arg(long, global = true)]
    pub store_dir: Option<PathBuf>,

    /// Knowledge tree JSON file (defaults to the built-in grade 12 curriculum)
    #[arg(long, global = true)]
    pub tree: Option<PathBuf>,

    /// Progress overlay JSON file
    #[arg(long, global = true)]
    pub progress: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    ///
    /// `default_format` applies when `--format` is absent; an unknown value
    /// falls back to JSON.
    #[must_use]
    pub fn global_flags(&self, default_format: &str) -> GlobalFlags {
        let format = self.format.unwrap_or_else(|| {
            OutputFormat::from_str(default_format, true).unwrap_or_else(|_| {
                tracing::warn!(default_format, "unknown general.default_format; using json");
                OutputFormat::Json
            })
        });

        GlobalFlags {
            format,
            quiet: self.quiet,
            verbose: self.verbose,
            store_dir: self.store_dir.clone(),
            tree: self.tree.clone(),
            progress: self.progress.clone(),
        }
    }
}
