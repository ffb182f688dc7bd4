use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Insight store commands.
#[derive(Clone, Debug, Subcommand)]
pub enum InsightCommands {
    /// Upsert one insight.
    Add(InsightAddArgs),
    /// Upsert a JSON array of insights from a file.
    Import { file: PathBuf },
    /// List stored insights.
    List,
}

#[derive(Clone, Debug, Args)]
pub struct InsightAddArgs {
    #[arg(long)]
    pub node_id: String,
    /// Parent node id; omitted attaches to the root
    #[arg(long)]
    pub parent: Option<String>,
    #[arg(long)]
    pub label: String,
    /// topic, subtopic, or concept
    #[arg(long, default_value = "concept")]
    pub kind: String,
    #[arg(long)]
    pub weakness: Option<String>,
    /// Recommended action step (repeatable)
    #[arg(long)]
    pub step: Vec<String>,
    #[arg(long)]
    pub color: Option<String>,
}

/// Progress overlay commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProgressCommands {
    /// Tier counts over the merged tree.
    Summary,
}
