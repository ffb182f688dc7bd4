use clap::{Args, Subcommand};

use crate::cli::subcommands::{InsightCommands, ProgressCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Print the knowledge tree with stored insights merged in.
    Tree,
    /// Learning path rows with mastery status.
    Outline(OutlineArgs),
    /// Radial mind-map layout: placed nodes and edges.
    Layout(LayoutArgs),
    /// Detail card for one node.
    Node(NodeArgs),
    /// Stored insights.
    Insight {
        #[command(subcommand)]
        action: InsightCommands,
    },
    /// Progress overlay.
    Progress {
        #[command(subcommand)]
        action: ProgressCommands,
    },
    /// Dump a registered JSON Schema.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct OutlineArgs {
    /// Collapse this node (repeatable)
    #[arg(long)]
    pub collapse: Vec<String>,
    /// Start from `mindmap.expand_depth` instead of fully expanded
    #[arg(long)]
    pub collapsed: bool,
    /// Print indented text instead of structured rows
    #[arg(long)]
    pub text: bool,
}

#[derive(Clone, Debug, Args)]
pub struct LayoutArgs {
    /// Expand only nodes shallower than this depth
    #[arg(long)]
    pub depth: Option<usize>,
    /// Collapse this node (repeatable)
    #[arg(long)]
    pub collapse: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct NodeArgs {
    pub id: String,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Schema name, or `list` for all registered names
    pub type_name: String,
}
