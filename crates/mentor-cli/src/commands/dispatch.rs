use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Tree => commands::tree::handle(ctx, flags),
        Commands::Outline(args) => commands::outline::handle(&args, ctx, flags),
        Commands::Layout(args) => commands::layout::handle(&args, ctx, flags),
        Commands::Node(args) => commands::node::handle(&args, ctx, flags),
        Commands::Insight { action } => commands::insight::handle(&action, ctx, flags).await,
        Commands::Progress { action } => commands::progress::handle(&action, ctx, flags),
        Commands::Schema(_) => unreachable!("schema is handled in run before the context loads"),
    }
}
