use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProgressCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `mentor progress`.
pub fn handle(
    action: &ProgressCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProgressCommands::Summary => {
            let tree = ctx.merged_tree();
            output(&ctx.progress.summary(&tree), flags.format)
        }
    }
}
