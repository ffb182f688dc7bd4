use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `mentor insight list`.
pub fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&ctx.insights, flags.format)
}
