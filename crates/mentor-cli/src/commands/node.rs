use anyhow::bail;
use mentor_map::view::node_detail;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::NodeArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `mentor node`.
pub fn handle(args: &NodeArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let tree = ctx.merged_tree();
    let Some(detail) = node_detail(&tree, &args.id, &ctx.progress) else {
        bail!("node '{}' not found in the knowledge tree", args.id);
    };
    output(&detail, flags.format)
}
