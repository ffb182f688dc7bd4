use mentor_map::view::{Expansion, radial_layout};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::LayoutArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `mentor layout`.
pub fn handle(args: &LayoutArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let start = args.depth.map_or_else(Expansion::all, Expansion::to_depth);
    let expansion = args
        .collapse
        .iter()
        .fold(start, |expansion, id| expansion.collapse(id.as_str()));

    let tree = ctx.merged_tree();
    let layout = radial_layout(
        &tree,
        &ctx.progress,
        &expansion,
        ctx.config.mindmap.ring_spacing,
    );
    tracing::debug!(
        nodes = layout.nodes.len(),
        edges = layout.edges.len(),
        "radial layout computed"
    );
    output(&layout, flags.format)
}
