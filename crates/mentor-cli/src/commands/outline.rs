use mentor_map::view::{Expansion, outline};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::OutlineArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `mentor outline`.
pub fn handle(args: &OutlineArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let expansion = expansion(args, ctx.config.mindmap.expand_depth);
    let tree = ctx.merged_tree();
    let rows = outline::outline(&tree, &ctx.progress, &expansion);

    if args.text {
        println!("{}", outline::render_text(&rows));
        return Ok(());
    }
    output(&rows, flags.format)
}

fn expansion(args: &OutlineArgs, expand_depth: usize) -> Expansion {
    let start = if args.collapsed {
        Expansion::to_depth(expand_depth)
    } else {
        Expansion::all()
    };
    args.collapse
        .iter()
        .fold(start, |expansion, id| expansion.collapse(id.as_str()))
}
