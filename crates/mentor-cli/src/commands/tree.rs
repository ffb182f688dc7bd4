use mentor_map::view::{Expansion, outline};

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;

/// Handle `mentor tree`.
///
/// The nested tree has no tabular shape, so `--format table` prints it as a
/// fully expanded text outline.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let tree = ctx.merged_tree();
    if flags.format == OutputFormat::Table {
        let rows = outline::outline(&tree, &ctx.progress, &Expansion::all());
        println!("{}", outline::render_text(&rows));
        return Ok(());
    }
    output(&*tree, flags.format)
}
