use mentor_core::entities::InsightRecord;
use mentor_core::enums::NodeKind;

use crate::cli::subcommands::InsightAddArgs;
use crate::commands::shared::parse::parse_enum;

/// Build the record for `mentor insight add`.
pub fn record_from_args(args: &InsightAddArgs) -> anyhow::Result<InsightRecord> {
    if args.node_id.trim().is_empty() {
        anyhow::bail!("--node-id must not be empty");
    }

    let kind = parse_enum::<NodeKind>(&args.kind, "kind")?;
    let mut record = InsightRecord::new(&args.node_id, args.parent.as_deref(), &args.label, kind);
    record.weakness_summary.clone_from(&args.weakness);
    record.action_steps = (!args.step.is_empty()).then(|| args.step.clone());
    record.color.clone_from(&args.color);
    Ok(record)
}
