mod add;
mod import;
mod list;

use mentor_core::entities::InsightRecord;
use mentor_core::responses::InsightUpsertResponse;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::InsightCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `mentor insight`.
pub async fn handle(
    action: &InsightCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        InsightCommands::Add(args) => {
            let record = add::record_from_args(args)?;
            upsert(ctx, &[record], flags)
        }
        InsightCommands::Import { file } => {
            let records = import::read_records(file).await?;
            upsert(ctx, &records, flags)
        }
        InsightCommands::List => list::run(ctx, flags),
    }
}

/// Upsert into the store and adopt the merged collection for this session.
///
/// A failed write is already logged by the store; the session keeps the
/// merged records either way.
fn upsert(
    ctx: &mut AppContext,
    records: &[InsightRecord],
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let outcome = ctx.store.upsert(records);
    if !outcome.written && !records.is_empty() {
        tracing::warn!(
            key = ctx.store.key(),
            "insights kept for this run only; the store could not be written"
        );
    }

    let response = InsightUpsertResponse {
        upserted: records.len(),
        stored: outcome.records.len(),
        added: outcome.added,
        replaced: outcome.replaced,
    };
    ctx.insights = outcome.records;
    output(&response, flags.format)
}

#[cfg(test)]
mod tests {
    use mentor_config::MentorConfig;
    use mentor_core::enums::NodeKind;
    use mentor_map::traverse;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;
    use crate::cli::OutputFormat;

    fn flags(store_dir: std::path::PathBuf) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Raw,
            quiet: true,
            verbose: false,
            store_dir: Some(store_dir),
            tree: None,
            progress: None,
        }
    }

    #[tokio::test]
    async fn upsert_updates_session_and_store() {
        let dir = TempDir::new().unwrap();
        let flags = flags(dir.path().join("store"));
        let mut ctx = AppContext::init(MentorConfig::default(), &flags).await.unwrap();

        let record =
            InsightRecord::new("new-1", Some("giai-tich-12"), "Weak: limits", NodeKind::Concept);
        upsert(&mut ctx, &[record], &flags).unwrap();

        let tree = ctx.merged_tree();
        assert_eq!(
            traverse::parent_of(&tree, "new-1").map(|p| p.id.as_str()),
            Some("giai-tich-12")
        );

        let reopened = AppContext::init(MentorConfig::default(), &flags).await.unwrap();
        assert_eq!(reopened.insights, ctx.insights);
    }

    #[tokio::test]
    async fn failed_write_still_updates_session() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();
        let flags = flags(blocker.join("store"));
        let mut ctx = AppContext::init(MentorConfig::default(), &flags).await.unwrap();

        let record = InsightRecord::new("new-1", None, "Orphan", NodeKind::Concept);
        upsert(&mut ctx, &[record], &flags).unwrap();

        assert_eq!(ctx.insights.len(), 1);
        assert!(traverse::contains(&ctx.merged_tree(), "new-1"));
    }
}
