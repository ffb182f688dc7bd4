use std::borrow::Cow;
use std::path::Path;

use anyhow::Context;
use mentor_config::MentorConfig;
use mentor_core::entities::{InsightRecord, KnowledgeNode};
use mentor_map::{ProgressOverlay, TreeMerger, curriculum};
use mentor_store::{FileStorage, InsightStore};

use crate::cli::GlobalFlags;

/// Everything a command needs: the static tree, the session's insights,
/// and the progress overlay.
pub struct AppContext {
    pub config: MentorConfig,
    pub store: InsightStore<FileStorage>,
    pub base: KnowledgeNode,
    /// Session view of the store. Kept current by `insight add/import`
    /// even when the write fails.
    pub insights: Vec<InsightRecord>,
    pub progress: ProgressOverlay,
    pub merger: TreeMerger,
}

impl AppContext {
    /// Load the tree, then the insight store and progress overlay concurrently.
    ///
    /// Only an unreadable or invalid `--tree` file is fatal; the store and the
    /// overlay degrade to empty.
    pub async fn init(config: MentorConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let base = match &flags.tree {
            Some(path) => load_tree(path).await?,
            None => curriculum::grade_12(),
        };

        let store_dir = flags
            .store_dir
            .clone()
            .unwrap_or_else(|| config.store.resolved_dir());
        let store = InsightStore::with_key(FileStorage::new(store_dir), config.store.key.clone());

        let (insights, progress) = tokio::join!(
            async { store.load() },
            load_progress(flags.progress.as_deref())
        );

        tracing::debug!(
            insights = insights.len(),
            progress_entries = progress.len(),
            "application context ready"
        );

        let merger = TreeMerger::new(config.mindmap.highlight_color.clone());
        Ok(Self {
            config,
            store,
            base,
            insights,
            progress,
            merger,
        })
    }

    /// The static tree with the session's insights merged in.
    #[must_use]
    pub fn merged_tree(&self) -> Cow<'_, KnowledgeNode> {
        self.merger.merge(&self.base, &self.insights)
    }
}

async fn load_tree(path: &Path) -> anyhow::Result<KnowledgeNode> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read knowledge tree {}", path.display()))?;
    let tree = curriculum::from_json_str(&raw)
        .with_context(|| format!("invalid knowledge tree {}", path.display()))?;
    curriculum::validate(&tree)
        .with_context(|| format!("invalid knowledge tree {}", path.display()))?;
    Ok(tree)
}

/// A missing flag, an unreadable file, or a malformed document all mean
/// "no progress yet".
async fn load_progress(path: Option<&Path>) -> ProgressOverlay {
    let Some(path) = path else {
        return ProgressOverlay::new();
    };

    match tokio::fs::read_to_string(path).await {
        Ok(raw) => ProgressOverlay::parse_or_empty(&raw),
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "progress overlay unreadable; treating as empty");
            ProgressOverlay::new()
        }
    }
}
