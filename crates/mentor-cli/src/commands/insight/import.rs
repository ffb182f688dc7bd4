use std::path::Path;

use anyhow::Context;
use mentor_core::entities::InsightRecord;

/// Read a JSON array of insight records for `mentor insight import`.
pub async fn read_records(path: &Path) -> anyhow::Result<Vec<InsightRecord>> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read insights file {}", path.display()))?;
    parse_records(&raw).with_context(|| format!("invalid insights file {}", path.display()))
}

fn parse_records(raw: &str) -> anyhow::Result<Vec<InsightRecord>> {
    let records: Vec<InsightRecord> = serde_json::from_str(raw)?;
    if let Some(blank) = records.iter().position(|r| r.node_id.trim().is_empty()) {
        anyhow::bail!("record {blank} has an empty nodeId");
    }
    Ok(records)
}
