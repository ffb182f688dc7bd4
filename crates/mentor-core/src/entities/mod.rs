//! Entity structs for the MathMentor knowledge map.
//!
//! Field names serialize in camelCase to match the documents the web client
//! persists (`nodeId`, `parentNodeId`, `maxScore`, ...). All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip and schema
//! validation.

mod insight;
mod knowledge_node;
mod progress;

pub use insight::{DEFAULT_HIGHLIGHT_COLOR, InsightRecord};
pub use knowledge_node::KnowledgeNode;
pub use progress::ProgressEntry;
