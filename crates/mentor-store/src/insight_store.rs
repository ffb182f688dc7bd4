//! Persisted collection of insight records.
//!
//! The whole collection is one JSON array stored under a single versioned
//! key. Records are keyed by `node_id`; writing a record whose id already
//! exists replaces it in place, anything else is appended.

use mentor_core::entities::InsightRecord;
use mentor_schema::SchemaRegistry;
use mentor_schema::registry::INSIGHT_RECORD;

use crate::KeyValueStorage;

/// Storage key used when none is configured.
pub const DEFAULT_KEY: &str = "mathmentor.insights.v1";

/// Result of [`InsightStore::upsert`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpsertOutcome {
    /// The merged collection. Reflects the upsert even when `written` is false,
    /// so callers can keep the session state consistent.
    pub records: Vec<InsightRecord>,
    /// Ids appended by this call, in order.
    pub added: Vec<String>,
    /// Ids whose existing record was replaced, in order.
    pub replaced: Vec<String>,
    /// Whether the merged collection reached the storage backend.
    pub written: bool,
}

/// `load`/`save`/`upsert` of insight records over any [`KeyValueStorage`].
pub struct InsightStore<S> {
    storage: S,
    key: String,
    schemas: SchemaRegistry,
}

impl<S: KeyValueStorage> InsightStore<S> {
    /// Create a store using [`DEFAULT_KEY`].
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            schemas: SchemaRegistry::new(),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Current persisted records.
    ///
    /// Absent, unreadable, or unparsable documents yield an empty collection.
    #[must_use]
    pub fn load(&self) -> Vec<InsightRecord> {
        let raw = match self.storage.read(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!(key = %self.key, "no insight document stored");
                return Vec::new();
            }
            Err(error) => {
                tracing::warn!(key = %self.key, %error, "failed to read insight document; treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<InsightRecord>>(&raw) {
            Ok(records) => records,
            Err(error) => {
                tracing::warn!(key = %self.key, %error, "corrupt insight document; treating as empty");
                Vec::new()
            }
        }
    }

    /// Overwrite the persisted collection with exactly `records`.
    ///
    /// Returns whether the write reached the backend. Failures are logged,
    /// never returned as errors.
    pub fn save(&self, records: &[InsightRecord]) -> bool {
        self.warn_on_invalid(records);

        let document = match serde_json::to_string(records) {
            Ok(document) => document,
            Err(error) => {
                tracing::warn!(key = %self.key, %error, "failed to serialize insight document");
                return false;
            }
        };

        match self.storage.write(&self.key, &document) {
            Ok(()) => true,
            Err(error) => {
                tracing::warn!(
                    key = %self.key,
                    %error,
                    records = records.len(),
                    "failed to persist insights; changes will not survive a reload"
                );
                false
            }
        }
    }

    /// Merge `new_records` into the persisted collection by `node_id`, then save.
    ///
    /// Existing ids keep their position and take the new record; unknown ids
    /// append. An empty `new_records` performs no write.
    pub fn upsert(&self, new_records: &[InsightRecord]) -> UpsertOutcome {
        let mut records = self.load();
        if new_records.is_empty() {
            return UpsertOutcome {
                records,
                ..UpsertOutcome::default()
            };
        }

        let mut added = Vec::new();
        let mut replaced = Vec::new();
        for record in new_records {
            if let Some(existing) = records.iter_mut().find(|r| r.node_id == record.node_id) {
                existing.clone_from(record);
                if !added.contains(&record.node_id) && !replaced.contains(&record.node_id) {
                    replaced.push(record.node_id.clone());
                }
            } else {
                records.push(record.clone());
                added.push(record.node_id.clone());
            }
        }

        let written = self.save(&records);
        tracing::debug!(
            key = %self.key,
            added = added.len(),
            replaced = replaced.len(),
            written,
            "upserted insights"
        );

        UpsertOutcome {
            records,
            added,
            replaced,
            written,
        }
    }

    /// Schema validation is warn-only: a record that fails it is still stored.
    fn warn_on_invalid(&self, records: &[InsightRecord]) {
        for record in records {
            let Ok(value) = serde_json::to_value(record) else {
                continue;
            };
            if let Err(error) = self.schemas.validate(INSIGHT_RECORD, &value) {
                tracing::warn!(node_id = %record.node_id, %error, "insight record failed schema validation");
            }
        }
    }
}
