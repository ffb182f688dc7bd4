//! Central schema registry for all MathMentor types.
//!
//! The `SchemaRegistry` builds JSON Schemas from mentor-core types at
//! construction time using [`schemars::schema_for!`] and validates with
//! `jsonschema`.

use std::collections::HashMap;

use schemars::schema_for;

use crate::error::SchemaError;

/// Schema name of a single persisted insight record.
pub const INSIGHT_RECORD: &str = "insight_record";

/// Central store of all JSON Schemas in the MathMentor system.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
}

/// Insert a schema into the map, converting the `schemars` output to a
/// `serde_json::Value`. A conversion failure leaves the name unregistered.
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        if let Ok(value) = serde_json::to_value(schema_for!($ty)) {
            $map.insert($name, value);
        }
    };
}

impl SchemaRegistry {
    /// Build a new registry containing all entity and response schemas.
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        // --- Entity types (3) ---
        register!(
            schemas,
            "knowledge_node",
            mentor_core::entities::KnowledgeNode
        );
        register!(schemas, INSIGHT_RECORD, mentor_core::entities::InsightRecord);
        register!(
            schemas,
            "progress_entry",
            mentor_core::entities::ProgressEntry
        );

        // --- Persisted insight document (1) ---
        register!(
            schemas,
            "insight_document",
            Vec<mentor_core::entities::InsightRecord>
        );

        // --- CLI response types (2) ---
        register!(
            schemas,
            "insight_upsert_response",
            mentor_core::responses::InsightUpsertResponse
        );
        register!(
            schemas,
            "mastery_summary",
            mentor_core::responses::MasterySummary
        );

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Generation(format!("{e}")))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// List all registered schema names.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
