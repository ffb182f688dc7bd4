//! # mentor-schema
//!
//! JSON Schema generation, validation, and registry for MathMentor.
//!
//! Entity types are defined in `mentor-core` with `#[derive(JsonSchema)]`.
//! This crate imports those types and provides the registry and validation
//! layer. `mentor-store` validates insight documents on write (warn-only) and
//! `mentor-cli` exports schemas through `mentor schema`.

pub mod error;
pub mod registry;

pub use error::SchemaError;
pub use registry::SchemaRegistry;
