//! # mentor-core
//!
//! Core types, mastery policy, and error types for MathMentor.
//!
//! This crate provides the foundational types shared across all MathMentor crates:
//! - Entity structs for the knowledge map (nodes, insights, progress entries)
//! - Node kind and mastery status enums
//! - The single three-tier mastery policy used by every presentation surface
//! - Cross-cutting error types
//! - CLI response types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod mastery;
pub mod responses;
