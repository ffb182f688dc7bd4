//! # mentor-map
//!
//! The knowledge map pipeline:
//!
//! ```text
//! curriculum ──┐
//!              ├─ merge ─→ augmented tree ─→ view::{radial, outline, detail}
//! insights ────┘                                   ↑
//!                                      progress overlay (joined by node id)
//! ```
//!
//! Everything here is synchronous and pure: loading insights and progress
//! happens in the callers (`mentor-store`, `mentor-cli`).

pub mod curriculum;
pub mod error;
pub mod merge;
pub mod progress;
pub mod traverse;
pub mod view;

pub use error::TreeError;
pub use merge::{TreeMerger, merge_insights};
pub use progress::ProgressOverlay;
