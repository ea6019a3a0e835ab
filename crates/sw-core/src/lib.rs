//! Core types for Scheideweg: scenes, choices, and the story graph.
//!
//! This crate defines the data model that players walk through. It is
//! independent of any frontend — you can construct a [`Story`] programmatically
//! or deserialize one from JSON.

/// Structural validation of story graphs.
pub mod audit;
/// Error types used throughout the crate.
pub mod error;
/// Scene nodes, choices, and identifiers.
pub mod scene;
/// The story container that owns scenes and metadata.
pub mod story;

/// Re-export audit types.
pub use audit::{AuditReport, Caution, Defect};
/// Re-export error types.
pub use error::{StoryError, StoryResult};
/// Re-export scene types.
pub use scene::{Choice, Scene, SceneId};
/// Re-export story types.
pub use story::{Story, StoryMeta};
