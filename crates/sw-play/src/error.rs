//! Error types for the traversal engine.

use sw_core::SceneId;
use thiserror::Error;

/// Result type for play operations.
pub type PlayResult<T> = Result<T, PlayError>;

/// Errors that can occur during a playthrough.
#[derive(Debug, Error)]
pub enum PlayError {
    /// A scene id was referenced that the story does not contain.
    #[error("missing scene {0}")]
    SceneNotFound(SceneId),
}
