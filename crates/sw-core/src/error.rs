use thiserror::Error;

/// Alias for `Result<T, StoryError>`.
pub type StoryResult<T> = Result<T, StoryError>;

/// Errors that can occur while reading or writing a story.
#[derive(Debug, Error)]
pub enum StoryError {
    /// The source is not valid JSON, or does not match the story file shape.
    #[error("invalid story file: {0}")]
    Json(#[from] serde_json::Error),
}
