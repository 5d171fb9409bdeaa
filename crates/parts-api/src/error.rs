use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("HTTP client error: {0}")]
    Http(Box<dyn std::error::Error + Send + Sync>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("upstream rejected the update: {0}")]
    Api(String),

    /// The edit restructured sentences (moved words, created synthetic
    /// sentences, or set pending-move markers); the word-level endpoint
    /// cannot express that. Retry with the whole-part strategy.
    #[error("edit has structural changes; use the whole-part save")]
    RequiresFullSave,
}
