use thiserror::Error;

/// Errors that can occur when decoding a reserves list payload.
#[derive(Debug, Error)]
pub enum EnvelopeError {
    #[error("invalid reserves payload: {0}")]
    Json(#[from] serde_json::Error),
}
