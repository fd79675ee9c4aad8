use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API returned status {status}: {body}")]
    Server { status: u16, body: String },
}

/// A failed entity operation
///
/// Carries the underlying request error and, for update/delete, the
/// prior entity state so the caller can apply a compensating rollback.
#[derive(Debug, Error)]
#[error("{source}")]
pub struct ActionError {
    #[source]
    pub source: RequestError,
    pub rollback: Option<Value>,
}

impl ActionError {
    pub fn new(source: RequestError) -> Self {
        Self {
            source,
            rollback: None,
        }
    }

    pub fn with_rollback(source: RequestError, rollback: Option<Value>) -> Self {
        Self { source, rollback }
    }
}
