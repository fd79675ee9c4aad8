use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolchainError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Toolchain server returned status {status}: {body}")]
    Server { status: u16, body: String },
}
