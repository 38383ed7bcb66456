use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("todo {0} not found")]
    NotFound(i64),

    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },
}
