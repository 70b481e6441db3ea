use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown study kind: {0}")]
    UnknownStudyKind(String),

    #[error("unexpected format: {0}")]
    Unexpected(String),
}

pub type Result<T> = std::result::Result<T, ParseError>;
