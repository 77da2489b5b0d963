use thiserror::Error;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Failed to write record: {0}")]
    StorageWriteError(String),

    #[error("Failed to read records: {0}")]
    StorageReadError(String),

    #[error("Failed to publish notification: {0}")]
    NotificationError(String),

    #[error("Failed to parse request: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl From<serde_json::Error> for BoardError {
    fn from(error: serde_json::Error) -> Self {
        BoardError::ParseError(error.to_string())
    }
}
