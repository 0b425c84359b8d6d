use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(serde_json::Error),

    #[error("Timestamp out of range: {0}")]
    InvalidTimestamp(i64),

    #[error("Unknown record: {0}")]
    UnknownRecord(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        log::error!("HTTP error: {}", error);
        AppError::Http(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        log::error!("Serialization error: {}", error);
        AppError::Serialization(error)
    }
}

impl AppError {
    pub fn invalid_record(message: impl Into<String>) -> Self {
        AppError::InvalidRecord(message.into())
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, AppError::Http(_))
    }
}
