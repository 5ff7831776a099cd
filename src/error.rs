use thiserror::Error;

pub type Result<T> = std::result::Result<T, CinemapError>;

#[derive(Error, Debug)]
pub enum CinemapError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),

    #[error("Invalid coordinate format: {0}")]
    InvalidCoordinate(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),
}
