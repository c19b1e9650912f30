use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalcError {
    #[error("Supplement not found: {0}")]
    SupplementNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Too many combinations: {count} exceeds the limit of {limit}")]
    TooManyCombinations { count: u64, limit: u64 },
}

pub type Result<T> = std::result::Result<T, CalcError>;
