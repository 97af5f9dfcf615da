use thiserror::Error;

#[derive(Error, Debug)]
pub enum InsightError {
    #[error("Forecast unavailable: {details}")]
    ForecastUnavailable { details: String },

    #[error("Invalid budget rule for '{category}': {details}")]
    InvalidBudgetRule { category: String, details: String },

    #[error("Invalid transaction at index {index}: {details}")]
    InvalidTransaction { index: usize, details: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, InsightError>;
