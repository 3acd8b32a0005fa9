//! Error type for the fallible edges of the crate (file loading, date parsing)
//!
//! The accrual and bracket calculations themselves are total and never return errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid development pattern for '{claim_type}': {reason}")]
    InvalidPattern { claim_type: String, reason: String },

    #[error("Invalid risk factor for '{risk_level}': {factor}")]
    InvalidRiskFactor { risk_level: String, factor: f64 },

    #[error("Invalid date '{value}' (expected YYYY-MM-DD): {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
