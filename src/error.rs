//! Error types for the brent_dashboard crate

use thiserror::Error;

/// Custom error types for the brent_dashboard crate
#[derive(Debug, Error)]
pub enum DashboardError {
    /// The source table could not be retrieved or located in the document
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// A date or price cell failed to parse during normalization
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Forecasting was requested on an empty series
    #[error("Price series is empty")]
    EmptySeries,

    /// The series is shorter than the requested training window
    #[error("Insufficient history: {required} observations required, {actual} available")]
    InsufficientHistory { required: usize, actual: usize },

    /// Error from invalid parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, DashboardError>;

impl From<reqwest::Error> for DashboardError {
    fn from(err: reqwest::Error) -> Self {
        DashboardError::Fetch(err.to_string())
    }
}
