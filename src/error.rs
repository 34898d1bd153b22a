//! Error types for effect-size computation
//!
//! Provides a single error type shared by the sample statistics and the
//! Cohen's d computation.

use thiserror::Error;

/// Error type for effect-size operations
#[derive(Error, Debug)]
pub enum Error {
    /// Sample has too few observations for the requested statistic
    #[error("Insufficient data: expected at least {expected} observations, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The result is mathematically undefined for the given samples
    #[error("Domain error: {0}")]
    Domain(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidInput(format!("{context} contains NaN or infinite values"))
    }

    /// Create an error for a non-positive pooled variance
    pub fn degenerate_variance(pooled: f64) -> Self {
        Self::Domain(format!(
            "pooled variance {pooled} is not positive; Cohen's d is undefined"
        ))
    }
}
