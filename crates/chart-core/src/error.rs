// File: crates/chart-core/src/error.rs
// Summary: Error types for series validation, normalization and history fetches.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    /// Fewer than two samples; the chart shows its "no data" placeholder.
    #[error("series has {len} sample(s); at least 2 are needed to draw a line")]
    InsufficientData { len: usize },

    /// Every value is identical so the padded range collapses.
    #[error("series is flat at {value}; value range is empty")]
    FlatSeries { value: f64 },

    #[error("sample {index} is not after the previous timestamp")]
    UnorderedSamples { index: usize },

    #[error("sample {index} has a non-finite value")]
    NonFiniteValue { index: usize },

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Failure of the async history load that backs a period switch.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("not authorized to read history for client '{0}'")]
    Unauthorized(String),

    #[error("history payload rejected: {0}")]
    Invalid(#[from] ChartError),
}
