//! Error types for the counter fetch pipeline

use thiserror::Error;

/// Errors from one fetch-and-parse cycle against the iRaiser counter.
///
/// Both variants are absorbed by the refresh loop: the failed attempt is
/// logged and the previous snapshot stays authoritative.
#[derive(Debug, Error)]
pub enum CounterError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("invalid counter payload: {0}")]
    Parse(#[from] serde_json::Error),
}
