// crates/core/src/error.rs
use thiserror::Error;

/// Failures a filter can hit while streaming between its standard handles.
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("Failed to read input: {0}")]
    Read(#[source] std::io::Error),

    #[error("Failed to write output: {0}")]
    Write(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FilterError>;
