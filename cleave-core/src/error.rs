//! Error types for the segmentation core

use thiserror::Error;

/// Errors raised while segmenting and encoding text
///
/// Segmentation itself never fails: malformed or empty input simply yields
/// zero words. The only runtime failures come from the output sink and from
/// configuration.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Writing encoded output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Strategy name not recognised
    #[error("unknown segmentation strategy '{0}' (expected 'unicode' or 'whitespace')")]
    UnknownStrategy(String),

    /// Configuration rejected during validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
