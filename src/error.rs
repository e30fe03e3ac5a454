//! Error type for violated statistical preconditions.

use thiserror::Error;

/// Invalid statistical preconditions.
///
/// Every numeric routine in this crate reports its failures through this type. None of them are
/// transient, so callers should surface them rather than retry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("{what} requires at least {required} observations, got {actual}")]
    InsufficientSamples {
        what: &'static str,
        required: usize,
        actual: usize,
    },

    #[error("degrees of freedom must be positive, got {0}")]
    NonPositiveDegreesOfFreedom(f64),

    #[error("samples must have equal length ({left} != {right})")]
    LengthMismatch { left: usize, right: usize },

    #[error("alpha must lie strictly between 0 and 1, got {0}")]
    InvalidAlpha(f64),

    #[error("invalid proportion: {0}")]
    InvalidProportion(String),

    #[error("invalid design matrix: {0}")]
    InvalidDesign(String),

    #[error("design matrix is singular")]
    Singular,

    #[error("observation {index} cannot be represented as f64")]
    NonNumeric { index: usize },

    #[error("distribution rejected its parameters: {0}")]
    Distribution(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
