//! Error types for resistor-code

use thiserror::Error;

/// Conversion errors
///
/// Everything except `Internal` is an input validation failure: the value
/// could not be converted and nothing was coerced. `Internal` means a computed
/// digit or multiplier fell outside its table, which is a bug in the encoder.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResistorError {
    #[error("Invalid resistance value: {0}")]
    InvalidValue(String),

    #[error("Invalid tolerance: {0}")]
    InvalidTolerance(String),

    #[error("Invalid band count: {0} (expected 4 or 5)")]
    InvalidBandCount(u8),

    #[error("Unknown color: {0}")]
    InvalidColor(String),

    #[error("Invalid band position: {0}")]
    InvalidPosition(String),

    #[error("Internal invariant violated: {0}")]
    Internal(String),
}

impl ResistorError {
    pub fn invalid_value(msg: impl Into<String>) -> Self {
        Self::InvalidValue(msg.into())
    }

    pub fn invalid_tolerance(msg: impl Into<String>) -> Self {
        Self::InvalidTolerance(msg.into())
    }

    pub fn invalid_color(name: impl Into<String>) -> Self {
        Self::InvalidColor(name.into())
    }

    pub fn invalid_position(msg: impl Into<String>) -> Self {
        Self::InvalidPosition(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// True for caller-side input problems, false for engine defects
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::Internal(_))
    }
}

pub type Result<T> = std::result::Result<T, ResistorError>;
