//! Error handling for the checked API
//!
//! The kernels themselves are infallible: numeric overflow saturates and
//! broken preconditions are debug assertions. These errors are produced only
//! by constructors, configuration and the `try_*` entry points, which check
//! caller-supplied shapes before handing them to a kernel.

#![allow(missing_docs)]

use std::fmt;
use thiserror::Error;

/// Result type alias for checked operations
pub type Result<T> = std::result::Result<T, DspError>;

/// Errors reported by the checked API
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DspError {
    /// Filter order outside `1..=max`
    #[error("Invalid LPC order: {order} (supported: 1-{max})")]
    InvalidOrder { order: usize, max: usize },

    /// Shared coefficient exponent would require a left shift on input
    #[error("Invalid coefficient exponent: {exponent} (must be in -1..=30)")]
    InvalidCoefficientExponent { exponent: i32 },

    /// Coefficient slice does not match the configured order
    #[error("Coefficient count mismatch: expected {expected}, got {actual}")]
    CoefficientCountMismatch { expected: usize, actual: usize },

    /// State buffer shorter than the filter order
    #[error("State buffer too small: need {needed} words, got {actual}")]
    StateSizeMismatch { needed: usize, actual: usize },

    /// Rotating state index outside `[0, order)`
    #[error("State index {index} out of range for order {order}")]
    StateIndexOutOfRange { index: usize, order: usize },

    /// Zero-length signal passed to a filter
    #[error("Signal buffer is empty")]
    EmptySignal,

    /// Sample increment other than +1 or -1
    #[error("Invalid sample increment: {increment} (must be +1 or -1)")]
    InvalidIncrement { increment: i32 },

    /// Number of channel buffers differs from the number of filters
    #[error("Channel count mismatch: {filters} filters, {buffers} buffers")]
    ChannelCountMismatch { filters: usize, buffers: usize },

    /// Inconsistent configuration
    #[error("Invalid configuration: {details}")]
    InvalidConfig { details: String },
}

impl DspError {
    /// Create a new invalid configuration error
    pub fn invalid_config(details: impl Into<String>) -> Self {
        Self::InvalidConfig {
            details: details.into(),
        }
    }

    /// Check if the caller can retry with corrected input on the same filter
    pub fn is_recoverable(&self) -> bool {
        match self {
            // Per-call shape problems leave filter state untouched
            Self::EmptySignal
            | Self::ChannelCountMismatch { .. }
            | Self::StateSizeMismatch { .. }
            | Self::StateIndexOutOfRange { .. } => true,

            Self::InvalidOrder { .. }
            | Self::InvalidCoefficientExponent { .. }
            | Self::CoefficientCountMismatch { .. }
            | Self::InvalidIncrement { .. }
            | Self::InvalidConfig { .. } => false,
        }
    }

    /// Get the error category
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidOrder { .. }
            | Self::InvalidCoefficientExponent { .. }
            | Self::CoefficientCountMismatch { .. }
            | Self::InvalidIncrement { .. }
            | Self::InvalidConfig { .. } => ErrorCategory::Configuration,

            Self::StateSizeMismatch { .. } | Self::StateIndexOutOfRange { .. } => {
                ErrorCategory::State
            }

            Self::EmptySignal | Self::ChannelCountMismatch { .. } => ErrorCategory::Processing,
        }
    }
}

/// Error category for grouping related errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Order, exponent and coefficient errors
    Configuration,
    /// Filter state shape errors
    State,
    /// Per-call buffer errors
    Processing,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration => write!(f, "Configuration"),
            Self::State => write!(f, "State"),
            Self::Processing => write!(f, "Processing"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = DspError::invalid_config("test message");
        assert!(matches!(err, DspError::InvalidConfig { .. }));
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn test_error_recoverability() {
        assert!(DspError::EmptySignal.is_recoverable());
        assert!(!DspError::InvalidOrder { order: 0, max: 16 }.is_recoverable());
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(
            DspError::StateIndexOutOfRange { index: 5, order: 5 }.category(),
            ErrorCategory::State
        );
        assert_eq!(DspError::EmptySignal.category(), ErrorCategory::Processing);
        assert_eq!(
            DspError::CoefficientCountMismatch { expected: 4, actual: 3 }.category(),
            ErrorCategory::Configuration
        );
    }

    #[test]
    fn test_error_display() {
        let err = DspError::InvalidOrder { order: 17, max: 16 };
        let display = format!("{}", err);
        assert!(display.contains("17"));
        assert!(display.contains("1-16"));
        assert_eq!(format!("{}", ErrorCategory::State), "State");
    }
}
