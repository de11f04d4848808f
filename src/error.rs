//! # Error Types
//!
//! This module defines the error type returned by the optimizer. Every failure
//! is surfaced to the caller eagerly: a generation either completes fully or the
//! run aborts with one of these variants.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use genopt::error::{OptimizerError, Result};
//!
//! fn check_keep(keep: usize) -> Result<()> {
//!     if keep < 2 {
//!         return Err(OptimizerError::InvalidConfiguration(
//!             "keep must be at least 2".to_string(),
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_keep(1).is_err());
//! assert!(check_keep(2).is_ok());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use genopt::error::{OptimizerError, OptionExt};
//!
//! fn best_value(values: &[i32]) -> genopt::error::Result<i32> {
//!     values.iter().max().cloned().ok_or_else_optimizer(||
//!         OptimizerError::EmptyHistory
//!     )
//! }
//! ```

use thiserror::Error;

/// Represents errors that can occur while running the optimizer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OptimizerError {
    /// The run parameters are malformed, e.g. `keep < 2` or `pop_size < keep`.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The objective broke its contract, e.g. `make_legal` changed the
    /// dimension of a point or no legal point could be sampled.
    #[error("Objective contract violation: {0}")]
    ObjectiveContractViolation(String),

    /// A run finished without recording a single generation.
    #[error("No generation was recorded")]
    EmptyHistory,
}

/// A specialized Result type for optimizer operations.
pub type Result<T> = std::result::Result<T, OptimizerError>;

/// Extension trait for Option to convert to Result with a custom error.
///
/// ## Examples
///
/// ```rust
/// use genopt::error::{OptimizerError, OptionExt};
///
/// let empty: Option<f64> = None;
/// let result = empty.ok_or_else_optimizer(|| OptimizerError::EmptyHistory);
/// assert_eq!(result, Err(OptimizerError::EmptyHistory));
/// ```
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, OptimizerError>` using a
    /// closure to generate the error.
    fn ok_or_else_optimizer<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> OptimizerError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_optimizer<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> OptimizerError,
    {
        self.ok_or_else(err_fn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = OptimizerError::InvalidConfiguration("keep must be at least 2".to_string());
        assert_eq!(err.to_string(), "Invalid configuration: keep must be at least 2");

        let err = OptimizerError::ObjectiveContractViolation("wrong length".to_string());
        assert_eq!(err.to_string(), "Objective contract violation: wrong length");
    }

    #[test]
    fn test_option_ext() {
        assert_eq!(Some(3).ok_or_else_optimizer(|| OptimizerError::EmptyHistory), Ok(3));
        assert_eq!(
            None::<i32>.ok_or_else_optimizer(|| OptimizerError::EmptyHistory),
            Err(OptimizerError::EmptyHistory)
        );
    }
}
