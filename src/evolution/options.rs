//! # OptimizerOptions
//!
//! The `OptimizerOptions` struct holds the parameters of one optimization run:
//! population size, survivors kept per generation, the generation cap, the
//! mutation rate and the convergence gap, plus the logging level and the cap on
//! initial-population resampling.
//!
//! ## Example
//!
//! ```rust
//! use genopt::evolution::options::{LogLevel, OptimizerOptions};
//!
//! // Positional constructor
//! let options = OptimizerOptions::new(20, 5, 50, 0.05, 1e-6);
//! assert!(options.validate().is_ok());
//!
//! // Fluent builder
//! let options = OptimizerOptions::builder()
//!     .pop_size(100)
//!     .keep(50)
//!     .max_iterations(300)
//!     .mutation_rate(0.3)
//!     .convergence_gap(0.0)
//!     .log_level(LogLevel::None)
//!     .build();
//! assert_eq!(options.get_keep(), 50);
//! ```
//!
//! ## Validation
//!
//! `validate` rejects `keep < 2`, `pop_size < keep`, `max_iterations < 1`, a
//! mutation rate outside `[0, 1]`, a negative or NaN convergence gap, and a
//! zero resampling cap. An infinite gap is allowed and stops every run after
//! its second generation.

use crate::error::{OptimizerError, Result};

/// Default number of draws allowed per initial candidate before the objective
/// is declared unable to produce a legal point.
pub const DEFAULT_MAX_INIT_ATTEMPTS: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LogLevel {
    /// Per-generation progress plus initialization and mutation details.
    Verbose,
    /// One progress line per generation.
    Minimal,
    None,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimizerOptions {
    pop_size: usize,
    keep: usize,
    max_iterations: usize,
    mutation_rate: f64,
    convergence_gap: f64,
    log_level: LogLevel,
    /// Draws allowed per initial candidate before giving up.
    max_init_attempts: usize,
}

impl OptimizerOptions {
    pub fn new(
        pop_size: usize,
        keep: usize,
        max_iterations: usize,
        mutation_rate: f64,
        convergence_gap: f64,
    ) -> Self {
        Self {
            pop_size,
            keep,
            max_iterations,
            mutation_rate,
            convergence_gap,
            log_level: LogLevel::Minimal,
            max_init_attempts: DEFAULT_MAX_INIT_ATTEMPTS,
        }
    }

    pub fn get_pop_size(&self) -> usize {
        self.pop_size
    }

    pub fn get_keep(&self) -> usize {
        self.keep
    }

    pub fn get_max_iterations(&self) -> usize {
        self.max_iterations
    }

    pub fn get_mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    pub fn get_convergence_gap(&self) -> f64 {
        self.convergence_gap
    }

    pub fn get_log_level(&self) -> &LogLevel {
        &self.log_level
    }

    pub fn get_max_init_attempts(&self) -> usize {
        self.max_init_attempts
    }

    pub fn set_pop_size(&mut self, pop_size: usize) {
        self.pop_size = pop_size;
    }

    pub fn set_keep(&mut self, keep: usize) {
        self.keep = keep;
    }

    pub fn set_max_iterations(&mut self, max_iterations: usize) {
        self.max_iterations = max_iterations;
    }

    pub fn set_mutation_rate(&mut self, mutation_rate: f64) {
        self.mutation_rate = mutation_rate;
    }

    pub fn set_convergence_gap(&mut self, convergence_gap: f64) {
        self.convergence_gap = convergence_gap;
    }

    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    pub fn set_max_init_attempts(&mut self, max_init_attempts: usize) {
        self.max_init_attempts = max_init_attempts;
    }

    /// Checks the run parameters.
    ///
    /// # Errors
    ///
    /// Returns `OptimizerError::InvalidConfiguration` naming the first
    /// offending parameter.
    pub fn validate(&self) -> Result<()> {
        if self.keep < 2 {
            return Err(OptimizerError::InvalidConfiguration(format!(
                "keep must be at least 2, got {}",
                self.keep
            )));
        }

        if self.pop_size < self.keep {
            return Err(OptimizerError::InvalidConfiguration(format!(
                "pop_size ({}) must not be smaller than keep ({})",
                self.pop_size, self.keep
            )));
        }

        if self.max_iterations < 1 {
            return Err(OptimizerError::InvalidConfiguration(
                "max_iterations must be at least 1".to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(OptimizerError::InvalidConfiguration(format!(
                "mutation_rate must lie in [0, 1], got {}",
                self.mutation_rate
            )));
        }

        if self.convergence_gap.is_nan() || self.convergence_gap < 0.0 {
            return Err(OptimizerError::InvalidConfiguration(format!(
                "convergence_gap must be non-negative, got {}",
                self.convergence_gap
            )));
        }

        if self.max_init_attempts == 0 {
            return Err(OptimizerError::InvalidConfiguration(
                "max_init_attempts must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Returns a builder for creating an `OptimizerOptions` instance.
    pub fn builder() -> OptimizerOptionsBuilder {
        OptimizerOptionsBuilder::default()
    }
}

impl Default for OptimizerOptions {
    fn default() -> Self {
        Self::new(20, 5, 100, 0.05, 1e-6)
    }
}

/// Builder for `OptimizerOptions`.
///
/// Unset fields fall back to `OptimizerOptions::default()`.
#[derive(Debug, Clone, Default)]
pub struct OptimizerOptionsBuilder {
    pop_size: Option<usize>,
    keep: Option<usize>,
    max_iterations: Option<usize>,
    mutation_rate: Option<f64>,
    convergence_gap: Option<f64>,
    log_level: Option<LogLevel>,
    max_init_attempts: Option<usize>,
}

impl OptimizerOptionsBuilder {
    pub fn pop_size(mut self, value: usize) -> Self {
        self.pop_size = Some(value);
        self
    }

    pub fn keep(mut self, value: usize) -> Self {
        self.keep = Some(value);
        self
    }

    pub fn max_iterations(mut self, value: usize) -> Self {
        self.max_iterations = Some(value);
        self
    }

    pub fn mutation_rate(mut self, value: f64) -> Self {
        self.mutation_rate = Some(value);
        self
    }

    pub fn convergence_gap(mut self, value: f64) -> Self {
        self.convergence_gap = Some(value);
        self
    }

    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    pub fn max_init_attempts(mut self, value: usize) -> Self {
        self.max_init_attempts = Some(value);
        self
    }

    /// Builds the `OptimizerOptions` instance. Validation happens when the
    /// options are used, or explicitly through `OptimizerOptions::validate`.
    pub fn build(self) -> OptimizerOptions {
        let defaults = OptimizerOptions::default();
        OptimizerOptions {
            pop_size: self.pop_size.unwrap_or(defaults.pop_size),
            keep: self.keep.unwrap_or(defaults.keep),
            max_iterations: self.max_iterations.unwrap_or(defaults.max_iterations),
            mutation_rate: self.mutation_rate.unwrap_or(defaults.mutation_rate),
            convergence_gap: self.convergence_gap.unwrap_or(defaults.convergence_gap),
            log_level: self.log_level.unwrap_or(defaults.log_level),
            max_init_attempts: self.max_init_attempts.unwrap_or(defaults.max_init_attempts),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invalid(options: OptimizerOptions, needle: &str) {
        match options.validate() {
            Err(OptimizerError::InvalidConfiguration(msg)) => {
                assert!(msg.contains(needle), "unexpected message: {}", msg)
            }
            other => panic!("Expected InvalidConfiguration, got {:?}", other),
        }
    }

    #[test]
    fn test_default_is_valid() {
        assert!(OptimizerOptions::default().validate().is_ok());
    }

    #[test]
    fn test_keep_boundary() {
        assert_invalid(OptimizerOptions::new(10, 1, 10, 0.1, 0.0), "keep");
        assert!(OptimizerOptions::new(10, 2, 10, 0.1, 0.0).validate().is_ok());
    }

    #[test]
    fn test_pop_size_smaller_than_keep() {
        assert_invalid(OptimizerOptions::new(4, 5, 10, 0.1, 0.0), "pop_size");
        assert!(OptimizerOptions::new(5, 5, 10, 0.1, 0.0).validate().is_ok());
    }

    #[test]
    fn test_zero_iterations() {
        assert_invalid(OptimizerOptions::new(10, 5, 0, 0.1, 0.0), "max_iterations");
    }

    #[test]
    fn test_mutation_rate_range() {
        assert_invalid(OptimizerOptions::new(10, 5, 10, -0.1, 0.0), "mutation_rate");
        assert_invalid(OptimizerOptions::new(10, 5, 10, 1.1, 0.0), "mutation_rate");
        assert_invalid(OptimizerOptions::new(10, 5, 10, f64::NAN, 0.0), "mutation_rate");
        assert!(OptimizerOptions::new(10, 5, 10, 0.0, 0.0).validate().is_ok());
        assert!(OptimizerOptions::new(10, 5, 10, 1.0, 0.0).validate().is_ok());
    }

    #[test]
    fn test_convergence_gap() {
        assert_invalid(OptimizerOptions::new(10, 5, 10, 0.1, -1e-9), "convergence_gap");
        assert_invalid(OptimizerOptions::new(10, 5, 10, 0.1, f64::NAN), "convergence_gap");
        assert!(OptimizerOptions::new(10, 5, 10, 0.1, f64::INFINITY)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_zero_init_attempts() {
        let options = OptimizerOptions::builder().max_init_attempts(0).build();
        assert_invalid(options, "max_init_attempts");
    }

    #[test]
    fn test_builder_falls_back_to_defaults() {
        let options = OptimizerOptions::builder().keep(3).build();
        let defaults = OptimizerOptions::default();

        assert_eq!(options.get_keep(), 3);
        assert_eq!(options.get_pop_size(), defaults.get_pop_size());
        assert_eq!(options.get_max_iterations(), defaults.get_max_iterations());
        assert_eq!(options.get_log_level(), &LogLevel::Minimal);
        assert_eq!(options.get_max_init_attempts(), DEFAULT_MAX_INIT_ATTEMPTS);
    }

    #[test]
    fn test_setters() {
        let mut options = OptimizerOptions::default();
        options.set_pop_size(40);
        options.set_keep(8);
        options.set_max_iterations(7);
        options.set_mutation_rate(0.2);
        options.set_convergence_gap(0.5);
        options.set_log_level(LogLevel::None);
        options.set_max_init_attempts(3);

        assert_eq!(options, OptimizerOptions::builder()
            .pop_size(40)
            .keep(8)
            .max_iterations(7)
            .mutation_rate(0.2)
            .convergence_gap(0.5)
            .log_level(LogLevel::None)
            .max_init_attempts(3)
            .build());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let options = OptimizerOptions::new(30, 6, 40, 0.1, 1e-4);
        let json = serde_json::to_string(&options).unwrap();
        let back: OptimizerOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(options, back);
    }
}
