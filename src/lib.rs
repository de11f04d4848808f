//! # genopt
//!
//! A genetic algorithm optimizer for continuous multivariate functions over a
//! box-constrained domain. It maximizes black-box objectives: no gradients, no
//! smoothness assumptions.
//!
//! ```rust
//! use genopt::{Candidate, FnObjective, GeneticOptimizer, OptimizerOptions, RandomNumberGenerator};
//!
//! let sphere = FnObjective::new(2, -5.0, 5.0, |p: &[f64]| -p.iter().map(|x| x * x).sum::<f64>());
//! let options = OptimizerOptions::builder()
//!     .pop_size(100)
//!     .keep(50)
//!     .max_iterations(300)
//!     .mutation_rate(0.3)
//!     .convergence_gap(0.0)
//!     .build();
//! let mut rng = RandomNumberGenerator::from_seed(1);
//!
//! let best: Candidate = GeneticOptimizer::new(sphere)
//!     .optimize(&options, None, &mut rng)
//!     .unwrap();
//! println!("{}", best);
//! ```
pub mod breeding;
pub mod candidate;
pub mod error;
pub mod evolution;
pub mod objective;
pub mod rng;
pub mod selection;

// Re-export commonly used types for convenience
pub use candidate::Candidate;
pub use error::{OptimizerError, OptionExt, Result};
pub use evolution::{GeneticOptimizer, LogLevel, OptimizationResult, OptimizerOptions};
pub use objective::{FnObjective, Objective};
pub use rng::RandomNumberGenerator;
