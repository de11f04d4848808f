pub mod launcher;
pub mod options;
pub mod population;

pub use launcher::{GeneticOptimizer, OptimizationResult};
pub use options::{LogLevel, OptimizerOptions, OptimizerOptionsBuilder};
