//! # Selection
//!
//! Parent selection for the optimizer: linear rank weighting over the
//! survivors of a generation, sampled roulette-wheel style.
pub mod rank;

pub use rank::RankWeights;
