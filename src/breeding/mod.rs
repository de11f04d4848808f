//! # Breeding
//!
//! The two variation operators of the optimizer: single-point crossover with a
//! blended pivot coordinate, and bounded uniform mutation. Both hand every raw
//! point to [`Objective::make_legal`] before evaluating it, so legality is
//! enforced by repair rather than by rejection.
pub mod crossover;
pub mod mutation;

use crate::{
    candidate::Candidate,
    error::{OptimizerError, Result},
    objective::Objective,
};

pub use crossover::{blend_crossover, breed};
pub use mutation::{mutate, mutation_count};

/// Repairs `raw` through the objective, checks the repaired point kept its
/// dimension, and evaluates it once.
pub fn repair_and_evaluate<O>(objective: &O, raw: &[f64]) -> Result<Candidate>
where
    O: Objective + ?Sized,
{
    let repaired = repair(objective, raw)?;
    let value = objective.value(&repaired);
    Ok(Candidate::new(value, repaired))
}

pub(crate) fn repair<O>(objective: &O, raw: &[f64]) -> Result<Vec<f64>>
where
    O: Objective + ?Sized,
{
    let repaired = objective.make_legal(raw);
    if repaired.len() != raw.len() {
        return Err(OptimizerError::ObjectiveContractViolation(format!(
            "make_legal returned a point of length {}, expected {}",
            repaired.len(),
            raw.len()
        )));
    }
    Ok(repaired)
}
