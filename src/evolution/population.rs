//! # Initial population
//!
//! Builds the first generation either by sampling the domain or by adopting a
//! population supplied by the caller.
//!
//! Sampling is rejection sampling: every coordinate is drawn uniformly from
//! `[lower, upper]`, the point is repaired, and it is kept only if the objective
//! then reports it legal. Each candidate gets a bounded number of draws; an
//! objective whose feasible region is practically never hit fails the run
//! instead of hanging it.
use tracing::debug;

use crate::{
    breeding::repair,
    candidate::Candidate,
    error::{OptimizerError, Result},
    objective::Objective,
    rng::RandomNumberGenerator,
};

/// Samples `pop_size` legal candidates, allowing at most `max_attempts` draws
/// per candidate.
///
/// # Errors
///
/// Returns `OptimizerError::ObjectiveContractViolation` if `make_legal`
/// changes a point's length or if a candidate exhausts its draws.
pub fn generate<O>(
    objective: &O,
    pop_size: usize,
    max_attempts: usize,
    rng: &mut RandomNumberGenerator,
) -> Result<Vec<Candidate>>
where
    O: Objective + ?Sized,
{
    let mut population = Vec::with_capacity(pop_size);
    let mut rejected = 0usize;

    while population.len() < pop_size {
        let (candidate, attempts) = sample_legal(objective, max_attempts, rng)?;
        rejected += attempts - 1;
        population.push(candidate);
    }

    debug!(pop_size, rejected, "initial population sampled");
    Ok(population)
}

/// Draws one legal candidate; returns it with the number of draws it took.
fn sample_legal<O>(
    objective: &O,
    max_attempts: usize,
    rng: &mut RandomNumberGenerator,
) -> Result<(Candidate, usize)>
where
    O: Objective + ?Sized,
{
    let dimension = objective.dimension();
    let lower = objective.domain_lower_bound();
    let upper = objective.domain_upper_bound();

    for attempt in 1..=max_attempts {
        let raw: Vec<f64> = (0..dimension)
            .map(|_| rng.uniform_inclusive(lower, upper))
            .collect();
        let point = repair(objective, &raw)?;
        if objective.is_legal_solution(&point) {
            let value = objective.value(&point);
            return Ok((Candidate::new(value, point), attempt));
        }
    }

    Err(OptimizerError::ObjectiveContractViolation(format!(
        "no legal point found after {} draws",
        max_attempts
    )))
}

/// Validates a caller-supplied population and copies it into a population the
/// optimizer owns.
///
/// # Errors
///
/// Returns `OptimizerError::InvalidConfiguration` if the population does not
/// hold exactly `pop_size` candidates, or if any candidate has the wrong
/// dimension or fails `is_legal_solution`.
pub fn adopt<O>(objective: &O, supplied: &[Candidate], pop_size: usize) -> Result<Vec<Candidate>>
where
    O: Objective + ?Sized,
{
    if supplied.len() != pop_size {
        return Err(OptimizerError::InvalidConfiguration(format!(
            "initial population holds {} candidates, expected {}",
            supplied.len(),
            pop_size
        )));
    }

    let dimension = objective.dimension();
    for (i, candidate) in supplied.iter().enumerate() {
        if candidate.dimension() != dimension {
            return Err(OptimizerError::InvalidConfiguration(format!(
                "initial candidate {} has dimension {}, expected {}",
                i,
                candidate.dimension(),
                dimension
            )));
        }
        if !objective.is_legal_solution(candidate.point()) {
            return Err(OptimizerError::InvalidConfiguration(format!(
                "initial candidate {} is not a legal solution: {}",
                i, candidate
            )));
        }
    }

    Ok(supplied.to_vec())
}
