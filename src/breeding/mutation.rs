//! # Bounded mutation
//!
//! Each generation overwrites `ceil((pop_size - 1) * dim * mu)` single
//! coordinates with fresh uniform draws from the domain. Row 0 holds the
//! current best candidate and is never touched.
use super::repair_and_evaluate;
use crate::{
    candidate::Candidate, error::Result, objective::Objective, rng::RandomNumberGenerator,
};

/// Number of mutation events for a population of `pop_size` points of
/// dimension `dimension` at mutation rate `mutation_rate`.
pub fn mutation_count(pop_size: usize, dimension: usize, mutation_rate: f64) -> usize {
    let slots = pop_size.saturating_sub(1) * dimension;
    (slots as f64 * mutation_rate).ceil() as usize
}

/// Applies one generation of mutation to `population` and returns the number
/// of events performed.
///
/// Every event picks a row from `[1, len - 1]` and a coordinate from
/// `[0, dim - 1]`, draws the new coordinate from `[lower, upper]`, then repairs
/// and re-evaluates the whole point and replaces the slot. Events are
/// independent, so a row may be hit more than once.
pub fn mutate<O>(
    objective: &O,
    population: &mut [Candidate],
    mutation_rate: f64,
    rng: &mut RandomNumberGenerator,
) -> Result<usize>
where
    O: Objective + ?Sized,
{
    if population.len() < 2 {
        return Ok(0);
    }

    let dimension = objective.dimension();
    let lower = objective.domain_lower_bound();
    let upper = objective.domain_upper_bound();
    let events = mutation_count(population.len(), dimension, mutation_rate);

    for _ in 0..events {
        let row = rng.index(1, population.len());
        let column = rng.index(0, dimension);

        let mut point = population[row].point().to_vec();
        point[column] = rng.uniform_inclusive(lower, upper);
        population[row] = repair_and_evaluate(objective, &point)?;
    }

    Ok(events)
}
