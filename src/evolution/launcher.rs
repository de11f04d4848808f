use tracing::{debug, info};

use super::{
    options::{LogLevel, OptimizerOptions},
    population,
};
use crate::{
    breeding::{self, breed},
    candidate::{by_value_descending, compare_values, Candidate},
    error::{OptimizerError, OptionExt, Result},
    objective::Objective,
    rng::RandomNumberGenerator,
    selection::RankWeights,
};

/// The outcome of an optimization run.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizationResult {
    /// The best candidate observed in any generation.
    pub best: Candidate,
    /// Best candidate of each generation, in order.
    pub best_history: Vec<Candidate>,
    /// Average value of each generation, in order.
    pub average_history: Vec<f64>,
    /// Number of generations executed.
    pub generations: usize,
    /// Whether the run stopped on the convergence gap rather than on
    /// `max_iterations`.
    pub converged: bool,
}

/// Maximizes an [`Objective`] with a generational genetic algorithm.
///
/// Each generation sorts the population best first, keeps the top `keep`
/// candidates, refills the population with blend-crossover offspring of
/// rank-weighted parents, records the best candidate and the average value,
/// stops if the average moved by at most the convergence gap since the previous
/// generation, and otherwise mutates every row but the best.
///
/// # Example
///
/// ```rust
/// use genopt::evolution::{GeneticOptimizer, OptimizerOptions};
/// use genopt::objective::FnObjective;
/// use genopt::rng::RandomNumberGenerator;
///
/// let objective = FnObjective::new(2, -5.0, 5.0, |p: &[f64]| -p.iter().map(|x| x * x).sum::<f64>());
/// let optimizer = GeneticOptimizer::new(objective);
/// let options = OptimizerOptions::new(40, 10, 100, 0.1, 0.0);
/// let mut rng = RandomNumberGenerator::from_seed(42);
///
/// let best = optimizer.optimize(&options, None, &mut rng).unwrap();
/// assert!(best.value() <= 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct GeneticOptimizer<O>
where
    O: Objective,
{
    objective: O,
}

impl<O> GeneticOptimizer<O>
where
    O: Objective,
{
    pub fn new(objective: O) -> Self {
        Self { objective }
    }

    pub fn objective(&self) -> &O {
        &self.objective
    }

    /// Runs the optimizer and returns the best candidate observed across all
    /// generations.
    ///
    /// See [`GeneticOptimizer::run`] for the arguments and errors.
    pub fn optimize(
        &self,
        options: &OptimizerOptions,
        initial: Option<&[Candidate]>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Candidate> {
        self.run(options, initial, rng).map(|result| result.best)
    }

    /// Runs the optimizer and returns the best candidate together with the
    /// per-generation history.
    ///
    /// # Arguments
    ///
    /// * `options` - Population size, survivors, generation cap, mutation rate
    ///   and convergence gap.
    /// * `initial` - An optional starting population of exactly `pop_size`
    ///   legal candidates. It is copied; the caller's slice is never touched.
    ///   When absent, the domain is sampled.
    /// * `rng` - The only source of randomness for the run.
    ///
    /// # Errors
    ///
    /// * `OptimizerError::InvalidConfiguration` if the options fail validation,
    ///   the objective has dimension zero or an unusable domain, or the initial
    ///   population is malformed.
    /// * `OptimizerError::ObjectiveContractViolation` if `make_legal` changes a
    ///   point's length or no legal initial point can be sampled.
    pub fn run(
        &self,
        options: &OptimizerOptions,
        initial: Option<&[Candidate]>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<OptimizationResult> {
        options.validate()?;
        self.validate_objective()?;

        let pop_size = options.get_pop_size();
        let keep = options.get_keep();
        let log_level = *options.get_log_level();
        let weights = RankWeights::new(keep)?;

        let mut population = match initial {
            Some(supplied) => population::adopt(&self.objective, supplied, pop_size)?,
            None => population::generate(
                &self.objective,
                pop_size,
                options.get_max_init_attempts(),
                rng,
            )?,
        };

        let mut best_history = Vec::with_capacity(options.get_max_iterations());
        let mut average_history = Vec::with_capacity(options.get_max_iterations());
        let mut converged = false;

        for generation in 1..=options.get_max_iterations() {
            population.sort_by(by_value_descending);
            population.truncate(keep);

            reproduce(&self.objective, &mut population, &weights, pop_size, rng)?;
            population.sort_by(by_value_descending);

            let average = average_value(&population);
            let best = population[0].clone();

            match log_level {
                LogLevel::None => {}
                LogLevel::Minimal | LogLevel::Verbose => {
                    info!(generation, %best, average, "generation complete");
                }
            }

            best_history.push(best);
            average_history.push(average);

            if has_converged(&average_history, options.get_convergence_gap()) {
                converged = true;
                break;
            }

            let events = breeding::mutate(
                &self.objective,
                &mut population,
                options.get_mutation_rate(),
                rng,
            )?;
            if log_level == LogLevel::Verbose {
                debug!(generation, events, "mutation applied");
            }
        }

        let best = best_of(&best_history)
            .cloned()
            .ok_or_else_optimizer(|| OptimizerError::EmptyHistory)?;

        if log_level != LogLevel::None {
            info!(
                generations = best_history.len(),
                converged,
                %best,
                "optimization finished"
            );
        }

        Ok(OptimizationResult {
            best,
            generations: best_history.len(),
            best_history,
            average_history,
            converged,
        })
    }

    fn validate_objective(&self) -> Result<()> {
        if self.objective.dimension() == 0 {
            return Err(OptimizerError::InvalidConfiguration(
                "objective dimension must be at least 1".to_string(),
            ));
        }

        let lower = self.objective.domain_lower_bound();
        let upper = self.objective.domain_upper_bound();
        if !(lower <= upper && (upper - lower).is_finite()) {
            return Err(OptimizerError::InvalidConfiguration(format!(
                "domain [{}, {}] must be a finite, non-empty interval",
                lower, upper
            )));
        }

        Ok(())
    }
}

/// Refills `population` from its first `weights.len()` candidates up to
/// exactly `pop_size`.
///
/// Offspring come in pairs, so the population may overshoot by one; the most
/// recently appended offspring is then dropped.
pub fn reproduce<O>(
    objective: &O,
    population: &mut Vec<Candidate>,
    weights: &RankWeights,
    pop_size: usize,
    rng: &mut RandomNumberGenerator,
) -> Result<()>
where
    O: Objective + ?Sized,
{
    while population.len() < pop_size {
        let first = weights.pick_index(rng);
        let second = weights.pick_index(rng);
        let (offspring1, offspring2) =
            breed(objective, &population[first], &population[second], rng)?;
        population.push(offspring1);
        population.push(offspring2);
    }
    population.truncate(pop_size);
    Ok(())
}

/// Mean objective value of `population`.
pub fn average_value(population: &[Candidate]) -> f64 {
    population.iter().map(Candidate::value).sum::<f64>() / population.len() as f64
}

/// Whether the last two recorded averages differ by at most `gap`.
pub fn has_converged(averages: &[f64], gap: f64) -> bool {
    match averages {
        [.., previous, last] => (last - previous).abs() <= gap,
        _ => false,
    }
}

/// The first candidate holding the maximum value.
pub fn best_of(history: &[Candidate]) -> Option<&Candidate> {
    history.iter().fold(None, |best, candidate| match best {
        Some(current) if compare_values(candidate.value(), current.value()).is_le() => Some(current),
        _ => Some(candidate),
    })
}
