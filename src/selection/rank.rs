use crate::error::{OptimizerError, Result};
use crate::rng::RandomNumberGenerator;

/// Cumulative rank-based selection probabilities over the `keep` survivors of a
/// generation.
///
/// Survivors are assumed sorted best first. Rank `r` (1 = best) gets weight
/// `(keep - r + 1) / (keep * (keep + 1) / 2)`, so the best survivor is the most
/// likely parent, the worst one the least likely, and every survivor has a
/// strictly positive chance. The table stores the running sums of these
/// weights, which makes a pick a single uniform draw plus a scan.
///
/// # Examples
///
/// ```
/// use genopt::selection::RankWeights;
/// use genopt::rng::RandomNumberGenerator;
///
/// let weights = RankWeights::new(4).unwrap();
/// assert_eq!(weights.len(), 4);
/// assert!((weights.cumulative()[0] - 0.4).abs() < 1e-12);
///
/// let mut rng = RandomNumberGenerator::from_seed(11);
/// let parent = weights.pick_index(&mut rng);
/// assert!(parent < 4);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RankWeights {
    cumulative: Vec<f64>,
}

impl RankWeights {
    /// Builds the cumulative table for `keep` ranks.
    ///
    /// # Errors
    ///
    /// Returns `OptimizerError::InvalidConfiguration` when `keep < 2`.
    pub fn new(keep: usize) -> Result<Self> {
        if keep < 2 {
            return Err(OptimizerError::InvalidConfiguration(format!(
                "Rank weighting needs at least 2 survivors, got {}",
                keep
            )));
        }

        let n = keep as f64;
        let total = n * (n + 1.0) / 2.0;
        let mut cumulative = Vec::with_capacity(keep);
        let mut sum = 0.0;
        for rank in 1..=keep {
            sum += (n - rank as f64 + 1.0) / total;
            cumulative.push(sum);
        }

        Ok(Self { cumulative })
    }

    pub fn len(&self) -> usize {
        self.cumulative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cumulative.is_empty()
    }

    pub fn cumulative(&self) -> &[f64] {
        &self.cumulative
    }

    /// Probability of picking the survivor at `index` (0 = best).
    pub fn probability(&self, index: usize) -> f64 {
        match index {
            0 => self.cumulative[0],
            i => self.cumulative[i] - self.cumulative[i - 1],
        }
    }

    /// Picks a survivor index with probability proportional to its rank weight.
    pub fn pick_index(&self, rng: &mut RandomNumberGenerator) -> usize {
        self.index_for(rng.unit())
    }

    /// Maps a draw `p` in `[0, 1)` to the smallest index whose cumulative
    /// weight exceeds it.
    ///
    /// Accumulated rounding can leave the last entry a hair below 1.0; draws
    /// landing in that gap go to the last index.
    pub fn index_for(&self, p: f64) -> usize {
        self.cumulative
            .iter()
            .position(|&c| p < c)
            .unwrap_or(self.cumulative.len() - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_fewer_than_two_ranks() {
        assert!(matches!(
            RankWeights::new(1),
            Err(OptimizerError::InvalidConfiguration(_))
        ));
        assert!(RankWeights::new(0).is_err());
        assert!(RankWeights::new(2).is_ok());
    }

    #[test]
    fn test_two_ranks() {
        let weights = RankWeights::new(2).unwrap();
        assert!((weights.probability(0) - 2.0 / 3.0).abs() < 1e-12);
        assert!((weights.probability(1) - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_table_is_monotonic_and_sums_to_one() {
        for keep in 2..50 {
            let weights = RankWeights::new(keep).unwrap();
            let table = weights.cumulative();
            assert_eq!(table.len(), keep);
            assert!(table.windows(2).all(|w| w[0] <= w[1]));
            assert!((table[keep - 1] - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_weights_decrease_with_rank() {
        let weights = RankWeights::new(5).unwrap();
        let expected = [5.0, 4.0, 3.0, 2.0, 1.0];
        for (i, e) in expected.iter().enumerate() {
            assert!((weights.probability(i) - e / 15.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_index_for_boundaries() {
        let weights = RankWeights::new(4).unwrap();
        // cumulative = [0.4, 0.7, 0.9, 1.0]
        assert_eq!(weights.index_for(0.0), 0);
        assert_eq!(weights.index_for(0.39), 0);
        assert_eq!(weights.index_for(0.4), 1);
        assert_eq!(weights.index_for(0.75), 2);
        assert_eq!(weights.index_for(0.95), 3);
        assert_eq!(weights.index_for(0.999_999_999), 3);
        assert_eq!(weights.index_for(1.0), 3);
    }

    #[test]
    fn test_pick_frequencies_follow_rank() {
        let weights = RankWeights::new(3).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(2024);
        let mut counts = [0usize; 3];
        let draws = 60_000;
        for _ in 0..draws {
            counts[weights.pick_index(&mut rng)] += 1;
        }

        // Expected shares are 3/6, 2/6 and 1/6.
        for (i, &count) in counts.iter().enumerate() {
            let observed = count as f64 / draws as f64;
            assert!((observed - weights.probability(i)).abs() < 0.02);
        }
        assert!(counts[0] > counts[1] && counts[1] > counts[2]);
    }
}
