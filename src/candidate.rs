//! # Candidate
//!
//! A `Candidate` pairs a point of the search space with the objective value
//! measured at that point. Candidates are built once and never edited: the
//! optimizer replaces population slots wholesale instead.
//!
//! Ordering is not baked into the type. Sorting goes through the explicit
//! comparators [`by_value`] and [`by_value_descending`].
//!
//! ## Example
//!
//! ```rust
//! use genopt::candidate::{by_value_descending, Candidate};
//!
//! let mut population = vec![
//!     Candidate::new(-4.0, vec![2.0, 0.0]),
//!     Candidate::new(-1.0, vec![1.0, 0.0]),
//!     Candidate::new(-9.0, vec![3.0, 0.0]),
//! ];
//! population.sort_by(by_value_descending);
//!
//! assert_eq!(population[0].value(), -1.0);
//! assert_eq!(population[0].to_string(), "-1.0000000 @ 1.00000, 0.00000");
//! ```

use std::cmp::Ordering;
use std::fmt;

/// A point in the search space paired with its objective value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    value: f64,
    point: Vec<f64>,
}

impl Candidate {
    /// Pairs `value` with `point`. The caller guarantees that `value` is the
    /// objective value at `point`.
    pub fn new(value: f64, point: Vec<f64>) -> Self {
        Self { value, point }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn point(&self) -> &[f64] {
        &self.point
    }

    pub fn dimension(&self) -> usize {
        self.point.len()
    }

    pub fn into_point(self) -> Vec<f64> {
        self.point
    }

    /// Flattens the candidate into a row `[value, x0, x1, ...]`, suitable for
    /// tabular export.
    pub fn to_row(&self) -> Vec<f64> {
        let mut row = Vec::with_capacity(self.point.len() + 1);
        row.push(self.value);
        row.extend_from_slice(&self.point);
        row
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.7} @ ", self.value)?;
        for (i, x) in self.point.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{:.5}", x)?;
        }
        Ok(())
    }
}

/// Compares two objective values. NaN ranks below every number and equal to
/// another NaN, which makes the order total.
pub fn compare_values(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| match (a.is_nan(), b.is_nan()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => Ordering::Equal,
    })
}

/// Ascending order by value.
pub fn by_value(a: &Candidate, b: &Candidate) -> Ordering {
    compare_values(a.value, b.value)
}

/// Descending order by value, best first.
pub fn by_value_descending(a: &Candidate, b: &Candidate) -> Ordering {
    compare_values(b.value, a.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_format() {
        let c = Candidate::new(1.5, vec![0.25, -3.0, 10.0]);
        assert_eq!(c.to_string(), "1.5000000 @ 0.25000, -3.00000, 10.00000");
    }

    #[test]
    fn test_display_single_coordinate() {
        let c = Candidate::new(-2.0, vec![1.0]);
        assert_eq!(c.to_string(), "-2.0000000 @ 1.00000");
    }

    #[test]
    fn test_to_row() {
        let c = Candidate::new(3.0, vec![1.0, 2.0]);
        assert_eq!(c.to_row(), vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_ties_compare_equal() {
        let a = Candidate::new(1.0, vec![0.0]);
        let b = Candidate::new(1.0, vec![5.0]);
        assert_eq!(by_value(&a, &b), Ordering::Equal);
        assert_eq!(compare_values(0.0, -0.0), Ordering::Equal);
    }

    #[test]
    fn test_nan_ranks_lowest() {
        assert_eq!(compare_values(f64::NAN, -1e300), Ordering::Less);
        assert_eq!(compare_values(f64::NEG_INFINITY, f64::NAN), Ordering::Greater);
        assert_eq!(compare_values(f64::NAN, f64::NAN), Ordering::Equal);
    }

    #[test]
    fn test_sort_descending() {
        let mut population = vec![
            Candidate::new(0.5, vec![0.0]),
            Candidate::new(f64::NAN, vec![1.0]),
            Candidate::new(2.0, vec![2.0]),
            Candidate::new(-1.0, vec![3.0]),
        ];
        population.sort_by(by_value_descending);

        assert_eq!(population[0].value(), 2.0);
        assert_eq!(population[1].value(), 0.5);
        assert_eq!(population[2].value(), -1.0);
        assert!(population[3].value().is_nan());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let c = Candidate::new(-0.5, vec![0.5, 0.5]);
        let json = serde_json::to_string(&c).unwrap();
        let back: Candidate = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
