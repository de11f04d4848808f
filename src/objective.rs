//! # Objective
//!
//! The `Objective` trait is the contract between the optimizer and the problem
//! being maximized. The optimizer never inspects the function itself: it asks
//! for values, the dimension, the box bounds shared by every coordinate, and
//! for feasibility checks and repairs.
//!
//! `is_legal_solution` and `make_legal` default to the plain box: a point is
//! legal when every coordinate lies in `[lower, upper]`, and repair clamps.
//! Problems with a narrower feasible region override both.
//!
//! ## Example
//!
//! ```rust
//! use genopt::objective::Objective;
//!
//! struct Sphere;
//!
//! impl Objective for Sphere {
//!     fn value(&self, point: &[f64]) -> f64 {
//!         -point.iter().map(|x| x * x).sum::<f64>()
//!     }
//!
//!     fn dimension(&self) -> usize {
//!         2
//!     }
//!
//!     fn domain_lower_bound(&self) -> f64 {
//!         -5.0
//!     }
//!
//!     fn domain_upper_bound(&self) -> f64 {
//!         5.0
//!     }
//! }
//!
//! assert_eq!(Sphere.make_legal(&[7.0, -1.0]), vec![5.0, -1.0]);
//! assert!(!Sphere.is_legal_solution(&[7.0, -1.0]));
//! ```

use std::fmt;

/// A real-valued function of `dimension()` variables to be maximized over the
/// box `[domain_lower_bound(), domain_upper_bound()]^dimension()`.
pub trait Objective {
    /// The objective value at `point`. Must be defined for every point the
    /// optimizer hands over, i.e. every point returned by `make_legal`.
    fn value(&self, point: &[f64]) -> f64;

    /// Number of coordinates. Fixed for the duration of a run.
    fn dimension(&self) -> usize;

    fn domain_lower_bound(&self) -> f64;

    fn domain_upper_bound(&self) -> f64;

    /// Feasibility predicate.
    fn is_legal_solution(&self, point: &[f64]) -> bool {
        let (lower, upper) = (self.domain_lower_bound(), self.domain_upper_bound());
        point.len() == self.dimension() && point.iter().all(|&x| x >= lower && x <= upper)
    }

    /// Repairs `point` into the feasible region. A point that is already legal
    /// must stay legal, and the result must keep the point's length.
    fn make_legal(&self, point: &[f64]) -> Vec<f64> {
        let (lower, upper) = (self.domain_lower_bound(), self.domain_upper_bound());
        point.iter().map(|&x| x.max(lower).min(upper)).collect()
    }
}

impl<T: Objective + ?Sized> Objective for &T {
    fn value(&self, point: &[f64]) -> f64 {
        (**self).value(point)
    }

    fn dimension(&self) -> usize {
        (**self).dimension()
    }

    fn domain_lower_bound(&self) -> f64 {
        (**self).domain_lower_bound()
    }

    fn domain_upper_bound(&self) -> f64 {
        (**self).domain_upper_bound()
    }

    fn is_legal_solution(&self, point: &[f64]) -> bool {
        (**self).is_legal_solution(point)
    }

    fn make_legal(&self, point: &[f64]) -> Vec<f64> {
        (**self).make_legal(point)
    }
}

/// An objective backed by a closure over a plain box domain.
///
/// ```rust
/// use genopt::objective::{FnObjective, Objective};
///
/// let sphere = FnObjective::new(3, -5.0, 5.0, |p: &[f64]| -p.iter().map(|x| x * x).sum::<f64>());
/// assert_eq!(sphere.value(&[1.0, 1.0, 1.0]), -3.0);
/// ```
#[derive(Clone)]
pub struct FnObjective<F> {
    dimension: usize,
    lower: f64,
    upper: f64,
    function: F,
}

impl<F> FnObjective<F>
where
    F: Fn(&[f64]) -> f64,
{
    pub fn new(dimension: usize, lower: f64, upper: f64, function: F) -> Self {
        Self {
            dimension,
            lower,
            upper,
            function,
        }
    }
}

impl<F> fmt::Debug for FnObjective<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnObjective")
            .field("dimension", &self.dimension)
            .field("lower", &self.lower)
            .field("upper", &self.upper)
            .finish_non_exhaustive()
    }
}

impl<F> Objective for FnObjective<F>
where
    F: Fn(&[f64]) -> f64,
{
    fn value(&self, point: &[f64]) -> f64 {
        (self.function)(point)
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn domain_lower_bound(&self) -> f64 {
        self.lower
    }

    fn domain_upper_bound(&self) -> f64 {
        self.upper
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sphere() -> FnObjective<impl Fn(&[f64]) -> f64> {
        FnObjective::new(2, -5.0, 5.0, |p: &[f64]| -p.iter().map(|x| x * x).sum::<f64>())
    }

    #[test]
    fn test_default_make_legal_clamps() {
        let f = sphere();
        assert_eq!(f.make_legal(&[-6.0, 5.5]), vec![-5.0, 5.0]);
        assert_eq!(f.make_legal(&[1.0, -2.0]), vec![1.0, -2.0]);
    }

    #[test]
    fn test_default_is_legal() {
        let f = sphere();
        assert!(f.is_legal_solution(&[-5.0, 5.0]));
        assert!(!f.is_legal_solution(&[-5.1, 0.0]));
        assert!(!f.is_legal_solution(&[0.0]));
    }

    #[test]
    fn test_repair_yields_legal_point() {
        let f = sphere();
        let repaired = f.make_legal(&[100.0, -100.0]);
        assert!(f.is_legal_solution(&repaired));
    }

    #[test]
    fn test_reference_forwards() {
        let f = sphere();
        let r = &f;
        assert_eq!(r.dimension(), 2);
        assert_eq!(r.value(&[1.0, 2.0]), -5.0);
    }
}
