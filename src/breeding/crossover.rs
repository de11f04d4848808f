//! # Blend crossover
//!
//! Single-point crossover over real-valued points. A pivot coordinate splits
//! both parents: the first offspring takes the first parent's head and the
//! second parent's tail, the second offspring the mirror image. The pivot
//! coordinate itself is not copied but blended, moving each parent's value a
//! random fraction `b` of the way toward the other parent's.
use super::repair_and_evaluate;
use crate::{
    candidate::Candidate, error::Result, objective::Objective, rng::RandomNumberGenerator,
};

/// Builds the two raw offspring of `first` and `second` for a given `pivot`
/// and blend factor.
///
/// ```rust
/// use genopt::breeding::blend_crossover;
///
/// let (o1, o2) = blend_crossover(&[0.0, 0.0, 0.0], &[4.0, 4.0, 4.0], 1, 0.25);
/// assert_eq!(o1, vec![0.0, 1.0, 4.0]);
/// assert_eq!(o2, vec![4.0, 3.0, 0.0]);
/// ```
///
/// # Panics
///
/// Panics if the parents differ in length or `pivot` is out of range.
pub fn blend_crossover(
    first: &[f64],
    second: &[f64],
    pivot: usize,
    blend: f64,
) -> (Vec<f64>, Vec<f64>) {
    assert_eq!(first.len(), second.len(), "parents must share a dimension");
    assert!(pivot < first.len(), "pivot {} out of range", pivot);

    let mut offspring1 = Vec::with_capacity(first.len());
    let mut offspring2 = Vec::with_capacity(first.len());

    offspring1.extend_from_slice(&first[..pivot]);
    offspring2.extend_from_slice(&second[..pivot]);

    let gap = first[pivot] - second[pivot];
    offspring1.push(first[pivot] - blend * gap);
    offspring2.push(second[pivot] + blend * gap);

    offspring1.extend_from_slice(&second[pivot + 1..]);
    offspring2.extend_from_slice(&first[pivot + 1..]);

    (offspring1, offspring2)
}

/// Breeds two evaluated offspring from two parents.
///
/// Draws the pivot uniformly from `[0, dim - 1]` and the blend factor
/// uniformly from `[0, 1)`, in that order, then repairs and evaluates each
/// offspring once.
pub fn breed<O>(
    objective: &O,
    first: &Candidate,
    second: &Candidate,
    rng: &mut RandomNumberGenerator,
) -> Result<(Candidate, Candidate)>
where
    O: Objective + ?Sized,
{
    let pivot = rng.index(0, first.dimension());
    let blend = rng.unit();
    let (raw1, raw2) = blend_crossover(first.point(), second.point(), pivot, blend);

    Ok((
        repair_and_evaluate(objective, &raw1)?,
        repair_and_evaluate(objective, &raw2)?,
    ))
}
