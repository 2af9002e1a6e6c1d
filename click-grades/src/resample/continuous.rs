use log::debug;
use ndarray::{Array1, ArrayView1};
use rand::{seq::index::sample_weighted, Rng};

use super::InfeasibleSampling;
use crate::utils::argsort;

/// Returns `floor(0.8 * nr_records)`, the number of records kept by reweighting.
fn target_size(nr_records: usize) -> usize {
    nr_records * 4 / 5
}

/// The discrete derivative of `values`.
///
/// Uses central differences for inner points and one-sided differences at
/// both ends. Needs at least two values.
fn gradient(values: ArrayView1<f64>) -> Array1<f64> {
    let last = values.len() - 1;
    Array1::from_shape_fn(values.len(), |idx| match idx {
        0 => values[1] - values[0],
        idx if idx == last => values[last] - values[last - 1],
        idx => (values[idx + 1] - values[idx - 1]) / 2.,
    })
}

/// Computes the sampling weight of each of the ascending sorted grades.
///
/// Grades in sparse regions of the distribution and grades far from zero are
/// weighted up by `gradient(x) * exp(-x^2 / 2)`. The weights are not normalized.
fn sampling_weights(sorted_grades: ArrayView1<f64>) -> Array1<f64> {
    gradient(sorted_grades) * sorted_grades.mapv(|grade| (-grade.powi(2) / 2.).exp())
}

/// Draws `floor(0.8 * nr_records)` records weighted to flatten the grade distribution.
///
/// Returns the indices of the drawn records.
///
/// # Errors
///
/// Fails if there are less than two records, if fewer records than needed
/// have a non-zero weight or if the weights are otherwise unusable.
pub(super) fn reweight<R>(
    grades: ArrayView1<f32>,
    rng: &mut R,
) -> Result<Vec<usize>, InfeasibleSampling>
where
    R: Rng + ?Sized,
{
    let nr_records = grades.len();
    if nr_records < 2 {
        return Err(InfeasibleSampling::TooFewRecords(nr_records));
    }

    let order = argsort(grades.iter().copied());
    let sorted_grades = order
        .iter()
        .map(|&idx| f64::from(grades[idx]))
        .collect::<Array1<_>>();
    let weights = sampling_weights(sorted_grades.view());

    let target = target_size(nr_records);
    let nr_non_zero = weights.iter().filter(|&&weight| weight > 0.).count();
    if nr_non_zero < target {
        return Err(InfeasibleSampling::TooFewNonZeroWeights {
            nr_non_zero,
            target,
        });
    }
    let probabilities = &weights / weights.sum();
    debug!(
        "Reweighting {} records with {} non-zero probabilities.",
        nr_records, nr_non_zero
    );

    let sampled = sample_weighted(rng, nr_records, |pos| probabilities[pos], target)?;
    Ok(sampled.into_iter().map(|pos| order[pos]).collect())
}
