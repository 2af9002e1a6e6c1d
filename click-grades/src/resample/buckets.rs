use itertools::Itertools;
use log::debug;
use ndarray::ArrayView1;
use rand::{seq::index::sample, Rng};

use crate::utils::argsort;

/// Draws the same number of records from each distinct grade.
///
/// Each bucket of records with exactly the same grade contributes as many
/// records as the smallest bucket has, drawn uniformly without replacement.
/// The buckets are concatenated in ascending grade order.
///
/// Returns the indices of the drawn records.
pub(super) fn balance<R>(grades: ArrayView1<f32>, rng: &mut R) -> Vec<usize>
where
    R: Rng + ?Sized,
{
    let buckets = argsort(grades.iter().copied())
        .into_iter()
        .group_by(|&idx| grades[idx])
        .into_iter()
        .map(|(_, bucket)| bucket.collect_vec())
        .collect_vec();
    let bucket_size = buckets.iter().map(Vec::len).min().unwrap_or_default();
    debug!(
        "Balancing {} buckets to {} records each.",
        buckets.len(),
        bucket_size
    );

    let mut indices = Vec::with_capacity(bucket_size * buckets.len());
    for bucket in &buckets {
        indices.extend(
            sample(rng, bucket.len(), bucket_size)
                .into_iter()
                .map(|pos| bucket[pos]),
        );
    }
    indices
}
