//! Downsampling of graded datasets to correct the skew of their grades.
//!
//! Discrete grades are balanced per bucket, continuous grades are reweighted
//! to flatten their distribution. Which of both applies is decided by the
//! [`ResamplingStrategy`] paired with a [`ClickModelKind`].

mod buckets;
mod continuous;

use displaydoc::Display;
use log::{debug, warn};
use rand::{distributions::WeightedError, Rng};
use thiserror::Error;

use crate::{
    click_model::{ClickModelKind, ResamplingStrategy},
    data::dataset::Dataset,
    error::Error,
};

/// Reasons why a dataset can't be reweighted.
///
/// These are not errors of the caller, the resampler falls back to the
/// original dataset instead.
#[derive(Error, Debug, Display, Clone, PartialEq)]
pub enum InfeasibleSampling {
    /// Reweighting needs at least two records but the dataset has {0}.
    TooFewRecords(usize),
    /// Only {nr_non_zero} records have a non-zero sampling weight but {target} are needed.
    TooFewNonZeroWeights { nr_non_zero: usize, target: usize },
    /// Invalid sampling weights: {0}.
    InvalidWeights(#[from] WeightedError),
}

/// What the resampler did.
#[derive(Clone, Debug, PartialEq)]
pub enum ResampleOutcome {
    /// The dataset was downsampled to `nr_records` records.
    Sampled { nr_records: usize },
    /// The dataset couldn't be downsampled and was kept as it is.
    KeptOriginal(InfeasibleSampling),
}

/// A resampled dataset.
#[derive(Clone, Debug, PartialEq)]
pub struct Resampled {
    pub dataset: Dataset,
    pub outcome: ResampleOutcome,
}

impl Resampled {
    fn sampled(dataset: Dataset) -> Self {
        let nr_records = dataset.nr_records();
        Self {
            dataset,
            outcome: ResampleOutcome::Sampled { nr_records },
        }
    }

    /// Checks if the resampler fell back to the original dataset.
    pub fn kept_original(&self) -> bool {
        matches!(self.outcome, ResampleOutcome::KeptOriginal(_))
    }
}

impl ResamplingStrategy {
    /// Downsamples a graded dataset.
    ///
    /// The grades are taken as they are and never recomputed.
    ///
    /// # Errors
    ///
    /// Fails if the dataset has no `grade` column. Infeasible reweighting is
    /// not an error, it is reported by [`ResampleOutcome::KeptOriginal`].
    pub fn resample<R>(self, dataset: &Dataset, rng: &mut R) -> Result<Resampled, Error>
    where
        R: Rng + ?Sized,
    {
        let grades = dataset.grades()?;
        let resampled = match self {
            ResamplingStrategy::BucketBalancing => {
                let indices = buckets::balance(grades, rng);
                Resampled::sampled(dataset.select(&indices))
            }
            ResamplingStrategy::ContinuousReweighting => {
                match continuous::reweight(grades, rng) {
                    Ok(indices) => Resampled::sampled(dataset.select(&indices)),
                    Err(reason) => {
                        warn!(
                            "Unable to downsample, keeping the original {} records: {}",
                            dataset.nr_records(),
                            reason,
                        );
                        Resampled {
                            dataset: dataset.clone(),
                            outcome: ResampleOutcome::KeptOriginal(reason),
                        }
                    }
                }
            }
        };
        debug!(
            "Resampled {} records into {} records.",
            dataset.nr_records(),
            resampled.dataset.nr_records(),
        );

        Ok(resampled)
    }
}

/// Downsamples a dataset graded by the given click model.
///
/// See [`ResamplingStrategy::resample()`].
pub fn resample<R>(dataset: &Dataset, kind: ClickModelKind, rng: &mut R) -> Result<Resampled, Error>
where
    R: Rng + ?Sized,
{
    kind.resampling_strategy().resample(dataset, rng)
}
