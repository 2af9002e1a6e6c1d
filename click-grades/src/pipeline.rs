use log::info;
use rand::{rngs::StdRng, SeedableRng};

use crate::{
    config::Configuration,
    data::dataset::Dataset,
    error::Error,
    grade::GradeAssigner,
    resample::{resample, ResampleOutcome, Resampled},
};

/// A graded and possibly downsampled dataset.
#[derive(Clone, Debug, PartialEq)]
pub struct Graded {
    pub dataset: Dataset,
    /// The outcome of downsampling, `None` if downsampling was disabled.
    pub resample_outcome: Option<ResampleOutcome>,
}

/// Grades a dataset and downsamples it if configured.
///
/// A generator seeded with [`Configuration::seed`] is created for every call
/// and used for grading first and downsampling afterwards, so the same
/// dataset and configuration always yield the same result.
pub fn apply_click_model(dataset: &Dataset, config: &Configuration) -> Result<Graded, Error> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let kind = config.click_model_type;
    info!(
        "Grading {} records with the {} click model.",
        dataset.nr_records(),
        kind
    );

    let graded = GradeAssigner::new(config.heuristic_rule).assign(dataset, kind, &mut rng)?;
    if !config.downsample {
        return Ok(Graded {
            dataset: graded,
            resample_outcome: None,
        });
    }

    let Resampled { dataset, outcome } = resample(&graded, kind, &mut rng)?;
    Ok(Graded {
        dataset,
        resample_outcome: Some(outcome),
    })
}
