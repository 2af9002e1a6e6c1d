use log::{debug, warn};
use ndarray::{Array1, ArrayView1, Zip};
use rand::Rng;

use crate::{
    click_model::{ClickModelKind, HeuristicRule},
    data::dataset::Dataset,
    error::Error,
};

/// Assigns grades to the records of a dataset.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GradeAssigner {
    pub heuristic_rule: HeuristicRule,
}

impl GradeAssigner {
    pub fn new(heuristic_rule: HeuristicRule) -> Self {
        Self { heuristic_rule }
    }

    /// Returns a copy of the dataset with a `grade` column computed by the given click model.
    ///
    /// An existing `grade` column is neither used nor kept. The generator is only
    /// used by the heuristic click model with the [`HeuristicRule::Uniform`] rule,
    /// which draws one grade per record in record order.
    ///
    /// # Errors
    ///
    /// Fails if the dataset lacks the `clicks` column or, for the `ctr` and
    /// `heuristic` click models, the `num_impressions` column.
    pub fn assign<R>(
        &self,
        dataset: &Dataset,
        kind: ClickModelKind,
        rng: &mut R,
    ) -> Result<Dataset, Error>
    where
        R: Rng + ?Sized,
    {
        let grades = match kind {
            ClickModelKind::Binary => binary(dataset.clicks()?),
            ClickModelKind::Ctr => ctrs(dataset.clicks()?, dataset.num_impressions()?),
            ClickModelKind::Heuristic => {
                let ctrs = ctrs(dataset.clicks()?, dataset.num_impressions()?);
                self.bucket(ctrs, rng)
            }
        };
        debug!(
            "Assigned {} grades with the {} click model.",
            grades.len(),
            kind
        );

        dataset.clone().with_grades(grades)
    }

    fn bucket<R>(&self, ctrs: Array1<f32>, rng: &mut R) -> Array1<f32>
    where
        R: Rng + ?Sized,
    {
        let buckets = HeuristicRule::BUCKETS;
        match self.heuristic_rule {
            HeuristicRule::Uniform => {
                warn!("Heuristic grades are drawn uniformly and don't depend on the click-through rate.");
                ctrs.mapv(|_| buckets[rng.gen_range(0..buckets.len())])
            }
            HeuristicRule::Thresholds { medium, high } => ctrs.mapv(|ctr| {
                if ctr >= high {
                    buckets[2]
                } else if ctr >= medium {
                    buckets[1]
                } else {
                    buckets[0]
                }
            }),
        }
    }
}

/// Grades every record with `1` if it was clicked and `0` otherwise.
fn binary(clicks: ArrayView1<u32>) -> Array1<f32> {
    clicks.mapv(|clicks| if clicks > 0 { 1. } else { 0. })
}

/// Computes the click-through rate of every record.
fn ctrs(clicks: ArrayView1<u32>, num_impressions: ArrayView1<u32>) -> Array1<f32> {
    Zip::from(&clicks)
        .and(&num_impressions)
        .map_collect(|&clicks, &num_impressions| ctr(clicks, num_impressions))
}

/// The click-through rate of a single record.
///
/// Records without impressions carry no signal and get a rate of `0`, records
/// with more clicks than impressions are capped at `1`.
pub(crate) fn ctr(clicks: u32, num_impressions: u32) -> f32 {
    if num_impressions == 0 {
        0.
    } else {
        (clicks as f32 / num_impressions as f32).min(1.)
    }
}

/// Returns a copy of the dataset graded by the given click model.
///
/// Uses the default [`GradeAssigner`], see [`GradeAssigner::assign()`].
pub fn assign_grades<R>(
    dataset: &Dataset,
    kind: ClickModelKind,
    rng: &mut R,
) -> Result<Dataset, Error>
where
    R: Rng + ?Sized,
{
    GradeAssigner::default().assign(dataset, kind, rng)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};
    use rstest::rstest;
    use test_utils::assert_grades_eq;

    use super::*;
    use crate::data::Column;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(123456)
    }

    fn interactions() -> Dataset {
        Dataset::from_counts(vec![0, 1, 3, 0, 7, 2], vec![10, 4, 0, 0, 7, 8])
            .unwrap()
            .with_passthrough(
                "doc_id",
                (0..6).map(|idx| format!("doc-{}", idx)).collect::<Vec<_>>(),
            )
            .unwrap()
    }

    #[test]
    fn test_binary_grades() {
        let dataset = interactions();
        let graded = assign_grades(&dataset, ClickModelKind::Binary, &mut rng()).unwrap();

        assert_grades_eq!(graded.grades().unwrap(), [0., 1., 1., 0., 1., 1.]);
        for record in graded.records() {
            let grade = record.grade.unwrap();
            assert!(grade == 0. || grade == 1.);
            assert_eq!(grade == 1., record.clicks.unwrap() > 0);
        }
    }

    #[test]
    fn test_binary_needs_clicks_only() {
        let dataset = Dataset::new(3).with_clicks(vec![0, 2, 0]).unwrap();
        let graded = assign_grades(&dataset, ClickModelKind::Binary, &mut rng()).unwrap();
        assert_grades_eq!(graded.grades().unwrap(), [0., 1., 0.]);
    }

    #[test]
    fn test_ctr_grades() {
        let dataset = interactions();
        let graded = assign_grades(&dataset, ClickModelKind::Ctr, &mut rng()).unwrap();

        assert_grades_eq!(graded.grades().unwrap(), [0., 0.25, 0., 0., 1., 0.25]);
        for record in graded.records() {
            let num_impressions = record.num_impressions.unwrap();
            if num_impressions > 0 {
                assert_eq!(
                    record.grade.unwrap(),
                    record.clicks.unwrap() as f32 / num_impressions as f32
                );
            } else {
                assert_eq!(record.grade.unwrap(), 0.);
            }
        }
    }

    #[test]
    fn test_ctr_without_impressions_is_zero() {
        let dataset = Dataset::from_counts(vec![3], vec![0]).unwrap();
        let graded = assign_grades(&dataset, ClickModelKind::Ctr, &mut rng()).unwrap();

        let grade = graded.grades().unwrap()[0];
        assert!(!grade.is_nan());
        assert_eq!(grade, 0.);
    }

    #[test]
    fn test_ctr_is_capped() {
        assert_eq!(ctr(5, 2), 1.);
        assert_eq!(ctr(1, 3), 1. / 3.);
    }

    #[test]
    fn test_heuristic_grades_are_buckets() {
        let graded = assign_grades(&interactions(), ClickModelKind::Heuristic, &mut rng()).unwrap();
        for grade in graded.grades().unwrap() {
            assert!(HeuristicRule::BUCKETS.contains(grade));
        }
    }

    #[test]
    fn test_heuristic_grades_are_reproducible() {
        let dataset = Dataset::from_counts(vec![1; 50], vec![2; 50]).unwrap();
        let graded = assign_grades(&dataset, ClickModelKind::Heuristic, &mut rng()).unwrap();
        let graded2 = assign_grades(&dataset, ClickModelKind::Heuristic, &mut rng()).unwrap();
        assert_eq!(graded, graded2);

        // with 50 draws all three buckets show up
        for bucket in &HeuristicRule::BUCKETS {
            assert!(graded.grades().unwrap().iter().any(|grade| grade == bucket));
        }
    }

    #[test]
    fn test_heuristic_thresholds() {
        let assigner = GradeAssigner::new(HeuristicRule::Thresholds {
            medium: 0.2,
            high: 0.5,
        });
        let dataset = Dataset::from_counts(vec![0, 1, 1, 2, 1, 4], vec![5, 10, 5, 4, 1, 0]).unwrap();
        let graded = assigner
            .assign(&dataset, ClickModelKind::Heuristic, &mut rng())
            .unwrap();

        assert_grades_eq!(graded.grades().unwrap(), [0., 0., 0.5, 1., 1., 0.]);
    }

    #[rstest(
        kind,
        case(ClickModelKind::Binary),
        case(ClickModelKind::Ctr),
        case(ClickModelKind::Heuristic)
    )]
    fn test_grading_is_idempotent(kind: ClickModelKind) {
        let graded = assign_grades(&interactions(), kind, &mut rng()).unwrap();
        let regraded = assign_grades(&graded, kind, &mut rng()).unwrap();
        assert_eq!(graded, regraded);
    }

    #[rstest(
        kind,
        case(ClickModelKind::Binary),
        case(ClickModelKind::Ctr),
        case(ClickModelKind::Heuristic)
    )]
    fn test_grading_keeps_other_columns(kind: ClickModelKind) {
        let dataset = interactions();
        let graded = assign_grades(&dataset, kind, &mut rng()).unwrap();

        assert_eq!(graded.clone().without_grades(), dataset);
        assert!(!dataset.has_column(Column::Grade));
    }

    #[rstest(
        kind,
        case(ClickModelKind::Ctr),
        case(ClickModelKind::Heuristic)
    )]
    fn test_missing_impressions(kind: ClickModelKind) {
        let dataset = Dataset::new(2).with_clicks(vec![1, 2]).unwrap();
        assert_eq!(
            assign_grades(&dataset, kind, &mut rng()).unwrap_err(),
            Error::MissingColumn(Column::NumImpressions)
        );
    }

    #[rstest(
        kind,
        case(ClickModelKind::Binary),
        case(ClickModelKind::Ctr),
        case(ClickModelKind::Heuristic)
    )]
    fn test_missing_clicks(kind: ClickModelKind) {
        let dataset = Dataset::new(2).with_num_impressions(vec![1, 2]).unwrap();
        assert_eq!(
            assign_grades(&dataset, kind, &mut rng()).unwrap_err(),
            Error::MissingColumn(Column::Clicks)
        );
    }
}
