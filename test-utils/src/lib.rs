//! Shared helpers for the tests of the workspace.

pub mod fixture;

#[doc(hidden)]
pub use float_cmp::approx_eq;

/// Compares two sequences of grades with approximate equality.
///
/// Both sides can be anything with an `iter()` method over `f32` or `f64`
/// values, e.g. arrays, vectors or ndarray arrays and views. The values are
/// compared as `f64`.
///
/// ```
/// use test_utils::assert_grades_eq;
/// assert_grades_eq!(vec![0.5f32, 1.], [0.5, 1.]);
/// assert_grades_eq!([0.1 + 0.2], [0.3], ulps = 1);
/// ```
///
/// The number of `ulps` defaults to `4` if not specified. Two NaN values are
/// treated as equal.
#[macro_export]
macro_rules! assert_grades_eq {
    ($left:expr, $right:expr $(,)?) => {
        $crate::assert_grades_eq!($left, $right, ulps = 4)
    };
    ($left:expr, $right:expr, ulps = $ulps:expr $(,)?) => {{
        let ulps: i64 = $ulps;
        let left = $left
            .iter()
            .map(|value| f64::from(*value))
            .collect::<Vec<f64>>();
        let right = $right
            .iter()
            .map(|value| f64::from(*value))
            .collect::<Vec<f64>>();
        std::assert_eq!(
            left.len(),
            right.len(),
            "length mismatch: {:?} != {:?}",
            left,
            right,
        );
        for (idx, (lv, rv)) in left.iter().zip(right.iter()).enumerate() {
            if !(lv.is_nan() && rv.is_nan()) {
                std::assert!(
                    $crate::approx_eq!(f64, *lv, *rv, ulps = ulps),
                    "approximated equal assertion failed (ulps={:?}) at index {}: {:?} != {:?}",
                    ulps,
                    idx,
                    left,
                    right,
                );
            }
        }
    }};
}
