use std::cmp::Ordering;

/// Compares two `f32`, treating `NaN` as smaller than any other value.
pub(crate) fn nan_safe_f32_cmp(a: &f32, b: &f32) -> Ordering {
    a.partial_cmp(b).unwrap_or_else(|| {
        // if `partial_cmp` returns None we have at least one NaN
        match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, _) => Ordering::Less,
            (_, true) => Ordering::Greater,
            _ => unreachable!("partial_cmp returned None but both numbers are not NaN"),
        }
    })
}

/// Returns the indices which sort `values` ascending.
///
/// The sort is stable, equal values keep their relative order.
pub(crate) fn argsort(values: impl IntoIterator<Item = f32>) -> Vec<usize> {
    let mut indexed = values.into_iter().enumerate().collect::<Vec<_>>();
    indexed.sort_by(|(_, a), (_, b)| nan_safe_f32_cmp(a, b));
    indexed.into_iter().map(|(idx, _)| idx).collect()
}
