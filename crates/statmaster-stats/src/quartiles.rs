use crate::{SampleError, indicators};

/// Median and classroom quartiles of a dataset.
///
/// Quartiles follow the nearest-rank convention used in French middle
/// school: Q1 is the first value whose rank is at least `n/4`, Q3 the first
/// value whose rank is at least `3n/4`. There is no interpolation, so both
/// quartiles are always values of the sample.
///
/// # Examples
///
/// ```
/// use statmaster_stats::quartiles::Quartiles;
///
/// let quartiles = Quartiles::new(&[1.0, 3.0, 3.0, 6.0, 7.0, 8.0, 9.0]).unwrap();
/// assert_eq!(quartiles.q1, 3.0);
/// assert_eq!(quartiles.median, 6.0);
/// assert_eq!(quartiles.q3, 8.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quartiles {
    /// First quartile (rank `ceil(n/4)`).
    pub q1: f64,
    /// Median (middle value, or mean of the two middle values).
    pub median: f64,
    /// Third quartile (rank `ceil(3n/4)`).
    pub q3: f64,
}

impl Quartiles {
    /// Computes quartiles from sorted values.
    ///
    /// Returns `None` if `sorted_values` is empty.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        Some(Self {
            q1: first_quartile(sorted_values)?,
            median: median(sorted_values)?,
            q3: third_quartile(sorted_values)?,
        })
    }

    /// Computes quartiles from unsorted values.
    ///
    /// The values are copied and sorted internally; the input is left untouched.
    ///
    /// # Errors
    ///
    /// * [`SampleError::Empty`] - if `values` is empty
    /// * [`SampleError::NotANumber`] - if a value is NaN or infinite
    pub fn new(values: &[f64]) -> Result<Self, SampleError> {
        indicators::validate(values)?;
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        Self::from_sorted(&sorted).ok_or(SampleError::Empty)
    }
}

/// Returns the value at the 1-indexed rank `ceil(n * numerator / denominator)`.
///
/// This is the nearest-rank method: the rank is rounded up and the value is
/// read directly from the sorted data. A zero rank is promoted to 1 so that
/// the smallest value is returned for tiny samples.
///
/// Returns `None` if `sorted_values` is empty or `denominator` is zero.
///
/// # Examples
///
/// ```
/// use statmaster_stats::quartiles::nearest_rank;
///
/// let values = [2.0, 4.0, 6.0, 8.0];
/// assert_eq!(nearest_rank(&values, 1, 4), Some(2.0));
/// assert_eq!(nearest_rank(&values, 3, 4), Some(6.0));
/// assert_eq!(nearest_rank(&[], 1, 4), None);
/// ```
#[must_use]
pub fn nearest_rank(sorted_values: &[f64], numerator: usize, denominator: usize) -> Option<f64> {
    if denominator == 0 {
        return None;
    }
    let rank = (sorted_values.len() * numerator)
        .div_ceil(denominator)
        .max(1);
    sorted_values.get(rank - 1).copied()
}

/// First quartile: value at rank `ceil(n/4)`.
#[must_use]
pub fn first_quartile(sorted_values: &[f64]) -> Option<f64> {
    nearest_rank(sorted_values, 1, 4)
}

/// Third quartile: value at rank `ceil(3n/4)`.
#[must_use]
pub fn third_quartile(sorted_values: &[f64]) -> Option<f64> {
    nearest_rank(sorted_values, 3, 4)
}

/// Median of sorted values.
///
/// For an odd count this is the middle value; for an even count, the mean of
/// the two middle values.
///
/// # Examples
///
/// ```
/// use statmaster_stats::quartiles::median;
///
/// assert_eq!(median(&[1.0, 2.0, 9.0]), Some(2.0));
/// assert_eq!(median(&[1.0, 2.0, 4.0, 9.0]), Some(3.0));
/// ```
#[must_use]
pub fn median(sorted_values: &[f64]) -> Option<f64> {
    let n = sorted_values.len();
    if n == 0 {
        return None;
    }
    if n % 2 == 1 {
        Some(sorted_values[(n - 1) / 2])
    } else {
        Some(f64::midpoint(sorted_values[n / 2 - 1], sorted_values[n / 2]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quartiles_odd_sample() {
        let values = [1.0, 3.0, 3.0, 6.0, 7.0, 8.0, 9.0];
        let quartiles = Quartiles::from_sorted(&values).unwrap();
        assert_eq!(quartiles.q1, 3.0);
        assert_eq!(quartiles.median, 6.0);
        assert_eq!(quartiles.q3, 8.0);
    }

    #[test]
    fn test_quartiles_even_sample() {
        let quartiles = Quartiles::new(&[4.0, 8.0, 2.0, 6.0]).unwrap();
        assert_eq!(quartiles.q1, 2.0);
        assert_eq!(quartiles.median, 5.0);
        assert_eq!(quartiles.q3, 6.0);
    }

    #[test]
    fn test_quartiles_are_not_interpolated() {
        // Interpolated methods would give 2.5 and 6.5 here
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let quartiles = Quartiles::from_sorted(&values).unwrap();
        assert_eq!(quartiles.q1, 2.0);
        assert_eq!(quartiles.q3, 6.0);
    }

    #[test]
    fn test_single_value() {
        let quartiles = Quartiles::from_sorted(&[42.0]).unwrap();
        assert_eq!(quartiles.q1, 42.0);
        assert_eq!(quartiles.median, 42.0);
        assert_eq!(quartiles.q3, 42.0);
    }

    #[test]
    fn test_two_values() {
        let quartiles = Quartiles::from_sorted(&[1.0, 5.0]).unwrap();
        // ceil(2/4) = 1, ceil(6/4) = 2
        assert_eq!(quartiles.q1, 1.0);
        assert_eq!(quartiles.median, 3.0);
        assert_eq!(quartiles.q3, 5.0);
    }

    #[test]
    fn test_empty() {
        assert!(Quartiles::from_sorted(&[]).is_none());
        assert!(median(&[]).is_none());
        assert!(first_quartile(&[]).is_none());
    }

    #[test]
    fn test_new_rejects_invalid_samples() {
        assert_eq!(Quartiles::new(&[]), Err(SampleError::Empty));
        let err = Quartiles::new(&[f64::NAN, 1.0]).unwrap_err();
        assert!(matches!(err, SampleError::NotANumber { index: 0, .. }));
        let err = Quartiles::new(&[2.0, f64::NEG_INFINITY]).unwrap_err();
        assert!(matches!(err, SampleError::NotANumber { index: 1, .. }));
    }

    #[test]
    fn test_nearest_rank_zero_denominator() {
        assert_eq!(nearest_rank(&[1.0, 2.0], 1, 0), None);
    }

    #[test]
    fn test_ordering_holds_for_every_size() {
        for n in 1..=40 {
            let values = (0..n).map(f64::from).collect::<Vec<_>>();
            let quartiles = Quartiles::from_sorted(&values).unwrap();
            assert!(quartiles.q1 <= quartiles.median, "n = {n}");
            assert!(quartiles.median <= quartiles.q3, "n = {n}");
        }
    }

    #[test]
    #[should_panic(expected = "values must be sorted")]
    fn test_from_sorted_rejects_unsorted() {
        let _ = Quartiles::from_sorted(&[3.0, 1.0]);
    }
}
