use serde::{Deserialize, Serialize};

use crate::{
    SampleError,
    quartiles::Quartiles,
    rounding::MeanRounding,
};

/// Descriptive indicators of a numeric sample.
///
/// This is the set of indicators taught in middle school: central tendency
/// (mean, median), position (quartiles) and dispersion (range, interquartile
/// range). Quartiles use the nearest-rank convention, see [`crate::quartiles`].
///
/// The mean is stored unrounded; use [`Indicators::rounded_mean`] to apply a
/// display policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Indicators {
    /// Number of values in the sample.
    pub count: usize,
    /// The smallest value.
    pub min: f64,
    /// The largest value.
    pub max: f64,
    /// The arithmetic mean, unrounded.
    pub mean: f64,
    /// The median value.
    pub median: f64,
    /// First quartile (nearest rank).
    pub q1: f64,
    /// Third quartile (nearest rank).
    pub q3: f64,
    /// `max - min`.
    pub range: f64,
    /// `q3 - q1`.
    pub interquartile_range: f64,
    /// The sample sorted in ascending order.
    pub sorted_values: Vec<f64>,
}

impl Indicators {
    /// Computes indicators from unsorted values.
    ///
    /// The values are collected and sorted internally, so callers passing a
    /// slice iterator keep their own ordering.
    ///
    /// # Errors
    ///
    /// * [`SampleError::Empty`] - if the sample has no value
    /// * [`SampleError::NotANumber`] - if a value is NaN or infinite
    ///
    /// # Examples
    ///
    /// ```
    /// # use statmaster_stats::indicators::Indicators;
    /// let sample = [1.0, 3.0, 3.0, 6.0, 7.0, 8.0, 9.0];
    /// let stats = Indicators::new(sample.iter().copied()).unwrap();
    /// assert_eq!(stats.median, 6.0);
    /// assert_eq!(stats.q1, 3.0);
    /// assert_eq!(stats.q3, 8.0);
    /// assert_eq!(stats.range, 8.0);
    /// assert_eq!(stats.interquartile_range, 5.0);
    /// ```
    pub fn new<I>(values: I) -> Result<Self, SampleError>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        validate(&values)?;
        values.sort_by(f64::total_cmp);
        Ok(Self::compute(values))
    }

    /// Computes indicators from pre-sorted values.
    ///
    /// # Errors
    ///
    /// Same as [`Indicators::new`].
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    pub fn from_sorted(sorted_values: &[f64]) -> Result<Self, SampleError> {
        validate(sorted_values)?;
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );
        Ok(Self::compute(sorted_values.to_vec()))
    }

    #[expect(clippy::cast_precision_loss)]
    fn compute(sorted_values: Vec<f64>) -> Self {
        debug_assert!(!sorted_values.is_empty());

        let count = sorted_values.len();
        let min = sorted_values[0];
        let max = sorted_values[count - 1];
        let n = count as f64;
        let sum = sorted_values.iter().sum::<f64>();
        let mean = if sum.is_finite() {
            sum / n
        } else {
            // the sum overflowed; the scaled terms cannot
            sorted_values.iter().map(|v| v / n).sum()
        };
        let Quartiles { q1, median, q3 } =
            Quartiles::from_sorted(&sorted_values).unwrap_or(Quartiles {
                q1: min,
                median: min,
                q3: max,
            });

        Self {
            count,
            min,
            max,
            mean,
            median,
            q1,
            q3,
            range: max - min,
            interquartile_range: q3 - q1,
            sorted_values,
        }
    }

    /// Returns the mean rounded with the given policy.
    ///
    /// ```
    /// # use statmaster_stats::{indicators::Indicators, rounding::MeanRounding};
    /// let stats = Indicators::new([1.0, 2.0, 2.0]).unwrap();
    /// assert_eq!(stats.rounded_mean(MeanRounding::OneDecimal), 1.7);
    /// assert_eq!(stats.rounded_mean(MeanRounding::TwoDecimals), 1.67);
    /// ```
    #[must_use]
    pub fn rounded_mean(&self, rounding: MeanRounding) -> f64 {
        rounding.apply(self.mean)
    }
}

/// Rejects empty samples and non-finite values before any sorting.
pub(crate) fn validate(values: &[f64]) -> Result<(), SampleError> {
    if values.is_empty() {
        return Err(SampleError::Empty);
    }
    if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(SampleError::NotANumber { index, value });
    }
    Ok(())
}
