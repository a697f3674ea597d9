use arrayvec::ArrayVec;
use serde::Serialize;
use statmaster_stats::{
    SampleError, frequency::FrequencyTable, indicators::Indicators, rounding,
};

use crate::{Attribute, Fraction, Language, RoundingPrecision};

/// Maximum number of categories in a generated dataset.
pub const MAX_CATEGORIES: usize = 6;

/// Frequency of one category, in every form an exercise asks for.
///
/// The decimal and percentage forms are rounded from the exact ratio
/// `count / total`, never from another rounded value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyEntry {
    /// The category value.
    pub value: u32,
    /// Number of observations of `value`.
    pub count: u32,
    /// `count / total` in lowest terms.
    pub fraction: Fraction,
    /// `count / total` rounded to the dataset's precision.
    pub decimal: f64,
    /// `100 * count / total` rounded to the dataset's precision.
    pub percent: f64,
    /// `decimal` formatted with the language's decimal separator.
    pub decimal_formatted: String,
    /// `percent` formatted with the language's decimal separator, without `%`.
    pub percent_formatted: String,
}

impl FrequencyEntry {
    /// Computes the frequency of `count` observations out of `total`.
    ///
    /// Returns `None` if `total` is zero.
    ///
    /// ```
    /// use statmaster_engine::{FrequencyEntry, Language, RoundingPrecision};
    ///
    /// let entry =
    ///     FrequencyEntry::new(12, 3, 8, RoundingPrecision::Hundredth, Language::Fr).unwrap();
    /// assert_eq!(entry.fraction.to_string(), "3/8");
    /// assert_eq!(entry.decimal_formatted, "0,38");
    /// assert_eq!(entry.percent_formatted, "37,50");
    /// ```
    #[must_use]
    pub fn new(
        value: u32,
        count: u32,
        total: u32,
        precision: RoundingPrecision,
        language: Language,
    ) -> Option<Self> {
        let fraction = Fraction::new(count, total)?;
        let decimals = precision.decimals();
        let separator = language.decimal_separator();

        let ratio = f64::from(count) / f64::from(total);
        let percentage = f64::from(count) * 100.0 / f64::from(total);

        Some(Self {
            value,
            count,
            fraction,
            decimal: rounding::round_to(ratio, decimals),
            percent: rounding::round_to(percentage, decimals),
            decimal_formatted: rounding::format_decimal(ratio, decimals, separator),
            percent_formatted: rounding::format_decimal(percentage, decimals, separator),
        })
    }
}

/// A randomly generated survey used as an exercise.
///
/// The dataset lists distinct category values with their counts, the raw
/// observations in shuffled order, and the frequency of each category.
/// It is immutable once generated.
///
/// # Invariants
///
/// - `values` are distinct and strictly increasing, within the attribute's range
/// - `counts[i]` is in `1..=5` and `total == counts.iter().sum()`
/// - `raw_sample` holds `values[i]` exactly `counts[i]` times, and nothing else
/// - `frequencies[i]` describes `values[i]`
///
/// Fewer values than requested are produced only when the generator ran out
/// of draws; see [`GeneratedDataset::is_truncated`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedDataset {
    identifier: &'static str,
    language: Language,
    title: &'static str,
    unit: Option<&'static str>,
    axis_label: &'static str,
    values: ArrayVec<u32, MAX_CATEGORIES>,
    counts: ArrayVec<u32, MAX_CATEGORIES>,
    total: u32,
    raw_sample: Vec<u32>,
    frequencies: Vec<FrequencyEntry>,
    rounding_precision: RoundingPrecision,
    requested_categories: usize,
}

impl GeneratedDataset {
    pub(crate) fn new(
        attribute: &Attribute,
        language: Language,
        values: ArrayVec<u32, MAX_CATEGORIES>,
        counts: ArrayVec<u32, MAX_CATEGORIES>,
        raw_sample: Vec<u32>,
        rounding_precision: RoundingPrecision,
        requested_categories: usize,
    ) -> Self {
        debug_assert_eq!(values.len(), counts.len());
        debug_assert!(values.is_sorted_by(|a, b| a < b));

        let total = counts.iter().sum();
        let frequencies = values
            .iter()
            .zip(&counts)
            .filter_map(|(&value, &count)| {
                FrequencyEntry::new(value, count, total, rounding_precision, language)
            })
            .collect();

        Self {
            identifier: attribute.id(),
            language,
            title: attribute.title_in(language),
            unit: attribute.unit_symbol(),
            axis_label: attribute.axis_label_in(language),
            values,
            counts,
            total,
            raw_sample,
            frequencies,
            rounding_precision,
            requested_categories,
        }
    }

    /// Identifier of the surveyed attribute.
    #[must_use]
    pub fn identifier(&self) -> &'static str {
        self.identifier
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        self.title
    }

    #[must_use]
    pub fn unit(&self) -> Option<&'static str> {
        self.unit
    }

    #[must_use]
    pub fn axis_label(&self) -> &'static str {
        self.axis_label
    }

    /// Distinct category values in ascending order.
    #[must_use]
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Count of each category, in the order of [`Self::values`].
    #[must_use]
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    /// Total number of observations.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Every observation, in shuffled order.
    #[must_use]
    pub fn raw_sample(&self) -> &[u32] {
        &self.raw_sample
    }

    #[must_use]
    pub fn frequencies(&self) -> &[FrequencyEntry] {
        &self.frequencies
    }

    /// Returns the frequency entry of `value`, if it is a category.
    #[must_use]
    pub fn frequency_of(&self, value: u32) -> Option<&FrequencyEntry> {
        self.frequencies.iter().find(|entry| entry.value == value)
    }

    #[must_use]
    pub fn rounding_precision(&self) -> RoundingPrecision {
        self.rounding_precision
    }

    /// Number of categories the generator aimed for.
    #[must_use]
    pub fn requested_categories(&self) -> usize {
        self.requested_categories
    }

    /// Returns `true` if the generator ran out of draws before collecting the
    /// requested number of distinct values.
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.values.len() < self.requested_categories
    }

    /// Builds the frequency table of the raw sample.
    #[must_use]
    pub fn frequency_table(&self) -> FrequencyTable<u32> {
        FrequencyTable::new(self.raw_sample.iter().copied())
    }

    /// Computes the indicators of the raw sample.
    ///
    /// # Errors
    ///
    /// Only fails for an empty sample, which a generated dataset never has.
    pub fn indicators(&self) -> Result<Indicators, SampleError> {
        Indicators::new(self.raw_sample.iter().copied().map(f64::from))
    }
}
