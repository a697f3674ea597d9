use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A frequency table ("tableau d'effectifs") of a discrete sample.
///
/// Each row holds one distinct value of the sample with its count, in
/// ascending order of value.
///
/// # Examples
///
/// ```
/// use statmaster_stats::frequency::FrequencyTable;
///
/// let table = FrequencyTable::new([12, 10, 12, 15, 10, 12]);
/// let values = table.rows().iter().map(|row| row.value).collect::<Vec<_>>();
/// assert_eq!(values, vec![10, 12, 15]);
/// assert_eq!(table.count_of(&12), 3);
/// assert_eq!(table.relative_frequency(&15), Some(1.0 / 6.0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyTable<T> {
    rows: Vec<FrequencyRow<T>>,
    total: u64,
}

/// A single row of a [`FrequencyTable`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyRow<T> {
    /// The value of this row.
    pub value: T,
    /// Number of occurrences of `value` ("effectif").
    pub count: u64,
    /// Number of values less than or equal to `value` ("effectif cumulé croissant").
    pub cumulative_count: u64,
}

impl<T> Default for FrequencyTable<T> {
    fn default() -> Self {
        Self {
            rows: vec![],
            total: 0,
        }
    }
}

impl<T> FrequencyTable<T>
where
    T: Ord + Copy,
{
    /// Counts the occurrences of each distinct value.
    #[must_use]
    pub fn new<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut counts = BTreeMap::new();
        for value in values {
            *counts.entry(value).or_insert(0) += 1;
        }
        Self::from_counts(counts)
    }

    /// Builds a table from `(value, count)` pairs.
    ///
    /// Pairs with the same value are merged and zero counts are dropped.
    #[must_use]
    pub fn from_counts<I>(counts: I) -> Self
    where
        I: IntoIterator<Item = (T, u64)>,
    {
        let mut merged = BTreeMap::new();
        for (value, count) in counts {
            *merged.entry(value).or_insert(0) += count;
        }

        let mut total = 0;
        let rows = merged
            .into_iter()
            .filter(|(_, count)| *count > 0)
            .map(|(value, count)| {
                total += count;
                FrequencyRow {
                    value,
                    count,
                    cumulative_count: total,
                }
            })
            .collect();
        Self { rows, total }
    }

    /// Returns the rows in ascending order of value.
    #[must_use]
    pub fn rows(&self) -> &[FrequencyRow<T>] {
        &self.rows
    }

    /// Returns the total number of values.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Returns `true` if the table has no value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the count of `value`, zero if it does not appear.
    #[must_use]
    pub fn count_of(&self, value: &T) -> u64 {
        self.rows
            .binary_search_by(|row| row.value.cmp(value))
            .map_or(0, |idx| self.rows[idx].count)
    }

    /// Returns `count / total` for `value`, or `None` if the table is empty.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn relative_frequency(&self, value: &T) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        Some(self.count_of(value) as f64 / self.total as f64)
    }

    /// Expands the table back into a sorted sample.
    #[must_use]
    pub fn to_sorted_sample(&self) -> Vec<T> {
        self.rows
            .iter()
            .flat_map(|row| std::iter::repeat_n(row.value, usize::try_from(row.count).unwrap_or(0)))
            .collect()
    }
}
