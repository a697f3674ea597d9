use std::iter;

use arrayvec::ArrayVec;
use rand::{Rng, SeedableRng as _, seq::SliceRandom};
use rand_pcg::Pcg32;

use super::{
    dataset::{GeneratedDataset, MAX_CATEGORIES},
    seed::DatasetSeed,
};
use crate::{ATTRIBUTES, Attribute, Language, RoundingPrecision};

/// Minimum number of categories requested per dataset.
pub const MIN_CATEGORIES: usize = 4;
/// Largest count drawn for a single category.
pub const MAX_COUNT: u32 = 5;
/// Number of draws allowed to collect distinct category values.
pub const DRAW_ATTEMPTS: usize = 100;

/// Generates exercise datasets from a seeded random source.
///
/// # Example
///
/// ```
/// use statmaster_engine::{DatasetGenerator, Language};
///
/// let mut generator = DatasetGenerator::new();
/// let dataset = generator.generate(Language::En);
///
/// assert_eq!(dataset.raw_sample().len(), dataset.total() as usize);
/// assert!(dataset.values().is_sorted());
/// ```
#[derive(Debug, Clone)]
pub struct DatasetGenerator {
    rng: Pcg32,
}

impl Default for DatasetGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetGenerator {
    /// Creates a generator with a random seed.
    ///
    /// For reproducible datasets, use [`Self::with_seed`] instead.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Like [`Self::new`], but with a specific seed for deterministic generation.
    #[must_use]
    pub fn with_seed(seed: DatasetSeed) -> Self {
        Self {
            rng: Pcg32::from_seed(seed.to_bytes()),
        }
    }

    /// Generates the next dataset from the full attribute catalog.
    pub fn generate(&mut self, language: Language) -> GeneratedDataset {
        generate(&mut self.rng, language)
    }
}

/// Generates the single dataset identified by `seed`.
///
/// This is the first dataset of [`DatasetGenerator::with_seed`], and the
/// way an exercise is rebuilt from its seed.
#[must_use]
pub fn generate_with_seed(seed: DatasetSeed, language: Language) -> GeneratedDataset {
    DatasetGenerator::with_seed(seed).generate(language)
}

/// Generates a dataset from the full attribute catalog.
pub fn generate<R>(rng: &mut R, language: Language) -> GeneratedDataset
where
    R: Rng + ?Sized,
{
    generate_from_catalog(rng, language, ATTRIBUTES)
}

/// Generates a dataset from an attribute picked uniformly in `catalog`.
///
/// 1. Picks an attribute
/// 2. Requests 4 to 6 categories, at most as many as the range holds
/// 3. Draws values until that many distinct ones are collected, giving up
///    after [`DRAW_ATTEMPTS`] draws
/// 4. Draws a count in `1..=5` for each value
/// 5. Picks a rounding precision and computes the frequencies
/// 6. Expands and shuffles the raw sample
///
/// # Panics
///
/// Panics if `catalog` is empty.
pub fn generate_from_catalog<R>(
    rng: &mut R,
    language: Language,
    catalog: &[Attribute],
) -> GeneratedDataset
where
    R: Rng + ?Sized,
{
    assert!(!catalog.is_empty(), "attribute catalog must not be empty");

    let attribute = &catalog[rng.random_range(0..catalog.len())];
    let requested = rng
        .random_range(MIN_CATEGORIES..=MAX_CATEGORIES)
        .min(attribute.value_count());
    let values = draw_distinct_values(rng, attribute, requested);
    if values.len() < requested {
        tracing::warn!(
            attribute = attribute.id(),
            requested,
            collected = values.len(),
            "ran out of draws before collecting distinct values"
        );
    }

    let counts = values
        .iter()
        .map(|_| rng.random_range(1..=MAX_COUNT))
        .collect::<ArrayVec<_, MAX_CATEGORIES>>();
    let precision = RoundingPrecision::ALL[rng.random_range(0..RoundingPrecision::ALL.len())];

    let mut raw_sample = values
        .iter()
        .zip(&counts)
        .flat_map(|(&value, &count)| iter::repeat_n(value, count as usize))
        .collect::<Vec<_>>();
    raw_sample.shuffle(rng);

    tracing::debug!(
        attribute = attribute.id(),
        %language,
        categories = values.len(),
        ?precision,
        "generated dataset"
    );

    GeneratedDataset::new(
        attribute,
        language,
        values,
        counts,
        raw_sample,
        precision,
        requested,
    )
}

/// Draws up to `requested` distinct values, returned in ascending order.
fn draw_distinct_values<R>(
    rng: &mut R,
    attribute: &Attribute,
    requested: usize,
) -> ArrayVec<u32, MAX_CATEGORIES>
where
    R: Rng + ?Sized,
{
    let requested = requested.min(MAX_CATEGORIES);
    let mut values = ArrayVec::new();
    for _ in 0..DRAW_ATTEMPTS {
        if values.len() == requested {
            break;
        }
        let value = attribute.draw_value(rng);
        if !values.contains(&value) {
            values.push(value);
        }
    }
    values.sort_unstable();
    values
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand::RngCore;

    use super::*;

    /// Random source that always yields zero bits.
    struct ZeroRng;

    impl RngCore for ZeroRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.fill(0);
        }
    }

    fn seeded(n: u8) -> DatasetGenerator {
        DatasetGenerator::with_seed(DatasetSeed::from([n; 16]))
    }

    fn sample_datasets(language: Language) -> Vec<GeneratedDataset> {
        let mut generator = seeded(42);
        (0..300).map(|_| generator.generate(language)).collect()
    }

    fn assert_invariants(dataset: &GeneratedDataset) {
        let attribute = ATTRIBUTES
            .iter()
            .find(|a| a.id() == dataset.identifier())
            .unwrap();
        let values = dataset.values();
        let counts = dataset.counts();

        // category bounds
        assert!(!dataset.is_truncated(), "{}", dataset.identifier());
        assert!(values.len() >= MIN_CATEGORIES.min(attribute.value_count()));
        assert!(values.len() <= MAX_CATEGORIES);
        assert!(values.len() <= attribute.value_count());

        // distinct, sorted, in range
        assert!(values.windows(2).all(|w| w[0] < w[1]));
        assert!(values.iter().all(|v| attribute.range().contains(v)));

        // counts and total
        assert_eq!(counts.len(), values.len());
        assert!(counts.iter().all(|c| (1..=MAX_COUNT).contains(c)));
        assert_eq!(dataset.total(), counts.iter().sum::<u32>());
        assert!(dataset.total() > 0);

        // raw sample multiset
        assert_eq!(dataset.raw_sample().len(), dataset.total() as usize);
        let mut occurrences = HashMap::new();
        for value in dataset.raw_sample() {
            *occurrences.entry(*value).or_insert(0) += 1;
        }
        assert_eq!(occurrences.len(), values.len());
        for (value, count) in values.iter().zip(counts) {
            assert_eq!(occurrences.get(value), Some(count));
        }

        // frequencies
        assert_eq!(dataset.frequencies().len(), values.len());
        for (i, entry) in dataset.frequencies().iter().enumerate() {
            assert_eq!(entry.value, values[i]);
            assert_eq!(entry.count, counts[i]);
            assert_eq!(
                crate::gcd(entry.fraction.numerator(), entry.fraction.denominator()),
                1
            );
            assert_eq!(dataset.total() % entry.fraction.denominator(), 0);
            let exact = f64::from(counts[i]) / f64::from(dataset.total());
            assert!((exact - entry.fraction.to_f64()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_invariants_hold_for_many_datasets() {
        for language in Language::ALL {
            for dataset in sample_datasets(language) {
                assert_invariants(&dataset);
            }
        }
    }

    #[test]
    fn test_every_attribute_and_precision_is_reachable() {
        let datasets = sample_datasets(Language::Fr);
        for attribute in ATTRIBUTES {
            assert!(
                datasets.iter().any(|d| d.identifier() == attribute.id()),
                "{} never generated",
                attribute.id()
            );
        }
        for precision in RoundingPrecision::ALL {
            assert!(datasets.iter().any(|d| d.rounding_precision() == precision));
        }
    }

    #[test]
    fn test_same_seed_same_dataset() {
        let first = serde_json::to_string(&seeded(9).generate(Language::Fr)).unwrap();
        let second = serde_json::to_string(&seeded(9).generate(Language::Fr)).unwrap();
        assert_eq!(first, second);

        let seed = DatasetSeed::from([9; 16]);
        assert_eq!(
            generate_with_seed(seed, Language::Fr),
            seeded(9).generate(Language::Fr)
        );
    }

    #[test]
    fn test_language_only_changes_texts() {
        let seed = DatasetSeed::from([5; 16]);
        let fr = generate_with_seed(seed, Language::Fr);
        let en = generate_with_seed(seed, Language::En);
        assert_eq!(fr.identifier(), en.identifier());
        assert_eq!(fr.values(), en.values());
        assert_eq!(fr.counts(), en.counts());
        assert_eq!(fr.raw_sample(), en.raw_sample());
        assert_eq!(fr.rounding_precision(), en.rounding_precision());
        assert_eq!(fr.language(), Language::Fr);
        assert_eq!(en.language(), Language::En);
    }

    #[test]
    fn test_formatting_follows_precision_and_language() {
        for language in Language::ALL {
            let separator = language.decimal_separator();
            for dataset in sample_datasets(language) {
                let decimals = usize::from(dataset.rounding_precision().decimals());
                for entry in dataset.frequencies() {
                    for text in [&entry.decimal_formatted, &entry.percent_formatted] {
                        let digits_after = text.split_once(separator).map_or(0, |(_, d)| d.len());
                        assert_eq!(digits_after, decimals, "{text}");
                        assert!(!text.contains('%'));
                    }
                }
            }
        }
    }

    #[test]
    fn test_hundredth_precision_has_two_digits() {
        let dataset = sample_datasets(Language::En)
            .into_iter()
            .find(|d| d.rounding_precision() == RoundingPrecision::Hundredth)
            .unwrap();
        for entry in dataset.frequencies() {
            let (_, digits) = entry.percent_formatted.split_once('.').unwrap();
            assert_eq!(digits.len(), 2);
            let (_, digits) = entry.decimal_formatted.split_once('.').unwrap();
            assert_eq!(digits.len(), 2);
        }
    }

    #[test]
    fn test_raw_sample_is_shuffled() {
        // With up to 30 observations, some dataset must come out unsorted.
        let datasets = sample_datasets(Language::Fr);
        assert!(datasets.iter().any(|d| !d.raw_sample().is_sorted()));
    }

    #[test]
    fn test_exhausted_draws_are_flagged() {
        // A constant random source keeps drawing the same value.
        let dataset = generate(&mut ZeroRng, Language::Fr);
        assert_eq!(dataset.identifier(), ATTRIBUTES[0].id());
        assert_eq!(dataset.values(), &[ATTRIBUTES[0].min()]);
        assert_eq!(dataset.requested_categories(), MIN_CATEGORIES);
        assert!(dataset.is_truncated());
        assert_eq!(dataset.counts(), &[1]);
        assert_eq!(dataset.raw_sample(), &[ATTRIBUTES[0].min()]);
        assert_eq!(dataset.frequencies()[0].fraction.to_string(), "1/1");
    }

    #[test]
    fn test_constant_random_source_is_reproducible() {
        let first = serde_json::to_string(&generate(&mut ZeroRng, Language::En)).unwrap();
        let second = serde_json::to_string(&generate(&mut ZeroRng, Language::En)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_narrow_range_is_clamped() {
        let catalog = [Attribute::new("coin", 0, 1)];
        let mut generator = seeded(1);
        for _ in 0..50 {
            let dataset = generate_from_catalog(&mut generator.rng, Language::En, &catalog);
            assert_eq!(dataset.requested_categories(), 2);
            assert_eq!(dataset.values(), &[0, 1]);
            assert!(!dataset.is_truncated());
        }
    }

    #[test]
    fn test_single_value_range() {
        let catalog = [Attribute::new("constant", 7, 7)];
        let dataset = generate_from_catalog(&mut seeded(2).rng, Language::Fr, &catalog);
        assert_eq!(dataset.values(), &[7]);
        assert_eq!(dataset.frequencies()[0].percent, 100.0);
    }

    #[test]
    fn test_indicators_and_frequency_table() {
        let dataset = seeded(3).generate(Language::En);
        let table = dataset.frequency_table();
        assert_eq!(table.total(), u64::from(dataset.total()));
        for (value, count) in dataset.values().iter().zip(dataset.counts()) {
            assert_eq!(table.count_of(value), u64::from(*count));
        }

        let indicators = dataset.indicators().unwrap();
        assert_eq!(indicators.count, dataset.total() as usize);
        assert_eq!(indicators.min, f64::from(dataset.values()[0]));
        assert!(indicators.q1 <= indicators.median && indicators.median <= indicators.q3);
    }

    #[test]
    #[should_panic(expected = "catalog must not be empty")]
    fn test_empty_catalog_panics() {
        let _ = generate_from_catalog(&mut ZeroRng, Language::Fr, &[]);
    }
}
