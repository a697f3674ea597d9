//! Dataset generation.
//!
//! - [`DatasetGenerator`] - Seeded generator producing one dataset per call
//! - [`GeneratedDataset`] - Immutable exercise data (values, counts, raw sample, frequencies)
//! - [`FrequencyEntry`] - Frequency of one category as fraction, decimal and percentage
//! - [`DatasetSeed`] - Seed for deterministic generation
//!
//! # Generation Flow
//!
//! 1. Pick an attribute from the catalog
//! 2. Collect 4 to 6 distinct values in the attribute's range
//! 3. Draw a count in `1..=5` for each value
//! 4. Pick one rounding precision and compute every frequency
//! 5. Expand the counts into a shuffled raw sample
//!
//! # Example
//!
//! ```
//! use statmaster_engine::{DatasetSeed, Language, generate_with_seed};
//!
//! let seed: DatasetSeed = "000102030405060708090a0b0c0d0e0f".parse().unwrap();
//! let dataset = generate_with_seed(seed, Language::Fr);
//!
//! // the same seed always rebuilds the same exercise
//! assert_eq!(dataset, generate_with_seed(seed, Language::Fr));
//! assert_eq!(dataset.counts().iter().sum::<u32>(), dataset.total());
//! ```

pub use self::{dataset::*, generator::*, seed::*};

mod dataset;
mod generator;
mod seed;
