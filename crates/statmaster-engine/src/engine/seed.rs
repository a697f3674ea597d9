use std::{fmt, str::FromStr};

use rand::{
    Rng,
    distr::{Distribution, StandardUniform},
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ParseSeedError;

/// Seed for deterministic dataset generation.
///
/// A 128-bit seed for the generator's random number source. The same seed
/// and language always yield the same dataset, which makes exercises
/// shareable ("exercise `3f2a…`") and lets an answer be checked later
/// without storing the dataset itself.
///
/// Seeds are written as 32 lowercase hexadecimal characters.
///
/// # Example
///
/// ```
/// use statmaster_engine::{DatasetGenerator, DatasetSeed, Language};
/// use rand::Rng as _;
///
/// let seed: DatasetSeed = rand::rng().random();
/// let first = DatasetGenerator::with_seed(seed).generate(Language::Fr);
/// let second = DatasetGenerator::with_seed(seed).generate(Language::Fr);
/// assert_eq!(first, second);
///
/// let parsed: DatasetSeed = seed.to_string().parse().unwrap();
/// assert_eq!(parsed, seed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DatasetSeed([u8; 16]);

impl DatasetSeed {
    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; 16] {
        self.0
    }
}

impl From<[u8; 16]> for DatasetSeed {
    fn from(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for DatasetSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

impl FromStr for DatasetSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 32 || !s.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseSeedError {
                input: s.to_owned(),
            });
        }
        let num = u128::from_str_radix(s, 16).map_err(|_| ParseSeedError {
            input: s.to_owned(),
        })?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl Serialize for DatasetSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DatasetSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

/// Allows generating random seeds with `rng.random()`.
impl Distribution<DatasetSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> DatasetSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        DatasetSeed(seed)
    }
}
