use serde::Serialize;
use statmaster_engine::{DatasetSeed, GeneratedDataset};

/// A generated dataset together with the seed that rebuilds it.
#[derive(Debug, Clone, Serialize)]
pub struct Exercise {
    pub seed: DatasetSeed,
    #[serde(flatten)]
    pub dataset: GeneratedDataset,
}

#[cfg(test)]
mod tests {
    use statmaster_engine::{Language, generate_with_seed};

    use super::*;

    #[test]
    fn test_seed_is_serialized_next_to_dataset_fields() {
        let seed = DatasetSeed::from([1; 16]);
        let exercise = Exercise {
            seed,
            dataset: generate_with_seed(seed, Language::En),
        };
        let json = serde_json::to_value(&exercise).unwrap();
        assert_eq!(json["seed"], "01010101010101010101010101010101");
        assert_eq!(json["language"], "en");
        assert_eq!(json["total"], exercise.dataset.total());
        assert!(json["raw_sample"].is_array());
    }
}
