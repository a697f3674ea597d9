use std::{
    fs::{self, File},
    io::{self, BufWriter},
    path::{Path, PathBuf},
};

use anyhow::{Context, bail};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use statmaster_engine::{DatasetSeed, Language, grading::Verdict};

use crate::util;

/// Completed practice rounds of one session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PracticeHistory {
    pub rounds: Vec<RoundRecord>,
}

/// One completed practice round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// When the last answer of the round was submitted
    pub completed_at: DateTime<Utc>,
    /// Seed that rebuilds the round's dataset
    pub seed: DatasetSeed,
    pub language: Language,
    /// Identifier of the surveyed attribute
    pub attribute: String,
    /// One verdict per question, holding the learner's answer
    pub verdicts: Vec<Verdict>,
    /// Percentage of correct answers
    pub score: u8,
}

impl PracticeHistory {
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Writes the history to a new timestamped JSON file in `history_dir`.
    ///
    /// Existing files are never overwritten: a numeric suffix is added when a
    /// session was already saved in the same second.
    pub fn save(&self, history_dir: &Path) -> anyhow::Result<PathBuf> {
        fs::create_dir_all(history_dir)
            .with_context(|| format!("Failed to create directory {}", history_dir.display()))?;

        let stem = format!("practice_{}", Utc::now().format("%Y%m%d_%H%M%S"));
        let (file, filepath) = create_unique(history_dir, &stem)?;
        util::write_pretty(BufWriter::new(file), self)
            .with_context(|| format!("Failed to write JSON to {}", filepath.display()))?;

        tracing::info!(path = %filepath.display(), rounds = self.rounds.len(), "saved practice history");
        Ok(filepath)
    }
}

const MAX_NAME_ATTEMPTS: u32 = 1000;

fn create_unique(dir: &Path, stem: &str) -> anyhow::Result<(File, PathBuf)> {
    for attempt in 0..MAX_NAME_ATTEMPTS {
        let filename = if attempt == 0 {
            format!("{stem}.json")
        } else {
            format!("{stem}_{attempt}.json")
        };
        let filepath = dir.join(filename);
        match File::create_new(&filepath) {
            Ok(file) => return Ok((file, filepath)),
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {}
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Failed to create file: {}", filepath.display()));
            }
        }
    }
    bail!("No free history file name for {stem} in {}", dir.display())
}

#[cfg(test)]
mod tests {
    use statmaster_engine::grading::Question;

    use super::*;

    #[test]
    fn test_round_record_json_shape() {
        let record = RoundRecord {
            completed_at: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
            seed: DatasetSeed::from([0xab; 16]),
            language: Language::Fr,
            attribute: "shoe_size".to_owned(),
            verdicts: vec![Verdict {
                question: Question::Median,
                answer: 38.0,
                expected: 38.0,
                is_correct: true,
            }],
            score: 100,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["completed_at"], "2023-11-14T22:13:20Z");
        assert_eq!(json["seed"], "abababababababababababababababab");
        assert_eq!(json["language"], "fr");
        assert_eq!(json["verdicts"][0]["question"]["kind"], "median");

        let back: RoundRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_saves_in_the_same_second_do_not_overwrite() {
        let dir = std::env::temp_dir().join(format!("statmaster_history_{}", std::process::id()));
        let history = PracticeHistory::default();

        let paths = (0..3)
            .map(|_| history.save(&dir).unwrap())
            .collect::<Vec<_>>();
        assert_ne!(paths[0], paths[1]);
        assert_ne!(paths[1], paths[2]);
        assert_ne!(paths[0], paths[2]);
        for path in &paths {
            let back: PracticeHistory =
                serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
            assert!(back.is_empty());
        }
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_create_unique_adds_suffix() {
        let dir = std::env::temp_dir().join(format!("statmaster_unique_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let (_, first) = create_unique(&dir, "practice_x").unwrap();
        let (_, second) = create_unique(&dir, "practice_x").unwrap();
        assert!(first.ends_with("practice_x.json"));
        assert!(second.ends_with("practice_x_1.json"));
        fs::remove_dir_all(&dir).unwrap();
    }
}
