//! Checking learner answers against computed indicators.
//!
//! Tolerances:
//!
//! - mean: within 0.1 of the exact mean, so both one- and two-decimal
//!   roundings are accepted
//! - median, quartiles, range, interquartile range: exact
//! - frequency as a decimal: exactly the ratio rounded to the dataset's
//!   precision
//! - frequency percentage: within 1 point of the exact percentage

use serde::{Deserialize, Serialize};
use statmaster_stats::{SampleError, indicators::Indicators};

use crate::{FrequencyEntry, GeneratedDataset, Language};

/// Largest accepted distance between a mean answer and the exact mean.
pub const MEAN_TOLERANCE: f64 = 0.1;
/// Largest accepted distance, in points, for a frequency percentage.
pub const PERCENT_TOLERANCE: f64 = 1.0;
/// Slack for float noise on answers that must be exact.
const EXACT_TOLERANCE: f64 = 1e-9;

/// A question asked about a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Question {
    Mean,
    Median,
    FirstQuartile,
    ThirdQuartile,
    Range,
    InterquartileRange,
    /// Frequency of one category, as a rounded decimal number.
    Frequency { value: u32 },
    /// Frequency of one category, as a percentage.
    Percentage { value: u32 },
}

impl Question {
    /// Largest accepted distance between an answer and the expected value.
    #[must_use]
    pub const fn tolerance(self) -> f64 {
        match self {
            Self::Mean => MEAN_TOLERANCE + EXACT_TOLERANCE,
            Self::Percentage { .. } => PERCENT_TOLERANCE + EXACT_TOLERANCE,
            Self::Median
            | Self::FirstQuartile
            | Self::ThirdQuartile
            | Self::Range
            | Self::InterquartileRange
            | Self::Frequency { .. } => EXACT_TOLERANCE,
        }
    }

    /// Short localized label, e.g. "Premier quartile (Q1)".
    #[must_use]
    pub fn label(self, language: Language) -> String {
        let (fr, en) = match self {
            Self::Mean => ("Moyenne", "Mean"),
            Self::Median => ("Médiane", "Median"),
            Self::FirstQuartile => ("Premier quartile (Q1)", "First quartile (Q1)"),
            Self::ThirdQuartile => ("Troisième quartile (Q3)", "Third quartile (Q3)"),
            Self::Range => ("Étendue", "Range"),
            Self::InterquartileRange => ("Écart interquartile", "Interquartile range"),
            Self::Frequency { value } => {
                return match language {
                    Language::Fr => format!("Fréquence de la valeur {value} (décimale)"),
                    Language::En => format!("Frequency of the value {value} (decimal)"),
                };
            }
            Self::Percentage { value } => {
                return match language {
                    Language::Fr => format!("Fréquence de la valeur {value} (en %)"),
                    Language::En => format!("Frequency of the value {value} (in %)"),
                };
            }
        };
        match language {
            Language::Fr => fr.to_owned(),
            Language::En => en.to_owned(),
        }
    }

    /// The category a frequency question is about, if any.
    #[must_use]
    pub const fn category(self) -> Option<u32> {
        match self {
            Self::Frequency { value } | Self::Percentage { value } => Some(value),
            Self::Mean
            | Self::Median
            | Self::FirstQuartile
            | Self::ThirdQuartile
            | Self::Range
            | Self::InterquartileRange => None,
        }
    }
}

/// Outcome of checking one answer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub question: Question,
    pub answer: f64,
    pub expected: f64,
    pub is_correct: bool,
}

/// Expected answers for a sample.
///
/// # Example
///
/// ```
/// use statmaster_engine::grading::{AnswerKey, Question};
/// use statmaster_stats::indicators::Indicators;
///
/// let key = AnswerKey::from_indicators(Indicators::new([4.0, 8.0, 2.0, 6.0]).unwrap());
/// assert!(key.check(Question::Mean, 5.05).unwrap().is_correct);
/// assert!(!key.check(Question::Median, 4.9).unwrap().is_correct);
/// // no frequency is known for a bare sample
/// assert!(key.check(Question::Percentage { value: 4 }, 25.0).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnswerKey {
    indicators: Indicators,
    frequencies: Vec<FrequencyEntry>,
}

impl AnswerKey {
    /// Answer key for indicator questions only.
    #[must_use]
    pub fn from_indicators(indicators: Indicators) -> Self {
        Self {
            indicators,
            frequencies: vec![],
        }
    }

    /// Answer key for every question about a generated dataset.
    ///
    /// # Errors
    ///
    /// Propagates [`GeneratedDataset::indicators`] errors.
    pub fn from_dataset(dataset: &GeneratedDataset) -> Result<Self, SampleError> {
        Ok(Self {
            indicators: dataset.indicators()?,
            frequencies: dataset.frequencies().to_vec(),
        })
    }

    #[must_use]
    pub fn indicators(&self) -> &Indicators {
        &self.indicators
    }

    /// Returns the expected value, or `None` if the question does not apply
    /// (frequency of a value that is not a category).
    ///
    /// Decimal frequencies are expected rounded to the dataset's precision;
    /// every other answer is the exact value.
    #[must_use]
    pub fn expected(&self, question: Question) -> Option<f64> {
        let stats = &self.indicators;
        let value = match question {
            Question::Mean => stats.mean,
            Question::Median => stats.median,
            Question::FirstQuartile => stats.q1,
            Question::ThirdQuartile => stats.q3,
            Question::Range => stats.range,
            Question::InterquartileRange => stats.interquartile_range,
            Question::Frequency { value } => self.entry(value)?.decimal,
            Question::Percentage { value } => self.entry(value)?.fraction.to_f64() * 100.0,
        };
        Some(value)
    }

    /// Checks `answer` against the expected value of `question`.
    #[must_use]
    pub fn check(&self, question: Question, answer: f64) -> Option<Verdict> {
        let expected = self.expected(question)?;
        let is_correct = answer.is_finite() && (answer - expected).abs() <= question.tolerance();
        Some(Verdict {
            question,
            answer,
            expected,
            is_correct,
        })
    }

    fn entry(&self, value: u32) -> Option<&FrequencyEntry> {
        self.frequencies.iter().find(|entry| entry.value == value)
    }
}

/// The questions of a practice round on `dataset`.
///
/// The round starts with the indicators of the raw sample (mean, median,
/// quartiles), then asks for the decimal frequency of every category and
/// finally for one percentage, about the most frequent category (the
/// smallest value on ties).
#[must_use]
pub fn practice_questions(dataset: &GeneratedDataset) -> Vec<Question> {
    let mut questions = vec![
        Question::Mean,
        Question::Median,
        Question::FirstQuartile,
        Question::ThirdQuartile,
    ];
    questions.extend(
        dataset
            .values()
            .iter()
            .map(|&value| Question::Frequency { value }),
    );
    let most_frequent = dataset
        .values()
        .iter()
        .zip(dataset.counts())
        .rev()
        .max_by_key(|(_, count)| **count)
        .map(|(value, _)| *value);
    if let Some(value) = most_frequent {
        questions.push(Question::Percentage { value });
    }
    questions
}

/// Percentage of correct verdicts, rounded to the nearest integer.
///
/// ```
/// use statmaster_engine::grading::{Question, Verdict, score};
///
/// let verdict = |is_correct| Verdict {
///     question: Question::Mean,
///     answer: 0.0,
///     expected: 0.0,
///     is_correct,
/// };
/// assert_eq!(score(&[verdict(true), verdict(true), verdict(false)]), 67);
/// assert_eq!(score(&[]), 0);
/// ```
#[must_use]
pub fn score(verdicts: &[Verdict]) -> u8 {
    if verdicts.is_empty() {
        return 0;
    }
    let correct = verdicts.iter().filter(|v| v.is_correct).count();
    let percent = (correct * 100 + verdicts.len() / 2) / verdicts.len();
    u8::try_from(percent).unwrap_or(100)
}
