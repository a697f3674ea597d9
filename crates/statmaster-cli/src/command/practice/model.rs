use chrono::Utc;
use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg32;
use statmaster_engine::{
    DatasetSeed, GeneratedDataset, Language, generate_with_seed,
    grading::{self, AnswerKey, Question, Verdict},
};
use statmaster_stats::{SampleError, sample::parse_number};

use crate::schema::history::RoundRecord;

/// User intents, translated from key events by the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Input(char),
    Backspace,
    Submit,
    NewRound,
    Quit,
}

/// Part of a round the learner is working on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Indicators of the raw sample.
    Indicators,
    /// Frequencies read from the frequency table.
    Frequencies,
}

/// One exercise: a dataset and the answers given so far.
#[derive(Debug)]
pub struct Round {
    seed: DatasetSeed,
    dataset: GeneratedDataset,
    key: AnswerKey,
    questions: Vec<Question>,
    verdicts: Vec<Verdict>,
}

impl Round {
    fn new(seed: DatasetSeed, language: Language) -> Result<Self, SampleError> {
        let dataset = generate_with_seed(seed, language);
        let key = AnswerKey::from_dataset(&dataset)?;
        let questions = grading::practice_questions(&dataset);
        Ok(Self {
            seed,
            dataset,
            key,
            questions,
            verdicts: vec![],
        })
    }

    pub fn seed(&self) -> DatasetSeed {
        self.seed
    }

    pub fn dataset(&self) -> &GeneratedDataset {
        &self.dataset
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Verdicts of the answered questions, in question order.
    pub fn verdicts(&self) -> &[Verdict] {
        &self.verdicts
    }

    /// The question waiting for an answer, if any.
    pub fn current_question(&self) -> Option<Question> {
        self.questions.get(self.verdicts.len()).copied()
    }

    /// The step of the current question; a completed round stays on the
    /// frequency table.
    pub fn step(&self) -> Step {
        match self.current_question() {
            Some(question) if question.category().is_none() => Step::Indicators,
            _ => Step::Frequencies,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.verdicts.len() == self.questions.len()
    }

    pub fn score(&self) -> u8 {
        grading::score(&self.verdicts)
    }

    fn to_record(&self) -> RoundRecord {
        RoundRecord {
            completed_at: Utc::now(),
            seed: self.seed,
            language: self.dataset.language(),
            attribute: self.dataset.identifier().to_owned(),
            verdicts: self.verdicts.clone(),
            score: self.score(),
        }
    }
}

/// State of a practice session.
#[derive(Debug)]
pub struct PracticeModel {
    language: Language,
    seeds: Pcg32,
    round: Round,
    round_number: usize,
    input: String,
    input_error: bool,
    completed: Vec<RoundRecord>,
    should_exit: bool,
}

impl PracticeModel {
    /// Starts a session whose first round is built from `first_seed`.
    ///
    /// Later rounds draw their seeds from a generator seeded with
    /// `first_seed`, so a whole session can be replayed.
    pub fn new(language: Language, first_seed: DatasetSeed) -> Result<Self, SampleError> {
        Ok(Self {
            language,
            seeds: Pcg32::from_seed(first_seed.to_bytes()),
            round: Round::new(first_seed, language)?,
            round_number: 1,
            input: String::new(),
            input_error: false,
            completed: vec![],
            should_exit: false,
        })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    /// 1-based number of the current round.
    pub fn round_number(&self) -> usize {
        self.round_number
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Whether the last submitted input was not a number.
    pub fn input_error(&self) -> bool {
        self.input_error
    }

    pub fn completed_rounds(&self) -> &[RoundRecord] {
        &self.completed
    }

    pub fn take_completed_rounds(&mut self) -> Vec<RoundRecord> {
        std::mem::take(&mut self.completed)
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }
}

/// Applies `message` to the session state.
pub fn update(model: &mut PracticeModel, message: Message) {
    match message {
        Message::Input(c) => {
            if model.round.current_question().is_some() && is_number_char(c) {
                model.input.push(c);
                model.input_error = false;
            }
        }
        Message::Backspace => {
            model.input.pop();
            model.input_error = false;
        }
        Message::Submit => submit_answer(model),
        Message::NewRound => start_next_round(model),
        Message::Quit => model.should_exit = true,
    }
}

fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, ',' | '.' | '-')
}

fn submit_answer(model: &mut PracticeModel) {
    let Some(question) = model.round.current_question() else {
        return;
    };
    let Some(answer) = parse_number(&model.input) else {
        model.input_error = true;
        return;
    };
    let Some(verdict) = model.round.key.check(question, answer) else {
        tracing::error!(?question, "question has no expected answer");
        return;
    };

    model.round.verdicts.push(verdict);
    model.input.clear();
    model.input_error = false;

    if model.round.is_complete() {
        tracing::debug!(
            seed = %model.round.seed,
            score = model.round.score(),
            "practice round completed"
        );
        model.completed.push(model.round.to_record());
    }
}

fn start_next_round(model: &mut PracticeModel) {
    let seed = model.seeds.random();
    match Round::new(seed, model.language) {
        Ok(round) => {
            model.round = round;
            model.round_number += 1;
            model.input.clear();
            model.input_error = false;
        }
        Err(err) => tracing::error!(%err, %seed, "failed to start a new round"),
    }
}
