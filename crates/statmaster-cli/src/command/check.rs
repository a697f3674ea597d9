use anyhow::{Context as _, bail};
use serde::Serialize;
use statmaster_engine::{
    DatasetSeed, Language,
    grading::{self, AnswerKey, Question, Verdict},
    statement::format_number,
};
use statmaster_stats::sample::parse_number;

use crate::util;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct CheckArg {
    /// Seed of the exercise, as printed by `generate`
    #[clap(long)]
    seed: DatasetSeed,
    /// Language of the exercise (fr or en)
    #[clap(long, default_value = "fr")]
    lang: String,
    /// Answer for the mean
    #[clap(long, allow_negative_numbers = true)]
    mean: Option<String>,
    /// Answer for the median
    #[clap(long, allow_negative_numbers = true)]
    median: Option<String>,
    /// Answer for the first quartile
    #[clap(long, allow_negative_numbers = true)]
    q1: Option<String>,
    /// Answer for the third quartile
    #[clap(long, allow_negative_numbers = true)]
    q3: Option<String>,
    /// Answer for the range
    #[clap(long, allow_negative_numbers = true)]
    range: Option<String>,
    /// Answer for the interquartile range
    #[clap(long, allow_negative_numbers = true)]
    iqr: Option<String>,
    /// Decimal frequency of a category, as VALUE=ANSWER (repeatable)
    #[clap(long, value_parser = parse_category_answer)]
    frequency: Vec<(u32, String)>,
    /// Percentage of a category, as VALUE=ANSWER (repeatable)
    #[clap(long, value_parser = parse_category_answer)]
    percentage: Vec<(u32, String)>,
    /// Print the verdicts as JSON
    #[clap(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct CheckReport {
    seed: DatasetSeed,
    verdicts: Vec<Verdict>,
    score: u8,
}

pub(crate) fn run(arg: &CheckArg) -> anyhow::Result<()> {
    let language = Language::from_code_or_default(&arg.lang);
    let answers = collect_answers(arg)?;
    if answers.is_empty() {
        bail!(
            "No answer given; pass at least one of --mean, --median, --q1, --q3, --range, --iqr, \
             --frequency, --percentage"
        );
    }

    let dataset = statmaster_engine::generate_with_seed(arg.seed, language);
    let key = AnswerKey::from_dataset(&dataset)?;
    let verdicts = answers
        .into_iter()
        .map(|(question, answer)| {
            key.check(question, answer).with_context(|| {
                format!(
                    "{} is not a category of exercise {}; categories are {:?}",
                    question.category().unwrap_or_default(),
                    arg.seed,
                    dataset.values()
                )
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    let report = CheckReport {
        seed: arg.seed,
        score: grading::score(&verdicts),
        verdicts,
    };

    if arg.json {
        util::write_json(&report, None)?;
    } else {
        print!("{}", render(&report, language));
    }
    Ok(())
}

fn collect_answers(arg: &CheckArg) -> anyhow::Result<Vec<(Question, f64)>> {
    let given = [
        (Question::Mean, &arg.mean),
        (Question::Median, &arg.median),
        (Question::FirstQuartile, &arg.q1),
        (Question::ThirdQuartile, &arg.q3),
        (Question::Range, &arg.range),
        (Question::InterquartileRange, &arg.iqr),
    ];
    let frequencies = arg
        .frequency
        .iter()
        .map(|(value, text)| (Question::Frequency { value: *value }, text.as_str()));
    let percentages = arg
        .percentage
        .iter()
        .map(|(value, text)| (Question::Percentage { value: *value }, text.as_str()));
    given
        .into_iter()
        .filter_map(|(question, answer)| answer.as_deref().map(|text| (question, text)))
        .chain(frequencies)
        .chain(percentages)
        .map(|(question, text)| {
            let value = parse_number(text)
                .with_context(|| format!("Answer for {question:?} is not a number: {text:?}"))?;
            Ok((question, value))
        })
        .collect()
}

/// Parses a `VALUE=ANSWER` pair; the answer is parsed later with the others.
fn parse_category_answer(text: &str) -> Result<(u32, String), String> {
    let (value, answer) = text
        .split_once('=')
        .ok_or_else(|| format!("expected VALUE=ANSWER, got {text:?}"))?;
    let value = value
        .trim()
        .parse()
        .map_err(|_| format!("category {value:?} is not a whole number"))?;
    Ok((value, answer.trim().to_owned()))
}

fn render(report: &CheckReport, language: Language) -> String {
    let (correct, wrong, expected, score) = match language {
        Language::Fr => ("juste", "faux", "attendu", "Score"),
        Language::En => ("correct", "wrong", "expected", "Score"),
    };
    let mut text = String::new();
    for verdict in &report.verdicts {
        let label = verdict.question.label(language);
        let answer = format_number(verdict.answer, language);
        if verdict.is_correct {
            text.push_str(&format!("{label}: {answer} ({correct})\n"));
        } else {
            let expected_value = format_number(verdict.expected, language);
            text.push_str(&format!(
                "{label}: {answer} ({wrong}, {expected} {expected_value})\n"
            ));
        }
    }
    text.push_str(&format!("{score}: {}/100\n", report.score));
    text
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[clap(flatten)]
        arg: CheckArg,
    }

    fn parse(args: &[&str]) -> CheckArg {
        let mut argv = vec!["check", "--seed", "0123456789abcdef0123456789abcdef"];
        argv.extend_from_slice(args);
        TestCli::try_parse_from(argv).unwrap().arg
    }

    #[test]
    fn test_collect_answers_accepts_decimal_comma() {
        let arg = parse(&["--mean", "10,4", "--q1", "7"]);
        let answers = collect_answers(&arg).unwrap();
        assert_eq!(
            answers,
            vec![(Question::Mean, 10.4), (Question::FirstQuartile, 7.0)]
        );
    }

    #[test]
    fn test_collect_frequency_answers() {
        let arg = parse(&[
            "--frequency",
            "12=0,25",
            "--percentage",
            "12=25",
            "--frequency",
            "14=0.5",
        ]);
        let answers = collect_answers(&arg).unwrap();
        assert_eq!(
            answers,
            vec![
                (Question::Frequency { value: 12 }, 0.25),
                (Question::Frequency { value: 14 }, 0.5),
                (Question::Percentage { value: 12 }, 25.0),
            ]
        );
    }

    #[test]
    fn test_category_answer_syntax() {
        assert_eq!(
            parse_category_answer("7 = 12,5"),
            Ok((7, "12,5".to_owned()))
        );
        assert!(parse_category_answer("7:12").is_err());
        assert!(parse_category_answer("x=12").is_err());

        let cli = TestCli::try_parse_from([
            "check",
            "--seed",
            "0123456789abcdef0123456789abcdef",
            "--percentage",
            "12",
        ]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_collect_answers_rejects_text() {
        let arg = parse(&["--median", "dix"]);
        let err = collect_answers(&arg).unwrap_err();
        assert!(err.to_string().contains("\"dix\""));
    }

    #[test]
    fn test_render_shows_expected_value_on_wrong_answer() {
        let report = CheckReport {
            seed: DatasetSeed::from([0; 16]),
            verdicts: vec![
                Verdict {
                    question: Question::Median,
                    answer: 9.0,
                    expected: 10.0,
                    is_correct: false,
                },
                Verdict {
                    question: Question::Mean,
                    answer: 10.4,
                    expected: 10.423,
                    is_correct: true,
                },
            ],
            score: 50,
        };
        let text = render(&report, Language::Fr);
        assert_eq!(
            text,
            "Médiane: 9 (faux, attendu 10)\nMoyenne: 10,4 (juste)\nScore: 50/100\n"
        );
    }
}
