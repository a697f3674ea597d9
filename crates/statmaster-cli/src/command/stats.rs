use std::fmt::Write as _;

use statmaster_engine::{Language, statement::format_number};
use statmaster_stats::{indicators::Indicators, rounding::MeanRounding, sample};

use crate::util;

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum MeanRoundingArg {
    /// One decimal place
    #[default]
    OneDecimal,
    /// Two decimal places
    TwoDecimals,
}

impl From<MeanRoundingArg> for MeanRounding {
    fn from(arg: MeanRoundingArg) -> Self {
        match arg {
            MeanRoundingArg::OneDecimal => Self::OneDecimal,
            MeanRoundingArg::TwoDecimals => Self::TwoDecimals,
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct StatsArg {
    /// Sample values; `,` or `.` as decimal separator, `;` also separates values
    #[clap(required = true, num_args = 1.., allow_negative_numbers = true)]
    values: Vec<String>,
    /// Rounding applied to the displayed mean
    #[clap(long, value_enum, default_value_t)]
    mean_rounding: MeanRoundingArg,
    /// Language used to format numbers (fr or en)
    #[clap(long, default_value = "fr")]
    lang: String,
    /// Print the indicators as JSON
    #[clap(long)]
    json: bool,
}

pub(crate) fn run(arg: &StatsArg) -> anyhow::Result<()> {
    let StatsArg {
        values,
        mean_rounding,
        lang,
        json,
    } = arg;

    let sample = sample::parse_tokens(values)?;
    let indicators = Indicators::new(sample)?;

    if *json {
        util::write_json(&indicators, None)?;
    } else {
        let language = Language::from_code_or_default(lang);
        print!("{}", render(&indicators, (*mean_rounding).into(), language));
    }
    Ok(())
}

fn render(indicators: &Indicators, mean_rounding: MeanRounding, language: Language) -> String {
    let labels = match language {
        Language::Fr => [
            "Effectif total",
            "Moyenne",
            "Médiane",
            "Premier quartile",
            "Troisième quartile",
            "Minimum",
            "Maximum",
            "Étendue",
            "Écart interquartile",
        ],
        Language::En => [
            "Count",
            "Mean",
            "Median",
            "First quartile",
            "Third quartile",
            "Minimum",
            "Maximum",
            "Range",
            "Interquartile range",
        ],
    };
    let mean = statmaster_stats::rounding::format_decimal(
        indicators.mean,
        mean_rounding.decimals(),
        language.decimal_separator(),
    );
    let values = [
        indicators.count.to_string(),
        mean,
        format_number(indicators.median, language),
        format_number(indicators.q1, language),
        format_number(indicators.q3, language),
        format_number(indicators.min, language),
        format_number(indicators.max, language),
        format_number(indicators.range, language),
        format_number(indicators.interquartile_range, language),
    ];

    let width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let mut text = String::new();
    for (label, value) in labels.iter().zip(&values) {
        let _ = writeln!(text, "{label:<width$}  {value}");
    }
    text
}
