//! Localized exercise statements built from a generated dataset.

use std::fmt::Write as _;

use statmaster_stats::rounding;

use crate::{GeneratedDataset, Language};

/// Introduces the survey and lists every observation in shuffled order.
///
/// ```
/// use statmaster_engine::{DatasetSeed, Language, generate_with_seed, statement};
///
/// let dataset = generate_with_seed(DatasetSeed::from([1; 16]), Language::Fr);
/// let text = statement::raw_sample_statement(&dataset);
/// assert!(text.contains(dataset.title()));
/// assert!(text.contains(&format!("{} élèves", dataset.total())));
/// ```
#[must_use]
pub fn raw_sample_statement(dataset: &GeneratedDataset) -> String {
    let title = dataset.title();
    let total = dataset.total();
    let mut text = match dataset.language() {
        Language::Fr => format!(
            "Une enquête sur le caractère « {title} » a été menée auprès de {total} élèves. \
             Voici les réponses obtenues :"
        ),
        Language::En => format!(
            "A survey about \"{title}\" was carried out among {total} students. \
             Here are the answers:"
        ),
    };
    text.push('\n');
    text.push_str(&join_values(dataset.raw_sample(), dataset.language()));
    if let Some(unit) = dataset.unit() {
        let _ = match dataset.language() {
            Language::Fr => write!(text, "\n(valeurs en {unit})"),
            Language::En => write!(text, "\n(values in {unit})"),
        };
    }
    text
}

/// Presents the counts as a two-row table.
///
/// ```
/// use statmaster_engine::{DatasetSeed, Language, generate_with_seed, statement};
///
/// let dataset = generate_with_seed(DatasetSeed::from([1; 16]), Language::En);
/// let text = statement::frequency_table_statement(&dataset);
/// assert!(text.contains(dataset.axis_label()));
/// assert!(text.contains("Count"));
/// ```
#[must_use]
pub fn frequency_table_statement(dataset: &GeneratedDataset) -> String {
    let language = dataset.language();
    let (intro, count_label, total_label) = match language {
        Language::Fr => (
            format!(
                "Le tableau ci-dessous donne la répartition des {} réponses à l'enquête « {} ».",
                dataset.total(),
                dataset.title()
            ),
            "Effectif",
            "Total",
        ),
        Language::En => (
            format!(
                "The table below shows how the {} answers to the survey \"{}\" are distributed.",
                dataset.total(),
                dataset.title()
            ),
            "Count",
            "Total",
        ),
    };

    let header = dataset.values().iter().map(u32::to_string).collect::<Vec<_>>();
    let counts = dataset.counts().iter().map(u32::to_string).collect::<Vec<_>>();
    let label_width = dataset
        .axis_label()
        .chars()
        .count()
        .max(count_label.chars().count());
    let cell_width = header
        .iter()
        .chain(&counts)
        .map(String::len)
        .max()
        .unwrap_or(1)
        .max(total_label.len());

    let mut text = intro;
    text.push('\n');
    push_row(
        &mut text,
        dataset.axis_label(),
        &header,
        total_label,
        label_width,
        cell_width,
    );
    text.push('\n');
    push_row(
        &mut text,
        count_label,
        &counts,
        &dataset.total().to_string(),
        label_width,
        cell_width,
    );
    text
}

/// Asks for the frequencies of the table, with the rounding instruction.
#[must_use]
pub fn frequency_question(dataset: &GeneratedDataset) -> String {
    let language = dataset.language();
    let question = match language {
        Language::Fr => {
            "Calcule la fréquence de chaque valeur, sous forme de fraction, de nombre décimal \
             puis de pourcentage."
        }
        Language::En => {
            "Compute the frequency of each value as a fraction, as a decimal number, \
             then as a percentage."
        }
    };
    format!(
        "{question}\n{}",
        dataset.rounding_precision().instruction(language)
    )
}

/// Formats an indicator for display, with at most two decimals and no
/// trailing zeros.
///
/// ```
/// use statmaster_engine::{Language, statement::format_number};
///
/// assert_eq!(format_number(10.423, Language::Fr), "10,42");
/// assert_eq!(format_number(7.0, Language::En), "7");
/// assert_eq!(format_number(2.5, Language::En), "2.5");
/// ```
#[must_use]
pub fn format_number(value: f64, language: Language) -> String {
    let separator = language.decimal_separator();
    let text = rounding::format_decimal(value, 2, separator);
    if text.contains(separator) {
        text.trim_end_matches('0')
            .trim_end_matches(separator)
            .to_owned()
    } else {
        text
    }
}

fn join_values(values: &[u32], language: Language) -> String {
    // French uses `;` so values never clash with the decimal comma
    let separator = match language {
        Language::Fr => " ; ",
        Language::En => ", ",
    };
    values
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

fn push_row(
    text: &mut String,
    label: &str,
    cells: &[String],
    last: &str,
    label_width: usize,
    cell_width: usize,
) {
    let _ = write!(text, "{label:<label_width$} |");
    for cell in cells {
        let _ = write!(text, " {cell:>cell_width$} |");
    }
    let _ = write!(text, " {last:>cell_width$}");
}
