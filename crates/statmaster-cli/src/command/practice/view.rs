use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style, Stylize as _},
    text::{Line, Span, Text},
    widgets::{Block, Clear, Paragraph, Wrap},
};
use statmaster_engine::{
    GeneratedDataset, Language,
    grading::{Question, Verdict},
    statement::{self, format_number},
};

use super::model::{PracticeModel, Step};

struct Texts {
    round: &'static str,
    completed: &'static str,
    answer: &'static str,
    not_a_number: &'static str,
    questions: &'static str,
    score: &'static str,
    expected: &'static str,
    help: &'static str,
    help_title: &'static str,
    help_lines: [&'static str; 6],
}

const FR: Texts = Texts {
    round: "Exercice",
    completed: "terminés",
    answer: "Ta réponse",
    not_a_number: "Ce n'est pas un nombre",
    questions: "Questions",
    score: "Score",
    expected: "attendu",
    help: "Entrée : valider | n : nouvel exercice | ? : aide | q : quitter",
    help_title: "Aide",
    help_lines: [
        "Chiffres, virgule ou point : saisir la réponse",
        "Retour arrière : effacer",
        "Entrée : valider la réponse",
        "n : nouvel exercice",
        "q ou Échap : quitter",
        "Moyenne à 0,1 près, médiane et quartiles exacts, fréquences arrondies comme demandé, \
         pourcentage à 1 point près.",
    ],
};

const EN: Texts = Texts {
    round: "Exercise",
    completed: "completed",
    answer: "Your answer",
    not_a_number: "Not a number",
    questions: "Questions",
    score: "Score",
    expected: "expected",
    help: "Enter: submit | n: new exercise | ?: help | q: quit",
    help_title: "Help",
    help_lines: [
        "Digits, comma or point: type the answer",
        "Backspace: erase",
        "Enter: submit the answer",
        "n: new exercise",
        "q or Esc: quit",
        "Mean within 0.1, median and quartiles exact, frequencies rounded as asked, \
         percentage within 1 point.",
    ],
};

fn texts(language: Language) -> &'static Texts {
    match language {
        Language::Fr => &FR,
        Language::En => &EN,
    }
}

pub fn draw_practice(model: &PracticeModel, frame: &mut Frame) {
    let language = model.language();
    let texts = texts(language);
    let round = model.round();
    let dataset = round.dataset();

    let question_rows = u16::try_from(round.questions().len()).unwrap_or(u16::MAX);
    let [header_area, statement_area, questions_area, input_area, help_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(6),
        Constraint::Length(question_rows.saturating_add(3)),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let header = Line::from(vec![
        Span::from(format!("{} {}", texts.round, model.round_number())).bold(),
        Span::from(format!(
            "  {} {}",
            model.completed_rounds().len(),
            texts.completed
        )),
        Span::from(format!("  ({})", round.seed())).fg(Color::DarkGray),
    ]);
    frame.render_widget(header, header_area);

    let statement = match round.step() {
        Step::Indicators => statement::raw_sample_statement(dataset),
        Step::Frequencies => format!(
            "{}\n\n{}",
            statement::frequency_table_statement(dataset),
            statement::frequency_question(dataset)
        ),
    };
    let statement = Paragraph::new(statement)
        .wrap(Wrap { trim: false })
        .block(Block::bordered().title(dataset.title()));
    frame.render_widget(statement, statement_area);

    frame.render_widget(questions_widget(model, texts), questions_area);

    let (input_title, input_style) = if model.input_error() {
        (texts.not_a_number, Style::default().fg(Color::Red))
    } else {
        (texts.answer, Style::default())
    };
    let input = Paragraph::new(format!("{}_", model.input())).block(
        Block::bordered()
            .title(input_title)
            .border_style(input_style),
    );
    frame.render_widget(input, input_area);

    let help = Text::from(texts.help)
        .style(Style::default().fg(Color::DarkGray))
        .centered();
    frame.render_widget(help, help_area);
}

fn questions_widget<'a>(model: &'a PracticeModel, texts: &'a Texts) -> Paragraph<'a> {
    let language = model.language();
    let round = model.round();
    let dataset = round.dataset();
    let current = round.current_question();

    let mut lines = round
        .questions()
        .iter()
        .enumerate()
        .map(|(i, question)| {
            let label = question.label(language);
            match round.verdicts().get(i) {
                Some(verdict) if verdict.is_correct => {
                    let mut spans = vec![
                        Span::from(format!("  {label} : ")),
                        Span::from(format_number(verdict.answer, language)).fg(Color::Green),
                        Span::from(" ✓").fg(Color::Green),
                    ];
                    if let Some(fraction) = fraction_of(dataset, verdict.question) {
                        spans.push(Span::from(format!(" ({fraction})")).fg(Color::DarkGray));
                    }
                    Line::from(spans)
                }
                Some(verdict) => Line::from(vec![
                    Span::from(format!("  {label} : ")),
                    Span::from(format_number(verdict.answer, language)).fg(Color::Red),
                    Span::from(format!(
                        " ✗ ({} {})",
                        texts.expected,
                        expected_text(dataset, verdict)
                    ))
                    .fg(Color::Red),
                ]),
                None if current == Some(*question) => {
                    Line::from(format!("> {label}")).add_modifier(Modifier::BOLD)
                }
                None => Line::from(format!("  {label}")).fg(Color::DarkGray),
            }
        })
        .collect::<Vec<_>>();

    if round.is_complete() {
        lines.push(Line::from(format!("{} : {}/100", texts.score, round.score())).bold());
    }

    Paragraph::new(lines).block(Block::bordered().title(texts.questions))
}

/// The reduced fraction behind a frequency question.
fn fraction_of(dataset: &GeneratedDataset, question: Question) -> Option<String> {
    let entry = dataset.frequency_of(question.category()?)?;
    Some(entry.fraction.to_string())
}

/// Expected answer of a wrong verdict, with the fraction it comes from.
fn expected_text(dataset: &GeneratedDataset, verdict: &Verdict) -> String {
    let language = dataset.language();
    let entry = verdict
        .question
        .category()
        .and_then(|value| dataset.frequency_of(value));
    match (verdict.question, entry) {
        (Question::Frequency { .. }, Some(entry)) => {
            format!("{} = {}", entry.fraction, entry.decimal_formatted)
        }
        (Question::Percentage { .. }, Some(entry)) => {
            format!("{} ≈ {} %", entry.fraction, entry.percent_formatted)
        }
        _ => format_number(verdict.expected, language),
    }
}

pub fn draw_help(language: Language, frame: &mut Frame) {
    let texts = texts(language);
    let area = centered(frame.area(), 80, 10);
    let lines = texts
        .help_lines
        .iter()
        .map(|line| Line::from(*line))
        .collect::<Vec<_>>();
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::bordered().title(texts.help_title)),
        area,
    );
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Max(width)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Max(height)])
        .flex(Flex::Center)
        .areas(area);
    area
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};
    use statmaster_engine::DatasetSeed;

    use super::*;
    use crate::command::practice::model::{Message, update};

    fn render(model: &PracticeModel) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|frame| draw_practice(model, frame))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn test_draw_shows_dataset_and_questions() {
        let model = PracticeModel::new(Language::Fr, DatasetSeed::from([9; 16])).unwrap();
        let screen = render(&model);
        assert!(screen.contains("Exercice 1"));
        assert!(screen.contains(model.round().dataset().title()));
        assert!(screen.contains("> Moyenne"));
        assert!(screen.contains("Ta réponse"));
    }

    fn answer_indicators(model: &mut PracticeModel) {
        for _ in 0..4 {
            let question = model.round().current_question().unwrap();
            assert_eq!(question.category(), None);
            for c in "0".chars() {
                update(model, Message::Input(c));
            }
            update(model, Message::Submit);
        }
    }

    #[test]
    fn test_indicator_step_shows_raw_sample_only() {
        let model = PracticeModel::new(Language::Fr, DatasetSeed::from([9; 16])).unwrap();
        let screen = render(&model);
        assert!(screen.contains("Une enquête sur le caractère"));
        assert!(!screen.contains("Effectif"));
    }

    #[test]
    fn test_draw_frequency_step() {
        let mut model = PracticeModel::new(Language::Fr, DatasetSeed::from([9; 16])).unwrap();
        answer_indicators(&mut model);
        let dataset = model.round().dataset().clone();
        let first = dataset.frequencies()[0].clone();

        let screen = render(&model);
        assert!(screen.contains("Effectif"));
        assert!(screen.contains("Calcule la fréquence de chaque valeur"));
        assert!(screen.contains(&format!("> Fréquence de la valeur {} (décimale)", first.value)));

        // a wrong decimal frequency shows the fraction it comes from
        for c in "9".chars() {
            update(&mut model, Message::Input(c));
        }
        update(&mut model, Message::Submit);
        let screen = render(&model);
        assert!(screen.contains(&format!(
            "attendu {} = {}",
            first.fraction, first.decimal_formatted
        )));
    }

    #[test]
    fn test_draw_shows_input_error() {
        let mut model = PracticeModel::new(Language::En, DatasetSeed::from([9; 16])).unwrap();
        update(&mut model, Message::Submit);
        assert!(render(&model).contains("Not a number"));
    }
}
