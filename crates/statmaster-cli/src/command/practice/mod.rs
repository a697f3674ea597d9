use std::path::PathBuf;

use rand::Rng as _;
use statmaster_engine::{DatasetSeed, Language};
use statmaster_tui::{Runtime, ScreenStack};

use self::{model::PracticeModel, screen::PracticeScreen};
use crate::schema::history::PracticeHistory;

mod model;
mod screen;
mod view;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PracticeArg {
    /// Language of the exercises (fr or en)
    #[clap(long, default_value = "fr")]
    lang: String,
    /// Seed of the first exercise (32 hexadecimal characters, random if omitted)
    #[clap(long)]
    seed: Option<DatasetSeed>,
    /// Save the completed rounds to a file when the drill ends
    #[clap(long)]
    save_history: bool,
    /// Directory to save history files
    #[clap(long, default_value = "./data/history/")]
    history_dir: PathBuf,
}

impl Default for PracticeArg {
    fn default() -> Self {
        Self {
            lang: "fr".to_owned(),
            seed: None,
            save_history: false,
            history_dir: PathBuf::from("./data/history/"),
        }
    }
}

pub(crate) fn run(arg: &PracticeArg) -> anyhow::Result<()> {
    let PracticeArg {
        lang,
        seed,
        save_history,
        history_dir,
    } = arg;

    let language = Language::from_code_or_default(lang);
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    let model = PracticeModel::new(language, seed)?;

    let mut history = PracticeHistory::default();
    {
        let screen = PracticeScreen::new(model, &mut history.rounds);
        let mut stack = ScreenStack::new(Box::new(screen));
        Runtime::new().run(&mut stack)?;
    }

    if *save_history {
        if history.is_empty() {
            eprintln!("No completed round, nothing to save");
        } else {
            let path = history.save(history_dir)?;
            eprintln!("Saved {} round(s) to {}", history.rounds.len(), path.display());
        }
    }
    Ok(())
}
