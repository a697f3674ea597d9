use std::path::PathBuf;

use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg32;
use statmaster_engine::{DatasetSeed, Language, generate_with_seed};

use crate::{schema::exercise::Exercise, util};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct GenerateArg {
    /// Language of the exercise texts (fr or en)
    #[clap(long, default_value = "fr")]
    lang: String,
    /// Seed of the first exercise (32 hexadecimal characters, random if omitted)
    #[clap(long)]
    seed: Option<DatasetSeed>,
    /// Number of exercises to generate
    #[clap(long, default_value_t = 1)]
    count: usize,
    /// Output file path (default: stdout)
    #[clap(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &GenerateArg) -> anyhow::Result<()> {
    let GenerateArg {
        lang,
        seed,
        count,
        output,
    } = arg;

    let language = Language::from_code_or_default(lang);
    let first_seed = seed.unwrap_or_else(|| rand::rng().random());
    let exercises = exercise_seeds(first_seed, *count)
        .map(|seed| {
            let dataset = generate_with_seed(seed, language);
            if dataset.is_truncated() {
                eprintln!(
                    "Exercise {seed} has {} categories instead of {}",
                    dataset.values().len(),
                    dataset.requested_categories()
                );
            }
            Exercise { seed, dataset }
        })
        .collect::<Vec<_>>();

    util::write_json(&exercises, output.as_deref())?;
    Ok(())
}

/// Seeds of a batch: `first`, then seeds drawn from a generator seeded with
/// `first`, so a whole batch is reproducible from its first seed.
fn exercise_seeds(first: DatasetSeed, count: usize) -> impl Iterator<Item = DatasetSeed> {
    let mut rng = Pcg32::from_seed(first.to_bytes());
    (0..count).map(move |i| if i == 0 { first } else { rng.random() })
}
