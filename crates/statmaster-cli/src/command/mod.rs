use clap::{Parser, Subcommand};

use self::{
    check::CheckArg, generate::GenerateArg, practice::PracticeArg, stats::StatsArg,
};

mod check;
mod generate;
mod practice;
mod stats;

/// Descriptive statistics drills for middle-school students
#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What to run (default: practice)
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Generate exercise datasets as JSON
    Generate(#[clap(flatten)] GenerateArg),
    /// Compute the indicators of a sample
    Stats(#[clap(flatten)] StatsArg),
    /// Check answers for a seeded exercise
    Check(#[clap(flatten)] CheckArg),
    /// Interactive practice drill
    Practice(#[clap(flatten)] PracticeArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Practice(PracticeArg::default())) {
        Mode::Generate(arg) => generate::run(&arg)?,
        Mode::Stats(arg) => stats::run(&arg)?,
        Mode::Check(arg) => check::run(&arg)?,
        Mode::Practice(arg) => practice::run(&arg)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_definition() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_parse_subcommands() {
        let args = CommandArgs::try_parse_from(["statmaster", "stats", "4", "8,5", "-2"]).unwrap();
        assert!(matches!(args.mode, Some(Mode::Stats(_))));

        let args = CommandArgs::try_parse_from([
            "statmaster",
            "generate",
            "--lang",
            "en",
            "--count",
            "3",
            "--seed",
            "000102030405060708090a0b0c0d0e0f",
        ])
        .unwrap();
        assert!(matches!(args.mode, Some(Mode::Generate(_))));

        assert!(CommandArgs::try_parse_from(["statmaster", "generate", "--seed", "xyz"]).is_err());
        assert!(CommandArgs::try_parse_from(["statmaster"]).unwrap().mode.is_none());
    }
}
