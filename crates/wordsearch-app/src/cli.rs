//! Command-line arguments.

use std::{error::Error, path::PathBuf};

use clap::{Args, Parser, Subcommand};
use wordsearch_core::{GridSize, Word};
use wordsearch_generator::{
    DEFAULT_MAX_ATTEMPTS, DEFAULT_WORD_COUNT, PuzzleConfig, PuzzleSeed,
};

use crate::persistence::{BestTimeStore, DEFAULT_BEST_TIME_FILE};

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a puzzle and print it.
    Generate(PuzzleArgs),
    /// Play puzzles in the terminal.
    Play(PlayArgs),
}

#[derive(Debug, Clone, Args)]
pub struct PuzzleArgs {
    /// Grid side length.
    #[arg(long, value_name = "N", default_value = "15", value_parser = parse_grid_size)]
    pub size: GridSize,

    /// Number of words drawn from the built-in pool.
    #[arg(long, value_name = "COUNT", default_value_t = DEFAULT_WORD_COUNT)]
    pub count: usize,

    /// Placement attempts per word before it is skipped.
    #[arg(long, value_name = "COUNT", default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: usize,

    /// Seed of the first puzzle (64 hex characters).
    #[arg(long, value_name = "SEED")]
    pub seed: Option<PuzzleSeed>,

    /// Word to hide instead of drawing from the pool. Repeatable.
    #[arg(short, long = "word", value_name = "WORD")]
    pub words: Vec<Word>,
}

impl PuzzleArgs {
    #[must_use]
    pub fn config(&self) -> PuzzleConfig {
        PuzzleConfig::default()
            .size(self.size)
            .word_count(self.count)
            .max_attempts(self.max_attempts)
    }
}

#[derive(Debug, Clone, Args)]
pub struct PlayArgs {
    #[command(flatten)]
    pub puzzle: PuzzleArgs,

    /// File the best completion time is kept in.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_BEST_TIME_FILE)]
    pub best_time_file: PathBuf,

    /// Keep the best time for this run only.
    #[arg(long)]
    pub no_save: bool,
}

impl PlayArgs {
    #[must_use]
    pub fn best_time_store(&self) -> Option<BestTimeStore> {
        (!self.no_save).then(|| BestTimeStore::new(&self.best_time_file))
    }
}

fn parse_grid_size(s: &str) -> Result<GridSize, Box<dyn Error + Send + Sync>> {
    let size: usize = s.parse()?;
    Ok(GridSize::new(size)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn puzzle_args(args: &[&str]) -> PuzzleArgs {
        let cli = Cli::try_parse_from(["wordsearch", "generate"].iter().chain(args)).unwrap();
        match cli.command {
            Command::Generate(args) => args,
            Command::Play(_) => unreachable!(),
        }
    }

    #[test]
    fn test_defaults_match_puzzle_config() {
        let args = puzzle_args(&[]);
        assert_eq!(args.config(), PuzzleConfig::default());
        assert_eq!(args.seed, None);
        assert!(args.words.is_empty());
    }

    #[test]
    fn test_custom_config() {
        let seed = "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef";
        let args = puzzle_args(&[
            "--size",
            "8",
            "--count",
            "4",
            "--max-attempts",
            "20",
            "--seed",
            seed,
            "-w",
            "kolam",
            "--word",
            "Pongal",
        ]);

        let config = args.config();
        assert_eq!(config.get_size().get(), 8);
        assert_eq!(config.get_word_count(), 4);
        assert_eq!(config.get_max_attempts(), 20);
        assert_eq!(args.seed.map(|s| s.to_string()).as_deref(), Some(seed));
        assert_eq!(
            args.words.iter().map(Word::as_str).collect::<Vec<_>>(),
            ["KOLAM", "PONGAL"]
        );
    }

    #[test]
    fn test_play_best_time_file() {
        let play_args = |args: &[&str]| {
            let cli = Cli::try_parse_from(["wordsearch", "play"].iter().chain(args)).unwrap();
            match cli.command {
                Command::Play(args) => args,
                Command::Generate(_) => unreachable!(),
            }
        };

        let args = play_args(&["--size", "8"]);
        assert_eq!(args.puzzle.size.get(), 8);
        assert_eq!(
            args.best_time_store(),
            Some(BestTimeStore::new(DEFAULT_BEST_TIME_FILE))
        );

        let args = play_args(&["--best-time-file", "records/best.json"]);
        assert_eq!(
            args.best_time_store().as_ref().map(BestTimeStore::path),
            Some(PathBuf::from("records/best.json").as_path())
        );

        assert_eq!(play_args(&["--no-save"]).best_time_store(), None);
    }

    #[test]
    fn test_rejects_invalid_values() {
        for args in [
            &["--size", "0"][..],
            &["--size", "x"],
            &["--seed", "abc"],
            &["--word", "rice2"],
        ] {
            let result = Cli::try_parse_from(["wordsearch", "play"].iter().chain(args));
            assert!(result.is_err(), "{args:?}");
        }
    }
}
