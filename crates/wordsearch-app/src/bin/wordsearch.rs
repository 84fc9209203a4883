//! Wordsearch terminal application.
//!
//! `wordsearch generate` prints a puzzle; `wordsearch play` runs an
//! interactive session on standard input.

use std::{
    io::{self, BufRead as _, Write as _},
    process::ExitCode,
};

use clap::Parser as _;
use wordsearch_app::{
    action::Action,
    cli::{Cli, Command, PlayArgs, PuzzleArgs},
    game_factory::GameFactory,
    render::{GameView, PuzzleView},
    session::{PlaySession, SessionEvent},
};
use wordsearch_game::{MatchResult, format_elapsed};

const HELP: &str = "\
Trace a word by listing its cells as ROW,COL pairs, e.g. `0,2 0,1 0,0`.
Words may be traced forwards or backwards.
Type `new` for a new puzzle or `quit` to exit.";

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Generate(args) => generate(&args),
        Command::Play(args) => play(&args),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn generate(args: &PuzzleArgs) -> io::Result<()> {
    let puzzle = GameFactory::from_args(args).generate(args.seed);
    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", PuzzleView(&puzzle))?;
    stdout.flush()
}

fn play(args: &PlayArgs) -> io::Result<()> {
    let mut session = PlaySession::new(
        GameFactory::from_args(&args.puzzle),
        args.puzzle.seed,
        args.best_time_store(),
    );
    let mut stdout = io::stdout().lock();

    writeln!(stdout, "{HELP}")?;
    show_game(&mut stdout, &session)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let action = match line.parse::<Action>() {
            Ok(action) => action,
            Err(e) => {
                writeln!(stdout, "{e}")?;
                prompt(&mut stdout)?;
                continue;
            }
        };

        match session.handle(action) {
            Ok(SessionEvent::Gesture { outcome, new_best }) => {
                match &outcome.result {
                    MatchResult::Matched(word) => writeln!(stdout, "Found {word}!")?,
                    MatchResult::AlreadyFound(word) => {
                        writeln!(stdout, "{word} was already found.")?;
                    }
                    MatchResult::NoMatch => writeln!(stdout, "No word there.")?,
                }
                if let Some(completion) = outcome.completion {
                    writeln!(
                        stdout,
                        "Puzzle complete in {}.",
                        format_elapsed(completion.elapsed)
                    )?;
                    if new_best.is_some() {
                        writeln!(stdout, "New best time!")?;
                    }
                    if let Some(best) = session.best_time() {
                        writeln!(stdout, "Best time: {}", format_elapsed(best.elapsed()))?;
                    }
                    writeln!(stdout, "Type `new` for another puzzle.")?;
                }
                if outcome.result.is_matched() {
                    show_game(&mut stdout, &session)?;
                } else {
                    prompt(&mut stdout)?;
                }
            }
            Ok(SessionEvent::NewGame) => show_game(&mut stdout, &session)?,
            Ok(SessionEvent::Quit) => break,
            Err(e) => {
                writeln!(stdout, "{e}")?;
                prompt(&mut stdout)?;
            }
        }
    }
    Ok(())
}

fn show_game(out: &mut impl io::Write, session: &PlaySession) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Puzzle {}", session.game().seed())?;
    write!(out, "{}", GameView(session.game()))?;
    prompt(out)
}

fn prompt(out: &mut impl io::Write) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}
