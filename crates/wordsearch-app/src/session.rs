//! An interactive play session: the current game, its clock, and the best time.

use std::time::{Duration, Instant, SystemTime};

use wordsearch_core::Position;
use wordsearch_game::{BestTime, Game, GameError, GestureOutcome, format_elapsed};
use wordsearch_generator::PuzzleSeed;

use crate::{action::Action, game_factory::GameFactory, persistence::BestTimeStore};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Gesture {
        outcome: GestureOutcome,
        /// Set when the gesture completed the puzzle faster than the stored
        /// record.
        new_best: Option<BestTime>,
    },
    NewGame,
    Quit,
}

#[derive(Debug)]
pub struct PlaySession {
    factory: GameFactory,
    game: Game,
    started: Instant,
    best: Option<BestTime>,
    store: Option<BestTimeStore>,
}

impl PlaySession {
    /// Starts a session with a first puzzle generated from `seed`.
    ///
    /// The best time is read from `store` and written back whenever it
    /// improves. Without a store it lives only as long as the session.
    #[must_use]
    pub fn new(
        factory: GameFactory,
        seed: Option<PuzzleSeed>,
        store: Option<BestTimeStore>,
    ) -> Self {
        let best = store.as_ref().and_then(|store| match store.load() {
            Ok(best) => best,
            Err(e) => {
                log::warn!("ignoring best time in {}: {e}", store.path().display());
                None
            }
        });
        let game = Game::new(factory.generate(seed));
        log::debug!("starting puzzle {}", game.seed());
        Self {
            factory,
            game,
            started: Instant::now(),
            best,
            store,
        }
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    #[must_use]
    pub fn best_time(&self) -> Option<&BestTime> {
        self.best.as_ref()
    }

    /// Time since the current puzzle started.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn handle(&mut self, action: Action) -> Result<SessionEvent, GameError> {
        self.handle_at(action, self.elapsed(), SystemTime::now())
    }

    /// Applies `action` as if `elapsed` had passed since the puzzle started,
    /// at wall-clock time `now`.
    pub fn handle_at(
        &mut self,
        action: Action,
        elapsed: Duration,
        now: SystemTime,
    ) -> Result<SessionEvent, GameError> {
        match action {
            Action::Select(cells) => self.select(&cells, elapsed, now),
            Action::NewGame => {
                self.new_game();
                Ok(SessionEvent::NewGame)
            }
            Action::Quit => Ok(SessionEvent::Quit),
        }
    }

    fn select(
        &mut self,
        cells: &[Position],
        elapsed: Duration,
        now: SystemTime,
    ) -> Result<SessionEvent, GameError> {
        if let Err(e) = self.trace(cells) {
            self.game.cancel_selection();
            return Err(e);
        }

        let outcome = self.game.finish_selection(elapsed);
        let mut new_best = None;
        if let Some(completion) = &outcome.completion {
            log::info!(
                "puzzle {} completed in {}",
                self.game.seed(),
                format_elapsed(completion.elapsed)
            );
            new_best = BestTime::improved(self.best.as_ref(), completion, now);
            if let Some(best) = &new_best {
                self.record(best);
            }
        }
        Ok(SessionEvent::Gesture { outcome, new_best })
    }

    fn record(&mut self, best: &BestTime) {
        self.best = Some(*best);
        if let Some(store) = &self.store
            && let Err(e) = store.save(best)
        {
            log::warn!("failed to save best time to {}: {e}", store.path().display());
        }
    }

    fn trace(&mut self, cells: &[Position]) -> Result<(), GameError> {
        let Some((&first, rest)) = cells.split_first() else {
            return Ok(());
        };
        self.game.begin_selection(first)?;
        for &pos in rest {
            self.game.extend_selection(pos)?;
        }
        Ok(())
    }

    fn new_game(&mut self) {
        self.game = Game::new(self.factory.generate(None));
        self.started = Instant::now();
        log::debug!("starting puzzle {}", self.game.seed());
    }
}
