use wordsearch_core::Position;

/// Errors returned by [`Game`](crate::Game) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The position lies outside the grid.
    #[display("position {position} is outside the grid")]
    OutOfBounds {
        /// The rejected position.
        position: Position,
    },
    /// A selection was extended while no gesture was in progress.
    #[display("no selection in progress")]
    NoActiveSelection,
}
