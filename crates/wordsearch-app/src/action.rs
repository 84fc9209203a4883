//! Player commands read from the terminal.

use std::str::FromStr;

use wordsearch_core::Position;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum Action {
    /// One gesture over the listed cells, in order.
    Select(Vec<Position>),
    NewGame,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ActionParseError {
    #[display("empty input")]
    Empty,
    #[display("invalid cell {token:?}, expected ROW,COL")]
    InvalidCell {
        token: String,
    },
}

impl FromStr for Action {
    type Err = ActionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s {
            "" => Err(ActionParseError::Empty),
            "new" | "n" => Ok(Self::NewGame),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            _ => s
                .split_whitespace()
                .map(parse_position)
                .collect::<Result<Vec<_>, _>>()
                .map(Self::Select),
        }
    }
}

fn parse_position(token: &str) -> Result<Position, ActionParseError> {
    let invalid = || ActionParseError::InvalidCell {
        token: token.to_owned(),
    };
    let (row, col) = token.split_once(',').ok_or_else(invalid)?;
    let row = row.trim().parse().map_err(|_| invalid())?;
    let col = col.trim().parse().map_err(|_| invalid())?;
    Ok(Position::new(row, col))
}
