#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod generator;
mod types;

/// Board dimensions and bomb count, fixed for the lifetime of a game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rows: Coord,
    pub columns: Coord,
    pub bombs: CellCount,
}

impl GameConfig {
    /// 16 by 30 with 99 bombs.
    pub const EXPERT: Self = Self::new_unchecked(16, 30, 99);

    pub const fn new_unchecked(rows: Coord, columns: Coord, bombs: CellCount) -> Self {
        Self {
            rows,
            columns,
            bombs,
        }
    }

    pub fn new(rows: Coord, columns: Coord, bombs: CellCount) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(GameError::EmptyBoard);
        }
        if bombs > mult(rows, columns) {
            return Err(GameError::TooManyBombs);
        }
        Ok(Self::new_unchecked(rows, columns, bombs))
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.columns)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.bombs
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::EXPERT
    }
}

/// Outcome of a flag action.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    NoChange,
    Flagged,
    Unflagged,
}

impl FlagOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// Outcome of an open action.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OpenOutcome {
    NoChange,
    Revealed,
    Exploded,
    Won,
}

impl OpenOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// What a click on a cell should do.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Open,
    Flag,
}

/// Combined outcome of [`Board::act`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    Open(OpenOutcome),
    Flag(FlagOutcome),
}

impl ActionOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::Open(outcome) => outcome.has_update(),
            Self::Flag(outcome) => outcome.has_update(),
        }
    }
}

/// Interaction mode, decides which [`Action`] a primary click maps to.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Open,
    Flag,
}

impl Mode {
    pub const fn next(self) -> Self {
        match self {
            Self::Open => Self::Flag,
            Self::Flag => Self::Open,
        }
    }

    pub const fn action(self) -> Action {
        match self {
            Self::Open => Action::Open,
            Self::Flag => Action::Flag,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Flag => "Flag",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_expert() {
        let config = GameConfig::default();
        assert_eq!((config.rows, config.columns, config.bombs), (16, 30, 99));
        assert_eq!(config.total_cells(), 480);
        assert_eq!(config.safe_cells(), 381);
    }

    #[test]
    fn config_rejects_more_bombs_than_cells() {
        assert_eq!(GameConfig::new(3, 3, 10), Err(GameError::TooManyBombs));
        assert!(GameConfig::new(3, 3, 9).is_ok());
    }

    #[test]
    fn config_rejects_empty_board() {
        assert_eq!(GameConfig::new(0, 3, 0), Err(GameError::EmptyBoard));
        assert_eq!(GameConfig::new(3, 0, 0), Err(GameError::EmptyBoard));
    }

    #[test]
    fn config_deserializes_from_json() {
        let config: GameConfig =
            serde_json::from_str(r#"{"rows":9,"columns":9,"bombs":10}"#).unwrap();
        assert_eq!(config, GameConfig::new(9, 9, 10).unwrap());
    }

    #[test]
    fn mode_cycles_between_open_and_flag() {
        let mode = Mode::default();
        assert_eq!(mode, Mode::Open);
        assert_eq!(mode.next(), Mode::Flag);
        assert_eq!(mode.next().next(), Mode::Open);
        assert_eq!(Mode::Flag.action(), Action::Flag);
        assert_eq!(Mode::Flag.label(), "Flag");
    }
}
