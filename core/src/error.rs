use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board must have at least one row and one column")]
    EmptyBoard,
    #[error("Too many bombs")]
    TooManyBombs,
    #[error("Bomb placed twice on the same cell")]
    DuplicateBomb,
}

pub type Result<T> = core::result::Result<T, GameError>;
