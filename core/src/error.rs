use thiserror::Error;

use crate::{CellCount, Coord, Coord2};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates {0:?}")]
    InvalidCoords(Coord2),
    #[error("Board must have at least one row and column, got {width}x{height}")]
    EmptyBoard { width: Coord, height: Coord },
    #[error("Board of {width}x{height} cells does not fit the coordinate range")]
    BoardTooLarge { width: usize, height: usize },
    #[error("At least one mine is required")]
    NoMines,
    #[error("Too many mines ({mines}) for {cells} cells")]
    TooManyMines { mines: CellCount, cells: CellCount },
    #[error("Setting `{name}` is {value}, expected {min}..={max}")]
    SettingOutOfRange {
        name: &'static str,
        value: CellCount,
        min: CellCount,
        max: CellCount,
    },
}

pub type Result<T> = core::result::Result<T, GameError>;
