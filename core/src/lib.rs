//! Game-state engine for a single-player grid mine puzzle.
//!
//! A [`Board`] owns one game from generation to the end: deferred first-click-safe mine
//! placement, flood-fill reveals, chording, marker cycling, and 3BV difficulty scoring.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

pub use board::*;
pub use cell::*;
pub use difficulty::*;
pub use error::*;
pub use generator::*;
pub use minefield::*;
pub use settings::*;
pub use types::*;

mod board;
mod cell;
mod difficulty;
mod error;
mod flood;
mod generator;
mod minefield;
mod settings;
mod types;

pub(crate) use flood::flood_open;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(size, mines);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let (width, height) = self.size;
        if width == 0 || height == 0 {
            return Err(GameError::EmptyBoard { width, height });
        }
        if self.mines < 1 {
            return Err(GameError::NoMines);
        }
        if self.mines > self.total_cells() {
            return Err(GameError::TooManyMines {
                mines: self.mines,
                cells: self.total_cells(),
            });
        }
        Ok(())
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

/// Valid transitions:
/// - NewGame -> InProgress (first reveal)
/// - InProgress -> Win | Lose
/// - Win | Lose -> Stopped (next click acknowledges the result)
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// Generated, nothing revealed yet
    #[default]
    NewGame,
    InProgress,
    Win,
    Lose,
    /// Result acknowledged, the board ignores further actions
    Stopped,
}

impl GameState {
    pub const fn is_new(self) -> bool {
        matches!(self, Self::NewGame)
    }

    /// Whether the game just ended and the result is still on display
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Win | Self::Lose)
    }

    /// Whether no further moves are accepted
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Win | Self::Lose | Self::Stopped)
    }
}

pub type CoordList = SmallVec<[Coord2; 8]>;

/// Result of a reveal or chord action.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub state: GameState,
    /// Mines opened by the action
    pub bombed_mines: CoordList,
    /// Flags a chord relied on that were not on mines
    pub wrong_flags: CoordList,
}

impl Outcome {
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            ..Default::default()
        }
    }
}
