use serde::{Deserialize, Serialize};

/// What a cell holds, fixed at generation time.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellContent {
    #[default]
    Empty,
    Number(u8),
    Mine,
}

impl CellContent {
    pub const fn from_count(count: u8) -> Self {
        if count == 0 {
            Self::Empty
        } else {
            Self::Number(count)
        }
    }

    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    /// Adjacent mine count, `None` for a mine.
    pub const fn count(self) -> Option<u8> {
        match self {
            Self::Empty => Some(0),
            Self::Number(count) => Some(count),
            Self::Mine => None,
        }
    }
}

/// Player annotation on a closed cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Marker {
    #[default]
    None,
    Flagged,
    Questioned,
}

impl Marker {
    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::Flagged)
    }

    /// Next marker in the cycle, `Questioned` is skipped unless enabled.
    pub const fn next(self, use_question_marks: bool) -> Self {
        match self {
            Self::None => Self::Flagged,
            Self::Flagged if use_question_marks => Self::Questioned,
            Self::Flagged => Self::None,
            Self::Questioned => Self::None,
        }
    }
}

/// Player-visible state stored by the engine for every cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellState {
    pub revealed: bool,
    pub marker: Marker,
}

impl CellState {
    /// Whether the flood fill or a chord may open this cell.
    pub const fn can_open(self) -> bool {
        !self.revealed && !self.marker.is_flagged()
    }
}

/// Content as shown to the presentation layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visible {
    Hidden,
    Mine,
    Number(u8),
}

impl From<CellContent> for Visible {
    fn from(content: CellContent) -> Self {
        match content {
            CellContent::Empty => Self::Number(0),
            CellContent::Number(count) => Self::Number(count),
            CellContent::Mine => Self::Mine,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub content: Visible,
    pub marker: Marker,
    pub revealed: bool,
}
