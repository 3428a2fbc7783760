use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Mine placement and the derived neighbor counts of one board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Minefield {
    contents: Array2<CellContent>,
    mine_count: CellCount,
}

impl Minefield {
    pub fn from_mine_mask(mine_mask: &Array2<bool>) -> Result<Self> {
        let (width, height) = mine_mask.dim();
        match (Coord::try_from(width), Coord::try_from(height)) {
            (Ok(w), Ok(h)) => Ok(Self::from_sized_mask(mine_mask, (w, h))),
            _ => Err(GameError::BoardTooLarge { width, height }),
        }
    }

    /// `size` must be the mask's own dimensions.
    pub(crate) fn from_sized_mask(mine_mask: &Array2<bool>, size: Coord2) -> Self {
        debug_assert_eq!(mine_mask.shape(), &size.to_nd_index()[..]);
        let mut contents = mine_mask.map(|&is_mine| {
            if is_mine {
                CellContent::Mine
            } else {
                CellContent::Empty
            }
        });
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;

        for coords in iter_coords(size) {
            if !mine_mask[coords.to_nd_index()] {
                let count = mine_mask
                    .iter_neighbors(coords)
                    .filter(|&pos| mine_mask[pos.to_nd_index()])
                    .count() as u8;
                contents[coords.to_nd_index()] = CellContent::from_count(count);
            }
        }

        Self {
            contents,
            mine_count,
        }
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoords(coords));
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Ok(Self::from_sized_mask(&mine_mask, size))
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords(coords))
        }
    }

    pub fn size(&self) -> Coord2 {
        let (width, height) = self.contents.dim();
        (width as Coord, height as Coord)
    }

    pub fn total_cells(&self) -> CellCount {
        self.contents.len() as CellCount
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords].is_mine()
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> Neighbors {
        self.contents.iter_neighbors(coords)
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.iter_neighbors(coords)
            .filter(|&pos| self.contains_mine(pos))
            .count() as u8
    }

    /// Where a mine sitting on a first click goes: the first empty cell in row-major order, or
    /// failing that the first cell with the lowest count.
    pub fn relocation_target(&self, from: Coord2) -> Option<Coord2> {
        iter_coords(self.size())
            .filter(|&coords| coords != from)
            .filter_map(|coords| self[coords].count().map(|count| (count, coords)))
            .min_by_key(|&(count, _)| count)
            .map(|(_, coords)| coords)
    }

    /// Moves the mine at `from` onto the free cell `to` and refreshes every count it touched.
    pub fn move_mine(&mut self, from: Coord2, to: Coord2) {
        debug_assert!(self.contains_mine(from));
        debug_assert!(!self.contains_mine(to));

        self.contents[to.to_nd_index()] = CellContent::Mine;
        self.contents[from.to_nd_index()] = CellContent::Empty;

        let touched = [from]
            .into_iter()
            .chain(self.iter_neighbors(from))
            .chain(self.iter_neighbors(to));
        for coords in touched {
            if !self.contains_mine(coords) {
                let count = self.adjacent_mine_count(coords);
                self.contents[coords.to_nd_index()] = CellContent::from_count(count);
            }
        }
    }
}

impl Index<Coord2> for Minefield {
    type Output = CellContent;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.contents[coords.to_nd_index()]
    }
}
