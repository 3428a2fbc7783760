use std::collections::VecDeque;

use crate::*;

/// Opens `seed` and keeps expanding through every empty cell it reaches.
///
/// `open` decides whether a cell can be opened and opens it, returning `false` for cells that are
/// already open or blocked. It is never called for mines, so numbers bound the region.
pub(crate) fn flood_open(field: &Minefield, seed: Coord2, mut open: impl FnMut(Coord2) -> bool) {
    let mut to_visit = VecDeque::from([seed]);

    while let Some(coords) = to_visit.pop_front() {
        let content = field[coords];
        if content.is_mine() || !open(coords) {
            continue;
        }

        log::trace!("Flood opened cell at {:?}, content: {:?}", coords, content);
        if content == CellContent::Empty {
            to_visit.extend(field.iter_neighbors(coords));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    fn open_all(field: &Minefield, seed: Coord2, blocked: &[Coord2]) -> Array2<bool> {
        let mut opened: Array2<bool> = Array2::default(field.size().to_nd_index());
        flood_open(field, seed, |coords| {
            if blocked.contains(&coords) {
                return false;
            }
            !core::mem::replace(&mut opened[coords.to_nd_index()], true)
        });
        opened
    }

    #[test]
    fn stops_at_numbers() {
        // The zero region covers x <= 1 and is bordered by numbers at x = 2, leaving the
        // numbers beside the mine at x = 3 closed.
        let field = Minefield::from_mine_coords((4, 3), &[(3, 1)]).unwrap();
        let opened = open_all(&field, (0, 0), &[]);

        for coords in iter_coords(field.size()) {
            let expected = coords.0 <= 2;
            assert_eq!(opened[coords.to_nd_index()], expected, "{coords:?}");
        }
    }

    #[test]
    fn number_seed_opens_only_itself() {
        let field = Minefield::from_mine_coords((3, 3), &[(2, 2)]).unwrap();
        let opened = open_all(&field, (1, 1), &[]);

        assert_eq!(opened.iter().filter(|&&open| open).count(), 1);
        assert!(opened[[1, 1]]);
    }

    #[test]
    fn blocked_cells_are_not_crossed() {
        // A wall of blocked cells at x = 1 keeps the right half closed.
        let field = Minefield::from_mine_coords((3, 3), &[]).unwrap();
        let opened = open_all(&field, (0, 0), &[(1, 0), (1, 1), (1, 2)]);

        assert!(opened[[0, 2]]);
        assert!(!opened[[1, 1]]);
        assert!(!opened[[2, 0]]);
    }
}
