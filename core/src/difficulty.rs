use ndarray::Array2;

use crate::*;

/// Bechtel's Board Benchmark Value (3BV): the fewest reveal clicks that clear `field`.
///
/// Every zero region costs one click, as does every number not bordering a zero region. Runs on a
/// scratch mask, so no board state is touched.
pub fn three_bv(field: &Minefield) -> CellCount {
    let size = field.size();
    let mut opened: Array2<bool> = Array2::default(size.to_nd_index());
    let mut clicks = 0;

    for coords in iter_coords(size) {
        if field[coords] == CellContent::Empty && !opened[coords.to_nd_index()] {
            clicks += 1;
            flood_open(field, coords, |pos| {
                !core::mem::replace(&mut opened[pos.to_nd_index()], true)
            });
        }
    }

    for coords in iter_coords(size) {
        if matches!(field[coords], CellContent::Number(_)) && !opened[coords.to_nd_index()] {
            clicks += 1;
        }
    }

    clicks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(size: Coord2, mines: &[Coord2]) -> CellCount {
        three_bv(&Minefield::from_mine_coords(size, mines).unwrap())
    }

    #[test]
    fn single_zero_region_is_one_click() {
        assert_eq!(score((3, 3), &[(2, 2)]), 1);
        assert_eq!(score((5, 5), &[]), 1);
    }

    #[test]
    fn isolated_numbers_count_individually() {
        // Every safe cell touches a mine, so each needs its own click.
        assert_eq!(score((3, 1), &[(1, 0)]), 2);
        assert_eq!(score((3, 3), &[(1, 1)]), 8);
    }

    #[test]
    fn regions_and_numbers_add_up() {
        // A column of mines splits the board into two zero regions.
        let mines = [(2, 0), (2, 1), (2, 2), (2, 3), (2, 4)];
        assert_eq!(score((5, 5), &mines), 2);

        // No zero cell at all, so every number is its own click.
        assert_eq!(score((3, 2), &[(1, 0), (0, 1)]), 4);
    }

    #[test]
    fn full_board_scores_zero() {
        assert_eq!(score((2, 2), &[(0, 0), (1, 0), (0, 1), (1, 1)]), 0);
    }
}
