use ndarray::Array2;

/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for mine, flag, and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(col, row)`, also used for sizes `(width, height)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Every coordinate of a board of `size`, row by row.
pub fn iter_coords((width, height): Coord2) -> impl Iterator<Item = Coord2> {
    (0..height).flat_map(move |y| (0..width).map(move |x| (x, y)))
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, center: Coord2) -> Neighbors;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, center: Coord2) -> Neighbors {
        let (width, height) = self.dim();
        Neighbors::new(center, (width as Coord, height as Coord))
    }
}

const OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// The up to 8 in-bounds cells surrounding `center`.
///
/// Owns its state, so it can be held across mutations of the board it came from.
#[derive(Clone, Debug)]
pub struct Neighbors {
    center: Coord2,
    bounds: Coord2,
    offset: usize,
}

impl Neighbors {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            offset: 0,
        }
    }
}

impl Iterator for Neighbors {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&(dx, dy)) = OFFSETS.get(self.offset) {
            self.offset += 1;

            let x = self.center.0.checked_add_signed(dx);
            let y = self.center.1.checked_add_signed(dy);
            if let (Some(x), Some(y)) = (x, y) {
                if x < self.bounds.0 && y < self.bounds.1 {
                    return Some((x, y));
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_has_three_neighbors() {
        let neighbors: Vec<_> = Neighbors::new((0, 0), (9, 9)).collect();
        assert_eq!(neighbors, vec![(1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn interior_has_eight_neighbors() {
        let neighbors: Vec<_> = Neighbors::new((4, 4), (9, 9)).collect();
        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&(4, 4)));
    }

    #[test]
    fn far_edge_is_clipped() {
        let neighbors: Vec<_> = Neighbors::new((8, 3), (9, 9)).collect();
        assert_eq!(neighbors.len(), 5);
        assert!(neighbors.iter().all(|&(x, _)| x < 9));
    }

    #[test]
    fn coords_are_row_major() {
        let coords: Vec<_> = iter_coords((2, 2)).collect();
        assert_eq!(coords, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
    }
}
