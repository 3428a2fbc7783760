use ndarray::Array2;
use rand::prelude::*;

use super::*;

/// Places mines by sampling uniformly random cells and rejecting ones already mined.
///
/// Mine density stays well below full in practice, so rejections are rare. The first click is not
/// considered here; the board moves a mine away from it when the game starts.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMinefieldGenerator {
    seed: u64,
}

impl RandomMinefieldGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }
}

impl MinefieldGenerator for RandomMinefieldGenerator {
    fn generate(self, config: GameConfig) -> Minefield {
        let size = config.size;
        let total_cells = config.total_cells();
        let mut mines: Array2<bool> = Array2::default(size.to_nd_index());

        if total_cells == 0 {
            log::warn!("Generating an empty minefield for size {:?}", size);
            return Minefield::from_sized_mask(&mines, size);
        }

        // sampling would only stall on a full board
        if config.mines >= total_cells {
            if config.mines > total_cells {
                log::warn!(
                    "Minefield already full, generated anyway, requested {} but only fits {}",
                    config.mines,
                    total_cells
                );
            }
            mines.fill(true);
            return Minefield::from_sized_mask(&mines, size);
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut mines_placed = 0;
        let mut rejected = 0u32;
        while mines_placed < config.mines {
            let coords: Coord2 = (rng.random_range(0..size.0), rng.random_range(0..size.1));
            let cell = &mut mines[coords.to_nd_index()];
            if *cell {
                rejected += 1;
            } else {
                *cell = true;
                mines_placed += 1;
            }
        }
        log::debug!(
            "Placed {} mines with seed {}, {} samples rejected",
            mines_placed,
            self.seed,
            rejected
        );

        Minefield::from_sized_mask(&mines, size)
    }
}
