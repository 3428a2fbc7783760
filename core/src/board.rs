use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// One game from generation to the end.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    field: Minefield,
    grid: Array2<CellState>,
    revealed_count: CellCount,
    flag_count: CellCount,
    difficulty: CellCount,
    state: GameState,
    last_outcome: Outcome,
    use_question_marks: bool,
    show_contents: bool,
}

impl Board {
    /// Starts a game on a freshly generated random board.
    pub fn new_game(
        width: Coord,
        height: Coord,
        mines: CellCount,
        use_question_marks: bool,
    ) -> Result<Self> {
        let config = GameConfig::new((width, height), mines)?;
        Self::generate(
            config,
            use_question_marks,
            RandomMinefieldGenerator::from_entropy(),
        )
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        settings.validate()?;
        Self::generate(
            settings.game_config(),
            settings.question_marks,
            RandomMinefieldGenerator::from_entropy(),
        )
    }

    pub fn generate(
        config: GameConfig,
        use_question_marks: bool,
        generator: impl MinefieldGenerator,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_minefield(
            generator.generate(config),
            use_question_marks,
        ))
    }

    pub fn from_minefield(field: Minefield, use_question_marks: bool) -> Self {
        let size = field.size();
        let difficulty = three_bv(&field);
        log::debug!(
            "New {}x{} game with {} mines, 3BV {}",
            size.0,
            size.1,
            field.mine_count(),
            difficulty
        );

        Self {
            field,
            grid: Array2::default(size.to_nd_index()),
            revealed_count: 0,
            flag_count: 0,
            difficulty,
            state: GameState::NewGame,
            last_outcome: Outcome::default(),
            use_question_marks,
            show_contents: false,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn size(&self) -> Coord2 {
        self.field.size()
    }

    pub fn width(&self) -> Coord {
        self.size().0
    }

    pub fn height(&self) -> Coord {
        self.size().1
    }

    pub fn mine_count(&self) -> CellCount {
        self.field.mine_count()
    }

    pub fn flag_count(&self) -> CellCount {
        self.flag_count
    }

    /// How many mines have not been flagged yet, negative when over-flagged
    pub fn mines_left(&self) -> isize {
        (self.field.mine_count() as isize) - (self.flag_count as isize)
    }

    /// 3BV of the layout as generated
    pub fn difficulty(&self) -> CellCount {
        self.difficulty
    }

    /// The outcome that ended the game, empty while it is still running
    pub fn last_outcome(&self) -> &Outcome {
        &self.last_outcome
    }

    pub fn use_question_marks(&self) -> bool {
        self.use_question_marks
    }

    pub fn set_use_question_marks(&mut self, use_question_marks: bool) {
        self.use_question_marks = use_question_marks;
    }

    pub fn show_contents(&self) -> bool {
        self.show_contents
    }

    /// Debug view: report contents of closed cells as well.
    pub fn set_show_contents(&mut self, show_contents: bool) {
        self.show_contents = show_contents;
    }

    pub fn cell_view(&self, coords: Coord2) -> Result<CellView> {
        let coords = self.field.validate_coords(coords)?;
        let cell = self.grid[coords.to_nd_index()];
        let content = if cell.revealed || self.show_contents {
            self.field[coords].into()
        } else {
            Visible::Hidden
        };

        Ok(CellView {
            content,
            marker: cell.marker,
            revealed: cell.revealed,
        })
    }

    /// Open a single cell, flooding out from it when it has no adjacent mines.
    pub fn reveal(&mut self, coords: Coord2) -> Result<Outcome> {
        let coords = self.field.validate_coords(coords)?;
        if let Some(outcome) = self.acknowledge_end() {
            return Ok(outcome);
        }

        if self.state.is_new() {
            self.start(coords);
        }

        if !self.grid[coords.to_nd_index()].can_open() {
            return Ok(self.snapshot());
        }

        let mut bombed_mines = CoordList::new();
        if self.field.contains_mine(coords) {
            bombed_mines.push(coords);
        } else {
            self.open_region(coords);
        }

        Ok(self.settle(bombed_mines, CoordList::new()))
    }

    /// Open every unflagged neighbor of a revealed number whose flag count matches it.
    pub fn chord_reveal(&mut self, coords: Coord2) -> Result<Outcome> {
        let coords = self.field.validate_coords(coords)?;
        if let Some(outcome) = self.acknowledge_end() {
            return Ok(outcome);
        }

        if self.state != GameState::InProgress || !self.grid[coords.to_nd_index()].revealed {
            return Ok(self.snapshot());
        }
        let CellContent::Number(count) = self.field[coords] else {
            return Ok(self.snapshot());
        };
        if self.count_flagged_neighbors(coords) != count {
            return Ok(self.snapshot());
        }

        let mut bombed_mines = CoordList::new();
        let mut wrong_flags = CoordList::new();
        for neighbor in self.field.iter_neighbors(coords) {
            let cell = self.grid[neighbor.to_nd_index()];
            let has_mine = self.field.contains_mine(neighbor);

            if cell.marker.is_flagged() {
                if !has_mine {
                    wrong_flags.push(neighbor);
                }
            } else if cell.revealed {
                continue;
            } else if has_mine {
                bombed_mines.push(neighbor);
            } else {
                self.open_region(neighbor);
            }
        }

        Ok(self.settle(bombed_mines, wrong_flags))
    }

    /// Cycle the marker of a closed cell, returning the new marker.
    pub fn toggle_marker(&mut self, coords: Coord2) -> Result<Marker> {
        let coords = self.field.validate_coords(coords)?;
        let cell = &mut self.grid[coords.to_nd_index()];

        if cell.revealed || self.state.is_over() {
            return Ok(cell.marker);
        }

        let marker = cell.marker.next(self.use_question_marks);
        match (cell.marker.is_flagged(), marker.is_flagged()) {
            (true, false) => self.flag_count -= 1,
            (false, true) => self.flag_count += 1,
            _ => {}
        }
        cell.marker = marker;

        Ok(marker)
    }

    /// A click on a finished game only acknowledges the result.
    fn acknowledge_end(&mut self) -> Option<Outcome> {
        match self.state {
            GameState::Stopped => Some(self.snapshot()),
            GameState::Win | GameState::Lose => {
                log::debug!("Game result {:?} acknowledged", self.state);
                self.state = GameState::Stopped;
                Some(self.snapshot())
            }
            GameState::NewGame | GameState::InProgress => None,
        }
    }

    /// First reveal: start the game and move a mine out from under the click.
    fn start(&mut self, coords: Coord2) {
        self.state = GameState::InProgress;

        if !self.field.contains_mine(coords) {
            return;
        }
        match self.field.relocation_target(coords) {
            Some(target) => {
                log::debug!("Moving mine from first click {:?} to {:?}", coords, target);
                self.field.move_mine(coords, target);
            }
            None => log::warn!("No free cell to move the mine at {:?} to", coords),
        }
    }

    fn open_region(&mut self, seed: Coord2) {
        let grid = &mut self.grid;
        let revealed_count = &mut self.revealed_count;

        flood_open(&self.field, seed, |coords| {
            let cell = &mut grid[coords.to_nd_index()];
            if !cell.can_open() {
                return false;
            }
            cell.revealed = true;
            cell.marker = Marker::None;
            *revealed_count += 1;
            true
        });
    }

    /// Ends the game if the action bombed a mine or cleared the board.
    fn settle(&mut self, bombed_mines: CoordList, wrong_flags: CoordList) -> Outcome {
        let outcome = if !bombed_mines.is_empty() {
            self.end_game(GameState::Lose);
            Outcome {
                state: GameState::Lose,
                bombed_mines,
                wrong_flags,
            }
        } else if self.revealed_count == self.field.safe_cell_count() {
            self.end_game(GameState::Win);
            Outcome::new(GameState::Win)
        } else {
            return Outcome {
                state: self.state,
                bombed_mines,
                wrong_flags,
            };
        };

        self.last_outcome = outcome.clone();
        outcome
    }

    /// Shows every cell on a win, only the mines on a loss, and drops all markers.
    fn end_game(&mut self, state: GameState) {
        log::debug!("Game ended: {:?}", state);
        self.state = state;

        let won = state == GameState::Win;
        for ((x, y), cell) in self.grid.indexed_iter_mut() {
            if won || self.field.contains_mine((x as Coord, y as Coord)) {
                cell.revealed = true;
            }
            cell.marker = Marker::None;
        }
        self.flag_count = 0;
    }

    fn snapshot(&self) -> Outcome {
        Outcome::new(self.state)
    }

    fn count_flagged_neighbors(&self, coords: Coord2) -> u8 {
        self.field
            .iter_neighbors(coords)
            .filter(|&pos| self.grid[pos.to_nd_index()].marker.is_flagged())
            .count() as u8
    }
}
