use alloc::string::String;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};
use ndarray::Array2;
use rand::prelude::*;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use crate::*;

/// A generated minefield plus the labels a player has put on it.
///
/// Cells are addressed by `(x, y)` with `x` in `0..cols` and `y` in `0..rows`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    config: BoardConfig,
    cells: Array2<Cell>,
}

/// Unchecked wire form of [`Board`], validated on the way in.
#[derive(Deserialize)]
struct RawBoard {
    config: BoardConfig,
    cells: Array2<Cell>,
}

impl TryFrom<RawBoard> for Board {
    type Error = BoardError;

    fn try_from(raw: RawBoard) -> Result<Self> {
        raw.config.validate()?;
        if raw.cells.dim() != (usize::from(raw.config.rows), usize::from(raw.config.cols)) {
            return Err(BoardError::InvalidBoardShape);
        }
        if let Some(cell) = raw.cells.iter().find(|cell| cell.surrounding_mines > 8) {
            return Err(BoardError::InvalidSurroundingCount(cell.surrounding_mines));
        }
        Ok(Self {
            config: raw.config,
            cells: raw.cells,
        })
    }
}

impl Board {
    /// Builds a board from a seed using the default placement strategy.
    pub fn new(mine_count: CellCount, rows: Coord, cols: Coord, seed: u64) -> Result<Self> {
        let config = BoardConfig::new(rows, cols, mine_count)?;
        let mut rng = SmallRng::seed_from_u64(seed);
        Self::generate(config, &mut rng)
    }

    pub fn generate<R: Rng + ?Sized>(config: BoardConfig, rng: &mut R) -> Result<Self> {
        Self::generate_with(config, ShuffledPlacement, rng)
    }

    /// Runs the whole pipeline: empty cells, mine placement, neighbor counts.
    pub fn generate_with<P, R>(config: BoardConfig, placer: P, rng: &mut R) -> Result<Self>
    where
        P: MinePlacer,
        R: Rng + ?Sized,
    {
        config.validate()?;

        let mut board = Self::empty(config);
        let mines = placer.place(config, rng);
        if mines.dim() != board.cells.dim() {
            return Err(BoardError::InvalidBoardShape);
        }
        let placed = crate::generator::count_mines(&mines);
        if placed != config.mines {
            return Err(BoardError::InvalidPlacement {
                expected: config.mines,
                found: placed,
            });
        }
        board.lay_mines(&mines);
        board.recompute_counts();

        log::debug!(
            "Generated {}x{} board with {} mines",
            config.rows,
            config.cols,
            board.count_placed_mines()
        );
        Ok(board)
    }

    /// Builds a board with mines at exactly the given coordinates. Repeated
    /// coordinates count once.
    pub fn from_mine_coords(rows: Coord, cols: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        let mut board = Self::empty(BoardConfig::new(rows, cols, 0)?);

        for &coords in mine_coords {
            let coords = board.validate_coords(coords)?;
            board[coords].is_mine = true;
        }
        board.config.mines = board.count_placed_mines();
        board.recompute_counts();

        Ok(board)
    }

    fn empty(config: BoardConfig) -> Self {
        Self {
            config,
            cells: Array2::default((config.rows.into(), config.cols.into())),
        }
    }

    fn lay_mines(&mut self, mines: &Array2<bool>) {
        for (cell, &is_mine) in self.cells.iter_mut().zip(mines.iter()) {
            cell.is_mine = is_mine;
        }
    }

    /// Recomputes `surrounding_mines` for every cell from the current mines.
    pub fn recompute_counts(&mut self) {
        for (x, y) in self.save_order() {
            let count = self.count_neighbors((x, y));
            self.cells[(x, y).to_nd_index()].surrounding_mines = count;
        }
    }

    /// Counts mines in the clamped 3x3 window around `coords`.
    ///
    /// Panics if `coords` is outside the board.
    pub fn count_neighbors(&self, coords: Coord2) -> u8 {
        let coords = self.expect_coords(coords);
        ScanWindow::new(coords, self.size())
            .filter(|&pos| self.cells[pos.to_nd_index()].is_mine)
            .count() as u8
    }

    pub fn clamp_x(&self, i: isize) -> Coord {
        clamp_axis(i, self.config.cols)
    }

    pub fn clamp_y(&self, i: isize) -> Coord {
        clamp_axis(i, self.config.rows)
    }

    /// Blanks every label. Mines and counts stay as generated.
    pub fn reset_board(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.clear_content();
        }
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn rows(&self) -> Coord {
        self.config.rows
    }

    pub fn cols(&self) -> Coord {
        self.config.cols
    }

    /// `(cols, rows)`, the exclusive bound of `(x, y)`.
    pub fn size(&self) -> Coord2 {
        self.config.bounds()
    }

    pub fn total_cells(&self) -> CellCount {
        self.config.total_cells()
    }

    pub fn mine_count(&self) -> CellCount {
        self.config.mines
    }

    /// Updates the recorded mine count. The layout itself is left alone.
    pub fn set_mine_count(&mut self, mines: CellCount) -> Result<()> {
        BoardConfig::new(self.config.rows, self.config.cols, mines)?;
        self.config.mines = mines;
        Ok(())
    }

    pub fn count_placed_mines(&self) -> CellCount {
        self.cells.iter().filter(|cell| cell.is_mine).count() as CellCount
    }

    /// The whole grid. Note the underlying array is indexed `[y, x]`, use
    /// [`ToNdIndex::to_nd_index`] to convert from `(x, y)`.
    pub fn cells(&self) -> &Array2<Cell> {
        &self.cells
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (cols, rows) = self.size();
        if coords.0 < cols && coords.1 < rows {
            Ok(coords)
        } else {
            Err(BoardError::OutOfRange {
                x: coords.0,
                y: coords.1,
            })
        }
    }

    fn expect_coords(&self, coords: Coord2) -> Coord2 {
        match self.validate_coords(coords) {
            Ok(coords) => coords,
            Err(_) => panic!(
                "coordinates {:?} outside the board of {} columns and {} rows",
                coords, self.config.cols, self.config.rows
            ),
        }
    }

    pub fn get(&self, coords: Coord2) -> Option<&Cell> {
        let coords = self.validate_coords(coords).ok()?;
        Some(&self.cells[coords.to_nd_index()])
    }

    /// Panics if `coords` is outside the board.
    pub fn cell(&self, coords: Coord2) -> &Cell {
        &self[coords]
    }

    /// Panics if `coords` is outside the board.
    pub fn cell_mut(&mut self, coords: Coord2) -> &mut Cell {
        &mut self[coords]
    }

    pub fn set_content(&mut self, coords: Coord2, content: impl Into<String>) -> Result<()> {
        let coords = self.validate_coords(coords)?;
        self.cells[coords.to_nd_index()].content = content.into();
        Ok(())
    }

    fn save_order(&self) -> impl Iterator<Item = Coord2> + use<> {
        let (cols, rows) = self.size();
        (0..cols).flat_map(move |x| (0..rows).map(move |y| (x, y)))
    }

    /// Every cell with its coordinates, columns outer and rows inner. This is
    /// the order saved games store their cells in.
    pub fn iter_save_order(&self) -> impl Iterator<Item = (Coord2, &Cell)> {
        self.save_order()
            .map(move |coords| (coords, &self.cells[coords.to_nd_index()]))
    }

    pub fn snapshot(&self, timer: u32, mines_flagged: u32) -> SavedGame {
        SavedGame {
            cells: self
                .iter_save_order()
                .map(|(_, cell)| CellRecord::from(cell))
                .collect(),
            state: GameStateRecord {
                timer,
                mines_flagged,
            },
        }
    }

    /// Overwrites every cell from `game`. The save is checked in full first, so
    /// on error the board is unchanged.
    pub fn apply_snapshot(&mut self, game: &SavedGame) -> Result<GameStateRecord> {
        let expected = self.total_cells() as usize;
        if game.cells.len() != expected {
            return Err(BoardError::MalformedSave {
                expected,
                found: game.cells.len(),
            });
        }
        if let Some(record) = game.cells.iter().find(|record| record.surrounding_mines > 8) {
            return Err(BoardError::InvalidSurroundingCount(record.surrounding_mines));
        }

        let positions: Vec<Coord2> = self.save_order().collect();
        for (coords, record) in positions.into_iter().zip(&game.cells) {
            self.cells[coords.to_nd_index()] = record.clone().into();
        }
        self.config.mines = self.count_placed_mines();

        Ok(game.state)
    }

    pub fn has_saved_game<S: SaveStore>(store: &S) -> bool {
        store.has_saved_game()
    }

    /// Stores the board with the given game variables. Failures are logged and
    /// reported as `false`.
    pub fn save_game<S: SaveStore>(&self, store: &mut S, timer: u32, mines_flagged: u32) -> bool {
        match store.save(&self.snapshot(timer, mines_flagged)) {
            Ok(()) => {
                log::debug!("Saved game at {}s with {} flags", timer, mines_flagged);
                true
            }
            Err(err) => {
                log::error!("Could not save game: {}", err);
                false
            }
        }
    }

    /// Restores the saved game into this board and removes it from `store`.
    ///
    /// Returns `None` and leaves the board untouched if nothing usable was
    /// saved.
    pub fn load_saved_game<S: SaveStore>(&mut self, store: &mut S) -> Option<GameStateRecord> {
        let game = match store.load() {
            Ok(game) => game,
            Err(err) => {
                log::error!("Could not load saved game: {}", err);
                return None;
            }
        };

        let state = match self.apply_snapshot(&game) {
            Ok(state) => state,
            Err(err) => {
                log::warn!("Ignoring saved game: {}", err);
                return None;
            }
        };

        Self::delete_saved_game(store);
        Some(state)
    }

    /// Removes any save from `store`. Failures are logged, never raised.
    pub fn delete_saved_game<S: SaveStore>(store: &mut S) {
        if let Err(err) = store.delete() {
            log::error!("Could not delete saved game: {}", err);
        }
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[self.expect_coords(coords).to_nd_index()]
    }
}

impl IndexMut<Coord2> for Board {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        let coords = self.expect_coords(coords);
        &mut self.cells[coords.to_nd_index()]
    }
}
