use ndarray::Array2;
use rand::prelude::*;

use crate::*;
pub use random::*;

mod random;

/// Strategy for the mine placement phase of board generation.
///
/// Implementations receive an already validated config and return a
/// `(rows, cols)` mask with `config.mines` cells set. [`Board::generate_with`]
/// rejects any other mask with [`BoardError::InvalidBoardShape`] or
/// [`BoardError::InvalidPlacement`].
pub trait MinePlacer {
    fn place<R: Rng + ?Sized>(&self, config: BoardConfig, rng: &mut R) -> Array2<bool>;
}

fn grid_shape(config: BoardConfig) -> (usize, usize) {
    (config.rows.into(), config.cols.into())
}

pub(crate) fn count_mines(mines: &Array2<bool>) -> CellCount {
    mines.iter().filter(|&&is_mine| is_mine).count() as CellCount
}

/// Double check the mine count, the placement loops should never miss it.
fn check_mine_count(mines: &Array2<bool>, config: BoardConfig) {
    let count = count_mines(mines);
    if count != config.mines {
        log::warn!(
            "Generated minefield count mismatch, actual: {}, requested: {}",
            count,
            config.mines
        );
    }
}
