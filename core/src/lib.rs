#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use store::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod generator;
mod store;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub rows: Coord,
    pub cols: Coord,
    pub mines: CellCount,
}

impl BoardConfig {
    pub const fn new_unchecked(rows: Coord, cols: Coord, mines: CellCount) -> Self {
        Self { rows, cols, mines }
    }

    pub fn new(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(rows, cols, mines);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(BoardError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.mines > self.total_cells() {
            return Err(BoardError::InvalidMineCount {
                mines: self.mines,
                capacity: self.total_cells(),
            });
        }
        Ok(())
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.cols)
    }

    /// `(cols, rows)`, the exclusive upper bound of `(x, y)`.
    pub const fn bounds(&self) -> Coord2 {
        (self.cols, self.rows)
    }

    pub const fn beginner() -> Self {
        Self::new_unchecked(9, 9, 10)
    }

    pub const fn intermediate() -> Self {
        Self::new_unchecked(16, 16, 40)
    }

    pub const fn expert() -> Self {
        Self::new_unchecked(16, 30, 99)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_valid() {
        for config in [
            BoardConfig::beginner(),
            BoardConfig::intermediate(),
            BoardConfig::expert(),
        ] {
            assert_eq!(config.validate(), Ok(()));
        }
        assert_eq!(BoardConfig::expert().bounds(), (30, 16));
    }

    #[test]
    fn rejects_empty_dimensions() {
        assert_eq!(
            BoardConfig::new(0, 3, 0),
            Err(BoardError::InvalidDimensions { rows: 0, cols: 3 })
        );
        assert_eq!(
            BoardConfig::new(3, 0, 0),
            Err(BoardError::InvalidDimensions { rows: 3, cols: 0 })
        );
    }

    #[test]
    fn rejects_too_many_mines() {
        assert_eq!(
            BoardConfig::new(2, 3, 7),
            Err(BoardError::InvalidMineCount {
                mines: 7,
                capacity: 6
            })
        );
    }

    #[test]
    fn full_board_is_allowed() {
        assert!(BoardConfig::new(2, 3, 6).is_ok());
    }
}
