use thiserror::Error;

use crate::{CellCount, Coord};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Invalid board dimensions: {rows} rows by {cols} columns")]
    InvalidDimensions { rows: Coord, cols: Coord },
    #[error("Invalid mine count: {mines} mines do not fit in {capacity} cells")]
    InvalidMineCount { mines: CellCount, capacity: CellCount },
    #[error("Coordinates ({x}, {y}) are outside the board")]
    OutOfRange { x: Coord, y: Coord },
    #[error("Grid shape does not match the declared size")]
    InvalidBoardShape,
    #[error("Placement set {found} mines, board needs {expected}")]
    InvalidPlacement { expected: CellCount, found: CellCount },
    #[error("Saved game has {found} cell records, board needs {expected}")]
    MalformedSave { expected: usize, found: usize },
    #[error("Saved surrounding mine count {0} is above 8")]
    InvalidSurroundingCount(u8),
}

pub type Result<T> = core::result::Result<T, BoardError>;
