use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{Debug, Display};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::*;
pub use memory::*;

mod memory;

/// Persisted form of a single cell.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRecord {
    pub content: String,
    pub is_mine: bool,
    pub surrounding_mines: u8,
}

impl From<&Cell> for CellRecord {
    fn from(cell: &Cell) -> Self {
        Self {
            content: cell.content.clone(),
            is_mine: cell.is_mine,
            surrounding_mines: cell.surrounding_mines,
        }
    }
}

impl From<CellRecord> for Cell {
    fn from(record: CellRecord) -> Self {
        Self {
            content: record.content,
            is_mine: record.is_mine,
            surrounding_mines: record.surrounding_mines,
        }
    }
}

/// Game variables kept next to the cells: elapsed time and placed flags.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStateRecord {
    pub timer: u32,
    pub mines_flagged: u32,
}

/// Everything one save holds. `cells` are in save order: `x` outer, `y` inner.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGame {
    pub cells: Vec<CellRecord>,
    pub state: GameStateRecord,
}

/// Durable storage for a single saved game.
///
/// Each call is one atomic unit: `save` replaces whatever was stored before,
/// and `delete` succeeds when there is nothing to delete.
pub trait SaveStore {
    type Error: Display + Debug;

    fn has_saved_game(&self) -> bool;

    fn load(&self) -> core::result::Result<SavedGame, Self::Error>;

    fn save(&mut self, game: &SavedGame) -> core::result::Result<(), Self::Error>;

    fn delete(&mut self) -> core::result::Result<(), Self::Error>;
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("No saved game")]
    NoSavedGame,
}
