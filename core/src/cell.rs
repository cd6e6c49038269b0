use alloc::string::String;
use serde::{Deserialize, Serialize};

/// One square of the board: the label a player sees plus the generated layout.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Player-visible label, empty while the cell is blank.
    pub content: String,
    pub is_mine: bool,
    /// Mines in the clamped 3x3 window around this cell, always in `0..=8`.
    pub surrounding_mines: u8,
}

impl Cell {
    pub fn is_blank(&self) -> bool {
        self.content.is_empty()
    }

    pub fn clear_content(&mut self) {
        self.content.clear();
    }
}
