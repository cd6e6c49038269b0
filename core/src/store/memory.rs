use super::*;

/// Keeps the save in memory, for tests and front ends without a disk.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryStore {
    saved: Option<SavedGame>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn saved(&self) -> Option<&SavedGame> {
        self.saved.as_ref()
    }
}

impl SaveStore for MemoryStore {
    type Error = StoreError;

    fn has_saved_game(&self) -> bool {
        self.saved.is_some()
    }

    fn load(&self) -> core::result::Result<SavedGame, StoreError> {
        self.saved.clone().ok_or(StoreError::NoSavedGame)
    }

    fn save(&mut self, game: &SavedGame) -> core::result::Result<(), StoreError> {
        self.saved = Some(game.clone());
        Ok(())
    }

    fn delete(&mut self) -> core::result::Result<(), StoreError> {
        self.saved = None;
        Ok(())
    }
}
