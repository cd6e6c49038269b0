use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use minefield_core::{SaveStore, SavedGame};

use crate::*;

/// Keeps one saved game as a JSON document at a fixed path.
///
/// Saves go to a sibling `.tmp` file which is then renamed over the real one,
/// so a reader sees either the old save or the new one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }

    /// Writes `game` to `temp_path` and renames it over the save.
    fn replace_with(&self, temp_path: &Path, game: &SavedGame) -> Result<()> {
        {
            let mut writer = BufWriter::new(File::create(temp_path)?);
            serde_json::to_writer(&mut writer, game)?;
            writer.flush()?;
            writer.get_ref().sync_all()?;
        }
        fs::rename(temp_path, &self.path)?;
        Ok(())
    }
}

impl SaveStore for JsonFileStore {
    type Error = FileStoreError;

    fn has_saved_game(&self) -> bool {
        self.path.is_file()
    }

    fn load(&self) -> Result<SavedGame> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(FileStoreError::NoSavedGame);
            }
            Err(err) => return Err(err.into()),
        };

        let game: SavedGame = serde_json::from_reader(BufReader::new(file))?;
        log::debug!(
            "Loaded {} cells from {}",
            game.cells.len(),
            self.path.display()
        );
        Ok(game)
    }

    fn save(&mut self, game: &SavedGame) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let temp_path = self.temp_path();
        if let Err(err) = self.replace_with(&temp_path, game) {
            if let Err(cleanup) = fs::remove_file(&temp_path) {
                if cleanup.kind() != ErrorKind::NotFound {
                    log::warn!("Could not remove {}: {}", temp_path.display(), cleanup);
                }
            }
            return Err(err);
        }

        log::debug!(
            "Saved {} cells to {}",
            game.cells.len(),
            self.path.display()
        );
        Ok(())
    }

    fn delete(&mut self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                log::debug!("Deleted {}", self.path.display());
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
