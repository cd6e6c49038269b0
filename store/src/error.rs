use thiserror::Error;

#[derive(Error, Debug)]
pub enum FileStoreError {
    #[error("No saved game")]
    NoSavedGame,
    #[error("Save file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Save file is not valid: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FileStoreError>;
