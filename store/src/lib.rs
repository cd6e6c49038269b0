//! File-backed persistence for minefield boards.

pub use error::*;
pub use json::*;

mod error;
mod json;
