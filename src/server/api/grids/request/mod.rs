//! Structs for mapping the grid request body.
use serde::Deserialize;

use crate::db::models::grid::Slot;

/// Body of a save request: `{ "grid": { "name", "manga" } }`.
#[derive(Debug, Deserialize)]
pub struct SaveGrid {
    /// The grid to save.
    pub grid: GridDocument,
}

/// The grid payload itself.
///
/// Nothing beyond presence and shape is validated here; the client sends
/// nine slots and the same manga may appear in several of them.
#[derive(Debug, Deserialize)]
pub struct GridDocument {
    /// Free-text label, optional.
    pub name: Option<String>,
    /// The nine slots, each empty or one cover reference.
    pub manga: Vec<Slot>,
}
