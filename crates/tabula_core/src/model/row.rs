//! Row record model.
//!
//! # Responsibility
//! - Define the uniquely identified record holding one cell per column.
//!
//! # Invariants
//! - `id` is stable for the row lifetime and never reused.
//! - The cell key set always equals the current column ID set; the store
//!   maintains this on every column mutation.

use crate::model::column::ColumnId;
use crate::model::value::CellValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Stable identifier for a row.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type RowId = Uuid;

/// Uniquely identified record holding one value per column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// Stable identity used for cell edits and deletion.
    pub id: RowId,
    /// Cell contents keyed by stable column ID.
    pub cells: HashMap<ColumnId, CellValue>,
}

impl Row {
    /// Creates an empty row with a generated stable ID.
    ///
    /// The store backfills one default cell per current column.
    pub(crate) fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            cells: HashMap::new(),
        }
    }

    /// Returns the cell for `column`, if the column exists on this row.
    pub fn cell(&self, column: ColumnId) -> Option<&CellValue> {
        self.cells.get(&column)
    }
}
