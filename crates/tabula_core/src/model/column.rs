//! Column descriptor model.
//!
//! # Responsibility
//! - Define the named, typed attribute shared by all rows.
//! - Separate the mutable display name from the stable column identity.
//!
//! # Invariants
//! - `id` is stable for the column lifetime and never reused.
//! - Renames change `name` only; rows and filters key on `id`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a column, decoupled from its display name.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ColumnId = Uuid;

/// Value type accepted by a column's cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// Free-form text cells.
    Text,
    /// Numeric cells compared with ordering operations.
    Number,
}

impl ColumnType {
    /// Returns the lowercase wire name (`text` / `number`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
        }
    }
}

/// User-facing column descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Stable identity used by cell storage and filters.
    pub id: ColumnId,
    /// Unique display name shown in headers. Mutable via rename.
    pub name: String,
    /// Serialized as `type` to match external schema naming.
    #[serde(rename = "type")]
    pub ty: ColumnType,
}

impl Column {
    /// Creates a column descriptor with a generated stable ID.
    ///
    /// Name validation and uniqueness are enforced by the store, not here.
    pub(crate) fn new(name: impl Into<String>, ty: ColumnType) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            ty,
        }
    }
}
