//! Per-column row filtering.
//!
//! # Responsibility
//! - Define the filter operations selectable per column type.
//! - Evaluate one filter entry against one cell value.
//!
//! # Invariants
//! - Filters combine by logical AND across columns; one entry only ever
//!   decides its own column.
//! - Entries still being configured (no operation yet) pass every row.

pub mod predicate;
