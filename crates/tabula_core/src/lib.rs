//! Core domain logic for Tabula, an in-memory catalog table editor.
//! This crate is the single source of truth for table state invariants.

pub mod filter;
pub mod logging;
pub mod model;
pub mod store;

pub use filter::predicate::{ColumnFilter, FilterOp};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::column::{Column, ColumnId, ColumnType};
pub use model::row::{Row, RowId};
pub use model::value::CellValue;
pub use store::table_store::{TableError, TableResult, TableStore};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
