//! In-memory catalog table store.
//!
//! # Responsibility
//! - Apply row, column, cell and filter mutations with validation.
//! - Compute the filtered visible subset on demand.
//!
//! # Invariants
//! - Column display names are unique (case-sensitive, compared after trim).
//! - Every row holds exactly one cell per current column.
//! - Filters reference only existing columns; deleting a column prunes its
//!   filter entry together with its cells.
//! - Failed operations return a typed error and leave state untouched.

use crate::filter::predicate::{ColumnFilter, FilterOp};
use crate::model::column::{Column, ColumnId, ColumnType};
use crate::model::row::{Row, RowId};
use crate::model::value::CellValue;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type for table store mutations.
pub type TableResult<T> = Result<T, TableError>;

/// Validation and lookup errors surfaced by [`TableStore`] operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// Column name is blank after trimming.
    EmptyColumnName,
    /// Another column already uses this display name.
    DuplicateColumnName(String),
    /// No column with this display name exists.
    ColumnNotFound(String),
    /// No row with this ID exists.
    RowNotFound(RowId),
}

impl Display for TableError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyColumnName => write!(f, "column name must not be blank"),
            Self::DuplicateColumnName(name) => {
                write!(f, "column name already in use: `{name}`")
            }
            Self::ColumnNotFound(name) => write!(f, "column not found: `{name}`"),
            Self::RowNotFound(id) => write!(f, "row not found: {id}"),
        }
    }
}

impl Error for TableError {}

/// In-memory catalog table: column definitions, row records and active
/// per-column filters.
///
/// The store is a pure value owned by a single UI session and transitioned
/// synchronously by the operations below. Rows and columns keep insertion
/// order; [`TableStore::visible_rows`] recomputes the filtered subset on
/// every call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableStore {
    columns: Vec<Column>,
    rows: Vec<Row>,
    filters: HashMap<ColumnId, ColumnFilter>,
}

impl TableStore {
    /// Creates an empty table with no columns, rows or filters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table seeded with `(name, type)` column pairs.
    ///
    /// Validates each pair exactly as [`TableStore::add_column`] does.
    pub fn with_columns<I, S>(columns: I) -> TableResult<Self>
    where
        I: IntoIterator<Item = (S, ColumnType)>,
        S: Into<String>,
    {
        let mut store = Self::new();
        for (name, ty) in columns {
            store.add_column(name, ty)?;
        }
        Ok(store)
    }

    /// Appends a row holding the type default for every current column.
    ///
    /// Returns the generated stable row ID.
    pub fn add_row(&mut self) -> RowId {
        let mut row = Row::new();
        for column in &self.columns {
            row.cells.insert(column.id, CellValue::default_for(column.ty));
        }
        let id = row.id;
        self.rows.push(row);
        debug!(
            "event=row_added module=store status=ok row_id={id} column_count={}",
            self.columns.len()
        );
        id
    }

    /// Removes the row with `id`, preserving the order of the rest.
    ///
    /// # Errors
    /// - [`TableError::RowNotFound`] when no row has `id`.
    pub fn delete_row(&mut self, id: RowId) -> TableResult<()> {
        let index = self
            .rows
            .iter()
            .position(|row| row.id == id)
            .ok_or(TableError::RowNotFound(id))?;
        self.rows.remove(index);
        debug!(
            "event=row_deleted module=store status=ok row_id={id} row_count={}",
            self.rows.len()
        );
        Ok(())
    }

    /// Appends a column and backfills its type default into every row.
    ///
    /// The name is trimmed before validation and stored trimmed.
    ///
    /// # Errors
    /// - [`TableError::EmptyColumnName`] when `name` is blank.
    /// - [`TableError::DuplicateColumnName`] on a case-sensitive exact match
    ///   with an existing display name.
    pub fn add_column(
        &mut self,
        name: impl Into<String>,
        ty: ColumnType,
    ) -> TableResult<ColumnId> {
        let name = name.into();
        let trimmed = self.validate_new_name(name.trim(), None)?;

        let column = Column::new(trimmed, ty);
        let id = column.id;
        let default = CellValue::default_for(ty);
        for row in &mut self.rows {
            row.cells.insert(id, default.clone());
        }
        self.columns.push(column);
        debug!(
            "event=column_added module=store status=ok column_id={id} ty={} column_count={}",
            ty.as_str(),
            self.columns.len()
        );
        Ok(id)
    }

    /// Renames and retypes the column currently displayed as `old_name`.
    ///
    /// # Contract
    /// - The rename is data-preserving: cells stay keyed by the stable
    ///   column ID, so no row data is lost or reset.
    /// - A type change coerces every existing cell via
    ///   [`CellValue::coerce_to`].
    /// - The filter entry for the column, if any, is kept; an operation left
    ///   over from the previous type simply stops constraining the view.
    ///
    /// # Errors
    /// - [`TableError::ColumnNotFound`] when `old_name` resolves to nothing.
    /// - [`TableError::EmptyColumnName`] when `new_name` is blank.
    /// - [`TableError::DuplicateColumnName`] when another column already
    ///   uses `new_name`.
    pub fn update_column(
        &mut self,
        old_name: &str,
        new_name: impl Into<String>,
        new_ty: ColumnType,
    ) -> TableResult<()> {
        let new_name = new_name.into();
        let index = self
            .column_index(old_name)
            .ok_or_else(|| TableError::ColumnNotFound(old_name.to_string()))?;
        let trimmed = self.validate_new_name(new_name.trim(), Some(index))?.to_string();

        let id = self.columns[index].id;
        let old_ty = self.columns[index].ty;
        self.columns[index].name = trimmed;
        self.columns[index].ty = new_ty;

        if old_ty != new_ty {
            for row in &mut self.rows {
                if let Some(cell) = row.cells.get_mut(&id) {
                    *cell = cell.coerce_to(new_ty);
                }
            }
        }
        debug!(
            "event=column_updated module=store status=ok column_id={id} ty={} retyped={}",
            new_ty.as_str(),
            old_ty != new_ty
        );
        Ok(())
    }

    /// Removes the column displayed as `name`, pruning its cell from every
    /// row and its filter entry, if any.
    ///
    /// # Errors
    /// - [`TableError::ColumnNotFound`] when no column has `name`.
    pub fn delete_column(&mut self, name: &str) -> TableResult<()> {
        let index = self
            .column_index(name)
            .ok_or_else(|| TableError::ColumnNotFound(name.to_string()))?;
        let column = self.columns.remove(index);
        for row in &mut self.rows {
            row.cells.remove(&column.id);
        }
        self.filters.remove(&column.id);
        debug!(
            "event=column_deleted module=store status=ok column_id={} column_count={}",
            column.id,
            self.columns.len()
        );
        Ok(())
    }

    /// Sets the cell at (`row_id`, `column_name`) to `value` as supplied.
    ///
    /// No coercion is applied beyond what the caller provides; the
    /// presentation layer decides how typed input maps to a [`CellValue`].
    ///
    /// # Errors
    /// - [`TableError::ColumnNotFound`] / [`TableError::RowNotFound`] when
    ///   either coordinate does not resolve.
    pub fn update_cell(
        &mut self,
        row_id: RowId,
        column_name: &str,
        value: CellValue,
    ) -> TableResult<()> {
        let column_id = self
            .column(column_name)
            .ok_or_else(|| TableError::ColumnNotFound(column_name.to_string()))?
            .id;
        let row = self
            .rows
            .iter_mut()
            .find(|row| row.id == row_id)
            .ok_or(TableError::RowNotFound(row_id))?;
        row.cells.insert(column_id, value);
        Ok(())
    }

    /// Upserts the filter entry for `column_name`, setting its comparison
    /// text only.
    ///
    /// A new entry starts without an operation and imposes no constraint
    /// until one is selected.
    ///
    /// # Errors
    /// - [`TableError::ColumnNotFound`] when no column has `column_name`.
    pub fn set_filter_value(
        &mut self,
        column_name: &str,
        value: impl Into<String>,
    ) -> TableResult<()> {
        let id = self
            .column(column_name)
            .ok_or_else(|| TableError::ColumnNotFound(column_name.to_string()))?
            .id;
        self.filters.entry(id).or_default().value = value.into();
        Ok(())
    }

    /// Upserts the filter entry for `column_name`, setting its operation
    /// only.
    ///
    /// A new entry starts with empty comparison text.
    ///
    /// # Errors
    /// - [`TableError::ColumnNotFound`] when no column has `column_name`.
    pub fn set_filter_operation(&mut self, column_name: &str, op: FilterOp) -> TableResult<()> {
        let id = self
            .column(column_name)
            .ok_or_else(|| TableError::ColumnNotFound(column_name.to_string()))?
            .id;
        self.filters.entry(id).or_default().op = Some(op);
        Ok(())
    }

    /// Removes every filter entry, restoring the unfiltered view.
    pub fn clear_filters(&mut self) {
        self.filters.clear();
        debug!("event=filters_cleared module=store status=ok");
    }

    /// Returns the rows satisfying all active filters, in insertion order.
    ///
    /// Columns without a filter entry impose no constraint; see
    /// [`ColumnFilter::matches`] for per-entry semantics.
    pub fn visible_rows(&self) -> Vec<&Row> {
        self.rows
            .iter()
            .filter(|row| self.row_passes_filters(row))
            .collect()
    }

    /// Returns all columns in insertion order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the column displayed as `name`, if present.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    /// Returns all rows in insertion order, ignoring filters.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Returns the row with `id`, if present.
    pub fn row(&self, id: RowId) -> Option<&Row> {
        self.rows.iter().find(|row| row.id == id)
    }

    /// Returns the filter entry for the column displayed as `name`, if any.
    pub fn filter(&self, column_name: &str) -> Option<&ColumnFilter> {
        let column = self.column(column_name)?;
        self.filters.get(&column.id)
    }

    /// Returns the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Returns the number of rows, ignoring filters.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of active filter entries.
    pub fn filter_count(&self) -> usize {
        self.filters.len()
    }

    fn row_passes_filters(&self, row: &Row) -> bool {
        self.filters.iter().all(|(column_id, entry)| {
            // Entries are pruned with their column, so the lookups only miss
            // if the caller holds a stale row from another store value.
            let Some(column) = self.columns.iter().find(|column| column.id == *column_id) else {
                return true;
            };
            let Some(cell) = row.cell(column.id) else {
                return true;
            };
            entry.matches(column.ty, cell)
        })
    }

    fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column.name == name)
    }

    /// Validates a trimmed display name against blankness and uniqueness,
    /// skipping `keep_index` so a column may keep its own name on update.
    fn validate_new_name<'a>(
        &self,
        trimmed: &'a str,
        keep_index: Option<usize>,
    ) -> TableResult<&'a str> {
        if trimmed.is_empty() {
            return Err(TableError::EmptyColumnName);
        }
        let duplicate = self
            .columns
            .iter()
            .enumerate()
            .any(|(index, column)| Some(index) != keep_index && column.name == trimmed);
        if duplicate {
            return Err(TableError::DuplicateColumnName(trimmed.to_string()));
        }
        Ok(trimmed)
    }
}
