use tabula_core::{CellValue, ColumnType, TableError, TableStore};
use uuid::Uuid;

fn catalog() -> TableStore {
    TableStore::with_columns([("NAME", ColumnType::Text), ("PRICE", ColumnType::Number)])
        .expect("seed columns are unique and non-blank")
}

#[test]
fn add_row_backfills_type_defaults_for_every_column() {
    let mut store = catalog();
    let id = store.add_row();

    let row = store.row(id).expect("row was just added");
    let name_id = store.column("NAME").unwrap().id;
    let price_id = store.column("PRICE").unwrap().id;
    assert_eq!(row.cell(name_id), Some(&CellValue::Text(String::new())));
    assert_eq!(row.cell(price_id), Some(&CellValue::Number(0.0)));
    assert_eq!(row.cells.len(), 2);
}

#[test]
fn add_row_generates_unique_ids() {
    let mut store = catalog();
    let first = store.add_row();
    let second = store.add_row();
    assert_ne!(first, second);
    assert_eq!(store.row_count(), 2);
}

#[test]
fn delete_row_removes_only_the_target_and_preserves_order() {
    let mut store = catalog();
    let first = store.add_row();
    let second = store.add_row();
    let third = store.add_row();

    store.delete_row(second).expect("row exists");

    assert!(store.row(second).is_none());
    let remaining: Vec<_> = store.rows().iter().map(|row| row.id).collect();
    assert_eq!(remaining, vec![first, third]);
}

#[test]
fn delete_row_not_found_returns_typed_error() {
    let mut store = catalog();
    store.add_row();

    let missing = Uuid::new_v4();
    let err = store.delete_row(missing).unwrap_err();
    assert!(matches!(err, TableError::RowNotFound(id) if id == missing));
    assert_eq!(store.row_count(), 1);
}

#[test]
fn update_cell_stores_the_value_as_supplied() {
    let mut store = catalog();
    let id = store.add_row();

    store
        .update_cell(id, "NAME", CellValue::Text("Cream".to_string()))
        .expect("NAME column exists");
    store
        .update_cell(id, "PRICE", CellValue::Number(19.99))
        .expect("PRICE column exists");

    let row = store.row(id).unwrap();
    let name_id = store.column("NAME").unwrap().id;
    let price_id = store.column("PRICE").unwrap().id;
    assert_eq!(row.cell(name_id), Some(&CellValue::Text("Cream".to_string())));
    assert_eq!(row.cell(price_id), Some(&CellValue::Number(19.99)));
}

#[test]
fn update_cell_accepts_text_in_number_columns_without_coercion() {
    // The caller owns input coercion; the store keeps what it is given and
    // the numeric view resolves it at filter time.
    let mut store = catalog();
    let id = store.add_row();

    store
        .update_cell(id, "PRICE", CellValue::Text("19.99".to_string()))
        .expect("PRICE column exists");

    let price_id = store.column("PRICE").unwrap().id;
    let cell = store.row(id).unwrap().cell(price_id).unwrap();
    assert_eq!(cell, &CellValue::Text("19.99".to_string()));
    assert_eq!(cell.as_number(), 19.99);
}

#[test]
fn update_cell_reports_missing_row_and_missing_column() {
    let mut store = catalog();
    let id = store.add_row();

    let missing_row = store
        .update_cell(Uuid::new_v4(), "NAME", CellValue::Text("x".to_string()))
        .unwrap_err();
    assert!(matches!(missing_row, TableError::RowNotFound(_)));

    let missing_column = store
        .update_cell(id, "RATING", CellValue::Number(5.0))
        .unwrap_err();
    assert!(matches!(missing_column, TableError::ColumnNotFound(name) if name == "RATING"));
}
