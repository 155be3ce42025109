//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `tabula_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use tabula_core::{CellValue, ColumnType, FilterOp, TableError, TableResult, TableStore};

fn main() {
    println!("tabula_core ping={}", tabula_core::ping());
    println!("tabula_core version={}", tabula_core::core_version());

    if let Err(err) = run_demo() {
        eprintln!("tabula_cli error: {err}");
        std::process::exit(1);
    }
}

/// Seeds the demo catalog and prints the rows passing one price filter.
fn run_demo() -> TableResult<()> {
    let mut store = TableStore::with_columns([
        ("PRODUCT_LINK", ColumnType::Text),
        ("NAME", ColumnType::Text),
        ("INGREDIENTS", ColumnType::Text),
        ("PRICE", ColumnType::Number),
    ])?;

    for (name, price) in [("Cream", 20.0), ("Serum", 45.0), ("Toner", 32.5)] {
        let row = store.add_row();
        store.update_cell(row, "NAME", CellValue::Text(name.to_string()))?;
        store.update_cell(row, "PRICE", CellValue::Number(price))?;
    }

    store.set_filter_value("PRICE", "30")?;
    store.set_filter_operation("PRICE", FilterOp::GreaterThan)?;

    let name_id = store
        .column("NAME")
        .ok_or_else(|| TableError::ColumnNotFound("NAME".to_string()))?
        .id;
    println!(
        "catalog rows={} visible_after_price_filter:",
        store.row_count()
    );
    for row in store.visible_rows() {
        let name = row
            .cell(name_id)
            .map(CellValue::display_text)
            .unwrap_or_default();
        println!("  {name}");
    }

    Ok(())
}
