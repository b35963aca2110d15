#![allow(dead_code)]

use factura_diff::{Cell, Table};

pub fn table(rows: &[&[&str]]) -> Table {
    Table::new(rows_from(rows))
}

pub fn table_with_headers(headers: &[&str], rows: &[&[&str]]) -> Table {
    Table::with_headers(
        headers.iter().map(|h| h.to_string()).collect(),
        rows_from(rows),
    )
}

fn rows_from(rows: &[&[&str]]) -> Vec<Vec<Cell>> {
    rows.iter()
        .map(|row| row.iter().map(|cell| Cell::from(*cell)).collect())
        .collect()
}

/// The reference table used across tests: headers in the canonical Spanish
/// form, a handful of concepts with overlapping prefixes.
pub fn sample_reference() -> Table {
    table_with_headers(
        &["Conceptos", "Códigos"],
        &[
            &["Consulta", "C000"],
            &["Consulta General", "C010"],
            &["Consulta Externa", "C001"],
            &["Análisis de sangre", "A100"],
        ],
    )
}
