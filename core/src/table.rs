//! In-memory tabular data.
//!
//! This module defines the intermediate representation for the three exports
//! the pipeline consumes:
//! - [`Cell`]: a single field, empty, textual, or numeric
//! - [`Table`]: ordered rows of cells with an optionally captured header row
//!
//! Tables are dumb containers: column semantics (which column holds the
//! concept, the history number, the code) are decided by the consuming
//! modules, not here.

#[cfg(feature = "csv-io")]
use std::io;

use serde::{Deserialize, Serialize};
#[cfg(feature = "csv-io")]
use thiserror::Error;

#[cfg(feature = "csv-io")]
use crate::error_codes;

/// A single field of an input table.
///
/// Numeric cells exist because spreadsheet exports routinely type identifier
/// columns as numbers; normalization renders them back to text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            Cell::Number(_) => false,
        }
    }

    /// Textual rendering of the cell, used as the input to every normalizer.
    ///
    /// Whole numbers render without a fractional part ("123", never "123.0"),
    /// matching how identifier columns are meant to be read.
    pub fn to_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => render_number(*n),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Cell {
        if s.is_empty() {
            Cell::Empty
        } else {
            Cell::Text(s.to_string())
        }
    }
}

fn render_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n >= i64::MIN as f64 && n <= i64::MAX as f64 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// An ordered collection of rows, with the header row (when the source had
/// one) captured separately from the data rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    headers: Option<Vec<String>>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(rows: Vec<Vec<Cell>>) -> Table {
        Table {
            headers: None,
            rows,
        }
    }

    pub fn with_headers(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Table {
        Table {
            headers: Some(headers),
            rows,
        }
    }

    pub fn headers(&self) -> Option<&[String]> {
        self.headers.as_deref()
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    /// Width of the table: the widest row, or the header row if wider.
    ///
    /// Ragged rows are tolerated; missing trailing cells read as [`Cell::Empty`].
    pub fn ncols(&self) -> usize {
        let data_width = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        let header_width = self.headers.as_ref().map(Vec::len).unwrap_or(0);
        data_width.max(header_width)
    }

    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        static EMPTY: Cell = Cell::Empty;
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&EMPTY)
    }
}

#[cfg(feature = "csv-io")]
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TableError {
    #[error("[FACDIF_TABLE_001] CSV read error: {0}. Suggestion: check that the file is valid UTF-8 CSV.")]
    Csv(#[from] csv::Error),
}

#[cfg(feature = "csv-io")]
impl TableError {
    pub fn code(&self) -> &'static str {
        match self {
            TableError::Csv(_) => error_codes::TABLE_CSV_READ,
        }
    }
}

#[cfg(feature = "csv-io")]
impl Table {
    /// Reads a table from CSV.
    ///
    /// With `has_headers` the first record is captured as the header row;
    /// otherwise every record is data (the Real export convention). Records
    /// of differing widths are accepted.
    pub fn from_csv_reader<R: io::Read>(reader: R, has_headers: bool) -> Result<Table, TableError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(has_headers)
            .flexible(true)
            .from_reader(reader);

        let headers = if has_headers {
            Some(rdr.headers()?.iter().map(str::to_string).collect())
        } else {
            None
        };

        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record?;
            rows.push(record.iter().map(Cell::from).collect());
        }

        Ok(Table { headers, rows })
    }
}
