//! Preparation of the Real invoicing export.
//!
//! The Real file is headerless with (historia, codigo) in the first two
//! columns. This is the one place the pipeline fails hard: fewer than two
//! columns means the caller handed us the wrong file.

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::diff::BillingRecord;
use crate::error_codes;
use crate::normalize::{normalize_codigo, normalize_historia};
use crate::table::Table;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PrepareError {
    #[error("[FACDIF_PREP_001] the Real table must have at least two columns (historia, codigo); found {found}. Suggestion: check that the right file was supplied and that it is comma-separated.")]
    InsufficientColumns { found: usize },
}

impl PrepareError {
    pub fn code(&self) -> &'static str {
        match self {
            PrepareError::InsufficientColumns { .. } => error_codes::PREP_INSUFFICIENT_COLUMNS,
        }
    }
}

/// Extracts normalized (historia, codigo) records from the Real table.
///
/// Takes the first two columns positionally, normalizes both fields, drops
/// rows with an empty normalized historia, and removes exact duplicate
/// pairs keeping the first occurrence.
pub fn prep_real(table: &Table) -> Result<Vec<BillingRecord>, PrepareError> {
    let ncols = table.ncols();
    if ncols < 2 {
        return Err(PrepareError::InsufficientColumns { found: ncols });
    }

    let mut seen: FxHashSet<(String, String)> = FxHashSet::default();
    let mut records = Vec::new();

    for row in 0..table.nrows() {
        let historia = normalize_historia(&table.cell(row, 0).to_text());
        if historia.is_empty() {
            continue;
        }
        let codigo = normalize_codigo(&table.cell(row, 1).to_text());

        if seen.insert((historia.clone(), codigo.clone())) {
            records.push(BillingRecord { historia, codigo });
        }
    }

    Ok(records)
}
