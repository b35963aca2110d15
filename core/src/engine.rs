//! End-to-end pipeline orchestration.
//!
//! `reconcile` runs the four stages in order — build the reference map,
//! transform Quiron, prepare Real, anti-join — and returns everything the
//! monthly review needs in one report.

use rustc_hash::FxHashSet;
use serde::Serialize;
use thiserror::Error;

use crate::config::{ConfigError, ReconConfig};
use crate::diff::{BillingRecord, anti_join};
use crate::quiron::transform_quiron;
use crate::real::{PrepareError, prep_real};
use crate::reference::ReferenceMap;
use crate::table::Table;

/// Headline counts for the reconciliation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReconcileSummary {
    /// Unique (historia, codigo) pairs in the prepared Real set.
    pub real_unique: usize,
    /// Unique pairs in the transformed Quiron set.
    pub quiron_unique: usize,
    /// Pairs billed in Real but absent from Quiron.
    pub difference_count: usize,
}

/// Full output of a reconciliation run.
#[derive(Debug, Clone, Serialize)]
pub struct ReconcileReport {
    /// Quiron rows after concept-to-code mapping and normalization.
    pub transformed: Vec<BillingRecord>,
    /// Distinct original concepts that resolved to no code.
    pub unmapped_concepts: Vec<String>,
    /// Prepared Real records (normalized, deduplicated).
    pub real: Vec<BillingRecord>,
    /// Real-minus-Quiron differences, sorted by (historia, codigo).
    pub differences: Vec<BillingRecord>,
    /// Column-inference fallback notes from the Quiron step.
    pub warnings: Vec<String>,
    pub summary: ReconcileSummary,
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReconcileError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Prepare(#[from] PrepareError),
}

impl ReconcileError {
    pub fn code(&self) -> &'static str {
        match self {
            ReconcileError::Config(e) => e.code(),
            ReconcileError::Prepare(e) => e.code(),
        }
    }
}

/// Runs the full pipeline over the three input tables.
///
/// Pure and reentrant: the reference map and every intermediate table are
/// rebuilt per call, nothing is cached across invocations.
pub fn reconcile(
    reference: &Table,
    quiron: &Table,
    real: &Table,
    config: &ReconConfig,
) -> Result<ReconcileReport, ReconcileError> {
    let reference_map = ReferenceMap::build(reference, config)?;
    let transform = transform_quiron(quiron, &reference_map, config);
    let real_records = prep_real(real)?;
    let differences = anti_join(&real_records, &transform.records);

    let quiron_unique = distinct_count(&transform.records);
    let summary = ReconcileSummary {
        real_unique: real_records.len(),
        quiron_unique,
        difference_count: differences.len(),
    };

    Ok(ReconcileReport {
        transformed: transform.records,
        unmapped_concepts: transform.unmapped,
        real: real_records,
        differences,
        warnings: transform.warnings,
        summary,
    })
}

fn distinct_count(records: &[BillingRecord]) -> usize {
    records.iter().collect::<FxHashSet<_>>().len()
}
