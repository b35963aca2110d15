//! Factura Diff: reconciliation of hospital billing exports.
//!
//! This crate provides functionality for:
//! - Normalizing noisy free-text concepts and identifier fields
//! - Mapping concepts to billing codes against a curated reference table
//! - Transforming the monthly Quiron export into coded (historia, codigo)
//!   records, with an unmapped-concept report
//! - Anti-joining the Real invoicing export against the transformed set to
//!   find charges billed but not documented upstream
//!
//! # Quick Start
//!
//! ```ignore
//! use factura_diff::{ReconConfig, Table, reconcile};
//!
//! let reference = Table::from_csv_reader(std::fs::File::open("codigos.csv")?, true)?;
//! let quiron = Table::from_csv_reader(std::fs::File::open("quiron.csv")?, true)?;
//! let real = Table::from_csv_reader(std::fs::File::open("real.csv")?, false)?;
//!
//! let report = reconcile(&reference, &quiron, &real, &ReconConfig::default())?;
//! for record in &report.differences {
//!     println!("{} {}", record.historia, record.codigo);
//! }
//! ```

mod config;
mod diff;
mod engine;
pub(crate) mod error_codes;
mod normalize;
mod output;
mod quiron;
mod real;
mod reference;
mod table;

pub use config::{
    ConfigError, DEFAULT_CONCEPT_SUFFIX_PATTERN, ReconConfig, ReconConfigBuilder,
};
pub use diff::{BillingRecord, anti_join};
pub use engine::{ReconcileError, ReconcileReport, ReconcileSummary, reconcile};
pub use normalize::{
    ConceptRules, normalize_codigo, normalize_concept, normalize_historia, strip_accents,
};
#[cfg(feature = "csv-io")]
pub use output::csv::{write_records, write_unmapped};
pub use output::json::{serialize_report, serialize_report_pretty};
pub use quiron::{QuironTransform, transform_quiron, transform_quiron_with_reference};
pub use real::{PrepareError, prep_real};
pub use reference::ReferenceMap;
#[cfg(feature = "csv-io")]
pub use table::TableError;
pub use table::{Cell, Table};
