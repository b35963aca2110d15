//! Transformation of the monthly Quiron export: free-text concepts to coded
//! (historia, codigo) records, plus the unmapped-concept report.

use rustc_hash::FxHashSet;

use crate::config::{ConfigError, ReconConfig};
use crate::diff::BillingRecord;
use crate::normalize::{normalize_codigo, normalize_historia};
use crate::reference::{ReferenceMap, header_key};
use crate::table::Table;

/// Output of the Quiron transformation step.
#[derive(Debug, Clone, Default)]
pub struct QuironTransform {
    /// One record per source row with a non-empty normalized historia.
    /// `codigo` may be empty (unmapped concept).
    pub records: Vec<BillingRecord>,
    /// Distinct original concept strings that resolved to no code, in
    /// first-occurrence order. Feeds the manual follow-up report.
    pub unmapped: Vec<String>,
    /// Human-readable notes about column inference fallbacks.
    pub warnings: Vec<String>,
}

/// Maps every Quiron row through the reference map and normalizes the
/// identifier fields.
///
/// Rows whose historia normalizes to empty are dropped. An unmappable
/// concept is not an error: the row keeps an empty codigo and the original
/// concept text is recorded once in the unmapped list.
pub fn transform_quiron(
    table: &Table,
    reference: &ReferenceMap,
    config: &ReconConfig,
) -> QuironTransform {
    let mut out = QuironTransform::default();
    if table.ncols() == 0 {
        return out;
    }

    let columns = select_columns(table, config);
    if let Some(warning) = columns.warning {
        out.warnings.push(warning);
    }

    let mut seen_unmapped: FxHashSet<String> = FxHashSet::default();

    for row in 0..table.nrows() {
        let concept_text = table.cell(row, columns.concept).to_text();
        let historia = normalize_historia(&table.cell(row, columns.historia).to_text());
        if historia.is_empty() {
            continue;
        }

        let codigo = normalize_codigo(&reference.map_or_empty(&concept_text));
        if codigo.is_empty() && !concept_text.trim().is_empty() {
            if seen_unmapped.insert(concept_text.clone()) {
                out.unmapped.push(concept_text);
            }
        }

        out.records.push(BillingRecord { historia, codigo });
    }

    out
}

/// Convenience wrapper: builds the reference map and transforms in one call.
pub fn transform_quiron_with_reference(
    quiron: &Table,
    reference_table: &Table,
    config: &ReconConfig,
) -> Result<QuironTransform, ConfigError> {
    let reference = ReferenceMap::build(reference_table, config)?;
    Ok(transform_quiron(quiron, &reference, config))
}

struct SelectedColumns {
    concept: usize,
    historia: usize,
    warning: Option<String>,
}

/// Applies the column convention for the Quiron export.
///
/// With enough columns the fixed positions hold (spreadsheet columns C/D).
/// Narrower tables fall back to a header alias search: substring match for
/// the concept column, exact match for the historia column, positional
/// defaults when neither is found. Indices are clamped to the table width.
fn select_columns(table: &Table, config: &ReconConfig) -> SelectedColumns {
    let ncols = table.ncols();

    if ncols >= config.quiron_positional_min_cols {
        return SelectedColumns {
            concept: config.quiron_concept_col,
            historia: config.quiron_historia_col,
            warning: None,
        };
    }

    let keys: Vec<String> = match table.headers() {
        Some(headers) => headers.iter().map(|h| header_key(h)).collect(),
        None => Vec::new(),
    };

    let concept = keys
        .iter()
        .position(|k| {
            config
                .concept_aliases
                .iter()
                .any(|a| k.contains(&header_key(a)))
        })
        .unwrap_or(config.quiron_concept_col);
    let historia = keys
        .iter()
        .position(|k| config.historia_aliases.iter().any(|a| *k == header_key(a)))
        .unwrap_or(config.quiron_historia_col);

    let last = ncols.saturating_sub(1);
    SelectedColumns {
        concept: concept.min(last),
        historia: historia.min(last),
        warning: Some(format!(
            "quiron table has {} columns; concept/historia located by header search instead of fixed positions",
            ncols
        )),
    }
}
