//! The reference map: normalized concept text -> billing code.
//!
//! Built once per run from the externally maintained reference table, then
//! queried for every Quiron row. Resolution is exact-match first, then
//! best-substring: among reference keys contained in the normalized input,
//! the longest wins, and equal lengths fall back to the earliest
//! reference-table row.

use rustc_hash::FxHashMap;

use crate::config::{ConfigError, ReconConfig};
use crate::normalize::{ConceptRules, normalize_concept, strip_accents};
use crate::table::Table;

#[derive(Debug, Clone)]
struct RefEntry {
    concept: String,
    code: String,
}

/// Lookup from normalized concept text to code text.
///
/// Entries keep their first-insertion order even when a later duplicate row
/// overwrites a key's code (last-row-wins for the code, first position for
/// the tie-break), so substring resolution is deterministic.
#[derive(Debug, Clone)]
pub struct ReferenceMap {
    entries: Vec<RefEntry>,
    index: FxHashMap<String, usize>,
    rules: ConceptRules,
}

impl ReferenceMap {
    /// Builds the map from a raw reference table.
    ///
    /// Concept/code columns are located by header alias (case- and
    /// accent-insensitive) with the first two columns as positional
    /// fallback. Rows with both fields empty are dropped; rows whose
    /// normalized concept is empty are skipped.
    pub fn build(table: &Table, config: &ReconConfig) -> Result<ReferenceMap, ConfigError> {
        let rules = ConceptRules::from_config(config)?;
        let (concept_col, code_col) = locate_columns(table, config);

        let mut map = ReferenceMap {
            entries: Vec::new(),
            index: FxHashMap::default(),
            rules,
        };

        for row in 0..table.nrows() {
            let concept_cell = table.cell(row, concept_col);
            let code_cell = table.cell(row, code_col);
            if concept_cell.is_empty() && code_cell.is_empty() {
                continue;
            }

            let concept = normalize_concept(&concept_cell.to_text(), &map.rules);
            if concept.is_empty() {
                continue;
            }
            let code = code_cell.to_text().trim().to_string();

            match map.index.get(&concept) {
                Some(&pos) => map.entries[pos].code = code,
                None => {
                    map.index.insert(concept.clone(), map.entries.len());
                    map.entries.push(RefEntry { concept, code });
                }
            }
        }

        Ok(map)
    }

    /// Resolves a raw concept to its code.
    ///
    /// Exact normalized match wins outright. Otherwise every reference key
    /// that is a substring of the normalized input is a candidate and the
    /// longest one is taken as the most specific; equal-length candidates
    /// resolve to the earliest reference-table row.
    pub fn map_concept(&self, concept: &str) -> Option<&str> {
        let normalized = normalize_concept(concept, &self.rules);
        if let Some(&pos) = self.index.get(&normalized) {
            return Some(&self.entries[pos].code);
        }

        let mut best: Option<&RefEntry> = None;
        for entry in &self.entries {
            if entry.concept.is_empty() || !normalized.contains(&entry.concept) {
                continue;
            }
            let better = match best {
                Some(b) => entry.concept.len() > b.concept.len(),
                None => true,
            };
            if better {
                best = Some(entry);
            }
        }
        best.map(|e| e.code.as_str())
    }

    /// Like [`map_concept`](Self::map_concept), with "" for unmapped input.
    pub fn map_or_empty(&self, concept: &str) -> String {
        self.map_concept(concept).unwrap_or("").to_string()
    }

    pub fn rules(&self) -> &ConceptRules {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Locates the (concept, code) columns of the reference table.
fn locate_columns(table: &Table, config: &ReconConfig) -> (usize, usize) {
    let headers = match table.headers() {
        Some(h) => h,
        None => return (0, 1),
    };
    let keys: Vec<String> = headers.iter().map(|h| header_key(h)).collect();

    let concept_col = find_alias(&keys, &config.reference_concept_aliases).unwrap_or(0);
    let code_col = find_alias(&keys, &config.reference_code_aliases).unwrap_or(1);
    (concept_col, code_col)
}

fn find_alias(keys: &[String], aliases: &[String]) -> Option<usize> {
    for alias in aliases {
        let alias_key = header_key(alias);
        if let Some(idx) = keys.iter().position(|k| *k == alias_key) {
            return Some(idx);
        }
    }
    None
}

pub(crate) fn header_key(header: &str) -> String {
    strip_accents(header).trim().to_lowercase()
}
