//! The anti-join: Real records absent from the transformed Quiron set.
//!
//! This is the step that actually finds billing errors, so its contract is
//! strict: exact pair equality on both normalized fields, and a fully
//! deterministic output order.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// A normalized (historia, codigo) pair.
///
/// Both fields are comparison-stable text: historia is a digit string with
/// leading zeros intact, codigo is the canonical code form (possibly empty
/// for unmapped Quiron rows). The derived `Ord` is (historia, codigo)
/// lexicographic, which is exactly the report order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BillingRecord {
    pub historia: String,
    pub codigo: String,
}

impl BillingRecord {
    pub fn new(historia: impl Into<String>, codigo: impl Into<String>) -> BillingRecord {
        BillingRecord {
            historia: historia.into(),
            codigo: codigo.into(),
        }
    }
}

/// Returns the records present in `real` but absent from `quiron`, sorted
/// ascending by (historia, codigo) as text.
///
/// Historia order is lexical digit-string order, not numeric: "0123" and
/// "123" are different identifiers and sort as text. The output carries no
/// duplicates as long as `real` carries none (which [`prep_real`] ensures).
///
/// [`prep_real`]: crate::prep_real
pub fn anti_join(real: &[BillingRecord], quiron: &[BillingRecord]) -> Vec<BillingRecord> {
    let quiron_set: FxHashSet<&BillingRecord> = quiron.iter().collect();

    let mut out: Vec<BillingRecord> = real
        .iter()
        .filter(|r| !quiron_set.contains(*r))
        .cloned()
        .collect();
    out.sort_unstable();
    out
}
