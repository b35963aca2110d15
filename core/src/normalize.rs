//! Canonicalization of the three field families the pipeline compares:
//! free-text concepts, history numbers, and billing codes.
//!
//! Every normalizer takes the textual rendering of a cell and fails safe:
//! missing or malformed input comes out as an empty string, never an error.

use regex::Regex;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::config::{ConfigError, ReconConfig};

/// Compiled concept-normalization rules derived from a [`ReconConfig`].
///
/// Built once per pipeline run so the suffix regex is compiled a single time.
#[derive(Debug, Clone)]
pub struct ConceptRules {
    suffix: Option<Regex>,
}

impl ConceptRules {
    pub fn from_config(config: &ReconConfig) -> Result<ConceptRules, ConfigError> {
        let suffix = if config.strip_concept_suffix {
            Some(config.compiled_suffix_pattern()?)
        } else {
            None
        };
        Ok(ConceptRules { suffix })
    }
}

/// Strips diacritics via canonical decomposition: "Códigos" -> "Codigos".
pub fn strip_accents(text: &str) -> String {
    text.nfkd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Normalizes a free-text concept into its comparison-stable form.
///
/// Lowercases, strips diacritics, drops invisible spaces, replaces common
/// punctuation with spaces, collapses whitespace, and finally removes the
/// trailing batch-code suffix when the rule is enabled. The suffix pass runs
/// last, on the already-collapsed text, which keeps the whole function
/// idempotent.
pub fn normalize_concept(text: &str, rules: &ConceptRules) -> String {
    let lowered = strip_accents(text).to_lowercase();

    let mut spaced = String::with_capacity(lowered.len());
    for c in lowered.chars() {
        match c {
            '\u{a0}' | '\u{200b}' => spaced.push(' '),
            '.' | ',' | ';' | ':' | '_' | '/' | '\\' => spaced.push(' '),
            other => spaced.push(other),
        }
    }

    let collapsed = collapse_whitespace(&spaced);

    match &rules.suffix {
        Some(re) => re.replace(&collapsed, "").trim().to_string(),
        None => collapsed,
    }
}

/// Normalizes a history number to its digit-string form.
///
/// Leading zeros and digit count are preserved: a history number is an
/// identifier, not a quantity. Anything that is not an ASCII digit
/// (whitespace, invisible spaces, separators) is dropped.
pub fn normalize_historia(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

/// Normalizes a billing code.
///
/// Spreadsheet exports render numeric codes as floats ("123.0"); a value
/// that parses as a whole number collapses to its integer decimal form.
/// Everything else is uppercased verbatim.
pub fn normalize_codigo(text: &str) -> String {
    let cleaned: String = text
        .chars()
        .filter(|c| *c != '\u{a0}' && *c != '\u{200b}')
        .collect();
    let trimmed = cleaned.trim();

    if let Ok(n) = trimmed.parse::<f64>() {
        if n.is_finite() && n.fract() == 0.0 && n >= i64::MIN as f64 && n <= i64::MAX as f64 {
            return format!("{}", n as i64);
        }
    }
    trimmed.to_uppercase()
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
