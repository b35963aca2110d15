//! Configuration for the reconciliation pipeline.
//!
//! `ReconConfig` centralizes the business heuristics — the trailing-suffix
//! rule in concept normalization and the header alias lists used to locate
//! columns — so none of them are hardcoded at their point of use.

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error_codes;

/// Default pattern for the trailing batch-code heuristic: one or more
/// hyphen-joined alphanumeric groups of length >= 2 at the end of the
/// concept, with optional whitespace around the hyphens
/// (e.g. "Consulta Externa - 32 - AB25 - 0005357").
pub const DEFAULT_CONCEPT_SUFFIX_PATTERN: &str = r"(?:\s*-\s*[A-Za-z0-9]{2,})+\s*$";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconConfig {
    /// Whether to strip the trailing batch-code suffix during concept
    /// normalization.
    pub strip_concept_suffix: bool,
    /// Regex applied to the lowercased, accent-stripped concept when
    /// `strip_concept_suffix` is on; the match is removed.
    pub concept_suffix_pattern: String,

    /// Header aliases for the reference table's concept column
    /// (compared case- and accent-insensitively).
    pub reference_concept_aliases: Vec<String>,
    /// Header aliases for the reference table's code column.
    pub reference_code_aliases: Vec<String>,

    /// Substring aliases used to find the concept column in a narrow
    /// Quiron table.
    pub concept_aliases: Vec<String>,
    /// Exact-match aliases used to find the history column in a narrow
    /// Quiron table.
    pub historia_aliases: Vec<String>,

    /// Positional convention for the Quiron export: concept column index.
    pub quiron_concept_col: usize,
    /// Positional convention for the Quiron export: history column index.
    pub quiron_historia_col: usize,
    /// Minimum column count at which the positional convention applies
    /// directly, skipping the header alias search.
    pub quiron_positional_min_cols: usize,
}

impl Default for ReconConfig {
    fn default() -> Self {
        Self {
            strip_concept_suffix: true,
            concept_suffix_pattern: DEFAULT_CONCEPT_SUFFIX_PATTERN.to_string(),
            reference_concept_aliases: vec!["conceptos".to_string()],
            reference_code_aliases: vec!["codigos".to_string()],
            concept_aliases: vec!["concepto".to_string()],
            historia_aliases: vec![
                "nhc".to_string(),
                "n.h.c".to_string(),
                "historia".to_string(),
                "nº historia".to_string(),
                "numero historia".to_string(),
            ],
            quiron_concept_col: 2,
            quiron_historia_col: 3,
            quiron_positional_min_cols: 4,
        }
    }
}

impl ReconConfig {
    pub fn builder() -> ReconConfigBuilder {
        ReconConfigBuilder {
            inner: ReconConfig::default(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.strip_concept_suffix {
            self.compiled_suffix_pattern()?;
        }
        ensure_non_empty(&self.reference_concept_aliases, "reference_concept_aliases")?;
        ensure_non_empty(&self.reference_code_aliases, "reference_code_aliases")?;
        ensure_non_empty(&self.concept_aliases, "concept_aliases")?;
        ensure_non_empty(&self.historia_aliases, "historia_aliases")?;
        Ok(())
    }

    pub(crate) fn compiled_suffix_pattern(&self) -> Result<Regex, ConfigError> {
        Regex::new(&self.concept_suffix_pattern).map_err(|e| ConfigError::InvalidSuffixPattern {
            pattern: self.concept_suffix_pattern.clone(),
            message: e.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("[FACDIF_CFG_001] invalid concept suffix pattern '{pattern}': {message}. Suggestion: test the regex against a sample concept or disable strip_concept_suffix.")]
    InvalidSuffixPattern { pattern: String, message: String },
    #[error("[FACDIF_CFG_002] {field} must contain at least one alias. Suggestion: restore the default alias list.")]
    EmptyAliasList { field: &'static str },
}

impl ConfigError {
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::InvalidSuffixPattern { .. } => error_codes::CONFIG_INVALID_SUFFIX_PATTERN,
            ConfigError::EmptyAliasList { .. } => error_codes::CONFIG_EMPTY_ALIAS_LIST,
        }
    }
}

fn ensure_non_empty(aliases: &[String], field: &'static str) -> Result<(), ConfigError> {
    if aliases.is_empty() {
        return Err(ConfigError::EmptyAliasList { field });
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct ReconConfigBuilder {
    inner: ReconConfig,
}

impl Default for ReconConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReconConfigBuilder {
    pub fn new() -> Self {
        ReconConfig::builder()
    }

    pub fn strip_concept_suffix(mut self, value: bool) -> Self {
        self.inner.strip_concept_suffix = value;
        self
    }

    pub fn concept_suffix_pattern(mut self, value: impl Into<String>) -> Self {
        self.inner.concept_suffix_pattern = value.into();
        self
    }

    pub fn reference_concept_aliases(mut self, value: Vec<String>) -> Self {
        self.inner.reference_concept_aliases = value;
        self
    }

    pub fn reference_code_aliases(mut self, value: Vec<String>) -> Self {
        self.inner.reference_code_aliases = value;
        self
    }

    pub fn concept_aliases(mut self, value: Vec<String>) -> Self {
        self.inner.concept_aliases = value;
        self
    }

    pub fn historia_aliases(mut self, value: Vec<String>) -> Self {
        self.inner.historia_aliases = value;
        self
    }

    pub fn quiron_concept_col(mut self, value: usize) -> Self {
        self.inner.quiron_concept_col = value;
        self
    }

    pub fn quiron_historia_col(mut self, value: usize) -> Self {
        self.inner.quiron_historia_col = value;
        self
    }

    pub fn quiron_positional_min_cols(mut self, value: usize) -> Self {
        self.inner.quiron_positional_min_cols = value;
        self
    }

    pub fn build(self) -> Result<ReconConfig, ConfigError> {
        self.inner.validate()?;
        Ok(self.inner)
    }
}
