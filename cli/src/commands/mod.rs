pub mod reconcile;
pub mod transform;

use anyhow::{Context, Result};
use factura_diff::{ReconConfig, Table};
use std::fs::File;

pub fn read_table(path: &str, has_headers: bool) -> Result<Table> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path))?;
    Table::from_csv_reader(file, has_headers).with_context(|| format!("Failed to parse {}", path))
}

pub fn build_config(no_suffix_strip: bool, suffix_pattern: Option<String>) -> Result<ReconConfig> {
    let mut builder = ReconConfig::builder();
    if no_suffix_strip {
        builder = builder.strip_concept_suffix(false);
    }
    if let Some(pattern) = suffix_pattern {
        builder = builder.concept_suffix_pattern(pattern);
    }
    builder.build().context("Invalid configuration")
}
