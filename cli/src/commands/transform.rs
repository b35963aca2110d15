use anyhow::{Context, Result};
use factura_diff::{transform_quiron_with_reference, write_records, write_unmapped};
use std::fs::File;
use std::io;
use std::process::ExitCode;

use crate::commands::{build_config, read_table};

pub fn run(
    reference_path: &str,
    quiron_path: &str,
    out: Option<&str>,
    unmapped_out: Option<&str>,
    no_suffix_strip: bool,
    suffix_pattern: Option<String>,
) -> Result<ExitCode> {
    let config = build_config(no_suffix_strip, suffix_pattern)?;
    let reference = read_table(reference_path, true)?;
    let quiron = read_table(quiron_path, true)?;

    let transform = transform_quiron_with_reference(&quiron, &reference, &config)
        .context("Transformation failed")?;

    for warning in &transform.warnings {
        eprintln!("Warning: {}", warning);
    }

    match out {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("Failed to create {}", path))?;
            write_records(file, &transform.records)
                .with_context(|| format!("Failed to write {}", path))?;
        }
        None => {
            let stdout = io::stdout();
            write_records(stdout.lock(), &transform.records)
                .context("Failed to write transformed records")?;
        }
    }

    if let Some(path) = unmapped_out {
        let file = File::create(path).with_context(|| format!("Failed to create {}", path))?;
        write_unmapped(file, &transform.unmapped)
            .with_context(|| format!("Failed to write {}", path))?;
    } else if !transform.unmapped.is_empty() {
        eprintln!("Warning: {} concept(s) could not be mapped:", transform.unmapped.len());
        for concept in &transform.unmapped {
            eprintln!("  {}", concept);
        }
    }

    Ok(ExitCode::from(0))
}
