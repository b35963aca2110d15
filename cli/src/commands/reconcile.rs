use anyhow::{Context, Result};
use factura_diff::{ReconcileReport, reconcile, serialize_report_pretty, write_records};
use std::fs::File;
use std::io::{self, Write};
use std::process::ExitCode;

use crate::OutputFormat;
use crate::commands::{build_config, read_table};
use crate::output::write_text_report;

#[allow(clippy::too_many_arguments)]
pub fn run(
    reference_path: &str,
    quiron_path: &str,
    real_path: &str,
    format: OutputFormat,
    out: Option<&str>,
    quiet: bool,
    no_suffix_strip: bool,
    suffix_pattern: Option<String>,
) -> Result<ExitCode> {
    let config = build_config(no_suffix_strip, suffix_pattern)?;
    let reference = read_table(reference_path, true)?;
    let quiron = read_table(quiron_path, true)?;
    // The Real export has no header row: (historia, codigo) from row one.
    let real = read_table(real_path, false)?;

    let report = reconcile(&reference, &quiron, &real, &config).context("Reconciliation failed")?;

    print_warnings_to_stderr(&report);

    if let Some(path) = out {
        let file = File::create(path).with_context(|| format!("Failed to create {}", path))?;
        write_records(file, &report.differences)
            .with_context(|| format!("Failed to write {}", path))?;
    }

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    match format {
        OutputFormat::Text => {
            write_text_report(&mut handle, &report, quiet)?;
        }
        OutputFormat::Json => {
            let json = serialize_report_pretty(&report).context("Failed to serialize report")?;
            writeln!(handle, "{}", json)?;
        }
        OutputFormat::Csv => {
            write_records(&mut handle, &report.differences)
                .context("Failed to write differences")?;
        }
    }

    if report.differences.is_empty() {
        Ok(ExitCode::from(0))
    } else {
        Ok(ExitCode::from(1))
    }
}

fn print_warnings_to_stderr(report: &ReconcileReport) {
    for warning in &report.warnings {
        eprintln!("Warning: {}", warning);
    }
}
