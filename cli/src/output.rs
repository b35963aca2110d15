use factura_diff::ReconcileReport;
use std::io::{self, Write};

/// Human-readable report: the three summary counts, then the differences,
/// then the unmapped-concept list.
pub fn write_text_report<W: Write>(
    writer: &mut W,
    report: &ReconcileReport,
    quiet: bool,
) -> io::Result<()> {
    writeln!(writer, "Unique records in Real: {}", report.summary.real_unique)?;
    writeln!(
        writer,
        "Unique records in Quiron (transformed): {}",
        report.summary.quiron_unique
    )?;
    writeln!(
        writer,
        "Differences (Real - Quiron): {}",
        report.summary.difference_count
    )?;

    if quiet {
        return Ok(());
    }

    if !report.differences.is_empty() {
        writeln!(writer)?;
        writeln!(writer, "historia,codigo")?;
        for record in &report.differences {
            writeln!(writer, "{},{}", record.historia, record.codigo)?;
        }
    }

    if !report.unmapped_concepts.is_empty() {
        writeln!(writer)?;
        writeln!(
            writer,
            "Unmapped concepts ({}):",
            report.unmapped_concepts.len()
        )?;
        for concept in &report.unmapped_concepts {
            writeln!(writer, "  {}", concept)?;
        }
    }

    Ok(())
}
