//! CSV re-export of pipeline outputs.

use std::io::Write;

use crate::diff::BillingRecord;

/// Writes (historia, codigo) records as two-column CSV with a header row.
pub fn write_records<W: Write>(writer: W, records: &[BillingRecord]) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["historia", "codigo"])?;
    for record in records {
        wtr.write_record([record.historia.as_str(), record.codigo.as_str()])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes the unmapped-concept report as a one-column CSV.
pub fn write_unmapped<W: Write>(writer: W, concepts: &[String]) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["concepto"])?;
    for concept in concepts {
        wtr.write_record([concept.as_str()])?;
    }
    wtr.flush()?;
    Ok(())
}
