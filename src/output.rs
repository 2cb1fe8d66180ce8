//! Report output: CSV file or one JSON object per console line.

use crate::error::Result;
use crate::report::{ClassifiedRecord, REPORT_COLUMNS};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Write records to a CSV file with a header row.
///
/// The file is created (or truncated), flushed and closed before returning.
pub fn save_csv(path: &Path, records: &[ClassifiedRecord]) -> Result<()> {
    write_csv(File::create(path)?, records)?;

    debug!(path = %path.display(), rows = records.len(), "Saved results");
    Ok(())
}

/// Serialise records as CSV into any writer, header row first.
pub fn write_csv<W: Write>(writer: W, records: &[ClassifiedRecord]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(REPORT_COLUMNS)?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Print each record as a single-line JSON object.
pub fn print_records<W: Write>(out: &mut W, records: &[ClassifiedRecord]) -> Result<()> {
    for record in records {
        let line = serde_json::to_string(record)?;
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
