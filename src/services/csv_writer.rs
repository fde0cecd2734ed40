use std::{fs::File, io, path::Path};

use csv::WriterBuilder;

use crate::domain::record::{Record, CSV_HEADER};

/// Writes the header followed by one row per record. The header is written
/// even when there are no records.
pub fn write_records_to<W: io::Write>(writer: W, records: &[Record]) -> Result<(), csv::Error> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);

    wtr.write_record(CSV_HEADER)?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;

    Ok(())
}

pub fn write_records(path: impl AsRef<Path>, records: &[Record]) -> Result<(), csv::Error> {
    let file = File::create(path.as_ref())?;
    write_records_to(file, records)?;
    log::debug!(
        "Wrote {} records to {}",
        records.len(),
        path.as_ref().display()
    );
    Ok(())
}
