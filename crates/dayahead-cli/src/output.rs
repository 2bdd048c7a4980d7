//! JSON sink for price records.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use dayahead_core::PriceRecord;

use crate::error::CliError;

/// Serialize `records` as a JSON array of `{time, price}` objects.
pub fn write_records<W: Write>(
    mut writer: W,
    records: &[PriceRecord],
    pretty: bool,
) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(&mut writer, records)?;
    } else {
        serde_json::to_writer(&mut writer, records)?;
    }
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Write `records` to `path`, replacing any existing file.
pub fn write_file(path: &Path, records: &[PriceRecord], pretty: bool) -> Result<(), CliError> {
    let file = File::create(path)?;
    write_records(BufWriter::new(file), records, pretty)?;
    tracing::info!(path = %path.display(), records = records.len(), "wrote price file");
    Ok(())
}

/// Write `records` to stdout.
pub fn write_stdout(records: &[PriceRecord], pretty: bool) -> Result<(), CliError> {
    let stdout = io::stdout();
    write_records(stdout.lock(), records, pretty)
}
