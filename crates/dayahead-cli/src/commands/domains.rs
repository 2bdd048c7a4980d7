use std::io::{self, Write};

use dayahead_core::KNOWN_ZONES;

use crate::error::CliError;

pub fn run() -> Result<(), CliError> {
    let stdout = io::stdout();
    write_table(stdout.lock())
}

fn write_table<W: Write>(mut writer: W) -> Result<(), CliError> {
    for (alias, code) in KNOWN_ZONES {
        writeln!(writer, "{alias:<6} {code}")?;
    }
    writer.flush()?;
    Ok(())
}
