//! Plain-text export of a whole log.
//!
//! Each record becomes one full (untruncated) line. Records are snapshotted
//! first so no I/O happens while the log's lock is held.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{error, info};

use crate::capture::record_log::PacketLog;
use crate::error_handling::types::ExportError;
use crate::formatting::line::format_full_line;

/// Writes every record as one newline-terminated full line. Returns the
/// number of lines written.
pub fn write_log<W: Write>(log: &PacketLog, out: &mut W) -> Result<usize, ExportError> {
    let records = log.snapshot();
    for record in &records {
        writeln!(out, "{}", format_full_line(record))?;
    }
    Ok(records.len())
}

/// Exports the log to `path`, overwriting any existing file.
pub fn export_to_file<P: AsRef<Path>>(log: &PacketLog, path: P) -> Result<usize, ExportError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| {
        error!("failed to create export file {}: {}", path.display(), e);
        ExportError::Io(e)
    })?;
    let mut out = BufWriter::new(file);
    let written = write_log(log, &mut out)?;
    out.flush()?;
    info!("exported {} records to {}", written, path.display());
    Ok(written)
}
