//! Fixed-layout log line composition.
//!
//! Layout, reproduced bit-for-bit for downstream tooling:
//!
//! ```text
//! HH:MM:SS.mmm [S|R] <name> Op:0x<HHHH> | Sz:<N> | <hex-or-sentinel>
//! ```

use crate::capture::types::PacketRecord;

use super::clock::format_clock;
use super::hex::hex_dump;

/// Composes the display line for live views, truncating the hex segment to
/// `max_hex_bytes`. Pure; never mutates or retains the record.
pub fn format_display_line(record: &PacketRecord, max_hex_bytes: Option<usize>) -> String {
    format!(
        "{} {} {} Op:0x{:04X} | Sz:{} | {}",
        format_clock(record.timestamp()),
        record.direction().tag(),
        record.resolved_name(),
        record.header_id(),
        record.original_size(),
        hex_dump(record.payload(), max_hex_bytes),
    )
}

/// Composes the full line for export or detail views: same layout, hex
/// segment always complete.
pub fn format_full_line(record: &PacketRecord) -> String {
    format_display_line(record, None)
}
