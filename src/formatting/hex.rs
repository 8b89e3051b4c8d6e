//! Byte-to-hex rendering with optional truncation.
//!
//! The limit is an `Option`: `None` renders everything, `Some(n)` shows at
//! most `n` bytes followed by the truncation marker. `Some(0)` is a real
//! limit (payload exists but nothing of it is shown), not an "unlimited"
//! alias.

use std::fmt::Write as _;

/// Rendered in place of an empty payload.
pub const EMPTY_SENTINEL: &str = "(empty)";

/// Appended when the limit cuts the payload short.
pub const TRUNCATION_MARKER: &str = "...";

// Unreachable with the loop below; indicates a rendering bug, not input.
const FORMAT_ERROR_SENTINEL: &str = "(hex format error)";

/// Renders `data` as space-separated uppercase hex pairs, truncated to
/// `limit` bytes when one is given. Pure and total for every input.
pub fn hex_dump(data: &[u8], limit: Option<usize>) -> String {
    if data.is_empty() {
        return EMPTY_SENTINEL.to_string();
    }
    if limit == Some(0) {
        return TRUNCATION_MARKER.to_string();
    }

    let visible = match limit {
        Some(n) if n < data.len() => n,
        _ => data.len(),
    };

    let mut out = String::with_capacity(visible * 3 + TRUNCATION_MARKER.len());
    for (i, byte) in data[..visible].iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{byte:02X}");
    }
    if visible < data.len() {
        out.push(' ');
        out.push_str(TRUNCATION_MARKER);
    }

    if out.is_empty() {
        return FORMAT_ERROR_SENTINEL.to_string();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_renders_sentinel_for_every_limit() {
        for limit in [None, Some(0), Some(1), Some(1024)] {
            assert_eq!(hex_dump(&[], limit), EMPTY_SENTINEL);
        }
    }

    #[test]
    fn zero_limit_on_non_empty_input_renders_marker_alone() {
        assert_eq!(hex_dump(&[0x01], Some(0)), TRUNCATION_MARKER);
        assert_eq!(hex_dump(&[0xDE, 0xAD], Some(0)), TRUNCATION_MARKER);
    }

    #[test]
    fn none_renders_everything_without_marker() {
        assert_eq!(hex_dump(&[0xDE, 0xAD, 0xBE, 0xEF], None), "DE AD BE EF");
        assert_eq!(hex_dump(&[0x00], None), "00");
    }

    #[test]
    fn truncation_keeps_prefix_and_appends_marker() {
        assert_eq!(hex_dump(&[0xDE, 0xAD, 0xBE, 0xEF], Some(2)), "DE AD ...");
        assert_eq!(hex_dump(&[0x01, 0x02], Some(1)), "01 ...");
    }

    #[test]
    fn limit_at_or_above_length_is_equivalent_to_unlimited() {
        let data = [0x0Au8, 0x0B, 0x0C];
        assert_eq!(hex_dump(&data, Some(3)), hex_dump(&data, None));
        assert_eq!(hex_dump(&data, Some(64)), hex_dump(&data, None));
    }

    #[test]
    fn bytes_are_zero_padded_uppercase() {
        assert_eq!(hex_dump(&[0x00, 0x0F, 0xA0], None), "00 0F A0");
    }
}
