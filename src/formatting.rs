//! Pure, stateless rendering of records into text.
//!
//! Components:
//! - `clock`: wall-clock timestamp rendering.
//! - `hex`: byte-to-hex rendering with optional truncation.
//! - `line`: composition of the fixed-layout log lines.

pub mod clock;
pub mod hex;
pub mod line;

pub use clock::format_clock;
pub use hex::{hex_dump, EMPTY_SENTINEL, TRUNCATION_MARKER};
pub use line::{format_display_line, format_full_line};
