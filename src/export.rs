pub mod text_export;

pub use text_export::{export_to_file, write_log};
