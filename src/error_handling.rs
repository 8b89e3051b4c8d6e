pub mod types;

pub use types::ExportError;
