pub mod filter;

pub use filter::{DirectionFilter, LogFilter, SelectionMode};
