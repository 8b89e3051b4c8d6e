pub mod capture;
pub use capture::*;

pub mod formatting;
pub use formatting::*;

pub mod filtering;
pub use filtering::*;

pub mod export;
pub use export::*;

pub mod error_handling;
