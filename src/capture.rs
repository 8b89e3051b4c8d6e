pub mod record_log;
pub mod types;

pub use record_log::PacketLog;
pub use types::{
    BufferState, Classification, ClassificationKind, Direction, PacketRecord, UNRESOLVED_NAME,
};
