//! Common data types used across the capture subsystem.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Name a record carries until the resolver collaborator assigns a real one.
pub const UNRESOLVED_NAME: &str = "Unprocessed";

/// Direction of an observed unit of traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Bytes leaving the host process toward the server.
    Sent,
    /// Bytes arriving at the host process from the server.
    Received,
}

impl Direction {
    /// Fixed display tag used in log lines.
    pub fn tag(&self) -> &'static str {
        match self {
            Direction::Sent => "[S]",
            Direction::Received => "[R]",
        }
    }
}

/// Connection buffer state reported by the host connection context at
/// capture time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BufferState {
    /// No connection context was available.
    NoContext,
    /// The context existed but reading its state failed.
    ReadError,
    /// An actual observed state value (non-negative by contract of the
    /// capture collaborator).
    Observed(i32),
}

/// How the decoding collaborator categorized a record before handing it to
/// the log. Set once; mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    /// A regular unit with a 16-bit header id extracted from the payload.
    Normal { header_id: u16 },
    /// Identified as still-encrypted content; no header was extracted.
    EncryptedMarker,
    /// Decoded but the header id matched no known entry.
    UnknownHeader,
    /// The captured buffer was empty.
    Empty,
    /// Decoding failed before a header could be extracted.
    ProcessingError,
    /// The buffer was smaller than the 2-byte header.
    TooSmall,
}

/// Fieldless mirror of [`Classification`], usable as a map key when
/// selecting records by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassificationKind {
    Normal,
    EncryptedMarker,
    UnknownHeader,
    Empty,
    ProcessingError,
    TooSmall,
}

impl Classification {
    pub fn kind(&self) -> ClassificationKind {
        match self {
            Classification::Normal { .. } => ClassificationKind::Normal,
            Classification::EncryptedMarker => ClassificationKind::EncryptedMarker,
            Classification::UnknownHeader => ClassificationKind::UnknownHeader,
            Classification::Empty => ClassificationKind::Empty,
            Classification::ProcessingError => ClassificationKind::ProcessingError,
            Classification::TooSmall => ClassificationKind::TooSmall,
        }
    }
}

/// One captured unit of traffic with its metadata.
///
/// Records are built fully populated by the capture collaborator, optionally
/// named via [`with_resolved_name`](PacketRecord::with_resolved_name), and
/// are immutable from then on. Name resolution therefore happens before the
/// record is appended to a [`PacketLog`](crate::capture::PacketLog); a
/// published record is never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PacketRecord {
    timestamp: DateTime<Utc>,
    original_size: usize,
    payload: Vec<u8>,
    direction: Direction,
    classification: Classification,
    buffer_state: BufferState,
    resolved_name: String,
}

impl PacketRecord {
    /// Creates a record stamped with the current time. `original_size` is
    /// fixed to the payload length; the name starts as the
    /// [`UNRESOLVED_NAME`] sentinel.
    pub fn new(
        direction: Direction,
        payload: Vec<u8>,
        classification: Classification,
        buffer_state: BufferState,
    ) -> Self {
        let original_size = payload.len();
        Self {
            timestamp: Utc::now(),
            original_size,
            payload,
            direction,
            classification,
            buffer_state,
            resolved_name: UNRESOLVED_NAME.to_string(),
        }
    }

    /// Assigns the display name resolved by the name-resolution
    /// collaborator. An empty name is ignored and the sentinel kept, so the
    /// name is never empty.
    pub fn with_resolved_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !name.is_empty() {
            self.resolved_name = name;
        }
        self
    }

    pub fn timestamp(&self) -> &DateTime<Utc> {
        &self.timestamp
    }

    pub fn original_size(&self) -> usize {
        self.original_size
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn classification(&self) -> Classification {
        self.classification
    }

    pub fn buffer_state(&self) -> BufferState {
        self.buffer_state
    }

    pub fn resolved_name(&self) -> &str {
        &self.resolved_name
    }

    /// The header id carried by [`Classification::Normal`] records, `0` for
    /// every other classification. Display code prints this value verbatim
    /// without validating it.
    pub fn header_id(&self) -> u16 {
        match self.classification {
            Classification::Normal { header_id } => header_id,
            _ => 0,
        }
    }
}
