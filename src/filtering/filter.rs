//! Display filters over a record sequence.
//!
//! A `LogFilter` is a plain value owned by whichever viewer applies it; it
//! carries the direction gate plus the per-header and per-kind checked
//! states a selection UI would populate.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::capture::types::{Classification, ClassificationKind, Direction, PacketRecord};

/// Global direction gate, applied before any selection logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DirectionFilter {
    #[default]
    All,
    SentOnly,
    ReceivedOnly,
}

/// How the checked selections are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SelectionMode {
    /// Selections are ignored; everything passing the direction gate shows.
    #[default]
    ShowAll,
    /// Only records whose entry is present and checked show.
    IncludeOnly,
    /// Records whose entry is present and checked are hidden.
    Exclude,
}

/// Filter state for one viewer.
///
/// Normal records are keyed by `(direction, header_id)`; every other
/// classification is keyed by its [`ClassificationKind`].
#[derive(Debug, Clone, Default)]
pub struct LogFilter {
    pub direction: DirectionFilter,
    pub mode: SelectionMode,
    pub header_selection: HashMap<(Direction, u16), bool>,
    pub kind_selection: HashMap<ClassificationKind, bool>,
}

impl LogFilter {
    /// Whether `record` passes this filter.
    pub fn matches(&self, record: &PacketRecord) -> bool {
        match self.direction {
            DirectionFilter::SentOnly if record.direction() != Direction::Sent => return false,
            DirectionFilter::ReceivedOnly if record.direction() != Direction::Received => {
                return false
            }
            _ => {}
        }

        if self.mode == SelectionMode::ShowAll {
            return true;
        }

        // Found-and-checked state of the record's selection entry.
        let checked = match record.classification() {
            Classification::Normal { header_id } => self
                .header_selection
                .get(&(record.direction(), header_id))
                .copied(),
            other => self.kind_selection.get(&other.kind()).copied(),
        };

        match self.mode {
            SelectionMode::ShowAll => true,
            SelectionMode::IncludeOnly => checked == Some(true),
            SelectionMode::Exclude => checked != Some(true),
        }
    }

    /// Indices into `records` that pass the filter, in order. Indices stay
    /// valid against the snapshot they were computed from.
    pub fn filtered_indices(&self, records: &[PacketRecord]) -> Vec<usize> {
        records
            .iter()
            .enumerate()
            .filter(|(_, record)| self.matches(record))
            .map(|(i, _)| i)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::types::BufferState;

    fn sent(header_id: u16) -> PacketRecord {
        PacketRecord::new(
            Direction::Sent,
            vec![(header_id & 0xFF) as u8, (header_id >> 8) as u8],
            Classification::Normal { header_id },
            BufferState::Observed(0),
        )
    }

    fn received_empty() -> PacketRecord {
        PacketRecord::new(
            Direction::Received,
            Vec::new(),
            Classification::Empty,
            BufferState::Observed(0),
        )
    }

    #[test]
    fn default_filter_shows_everything() {
        let filter = LogFilter::default();
        assert!(filter.matches(&sent(0x0011)));
        assert!(filter.matches(&received_empty()));
    }

    #[test]
    fn direction_gate_applies_before_selections() {
        let filter = LogFilter {
            direction: DirectionFilter::SentOnly,
            ..Default::default()
        };
        assert!(filter.matches(&sent(0x0011)));
        assert!(!filter.matches(&received_empty()));
    }

    #[test]
    fn include_only_requires_a_checked_entry() {
        let mut filter = LogFilter {
            mode: SelectionMode::IncludeOnly,
            ..Default::default()
        };
        filter
            .header_selection
            .insert((Direction::Sent, 0x0011), true);
        filter
            .header_selection
            .insert((Direction::Sent, 0x0009), false);

        assert!(filter.matches(&sent(0x0011)));
        assert!(!filter.matches(&sent(0x0009)), "unchecked entry");
        assert!(!filter.matches(&sent(0x0004)), "absent entry");
        assert!(!filter.matches(&received_empty()), "kind not selected");
    }

    #[test]
    fn exclude_hides_checked_entries_only() {
        let mut filter = LogFilter {
            mode: SelectionMode::Exclude,
            ..Default::default()
        };
        filter.kind_selection.insert(ClassificationKind::Empty, true);

        assert!(!filter.matches(&received_empty()));
        assert!(filter.matches(&sent(0x0011)), "absent entries pass");
    }

    #[test]
    fn filtered_indices_preserve_order() {
        let records = vec![sent(0x0001), received_empty(), sent(0x0002)];
        let filter = LogFilter {
            direction: DirectionFilter::SentOnly,
            ..Default::default()
        };
        assert_eq!(filter.filtered_indices(&records), vec![0, 2]);
    }
}
