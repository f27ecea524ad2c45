//! Journal of committed mode changes.
//!
//! The journal only ever sees transitions that completed: rejected requests
//! and rolled-back transitions leave no trace here. It lives in memory for
//! the lifetime of the controller.

use super::mode::Mode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// Record of a single committed mode change.
///
/// # Example
///
/// ```rust
/// use building_controller::core::{Mode, TransitionRecord};
///
/// let record = TransitionRecord::new(Mode::OutOfHours, Mode::Open);
/// assert_eq!(record.from, Mode::OutOfHours);
/// assert_eq!(record.to, Mode::Open);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// Correlates the record with the log lines of the same transition
    pub id: Uuid,
    pub from: Mode,
    pub to: Mode,
    pub timestamp: DateTime<Utc>,
}

impl TransitionRecord {
    /// Stamp a new record with a fresh id and the current time.
    pub fn new(from: Mode, to: Mode) -> Self {
        Self {
            id: Uuid::new_v4(),
            from,
            to,
            timestamp: Utc::now(),
        }
    }
}

/// Ordered, append-only list of committed transitions.
///
/// # Example
///
/// ```rust
/// use building_controller::core::{Journal, Mode, TransitionRecord};
///
/// let mut journal = Journal::new();
/// journal.record(TransitionRecord::new(Mode::OutOfHours, Mode::Open));
/// journal.record(TransitionRecord::new(Mode::Open, Mode::FireAlarm));
///
/// assert_eq!(
///     journal.path(),
///     vec![Mode::OutOfHours, Mode::Open, Mode::FireAlarm]
/// );
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Journal {
    records: Vec<TransitionRecord>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, record: TransitionRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[TransitionRecord] {
        &self.records
    }

    pub fn last(&self) -> Option<&TransitionRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Modes visited in order: the first source mode, then every
    /// destination.
    pub fn path(&self) -> Vec<Mode> {
        self.records
            .first()
            .map(|first| first.from)
            .into_iter()
            .chain(self.records.iter().map(|record| record.to))
            .collect()
    }

    /// Number of times the building entered an emergency mode.
    pub fn emergencies(&self) -> usize {
        self.records
            .iter()
            .filter(|record| record.to.is_emergency())
            .count()
    }

    /// Time between the first and the last committed transition.
    ///
    /// Returns `None` when nothing has been recorded.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.records.first()?, self.records.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }
}
