//! Timestamped record of status changes.
//!
//! The game core itself is deterministic and has no clock; the store stamps
//! each status change as it dispatches, so a UI can show how long a round
//! lasted or replay the sequence of statuses.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One status change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StatusChange<S: State> {
    /// Status before the change
    pub from: S,
    /// Status after the change
    pub to: S,
    /// Wall-clock time the change was applied
    pub at: DateTime<Utc>,
    /// Countdown value at the moment of the change
    pub chrono_timer: i64,
}

/// Ordered list of status changes.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use memory_pairs::core::{StatusChange, StatusHistory};
/// use memory_pairs::game::GameStatus;
///
/// let mut history = StatusHistory::new();
/// history.record(StatusChange {
///     from: GameStatus::NotStarted,
///     to: GameStatus::Started,
///     at: Utc::now(),
///     chrono_timer: 60,
/// });
///
/// assert_eq!(history.path(), vec![&GameStatus::NotStarted, &GameStatus::Started]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StatusHistory<S: State> {
    changes: Vec<StatusChange<S>>,
}

impl<S: State> Default for StatusHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StatusHistory<S> {
    pub fn new() -> Self {
        Self {
            changes: Vec::new(),
        }
    }

    /// Append a change.
    pub fn record(&mut self, change: StatusChange<S>) {
        self.changes.push(change);
    }

    /// Statuses traversed: the first `from`, then every `to`.
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.changes.len() + 1);
        if let Some(first) = self.changes.first() {
            path.push(&first.from);
        }
        path.extend(self.changes.iter().map(|change| &change.to));
        path
    }

    /// Wall time between the first and the last change.
    ///
    /// `None` when nothing was recorded or the clock went backwards.
    pub fn elapsed(&self) -> Option<Duration> {
        let first = self.changes.first()?;
        let last = self.changes.last()?;
        last.at.signed_duration_since(first.at).to_std().ok()
    }

    /// Most recent change, if any.
    pub fn last(&self) -> Option<&StatusChange<S>> {
        self.changes.last()
    }

    pub fn changes(&self) -> &[StatusChange<S>] {
        &self.changes
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn clear(&mut self) {
        self.changes.clear();
    }
}
