//! Stage history of a single order.
//!
//! Histories are immutable values: recording a transition returns a new
//! history and leaves the original untouched.

use super::stage::BrewStage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A move from one brew stage to the next.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StageTransition {
    pub from: BrewStage,
    pub to: BrewStage,
    pub timestamp: DateTime<Utc>,
}

impl StageTransition {
    pub fn now(from: BrewStage, to: BrewStage) -> Self {
        Self {
            from,
            to,
            timestamp: Utc::now(),
        }
    }
}

/// Ordered record of the stages one order went through.
///
/// # Example
///
/// ```rust
/// use barista::core::{BrewHistory, BrewStage, StageTransition};
///
/// let history = BrewHistory::new()
///     .record(StageTransition::now(BrewStage::Idle, BrewStage::Checking))
///     .record(StageTransition::now(BrewStage::Checking, BrewStage::Failed));
///
/// assert_eq!(
///     history.path(),
///     vec![BrewStage::Idle, BrewStage::Checking, BrewStage::Failed]
/// );
/// assert_eq!(history.current(), BrewStage::Failed);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BrewHistory {
    transitions: Vec<StageTransition>,
}

impl BrewHistory {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: StageTransition) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Stages visited in order: the first `from`, then every `to`.
    pub fn path(&self) -> Vec<BrewStage> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(first.from);
        }
        path.extend(self.transitions.iter().map(|t| t.to));
        path
    }

    /// Latest stage, `Idle` if nothing has been recorded.
    pub fn current(&self) -> BrewStage {
        self.transitions
            .last()
            .map(|t| t.to)
            .unwrap_or(BrewStage::Idle)
    }

    pub fn visited(&self, stage: BrewStage) -> bool {
        self.path().contains(&stage)
    }

    /// Wall-clock time between the first and last transition.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn transitions(&self) -> &[StageTransition] {
        &self.transitions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_history_is_idle_and_empty() {
        let history = BrewHistory::new();
        assert!(history.transitions().is_empty());
        assert!(history.path().is_empty());
        assert!(history.duration().is_none());
        assert_eq!(history.current(), BrewStage::Idle);
    }

    #[test]
    fn record_leaves_original_untouched() {
        let history = BrewHistory::new();
        let next = history.record(StageTransition::now(BrewStage::Idle, BrewStage::Checking));

        assert_eq!(history.transitions().len(), 0);
        assert_eq!(next.transitions().len(), 1);
        assert_eq!(next.current(), BrewStage::Checking);
    }

    #[test]
    fn path_follows_recorded_stages() {
        let history = BrewHistory::new()
            .record(StageTransition::now(BrewStage::Idle, BrewStage::Checking))
            .record(StageTransition::now(BrewStage::Checking, BrewStage::Heating))
            .record(StageTransition::now(BrewStage::Heating, BrewStage::Grinding));

        assert_eq!(
            history.path(),
            vec![
                BrewStage::Idle,
                BrewStage::Checking,
                BrewStage::Heating,
                BrewStage::Grinding
            ]
        );
        assert!(history.visited(BrewStage::Heating));
        assert!(!history.visited(BrewStage::Steaming));
    }

    #[test]
    fn duration_spans_first_to_last() {
        let start = Utc::now();
        let history = BrewHistory::new()
            .record(StageTransition {
                from: BrewStage::Idle,
                to: BrewStage::Checking,
                timestamp: start,
            })
            .record(StageTransition {
                from: BrewStage::Checking,
                to: BrewStage::Ready,
                timestamp: start + chrono::Duration::milliseconds(250),
            });

        assert_eq!(history.duration(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn single_transition_has_zero_duration() {
        let history =
            BrewHistory::new().record(StageTransition::now(BrewStage::Idle, BrewStage::Checking));
        assert_eq!(history.duration(), Some(Duration::ZERO));
    }

    #[test]
    fn history_serializes_correctly() {
        let history =
            BrewHistory::new().record(StageTransition::now(BrewStage::Idle, BrewStage::Checking));

        let json = serde_json::to_string(&history).unwrap();
        let back: BrewHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(history, back);
    }
}
