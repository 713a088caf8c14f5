//! Stages an order passes through while a drink is being made.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a single order in the brew sequence.
///
/// A served order walks `Idle → Checking → Heating → Grinding →
/// Extracting → [Steaming →] Ready`. Any failure moves it to `Failed`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum BrewStage {
    Idle,
    Checking,
    Heating,
    Grinding,
    Extracting,
    Steaming,
    Ready,
    Failed,
}

impl BrewStage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Checking => "Checking",
            Self::Heating => "Heating",
            Self::Grinding => "Grinding",
            Self::Extracting => "Extracting",
            Self::Steaming => "Steaming",
            Self::Ready => "Ready",
            Self::Failed => "Failed",
        }
    }

    /// No further stage follows a final one.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Ready | Self::Failed)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failed)
    }
}

impl fmt::Display for BrewStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
