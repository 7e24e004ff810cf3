//! Coarse game status.

use crate::core::State;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a round stands.
///
/// The core does not restrict which status may follow which; the usual
/// path is `NotStarted -> Started -> Win | Lose`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    #[default]
    NotStarted,
    Started,
    Win,
    Lose,
}

impl State for GameStatus {
    fn name(&self) -> &str {
        match self {
            Self::NotStarted => "not_started",
            Self::Started => "started",
            Self::Win => "win",
            Self::Lose => "lose",
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::Win | Self::Lose)
    }

    fn is_error(&self) -> bool {
        matches!(self, Self::Lose)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
