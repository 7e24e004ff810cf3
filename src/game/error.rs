//! Errors raised by game transitions and board checks.

use thiserror::Error;

/// A transition the core refused to apply. The state is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Card index {index} is out of bounds for a board of {len} cards")]
    InvalidIndex { index: usize, len: usize },

    #[error("Cannot apply '{action}' with {flipped} distinct flipped card(s); exactly 2 are required")]
    InvalidTransition {
        action: &'static str,
        flipped: usize,
    },
}

/// A broken board invariant, reported by `GameState::check_invariants`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("Board holds an odd number of cards ({len})")]
    OddBoard { len: usize },

    #[error("Card id {id} appears {count} time(s) instead of 2")]
    UnpairedId { id: u32, count: usize },

    #[error("{count} cards are pending, at most 2 are allowed")]
    TooManyFlipped { count: usize },

    #[error("Pending index {index} is listed more than once")]
    DuplicateFlipped { index: usize },

    #[error("Pending index {index} is out of bounds for a board of {len} cards")]
    FlippedOutOfBounds { index: usize, len: usize },

    #[error("Pending index {index} points at a face-down card")]
    FlippedFaceDown { index: usize },

    #[error("Matched id {id} has a card that is not marked matched")]
    MatchedNotMarked { id: u32 },
}

/// A deserialized board that breaks its invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Rejected game state with {} broken invariant(s)", .violations.len())]
pub struct InvalidBoard {
    pub violations: Vec<InvariantViolation>,
}

/// Configuration could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid game configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
