//! The memory game core.
//!
//! A `GameState` is changed only through `GameAction`s, either in place with
//! `GameState::apply` or functionally with `apply_transition`. Nothing here
//! reads the clock, logs to a sink of its own, or keeps global state; the
//! only source of randomness is the RNG the caller passes in.

mod card;
mod config;
mod error;
mod invariants;
mod shuffle;
mod state;
mod status;
mod transition;

pub use card::{Card, CardTemplate};
pub use config::{GameConfig, DEFAULT_CHRONO_TIMER, MAX_FLIPPED};
pub use error::{ConfigError, GameError, InvalidBoard, InvariantViolation};
pub use shuffle::{build_board, shuffle_cards};
pub use state::GameState;
pub use status::GameStatus;
pub use transition::{apply_transition, GameAction};
