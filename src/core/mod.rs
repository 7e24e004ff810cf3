//! Generic status vocabulary.
//!
//! - The `State` trait describing a status value
//! - `StatusHistory`, the timestamped record of status changes

mod history;
mod state;

pub use history::{StatusChange, StatusHistory};
pub use state::State;
