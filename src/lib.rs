//! Memory Pairs: the state machine behind a memory-matching card game.
//!
//! The crate follows a "pure core, imperative shell" split. The core is a
//! plain `GameState` value changed only by typed `GameAction`s; the same
//! state, action and RNG seed always produce the same result. The shell is a
//! caller-owned `GameStore` that owns the RNG, records status changes with
//! timestamps and notifies observers so a UI can re-render.
//!
//! # Modules
//!
//! - [`game`]: cards, statuses, actions and the transition logic
//! - [`core`]: the `State` trait and the status history
//! - [`store`]: dispatch, selectors and subscriptions
//!
//! # Example
//!
//! ```rust
//! use memory_pairs::game::{CardTemplate, GameAction, GameConfig, GameStatus};
//! use memory_pairs::store::GameStore;
//!
//! let mut store = GameStore::with_seed(GameConfig::default(), 7);
//! let deck: Vec<CardTemplate> = ["cat", "dog", "fox", "owl"]
//!     .into_iter()
//!     .map(CardTemplate::new)
//!     .collect();
//!
//! store.dispatch(GameAction::SetCards(deck)).unwrap();
//! store.dispatch(GameAction::SetGameStart(true)).unwrap();
//! store.dispatch(GameAction::SetGameStatus(GameStatus::Started)).unwrap();
//!
//! // Find the twin of the first card and flip both.
//! let (first, twin) = store.select(|state| {
//!     let id = state.cards()[0].id;
//!     let twin = (1..state.cards().len())
//!         .find(|&i| state.cards()[i].id == id)
//!         .unwrap();
//!     (0, twin)
//! });
//! store.dispatch(GameAction::FlipCard(first)).unwrap();
//! store.dispatch(GameAction::FlipCard(twin)).unwrap();
//! store.dispatch(GameAction::MatchedCards).unwrap();
//!
//! assert_eq!(store.select(|state| state.pairs_remaining()), 3);
//! ```

pub mod core;
pub mod game;
pub mod store;

pub use crate::core::{State, StatusChange, StatusHistory};
pub use game::{
    apply_transition, Card, CardTemplate, GameAction, GameError, GameState, GameStatus,
};
pub use store::GameStore;
