//! Caller-owned store around a `GameState`.
//!
//! The store is the imperative shell of the crate. It owns the RNG used to
//! deal boards, stamps status changes with the wall clock and tells
//! subscribed observers when the state changed. All mutation goes through
//! `dispatch`, which takes `&mut self`, so transitions are applied strictly
//! one after another.

mod observer;

pub use observer::{StoreObserver, SubscriptionId};

use crate::core::{StatusChange, StatusHistory};
use crate::game::{GameAction, GameConfig, GameError, GameState, GameStatus};
use chrono::Utc;
use log::{debug, error};
use observer::Subscription;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Owns one game and dispatches actions against it.
///
/// # Example
///
/// ```rust
/// use memory_pairs::game::{CardTemplate, GameAction, GameConfig, GameState, GameStatus};
/// use memory_pairs::store::GameStore;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let mut store = GameStore::with_seed(GameConfig::default(), 42);
///
/// let renders = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&renders);
/// store.subscribe(move |_: &GameState| counter.set(counter.get() + 1));
///
/// let deck = vec![CardTemplate::new("sun"), CardTemplate::new("moon")];
/// store.dispatch(GameAction::SetCards(deck)).unwrap();
/// store.dispatch(GameAction::SetGameStatus(GameStatus::Started)).unwrap();
///
/// assert_eq!(store.select(|state| state.cards().len()), 4);
/// assert_eq!(renders.get(), 2);
/// assert_eq!(store.status_history().changes().len(), 1);
/// ```
pub struct GameStore<R: Rng = ChaCha8Rng> {
    state: GameState,
    rng: R,
    history: StatusHistory<GameStatus>,
    subscriptions: Vec<Subscription>,
    next_subscription: u64,
}

impl GameStore<ChaCha8Rng> {
    /// A store whose boards are shuffled from OS entropy.
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, ChaCha8Rng::from_entropy())
    }

    /// A store that deals the same boards for the same seed.
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameStore<R> {
    /// A store dealing boards from the given RNG.
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        Self {
            state: GameState::new(&config),
            rng,
            history: StatusHistory::new(),
            subscriptions: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Apply `action` to the game.
    ///
    /// A rejected action changes nothing and notifies nobody.
    pub fn dispatch(&mut self, action: GameAction) -> Result<(), GameError> {
        let previous_status = self.state.game_status();
        let changed = self.state.apply(action, &mut self.rng)?;

        if previous_status != self.state.game_status() {
            debug!(
                "game status {} -> {}",
                previous_status,
                self.state.game_status()
            );
            self.history.record(StatusChange {
                from: previous_status,
                to: self.state.game_status(),
                at: Utc::now(),
                chrono_timer: self.state.chrono_timer(),
            });
        }

        for violation in self.state.invariant_violations() {
            error!("board invariant broken: {violation}");
        }

        if changed {
            self.notify();
        }
        Ok(())
    }

    /// Project any part of the current state.
    pub fn select<T, F>(&self, selector: F) -> T
    where
        F: FnOnce(&GameState) -> T,
    {
        selector(&self.state)
    }

    /// The current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Status changes recorded since creation or the last `clear_history`.
    pub fn status_history(&self) -> &StatusHistory<GameStatus> {
        &self.history
    }

    /// Forget recorded status changes, e.g. before a new round.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Register an observer called after every state-changing dispatch.
    pub fn subscribe<O>(&mut self, observer: O) -> SubscriptionId
    where
        O: StoreObserver + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscriptions.push(Subscription {
            id,
            observer: Box::new(observer),
        });
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|subscription| subscription.id != id);
        self.subscriptions.len() != before
    }

    /// Number of active subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.subscriptions.len()
    }

    fn notify(&self) {
        for subscription in &self.subscriptions {
            subscription.observer.on_change(&self.state);
        }
    }
}
