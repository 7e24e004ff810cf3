//! Change notification for UI layers.

use crate::game::GameState;

/// Handle returned by `GameStore::subscribe`, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub(crate) u64);

/// Receives the new state after every dispatch that changed it.
pub trait StoreObserver {
    fn on_change(&self, state: &GameState);
}

impl<F> StoreObserver for F
where
    F: Fn(&GameState),
{
    fn on_change(&self, state: &GameState) {
        (self)(state)
    }
}

pub(crate) struct Subscription {
    pub(crate) id: SubscriptionId,
    pub(crate) observer: Box<dyn StoreObserver>,
}
