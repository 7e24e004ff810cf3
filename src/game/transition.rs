//! Typed actions and the dispatch function that applies them.

use super::card::CardTemplate;
use super::error::GameError;
use super::state::GameState;
use super::status::GameStatus;
use log::{debug, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A request to change the game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum GameAction {
    FlipCard(usize),
    ResetCards,
    SetCards(Vec<CardTemplate>),
    FlipBackUnmatchedCards,
    MatchedCards,
    FlipAllCards,
    SetGameStart(bool),
    SetChronoTimer(i64),
    DecrementTimer,
    SetGameStatus(GameStatus),
}

impl GameAction {
    /// Short name for logs and errors.
    pub fn name(&self) -> &'static str {
        match self {
            Self::FlipCard(_) => "flip_card",
            Self::ResetCards => "reset_cards",
            Self::SetCards(_) => "set_cards",
            Self::FlipBackUnmatchedCards => "flip_back_unmatched_cards",
            Self::MatchedCards => "matched_cards",
            Self::FlipAllCards => "flip_all_cards",
            Self::SetGameStart(_) => "set_game_start",
            Self::SetChronoTimer(_) => "set_chrono_timer",
            Self::DecrementTimer => "decrement_timer",
            Self::SetGameStatus(_) => "set_game_status",
        }
    }
}

impl GameState {
    /// Apply one action in place and report whether anything changed.
    ///
    /// On error the state is unchanged.
    pub fn apply<R: Rng + ?Sized>(
        &mut self,
        action: GameAction,
        rng: &mut R,
    ) -> Result<bool, GameError> {
        let name = action.name();
        let result = match action {
            GameAction::FlipCard(index) => {
                let pending = self.flipped_card_indexes.len();
                self.flip_card(index)
                    .map(|()| self.flipped_card_indexes.len() != pending)
            }
            GameAction::ResetCards => {
                let changed = !self.flipped_card_indexes.is_empty()
                    || !self.matched_card_indexes.is_empty()
                    || self.cards.iter().any(|card| card.is_flipped || card.is_matched);
                self.reset_cards();
                Ok(changed)
            }
            GameAction::SetCards(half_deck) => {
                let changed = !half_deck.is_empty()
                    || !self.cards.is_empty()
                    || !self.flipped_card_indexes.is_empty()
                    || !self.matched_card_indexes.is_empty();
                self.set_cards(&half_deck, rng);
                Ok(changed)
            }
            GameAction::FlipBackUnmatchedCards => {
                let changed = !self.flipped_card_indexes.is_empty();
                self.flip_back_unmatched_cards();
                Ok(changed)
            }
            GameAction::MatchedCards => self.matched_cards().map(|()| true),
            GameAction::FlipAllCards => {
                let changed = self.cards.iter().any(|card| !card.is_flipped);
                self.flip_all_cards();
                Ok(changed)
            }
            GameAction::SetGameStart(started) => {
                let changed = self.is_started_game != started;
                self.set_game_start(started);
                Ok(changed)
            }
            GameAction::SetChronoTimer(seconds) => {
                let changed = self.chrono_timer != seconds;
                self.set_chrono_timer(seconds);
                Ok(changed)
            }
            GameAction::DecrementTimer => {
                let changed = self.chrono_timer != i64::MIN;
                self.decrement_timer();
                Ok(changed)
            }
            GameAction::SetGameStatus(status) => {
                let changed = self.game_status != status;
                self.set_game_status(status);
                Ok(changed)
            }
        };

        match &result {
            Ok(changed) => debug!(
                "applied {name} (changed: {changed}): {} flipped, {} matched, timer {}",
                self.flipped_card_indexes.len(),
                self.matched_card_indexes.len(),
                self.chrono_timer
            ),
            Err(err) => warn!("rejected {name}: {err}"),
        }
        result
    }
}

/// Compute the state that follows `state` under `action`.
///
/// `state` is never modified; randomness only comes from `rng`, so the same
/// seed always yields the same result.
///
/// # Example
///
/// ```rust
/// use memory_pairs::game::{apply_transition, CardTemplate, GameAction, GameState};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(1);
/// let deck = vec![CardTemplate::new("a"), CardTemplate::new("b")];
///
/// let state = GameState::default();
/// let state = apply_transition(&state, GameAction::SetCards(deck), &mut rng).unwrap();
/// let state = apply_transition(&state, GameAction::FlipCard(0), &mut rng).unwrap();
///
/// assert_eq!(state.flipped_card_indexes(), &[0]);
/// assert!(apply_transition(&state, GameAction::FlipCard(9), &mut rng).is_err());
/// ```
pub fn apply_transition<R: Rng + ?Sized>(
    state: &GameState,
    action: GameAction,
    rng: &mut R,
) -> Result<GameState, GameError> {
    let mut next = state.clone();
    next.apply(action, rng)?;
    Ok(next)
}
