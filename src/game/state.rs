//! The board and its in-place transitions.
//!
//! Every mutating method is atomic: it either applies completely or
//! returns an error with the state untouched.

use super::card::{Card, CardTemplate};
use super::config::{GameConfig, MAX_FLIPPED};
use super::error::{GameError, InvalidBoard};
use super::shuffle::build_board;
use super::status::GameStatus;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Complete state of one memory game.
///
/// Deserializing checks the board invariants and rejects a state that
/// breaks any of them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawGameState")]
pub struct GameState {
    pub(crate) cards: Vec<Card>,
    pub(crate) flipped_card_indexes: Vec<usize>,
    pub(crate) matched_card_indexes: BTreeSet<u32>,
    pub(crate) is_started_game: bool,
    pub(crate) chrono_timer: i64,
    pub(crate) game_status: GameStatus,
}

/// Wire form of `GameState`, accepted only once its invariants hold.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawGameState {
    cards: Vec<Card>,
    flipped_card_indexes: Vec<usize>,
    matched_card_indexes: BTreeSet<u32>,
    is_started_game: bool,
    chrono_timer: i64,
    game_status: GameStatus,
}

impl TryFrom<RawGameState> for GameState {
    type Error = InvalidBoard;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let state = Self {
            cards: raw.cards,
            flipped_card_indexes: raw.flipped_card_indexes,
            matched_card_indexes: raw.matched_card_indexes,
            is_started_game: raw.is_started_game,
            chrono_timer: raw.chrono_timer,
            game_status: raw.game_status,
        };
        let violations = state.invariant_violations();
        if violations.is_empty() {
            Ok(state)
        } else {
            Err(InvalidBoard { violations })
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

impl GameState {
    /// An empty board waiting for `set_cards`.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            cards: Vec::new(),
            flipped_card_indexes: Vec::new(),
            matched_card_indexes: BTreeSet::new(),
            is_started_game: false,
            chrono_timer: config.initial_chrono_timer,
            game_status: GameStatus::NotStarted,
        }
    }

    /// Cards in board order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Board positions currently face up and unresolved, in flip order.
    pub fn flipped_card_indexes(&self) -> &[usize] {
        &self.flipped_card_indexes
    }

    /// Ids of the pairs found so far.
    pub fn matched_card_indexes(&self) -> &BTreeSet<u32> {
        &self.matched_card_indexes
    }

    /// Whether the UI has started the round.
    pub fn is_started_game(&self) -> bool {
        self.is_started_game
    }

    /// Seconds left on the countdown; negative once overrun.
    pub fn chrono_timer(&self) -> i64 {
        self.chrono_timer
    }

    /// Current coarse status.
    pub fn game_status(&self) -> GameStatus {
        self.game_status
    }

    /// Number of pairs dealt on the board.
    pub fn pairs_total(&self) -> usize {
        self.cards.len() / 2
    }

    /// Pairs not yet matched.
    pub fn pairs_remaining(&self) -> usize {
        self.pairs_total()
            .saturating_sub(self.matched_card_indexes.len())
    }

    /// True once every pair on a non-empty board is matched.
    pub fn all_pairs_matched(&self) -> bool {
        !self.cards.is_empty() && self.pairs_remaining() == 0
    }

    /// Whether the countdown reached zero.
    pub fn is_timer_expired(&self) -> bool {
        self.chrono_timer <= 0
    }

    /// Turn the card at `index` face up.
    ///
    /// Does nothing when the card is already face up or two cards are
    /// already pending.
    pub fn flip_card(&mut self, index: usize) -> Result<(), GameError> {
        let len = self.cards.len();
        let card = self
            .cards
            .get_mut(index)
            .ok_or(GameError::InvalidIndex { index, len })?;

        if !card.is_flipped && self.flipped_card_indexes.len() < MAX_FLIPPED {
            card.is_flipped = true;
            self.flipped_card_indexes.push(index);
        }
        Ok(())
    }

    /// Turn every card face down and forget all flips and matches.
    ///
    /// Card order, timer and status are kept.
    pub fn reset_cards(&mut self) {
        self.cards.iter_mut().for_each(Card::reset);
        self.flipped_card_indexes.clear();
        self.matched_card_indexes.clear();
    }

    /// Deal a fresh shuffled board of pairs built from `half_deck`.
    ///
    /// Pending flips and matches refer to the old board, so both are cleared.
    pub fn set_cards<R: Rng + ?Sized>(&mut self, half_deck: &[CardTemplate], rng: &mut R) {
        self.cards = build_board(half_deck, rng);
        self.flipped_card_indexes.clear();
        self.matched_card_indexes.clear();
    }

    /// Turn pending cards that are not part of a match back face down and
    /// empty the pending list.
    pub fn flip_back_unmatched_cards(&mut self) {
        for index in self.flipped_card_indexes.drain(..) {
            if let Some(card) = self.cards.get_mut(index) {
                if !self.matched_card_indexes.contains(&card.id) {
                    card.is_flipped = false;
                }
            }
        }
    }

    /// Resolve the two pending cards.
    ///
    /// Equal ids become a match and stay face up. The pending list is
    /// emptied either way. Fails unless exactly two distinct cards are
    /// pending.
    pub fn matched_cards(&mut self) -> Result<(), GameError> {
        let (first, second) = match self.flipped_card_indexes[..] {
            [first, second] if first != second => (first, second),
            [_, _] => {
                return Err(GameError::InvalidTransition {
                    action: "matched_cards",
                    flipped: 1,
                })
            }
            _ => {
                return Err(GameError::InvalidTransition {
                    action: "matched_cards",
                    flipped: self.flipped_card_indexes.len(),
                })
            }
        };

        let len = self.cards.len();
        let first_id = self.card_id(first, len)?;
        let second_id = self.card_id(second, len)?;

        if first_id == second_id {
            self.matched_card_indexes.insert(first_id);
            self.cards[first].is_matched = true;
            self.cards[second].is_matched = true;
        }
        self.flipped_card_indexes.clear();
        Ok(())
    }

    /// Reveal the whole board. Pending flips are left as they are.
    pub fn flip_all_cards(&mut self) {
        for card in &mut self.cards {
            card.is_flipped = true;
        }
    }

    /// Mark the round as started or not.
    pub fn set_game_start(&mut self, started: bool) {
        self.is_started_game = started;
    }

    /// Set the countdown to any value, negative included.
    pub fn set_chrono_timer(&mut self, seconds: i64) {
        self.chrono_timer = seconds;
    }

    /// One tick of the countdown. Goes below zero freely.
    pub fn decrement_timer(&mut self) {
        self.chrono_timer = self.chrono_timer.saturating_sub(1);
    }

    /// Set the status; any status may follow any other.
    pub fn set_game_status(&mut self, status: GameStatus) {
        self.game_status = status;
    }

    fn card_id(&self, index: usize, len: usize) -> Result<u32, GameError> {
        self.cards
            .get(index)
            .map(|card| card.id)
            .ok_or(GameError::InvalidIndex { index, len })
    }
}
