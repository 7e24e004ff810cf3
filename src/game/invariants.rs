//! Board consistency checks.
//!
//! Every check runs and every violation is reported, so a broken board is
//! described in full rather than one problem at a time.

use super::config::MAX_FLIPPED;
use super::error::InvariantViolation;
use super::state::GameState;
use std::collections::{BTreeMap, BTreeSet};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<InvariantViolation>>;

impl GameState {
    /// Verify the board invariants, accumulating all violations.
    ///
    /// # Example
    ///
    /// ```rust
    /// use memory_pairs::game::{CardTemplate, GameState};
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut state = GameState::default();
    /// state.set_cards(&[CardTemplate::new("a")], &mut ChaCha8Rng::seed_from_u64(0));
    /// assert!(state.check_invariants().is_success());
    /// ```
    pub fn check_invariants(&self) -> Validation<(), NonEmptyVec<InvariantViolation>> {
        let mut checks: Vec<Check> = Vec::new();
        checks.extend(self.check_pairs());
        checks.extend(self.check_flipped());
        checks.extend(self.check_matched());

        Validation::all_vec(checks).map(|_| ())
    }

    /// Every violation as a plain list; empty when the board is sound.
    pub fn invariant_violations(&self) -> Vec<InvariantViolation> {
        match self.check_invariants() {
            Validation::Success(()) => Vec::new(),
            Validation::Failure(errors) => errors.iter().cloned().collect(),
        }
    }

    fn check_pairs(&self) -> Vec<Check> {
        let mut checks = Vec::new();
        let len = self.cards.len();
        if !len.is_multiple_of(2) {
            checks.push(Validation::fail(InvariantViolation::OddBoard { len }));
        }

        let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
        for card in &self.cards {
            *counts.entry(card.id).or_default() += 1;
        }
        for (id, count) in counts {
            if count != 2 {
                checks.push(Validation::fail(InvariantViolation::UnpairedId { id, count }));
            }
        }
        checks
    }

    fn check_flipped(&self) -> Vec<Check> {
        let mut checks = Vec::new();
        let count = self.flipped_card_indexes.len();
        if count > MAX_FLIPPED {
            checks.push(Validation::fail(InvariantViolation::TooManyFlipped {
                count,
            }));
        }

        let len = self.cards.len();
        let mut seen = BTreeSet::new();
        for &index in &self.flipped_card_indexes {
            if !seen.insert(index) {
                checks.push(Validation::fail(InvariantViolation::DuplicateFlipped {
                    index,
                }));
            }
            match self.cards.get(index) {
                None => checks.push(Validation::fail(InvariantViolation::FlippedOutOfBounds {
                    index,
                    len,
                })),
                Some(card) if !card.is_flipped => checks.push(Validation::fail(
                    InvariantViolation::FlippedFaceDown { index },
                )),
                Some(_) => {}
            }
        }
        checks
    }

    fn check_matched(&self) -> Vec<Check> {
        self.matched_card_indexes
            .iter()
            .filter(|&&id| {
                self.cards
                    .iter()
                    .any(|card| card.id == id && !card.is_matched)
            })
            .map(|&id| Validation::fail(InvariantViolation::MatchedNotMarked { id }))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Card, CardTemplate};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn card(id: u32) -> Card {
        Card::from_template(id, &CardTemplate::new("x"))
    }

    #[test]
    fn fresh_board_is_sound() {
        let mut state = GameState::default();
        state.set_cards(
            &[CardTemplate::new("a"), CardTemplate::new("b")],
            &mut ChaCha8Rng::seed_from_u64(0),
        );
        assert!(state.check_invariants().is_success());
        assert!(state.invariant_violations().is_empty());
    }

    #[test]
    fn empty_board_is_sound() {
        assert!(GameState::default().check_invariants().is_success());
    }

    #[test]
    fn accumulates_all_violations() {
        let state = GameState {
            cards: vec![card(1), card(1), card(2)],
            flipped_card_indexes: vec![0, 0, 7],
            matched_card_indexes: BTreeSet::from([1]),
            ..GameState::default()
        };

        let result = state.check_invariants();
        assert!(result.is_failure());

        let violations = state.invariant_violations();
        assert!(violations.contains(&InvariantViolation::OddBoard { len: 3 }));
        assert!(violations.contains(&InvariantViolation::UnpairedId { id: 2, count: 1 }));
        assert!(violations.contains(&InvariantViolation::TooManyFlipped { count: 3 }));
        assert!(violations.contains(&InvariantViolation::DuplicateFlipped { index: 0 }));
        assert!(violations.contains(&InvariantViolation::FlippedOutOfBounds { index: 7, len: 3 }));
        assert!(violations.contains(&InvariantViolation::FlippedFaceDown { index: 0 }));
        assert!(violations.contains(&InvariantViolation::MatchedNotMarked { id: 1 }));
    }

    #[test]
    fn flipped_matched_pair_is_sound() {
        let mut a = card(1);
        a.is_flipped = true;
        a.is_matched = true;
        let state = GameState {
            cards: vec![a.clone(), a, card(2), card(2)],
            matched_card_indexes: BTreeSet::from([1]),
            ..GameState::default()
        };
        assert!(state.check_invariants().is_success());
    }
}
