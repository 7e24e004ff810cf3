//! Deck shuffling and board construction.

use super::card::{Card, CardTemplate};
use rand::seq::SliceRandom;
use rand::Rng;

/// Return a uniformly random permutation of `items`.
///
/// Uses an in-place Fisher–Yates shuffle on a copy; the input is untouched.
pub fn shuffle_cards<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

/// Number the half-deck `1..=N`, duplicate it into pairs and shuffle.
///
/// # Example
///
/// ```rust
/// use memory_pairs::game::{build_board, CardTemplate};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let half_deck = vec![CardTemplate::new("cat.png"), CardTemplate::new("dog.png")];
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
///
/// let board = build_board(&half_deck, &mut rng);
/// assert_eq!(board.len(), 4);
/// assert_eq!(board.iter().filter(|card| card.id == 2).count(), 2);
/// ```
pub fn build_board<R: Rng + ?Sized>(half_deck: &[CardTemplate], rng: &mut R) -> Vec<Card> {
    let numbered: Vec<Card> = (1u32..)
        .zip(half_deck)
        .map(|(id, template)| Card::from_template(id, template))
        .collect();

    let mut pairs = Vec::with_capacity(numbered.len() * 2);
    pairs.extend(numbered.iter().cloned());
    pairs.extend(numbered);

    shuffle_cards(&pairs, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn half_deck(n: usize) -> Vec<CardTemplate> {
        (0..n)
            .map(|i| CardTemplate::new(format!("art-{i}.png")))
            .collect()
    }

    #[test]
    fn shuffle_keeps_every_element() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let items: Vec<u32> = (0..20).collect();
        let mut shuffled = shuffle_cards(&items, &mut rng);
        shuffled.sort_unstable();
        assert_eq!(shuffled, items);
    }

    #[test]
    fn shuffle_of_empty_is_empty() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let items: Vec<u32> = Vec::new();
        assert!(shuffle_cards(&items, &mut rng).is_empty());
    }

    #[test]
    fn same_seed_same_board() {
        let deck = half_deck(8);
        let first = build_board(&deck, &mut ChaCha8Rng::seed_from_u64(99));
        let second = build_board(&deck, &mut ChaCha8Rng::seed_from_u64(99));
        assert_eq!(first, second);
    }

    #[test]
    fn board_pairs_ids_with_their_artwork() {
        let deck = half_deck(8);
        let board = build_board(&deck, &mut ChaCha8Rng::seed_from_u64(3));

        assert_eq!(board.len(), 16);
        for id in 1..=8u32 {
            let cards: Vec<&Card> = board.iter().filter(|card| card.id == id).collect();
            assert_eq!(cards.len(), 2);
            assert_eq!(cards[0].artwork, deck[(id - 1) as usize].artwork);
            assert_eq!(cards[0].artwork, cards[1].artwork);
        }
        assert!(board.iter().all(|card| !card.is_flipped && !card.is_matched));
    }

    #[test]
    fn every_position_sees_every_id() {
        // 2 pairs, 4 positions: each id should land in each position about
        // half the time.
        let deck = half_deck(2);
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        let trials = 20_000;
        let mut counts = [[0usize; 2]; 4];

        for _ in 0..trials {
            let board = build_board(&deck, &mut rng);
            for (position, card) in board.iter().enumerate() {
                counts[position][(card.id - 1) as usize] += 1;
            }
        }

        for row in counts {
            for count in row {
                let share = count as f64 / trials as f64;
                assert!((share - 0.5).abs() < 0.02, "share {share} is not near 0.5");
            }
        }
    }
}
