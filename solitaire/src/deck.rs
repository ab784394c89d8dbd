use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::{Tile, MAX_PIPS};

/// Number of tiles in a double-six set.
pub const DECK_SIZE: usize = 28;

/// The 28 tiles of a double-six set, each pair exactly once.
///
/// Ordered by the larger value first, then the smaller one:
/// `[0|0], [1|0], [1|1], [2|0], ...`.
pub static DOMINO_SET: [Tile; DECK_SIZE] = domino_set();

const fn domino_set() -> [Tile; DECK_SIZE] {
    let mut set = [Tile::new_unchecked(0, 0); DECK_SIZE];
    let mut idx = 0;
    let mut left = 0;
    while left <= MAX_PIPS {
        let mut right = 0;
        while right <= left {
            set[idx] = Tile::new_unchecked(left, right);
            idx += 1;
            right += 1;
        }
        left += 1;
    }
    set
}

/// A shuffled deck split into a hand and a draw pile.
#[derive(Clone, Debug)]
pub struct Deal {
    pub hand: Vec<Tile>,
    /// Tiles are drawn from the end.
    pub pile: Vec<Tile>,
}

impl Deal {
    /// Shuffles a full set and deals `hand_size` tiles from the top of it.
    pub fn new(hand_size: usize, rng: &mut StdRng) -> Self {
        let mut pile = Vec::from(&DOMINO_SET);
        pile.shuffle(rng);
        let hand = pile.split_off(DECK_SIZE - hand_size.min(DECK_SIZE));
        Self { hand, pile }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;

    use super::*;
    use crate::HAND_SIZE;

    #[test]
    fn set_covers_every_pair_once() {
        let distinct: HashSet<Tile> = DOMINO_SET.iter().copied().collect();
        assert_eq!(distinct.len(), DECK_SIZE);
        for left in 0..=MAX_PIPS {
            for right in left..=MAX_PIPS {
                let tile = Tile::new(left, right).unwrap();
                assert_eq!(DOMINO_SET.iter().filter(|&&t| t == tile).count(), 1);
            }
        }
    }

    #[test]
    fn set_order() {
        assert_eq!(DOMINO_SET[0], Tile::new(0, 0).unwrap());
        assert_eq!(DOMINO_SET[1], Tile::new(1, 0).unwrap());
        assert_eq!(DOMINO_SET[27], Tile::new(6, 6).unwrap());
    }

    #[test]
    fn deal_partitions_the_set() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let Deal { hand, pile } = Deal::new(HAND_SIZE, &mut rng);
            assert_eq!(hand.len(), 7);
            assert_eq!(pile.len(), 21);

            let hand_set: HashSet<Tile> = hand.iter().copied().collect();
            let pile_set: HashSet<Tile> = pile.iter().copied().collect();
            assert!(hand_set.is_disjoint(&pile_set));
            let all: HashSet<Tile> = hand_set.union(&pile_set).copied().collect();
            assert_eq!(all, DOMINO_SET.iter().copied().collect());
        }
    }

    #[test]
    fn deal_is_reproducible() {
        let a = Deal::new(HAND_SIZE, &mut StdRng::seed_from_u64(42));
        let b = Deal::new(HAND_SIZE, &mut StdRng::seed_from_u64(42));
        assert_eq!(a.hand, b.hand);
        assert_eq!(a.pile, b.pile);
    }
}
