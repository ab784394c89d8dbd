//! Legal-move search over the subsets of a hand.
//!
//! Subsets are enumerated exhaustively in a fixed order: by increasing size,
//! then lexicographically by their ascending index tuple. For a hand of three
//! tiles that is `[0], [1], [2], [0, 1], [0, 2], [1, 2], [0, 1, 2]`.
//!
//! The empty subset is never a legal move, not even for a target of zero.

use itertools::Itertools;

use crate::Tile;

/// All non-empty subsets of `0..len`, in canonical order.
pub fn subsets(len: usize) -> impl Iterator<Item = Vec<usize>> {
    (1..=len).flat_map(move |size| (0..len).combinations(size))
}

/// Total score of the tiles at the given positions.
///
/// Callers check the indices against `hand` first.
pub(crate) fn selection_score(hand: &[Tile], indices: &[usize]) -> u32 {
    indices.iter().map(|&i| hand[i].score()).sum()
}

/// All legal moves, in canonical order.
pub fn legal_moves(hand: &[Tile], target: u32) -> impl Iterator<Item = Vec<usize>> + '_ {
    subsets(hand.len()).filter(move |indices| selection_score(hand, indices) == target)
}

/// The first legal move in canonical order.
pub fn find_legal_move(hand: &[Tile], target: u32) -> Option<Vec<usize>> {
    legal_moves(hand, target).next()
}

pub fn exists_legal_move(hand: &[Tile], target: u32) -> bool {
    find_legal_move(hand, target).is_some()
}
