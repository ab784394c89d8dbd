//! Automated players.
//!
//! Each of them only ever picks legal moves, and quits if there are none
//! (which [`Game::play()`] never asks for).

use std::convert::Infallible;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::search::legal_moves;
use crate::{Choice, Game, MoveSource};

/// Always plays the first legal move in canonical order, i.e. the
/// smallest selection with the lowest positions.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstLegalMove;

impl MoveSource for FirstLegalMove {
    type Error = Infallible;

    fn choose(&mut self, game: &Game) -> Result<Choice, Infallible> {
        Ok(game.find_legal_move().map_or(Choice::Quit, Choice::Discard))
    }
}

/// Plays the legal move that discards the most tiles. Ties go to the
/// earliest move in canonical order.
#[derive(Clone, Copy, Debug, Default)]
pub struct MostTiles;

impl MoveSource for MostTiles {
    type Error = Infallible;

    fn choose(&mut self, game: &Game) -> Result<Choice, Infallible> {
        let best = legal_moves(game.hand(), game.target())
            .reduce(|best, candidate| {
                if candidate.len() > best.len() {
                    candidate
                } else {
                    best
                }
            });
        Ok(best.map_or(Choice::Quit, Choice::Discard))
    }
}

/// Picks uniformly among all legal moves.
#[derive(Clone, Debug)]
pub struct RandomLegalMove {
    rng: StdRng,
}

impl RandomLegalMove {
    pub fn new(rng: StdRng) -> Self {
        Self { rng }
    }
}

impl MoveSource for RandomLegalMove {
    type Error = Infallible;

    fn choose(&mut self, game: &Game) -> Result<Choice, Infallible> {
        let moves: Vec<Vec<usize>> = legal_moves(game.hand(), game.target()).collect();
        Ok(moves
            .choose(&mut self.rng)
            .cloned()
            .map_or(Choice::Quit, Choice::Discard))
    }
}
