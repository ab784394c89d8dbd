use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::search::{exists_legal_move, find_legal_move, selection_score};
use crate::{Choice, Deal, DealError, IllegalMove, MoveSource, Rules, Tile};

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Hand and pile are both empty.
    Won,
    /// No legal move was left, or the player quit.
    Lost,
}

impl Outcome {
    pub fn is_win(self) -> bool {
        self == Outcome::Won
    }
}

/// An accepted move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnSummary {
    /// Positions the tiles had in the hand, ascending.
    pub indices: Vec<usize>,
    /// The discarded tiles, in the same order as `indices`.
    pub discarded: Vec<Tile>,
    /// Number of tiles drawn from the pile afterwards.
    pub drawn: usize,
}

/// A single game: the hand, the draw pile and the rules they are played by.
///
/// The hand is topped up from the end of the pile whenever it has room, so
/// outside of a turn it always holds `min(hand_size, tiles left)` tiles.
#[derive(Clone, Debug)]
pub struct Game {
    hand: Vec<Tile>,
    pile: Vec<Tile>,
    rules: Rules,
    outcome: Option<Outcome>,
    history: Vec<TurnSummary>,
}

impl Game {
    /// A freshly shuffled game with the default rules.
    pub fn new(rng: &mut StdRng) -> Self {
        Self::with_rules(Rules::default(), rng)
    }

    pub fn with_rules(rules: Rules, rng: &mut StdRng) -> Self {
        let Deal { hand, pile } = Deal::new(rules.hand_size, rng);
        let mut game = Self {
            hand,
            pile,
            rules,
            outcome: None,
            history: Vec::new(),
        };
        game.settle();
        game
    }

    /// Sets up a specific position. The hand is refilled from the end of
    /// `pile` if it has room.
    pub fn from_parts(hand: Vec<Tile>, pile: Vec<Tile>, rules: Rules) -> Result<Self, DealError> {
        if hand.len() > rules.hand_size {
            return Err(DealError::HandTooLarge {
                len: hand.len(),
                hand_size: rules.hand_size,
            });
        }
        let mut game = Self {
            hand,
            pile,
            rules,
            outcome: None,
            history: Vec::new(),
        };
        game.refill();
        game.settle();
        Ok(game)
    }

    pub fn hand(&self) -> &[Tile] {
        &self.hand
    }

    /// The remaining tiles. The next one to be drawn is the last.
    pub fn pile(&self) -> &[Tile] {
        &self.pile
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    pub fn target(&self) -> u32 {
        self.rules.target
    }

    /// `None` while the game is still running.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Every accepted move so far, oldest first.
    pub fn history(&self) -> &[TurnSummary] {
        &self.history
    }

    /// Draws from the pile until the hand is full or the pile is empty.
    /// Returns the number of tiles drawn.
    pub fn refill(&mut self) -> usize {
        let mut drawn = 0;
        while self.hand.len() < self.rules.hand_size {
            match self.pile.pop() {
                Some(tile) => {
                    self.hand.push(tile);
                    drawn += 1;
                }
                None => break,
            }
        }
        drawn
    }

    pub fn exists_legal_move(&self) -> bool {
        exists_legal_move(&self.hand, self.rules.target)
    }

    /// The first legal move in canonical order, see [`crate::search`].
    pub fn find_legal_move(&self) -> Option<Vec<usize>> {
        find_legal_move(&self.hand, self.rules.target)
    }

    pub fn is_game_won(&self) -> bool {
        self.hand.is_empty() && self.pile.is_empty()
    }

    pub fn is_game_lost(&self) -> bool {
        match self.outcome {
            Some(outcome) => outcome == Outcome::Lost,
            None => !self.is_game_won() && !self.exists_legal_move(),
        }
    }

    /// Checks a selection without playing it. Returns its total score.
    pub fn check_selection(&self, indices: &[usize]) -> Result<u32, IllegalMove> {
        if self.outcome.is_some() {
            return Err(IllegalMove::GameOver);
        }
        if indices.is_empty() {
            return Err(IllegalMove::EmptySelection);
        }
        let mut selected = vec![false; self.hand.len()];
        for &index in indices {
            match selected.get_mut(index) {
                None => {
                    return Err(IllegalMove::IndexOutOfRange {
                        index,
                        hand_len: self.hand.len(),
                    })
                }
                Some(seen) if *seen => return Err(IllegalMove::DuplicateIndex { index }),
                Some(seen) => *seen = true,
            }
        }
        let total = selection_score(&self.hand, indices);
        if total != self.rules.target {
            return Err(IllegalMove::TargetMismatch {
                total,
                target: self.rules.target,
            });
        }
        Ok(total)
    }

    /// Discards the selected tiles and refills the hand.
    ///
    /// On error nothing changes.
    pub fn play_selection(&mut self, indices: &[usize]) -> Result<TurnSummary, IllegalMove> {
        self.check_selection(indices)?;

        let mut indices = indices.to_vec();
        indices.sort_unstable();
        // Highest first, so the remaining positions stay valid
        let mut discarded: Vec<Tile> = indices.iter().rev().map(|&i| self.hand.remove(i)).collect();
        discarded.reverse();
        let drawn = self.refill();

        let summary = TurnSummary {
            indices,
            discarded,
            drawn,
        };
        debug!(
            turn = self.history.len() + 1,
            discarded = ?summary.discarded,
            drawn,
            pile = self.pile.len(),
            "Turn played"
        );
        self.history.push(summary.clone());
        self.settle();
        Ok(summary)
    }

    /// Ends the game as lost, unless it is already over.
    pub fn resign(&mut self) -> Outcome {
        *self.outcome.get_or_insert(Outcome::Lost)
    }

    /// Plays turns until the game is over.
    ///
    /// Rejected choices are reported back to `source` and it is asked again.
    /// Errors only come from `source` itself.
    pub fn play<S: MoveSource + ?Sized>(&mut self, source: &mut S) -> Result<Outcome, S::Error> {
        loop {
            self.refill();
            if let Some(outcome) = self.settle() {
                debug!(?outcome, turns = self.history.len(), "Game over");
                source.finished(self, outcome)?;
                return Ok(outcome);
            }
            match source.choose(self)? {
                Choice::Quit => {
                    let outcome = self.resign();
                    debug!(turns = self.history.len(), "Player quit");
                    source.finished(self, outcome)?;
                    return Ok(outcome);
                }
                Choice::Discard(indices) => match self.play_selection(&indices) {
                    Ok(summary) => source.accepted(self, &summary)?,
                    Err(err) => {
                        trace!(?indices, %err, "Move rejected");
                        source.rejected(self, &err)?;
                    }
                },
            }
        }
    }

    /// Records the outcome once the game has reached a terminal state.
    fn settle(&mut self) -> Option<Outcome> {
        if self.outcome.is_none() {
            if self.is_game_won() {
                self.outcome = Some(Outcome::Won);
            } else if !self.exists_legal_move() {
                self.outcome = Some(Outcome::Lost);
            }
        }
        self.outcome
    }
}
