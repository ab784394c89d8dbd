use crate::{Game, IllegalMove, Outcome, TurnSummary};

/// What a move source wants to do on its turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Choice {
    /// Discard the tiles at these 0-based hand positions.
    Discard(Vec<usize>),
    /// Give up. The game is lost.
    Quit,
}

/// Supplies moves to [`Game::play()`].
///
/// This is the only point where a game waits on the outside world, so it is
/// also the only place errors can come from during play.
pub trait MoveSource {
    type Error;

    fn choose(&mut self, game: &Game) -> Result<Choice, Self::Error>;

    /// Called when the last choice was refused. The game is unchanged and
    /// [`choose()`](MoveSource::choose) will be called again.
    fn rejected(&mut self, _game: &Game, _err: &IllegalMove) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called after the last choice was played and the hand refilled.
    fn accepted(&mut self, _game: &Game, _summary: &TurnSummary) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called once when the game is over.
    fn finished(&mut self, _game: &Game, _outcome: Outcome) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl<S: MoveSource + ?Sized> MoveSource for &mut S {
    type Error = S::Error;

    fn choose(&mut self, game: &Game) -> Result<Choice, Self::Error> {
        (**self).choose(game)
    }

    fn rejected(&mut self, game: &Game, err: &IllegalMove) -> Result<(), Self::Error> {
        (**self).rejected(game, err)
    }

    fn accepted(&mut self, game: &Game, summary: &TurnSummary) -> Result<(), Self::Error> {
        (**self).accepted(game, summary)
    }

    fn finished(&mut self, game: &Game, outcome: Outcome) -> Result<(), Self::Error> {
        (**self).finished(game, outcome)
    }
}
