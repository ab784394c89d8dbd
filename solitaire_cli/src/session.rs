use rand::rngs::StdRng;
use solitaire::{Game, MoveSource, Outcome, Rules};
use tracing::info;

use crate::recording::{GameRecording, Recorder};
use crate::render::outcome_message;

/// Wins and losses over a series of games.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Score {
    pub wins: usize,
    pub losses: usize,
}

impl Score {
    pub fn games(&self) -> usize {
        self.wins + self.losses
    }

    pub fn win_percentage(&self) -> f32 {
        if self.games() == 0 {
            return 0.0;
        }
        self.wins as f32 / self.games() as f32 * 100.0
    }

    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Won => self.wins += 1,
            Outcome::Lost => self.losses += 1,
        }
    }
}

/// Plays `num_games` freshly shuffled games in a row with the same source.
///
/// Returns an error only when the source or the recorder fails.
pub fn play_games<S>(
    source: &mut S,
    num_games: usize,
    rules: Rules,
    rng: &mut StdRng,
    recorder: &mut Option<Recorder>,
) -> anyhow::Result<Score>
where
    S: MoveSource + ?Sized,
    anyhow::Error: From<S::Error>,
{
    let mut score = Score::default();
    for game_idx in 0..num_games {
        let mut game = Game::with_rules(rules, rng);
        let recording = GameRecording::start(&game);

        let outcome = game.play(source)?;
        info!(
            game_idx,
            turns = game.history().len(),
            "{}",
            outcome_message(&game, outcome)
        );
        score.record(outcome);

        if let Some(recorder) = recorder {
            let path = recorder.write_game_recording(&recording.finish(&game))?;
            info!(game_idx, path = %path.display(), "Recorded game");
        }
    }
    Ok(score)
}
