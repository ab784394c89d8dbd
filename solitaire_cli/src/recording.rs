use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use solitaire::{Game, Outcome, Rules, Tile, TurnSummary};

/// Writes one JSON file per game into a directory.
pub struct Recorder {
    num: usize,
    directory: PathBuf,
}

impl Recorder {
    pub fn new(directory: PathBuf) -> anyhow::Result<Self> {
        if !directory.is_dir() {
            anyhow::bail!("Directory '{}' does not exist", directory.display());
        }
        Ok(Self { num: 1, directory })
    }

    /// Returns the path of the written file.
    pub fn write_game_recording(&mut self, recording: &GameRecording) -> anyhow::Result<PathBuf> {
        let filepath = self.directory.join(format!("game_{:0>6}.json", self.num));
        let mut writer = BufWriter::new(File::create(&filepath)?);
        serde_json::to_writer_pretty(&mut writer, recording)?;
        writer.flush()?;
        self.num += 1;
        Ok(filepath)
    }
}

/// Everything needed to replay a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecording {
    pub rules: Rules,
    pub hand: Vec<Tile>,
    /// The next tile to be drawn is the last.
    pub pile: Vec<Tile>,
    pub turns: Vec<TurnSummary>,
    pub outcome: Option<Outcome>,
}

impl GameRecording {
    /// Captures the starting position.
    pub fn start(game: &Game) -> Self {
        Self {
            rules: game.rules(),
            hand: game.hand().to_vec(),
            pile: game.pile().to_vec(),
            turns: Vec::new(),
            outcome: None,
        }
    }

    #[must_use]
    pub fn finish(mut self, game: &Game) -> Self {
        self.turns = game.history().to_vec();
        self.outcome = game.outcome();
        self
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use solitaire::FirstLegalMove;

    use super::*;

    #[test]
    fn missing_directory_is_an_error() {
        let dir = std::env::temp_dir().join("solitaire_recording_does_not_exist");
        assert!(Recorder::new(dir).is_err());
    }

    #[test]
    fn recordings_replay_the_game() {
        let dir = std::env::temp_dir().join(format!("solitaire_recording_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let mut recorder = Recorder::new(dir.clone()).unwrap();

        let mut game = Game::new(&mut StdRng::seed_from_u64(11));
        let recording = GameRecording::start(&game);
        game.play(&mut FirstLegalMove).unwrap();
        let recording = recording.finish(&game);

        let first = recorder.write_game_recording(&recording).unwrap();
        let second = recorder.write_game_recording(&recording).unwrap();
        assert_eq!(first, dir.join("game_000001.json"));
        assert_eq!(second, dir.join("game_000002.json"));

        let read: GameRecording =
            serde_json::from_str(&std::fs::read_to_string(&first).unwrap()).unwrap();
        assert_eq!(read, recording);

        // Replaying the turns from the starting position ends the same way
        let mut replay = Game::from_parts(read.hand, read.pile, read.rules).unwrap();
        for turn in &read.turns {
            let summary = replay.play_selection(&turn.indices).unwrap();
            assert_eq!(&summary, turn);
        }
        assert_eq!(replay.outcome(), read.outcome);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
