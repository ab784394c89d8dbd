use std::io::{self, BufRead, Write};

use solitaire::{Choice, Game, IllegalMove, MoveSource, Outcome};
use tracing::trace;

use crate::input::{parse_command, Command};
use crate::render::{outcome_message, render_hand};

/// A player at the console.
///
/// Shows the hand on `output` and reads one line per attempt from `input`.
/// Lines that cannot be parsed are answered with a message and the prompt is
/// repeated, without the game ever seeing them. Bytes that are not valid
/// UTF-8 are replaced, so they end up as an unparseable line as well.
pub struct HumanPlayer<R, W> {
    input: R,
    output: W,
    // A re-usable buffer for reading lines.
    buf: Vec<u8>,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            buf: Vec::new(),
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> MoveSource for HumanPlayer<R, W> {
    type Error = io::Error;

    fn choose(&mut self, game: &Game) -> io::Result<Choice> {
        write!(self.output, "{}", render_hand(game.hand()))?;
        loop {
            write!(
                self.output,
                "(pile size: {}) tiles to discard, or q to quit? ",
                game.pile().len()
            )?;
            self.output.flush()?;

            self.buf.clear();
            if self.input.read_until(b'\n', &mut self.buf)? == 0 {
                // End of input
                writeln!(self.output)?;
                return Ok(Choice::Quit);
            }
            let line = String::from_utf8_lossy(&self.buf);
            trace!(line = line.trim_end(), "Read input");
            match parse_command(&line, game.hand().len()) {
                Ok(Command::Quit) => return Ok(Choice::Quit),
                Ok(Command::Discard(indices)) => return Ok(Choice::Discard(indices)),
                Err(err) => writeln!(self.output, "{}", err)?,
            }
        }
    }

    fn rejected(&mut self, _game: &Game, err: &IllegalMove) -> io::Result<()> {
        writeln!(self.output, "{}\n", err)
    }

    fn finished(&mut self, game: &Game, outcome: Outcome) -> io::Result<()> {
        if outcome == Outcome::Lost && !game.exists_legal_move() {
            write!(self.output, "{}", render_hand(game.hand()))?;
        }
        writeln!(self.output, "{}", outcome_message(game, outcome))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use solitaire::{tile, Rules};

    use super::*;

    fn play(hand: Vec<solitaire::Tile>, input: &str) -> (Outcome, String, Game) {
        play_bytes(hand, input.as_bytes())
    }

    fn play_bytes(hand: Vec<solitaire::Tile>, input: &[u8]) -> (Outcome, String, Game) {
        let mut game = Game::from_parts(hand, Vec::new(), Rules::default()).unwrap();
        let mut player = HumanPlayer::new(Cursor::new(input), Vec::new());
        let outcome = game.play(&mut player).unwrap();
        let output = String::from_utf8(player.into_output()).unwrap();
        (outcome, output, game)
    }

    #[test]
    fn wins_with_typed_positions() {
        let (outcome, output, game) = play(vec![tile!(6, 6), tile!(6, 0), tile!(3, 3)], "2 3\n1\n");
        assert_eq!(outcome, Outcome::Won);
        assert!(game.is_game_won());
        assert!(output.contains("(pile size: 0)"));
        assert!(output.ends_with("You win\n"));
    }

    #[test]
    fn bad_lines_are_reported_and_asked_again() {
        let (outcome, output, game) = play(
            vec![tile!(6, 6), tile!(1, 1)],
            "abc\n0\n8\n2\n1 1\n1\nq\n",
        );
        assert_eq!(outcome, Outcome::Lost);
        assert!(output.contains("'abc' is not a position"));
        assert!(output.contains("Positions start at 1"));
        assert!(output.contains("Tile 8 does not exist, positions go from 1 to 2"));
        assert!(output.contains("Invalid total (2 but expected 12)"));
        assert!(output.contains("Tile 1 was selected more than once"));
        // Only "1" was played, after which (1, 1) alone is left: no legal move
        assert_eq!(game.history().len(), 1);
        assert!(output.ends_with("No more legal move, you lose\n"));
    }

    #[test]
    fn quitting_and_end_of_input() {
        let (outcome, output, _) = play(vec![tile!(6, 6)], "q\n");
        assert_eq!(outcome, Outcome::Lost);
        assert!(output.ends_with("You gave up with 1 tiles left\n"));

        let (outcome, _, game) = play(vec![tile!(6, 6)], "");
        assert_eq!(outcome, Outcome::Lost);
        assert!(game.history().is_empty());
    }

    #[test]
    fn invalid_utf8_is_reported_and_asked_again() {
        let (outcome, output, game) = play_bytes(vec![tile!(6, 6), tile!(1, 1)], b"\xff\xfe\n1\n");
        assert_eq!(outcome, Outcome::Lost);
        assert!(output.contains("is not a position"));
        assert_eq!(game.history().len(), 1);
        assert!(output.ends_with("No more legal move, you lose\n"));
    }
}
