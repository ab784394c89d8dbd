use solitaire::{Game, Outcome, Tile};

// Three rows of pips per value
const PIPS: [[&str; 3]; 7] = [
    ["     ", "     ", "     "],
    ["     ", "  *  ", "     "],
    ["*    ", "     ", "    *"],
    ["*    ", "  *  ", "    *"],
    ["*   *", "     ", "*   *"],
    ["*   *", "  *  ", "*   *"],
    ["* * *", "     ", "* * *"],
];

const HORIZONTAL_BAR: &str = "+-----|-----+";

fn tile_lines(tile: Tile) -> [String; 5] {
    let row = |r: usize| {
        format!(
            "|{}|{}|",
            PIPS[usize::from(tile.left())][r],
            PIPS[usize::from(tile.right())][r]
        )
    };
    [
        String::from(HORIZONTAL_BAR),
        row(0),
        row(1),
        row(2),
        String::from(HORIZONTAL_BAR),
    ]
}

/// Draws a tile with its 1-based position in front and its score behind.
pub fn render_tile(position: usize, tile: Tile) -> String {
    let label = format!(" ({}) ", position);
    let padding = " ".repeat(label.len());
    let mut result = String::new();
    for (idx, line) in tile_lines(tile).iter().enumerate() {
        if idx == 2 {
            result += &format!("{}{} -> {}\n", label, line, tile.score());
        } else {
            result += &format!("{}{}\n", padding, line);
        }
    }
    result
}

pub fn render_hand(hand: &[Tile]) -> String {
    let mut result = String::new();
    for (idx, &tile) in hand.iter().enumerate() {
        result += &render_tile(idx + 1, tile);
        result += "\n";
    }
    result
}

/// The closing line of a finished game.
pub fn outcome_message(game: &Game, outcome: Outcome) -> String {
    match outcome {
        Outcome::Won => String::from("You win"),
        Outcome::Lost if game.exists_legal_move() => format!(
            "You gave up with {} tiles left",
            game.hand().len() + game.pile().len()
        ),
        Outcome::Lost => String::from("No more legal move, you lose"),
    }
}

#[cfg(test)]
mod tests {
    use solitaire::{tile, Rules};

    use super::*;

    #[test]
    fn single_tile() {
        let expected = [
            "     +-----|-----+",
            "     |* * *|     |",
            " (1) |     |  *  | -> 7",
            "     |* * *|     |",
            "     +-----|-----+",
            "",
        ]
        .join("\n");
        assert_eq!(render_tile(1, tile!(6, 1)), expected);
    }

    #[test]
    fn wide_positions_are_padded() {
        let rendered = render_tile(10, tile!(0, 0));
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "      +-----|-----+");
        assert_eq!(lines[2], " (10) |     |     | -> 0");
    }

    #[test]
    fn hand_numbers_tiles_from_one() {
        let rendered = render_hand(&[tile!(2, 3), tile!(4, 5)]);
        assert!(rendered.contains(" (1) "));
        assert!(rendered.contains(" (2) "));
        assert!(rendered.contains("-> 5"));
        assert!(rendered.contains("-> 9"));
        assert_eq!(rendered.lines().count(), 12);
    }

    #[test]
    fn outcome_messages() {
        let won = Game::from_parts(Vec::new(), Vec::new(), Rules::default()).unwrap();
        assert_eq!(outcome_message(&won, Outcome::Won), "You win");

        let stuck = Game::from_parts(vec![tile!(0, 1)], Vec::new(), Rules::default()).unwrap();
        assert_eq!(
            outcome_message(&stuck, Outcome::Lost),
            "No more legal move, you lose"
        );

        let playable =
            Game::from_parts(vec![tile!(6, 6), tile!(0, 1)], Vec::new(), Rules::default()).unwrap();
        assert_eq!(
            outcome_message(&playable, Outcome::Lost),
            "You gave up with 2 tiles left"
        );
    }
}
