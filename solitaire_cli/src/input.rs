/// A line typed by the player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// 0-based hand positions.
    Discard(Vec<usize>),
    Quit,
}

/// Why a line could not be read as a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputError {
    Empty,
    NotANumber(String),
    ZeroPosition,
}

impl std::error::Error for InputError {}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::Empty => write!(f, "Enter the positions of the tiles to discard"),
            InputError::NotANumber(token) => write!(f, "'{}' is not a position", token),
            InputError::ZeroPosition => write!(f, "Positions start at 1"),
        }
    }
}

/// Parses 1-based positions separated by spaces or commas, or `q`.
///
/// With at most nine tiles in the hand, a single run of digits is read one
/// digit per position, so `135` is the same as `1 3 5`.
///
/// Only the syntax is checked here. Whether the positions exist in the hand
/// is up to the game.
pub fn parse_command(line: &str, hand_len: usize) -> Result<Command, InputError> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("q") {
        return Ok(Command::Quit);
    }

    let mut tokens: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .collect();
    if tokens.is_empty() {
        return Err(InputError::Empty);
    }
    let token = tokens[0];
    if tokens.len() == 1
        && hand_len <= 9
        && token.len() > 1
        && token.bytes().all(|b| b.is_ascii_digit())
    {
        tokens = (0..token.len()).map(|i| &token[i..i + 1]).collect();
    }

    tokens
        .into_iter()
        .map(|token| match token.parse::<usize>() {
            Ok(0) => Err(InputError::ZeroPosition),
            Ok(position) => Ok(position - 1),
            Err(_) => Err(InputError::NotANumber(String::from(token))),
        })
        .collect::<Result<Vec<usize>, InputError>>()
        .map(Command::Discard)
}
