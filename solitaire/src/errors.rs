use crate::MAX_PIPS;

/// The error type for [`Tile::new()`](crate::Tile::new).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidTileValue {
    pub left: u8,
    pub right: u8,
}

impl std::error::Error for InvalidTileValue {}

impl std::fmt::Display for InvalidTileValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Tile ({}, {}) has a value outside of [0, {}]",
            self.left, self.right, MAX_PIPS
        )
    }
}

/// The error type for one turn.
///
/// Indices are 0-based positions in the hand. None of these errors change
/// the game state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IllegalMove {
    EmptySelection,
    IndexOutOfRange { index: usize, hand_len: usize },
    DuplicateIndex { index: usize },
    TargetMismatch { total: u32, target: u32 },
    GameOver,
}

impl std::error::Error for IllegalMove {}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::EmptySelection => write!(f, "Tried to discard zero tiles"),
            IllegalMove::IndexOutOfRange { index, hand_len } => write!(
                f,
                "Tile {} does not exist, positions go from 1 to {}",
                index + 1,
                hand_len
            ),
            IllegalMove::DuplicateIndex { index } => {
                write!(f, "Tile {} was selected more than once", index + 1)
            }
            IllegalMove::TargetMismatch { total, target } => {
                write!(f, "Invalid total ({} but expected {})", total, target)
            }
            IllegalMove::GameOver => write!(f, "The game is already over"),
        }
    }
}

/// The error type for [`Game::from_parts()`](crate::Game::from_parts).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DealError {
    HandTooLarge { len: usize, hand_size: usize },
}

impl std::error::Error for DealError {}

impl std::fmt::Display for DealError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DealError::HandTooLarge { len, hand_size } => write!(
                f,
                "A hand of {} tiles does not fit the hand size of {}",
                len, hand_size
            ),
        }
    }
}
