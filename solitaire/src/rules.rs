use serde::{Deserialize, Serialize};

/// Score a set of discarded tiles must add up to.
pub const TARGET: u32 = 12;

/// Maximum number of tiles in the hand.
pub const HAND_SIZE: usize = 7;

/// Fixed parameters of one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rules {
    pub target: u32,
    pub hand_size: usize,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            target: TARGET,
            hand_size: HAND_SIZE,
        }
    }
}
