use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::InvalidTileValue;

/// The highest number of pips on one half of a tile.
pub const MAX_PIPS: u8 = 6;

/// A domino: an unordered pair of pip values, each in `0..=6`.
///
/// Two tiles are equal if they carry the same two values, in either order.
/// ```
/// # use solitaire::Tile;
/// let a = Tile::new(3, 5).unwrap();
/// let b = Tile::new(5, 3).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.score(), 8);
/// ```
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
pub struct Tile {
    left: u8,
    right: u8,
}

impl Tile {
    pub fn new(left: u8, right: u8) -> Result<Self, InvalidTileValue> {
        if left > MAX_PIPS || right > MAX_PIPS {
            return Err(InvalidTileValue { left, right });
        }
        Ok(Self { left, right })
    }

    /// Only for values already known to be in range.
    pub(crate) const fn new_unchecked(left: u8, right: u8) -> Self {
        Self { left, right }
    }

    pub fn left(&self) -> u8 {
        self.left
    }

    pub fn right(&self) -> u8 {
        self.right
    }

    /// Number of pips on the tile.
    pub fn score(&self) -> u32 {
        u32::from(self.left) + u32::from(self.right)
    }

    /// The pip values with the smaller one first.
    fn normalized(&self) -> (u8, u8) {
        (self.left.min(self.right), self.left.max(self.right))
    }
}

impl PartialEq for Tile {
    fn eq(&self, other: &Self) -> bool {
        self.normalized() == other.normalized()
    }
}

impl Eq for Tile {}

impl Hash for Tile {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized().hash(state);
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}|{}]", self.left, self.right)
    }
}

impl TryFrom<(u8, u8)> for Tile {
    type Error = InvalidTileValue;

    fn try_from((left, right): (u8, u8)) -> Result<Self, Self::Error> {
        Tile::new(left, right)
    }
}

impl From<Tile> for (u8, u8) {
    fn from(tile: Tile) -> (u8, u8) {
        (tile.left, tile.right)
    }
}

/// Shorthand for creating tiles from two pip values.
///
/// Panics if a value is out of range, so this is meant for tests and
/// hand-written positions.
/// ```
/// # use solitaire::{tile, Tile};
/// assert_eq!(tile!(6, 0), Tile::new(0, 6).unwrap());
/// ```
#[macro_export]
macro_rules! tile {
    ($left:expr, $right:expr) => {
        $crate::Tile::new($left, $right).expect("Invalid pip value given to tile! macro")
    };
}
