use crate::{Tile, HAND_SIZE, MAX_PIPS};

impl quickcheck::Arbitrary for Tile {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let left = u8::arbitrary(g) % (MAX_PIPS + 1);
        let right = u8::arbitrary(g) % (MAX_PIPS + 1);
        Tile::new_unchecked(left, right)
    }
}

/// Up to seven tiles, possibly repeating.
#[derive(Clone, Debug)]
pub struct SmallHand(pub Vec<Tile>);

impl quickcheck::Arbitrary for SmallHand {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let len = usize::arbitrary(g) % (HAND_SIZE + 1);
        SmallHand((0..len).map(|_| Tile::arbitrary(g)).collect())
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(SmallHand))
    }
}

/// An arbitrary seed for a fresh deal.
#[derive(Clone, Copy, Debug)]
pub struct Seed(pub u64);

impl quickcheck::Arbitrary for Seed {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        Seed(u64::arbitrary(g))
    }
}
