pub use deck::*;
pub use errors::*;
pub use game::*;
pub use move_source::*;
pub use rules::*;
pub use strategies::*;
pub use tile::*;

#[cfg(test)]
mod arbitrary;
mod deck;
mod errors;
mod game;
mod move_source;
mod rules;
pub mod search;
mod strategies;
mod tile;
