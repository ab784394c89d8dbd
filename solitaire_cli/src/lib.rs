mod human;
mod input;
mod recording;
mod render;
mod session;
pub use human::*;
pub use input::*;
pub use recording::*;
pub use render::*;
pub use session::*;
