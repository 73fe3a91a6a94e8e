pub mod color;
pub mod pgn;

pub use color::PlayerColor;
