mod board;
mod color;
mod direction;
mod r#move;
mod piece;
mod pos;
mod route;
mod shade;
mod snapshot;
mod table;
mod tile;

pub use board::*;
pub use color::*;
pub use direction::*;
pub use piece::*;
pub use pos::*;
pub use r#move::*;
pub use route::*;
pub use shade::*;
pub use snapshot::*;
pub use table::*;
pub use tile::*;
