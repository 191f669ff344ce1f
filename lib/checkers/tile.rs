use crate::checkers::{Piece, Pos, Shade};
use serde::{Deserialize, Serialize};

/// A tile on the checkers board and the [`Piece`] standing on it, if any.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Tile {
    pub shade: Shade,
    pub piece: Option<Piece>,
}

impl Tile {
    /// An empty tile at the given [`Pos`].
    #[inline(always)]
    pub const fn empty(pos: Pos) -> Self {
        Tile {
            shade: pos.shade(),
            piece: None,
        }
    }
}
