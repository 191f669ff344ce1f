use crate::checkers::{Color, Piece, Pos};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Formatter};

/// Represents an illegal move request on a given [`Board`][`crate::checkers::Board`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{} cannot move from `{}` to `{}`", color, whence, whither)]
pub struct IllegalMove {
    pub whence: Pos,
    pub whither: Pos,
    pub color: Color,
}

/// A move that has been played on the board.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub struct Move {
    /// Where the piece came from.
    pub whence: Pos,
    /// Where the piece ended up.
    pub whither: Pos,
    /// The moving piece as it stands after the move.
    pub piece: Piece,
    /// Every square landed on, ending on `whither`.
    pub landings: Vec<Pos>,
    /// The squares of the captured pieces, in the order they were jumped.
    pub captures: Vec<Pos>,
    /// Whether the piece was crowned by this move.
    pub promotion: bool,
}

impl Move {
    /// Whether this move captured at least one piece.
    pub fn is_capture(&self) -> bool {
        !self.captures.is_empty()
    }
}

/// Uses `-` for simple moves and `x` between the landings of a capture chain.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let sep = if self.is_capture() { 'x' } else { '-' };

        write!(f, "{}", self.whence)?;
        for p in &self.landings {
            write!(f, "{sep}{p}")?;
        }

        Ok(())
    }
}
