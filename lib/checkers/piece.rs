use crate::checkers::{Color, Direction};
use serde::{Deserialize, Serialize};

/// A checkers piece of a certain [`Color`], either a man or a king.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(rename_all = "camelCase")]
pub struct Piece {
    pub color: Color,
    pub is_king: bool,
}

impl Piece {
    /// A man of the given [`Color`].
    #[inline(always)]
    pub const fn man(color: Color) -> Self {
        Piece {
            color,
            is_king: false,
        }
    }

    /// A king of the given [`Color`].
    #[inline(always)]
    pub const fn king(color: Color) -> Self {
        Piece {
            color,
            is_king: true,
        }
    }

    /// This piece after landing on `row`.
    ///
    /// Men are crowned on their [crowning row](`Color::crowning_row`), kings stay kings.
    #[inline(always)]
    pub const fn landing_on(self, row: i8) -> Self {
        Piece {
            is_king: self.is_king || row == self.color.crowning_row(),
            ..self
        }
    }

    /// The directions this piece may travel along.
    #[inline(always)]
    pub const fn directions(&self) -> &'static [Direction] {
        if self.is_king {
            &Direction::ALL
        } else {
            self.color.forward()
        }
    }

    /// The character representing this piece in a board diagram.
    pub const fn symbol(&self) -> char {
        match (self.color, self.is_king) {
            (Color::Red, false) => 'r',
            (Color::Red, true) => 'R',
            (Color::Black, false) => 'b',
            (Color::Black, true) => 'B',
        }
    }

    /// The piece represented by a character in a board diagram, if any.
    pub const fn from_symbol(c: char) -> Option<Self> {
        match c {
            'r' => Some(Piece::man(Color::Red)),
            'R' => Some(Piece::king(Color::Red)),
            'b' => Some(Piece::man(Color::Black)),
            'B' => Some(Piece::king(Color::Black)),
            _ => None,
        }
    }
}
