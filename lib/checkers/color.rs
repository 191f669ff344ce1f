use crate::checkers::Direction;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::{ops::Not, str::FromStr};

/// The color of a checkers [`Piece`][`crate::checkers::Piece`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[derive(Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[display(fmt = "red")]
    Red,
    #[display(fmt = "black")]
    Black,
}

impl Color {
    /// The row on which men of this color are crowned.
    ///
    /// Red starts at the top of the board and is crowned at the bottom, black the other way around.
    #[inline(always)]
    pub const fn crowning_row(&self) -> i8 {
        match self {
            Color::Red => 7,
            Color::Black => 0,
        }
    }

    /// The directions in which men of this color may advance.
    #[inline(always)]
    pub const fn forward(&self) -> &'static [Direction] {
        use Direction::*;
        match self {
            Color::Red => &[DownLeft, DownRight],
            Color::Black => &[UpLeft, UpRight],
        }
    }
}

impl Not for Color {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

/// The reason why parsing [`Color`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse color, expected `red` or `black`")]
pub struct ParseColorError;

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "red" => Ok(Color::Red),
            "black" => Ok(Color::Black),
            _ => Err(ParseColorError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn color_implements_not_operator(c: Color) {
        assert_eq!(!!c, c);
        assert_ne!(!c, c);
    }

    #[proptest]
    fn opposing_colors_are_crowned_on_opposite_edges(c: Color) {
        assert_eq!(c.crowning_row() + (!c).crowning_row(), 7);
    }

    #[proptest]
    fn men_advance_towards_the_crowning_row(c: Color) {
        for d in c.forward() {
            let (dr, _) = d.delta();
            assert_eq!(dr.signum(), (c.crowning_row() - (!c).crowning_row()).signum());
        }
    }

    #[proptest]
    fn parsing_printed_color_is_an_identity(c: Color) {
        assert_eq!(c.to_string().parse(), Ok(c));
    }

    #[proptest]
    fn parsing_color_fails_for_unknown_names(#[filter(#s != "red" && #s != "black")] s: String) {
        assert_eq!(s.parse::<Color>(), Err(ParseColorError));
    }

    #[test]
    fn color_serializes_to_lowercase_name() {
        assert_eq!(ron::ser::to_string(&Color::Red).ok(), Some("red".into()));
        assert_eq!(ron::de::from_str::<Color>("black").ok(), Some(Color::Black));
    }
}
