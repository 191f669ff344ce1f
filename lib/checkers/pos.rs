use crate::checkers::{Direction, Shade};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A square on the checkers board, addressed by row and column.
///
/// Row 0 is the top of the board and column 0 its left edge. Coordinates are
/// signed, positions off the board are representable.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[derive(Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{},{}", row, col)]
pub struct Pos {
    #[cfg_attr(test, strategy(0i8..8))]
    pub row: i8,
    #[cfg_attr(test, strategy(0i8..8))]
    pub col: i8,
}

impl Pos {
    /// Constructs a [`Pos`] from a pair of coordinates.
    #[inline(always)]
    pub const fn new(row: i8, col: i8) -> Self {
        Pos { row, col }
    }

    /// Whether this position lies on the 8x8 board.
    #[inline(always)]
    pub const fn is_on_board(&self) -> bool {
        0 <= self.row && self.row < 8 && 0 <= self.col && self.col < 8
    }

    /// The shade of the tile at this position.
    #[inline(always)]
    pub const fn shade(&self) -> Shade {
        if (self.row + self.col) % 2 == 0 {
            Shade::Light
        } else {
            Shade::Dark
        }
    }

    /// The position `n` steps away in [`Direction`] `d`, if it is on the board.
    #[inline(always)]
    pub fn step(&self, d: Direction, n: i8) -> Option<Self> {
        let (dr, dc) = d.delta();
        let pos = Pos::new(self.row + dr * n, self.col + dc * n);
        pos.is_on_board().then_some(pos)
    }

    /// The square halfway between two positions a hop apart.
    #[inline(always)]
    pub const fn midpoint(&self, other: &Pos) -> Self {
        Pos::new((self.row + other.row) / 2, (self.col + other.col) / 2)
    }

    /// An iterator over every square of the board in row-major order.
    pub fn all() -> impl DoubleEndedIterator<Item = Pos> + ExactSizeIterator {
        (0..64).map(|i| Pos::new(i / 8, i % 8))
    }
}

/// The reason why parsing [`Pos`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse position, expected `row,col` with coordinates in `0..=7`")]
pub struct ParsePosError;

impl FromStr for Pos {
    type Err = ParsePosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s.split_once(',').ok_or(ParsePosError)?;
        let row = row.trim().parse().map_err(|_| ParsePosError)?;
        let col = col.trim().parse().map_err(|_| ParsePosError)?;

        match Pos::new(row, col) {
            pos if pos.is_on_board() => Ok(pos),
            _ => Err(ParsePosError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn generated_positions_are_on_the_board(p: Pos) {
        assert!(p.is_on_board());
    }

    #[proptest]
    fn positions_off_the_board_are_detected(
        #[filter(!(0..8).contains(&#r))] r: i8,
        #[strategy(0i8..8)] c: i8,
    ) {
        assert!(!Pos::new(r, c).is_on_board());
        assert!(!Pos::new(c, r).is_on_board());
    }

    #[proptest]
    fn stepping_back_returns_to_the_origin(p: Pos, d: Direction) {
        if let Some(q) = p.step(d, 1) {
            let (dr, dc) = d.delta();
            assert_eq!(Pos::new(q.row - dr, q.col - dc), p);
        }
    }

    #[proptest]
    fn stepping_keeps_the_shade(p: Pos, d: Direction) {
        if let Some(q) = p.step(d, 1) {
            assert_eq!(q.shade(), p.shade());
        }
    }

    #[proptest]
    fn midpoint_of_a_hop_is_the_adjacent_square(p: Pos, d: Direction) {
        if let Some(q) = p.step(d, 2) {
            assert_eq!(p.midpoint(&q), p.step(d, 1).unwrap());
        }
    }

    #[test]
    fn all_enumerates_every_square_once() {
        let squares: Vec<_> = Pos::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares.first(), Some(&Pos::new(0, 0)));
        assert_eq!(squares.last(), Some(&Pos::new(7, 7)));
        assert!(squares.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn tile_is_dark_iff_coordinates_sum_to_odd() {
        assert_eq!(Pos::new(0, 0).shade(), Shade::Light);
        assert_eq!(Pos::new(0, 1).shade(), Shade::Dark);
        assert_eq!(Pos::new(5, 2).shade(), Shade::Dark);
        assert_eq!(Pos::new(5, 1).shade(), Shade::Light);
    }

    #[proptest]
    fn parsing_printed_position_is_an_identity(p: Pos) {
        assert_eq!(p.to_string().parse(), Ok(p));
    }

    #[proptest]
    fn parsing_position_fails_off_the_board(#[strategy(8i8..)] r: i8, #[strategy(0i8..8)] c: i8) {
        assert_eq!(format!("{r},{c}").parse::<Pos>(), Err(ParsePosError));
    }

    #[test]
    fn position_serializes_as_row_and_col() {
        let p = Pos::new(3, 4);
        assert_eq!(ron::ser::to_string(&p).ok(), Some("(row:3,col:4)".into()));
    }
}
