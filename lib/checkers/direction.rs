/// One of the four diagonals a checkers piece may travel along.
///
/// Rows grow downwards, so "up" decreases the row and "down" increases it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Direction {
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    /// Every direction, in the order moves are generated.
    pub const ALL: [Direction; 4] = [
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// The `(row, col)` offset of a single step in this direction.
    #[inline(always)]
    pub const fn delta(&self) -> (i8, i8) {
        match self {
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (-1, 1),
            Direction::DownLeft => (1, -1),
            Direction::DownRight => (1, 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn every_direction_is_a_unit_diagonal(d: Direction) {
        let (dr, dc) = d.delta();
        assert_eq!((dr.abs(), dc.abs()), (1, 1));
    }

    #[test]
    fn all_directions_are_distinct() {
        for (i, a) in Direction::ALL.iter().enumerate() {
            for b in &Direction::ALL[i + 1..] {
                assert_ne!(a.delta(), b.delta());
            }
        }
    }
}
