use crate::checkers::Pos;
use derive_more::{Deref, From};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::ops::{Index, IndexMut};

/// The squares a piece may land on when moving along one of its directions.
///
/// A simple move lists its single destination. A capture lists every square
/// landed on across all of its forks, in depth-first pre-order.
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash, Deref, From)]
#[derive(Deserialize, Serialize)]
#[serde(transparent)]
pub struct Path(Vec<Pos>);

impl Display for Path {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, p) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }

            Display::fmt(p, f)?;
        }

        Ok(())
    }
}

/// The [`Path`]s available to every piece of the side to move, indexed by square.
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct MoveTable([[Vec<Path>; 8]; 8]);

impl MoveTable {
    /// Whether some path from `whence` reaches `whither`.
    pub fn contains(&self, whence: Pos, whither: Pos) -> bool {
        whence.is_on_board() && self[whence].iter().any(|p| p.contains(&whither))
    }

    /// An iterator over the squares with at least one path, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Pos, &[Path])> + '_ {
        Pos::all()
            .map(|p| (p, self[p].as_slice()))
            .filter(|(_, paths)| !paths.is_empty())
    }

    /// Whether no piece has anywhere to go.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

/// Retrieves the [`Path`]s available to the piece at a given [`Pos`].
impl Index<Pos> for MoveTable {
    type Output = Vec<Path>;

    fn index(&self, p: Pos) -> &Self::Output {
        &self.0[p.row as usize][p.col as usize]
    }
}

impl IndexMut<Pos> for MoveTable {
    fn index_mut(&mut self, p: Pos) -> &mut Self::Output {
        &mut self.0[p.row as usize][p.col as usize]
    }
}

impl Display for MoveTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, (whence, paths)) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }

            write!(f, "{whence}:")?;
            for p in paths {
                write!(f, " [{p}]")?;
            }
        }

        Ok(())
    }
}
