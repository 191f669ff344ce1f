use crate::checkers::{Board, Pos, Shade, Tile};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// The serialized form of a [`Board`], as an 8x8 grid of [`Tile`]s.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Snapshot {
    pub board: Vec<Vec<Tile>>,
}

impl From<Board> for Snapshot {
    fn from(b: Board) -> Self {
        Snapshot {
            board: b.tiles().iter().map(|row| row.to_vec()).collect(),
        }
    }
}

/// The reason why a [`Snapshot`] does not represent a valid [`Board`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum MalformedSnapshot {
    #[display(fmt = "expected an 8x8 grid of tiles")]
    WrongShape,
    #[display(fmt = "tile at `{}` has the wrong shade", _0)]
    WrongShade(#[error(not(source))] Pos),
    #[display(fmt = "piece found on the light tile at `{}`", _0)]
    PieceOnLightTile(#[error(not(source))] Pos),
}

impl TryFrom<Snapshot> for Board {
    type Error = MalformedSnapshot;

    fn try_from(s: Snapshot) -> Result<Self, Self::Error> {
        let rows: Vec<[Tile; 8]> = s
            .board
            .into_iter()
            .map(<[Tile; 8]>::try_from)
            .collect::<Result<_, _>>()
            .map_err(|_| MalformedSnapshot::WrongShape)?;

        let tiles: [[Tile; 8]; 8] = rows
            .try_into()
            .map_err(|_| MalformedSnapshot::WrongShape)?;

        for p in Pos::all() {
            let tile = tiles[p.row as usize][p.col as usize];

            if tile.shade != p.shade() {
                return Err(MalformedSnapshot::WrongShade(p));
            } else if tile.shade == Shade::Light && tile.piece.is_some() {
                return Err(MalformedSnapshot::PieceOnLightTile(p));
            }
        }

        Ok(Board::from_tiles(tiles))
    }
}
