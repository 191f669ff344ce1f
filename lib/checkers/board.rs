use crate::checkers::{Color, IllegalMove, Jump, Move, MoveTable, Piece, Pos, Route, Shade, Tile};
use crate::checkers::{MalformedSnapshot, Snapshot};
use arrayvec::ArrayVec;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Formatter, Write};
use std::{ops::Index, str::FromStr};
use tracing::{debug, trace};

/// The 8x8 checkers board.
///
/// Rows are numbered from the top, where red starts, to the bottom, where black starts.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(try_from = "Snapshot", into = "Snapshot")]
pub struct Board([[Tile; 8]; 8]);

/// The standard starting layout.
///
/// Red occupies the dark tiles of rows 0 through 2, black the dark tiles of rows 5 through 7.
impl Default for Board {
    fn default() -> Self {
        let mut board = Board::empty();

        for p in Pos::all().filter(|p| p.shade() == Shade::Dark) {
            match p.row {
                0..=2 => board.set(p, Some(Piece::man(Color::Red))),
                5..=7 => board.set(p, Some(Piece::man(Color::Black))),
                _ => {}
            }
        }

        board
    }
}

impl Board {
    /// A board without any pieces.
    pub fn empty() -> Self {
        Board(std::array::from_fn(|row| {
            std::array::from_fn(|col| Tile::empty(Pos::new(row as i8, col as i8)))
        }))
    }

    /// Wraps the tiles as they are, without checking any invariants.
    pub(crate) fn from_tiles(tiles: [[Tile; 8]; 8]) -> Self {
        Board(tiles)
    }

    /// The tiles of this board, row by row.
    pub fn tiles(&self) -> &[[Tile; 8]; 8] {
        &self.0
    }

    /// The [`Piece`] at a [`Pos`], if any.
    ///
    /// Positions off the board hold no pieces.
    pub fn piece(&self, p: Pos) -> Option<Piece> {
        if p.is_on_board() {
            self[p].piece
        } else {
            None
        }
    }

    /// Puts a [`Piece`] on a [`Pos`], or clears it.
    ///
    /// # Panics
    ///
    /// Panics if the position is off the board.
    pub fn set(&mut self, p: Pos, piece: Option<Piece>) {
        self.0[p.row as usize][p.col as usize].piece = piece;
    }

    /// Removes every piece from the board.
    pub fn clear(&mut self) {
        *self = Board::empty();
    }

    /// An iterator over all pieces on the board, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Pos, Piece)> + '_ {
        Pos::all().filter_map(|p| Some((p, self[p].piece?)))
    }

    /// How many pieces of a [`Color`] are left on the board.
    pub fn count(&self, c: Color) -> usize {
        self.iter().filter(|(_, piece)| piece.color == c).count()
    }

    /// The winning side, if the other side has no pieces left.
    ///
    /// Pieces are always counted afresh. A board without any pieces has no winner.
    pub fn winner(&self) -> Option<Color> {
        match (self.count(Color::Red), self.count(Color::Black)) {
            (0, 0) => None,
            (_, 0) => Some(Color::Red),
            (0, _) => Some(Color::Black),
            _ => None,
        }
    }

    /// The [`Route`]s available to the piece of a [`Color`] at a [`Pos`].
    ///
    /// Empty unless a piece of that color stands there.
    pub fn routes(&self, whence: Pos, c: Color) -> ArrayVec<Route, 4> {
        match self.piece(whence) {
            Some(piece) if piece.color == c => piece
                .directions()
                .iter()
                .filter_map(|&d| Route::search(self, whence, piece, d))
                .collect(),

            _ => ArrayVec::new(),
        }
    }

    /// The move table of a [`Color`].
    ///
    /// Captures are listed alongside simple moves, they are never mandatory.
    pub fn moves(&self, c: Color) -> MoveTable {
        let mut table = MoveTable::default();

        for (whence, _) in self.iter().filter(|(_, piece)| piece.color == c) {
            table[whence] = self.routes(whence, c).iter().map(Route::path).collect();
        }

        trace!(color = %c, moves = %table, "generated moves");

        table
    }

    /// Moves the piece of a [`Color`] from `whence` to `whither`.
    ///
    /// When several capture chains end on `whither`, the one with the most hops is taken.
    /// The board is left untouched if the move is illegal.
    pub fn play(&mut self, whence: Pos, whither: Pos, c: Color) -> Result<Move, IllegalMove> {
        let illegal = IllegalMove {
            whence,
            whither,
            color: c,
        };

        if !whither.is_on_board() {
            return Err(illegal);
        }

        let routes = self.routes(whence, c);
        if !routes.iter().any(|r| r.reaches(whither)) {
            return Err(illegal);
        }

        let piece = self.piece(whence).ok_or(illegal)?;

        let mut chain = Vec::new();
        let mut best: Vec<&Jump> = Vec::new();
        for r in &routes {
            if let Route::Jump(j) = r {
                j.deepest(whither, &mut chain, &mut best);
            }
        }

        let m = match best.last() {
            Some(last) => Move {
                whence,
                whither,
                piece: last.piece,
                landings: best.iter().map(|j| j.whither).collect(),
                captures: best.iter().map(|j| j.victim).collect(),
                promotion: !piece.is_king && last.piece.is_king,
            },

            None => {
                let landed = piece.landing_on(whither.row);
                Move {
                    whence,
                    whither,
                    piece: landed,
                    landings: vec![whither],
                    captures: vec![],
                    promotion: !piece.is_king && landed.is_king,
                }
            }
        };

        self.set(whence, None);
        for &p in &m.captures {
            self.set(p, None);
        }

        self.set(whither, Some(m.piece));

        debug!(color = %c, played = %m, promotion = m.promotion, "played move");

        Ok(m)
    }
}

/// Retrieves the [`Tile`] at a given [`Pos`].
///
/// # Panics
///
/// Panics if the position is off the board.
impl Index<Pos> for Board {
    type Output = Tile;

    fn index(&self, p: Pos) -> &Self::Output {
        &self.0[p.row as usize][p.col as usize]
    }
}

/// Prints the board as a diagram, one row after the other.
///
/// Men are `r` and `b`, kings `R` and `B`, empty tiles `.`. Rows are separated
/// by `/`, or by line breaks when printed with the alternate flag.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let sep = if f.alternate() { '\n' } else { '/' };

        for (i, row) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_char(sep)?;
            }

            for tile in row {
                f.write_char(tile.piece.map_or('.', |p| p.symbol()))?;
            }
        }

        Ok(())
    }
}

/// The reason why parsing a board diagram failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum ParseBoardError {
    #[display(fmt = "expected 8 rows, found {}", _0)]
    WrongRowCount(#[error(not(source))] usize),
    #[display(fmt = "expected 8 tiles on row {}", _0)]
    WrongRowLength(#[error(not(source))] usize),
    #[display(fmt = "unexpected symbol `{}`", _0)]
    UnexpectedSymbol(#[error(not(source))] char),
    #[display(fmt = "{}", _0)]
    Malformed(MalformedSnapshot),
}

impl From<MalformedSnapshot> for ParseBoardError {
    fn from(e: MalformedSnapshot) -> Self {
        ParseBoardError::Malformed(e)
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.trim().split(['/', '\n']).map(str::trim).collect();

        if rows.len() != 8 {
            return Err(ParseBoardError::WrongRowCount(rows.len()));
        }

        let mut tiles = Vec::with_capacity(8);
        for (row, symbols) in rows.into_iter().enumerate() {
            if symbols.chars().count() != 8 {
                return Err(ParseBoardError::WrongRowLength(row));
            }

            let mut line = Vec::with_capacity(8);
            for (col, c) in symbols.chars().enumerate() {
                let piece = match c {
                    '.' => None,
                    c => Some(Piece::from_symbol(c).ok_or(ParseBoardError::UnexpectedSymbol(c))?),
                };

                let shade = Pos::new(row as i8, col as i8).shade();
                line.push(Tile { shade, piece });
            }

            tiles.push(line);
        }

        Ok(Snapshot { board: tiles }.try_into()?)
    }
}
