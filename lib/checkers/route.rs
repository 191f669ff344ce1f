use crate::checkers::{Board, Direction, Path, Piece, Pos};
use arrayvec::ArrayVec;

/// Squares of the pieces captured so far along one branch of a capture chain.
///
/// At most 32 pieces fit on the dark tiles, so no chain can capture more than 31.
pub(crate) type Captures = ArrayVec<Pos, 32>;

/// A single hop of a capture chain together with every hop that may follow it.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Jump {
    /// The square landed on.
    pub whither: Pos,
    /// The square of the captured piece.
    pub victim: Pos,
    /// The moving piece as it stands after landing, possibly crowned.
    pub piece: Piece,
    /// The hops available after this one, in generation order.
    pub next: Vec<Jump>,
}

impl Jump {
    /// Searches for a hop from `whence` along `d`, followed by all of its continuations.
    ///
    /// The chain started at `origin`, which counts as an empty square to land on.
    /// Each branch owns its copy of `captures`, so sibling forks never observe each other.
    pub(crate) fn search(
        board: &Board,
        origin: Pos,
        whence: Pos,
        piece: Piece,
        d: Direction,
        captures: &Captures,
    ) -> Option<Self> {
        let victim = whence.step(d, 1)?;
        let whither = whence.step(d, 2)?;

        match board[victim].piece {
            Some(p) if p.color != piece.color && !captures.contains(&victim) => {}
            _ => return None,
        }

        if board[whither].piece.is_some() && whither != origin {
            return None;
        }

        let piece = piece.landing_on(whither.row);
        let mut captures = captures.clone();
        captures.push(victim);

        let next = piece
            .directions()
            .iter()
            .filter_map(|&d| Jump::search(board, origin, whither, piece, d, &captures))
            .collect();

        Some(Jump {
            whither,
            victim,
            piece,
            next,
        })
    }

    /// The squares landed on across this hop and all of its continuations, in pre-order.
    pub fn landings(&self) -> Vec<Pos> {
        let mut landings = Vec::new();
        self.collect_landings(&mut landings);
        landings
    }

    fn collect_landings(&self, landings: &mut Vec<Pos>) {
        landings.push(self.whither);
        for j in &self.next {
            j.collect_landings(landings);
        }
    }

    /// Finds the longest chain starting with this hop that ends on `whither`.
    ///
    /// `best` is only replaced by strictly longer chains, so the first one found wins ties.
    pub(crate) fn deepest<'a>(
        &'a self,
        whither: Pos,
        chain: &mut Vec<&'a Jump>,
        best: &mut Vec<&'a Jump>,
    ) {
        chain.push(self);

        if self.whither == whither && chain.len() > best.len() {
            best.clone_from(chain);
        }

        for j in &self.next {
            j.deepest(whither, chain, best);
        }

        chain.pop();
    }
}

/// What a piece may do along one of its directions.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Route {
    /// A simple move onto the adjacent empty square.
    Slide(Pos),
    /// A capture chain, rooted at its first hop.
    Jump(Jump),
}

impl Route {
    /// The route available to `piece` standing on `whence` along `d`, if any.
    pub(crate) fn search(board: &Board, whence: Pos, piece: Piece, d: Direction) -> Option<Self> {
        let adjacent = whence.step(d, 1)?;

        if board[adjacent].piece.is_none() {
            Some(Route::Slide(adjacent))
        } else {
            Jump::search(board, whence, whence, piece, d, &Captures::new()).map(Route::Jump)
        }
    }

    /// This route flattened into the [`Path`] representation of a move table.
    pub fn path(&self) -> Path {
        match self {
            Route::Slide(whither) => vec![*whither].into(),
            Route::Jump(j) => j.landings().into(),
        }
    }

    /// Whether `whither` can be reached by following this route.
    pub fn reaches(&self, whither: Pos) -> bool {
        match self {
            Route::Slide(p) => *p == whither,
            Route::Jump(j) => j.landings().contains(&whither),
        }
    }
}
