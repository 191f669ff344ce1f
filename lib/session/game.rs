use crate::checkers::{Board, Color, Move, MoveTable};
use crate::session::{GameConfig, GameError, Ledger, MoveRequest, MoveResponse, Seats};
use tracing::{info, instrument};

/// A game of checkers between two players.
#[derive(Debug, Clone)]
pub struct Game<L: Ledger> {
    config: GameConfig,
    board: Board,
    turn: Color,
    seats: Seats,
    winner: Option<Color>,
    history: Vec<Move>,
    ledger: L,
}

impl<L: Ledger> Game<L> {
    /// Sets up a new game that reports its result to a [`Ledger`].
    pub fn new(config: GameConfig, ledger: L) -> Self {
        Game {
            board: config.board.clone(),
            turn: config.turn,
            config,
            seats: Seats::default(),
            winner: None,
            history: Vec::new(),
            ledger,
        }
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// The players seated at this game.
    pub fn seats(&self) -> &Seats {
        &self.seats
    }

    /// The winning side, if the game is over.
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    /// The moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The [`Ledger`] this game reports to.
    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Seats a player and returns the [`Color`] they play.
    #[instrument(level = "debug", skip(self), ret, err)]
    pub fn join(&mut self, player: &str) -> Result<Color, GameError> {
        self.seats.take(player).ok_or(GameError::Full)
    }

    /// The moves available to the side to move.
    pub fn moves(&self) -> MoveTable {
        self.board.moves(self.turn)
    }

    /// Plays a move on behalf of the side to move and passes the turn.
    #[instrument(level = "debug", skip(self), err)]
    pub fn play(&mut self, req: MoveRequest) -> Result<MoveResponse, GameError> {
        if self.winner.is_some() {
            return Err(GameError::GameOver);
        } else if !self.seats.is_full() {
            return Err(GameError::NotStarted);
        } else if req.current_color != self.turn {
            return Err(GameError::OutOfTurn(req.current_color));
        }

        let m = self.board.play(req.source, req.dest, self.turn)?;
        self.history.push(m);

        if let Some(winner) = self.board.winner() {
            self.finish(winner);
        }

        self.turn = !self.turn;

        Ok(MoveResponse {
            board: self.board.clone().into(),
            turn: self.turn,
            moves: self.moves(),
            winner: self.winner.and_then(|c| self.seats.get(c)).map(String::from),
        })
    }

    /// Ends the game in favor of the opponent of a player.
    #[instrument(level = "debug", skip(self), err)]
    pub fn resign(&mut self, player: &str) -> Result<Color, GameError> {
        let loser = self
            .seats
            .find(player)
            .ok_or_else(|| GameError::NotSeated(player.into()))?;

        if self.winner.is_some() {
            return Err(GameError::GameOver);
        } else if !self.seats.is_full() {
            return Err(GameError::NotStarted);
        }

        self.finish(!loser);
        Ok(!loser)
    }

    /// Starts over from the configured board, keeping the players seated.
    #[instrument(level = "debug", skip(self))]
    pub fn restart(&mut self) {
        self.board = self.config.board.clone();
        self.turn = self.config.turn;
        self.winner = None;
        self.history.clear();
    }

    fn finish(&mut self, winner: Color) {
        self.winner = Some(winner);

        if let (Some(w), Some(l)) = (self.seats.get(winner), self.seats.get(!winner)) {
            info!(winner = w, loser = l, color = %winner, "game over");
            self.ledger.record(w, l);
        }
    }
}
