use crate::checkers::{Color, IllegalMove};
use derive_more::{Display, Error, From};

/// The reason why a [`Game`][`crate::session::Game`] rejected a request.
#[derive(Debug, Display, Clone, Eq, PartialEq, Hash, Error, From)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum GameError {
    #[display(fmt = "{}", _0)]
    IllegalMove(IllegalMove),

    #[display(fmt = "it is not {}'s turn to move", _0)]
    #[from(ignore)]
    OutOfTurn(#[error(not(source))] Color),

    #[display(fmt = "the game is already over")]
    #[from(ignore)]
    GameOver,

    #[display(fmt = "waiting for both players to join")]
    #[from(ignore)]
    NotStarted,

    #[display(fmt = "both seats are already taken")]
    #[from(ignore)]
    Full,

    #[display(fmt = "player `{}` is not seated at this game", _0)]
    #[from(ignore)]
    NotSeated(#[error(not(source))] String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn illegal_move_error_is_forwarded(e: IllegalMove) {
        assert_eq!(GameError::from(e).to_string(), e.to_string());
    }
}
