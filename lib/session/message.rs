use crate::checkers::{Color, MoveTable, Pos, Snapshot};
use serde::{Deserialize, Serialize};

/// A request to move a piece, as sent by a player.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(rename_all = "camelCase")]
pub struct MoveRequest {
    pub source: Pos,
    pub dest: Pos,
    pub current_color: Color,
}

/// The state of a game after a move was played.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub struct MoveResponse {
    /// The board after the move.
    pub board: Snapshot,
    /// The side to move next.
    pub turn: Color,
    /// The moves available to the side to move next.
    pub moves: MoveTable,
    /// The id of the winning player, if the game is over.
    pub winner: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_request_uses_camel_case_fields() {
        let req: MoveRequest =
            ron::de::from_str("(source:(row:2,col:1),dest:(row:3,col:0),currentColor:red)")
                .unwrap();

        assert_eq!(
            req,
            MoveRequest {
                source: Pos::new(2, 1),
                dest: Pos::new(3, 0),
                current_color: Color::Red,
            }
        );
    }
}
