use crate::checkers::{Board, Color};
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Configuration for a [`Game`][`crate::session::Game`].
#[derive(Debug, Display, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[display(fmt = "{}", "ron::ser::to_string(self).unwrap()")]
#[serde(deny_unknown_fields, rename_all = "lowercase", default)]
pub struct GameConfig {
    /// The side that moves first.
    pub turn: Color,

    /// The starting board, written as a diagram.
    #[serde(with = "diagram")]
    pub board: Board,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            turn: Color::Black,
            board: Board::default(),
        }
    }
}

/// The reason why parsing [`GameConfig`] failed.
#[derive(Debug, Display, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse game configuration")]
pub struct ParseGameConfigError(ron::de::SpannedError);

impl FromStr for GameConfig {
    type Err = ParseGameConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ron::de::from_str(s)?)
    }
}

mod diagram {
    use crate::checkers::Board;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(board: &Board, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(board)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Board, D::Error> {
        String::deserialize(deserializer)?
            .parse()
            .map_err(D::Error::custom)
    }
}
