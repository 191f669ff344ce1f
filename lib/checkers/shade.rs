use derive_more::Display;
use serde::{Deserialize, Serialize};

/// The shade of a tile on the checkers board.
///
/// Pieces only ever stand on dark tiles.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[derive(Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(rename_all = "lowercase")]
pub enum Shade {
    #[display(fmt = "light")]
    Light,
    #[display(fmt = "dark")]
    Dark,
}
