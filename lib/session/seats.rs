use crate::checkers::Color;
use serde::{Deserialize, Serialize};

/// The players seated at a game.
///
/// Player one plays red and player two plays black.
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(rename_all = "camelCase")]
pub struct Seats {
    pub player_one: Option<String>,
    pub player_two: Option<String>,
}

impl Seats {
    /// The player seated on the side of a [`Color`], if any.
    pub fn get(&self, c: Color) -> Option<&str> {
        match c {
            Color::Red => self.player_one.as_deref(),
            Color::Black => self.player_two.as_deref(),
        }
    }

    /// The [`Color`] a player is seated on, if any.
    pub fn find(&self, player: &str) -> Option<Color> {
        [Color::Red, Color::Black]
            .into_iter()
            .find(|&c| self.get(c) == Some(player))
    }

    /// Seats a player in the first free seat, unless they are already seated.
    ///
    /// Returns `None` if both seats are taken by other players.
    pub fn take(&mut self, player: &str) -> Option<Color> {
        if let Some(c) = self.find(player) {
            return Some(c);
        }

        match (&self.player_one, &self.player_two) {
            (None, _) => {
                self.player_one = Some(player.into());
                Some(Color::Red)
            }

            (_, None) => {
                self.player_two = Some(player.into());
                Some(Color::Black)
            }

            _ => None,
        }
    }

    /// Whether both seats are taken.
    pub fn is_full(&self) -> bool {
        self.player_one.is_some() && self.player_two.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[test]
    fn first_player_plays_red_and_second_plays_black() {
        let mut seats = Seats::default();
        assert_eq!(seats.take("alice"), Some(Color::Red));
        assert!(!seats.is_full());
        assert_eq!(seats.take("bob"), Some(Color::Black));
        assert!(seats.is_full());
        assert_eq!(seats.get(Color::Red), Some("alice"));
        assert_eq!(seats.get(Color::Black), Some("bob"));
    }

    #[test]
    fn third_player_cannot_be_seated() {
        let mut seats = Seats::default();
        seats.take("alice");
        seats.take("bob");
        assert_eq!(seats.take("carol"), None);
        assert_eq!(seats.find("carol"), None);
    }

    #[proptest]
    fn rejoining_keeps_the_same_seat(mut seats: Seats, #[strategy("[a-z]{1,8}")] player: String) {
        if let Some(c) = seats.take(&player) {
            let before = seats.clone();
            assert_eq!(seats.take(&player), Some(c));
            assert_eq!(seats, before);
        }
    }
}
