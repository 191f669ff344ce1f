use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::info;

/// Trait for types that keep track of finished games.
#[cfg_attr(test, mockall::automock)]
pub trait Ledger {
    /// Records the result of a decisive game.
    fn record(&mut self, winner: &str, loser: &str);
}

/// Wins and losses of a single player.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub struct Record {
    pub wins: u32,
    pub losses: u32,
}

/// An in-memory [`Ledger`].
#[derive(Debug, Default, Clone, Eq, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Tally(BTreeMap<String, Record>);

impl Tally {
    /// The [`Record`] of a player, if they ever finished a game.
    pub fn get(&self, player: &str) -> Option<Record> {
        self.0.get(player).copied()
    }

    /// An iterator over all players and their records, ordered by player.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Record)> + '_ {
        self.0.iter().map(|(p, r)| (p.as_str(), *r))
    }
}

impl Ledger for Tally {
    fn record(&mut self, winner: &str, loser: &str) {
        self.0.entry(winner.into()).or_default().wins += 1;
        self.0.entry(loser.into()).or_default().losses += 1;
        info!(winner, loser, "recorded game");
    }
}

impl<L: Ledger + ?Sized> Ledger for &mut L {
    fn record(&mut self, winner: &str, loser: &str) {
        (**self).record(winner, loser)
    }
}
