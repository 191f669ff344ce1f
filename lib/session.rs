mod config;
mod error;
mod game;
mod ledger;
mod message;
mod seats;

pub use config::*;
pub use error::*;
pub use game::*;
pub use ledger::*;
pub use message::*;
pub use seats::*;
