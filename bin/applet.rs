use anyhow::Error as Anyhow;
use clap::Subcommand;
use derive_more::From;

mod moves;
mod play;

#[derive(From, Subcommand)]
pub enum Applet {
    Moves(moves::Moves),
    Play(play::Play),
}

impl Default for Applet {
    fn default() -> Self {
        play::Play::default().into()
    }
}

impl Applet {
    pub fn execute(self) -> Result<(), Anyhow> {
        match self {
            Applet::Moves(a) => Ok(a.execute()?),
            Applet::Play(a) => Ok(a.execute()?),
        }
    }
}
