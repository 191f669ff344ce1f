use anyhow::{Context, Error as Anyhow};
use clap::Parser;
use lib::checkers::Color;
use lib::session::GameConfig;
use tracing::{info, instrument};

/// Lists the moves available to one side.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Moves {
    /// The game to inspect, in RON notation.
    #[clap(default_value = "()")]
    config: GameConfig,

    /// The side to list moves for, defaults to the side to move.
    #[clap(short, long)]
    color: Option<Color>,

    /// Print the move table in RON notation.
    #[clap(long)]
    ron: bool,
}

impl Moves {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let color = self.color.unwrap_or(self.config.turn);
        let table = self.config.board.moves(color);

        info!(%color, pieces = table.iter().count(), "listing moves");

        if self.ron {
            println!("{}", ron::ser::to_string(&table).context("failed to print move table")?);
        } else {
            println!("{:#}\n\n{}", self.config.board, table);
        }

        Ok(())
    }
}
