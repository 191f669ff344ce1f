use crate::io::Io;
use anyhow::{Context, Error as Anyhow};
use clap::Parser;
use derive_more::{Display, Error, From};
use lib::checkers::{ParsePosError, Pos};
use lib::session::{Game, GameConfig, MoveRequest, Tally};
use std::io::{stdin, stdout, Read, Write};
use std::str::FromStr;
use tracing::{instrument, warn};

/// Plays a game of checkers between two players over standard io.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Play {
    /// The game to play, in RON notation.
    #[clap(default_value = "()")]
    config: GameConfig,

    /// The name of player one, who plays red.
    #[clap(long, default_value = "red")]
    red: String,

    /// The name of player two, who plays black.
    #[clap(long, default_value = "black")]
    black: String,
}

impl Default for Play {
    fn default() -> Self {
        Play {
            config: GameConfig::default(),
            red: "red".into(),
            black: "black".into(),
        }
    }
}

impl Play {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let mut game = Game::new(self.config, Tally::default());
        game.join(&self.red).context("failed to seat player one")?;
        game.join(&self.black).context("failed to seat player two")?;

        Session::new(Io::new(stdout(), stdin()), game).run()
    }
}

/// A command typed in by the players.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Command {
    Board,
    Moves,
    Move(Pos, Pos),
    Resign,
    New,
    Tally,
    Quit,
}

/// The reason why parsing [`Command`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
enum ParseCommandError {
    #[display(fmt = "unknown command `{}`", _0)]
    #[from(ignore)]
    Unknown(#[error(not(source))] String),

    #[display(fmt = "expected `move <row,col> <row,col>`")]
    #[from(ignore)]
    MissingSquare,

    #[display(fmt = "{}", _0)]
    InvalidSquare(ParsePosError),
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();

        match tokens.next() {
            Some("board") => Ok(Command::Board),
            Some("moves") => Ok(Command::Moves),
            Some("resign") => Ok(Command::Resign),
            Some("new") => Ok(Command::New),
            Some("tally") => Ok(Command::Tally),
            Some("quit") => Ok(Command::Quit),
            Some("move") => {
                let whence = tokens.next().ok_or(ParseCommandError::MissingSquare)?;
                let whither = tokens.next().ok_or(ParseCommandError::MissingSquare)?;
                Ok(Command::Move(whence.parse()?, whither.parse()?))
            }

            _ => Err(ParseCommandError::Unknown(s.into())),
        }
    }
}

/// Drives a [`Game`] with commands read line by line.
struct Session<W: Write, R: Read> {
    io: Io<W, R>,
    game: Game<Tally>,
}

impl<W: Write, R: Read> Session<W, R> {
    fn new(io: Io<W, R>, game: Game<Tally>) -> Self {
        Session { io, game }
    }

    fn status(&mut self) -> Result<(), Anyhow> {
        self.io.send(format_args!("{:#}", self.game.board()))?;

        match self.game.winner() {
            Some(c) => self.io.send(format_args!("winner {}", c))?,
            None => self.io.send(format_args!("turn {}", self.game.turn()))?,
        }

        Ok(())
    }

    #[instrument(level = "debug", skip(self), err)]
    fn execute(&mut self, cmd: Command) -> Result<(), Anyhow> {
        match cmd {
            Command::Board => self.status()?,
            Command::Moves => self.io.send(self.game.moves())?,

            Command::Move(source, dest) => {
                let req = MoveRequest {
                    source,
                    dest,
                    current_color: self.game.turn(),
                };

                match self.game.play(req) {
                    Ok(_) => self.status()?,
                    Err(e) => self.io.send(format_args!("error: {}", e))?,
                }
            }

            Command::Resign => {
                let player = self.game.seats().get(self.game.turn()).map(String::from);
                let result = player.as_deref().map(|p| self.game.resign(p));

                match result {
                    Some(Ok(c)) => self.io.send(format_args!("winner {}", c))?,
                    Some(Err(e)) => self.io.send(format_args!("error: {}", e))?,
                    None => self.io.send("error: nobody is seated on this side")?,
                }
            }

            Command::New => {
                self.game.restart();
                self.status()?;
            }

            Command::Tally => {
                for (player, record) in self.game.ledger().iter() {
                    self.io.send(format_args!("{} {}-{}", player, record.wins, record.losses))?;
                }
            }

            Command::Quit => {}
        }

        Ok(())
    }

    /// Runs the session until `quit` is received or the input is exhausted.
    fn run(&mut self) -> Result<(), Anyhow> {
        self.status()?;

        loop {
            self.io.flush()?;

            let Some(line) = self.io.recv()? else {
                break Ok(());
            };

            match line.parse() {
                Ok(Command::Quit) => break Ok(()),
                Ok(cmd) => self.execute(cmd)?,
                Err(e) => {
                    warn!(%line, "ignoring invalid command");
                    self.io.send(format_args!("error: {}", e))?;
                }
            }
        }
    }
}
