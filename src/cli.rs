use crate::config::{Config, ConfigError};
use lexopt::{Arg, Parser, ValueExt};
use std::path::PathBuf;
use thiserror::Error;

pub(crate) const USAGE: &str = "\
Usage: snakebite [<options>]

Play snake in the terminal, eating colored food to score, speed up, slow
down, grow, or shrink.

Options:
  --config <file>       Read configuration from the given file
  --grid-size <n>       Use an <n> by <n> playing grid (10 to 64)
  --seed <n>            Seed the random number generator with <n>
  --no-sound            Don't ring the terminal bell
  --log-file <file>     Write log messages to the given file
  -h, --help            Show this help and exit
  -V, --version         Show the program version and exit

Set the SNAKEBITE_LOG environment variable to control which messages are
logged (default: snakebite=info).
";

/// What the program was asked to do on the command line
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum CliAction {
    Run(Arguments),
    Help,
    Version,
}

impl CliAction {
    pub(crate) fn from_env() -> Result<CliAction, CliError> {
        CliAction::from_parser(Parser::from_env())
    }

    fn from_parser(mut parser: Parser) -> Result<CliAction, CliError> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(CliAction::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(CliAction::Version),
                Arg::Long("config") => args.config = Some(PathBuf::from(parser.value()?)),
                Arg::Long("grid-size") => args.grid_size = Some(parser.value()?.parse()?),
                Arg::Long("seed") => args.seed = Some(parser.value()?.parse()?),
                Arg::Long("no-sound") => args.no_sound = true,
                Arg::Long("log-file") => args.log_file = Some(PathBuf::from(parser.value()?)),
                _ => return Err(arg.unexpected().into()),
            }
        }
        Ok(CliAction::Run(args))
    }
}

/// Settings given on the command line for a game
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Arguments {
    pub(crate) config: Option<PathBuf>,
    pub(crate) grid_size: Option<u16>,
    pub(crate) seed: Option<u64>,
    pub(crate) no_sound: bool,
    pub(crate) log_file: Option<PathBuf>,
}

impl Arguments {
    /// Load the configuration file (the one given with `--config`, or else
    /// the default one, which need not exist) and apply the command-line
    /// overrides to it
    pub(crate) fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = match self.config {
            Some(ref path) => Config::load(path, false)?,
            None => Config::load(&Config::default_path()?, true)?,
        };
        if let Some(size) = self.grid_size {
            config.game.grid_size = size;
        }
        if self.no_sound {
            config.sound.enabled = false;
        }
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error(transparent)]
    Parse(#[from] lexopt::Error),
}
