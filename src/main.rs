mod app;
mod audio;
mod cli;
mod command;
mod config;
mod consts;
mod game;
mod logging;
mod util;
use crate::app::App;
use crate::cli::{Arguments, CliAction};
use crate::config::Config;
use anyhow::Context;
use crossterm::event::{DisableFocusChange, EnableFocusChange};
use crossterm::execute;
use rand::{rngs::StdRng, SeedableRng};
use std::io::{self, ErrorKind};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = match CliAction::from_env() {
        Ok(CliAction::Run(args)) => args,
        Ok(CliAction::Help) => {
            print!("{}", cli::USAGE);
            return ExitCode::SUCCESS;
        }
        Ok(CliAction::Version) => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("snakebite: {e}");
            eprintln!("Run `snakebite --help` for usage.");
            return ExitCode::from(2);
        }
    };
    let config = match setup(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("snakebite: {e:?}");
            return ExitCode::from(2);
        }
    };
    let rng = args
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let terminal = ratatui::init();
    if let Err(e) = execute!(io::stdout(), EnableFocusChange) {
        tracing::warn!(error = %e, "failed to enable focus change events");
    }
    let r = App::new(&config, rng).run(terminal);
    if let Err(e) = execute!(io::stdout(), DisableFocusChange) {
        tracing::warn!(error = %e, "failed to disable focus change events");
    }
    ratatui::restore();
    tracing::info!(ok = r.is_ok(), "exiting");
    io_exit(r)
}

/// Load the configuration and start logging
fn setup(args: &Arguments) -> anyhow::Result<Config> {
    let config = args
        .load_config()
        .context("failed to load configuration")?;
    if let Some(ref path) = args.log_file {
        logging::init(path)
            .with_context(|| format!("failed to set up logging to {}", path.display()))?;
    }
    tracing::debug!(?config, seed = ?args.seed, "configuration loaded");
    Ok(config)
}

fn io_exit(r: io::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}
