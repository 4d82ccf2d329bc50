mod app;
mod canvas;
mod command;
mod config;
mod consts;
mod game;
mod logging;
mod util;
mod widgets;
use crate::app::App;
use crate::config::Config;
use anyhow::Context;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use lexopt::{Arg, Parser, ValueExt};
use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::process::ExitCode;

/// What the command line asked the program to do
#[derive(Clone, Debug, Eq, PartialEq)]
enum Mode {
    Run {
        config: Option<PathBuf>,
        log_file: Option<PathBuf>,
    },
    Help,
    Version,
}

impl Mode {
    fn from_parser(mut parser: Parser) -> Result<Mode, lexopt::Error> {
        let mut config = None;
        let mut log_file = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    config = Some(parser.value()?.parse::<PathBuf>()?);
                }
                Arg::Long("log-file") => log_file = Some(parser.value()?.parse::<PathBuf>()?),
                Arg::Short('h') | Arg::Long("help") => return Ok(Mode::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Mode::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Mode::Run { config, log_file })
    }
}

const USAGE: &str = "\
Usage: gridsnake [<options>]

Options:
  -c, --config <path>   Read configuration from the given file
      --log-file <path> Append log messages to the given file
  -h, --help            Show this help and exit
  -V, --version         Show the program version and exit
";

fn main() -> ExitCode {
    match Mode::from_parser(Parser::from_env()) {
        Ok(Mode::Run { config, log_file }) => exit(run(config, log_file)),
        Ok(Mode::Help) => {
            print!("{USAGE}");
            ExitCode::SUCCESS
        }
        Ok(Mode::Version) => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("gridsnake: {e}");
            eprint!("{USAGE}");
            ExitCode::from(2)
        }
    }
}

fn run(config_path: Option<PathBuf>, log_file: Option<PathBuf>) -> anyhow::Result<()> {
    let config = match config_path {
        Some(path) => Config::load(&path, false)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => match Config::default_path() {
            Ok(path) => Config::load(&path, true).with_context(|| {
                format!("failed to load configuration from {}", path.display())
            })?,
            Err(_) => Config::default(),
        },
    };
    let settings = config
        .game_settings()
        .context("invalid game configuration")?;
    let log_file = log_file.or(config.files.log_file);
    logging::init(log_file.as_deref()).context("failed to set up logging")?;
    let terminal = ratatui::init();
    let r = crossterm::execute!(io::stdout(), EnableMouseCapture)
        .and_then(|()| App::new(settings).run(terminal));
    let _ = crossterm::execute!(io::stdout(), DisableMouseCapture);
    ratatui::restore();
    r.map_err(Into::into)
}

fn exit(r: anyhow::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e)
            if e.downcast_ref::<io::Error>()
                .is_some_and(|ioe| ioe.kind() == ErrorKind::BrokenPipe) =>
        {
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "Exiting with error");
            eprintln!("gridsnake: {e:?}");
            ExitCode::from(2)
        }
    }
}
