//! Command-line front end.
//!
//! Global options are parsed with clap. The command itself is looked up by
//! name in [`COMMANDS`]; `--debug` and `-h`/`--help` are honoured anywhere on
//! the line, including after the command.

mod console;
mod error;

use std::io::Write;
use std::path::PathBuf;

use chrono::{Local, NaiveDateTime};
use clap::Parser;
use tracing::{debug, error};

use crate::site::{DEFAULT_BASE_URL, Fetcher};
use crate::timetable::{Timetable, next_connection};

pub use console::Console;
pub use error::{CommandError, EXIT_FAILURE, EXIT_USAGE};

/// Command used when none is given.
const DEFAULT_COMMAND: &str = "help";

/// Raw command line.
#[derive(Debug, Parser)]
#[command(name = "rozklad", disable_help_flag = true)]
pub struct Args {
    /// Show diagnostic output
    #[arg(long)]
    pub debug: bool,

    /// Show help and exit
    #[arg(short = 'h', long)]
    pub help: bool,

    /// Timetable site root
    #[arg(long, env = "ROZKLAD_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Request timeout in seconds
    #[arg(
        long,
        env = "ROZKLAD_TIMEOUT",
        default_value_t = 10,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Log file (defaults to `<executable>.log`)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Never colour output
    #[arg(long)]
    pub no_color: bool,

    /// Command and its arguments
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub words: Vec<String>,
}

/// What to run, after flags have been pulled out of the free words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub operation: String,
    pub arguments: Vec<String>,
    pub debug: bool,
}

impl Invocation {
    /// Build from parsed arguments.
    pub fn from_args(args: &Args) -> Self {
        Self::from_words(args.words.clone(), args.debug, args.help)
    }

    /// Build from free words plus any flags clap already saw.
    pub fn from_words(words: Vec<String>, debug: bool, help: bool) -> Self {
        let debug = debug || words.iter().any(|w| w == "--debug");
        let help = help || words.iter().any(|w| w == "-h" || w == "--help");

        let mut words = words
            .into_iter()
            .filter(|w| !matches!(w.as_str(), "--debug" | "-h" | "--help"));

        let operation = words.next().unwrap_or_else(|| DEFAULT_COMMAND.to_string());
        let arguments = words.collect();

        Self {
            operation: if help {
                DEFAULT_COMMAND.to_string()
            } else {
                operation
            },
            arguments,
            debug,
        }
    }
}

/// A runnable command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Station,
    Connection,
}

/// Name, command and help lines for every command.
pub const COMMANDS: &[(&str, Command, &[&str])] = &[
    ("help", Command::Help, &["displays this help and exits"]),
    (
        "station",
        Command::Station,
        &[
            "looks for stations matching string given in parameter",
            "needs one parameter: station name pattern",
        ],
    ),
    (
        "connection",
        Command::Connection,
        &[
            "looks for closest departure between given station ids",
            "needs two parameters: from_id to_id",
        ],
    ),
];

impl Command {
    /// Look a command up by name.
    pub fn from_name(name: &str) -> Result<Self, CommandError> {
        COMMANDS
            .iter()
            .find(|(n, _, _)| *n == name)
            .map(|(_, command, _)| *command)
            .ok_or_else(|| CommandError::UnsupportedOperation(name.to_string()))
    }
}

/// The application: a timetable, somewhere to print, and the current time.
pub struct App<F, W> {
    executable: String,
    timetable: Timetable<F>,
    console: Console<W>,
    now: NaiveDateTime,
}

impl<F: Fetcher, W: Write> App<F, W> {
    /// Create an app using the local clock.
    pub fn new(executable: impl Into<String>, timetable: Timetable<F>, console: Console<W>) -> Self {
        Self {
            executable: executable.into(),
            timetable,
            console,
            now: Local::now().naive_local(),
        }
    }

    /// Pin the time used for connection searches.
    pub fn with_now(mut self, now: NaiveDateTime) -> Self {
        self.now = now;
        self
    }

    /// The console results are written to.
    pub fn console(&self) -> &Console<W> {
        &self.console
    }

    /// Run the invocation and report any failure. Returns the exit status.
    pub async fn execute(&mut self, invocation: &Invocation) -> u8 {
        match self.run(invocation).await {
            Ok(()) => 0,
            Err(err) => {
                report(&invocation.operation, &err);
                err.exit_code()
            }
        }
    }

    /// Run the invocation.
    pub async fn run(&mut self, invocation: &Invocation) -> Result<(), CommandError> {
        let args = invocation.arguments.as_slice();
        match Command::from_name(&invocation.operation)? {
            Command::Help => self.help(),
            Command::Station => self.station(args).await,
            Command::Connection => self.connection(args).await,
        }
    }

    fn help(&mut self) -> Result<(), CommandError> {
        let mut lines = vec![
            "Command line client for accessing polish railway timetable published on rozklad-pkp.pl"
                .to_string(),
            String::new(),
            format!("Usage: {} [options] [command] [arguments]", self.executable),
            String::new(),
            "Available commands".to_string(),
        ];

        let width = COMMANDS.iter().map(|(name, _, _)| name.len()).max().unwrap_or(0);
        for (name, _, text) in COMMANDS {
            for (i, line) in text.iter().enumerate() {
                let label = if i == 0 { *name } else { "" };
                let sep = if i == 0 { ':' } else { ' ' };
                lines.push(format!("  {label:<width$} {sep} {line}"));
            }
        }

        lines.extend([
            String::new(),
            "Options".to_string(),
            "  --debug          : shows diagnostic output".to_string(),
            "  --base-url URL   : timetable site root".to_string(),
            "  --timeout SECS   : request timeout".to_string(),
            "  --log-file PATH  : log file location".to_string(),
            "  --no-color       : plain output".to_string(),
        ]);

        for line in &lines {
            self.console.print(line)?;
        }
        Ok(())
    }

    async fn station(&mut self, args: &[String]) -> Result<(), CommandError> {
        let pattern = args
            .first()
            .ok_or(CommandError::MissingArgument("Please provide requested station name"))?;

        let stations = self.timetable.stations(pattern).await?;
        if stations.is_empty() {
            debug!(pattern = %pattern, "No stations matched");
        }

        for station in &stations {
            self.console.print(&station.to_string())?;
        }
        Ok(())
    }

    async fn connection(&mut self, args: &[String]) -> Result<(), CommandError> {
        let [from, to, ..] = args else {
            return Err(CommandError::MissingArgument(
                "Please provide two station ids (from and to)",
            ));
        };

        let journeys = self
            .timetable
            .connections(from, to, self.now.date(), self.now.time())
            .await?;

        let next = next_connection(&journeys).ok_or_else(|| CommandError::NoConnection {
            from: from.clone(),
            to: to.clone(),
        })?;

        let first_train = next
            .first_train()
            .map(|t| self.console.train(t))
            .unwrap_or_default();
        let headline = format!("{} {}", next.departure(), first_train);
        self.console.print(&headline)?;
        self.console.print("---")?;

        for journey in &journeys {
            let line = self.console.journey(journey);
            self.console.print(&line)?;
        }
        Ok(())
    }
}

/// Tell the user what went wrong.
///
/// Site and parse failures get a generic message; the detail only shows
/// with `--debug` (and always lands in the log file).
pub fn report(operation: &str, err: &CommandError) {
    match err {
        CommandError::Timetable(e) => {
            error!("Operation failed: {operation}");
            debug!("{e}");
        }
        other => error!("{other}"),
    }
}
