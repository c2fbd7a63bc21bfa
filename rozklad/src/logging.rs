//! Terminal and file logging.
//!
//! Two `tracing-subscriber` layers share one registry:
//!
//! - the terminal layer writes to stderr, errors in red and debug output in
//!   grey, and only shows debug output when asked to;
//! - the file layer records every event from this crate as
//!   `YYYY-MM-DD HH:MM:SS [lvl]  message`.
//!
//! Result lines are logged on [`OUTPUT_TARGET`] so that the log file keeps a
//! copy of what was printed; the terminal layer skips that target since the
//! lines already went to stdout.

use std::fmt;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use chrono::Local;
use tracing::{Event, Level, Subscriber, warn};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::TryInitError;

/// Target for lines the user asked for (station lists, connections).
pub const OUTPUT_TARGET: &str = "rozklad::output";

/// Events from anything under this target are ours.
const CRATE_TARGET: &str = "rozklad";

const SGR_RESET: &str = "\x1b[0m";
const SGR_RED: &str = "\x1b[31m";
const SGR_GRAY: &str = "\x1b[37m";

/// Logging options.
#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    /// Show debug output on the terminal.
    pub debug: bool,
    /// Colour terminal output.
    pub ansi: bool,
    /// Log file to create. `None` disables file logging.
    pub file: Option<PathBuf>,
}

/// Install the global subscriber.
///
/// A log file that cannot be created is reported as a warning and the
/// program carries on with terminal logging only.
pub fn init(config: &LogConfig) -> Result<(), TryInitError> {
    let mut file_error = None;
    let file = config.file.as_ref().and_then(|path| match File::create(path) {
        Ok(file) => Some(file),
        Err(e) => {
            file_error = Some((path.clone(), e));
            None
        }
    });

    tracing_subscriber::registry()
        .with(terminal_layer(config.debug, config.ansi))
        .with(file.map(file_layer))
        .try_init()?;

    if let Some((path, e)) = file_error {
        warn!(path = %path.display(), error = %e, "Cannot create log file");
    }

    Ok(())
}

fn terminal_layer<S>(debug: bool, ansi: bool) -> impl tracing_subscriber::Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let level = if debug {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let filter = Targets::new()
        .with_target(CRATE_TARGET, level)
        .with_target(OUTPUT_TARGET, LevelFilter::OFF);

    tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(ansi)
        .event_format(TerminalFormat)
        .with_filter(filter)
}

pub(crate) fn file_layer<S>(file: File) -> impl tracing_subscriber::Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .event_format(LogFileFormat)
        .with_filter(Targets::new().with_target(CRATE_TARGET, LevelFilter::DEBUG))
}

/// Bare message, coloured by level when the writer supports it.
struct TerminalFormat;

impl<S, N> FormatEvent<S, N> for TerminalFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let colour = match *event.metadata().level() {
            Level::ERROR => Some(SGR_RED),
            Level::DEBUG | Level::TRACE => Some(SGR_GRAY),
            _ => None,
        }
        .filter(|_| writer.has_ansi_escapes());

        if let Some(colour) = colour {
            writer.write_str(colour)?;
        }
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        if colour.is_some() {
            writer.write_str(SGR_RESET)?;
        }
        writeln!(writer)
    }
}

/// `2026-10-17 14:02:11 [dbg]  message`
struct LogFileFormat;

impl<S, N> FormatEvent<S, N> for LogFileFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        write!(
            writer,
            "{} [{:>3}]  ",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            level_tag(event.metadata().level())
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

fn level_tag(level: &Level) -> &'static str {
    match *level {
        Level::ERROR => "err",
        Level::WARN => "wrn",
        Level::INFO => "inf",
        Level::DEBUG => "dbg",
        Level::TRACE => "trc",
    }
}
