//! Result output.

use std::io::{self, Stdout, Write};

use tracing::info;

use crate::domain::{Journey, LabelColour, TrainLabel};
use crate::logging::OUTPUT_TARGET;

/// Writes result lines for the user.
///
/// Each line is also logged on [`OUTPUT_TARGET`] so the log file keeps a
/// record of what was shown.
#[derive(Debug)]
pub struct Console<W> {
    out: W,
    colour: bool,
}

impl Console<Stdout> {
    /// Console on stdout.
    pub fn stdout(colour: bool) -> Self {
        Self::new(io::stdout(), colour)
    }
}

impl<W: Write> Console<W> {
    /// Console over any writer.
    pub fn new(out: W, colour: bool) -> Self {
        Self { out, colour }
    }

    /// The underlying writer.
    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Write one line.
    pub fn print(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{line}")?;
        info!(target: OUTPUT_TARGET, "{line}");
        Ok(())
    }

    /// Render a train label, highlighting the kind when colour is on.
    pub fn train(&self, train: &TrainLabel) -> String {
        if self.colour {
            format!("{}{}", paint(train.kind(), train.colour()), train.name())
        } else {
            train.to_string()
        }
    }

    /// `08:15 → 11:40  IC1234 Hetman, R55`
    pub fn journey(&self, journey: &Journey) -> String {
        if !self.colour {
            return journey.to_string();
        }

        let trains: Vec<String> = journey.trains().iter().map(|t| self.train(t)).collect();
        format!(
            "{} → {}  {}",
            journey.departure(),
            journey.arrival(),
            trains.join(", ")
        )
    }
}

/// Bold plus foreground colour.
fn paint(text: &str, colour: LabelColour) -> String {
    let code = match colour {
        LabelColour::Red => 31,
        LabelColour::Green => 32,
        LabelColour::Yellow => 33,
        LabelColour::Blue => 34,
        LabelColour::Magenta => 35,
        LabelColour::White => 97,
    };
    format!("\x1b[{code};1m{text}\x1b[0m")
}
