//! Command error types.

use crate::timetable::TimetableError;

/// Exit status for a failed operation.
pub const EXIT_FAILURE: u8 = 1;

/// Exit status for a usage mistake.
pub const EXIT_USAGE: u8 = 2;

/// Errors from running a command.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// No handler is registered under this name
    #[error("Operation not supported: {0}")]
    UnsupportedOperation(String),

    /// A required argument was not given
    #[error("{0}")]
    MissingArgument(&'static str),

    /// The search worked but found nothing to take
    #[error("No connection found between {from} and {to}")]
    NoConnection { from: String, to: String },

    /// Talking to the site or reading its answer failed
    #[error(transparent)]
    Timetable(#[from] TimetableError),

    /// Writing results failed
    #[error("output error: {0}")]
    Output(#[from] std::io::Error),
}

impl CommandError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CommandError::UnsupportedOperation(_) | CommandError::MissingArgument(_) => EXIT_USAGE,
            CommandError::NoConnection { .. }
            | CommandError::Timetable(_)
            | CommandError::Output(_) => EXIT_FAILURE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::SiteError;

    #[test]
    fn error_display() {
        let err = CommandError::UnsupportedOperation("fly".into());
        assert_eq!(err.to_string(), "Operation not supported: fly");

        let err = CommandError::MissingArgument("Please provide requested station name");
        assert_eq!(err.to_string(), "Please provide requested station name");

        let err = CommandError::NoConnection {
            from: "1".into(),
            to: "2".into(),
        };
        assert_eq!(err.to_string(), "No connection found between 1 and 2");
    }

    #[test]
    fn exit_codes() {
        assert_eq!(CommandError::UnsupportedOperation("x".into()).exit_code(), 2);
        assert_eq!(CommandError::MissingArgument("x").exit_code(), 2);

        let err: CommandError = TimetableError::from(SiteError::Api {
            status: 500,
            message: String::new(),
        })
        .into();
        assert_eq!(err.exit_code(), 1);
    }
}
