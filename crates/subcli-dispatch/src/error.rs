//! Error types for flag parsing, value conversion and dispatch termination.
//!
//! Two levels are kept apart. [`ParseError`] and [`ValueError`] are ordinary
//! recoverable values. [`Termination`] is the dispatcher's request to end the
//! process: by the time one is returned its diagnostic has already been
//! written, and the caller only has to exit with [`Termination::status`].

use thiserror::Error;

/// Strict-mode parse failures.
///
/// Lenient parsing never produces these: a bare argument is skipped and an
/// unknown flag is recorded under the text the user typed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A bare (non-flag) token where a flag was expected.
    #[error("no option name before argument {argument}")]
    UnexpectedArgument { argument: String },

    /// A flag whose name matches no declaration or short alias.
    #[error("option -{name} does not exist")]
    UnknownFlag { name: String },
}

/// Errors from converting a bound flag value to a typed value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// The flag did not appear on the command line.
    #[error("flag {name} not found")]
    Missing { name: String },

    /// The value is not an integer, or does not fit in 64 bits.
    #[error("invalid integer {value:?} for flag {name}")]
    InvalidInt { name: String, value: String },
}

/// Result type for parsing operations.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Exit status carried by every [`Termination`].
pub const TERMINATION_STATUS: i32 = 1;

/// A fatal dispatch outcome: diagnostics were written, the process should exit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct Termination {
    pub status: i32,
    pub reason: TerminationReason,
}

impl Termination {
    pub fn new(reason: impl Into<TerminationReason>) -> Self {
        Self {
            status: TERMINATION_STATUS,
            reason: reason.into(),
        }
    }
}

impl From<ParseError> for Termination {
    fn from(err: ParseError) -> Self {
        Self::new(err)
    }
}

/// Why dispatch gave up.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TerminationReason {
    /// The first token named no registered command.
    #[error("unknown subcommand \"{name}\"")]
    UnknownCommand {
        name: String,
        suggestions: Vec<String>,
    },

    /// `help <name>` named neither a command nor a topic.
    #[error("no such command or help topic")]
    UnknownHelpTopic { name: String },

    /// Strict parsing rejected the command's arguments.
    #[error(transparent)]
    Parse(#[from] ParseError),
}
