//! Error types for setup operations.

use thiserror::Error;

use crate::cli::help::HelpError;

/// Error type for [`AppBuilder::build`](crate::AppBuilder::build).
#[derive(Debug, Error)]
pub enum SetupError {
    /// The application has no name to print in usage lines and diagnostics.
    #[error("application name is required")]
    MissingName,

    /// A custom help template does not compile.
    #[error("invalid help template: {0}")]
    Template(#[from] HelpError),
}
