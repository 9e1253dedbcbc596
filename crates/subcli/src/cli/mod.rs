//! Application facade: configuration, help and process integration.
//!
//! ## Execution Flow
//!
//! ```text
//! argv → App::run → Dispatcher → Variable Parser → Handler → exit status
//! ```
//!
//! 1. [`App::run`] reads the process arguments and drops the program name.
//! 2. The dispatcher picks the root command, `help`, `version` or a registered
//!    command from the first token.
//! 3. The command's flags are parsed into [`Args`](subcli_dispatch::Args),
//!    strictly unless the app was built with `strict(false)`.
//! 4. The handler's return value becomes the exit status.
//!
//! An unknown command, an unknown help topic or a strict parse error prints
//! its diagnostic and exits the process with status 1. Use
//! [`App::run_with`] to capture that outcome as a
//! [`Termination`](subcli_dispatch::Termination) instead.

mod app;
mod builder;
pub mod help;

pub use app::App;
pub use builder::AppBuilder;
