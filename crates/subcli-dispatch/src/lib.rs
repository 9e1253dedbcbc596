//! Argument parsing and subcommand dispatch for multi-tool CLIs.
//!
//! `subcli-dispatch` is the engine behind `program subcommand [flags]`:
//!
//! - **Variable parser**: turns raw tokens into flag bindings, with short
//!   aliases, `--flag=value` and multi-word values folded from following
//!   tokens. Strict mode rejects what lenient mode tolerates.
//! - **Dispatcher**: routes the first token to a command, the built-in
//!   `help` and `version` commands, or a root command.
//! - **Suggestions**: "Did you mean this?" candidates for mistyped names,
//!   by edit distance and prefix.
//!
//! It does not own help formatting. The dispatcher calls a [`HelpRenderer`];
//! [`PlainHelp`] is built in and the `subcli` crate adds templates.
//!
//! # Termination
//!
//! An unknown command, an unknown help topic and a strict parse failure are
//! fatal. The dispatcher writes the diagnostic and returns a [`Termination`]
//! instead of exiting, so the effect can be captured in tests:
//!
//! ```rust
//! use subcli_dispatch::{AppInfo, Command, Dispatcher, PlainHelp, Registry, SharedBuffer, Streams};
//!
//! let mut registry = Registry::new(AppInfo {
//!     name: "demo".into(),
//!     strict: true,
//!     ..AppInfo::default()
//! });
//! registry.commands.push(Command::new("build", |_| 0));
//!
//! let (out, err) = (SharedBuffer::new(), SharedBuffer::new());
//! let (mut out_w, mut err_w) = (out.clone(), err.clone());
//! let mut streams = Streams::new(&mut out_w, &mut err_w);
//!
//! let result = Dispatcher::new(&registry, &PlainHelp).run(&["buld"], &mut streams);
//! assert_eq!(result.unwrap_err().status, 1);
//! assert_eq!(err.contents(), "demo: unknown subcommand \"buld\"\n");
//! assert_eq!(out.contents(), "Did you mean this?\n\tbuild\n\n");
//! ```

mod args;
mod command;
mod dispatch;
mod error;
mod handler;
mod output;
mod parse;
mod render;
mod suggest;

pub use args::Args;

pub use command::{AppInfo, Command, Example, Flag, Registry, Topic};

pub use dispatch::{Dispatcher, HELP_COMMAND, VERSION_COMMAND};

pub use error::{ParseError, Termination, TerminationReason, ValueError, TERMINATION_STATUS};

pub use handler::{FnHandler, Handler, SharedHandler};

pub use output::{SharedBuffer, Streams};

pub use parse::{parse_variables, resolve_flag, Bindings};

pub use render::{
    column_padding, division_title, flag_label, group_by_division, invocation, HelpRenderer,
    PlainHelp, MAIN_DIVISION_TITLE, NAME_COLUMN_WIDTH,
};

pub use suggest::{suggestions_for, SUGGESTION_DISTANCE};
