//! # subcli - Subcommand CLIs in the style of the `go` tool
//!
//! subcli builds applications shaped like `program subcommand [flags]`:
//!
//! - Commands with flags, short aliases and multi-word values
//! - Built-in `help` and `version` commands, plus help topics
//! - Go-style help text rendered from MiniJinja templates
//! - "Did you mean this?" suggestions for mistyped commands
//! - Strict or lenient flag parsing
//!
//! The parsing and routing engine lives in [`subcli_dispatch`] and is
//! re-exported here; this crate adds the [`App`] facade, configuration and
//! template-based help.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use subcli::{App, Command, Example, Flag};
//!
//! fn main() {
//!     let app = App::builder()
//!         .name("demo")
//!         .brief("Demo is a funky demonstration.")
//!         .version("stable")
//!         .command(
//!             Command::new("join", |args| {
//!                 println!("{}", args.string("separator"));
//!                 0
//!             })
//!             .brief("merges the strings given")
//!             .flag(Flag::new("separator").short("s"))
//!             .example(Example::new("-s . google com", "Results in \"google.com\"")),
//!         )
//!         .build()
//!         .expect("valid app");
//!
//!     std::process::exit(app.run());
//! }
//! ```
//!
//! ## Help
//!
//! `demo help` lists commands grouped by their `division`, then help
//! topics. `demo help join` shows the usage line, the flags and the examples.
//! Headings are bold when the terminal supports it; see [`HelpConfig`] to
//! force a mode or replace the templates.

pub mod cli;
mod setup;

pub use cli::help::{HelpConfig, HelpError, HelpMode, TemplateHelp};
pub use cli::{App, AppBuilder};
pub use setup::SetupError;

pub use subcli_dispatch::{
    parse_variables, suggestions_for, AppInfo, Args, Bindings, Command, Dispatcher, Example,
    Flag, FnHandler, Handler, HelpRenderer, ParseError, PlainHelp, Registry, SharedBuffer,
    SharedHandler, Streams, Termination, TerminationReason, Topic, ValueError,
};
