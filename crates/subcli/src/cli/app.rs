//! The application: a built registry plus its help renderer.

use std::io;

use subcli_dispatch::{AppInfo, Dispatcher, HelpRenderer, Registry, Streams, Termination};

use super::builder::AppBuilder;
use super::help::TemplateHelp;

/// A configured subcommand application.
///
/// Built with [`App::builder`]. Running it dispatches one argument vector:
///
/// ```rust
/// use subcli::{App, Command, SharedBuffer, Streams};
///
/// let app = App::builder()
///     .name("demo")
///     .version("1.0")
///     .command(Command::new("hello", |_| 0))
///     .build()
///     .unwrap();
///
/// let (out, err) = (SharedBuffer::new(), SharedBuffer::new());
/// let (mut out_w, mut err_w) = (out.clone(), err.clone());
/// let mut streams = Streams::new(&mut out_w, &mut err_w);
///
/// assert_eq!(app.run_with(["demo", "version"], &mut streams), Ok(0));
/// assert_eq!(out.contents(), "demo version 1.0\n");
/// ```
pub struct App {
    pub(crate) registry: Registry,
    pub(crate) help: TemplateHelp,
}

impl App {
    pub fn builder() -> AppBuilder {
        AppBuilder::new()
    }

    pub fn info(&self) -> &AppInfo {
        &self.registry.info
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Dispatches `argv` against this application's commands.
    ///
    /// `argv` starts with the program name, which is ignored.
    ///
    /// # Panics
    ///
    /// Panics if `argv` is empty. The OS always supplies the program name, so
    /// an empty vector means the caller built it wrong.
    pub fn run_with<I, S>(&self, argv: I, streams: &mut Streams<'_>) -> Result<i32, Termination>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let argv: Vec<S> = argv.into_iter().collect();
        assert!(
            !argv.is_empty(),
            "argument vector must contain the program name"
        );
        Dispatcher::new(&self.registry, &self.help).run(&argv[1..], streams)
    }

    /// Dispatches `argv` on the process stdout and stderr.
    ///
    /// Returns the handler's exit status. A [`Termination`] exits the process
    /// with its status instead of returning.
    pub fn run_from<I, S>(&self, argv: I) -> i32
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = io::stdout().lock();
        let mut err = io::stderr().lock();
        let mut streams = Streams::new(&mut out, &mut err);

        let result = self.run_with(argv, &mut streams);
        streams.flush();
        match result {
            Ok(status) => status,
            Err(termination) => std::process::exit(termination.status),
        }
    }

    /// Dispatches the process arguments. See [`run_from`](Self::run_from).
    pub fn run(&self) -> i32 {
        self.run_from(std::env::args())
    }

    /// Registered command names that plausibly correct `typed`.
    pub fn suggestions_for(&self, typed: &str) -> Vec<String> {
        subcli_dispatch::suggestions_for(typed, self.registry.command_names())
    }

    /// The overview printed by `app help`.
    pub fn global_help(&self) -> String {
        self.help.global_help(&self.registry)
    }

    /// The reference printed by `app help <name>`, if such a command exists.
    pub fn command_help(&self, name: &str) -> Option<String> {
        self.registry
            .command_by_name(name)
            .map(|command| self.help.command_help(&self.registry.info, command, false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::help::{HelpConfig, HelpMode};
    use subcli_dispatch::{Command, SharedBuffer};

    fn app() -> App {
        App::builder()
            .name("demo")
            .brief("a demo")
            .help_config(HelpConfig::new().mode(HelpMode::Plain))
            .command(Command::new("build", |_| 0).brief("builds"))
            .command(Command::new("install", |_| 0))
            .build()
            .unwrap()
    }

    #[test]
    fn test_run_with_skips_program_name() {
        let app = app();
        let (mut out, mut err) = (SharedBuffer::new(), SharedBuffer::new());
        let mut streams = Streams::new(&mut out, &mut err);
        assert_eq!(app.run_with(["demo", "build"], &mut streams), Ok(0));
    }

    #[test]
    #[should_panic(expected = "program name")]
    fn test_run_with_empty_argv_panics() {
        let app = app();
        let (mut out, mut err) = (SharedBuffer::new(), SharedBuffer::new());
        let mut streams = Streams::new(&mut out, &mut err);
        let _ = app.run_with(Vec::<String>::new(), &mut streams);
    }

    #[test]
    fn test_suggestions_for() {
        let app = app();
        assert_eq!(app.suggestions_for("biuld"), vec!["build"]);
        assert_eq!(app.suggestions_for("inst"), vec!["install"]);
    }

    #[test]
    fn test_help_accessors() {
        let app = app();
        assert!(app.global_help().contains("\tbuild       builds"));
        assert_eq!(app.command_help("build").as_deref(), Some("usage: demo build"));
        assert!(app.command_help("nope").is_none());
    }
}
