//! AppBuilder for constructing App instances.

use std::collections::HashSet;

use subcli_dispatch::{AppInfo, Command, Registry, Topic};
use tracing::{debug, warn};

use super::app::App;
use super::help::{HelpConfig, TemplateHelp};
use crate::setup::SetupError;

/// Builder for constructing an [`App`].
///
/// Parsing is strict unless [`strict(false)`](Self::strict) is set.
///
/// ```rust
/// use subcli::{App, Command, Flag, Topic};
///
/// let app = App::builder()
///     .name("demo")
///     .brief("Demo is a funky demonstration.")
///     .version("stable")
///     .command(
///         Command::new("join", |args| {
///             println!("{}", args.string("separator"));
///             0
///         })
///         .flag(Flag::new("separator").short("s")),
///     )
///     .topic(Topic::new("writing", "markdown cheatsheet", "..."))
///     .build()
///     .unwrap();
///
/// assert!(app.info().strict);
/// ```
pub struct AppBuilder {
    info: AppInfo,
    root: Option<Command>,
    commands: Vec<Command>,
    topics: Vec<Topic>,
    help_config: HelpConfig,
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AppBuilder {
    pub fn new() -> Self {
        Self {
            info: AppInfo {
                strict: true,
                ..AppInfo::default()
            },
            root: None,
            commands: Vec::new(),
            topics: Vec::new(),
            help_config: HelpConfig::default(),
        }
    }

    /// Program name, used in usage lines and as the diagnostic prefix.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.info.name = name.into();
        self
    }

    /// One-line description shown atop the global help.
    pub fn brief(mut self, brief: impl Into<String>) -> Self {
        self.info.brief = brief.into();
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.info.version = version.into();
        self
    }

    /// Rejects unknown flags and bare arguments when true (the default).
    pub fn strict(mut self, strict: bool) -> Self {
        self.info.strict = strict;
        self
    }

    /// Command run when no subcommand is given.
    pub fn root(mut self, command: Command) -> Self {
        self.root = Some(command);
        self
    }

    pub fn command(mut self, command: Command) -> Self {
        self.commands.push(command);
        self
    }

    pub fn topic(mut self, topic: Topic) -> Self {
        self.topics.push(topic);
        self
    }

    pub fn help_config(mut self, config: HelpConfig) -> Self {
        self.help_config = config;
        self
    }

    /// Builds the app.
    ///
    /// Duplicate command or topic names are kept; lookups resolve to the
    /// first registration.
    pub fn build(self) -> Result<App, SetupError> {
        if self.info.name.is_empty() {
            return Err(SetupError::MissingName);
        }

        warn_duplicates("command", self.commands.iter().map(|c| c.name.as_str()));
        warn_duplicates("topic", self.topics.iter().map(|t| t.name.as_str()));

        let help = TemplateHelp::try_new(&self.help_config)?;

        debug!(
            app = %self.info.name,
            commands = self.commands.len(),
            topics = self.topics.len(),
            strict = self.info.strict,
            "app built"
        );

        Ok(App {
            registry: Registry {
                info: self.info,
                root: self.root,
                commands: self.commands,
                topics: self.topics,
            },
            help,
        })
    }
}

fn warn_duplicates<'a>(kind: &str, names: impl Iterator<Item = &'a str>) {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            warn!(kind, name, "duplicate registration, the first one wins");
        }
    }
}
