//! Declaration records: commands, flags, examples, topics and the registry.
//!
//! These are plain data. The parser only ever reads [`Flag::name`] and
//! [`Flag::short`]; the dispatcher only reads names and the handler. Everything
//! else exists for help rendering.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::handler::{FnHandler, Handler, SharedHandler};
use crate::Args;

/// An optional command-line option.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flag {
    /// Canonical (long) name, without any leading dashes.
    pub name: String,
    /// Short alias, usually the first letter of the name.
    pub short: Option<String>,
    /// Default value shown in help. Never filled in by the parser.
    pub default_value: Option<String>,
    /// Suggested use, e.g. `--filter="token"`.
    pub usage: String,
    /// Description shown under the flag in command help.
    pub help: String,
}

impl Flag {
    /// Creates a flag with the given canonical name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn short(mut self, short: impl Into<String>) -> Self {
        self.short = Some(short.into());
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    /// Returns true if `name` is this flag's canonical name or its short alias.
    pub fn matches(&self, name: &str) -> bool {
        self.name == name || self.short.as_deref() == Some(name)
    }
}

/// An annotated use case of a command, displayed in its help.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Example {
    /// Typical invocation, without the app and command name.
    pub usecase: String,
    pub description: String,
}

impl Example {
    pub fn new(usecase: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            usecase: usecase.into(),
            description: description.into(),
        }
    }
}

/// A top-level application subcommand.
#[derive(Clone)]
pub struct Command {
    /// Identifier typed on the command line, e.g. `build`.
    pub name: String,
    /// Short annotation shown in the command list.
    pub brief: String,
    /// Usage line suffix, without the command name: `[-o output] [packages]`.
    pub usage: String,
    /// Detailed reference shown in command help.
    pub help: String,
    /// Help section this command is listed under. Empty means the main list.
    pub division: String,
    pub flags: Vec<Flag>,
    pub examples: Vec<Example>,
    pub handler: SharedHandler,
}

impl Command {
    /// Creates a command backed by a closure returning the exit status.
    pub fn new<F>(name: impl Into<String>, handler: F) -> Self
    where
        F: FnMut(&Args) -> i32 + 'static,
    {
        Self::with_handler(name, FnHandler::new(handler))
    }

    /// Creates a command backed by any [`Handler`] implementation.
    pub fn with_handler<H>(name: impl Into<String>, handler: H) -> Self
    where
        H: Handler + 'static,
    {
        Self {
            name: name.into(),
            brief: String::new(),
            usage: String::new(),
            help: String::new(),
            division: String::new(),
            flags: Vec::new(),
            examples: Vec::new(),
            handler: Rc::new(RefCell::new(handler)),
        }
    }

    pub fn brief(mut self, brief: impl Into<String>) -> Self {
        self.brief = brief.into();
        self
    }

    pub fn usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    pub fn division(mut self, division: impl Into<String>) -> Self {
        self.division = division.into();
        self
    }

    pub fn flag(mut self, flag: Flag) -> Self {
        self.flags.push(flag);
        self
    }

    pub fn example(mut self, example: Example) -> Self {
        self.examples.push(example);
        self
    }

    /// Runs the handler with an already-built argument context.
    pub fn invoke(&self, args: &Args) -> i32 {
        self.handler.borrow_mut().handle(args)
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("brief", &self.brief)
            .field("division", &self.division)
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}

/// A concise wiki page reachable through `help <topic>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Topic {
    pub name: String,
    pub brief: String,
    pub text: String,
}

impl Topic {
    pub fn new(name: impl Into<String>, brief: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            brief: brief.into(),
            text: text.into(),
        }
    }
}

/// Application-level identity and parsing policy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppInfo {
    pub name: String,
    pub brief: String,
    pub version: String,
    /// Reject unknown flags and bare arguments instead of tolerating them.
    pub strict: bool,
}

/// Everything the dispatcher routes over.
///
/// Lookups scan in registration order, so a duplicated name resolves to the
/// first registration.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    pub info: AppInfo,
    /// Runs when no subcommand is given.
    pub root: Option<Command>,
    pub commands: Vec<Command>,
    pub topics: Vec<Topic>,
}

impl Registry {
    pub fn new(info: AppInfo) -> Self {
        Self {
            info,
            ..Self::default()
        }
    }

    pub fn command_by_name(&self, name: &str) -> Option<&Command> {
        self.commands.iter().find(|cmd| cmd.name == name)
    }

    pub fn topic_by_name(&self, name: &str) -> Option<&Topic> {
        self.topics.iter().find(|topic| topic.name == name)
    }

    /// Command names in registration order.
    pub fn command_names(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().map(|cmd| cmd.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_matches_name_and_short() {
        let flag = Flag::new("force").short("f");
        assert!(flag.matches("force"));
        assert!(flag.matches("f"));
        assert!(!flag.matches("forc"));
    }

    #[test]
    fn test_flag_without_short_never_matches_empty() {
        let flag = Flag::new("force");
        assert!(!flag.matches(""));
    }

    #[test]
    fn test_registry_first_registration_wins() {
        let mut registry = Registry::default();
        registry.commands.push(Command::new("build", |_| 1));
        registry.commands.push(Command::new("build", |_| 2));

        let cmd = registry.command_by_name("build").unwrap();
        assert_eq!(cmd.invoke(&Args::default()), 1);
    }

    #[test]
    fn test_registry_topic_lookup() {
        let mut registry = Registry::default();
        registry.topics.push(Topic::new("packages", "package lists", "..."));

        assert!(registry.topic_by_name("packages").is_some());
        assert!(registry.topic_by_name("package").is_none());
    }

    #[test]
    fn test_command_names_keep_order() {
        let mut registry = Registry::default();
        for name in ["list", "build", "install"] {
            registry.commands.push(Command::new(name, |_| 0));
        }
        let names: Vec<_> = registry.command_names().collect();
        assert_eq!(names, vec!["list", "build", "install"]);
    }

    #[test]
    fn test_command_handler_keeps_state() {
        let mut count = 0;
        let cmd = Command::new("inc", move |_| {
            count += 1;
            count
        });
        cmd.invoke(&Args::default());
        assert_eq!(cmd.invoke(&Args::default()), 2);
    }
}
