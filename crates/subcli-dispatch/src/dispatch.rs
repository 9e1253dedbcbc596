//! Command dispatch logic.
//!
//! The dispatcher looks at the first one or two tokens and picks exactly one
//! of these paths:
//!
//! | first token          | action                                              |
//! |----------------------|-----------------------------------------------------|
//! | none, or `-...`      | run the root command with every token, else global help |
//! | `help`               | root/global help, command help, or topic text       |
//! | `version`            | a registered `version` command, else the version line |
//! | a command name       | parse the rest and run the handler                  |
//! | anything else        | report it, suggest corrections, terminate           |
//!
//! Fatal outcomes come back as [`Termination`] after their diagnostics have
//! been written. Exiting the process is left to the caller.

use tracing::debug;

use crate::command::{Command, Registry};
use crate::error::{Termination, TerminationReason};
use crate::output::Streams;
use crate::parse::{is_flag_token, parse_variables};
use crate::render::HelpRenderer;
use crate::suggest::suggestions_for;
use crate::Args;

/// Name of the built-in help command.
pub const HELP_COMMAND: &str = "help";

/// Name of the built-in version command.
pub const VERSION_COMMAND: &str = "version";

/// Routes an argument vector to a command of a [`Registry`].
pub struct Dispatcher<'a> {
    registry: &'a Registry,
    help: &'a dyn HelpRenderer,
}

impl<'a> Dispatcher<'a> {
    pub fn new(registry: &'a Registry, help: &'a dyn HelpRenderer) -> Self {
        Self { registry, help }
    }

    pub fn registry(&self) -> &Registry {
        self.registry
    }

    /// Dispatches `tokens`, the argument vector without the program name.
    ///
    /// Returns the exit status of whatever ran: a handler's own status, or 0
    /// for help and version output.
    pub fn run<S: AsRef<str>>(
        &self,
        tokens: &[S],
        streams: &mut Streams<'_>,
    ) -> Result<i32, Termination> {
        let tokens: Vec<&str> = tokens.iter().map(|t| t.as_ref()).collect();

        let first = match tokens.first() {
            Some(first) if !is_flag_token(first) => *first,
            _ => return self.run_root(&tokens, streams),
        };

        if first == HELP_COMMAND {
            return self.run_help(tokens.get(1).copied(), streams);
        }

        if first == VERSION_COMMAND && self.registry.command_by_name(VERSION_COMMAND).is_none() {
            let info = &self.registry.info;
            streams.println(&format!("{} version {}", info.name, info.version));
            return Ok(0);
        }

        match self.registry.command_by_name(first) {
            Some(command) => self.invoke(command, &tokens[1..], streams),
            None => Err(self.unknown_command(first, streams)),
        }
    }

    fn run_root(&self, tokens: &[&str], streams: &mut Streams<'_>) -> Result<i32, Termination> {
        match &self.registry.root {
            Some(root) => {
                debug!("no subcommand given, running root command");
                self.invoke(root, tokens, streams)
            }
            None => {
                streams.println(&self.help.global_help(self.registry));
                Ok(0)
            }
        }
    }

    fn run_help(&self, target: Option<&str>, streams: &mut Streams<'_>) -> Result<i32, Termination> {
        let info = &self.registry.info;

        let Some(name) = target else {
            let text = match &self.registry.root {
                Some(root) => self.help.command_help(info, root, true),
                None => self.help.global_help(self.registry),
            };
            streams.println(&text);
            return Ok(0);
        };

        if let Some(command) = self.registry.command_by_name(name) {
            streams.println(&self.help.command_help(info, command, false));
            return Ok(0);
        }
        if let Some(topic) = self.registry.topic_by_name(name) {
            streams.println(&topic.text);
            return Ok(0);
        }

        let termination = Termination::new(TerminationReason::UnknownHelpTopic {
            name: name.to_string(),
        });
        streams.printerr(&info.name, &termination);
        Err(termination)
    }

    /// Parses `tokens` for `command` and runs its handler.
    fn invoke(
        &self,
        command: &Command,
        tokens: &[&str],
        streams: &mut Streams<'_>,
    ) -> Result<i32, Termination> {
        let info = &self.registry.info;
        let vars = match parse_variables(info.strict, &command.flags, tokens) {
            Ok(vars) => vars,
            Err(err) => {
                let termination = Termination::from(err);
                streams.printerr(&info.name, &termination);
                return Err(termination);
            }
        };

        debug!(command = %command.name, flags = vars.len(), "invoking handler");
        let status = command.invoke(&Args::from_bindings(vars));
        debug!(command = %command.name, status, "handler finished");
        Ok(status)
    }

    fn unknown_command(&self, name: &str, streams: &mut Streams<'_>) -> Termination {
        let suggestions = suggestions_for(name, self.registry.command_names());
        debug!(typed = name, count = suggestions.len(), "unknown subcommand");

        streams.printerr(&self.registry.info.name, format!("unknown subcommand \"{}\"", name));
        if !suggestions.is_empty() {
            streams.println("Did you mean this?");
            for suggestion in &suggestions {
                streams.println(&format!("\t{}", suggestion));
            }
            streams.println("");
        }

        Termination::new(TerminationReason::UnknownCommand {
            name: name.to_string(),
            suggestions,
        })
    }
}
