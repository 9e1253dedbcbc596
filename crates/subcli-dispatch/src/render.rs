//! Help renderer abstraction.
//!
//! Defines the contract between dispatch and help formatting. Dispatch
//! decides *when* help is shown; a [`HelpRenderer`] decides what it looks
//! like. [`PlainHelp`] is the built-in renderer; the `subcli` crate provides
//! a template-driven one.

use crate::command::{AppInfo, Command, Flag, Registry};

/// Width of the name column in command and topic lists.
pub const NAME_COLUMN_WIDTH: usize = 12;

/// Heading for commands that have no division.
pub const MAIN_DIVISION_TITLE: &str = "The commands are";

/// Produces help text for the dispatcher.
pub trait HelpRenderer {
    /// Overview of the application: commands, divisions and topics.
    fn global_help(&self, registry: &Registry) -> String;

    /// Reference for one command. `root` is true for the default command,
    /// which is invoked without a command name.
    fn command_help(&self, info: &AppInfo, command: &Command, root: bool) -> String;
}

/// Unstyled help in the layout of the `go` tool.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainHelp;

impl HelpRenderer for PlainHelp {
    fn global_help(&self, registry: &Registry) -> String {
        let info = &registry.info;
        let mut out = String::new();

        if !info.brief.is_empty() {
            out.push_str(&format!("{}\n\n", info.brief));
        }
        out.push_str(&format!("Usage:\n\n\t{} command [arguments]\n", info.name));

        for (division, commands) in group_by_division(&registry.commands) {
            out.push_str(&format!("\n{}:\n\n", division_title(division)));
            for cmd in commands {
                out.push_str(&format!(
                    "\t{}{}{}\n",
                    cmd.name,
                    column_padding(&cmd.name),
                    cmd.brief
                ));
            }
        }
        if !registry.commands.is_empty() {
            out.push_str(&format!(
                "\nUse \"{} help [command]\" for more information about a command.\n",
                info.name
            ));
        }

        if !registry.topics.is_empty() {
            out.push_str("\nAdditional help topics:\n\n");
            for topic in &registry.topics {
                out.push_str(&format!(
                    "\t{}{}{}\n",
                    topic.name,
                    column_padding(&topic.name),
                    topic.brief
                ));
            }
            out.push_str(&format!(
                "\nUse \"{} help [topic]\" for more information about a topic.\n",
                info.name
            ));
        }

        out.trim_end().to_string()
    }

    fn command_help(&self, info: &AppInfo, command: &Command, root: bool) -> String {
        let invocation = invocation(info, command, root);
        let mut out = String::new();

        out.push_str(format!("usage: {} {}", invocation, command.usage).trim_end());
        out.push('\n');

        if !command.help.is_empty() {
            out.push_str(&format!("\n{}\n", command.help));
        }

        if !command.flags.is_empty() {
            out.push_str("\nThe flags are:\n\n");
            for flag in &command.flags {
                out.push_str(&format!("\t{}\n", flag_label(flag)));
                if !flag.help.is_empty() {
                    out.push_str(&format!("\t\t{}\n", flag.help));
                }
                if let Some(default) = &flag.default_value {
                    out.push_str(&format!("\t\t(default: {})\n", default));
                }
            }
        }

        if !command.examples.is_empty() {
            out.push_str("\nExamples:\n\n");
            for example in &command.examples {
                out.push_str(&format!("\t{} {}\n", invocation, example.usecase));
                if !example.description.is_empty() {
                    out.push_str(&format!("\t\t{}\n", example.description));
                }
            }
        }

        out.trim_end().to_string()
    }
}

/// Groups commands by division, keeping registration order.
///
/// Commands without a division come first; named divisions follow in the
/// order they first appear.
pub fn group_by_division(commands: &[Command]) -> Vec<(&str, Vec<&Command>)> {
    let mut groups: Vec<(&str, Vec<&Command>)> = Vec::new();
    if commands.iter().any(|cmd| cmd.division.is_empty()) {
        groups.push(("", Vec::new()));
    }
    for cmd in commands {
        let division = cmd.division.as_str();
        match groups.iter_mut().find(|(name, _)| *name == division) {
            Some((_, members)) => members.push(cmd),
            None => groups.push((division, vec![cmd])),
        }
    }
    groups
}

/// Display title for a division name.
pub fn division_title(division: &str) -> &str {
    if division.is_empty() {
        MAIN_DIVISION_TITLE
    } else {
        division
    }
}

/// Spaces that align a name to [`NAME_COLUMN_WIDTH`], at least one.
pub fn column_padding(name: &str) -> String {
    " ".repeat(NAME_COLUMN_WIDTH.saturating_sub(name.chars().count()).max(1))
}

/// How the command is typed: `app cmd`, or just `app` for the root command.
pub fn invocation(info: &AppInfo, command: &Command, root: bool) -> String {
    if root {
        info.name.clone()
    } else {
        format!("{} {}", info.name, command.name)
    }
}

/// `-s, --separator` style label; a flag's `usage` replaces the long form.
pub fn flag_label(flag: &Flag) -> String {
    let mut parts = Vec::new();
    if let Some(short) = &flag.short {
        parts.push(format!("-{}", short));
    }
    if flag.usage.is_empty() {
        parts.push(format!("--{}", flag.name));
    } else {
        parts.push(flag.usage.clone());
    }
    parts.join(", ")
}
