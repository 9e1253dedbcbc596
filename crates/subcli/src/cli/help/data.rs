//! Help data extraction from the registry.
//!
//! Templates never see registry types directly. These view structs carry
//! exactly what the templates print, with column padding precomputed.

use serde::Serialize;
use subcli_dispatch::{
    column_padding, division_title, flag_label, group_by_division, invocation, AppInfo, Command,
    Registry,
};

#[derive(Debug, Serialize)]
pub(crate) struct GlobalHelpData {
    pub name: String,
    pub brief: String,
    pub groups: Vec<Group>,
    pub topics: Vec<ListItem>,
}

#[derive(Debug, Serialize)]
pub(crate) struct Group {
    pub title: String,
    pub commands: Vec<ListItem>,
}

/// One row of a name/brief list.
#[derive(Debug, Serialize)]
pub(crate) struct ListItem {
    pub name: String,
    pub padding: String,
    pub brief: String,
}

impl ListItem {
    fn new(name: &str, brief: &str) -> Self {
        Self {
            name: name.to_string(),
            padding: column_padding(name),
            brief: brief.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct CommandHelpData {
    /// `app` or `app command`.
    pub invocation: String,
    /// Invocation plus the command's usage, trailing space removed.
    pub usage_line: String,
    pub help: String,
    pub flags: Vec<FlagData>,
    pub examples: Vec<ExampleData>,
}

#[derive(Debug, Serialize)]
pub(crate) struct FlagData {
    pub label: String,
    pub help: String,
    pub has_default: bool,
    pub default: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct ExampleData {
    pub usecase: String,
    pub description: String,
}

impl GlobalHelpData {
    pub fn extract(registry: &Registry) -> Self {
        let groups = group_by_division(&registry.commands)
            .into_iter()
            .map(|(division, commands)| Group {
                title: division_title(division).to_string(),
                commands: commands
                    .into_iter()
                    .map(|cmd| ListItem::new(&cmd.name, &cmd.brief))
                    .collect(),
            })
            .collect();

        Self {
            name: registry.info.name.clone(),
            brief: registry.info.brief.clone(),
            groups,
            topics: registry
                .topics
                .iter()
                .map(|topic| ListItem::new(&topic.name, &topic.brief))
                .collect(),
        }
    }
}

impl CommandHelpData {
    pub fn extract(info: &AppInfo, command: &Command, root: bool) -> Self {
        let invocation = invocation(info, command, root);
        let usage_line = format!("{} {}", invocation, command.usage)
            .trim_end()
            .to_string();

        Self {
            invocation,
            usage_line,
            help: command.help.clone(),
            flags: command
                .flags
                .iter()
                .map(|flag| FlagData {
                    label: flag_label(flag),
                    help: flag.help.clone(),
                    has_default: flag.default_value.is_some(),
                    default: flag.default_value.clone().unwrap_or_default(),
                })
                .collect(),
            examples: command
                .examples
                .iter()
                .map(|example| ExampleData {
                    usecase: example.usecase.clone(),
                    description: example.description.clone(),
                })
                .collect(),
        }
    }
}
