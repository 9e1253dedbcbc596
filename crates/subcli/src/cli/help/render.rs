//! Help rendering functions.

use std::fmt;

use console::style;
use minijinja::Environment;
use serde::Serialize;
use subcli_dispatch::{AppInfo, Command, HelpRenderer, PlainHelp, Registry};
use thiserror::Error;
use tracing::error;

use super::config::{HelpConfig, HelpMode};
use super::data::{CommandHelpData, GlobalHelpData};

const GLOBAL_TEMPLATE: &str = include_str!("global.txt");
const COMMAND_TEMPLATE: &str = include_str!("command.txt");

const GLOBAL_NAME: &str = "global.txt";
const COMMAND_NAME: &str = "command.txt";

/// A help template failed to compile or render.
#[derive(Debug, Error)]
pub enum HelpError {
    #[error("{which} template: {source}")]
    Template {
        which: &'static str,
        #[source]
        source: minijinja::Error,
    },
}

/// [`HelpRenderer`] backed by minijinja templates.
///
/// Templates receive serializable view data and one filter, `heading`, which
/// bolds its input in styled mode and passes it through otherwise.
pub struct TemplateHelp {
    env: Environment<'static>,
    styled: bool,
}

impl TemplateHelp {
    /// Compiles the configured templates.
    ///
    /// A template that does not compile is logged and left out; requests for
    /// it are answered with [`PlainHelp`]. Use [`try_new`](Self::try_new) to
    /// reject it instead.
    pub fn new(config: &HelpConfig) -> Self {
        let (help, rejected) = Self::compile(config);
        if let Some(err) = rejected {
            error!(%err, "help template rejected, using plain help");
        }
        help
    }

    /// Compiles the configured templates, failing on the first invalid one.
    pub fn try_new(config: &HelpConfig) -> Result<Self, HelpError> {
        match Self::compile(config) {
            (help, None) => Ok(help),
            (_, Some(err)) => Err(err),
        }
    }

    /// Unstyled renderer with the built-in templates.
    pub fn plain() -> Self {
        Self::new(&HelpConfig::new().mode(HelpMode::Plain))
    }

    pub fn is_styled(&self) -> bool {
        self.styled
    }

    pub fn try_global_help(&self, registry: &Registry) -> Result<String, HelpError> {
        self.render(GLOBAL_NAME, &GlobalHelpData::extract(registry))
    }

    pub fn try_command_help(
        &self,
        info: &AppInfo,
        command: &Command,
        root: bool,
    ) -> Result<String, HelpError> {
        self.render(COMMAND_NAME, &CommandHelpData::extract(info, command, root))
    }

    fn compile(config: &HelpConfig) -> (Self, Option<HelpError>) {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);

        let styled = config.mode.is_styled();
        env.add_filter("heading", move |value: String| -> String {
            if styled {
                style(value).bold().force_styling(true).to_string()
            } else {
                value
            }
        });

        let sources = [
            (GLOBAL_NAME, config.global_template.as_deref().unwrap_or(GLOBAL_TEMPLATE)),
            (COMMAND_NAME, config.command_template.as_deref().unwrap_or(COMMAND_TEMPLATE)),
        ];
        let mut rejected = None;
        for (which, source) in sources {
            if let Err(source) = env.add_template_owned(which, source.to_string()) {
                if rejected.is_none() {
                    rejected = Some(HelpError::Template { which, source });
                }
            }
        }

        (Self { env, styled }, rejected)
    }

    fn render<T: Serialize>(&self, which: &'static str, data: &T) -> Result<String, HelpError> {
        let output = self
            .env
            .get_template(which)
            .and_then(|template| template.render(data))
            .map_err(|source| HelpError::Template { which, source })?;
        Ok(output.trim_end().to_string())
    }
}

impl fmt::Debug for TemplateHelp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateHelp")
            .field("styled", &self.styled)
            .finish_non_exhaustive()
    }
}

impl Default for TemplateHelp {
    fn default() -> Self {
        Self::new(&HelpConfig::default())
    }
}

impl HelpRenderer for TemplateHelp {
    fn global_help(&self, registry: &Registry) -> String {
        self.try_global_help(registry).unwrap_or_else(|err| {
            error!(%err, "help template failed, using plain help");
            PlainHelp.global_help(registry)
        })
    }

    fn command_help(&self, info: &AppInfo, command: &Command, root: bool) -> String {
        self.try_command_help(info, command, root)
            .unwrap_or_else(|err| {
                error!(%err, command = %command.name, "help template failed, using plain help");
                PlainHelp.command_help(info, command, root)
            })
    }
}
