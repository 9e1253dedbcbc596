//! Help rendering configuration.

/// When help headings are styled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HelpMode {
    /// Style headings when the terminal supports colors.
    #[default]
    Auto,
    /// Always emit ANSI styling.
    Styled,
    /// Never emit ANSI styling.
    Plain,
}

impl HelpMode {
    /// Resolves `Auto` against the current terminal.
    pub fn is_styled(self) -> bool {
        match self {
            HelpMode::Auto => console::colors_enabled(),
            HelpMode::Styled => true,
            HelpMode::Plain => false,
        }
    }
}

/// Configuration for help rendering.
///
/// Templates are minijinja sources. `None` uses the built-in template.
#[derive(Debug, Clone, Default)]
pub struct HelpConfig {
    /// Template for the application overview (`app help`).
    pub global_template: Option<String>,
    /// Template for a single command (`app help <command>`).
    pub command_template: Option<String>,
    pub mode: HelpMode,
}

impl HelpConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn global_template(mut self, source: impl Into<String>) -> Self {
        self.global_template = Some(source.into());
        self
    }

    pub fn command_template(mut self, source: impl Into<String>) -> Self {
        self.command_template = Some(source.into());
        self
    }

    pub fn mode(mut self, mode: HelpMode) -> Self {
        self.mode = mode;
        self
    }
}
