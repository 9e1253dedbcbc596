//! Template-based help rendering.
//!
//! [`TemplateHelp`] implements the dispatcher's
//! [`HelpRenderer`](subcli_dispatch::HelpRenderer) with minijinja templates.
//! The default templates reproduce the plain layout exactly; styled mode
//! only adds bold headings.

mod config;
mod data;
mod render;

pub use config::{HelpConfig, HelpMode};
pub use render::{HelpError, TemplateHelp};
