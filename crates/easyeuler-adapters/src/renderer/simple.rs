//! `{{KEY}}` substitution.

use easyeuler_core::{
    application::ports::TemplateRenderer,
    domain::{RenderContext, Template},
    error::EulerResult,
};
use tracing::instrument;

/// Replaces every known `{{KEY}}`; unknown keys stay as written.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRenderer;

impl SimpleRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for SimpleRenderer {
    #[instrument(skip_all, fields(template = %template.name))]
    fn render(&self, template: &Template, context: &RenderContext) -> EulerResult<String> {
        Ok(context.render(&template.source))
    }
}
