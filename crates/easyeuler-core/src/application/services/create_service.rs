//! Create Service - write a solution file from a language template.

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateRenderer, TemplateStore},
    },
    domain::{Language, Problem, RenderContext},
    error::EulerResult,
};

/// Scaffolds solution files.
pub struct CreateService {
    templates: Box<dyn TemplateStore>,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl CreateService {
    pub fn new(
        templates: Box<dyn TemplateStore>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            templates,
            renderer,
            filesystem,
        }
    }

    /// `euler_<id:03>.<extension>`.
    pub fn default_path(problem: &Problem, language: &Language) -> PathBuf {
        PathBuf::from(format!("euler_{:03}.{}", problem.id, language.extension))
    }

    pub fn exists(&self, path: &Path) -> bool {
        self.filesystem.exists(path)
    }

    /// Render the language's template for `problem` and write it to `path`.
    ///
    /// Refuses to replace an existing file unless `overwrite` is set; the
    /// caller decides (prompt or `--force`).
    #[instrument(skip_all, fields(problem = problem.id, language = %language, path = %path.display()))]
    pub fn create(
        &self,
        problem: &Problem,
        language: &Language,
        path: &Path,
        overwrite: bool,
    ) -> EulerResult<()> {
        if !overwrite && self.filesystem.exists(path) {
            return Err(ApplicationError::FileExists {
                path: path.to_path_buf(),
            }
            .into());
        }

        let template = self.templates.get(language.template_name())?;
        let content = self
            .renderer
            .render(&template, &RenderContext::for_problem(problem))?;

        self.filesystem.write_file(path, &content)?;
        info!(bytes = content.len(), "Solution file written");
        Ok(())
    }
}
