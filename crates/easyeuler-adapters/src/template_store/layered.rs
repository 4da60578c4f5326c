//! Template store that layers user template directories over the built-ins.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use easyeuler_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::Template,
    error::EulerResult,
};
use tracing::{debug, instrument, warn};

use crate::builtin_templates;

/// Resolves a template name to the first `<dir>/<name>` file found in the
/// configured directories, falling back to the built-in template.
#[derive(Debug, Clone, Default)]
pub struct LayeredTemplateStore {
    directories: Vec<PathBuf>,
}

impl LayeredTemplateStore {
    /// Directories in priority order, highest first.
    pub fn new(directories: Vec<PathBuf>) -> Self {
        Self { directories }
    }

    /// Only the built-in templates.
    pub fn builtin() -> Self {
        Self::default()
    }

    fn read_user(&self, dir: &Path, name: &str) -> EulerResult<Option<Template>> {
        let path = dir.join(name);
        if !path.is_file() {
            return Ok(None);
        }
        let source =
            std::fs::read_to_string(&path).map_err(|e| ApplicationError::FilesystemError {
                path: path.clone(),
                reason: format!("Failed to read template: {e}"),
            })?;
        debug!(template = name, path = %path.display(), "Using user template");
        Ok(Some(Template::new(name, source)))
    }
}

impl TemplateStore for LayeredTemplateStore {
    #[instrument(skip(self))]
    fn get(&self, name: &str) -> EulerResult<Template> {
        for dir in &self.directories {
            if let Some(template) = self.read_user(dir, name)? {
                return Ok(template);
            }
        }

        builtin_templates::get(name).ok_or_else(|| {
            ApplicationError::TemplateNotFound {
                name: name.to_string(),
                available: self.names(),
            }
            .into()
        })
    }

    fn names(&self) -> Vec<String> {
        let mut names: BTreeSet<String> =
            builtin_templates::names().map(str::to_string).collect();

        for dir in &self.directories {
            let Ok(entries) = std::fs::read_dir(dir) else {
                continue;
            };
            for entry in entries {
                match entry {
                    Ok(entry) if entry.path().is_file() => {
                        names.insert(entry.file_name().to_string_lossy().into_owned());
                    }
                    Ok(_) => {}
                    Err(e) => warn!(dir = %dir.display(), error = %e, "Skipping unreadable entry"),
                }
            }
        }

        names.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn falls_back_to_builtin() {
        let store = LayeredTemplateStore::builtin();
        let template = store.get("python").unwrap();
        assert!(template.source.contains("{{DESCRIPTION}}"));
    }

    #[test]
    fn user_directory_shadows_builtin() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("python"), "# {{NAME}}\n").unwrap();

        let store = LayeredTemplateStore::new(vec![dir.path().to_path_buf()]);
        assert_eq!(store.get("python").unwrap().source, "# {{NAME}}\n");
    }

    #[test]
    fn earlier_directory_wins() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        std::fs::write(first.path().join("haskell"), "first").unwrap();
        std::fs::write(second.path().join("haskell"), "second").unwrap();

        let store = LayeredTemplateStore::new(vec![
            first.path().to_path_buf(),
            second.path().to_path_buf(),
        ]);
        assert_eq!(store.get("haskell").unwrap().source, "first");
    }

    #[test]
    fn missing_template_is_not_found() {
        let store = LayeredTemplateStore::new(vec![PathBuf::from("/nonexistent")]);
        let err = store.get("brainfuck").unwrap_err();
        assert_eq!(err.to_string(), "Template not found: brainfuck");
    }

    #[test]
    fn missing_template_lists_user_and_builtin_names() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("haskell"), "main = print 0").unwrap();
        std::fs::create_dir(dir.path().join("not-a-template")).unwrap();

        let store = LayeredTemplateStore::new(vec![dir.path().to_path_buf()]);
        let err = store.get("cobol").unwrap_err();
        let suggestions = err.suggestions();

        assert!(suggestions.iter().any(|s| s.contains("haskell")));
        assert!(suggestions.iter().any(|s| s.contains("python")));
        assert!(!suggestions.iter().any(|s| s.contains("not-a-template")));
    }
}
