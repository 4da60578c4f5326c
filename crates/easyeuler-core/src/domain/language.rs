//! Language descriptors and the registry used to resolve them.
//!
//! A [`Language`] says how a solution file is built, run and cleaned up.
//! Each step is a shell command template with a single `{path}` token.
//! Templates come from the user's configuration and are trusted as-is.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::verification::Stage;

/// The literal substitution token inside a command template.
pub const PATH_TOKEN: &str = "{path}";

/// Execute template used when a language does not define one.
pub const DEFAULT_EXECUTE: &str = "./{path}";

/// A shell command line containing the `{path}` substitution point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommandTemplate(String);

impl CommandTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    /// Substitute `path` into the template. The rest of the string is opaque.
    pub fn render(&self, path: &str) -> String {
        self.0.replace(PATH_TOKEN, path)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CommandTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_EXECUTE)
    }
}

impl fmt::Display for CommandTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How to build, run and clean up solution files of one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    pub extension: String,
    /// Solution template name; the language name when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build: Option<CommandTemplate>,
    #[serde(default)]
    pub execute: CommandTemplate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cleanup: Option<CommandTemplate>,
}

impl Language {
    pub fn new(name: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extension: extension.into(),
            template: None,
            build: None,
            execute: CommandTemplate::default(),
            cleanup: None,
        }
    }

    /// The no-op language: no build or cleanup, executes `./{path}`.
    pub fn fallback() -> Self {
        Self::new("", "")
    }

    pub fn with_build(mut self, template: impl Into<String>) -> Self {
        self.build = Some(CommandTemplate::new(template));
        self
    }

    pub fn with_execute(mut self, template: impl Into<String>) -> Self {
        self.execute = CommandTemplate::new(template);
        self
    }

    pub fn with_cleanup(mut self, template: impl Into<String>) -> Self {
        self.cleanup = Some(CommandTemplate::new(template));
        self
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// The command template for `stage`. Execute is always present.
    pub fn command(&self, stage: Stage) -> Option<&CommandTemplate> {
        match stage {
            Stage::Build => self.build.as_ref(),
            Stage::Execute => Some(&self.execute),
            Stage::Cleanup => self.cleanup.as_ref(),
        }
    }

    /// Name of the solution template used by `create`.
    pub fn template_name(&self) -> &str {
        self.template.as_deref().unwrap_or(&self.name)
    }

    fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::InvalidLanguage {
                name: self.name.clone(),
                reason: "name must not be empty".into(),
            });
        }
        if self.extension.starts_with('.') {
            return Err(DomainError::InvalidLanguage {
                name: self.name.clone(),
                reason: format!("extension '{}' must not start with '.'", self.extension),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            f.write_str("(none)")
        } else {
            f.write_str(&self.name)
        }
    }
}

/// Read-only lookup of languages by name or by file extension.
///
/// Built once at startup; both indexes are computed up front.
#[derive(Debug, Clone, Default)]
pub struct LanguageRegistry {
    languages: Vec<Language>,
    by_name: HashMap<String, usize>,
    by_extension: HashMap<String, usize>,
}

impl LanguageRegistry {
    /// Build a registry. When two languages share an extension, the first
    /// one in `languages` wins extension lookups.
    pub fn new(languages: Vec<Language>) -> Self {
        let mut by_name = HashMap::with_capacity(languages.len());
        let mut by_extension = HashMap::with_capacity(languages.len());

        for (idx, language) in languages.iter().enumerate() {
            by_name.insert(language.name.clone(), idx);
            by_extension.entry(language.extension.clone()).or_insert(idx);
        }

        Self {
            languages,
            by_name,
            by_extension,
        }
    }

    /// Validating constructor used when languages come from configuration.
    pub fn try_new(languages: Vec<Language>) -> Result<Self, DomainError> {
        for language in &languages {
            language.validate()?;
        }
        Ok(Self::new(languages))
    }

    pub fn by_name(&self, name: &str) -> Option<&Language> {
        self.by_name.get(name).map(|&idx| &self.languages[idx])
    }

    /// Look up by extension, with or without the leading dot.
    pub fn by_extension(&self, extension: &str) -> Option<&Language> {
        let extension = extension.strip_prefix('.').unwrap_or(extension);
        if extension.is_empty() {
            return None;
        }
        self.by_extension
            .get(extension)
            .map(|&idx| &self.languages[idx])
    }

    /// Resolve a name, producing an error that lists the alternatives.
    pub fn require(&self, name: &str) -> Result<&Language, DomainError> {
        self.by_name(name).ok_or_else(|| DomainError::UnknownLanguage {
            name: name.to_string(),
            available: self.names(),
        })
    }

    /// Sorted language names.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.languages.iter().map(|l| l.name.clone()).collect();
        names.sort();
        names
    }
}
