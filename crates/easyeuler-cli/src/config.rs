//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only ever sees the
//! [`LanguageRegistry`] and paths derived from it.
//!
//! # Resolution order (lowest priority first)
//!
//! 1. Built-in defaults ([`DEFAULT_CONFIG`])
//! 2. User file: `<config dir>/config.toml`
//! 3. Project file: `./.easyeuler.toml`
//! 4. `--config FILE` (must exist)
//! 5. Environment variables: `EASYEULER__SECTION__KEY`
//!
//! Tables merge deeply, so a user `[languages.c]` that only sets `template`
//! keeps the built-in `extension` and commands. `<config dir>` is the
//! platform config directory (`~/.config/easyeuler` on Linux) unless
//! `EASYEULER_CONFIG_DIR` is set.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use easyeuler_core::domain::{Language, LanguageRegistry, MicroSign};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default configuration, also written out by `easyeuler init`.
pub const DEFAULT_CONFIG: &str = r#"# EasyEuler configuration.
#
# Commands are run through the shell; {path} is replaced with the path of
# the solution file being verified.

[defaults]
language = "python"

[output]
no_color = false
# Print "us" instead of "µs" in timings.
ascii = false

[data]
# problems = "/path/to/problems.json"
# resources = "/path/to/resources"

[templates]
# Searched in order before <config dir>/templates and the built-in templates.
paths = []

[languages.python]
extension = "py"
execute = "python3 {path}"

[languages.c]
extension = "c"
build = "cc -O2 -o {path}.out {path} -lm"
execute = "./{path}.out"
cleanup = "rm -f {path}.out"

[languages."c++"]
extension = "cpp"
template = "cpp"
build = "c++ -O2 -o {path}.out {path}"
execute = "./{path}.out"
cleanup = "rm -f {path}.out"

[languages.ruby]
extension = "rb"
execute = "ruby {path}"

[languages.javascript]
extension = "js"
execute = "node {path}"

[languages.rust]
extension = "rs"
build = "rustc -O -o {path}.out {path}"
execute = "./{path}.out"
cleanup = "rm -f {path}.out"

[languages.go]
extension = "go"
execute = "go run {path}"
"#;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Defaults for arguments left off the command line.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Problem and resource data locations.
    #[serde(default)]
    pub data: DataConfig,
    /// Template search paths.
    #[serde(default)]
    pub templates: TemplateConfig,
    /// Languages keyed by name.
    #[serde(default)]
    pub languages: BTreeMap<String, LanguageConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    pub language: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub no_color: bool,
    #[serde(default)]
    pub ascii: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataConfig {
    /// JSON problem file replacing the built-in set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problems: Option<PathBuf>,
    /// Directory holding resource files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateConfig {
    #[serde(default)]
    pub paths: Vec<PathBuf>,
}

/// One `[languages.<name>]` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageConfig {
    pub extension: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execute: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cleanup: Option<String>,
}

impl LanguageConfig {
    fn to_language(&self, name: &str) -> Language {
        let mut language = Language::new(name, self.extension.clone());
        if let Some(template) = &self.template {
            language = language.with_template(template.clone());
        }
        if let Some(build) = &self.build {
            language = language.with_build(build.clone());
        }
        if let Some(execute) = &self.execute {
            language = language.with_execute(execute.clone());
        }
        if let Some(cleanup) = &self.cleanup {
            language = language.with_cleanup(cleanup.clone());
        }
        language
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("built-in configuration is valid")
    }
}

impl AppConfig {
    /// Load the full cascade. `config_file` is the `--config` argument.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        Self::load_layers(
            Some(&Self::config_path()),
            Some(Path::new(".easyeuler.toml")),
            config_file.map(PathBuf::as_path),
        )
    }

    /// Merge the built-in defaults with the given optional file layers and
    /// the environment.
    pub fn load_layers(
        user: Option<&Path>,
        project: Option<&Path>,
        explicit: Option<&Path>,
    ) -> anyhow::Result<Self> {
        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        for optional in [user, project].into_iter().flatten() {
            debug!(path = %optional.display(), exists = optional.exists(), "Config layer");
            builder = builder.add_source(
                File::from(optional)
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }

        if let Some(path) = explicit {
            debug!(path = %path.display(), "Explicit config layer");
            builder = builder.add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(true),
            );
        }

        let config = builder
            .add_source(
                Environment::with_prefix("EASYEULER")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()
            .context("Failed to read configuration")?;

        config
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Directory holding the user config file, templates and resources.
    pub fn config_dir() -> PathBuf {
        if let Some(dir) = std::env::var_os("EASYEULER_CONFIG_DIR") {
            return PathBuf::from(dir);
        }
        directories::ProjectDirs::from("com", "easyeuler", "easyeuler")
            .map(|d| d.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from(".easyeuler"))
    }

    /// Path to the user configuration file.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Template directories, highest priority first.
    pub fn template_dirs(&self) -> Vec<PathBuf> {
        let mut dirs = self.templates.paths.clone();
        dirs.push(Self::config_dir().join("templates"));
        dirs
    }

    /// Directory `generate-resources` copies from.
    pub fn resources_dir(&self) -> PathBuf {
        self.data
            .resources
            .clone()
            .unwrap_or_else(|| Self::config_dir().join("resources"))
    }

    /// Every configured language, validated.
    pub fn language_registry(&self) -> anyhow::Result<LanguageRegistry> {
        let languages = self
            .languages
            .iter()
            .map(|(name, lang)| lang.to_language(name))
            .collect();
        LanguageRegistry::try_new(languages).context("Invalid language configuration")
    }

    pub fn micro_sign(&self) -> MicroSign {
        if self.output.ascii {
            MicroSign::Ascii
        } else {
            MicroSign::Unicode
        }
    }
}
