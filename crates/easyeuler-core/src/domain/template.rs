//! Templates and the variables they are rendered with.
//!
//! Templates use `{{KEY}}` placeholders. Solution templates are named after
//! a language (or its `template` override); problem descriptions use the
//! template named [`DESCRIPTION_TEMPLATE`].

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::domain::problem::Problem;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([A-Z_]+)\}\}").expect("placeholder pattern is valid"));

/// Name of the template `show` renders.
pub const DESCRIPTION_TEMPLATE: &str = "description";

/// A named template source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub name: String,
    pub source: String,
}

impl Template {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }
}

/// Context for template rendering.
///
/// ## Built-in Variables
///
/// | Variable | Example |
/// |----------|---------|
/// | `ID` | "7" |
/// | `ID_PADDED` | "007" |
/// | `NAME` | "10001st prime" |
/// | `DESCRIPTION` | problem text |
/// | `DIFFICULTY` | "5%" |
/// | `RESOURCES` | "names.txt, keys.txt" |
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_problem(problem: &Problem) -> Self {
        Self::new()
            .with_variable("ID", problem.id.to_string())
            .with_variable("ID_PADDED", format!("{:03}", problem.id))
            .with_variable("NAME", problem.name.clone())
            .with_variable("DESCRIPTION", problem.description.clone())
            .with_variable("DIFFICULTY", problem.difficulty.to_string())
            .with_variable("RESOURCES", problem.resources.join(", "))
    }

    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    /// Substitute every known `{{KEY}}` in one pass over `template`.
    ///
    /// Substituted values are never scanned again, so a description that
    /// contains `{{NAME}}` keeps it literally. Unknown placeholders are left
    /// alone.
    pub fn render(&self, template: &str) -> String {
        PLACEHOLDER
            .replace_all(template, |caps: &Captures<'_>| {
                match self.variables.get(&caps[1]) {
                    Some(value) => value.clone(),
                    None => caps[0].to_string(),
                }
            })
            .into_owned()
    }
}
