//! Templates compiled into the binary.
//!
//! One solution template per default language, plus the `description`
//! template used by `show`. User template directories shadow these by
//! file name.

use easyeuler_core::domain::{DESCRIPTION_TEMPLATE, Template};

const BUILTIN: &[(&str, &str)] = &[
    ("python", include_str!("../templates/python")),
    ("c", include_str!("../templates/c")),
    ("cpp", include_str!("../templates/cpp")),
    ("ruby", include_str!("../templates/ruby")),
    ("javascript", include_str!("../templates/javascript")),
    ("rust", include_str!("../templates/rust")),
    ("go", include_str!("../templates/go")),
    (DESCRIPTION_TEMPLATE, include_str!("../templates/description")),
];

/// Look up a built-in template by name.
pub fn get(name: &str) -> Option<Template> {
    BUILTIN
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(n, source)| Template::new(*n, *source))
}

/// Names of every built-in template.
pub fn names() -> impl Iterator<Item = &'static str> {
    BUILTIN.iter().map(|(name, _)| *name)
}
