//! Resource files compiled into the binary.
//!
//! Files in the user's resources directory shadow these by name.

const BUILTIN: &[(&str, &str)] = &[(
    "p008_number.txt",
    include_str!("../data/resources/p008_number.txt"),
)];

/// Every built-in resource as `(name, contents)`.
pub fn all() -> impl Iterator<Item = (&'static str, &'static str)> {
    BUILTIN.iter().copied()
}
