//! Traits the services need implemented. Only driven (output) ports exist;
//! the CLI calls services directly.

pub mod output;

pub use output::{Filesystem, ProblemStore, ProcessRunner, TemplateRenderer, TemplateStore};
