//! Implementations of the `easyeuler-core` ports: bundled problem data
//! and resources, the shell runner, layered templates and real or
//! in-memory filesystems.

pub mod builtin_resources;
pub mod builtin_templates;
pub mod filesystem;
pub mod problem_store;
pub mod renderer;
pub mod runner;
pub mod template_store;

pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use problem_store::InMemoryProblemStore;
pub use renderer::SimpleRenderer;
pub use runner::ShellRunner;
pub use template_store::LayeredTemplateStore;
