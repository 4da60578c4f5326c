//! Template store adapters.

mod layered;

pub use layered::LayeredTemplateStore;
