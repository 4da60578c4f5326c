//! Core domain layer for EasyEuler.
//!
//! Pure logic only: no filesystem, no processes, no terminal. Everything
//! that touches the outside world goes through the ports in
//! `crate::application::ports`.
//!
//! - **Immutable records**: problems and languages never change after load
//! - **Explicit lookups**: stores and registries are passed in, never global
//! - **Results as data**: a failing build is a `VerificationResult`, not an error

pub mod duration;
pub mod error;
pub mod language;
pub mod problem;
pub mod template;
pub mod verification;

pub use duration::{MicroSign, format_duration, format_duration_with};
pub use error::{DomainError, ErrorCategory};
pub use language::{CommandTemplate, DEFAULT_EXECUTE, Language, LanguageRegistry, PATH_TOKEN};
pub use problem::{Difficulty, Problem, extract_problem_id, parse_problem_id};
pub use template::{DESCRIPTION_TEMPLATE, RenderContext, Template};
pub use verification::{
    CpuTime, ExecutionTime, ProcessOutput, Stage, StageOutput, VerificationResult, Verdict,
    strip_trailing_newline,
};
