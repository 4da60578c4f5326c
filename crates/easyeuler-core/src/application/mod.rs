//! Services and the ports they drive.
//!
//! Rules about problems, languages and verdicts live in `crate::domain`;
//! this layer sequences them and talks to the outside world only through
//! [`ports`].

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::{Filesystem, ProblemStore, ProcessRunner, TemplateRenderer, TemplateStore};
pub use services::{
    CreateService, ProblemService, ResourceService, SortKey, VerifyJob, VerifyService,
};
