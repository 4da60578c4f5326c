//! Domain and application layers of EasyEuler.
//!
//! - [`domain`]: problems, languages, the time formatter and verification
//!   results. Pure data and functions.
//! - [`application`]: the ports (traits) the outside world implements, and
//!   the services that drive them: [`VerifyService`](application::VerifyService),
//!   [`CreateService`](application::CreateService),
//!   [`ProblemService`](application::ProblemService) and
//!   [`ResourceService`](application::ResourceService).
//!
//! Nothing here touches the filesystem or spawns processes directly;
//! `easyeuler-adapters` supplies those implementations.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use easyeuler_core::{
//!     application::{ProblemStore, ProcessRunner, VerifyService},
//!     domain::{Language, LanguageRegistry},
//! };
//!
//! fn check(problems: Box<dyn ProblemStore>, runner: Box<dyn ProcessRunner>) {
//!     let registry = LanguageRegistry::new(vec![
//!         Language::new("python", "py").with_execute("python3 {path}"),
//!     ]);
//!     let service = VerifyService::new(problems, registry, runner);
//!     if let Some(job) = service.prepare("euler_001.py", None) {
//!         println!("{:?}", service.run(&job, true).verdict());
//!     }
//! }
//! ```

pub mod application;
pub mod domain;
pub mod error;
