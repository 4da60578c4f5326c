//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "verify a solution" or "create a solution file".

pub mod create_service;
pub mod problem_service;
pub mod resource_service;
pub mod verify_service;

pub use create_service::CreateService;
pub use problem_service::{ProblemService, SortKey, list_entry};
pub use resource_service::{ResourceOutcome, ResourceService};
pub use verify_service::{VerifyJob, VerifyService};
