//! Core domain layer for cidekit.
//!
//! Pure business logic: name guessing, plan construction, and the path
//! arithmetic they share. No filesystem, network, or external calls —
//! all I/O goes through ports defined in the application layer.

pub mod entities;
pub mod error;
pub mod guess;
pub mod paths;
pub mod planner;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{
    mode::ScaffoldMode,
    plan::{DirectoryToCreate, FileToWrite, FsEntry, ScaffoldPlan},
};

pub use error::{DomainError, ErrorCategory};
pub use planner::build_plan;
pub use value_objects::{NewlinePreference, ProjectName};
