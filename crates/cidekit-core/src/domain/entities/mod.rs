//! Domain entities.

pub mod mode;
pub mod plan;

pub use mode::ScaffoldMode;
pub use plan::{DirectoryToCreate, FileToWrite, FsEntry, ScaffoldPlan};
