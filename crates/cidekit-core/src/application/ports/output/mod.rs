//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `cidekit-adapters` crate provides implementations.

use crate::error::CidekitResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `cidekit_adapters::filesystem::LocalFilesystem` (production)
/// - `cidekit_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// The executor needs exactly two primitives. `create_dir_all` must be
/// idempotent (creating an existing tree is not an error) and `write_file`
/// must truncate-or-create, because re-running a scaffold over the same
/// directory is an overwrite, not a failure.
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> CidekitResult<()>;

    /// Write content to a file, truncating any previous content.
    fn write_file(&self, path: &Path, content: &str) -> CidekitResult<()>;
}
