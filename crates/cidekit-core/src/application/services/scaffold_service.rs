//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the scaffolding workflow:
//! 1. Build the plan (pure, in the domain layer)
//! 2. Validate its invariants
//! 3. Execute it through the filesystem port, in plan order
//!
//! Execution stops at the first I/O failure and surfaces it; there is no
//! rollback, so entries written before the failure remain on disk.

use tracing::{debug, info, instrument};

use crate::{
    application::ports::Filesystem,
    domain::{self, FsEntry, NewlinePreference, ProjectName, ScaffoldMode, ScaffoldPlan},
    error::CidekitResult,
};

/// Main scaffolding service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service writing through the given adapter.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Compute the plan without touching the filesystem.
    ///
    /// This is what `--dry-run` shows; it is also the first half of
    /// [`Self::scaffold`], so a previewed plan and the executed one are
    /// always identical for the same inputs.
    pub fn plan(
        &self,
        mode: &ScaffoldMode,
        name: &ProjectName,
        newline: NewlinePreference,
    ) -> CidekitResult<ScaffoldPlan> {
        let plan = domain::build_plan(mode, name, newline)?;
        plan.validate()?;
        Ok(plan)
    }

    /// Scaffold a project: plan, validate, then write everything.
    #[instrument(skip_all, fields(mode = %mode, project = %name))]
    pub fn scaffold(
        &self,
        mode: &ScaffoldMode,
        name: &ProjectName,
        newline: NewlinePreference,
    ) -> CidekitResult<ScaffoldPlan> {
        let plan = self.plan(mode, name, newline)?;
        info!(
            directories = plan.directories().count(),
            files = plan.files().count(),
            "Scaffold plan computed"
        );

        self.execute(&plan)?;

        info!("Scaffold completed successfully");
        Ok(plan)
    }

    /// Materialize a plan in entry order, aborting on the first failure.
    fn execute(&self, plan: &ScaffoldPlan) -> CidekitResult<()> {
        for entry in plan.entries() {
            match entry {
                FsEntry::Directory(dir) => {
                    debug!(path = %dir.path.display(), "Creating directory");
                    self.filesystem.create_dir_all(&dir.path)?;
                }
                FsEntry::File(file) => {
                    debug!(path = %file.path.display(), bytes = file.size(), "Writing file");
                    self.filesystem.write_file(&file.path, &file.content)?;
                }
            }
        }
        Ok(())
    }
}
