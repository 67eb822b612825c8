//! Implementation of the `cidekit new` command.
//!
//! Responsibility: translate CLI arguments into a `ScaffoldMode`, call the
//! core scaffold service, and display results. No business logic lives here.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use cidekit_adapters::LocalFilesystem;
use cidekit_core::{
    application::ScaffoldService,
    domain::{NewlinePreference, ProjectName, ScaffoldMode},
};

use crate::{
    cli::{NewArgs, global::GlobalArgs},
    commands::common::{absolutize, confirm, show_plan, validate_project_name},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `cidekit new` command.
///
/// Dispatch sequence:
/// 1. Split the NAME argument into project name and target directory
/// 2. Resolve the newline preference (flag beats config)
/// 3. Show the plan and confirm unless `--yes` or `--quiet`
/// 4. Early-exit if `--dry-run`
/// 5. Execute scaffolding via `ScaffoldService`
/// 6. Print next-steps guidance
#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Resolve project name and directory
    let (project_name, project_dir) = resolve_project_path(&args.name)?;
    validate_project_name(&project_name)?;
    let project_dir = absolutize(&project_dir)?;

    // 2. Newline preference: flag > config
    let newline: NewlinePreference = args.newline.map(Into::into).unwrap_or(config.newline);

    debug!(
        project = %project_name,
        dir = %project_dir.display(),
        newline = %newline,
        "New-project target resolved"
    );

    let name = ProjectName::new(project_name.as_str()).map_err(|e| CliError::Core(e.into()))?;
    let mode = ScaffoldMode::NewProject {
        project_dir: project_dir.clone(),
    };
    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()));

    // 3. Preview + confirmation
    let plan = service
        .plan(&mode, &name, newline)
        .map_err(CliError::Core)?;

    if args.dry_run {
        output.info(&format!(
            "Dry run: would create '{}' at {}",
            project_name,
            project_dir.display(),
        ))?;
        show_plan(&plan, &output)?;
        return Ok(());
    }

    if project_dir.exists() {
        output.warning(&format!(
            "'{}' already exists; generated files will be overwritten",
            project_dir.display(),
        ))?;
    }

    if !global.quiet && !args.yes {
        output.header(&format!("Creating '{project_name}'"))?;
        show_plan(&plan, &output)?;
        output.print("")?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    // 4. Scaffold
    info!(project = %project_name, path = %project_dir.display(), "Scaffold started");
    service
        .scaffold(&mode, &name, newline)
        .map_err(CliError::Core)?;
    info!(project = %project_name, "Scaffold completed");

    // 5. Success + next steps
    output.success(&format!("Project '{project_name}' created!"))?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", project_dir.display()))?;
        output.print("  cmake -S . -B build")?;
        output.print(&format!("  cmake --build build && ./build/{project_name}"))?;
    }

    Ok(())
}

// ── Path resolution ───────────────────────────────────────────────────────────

/// Split the NAME argument into the project name (the leaf component) and
/// the directory the project is created in (the whole path).
pub fn resolve_project_path(name: &str) -> CliResult<(String, PathBuf)> {
    let path = Path::new(name);

    let project_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| CliError::InvalidProjectName {
            name: name.into(),
            reason: "cannot extract valid project name".into(),
        })?
        .to_string();

    Ok((project_name, path.to_path_buf()))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_name_is_its_own_directory() {
        let (name, dir) = resolve_project_path("my-app").unwrap();
        assert_eq!(name, "my-app");
        assert_eq!(dir, PathBuf::from("my-app"));
    }

    #[test]
    fn relative_path_splits_leaf() {
        let (name, dir) = resolve_project_path("../my-app").unwrap();
        assert_eq!(name, "my-app");
        assert_eq!(dir, PathBuf::from("../my-app"));
    }

    #[test]
    fn nested_path_keeps_full_directory() {
        let (name, dir) = resolve_project_path("foo/bar/my-app").unwrap();
        assert_eq!(name, "my-app");
        assert_eq!(dir, PathBuf::from("foo/bar/my-app"));
    }

    #[test]
    fn trailing_parent_component_is_rejected() {
        assert!(resolve_project_path("..").is_err());
    }
}
