//! Implementation of the `cidekit attach` command.
//!
//! Attaches a project descriptor to a CMakeLists.txt the user already has:
//! guesses a name from the file, picks a build directory next to it, and
//! asks the core for an attach plan.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use cidekit_adapters::{LocalFilesystem, detect_build_dir};
use cidekit_core::{
    application::ScaffoldService,
    domain::{NewlinePreference, ProjectName, ScaffoldMode, guess},
};

use crate::{
    cli::{AttachArgs, global::GlobalArgs},
    commands::common::{absolutize, confirm, show_plan, validate_project_name},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `cidekit attach` command.
#[instrument(skip_all, fields(cmake_file = %args.cmake_file.display()))]
pub fn execute(
    args: AttachArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. The file must exist before anything else is derived from it.
    let cmake_file = absolutize(&args.cmake_file)?;
    if !cmake_file.is_file() {
        return Err(CliError::AttachTargetMissing { path: cmake_file });
    }

    // 2. Project name: explicit flag, else guessed from the file text.
    let project_name = match args.name {
        Some(name) => name,
        None => {
            let text = read_lossy(&cmake_file)?;
            let guessed = guess::guess(&cmake_file, &text);
            if guessed.is_empty() {
                return Err(CliError::NameGuessFailed { path: cmake_file });
            }
            debug!(name = %guessed, "Guessed project name");
            guessed
        }
    };
    validate_project_name(&project_name)?;

    // 3. Build directory: explicit flag, else detected next to the file.
    let cmake_dir = cmake_file.parent().unwrap_or_else(|| Path::new(""));
    let build_dir = match args.build_dir {
        Some(dir) => absolutize(&dir)?,
        None => detect_build_dir(cmake_dir),
    };

    let newline: NewlinePreference = args.newline.map(Into::into).unwrap_or(config.newline);

    debug!(
        project = %project_name,
        build_dir = %build_dir.display(),
        newline = %newline,
        "Attach target resolved"
    );

    let name = ProjectName::new(project_name.as_str()).map_err(|e| CliError::Core(e.into()))?;
    let mode = ScaffoldMode::AttachExisting {
        cmake_file: cmake_file.clone(),
        build_dir,
    };
    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()));

    // 4. Preview + confirmation
    let plan = service
        .plan(&mode, &name, newline)
        .map_err(CliError::Core)?;

    if args.dry_run {
        output.info(&format!(
            "Dry run: would attach '{}' to {}",
            project_name,
            cmake_file.display(),
        ))?;
        show_plan(&plan, &output)?;
        return Ok(());
    }

    let descriptor = mode.descriptor_path(&name);
    if descriptor.exists() {
        output.warning(&format!(
            "'{}' already exists and will be overwritten",
            descriptor.display(),
        ))?;
    }

    if !global.quiet && !args.yes {
        output.header(&format!("Attaching '{project_name}'"))?;
        show_plan(&plan, &output)?;
        output.print("")?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    // 5. Scaffold
    info!(project = %project_name, "Attach started");
    service
        .scaffold(&mode, &name, newline)
        .map_err(CliError::Core)?;
    info!(project = %project_name, "Attach completed");

    output.success(&format!(
        "Descriptor '{}.cide' created next to {}",
        project_name,
        cmake_file.display(),
    ))?;

    Ok(())
}

/// Read a file as UTF-8, mapping malformed bytes to replacement characters.
///
/// The guesser only searches ASCII tokens, so lossy decoding never costs a
/// match.
fn read_lossy(path: &PathBuf) -> CliResult<String> {
    let bytes = std::fs::read(path).map_err(|e| CliError::IoError {
        message: format!("failed to read '{}'", path.display()),
        source: e,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_lossy_replaces_invalid_utf8() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("CMakeLists.txt");
        std::fs::write(&path, b"project(\xffDemo)").unwrap();

        let text = read_lossy(&path).unwrap();
        assert!(text.contains("Demo"));
        assert!(text.contains('\u{fffd}'));
    }
}
