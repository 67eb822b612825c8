//! Helpers shared by the scaffolding commands.

use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};

use cidekit_core::domain::ScaffoldPlan;

use crate::{
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Reject names the filesystem (or the descriptor format) cannot take.
///
/// The domain only insists on non-empty; everything filename-shaped is
/// checked here, before the core is reached.
pub fn validate_project_name(name: &str) -> CliResult<()> {
    if name.is_empty() {
        return Err(CliError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot be empty".into(),
        });
    }
    if name.starts_with('.') {
        return Err(CliError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot start with '.'".into(),
        });
    }
    if name.contains('/') || name.contains('\\') {
        return Err(CliError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot contain path separators".into(),
        });
    }
    Ok(())
}

/// Make a path absolute against the current directory and fold away
/// `.`/`..` components, without touching the filesystem.
///
/// Plan construction relates paths lexically, so both sides must arrive
/// pre-resolved.
pub fn absolutize(path: &Path) -> CliResult<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        let cwd = std::env::current_dir().map_err(|e| CliError::IoError {
            message: "failed to read the current directory".into(),
            source: e,
        })?;
        cwd.join(path)
    };

    let mut out = PathBuf::new();
    for comp in absolute.components() {
        match comp {
            Component::ParentDir => {
                out.pop();
            }
            Component::CurDir => {}
            other => out.push(other),
        }
    }
    Ok(out)
}

/// Render a plan for `--dry-run` and the confirmation preview.
pub fn show_plan(plan: &ScaffoldPlan, out: &OutputManager) -> CliResult<()> {
    out.print("Directories:")?;
    for dir in plan.directories() {
        out.print(&format!("  {}", dir.path.display()))?;
    }
    out.print("Files:")?;
    for file in plan.files() {
        out.print(&format!("  {}  ({} bytes)", file.path.display(), file.size()))?;
    }
    Ok(())
}

/// Ask the user to proceed; Enter defaults to yes.
pub fn confirm() -> CliResult<bool> {
    print!("Continue? [Y/n] ");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e,
        })?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
