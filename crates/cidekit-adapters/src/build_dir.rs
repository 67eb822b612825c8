//! Default build-directory detection for attach mode.

use std::path::{Path, PathBuf};

use tracing::debug;

/// Pick a default build directory next to an existing CMakeLists.txt.
///
/// Scans the immediate children of `cmake_dir` for the first directory
/// whose name starts with `build` (case-insensitive, in name order) so
/// that an already-configured tree keeps its `build`, `build-release`,
/// `Build` or similar. Falls back to `<cmake_dir>/build` when nothing
/// matches or the directory cannot be read.
///
/// This is only a pre-fill for the user-facing default; the plan itself
/// takes whatever directory the caller finally resolves.
pub fn detect_build_dir(cmake_dir: &Path) -> PathBuf {
    let mut names: Vec<String> = match std::fs::read_dir(cmake_dir) {
        Ok(entries) => entries
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().map(|t| t.is_dir()).unwrap_or(false))
            .filter_map(|e| e.file_name().into_string().ok())
            .collect(),
        Err(e) => {
            debug!(dir = %cmake_dir.display(), error = %e, "Could not scan for build directories");
            Vec::new()
        }
    };
    names.sort();

    for name in names {
        if name.to_ascii_lowercase().starts_with("build") {
            debug!(dir = %name, "Found existing build directory");
            return cmake_dir.join(name);
        }
    }

    cmake_dir.join("build")
}
