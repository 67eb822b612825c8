use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::ProjectName;

/// What kind of scaffold the caller asked for.
///
/// The two variants share no state and differ only in which files and
/// directories get produced; plan construction dispatches on this once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldMode {
    /// Start a project from nothing in `project_dir`.
    NewProject { project_dir: PathBuf },

    /// Attach a project descriptor to an existing CMakeLists.txt file,
    /// pointing it at `build_dir`.
    AttachExisting {
        cmake_file: PathBuf,
        build_dir: PathBuf,
    },
}

impl ScaffoldMode {
    /// Directory the project descriptor lands in.
    pub fn descriptor_dir(&self) -> &Path {
        match self {
            Self::NewProject { project_dir } => project_dir,
            Self::AttachExisting { cmake_file, .. } => {
                cmake_file.parent().unwrap_or_else(|| Path::new(""))
            }
        }
    }

    /// Full path of the `<name>.cide` descriptor for this mode.
    pub fn descriptor_path(&self, name: &ProjectName) -> PathBuf {
        self.descriptor_dir().join(format!("{name}.cide"))
    }
}

impl fmt::Display for ScaffoldMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NewProject { project_dir } => {
                write!(f, "new project in {}", project_dir.display())
            }
            Self::AttachExisting { cmake_file, .. } => {
                write!(f, "attach to {}", cmake_file.display())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_lives_next_to_cmake_file() {
        let mode = ScaffoldMode::AttachExisting {
            cmake_file: PathBuf::from("/proj/CMakeLists.txt"),
            build_dir: PathBuf::from("/proj/build"),
        };
        let name = ProjectName::new("demo").unwrap();
        assert_eq!(
            mode.descriptor_path(&name),
            PathBuf::from("/proj/demo.cide")
        );
    }

    #[test]
    fn descriptor_lives_in_project_dir_for_new() {
        let mode = ScaffoldMode::NewProject {
            project_dir: PathBuf::from("/tmp/x"),
        };
        let name = ProjectName::new("Demo").unwrap();
        assert_eq!(mode.descriptor_path(&name), PathBuf::from("/tmp/x/Demo.cide"));
    }
}
