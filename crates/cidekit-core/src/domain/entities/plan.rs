use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::error::DomainError;

/// The full set of filesystem operations a scaffold will perform.
///
/// Computed before any I/O happens so a caller can preview or validate it,
/// then handed to an executor exactly once. Directories come first in entry
/// order; files that live inside them follow.
#[derive(Debug, Clone)]
pub struct ScaffoldPlan {
    roots: Vec<PathBuf>,
    entries: Vec<FsEntry>,
}

impl ScaffoldPlan {
    /// Start an empty plan rooted at the caller-supplied directories.
    ///
    /// Roots are the directories the caller resolved up front (project dir,
    /// cmake dir, build dir); every entry added later must stay inside them.
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self {
            roots,
            entries: Vec::new(),
        }
    }

    pub fn add_directory(&mut self, path: impl Into<PathBuf>) {
        self.entries
            .push(FsEntry::Directory(DirectoryToCreate { path: path.into() }));
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, content: String) {
        self.entries.push(FsEntry::File(FileToWrite {
            path: path.into(),
            content,
        }));
    }

    /// Check the plan's structural invariants.
    ///
    /// - at least one entry
    /// - no duplicate paths
    /// - directories precede all files
    /// - every entry sits inside a root or inside a directory the plan
    ///   itself creates
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.entries.is_empty() {
            return Err(DomainError::EmptyPlan);
        }

        let mut seen = HashSet::new();
        let mut seen_file = false;
        for entry in &self.entries {
            let path = entry.path();

            if !seen.insert(path.to_path_buf()) {
                return Err(DomainError::DuplicatePath {
                    path: path.display().to_string(),
                });
            }

            match entry {
                FsEntry::Directory(_) if seen_file => {
                    return Err(DomainError::MisorderedPlan {
                        path: path.display().to_string(),
                    });
                }
                FsEntry::Directory(_) => {}
                FsEntry::File(_) => seen_file = true,
            }

            if !self.is_contained(path) {
                return Err(DomainError::PathOutsideRoot {
                    path: path.display().to_string(),
                });
            }
        }

        Ok(())
    }

    fn is_contained(&self, path: &Path) -> bool {
        self.roots.iter().any(|root| path.starts_with(root))
            || self.directories().any(|dir| path.starts_with(&dir.path))
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    pub fn entries(&self) -> &[FsEntry] {
        &self.entries
    }

    pub fn directories(&self) -> impl Iterator<Item = &DirectoryToCreate> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::Directory(d) => Some(d),
            _ => None,
        })
    }

    pub fn files(&self) -> impl Iterator<Item = &FileToWrite> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::File(f) => Some(f),
            _ => None,
        })
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Debug, Clone)]
pub enum FsEntry {
    Directory(DirectoryToCreate),
    File(FileToWrite),
}

impl FsEntry {
    pub fn path(&self) -> &Path {
        match self {
            Self::Directory(d) => &d.path,
            Self::File(f) => &f.path,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DirectoryToCreate {
    pub path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct FileToWrite {
    pub path: PathBuf,
    pub content: String,
}

impl FileToWrite {
    pub fn size(&self) -> usize {
        self.content.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rooted(root: &str) -> ScaffoldPlan {
        ScaffoldPlan::new(vec![PathBuf::from(root)])
    }

    #[test]
    fn empty_plan_is_invalid() {
        assert_eq!(rooted("/tmp/x").validate(), Err(DomainError::EmptyPlan));
    }

    #[test]
    fn duplicate_paths_rejected() {
        let mut plan = rooted("/tmp/x");
        plan.add_directory("/tmp/x");
        plan.add_file("/tmp/x/a.cide", String::new());
        plan.add_file("/tmp/x/a.cide", String::new());
        assert!(matches!(
            plan.validate(),
            Err(DomainError::DuplicatePath { .. })
        ));
    }

    #[test]
    fn file_outside_roots_rejected() {
        let mut plan = rooted("/tmp/x");
        plan.add_directory("/tmp/x");
        plan.add_file("/etc/evil.cide", String::new());
        assert!(matches!(
            plan.validate(),
            Err(DomainError::PathOutsideRoot { .. })
        ));
    }

    #[test]
    fn file_inside_created_directory_accepted() {
        let mut plan = rooted("/tmp/x");
        plan.add_directory("/tmp/x/src/demo");
        plan.add_file("/tmp/x/src/demo/main.cc", String::new());
        assert!(plan.validate().is_ok());
    }

    #[test]
    fn directory_after_file_rejected() {
        let mut plan = rooted("/tmp/x");
        plan.add_file("/tmp/x/a.cide", String::new());
        plan.add_directory("/tmp/x/build");
        assert!(plan.validate().is_err());
    }

    #[test]
    fn iterators_split_by_kind() {
        let mut plan = rooted("/tmp/x");
        plan.add_directory("/tmp/x");
        plan.add_directory("/tmp/x/build");
        plan.add_file("/tmp/x/a.cide", "name: a\n".into());
        assert_eq!(plan.directories().count(), 2);
        assert_eq!(plan.files().count(), 1);
        assert_eq!(plan.entry_count(), 3);
    }
}
