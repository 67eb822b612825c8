//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use cidekit_core::{
    application::{ApplicationError, ports::Filesystem},
    error::CidekitResult,
};

/// In-memory filesystem for testing.
///
/// Clones share storage, so a test can hand one clone to the service and
/// inspect results through another.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// Check if path exists as a file or directory.
    pub fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        inner.files.keys().cloned().collect()
    }

    /// Clear all contents.
    pub fn clear(&self) {
        let mut inner = self.inner.write().unwrap();
        inner.files.clear();
        inner.directories.clear();
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> CidekitResult<()> {
        let mut inner = self.inner.write().expect("memory filesystem poisoned");

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> CidekitResult<()> {
        let mut inner = self.inner.write().expect("memory filesystem poisoned");

        // Mirror the real filesystem: writing into a directory that was
        // never created fails.
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dir_all_registers_every_ancestor() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/a/b/c")).unwrap();
        assert!(fs.exists(Path::new("/a")));
        assert!(fs.exists(Path::new("/a/b")));
        assert!(fs.exists(Path::new("/a/b/c")));
    }

    #[test]
    fn write_requires_parent_directory() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("/nope/file.txt"), "x").is_err());

        fs.create_dir_all(Path::new("/ok")).unwrap();
        fs.write_file(Path::new("/ok/file.txt"), "x").unwrap();
        assert_eq!(fs.read_file(Path::new("/ok/file.txt")).as_deref(), Some("x"));
    }

    #[test]
    fn write_overwrites_existing_content() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/d")).unwrap();
        fs.write_file(Path::new("/d/f"), "first").unwrap();
        fs.write_file(Path::new("/d/f"), "second").unwrap();
        assert_eq!(fs.read_file(Path::new("/d/f")).as_deref(), Some("second"));
    }

    #[test]
    fn clones_share_storage() {
        let fs = MemoryFilesystem::new();
        let view = fs.clone();
        fs.create_dir_all(Path::new("/shared")).unwrap();
        assert!(view.exists(Path::new("/shared")));
    }
}
