//! Integration tests for cidekit-core.
//!
//! The service is exercised through a recording filesystem double, so the
//! whole plan-then-execute pipeline runs without touching a real disk.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use cidekit_core::{
    application::{ApplicationError, ScaffoldService, ports::Filesystem},
    domain::{NewlinePreference, ProjectName, ScaffoldMode},
    error::CidekitResult,
};

/// Records every operation; optionally fails on one configured path.
#[derive(Clone, Default)]
struct RecordingFs {
    inner: Arc<Mutex<Recorded>>,
    fail_on: Option<PathBuf>,
}

#[derive(Default)]
struct Recorded {
    dirs: Vec<PathBuf>,
    files: BTreeMap<PathBuf, String>,
}

impl RecordingFs {
    fn failing_on(path: impl Into<PathBuf>) -> Self {
        Self {
            fail_on: Some(path.into()),
            ..Self::default()
        }
    }

    fn dirs(&self) -> Vec<PathBuf> {
        self.inner.lock().unwrap().dirs.clone()
    }

    fn files(&self) -> BTreeMap<PathBuf, String> {
        self.inner.lock().unwrap().files.clone()
    }

    fn check(&self, path: &Path) -> CidekitResult<()> {
        if self.fail_on.as_deref() == Some(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "injected failure".into(),
            }
            .into());
        }
        Ok(())
    }
}

impl Filesystem for RecordingFs {
    fn create_dir_all(&self, path: &Path) -> CidekitResult<()> {
        self.check(path)?;
        self.inner.lock().unwrap().dirs.push(path.to_path_buf());
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> CidekitResult<()> {
        self.check(path)?;
        self.inner
            .lock()
            .unwrap()
            .files
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}

fn new_project_mode(dir: &str) -> ScaffoldMode {
    ScaffoldMode::NewProject {
        project_dir: PathBuf::from(dir),
    }
}

#[test]
fn new_project_writes_full_scaffold() {
    let fs = RecordingFs::default();
    let service = ScaffoldService::new(Box::new(fs.clone()));

    let name = ProjectName::new("demo").unwrap();
    service
        .scaffold(&new_project_mode("/work/demo"), &name, NewlinePreference::Lf)
        .unwrap();

    assert_eq!(
        fs.dirs(),
        vec![
            PathBuf::from("/work/demo"),
            PathBuf::from("/work/demo/src/demo"),
            PathBuf::from("/work/demo/build"),
        ]
    );

    let files = fs.files();
    assert!(files[&PathBuf::from("/work/demo/demo.cide")].contains("buildTarget: demo\n"));
    assert!(files[&PathBuf::from("/work/demo/CMakeLists.txt")].contains("project(demo)"));
    assert!(files[&PathBuf::from("/work/demo/src/demo/main.cc")].starts_with("int main(int argc"));
}

#[test]
fn directories_are_created_before_files_are_written() {
    // Fail on the first file: by then every directory must already exist.
    let fs = RecordingFs::failing_on("/work/demo/demo.cide");
    let service = ScaffoldService::new(Box::new(fs.clone()));

    let name = ProjectName::new("demo").unwrap();
    let err = service
        .scaffold(&new_project_mode("/work/demo"), &name, NewlinePreference::Lf)
        .unwrap_err();
    assert!(err.to_string().contains("/work/demo/demo.cide"));

    assert_eq!(fs.dirs().len(), 3);
    // Nothing at or after the failing entry was written.
    assert!(fs.files().is_empty());
}

#[test]
fn failure_mid_plan_keeps_earlier_writes() {
    let fs = RecordingFs::failing_on("/work/demo/CMakeLists.txt");
    let service = ScaffoldService::new(Box::new(fs.clone()));

    let name = ProjectName::new("demo").unwrap();
    assert!(
        service
            .scaffold(&new_project_mode("/work/demo"), &name, NewlinePreference::Lf)
            .is_err()
    );

    // The descriptor was written before the failure and is not rolled back.
    let files = fs.files();
    assert!(files.contains_key(&PathBuf::from("/work/demo/demo.cide")));
    assert!(!files.contains_key(&PathBuf::from("/work/demo/src/demo/main.cc")));
}

#[test]
fn scaffolding_twice_produces_identical_content() {
    let fs = RecordingFs::default();
    let service = ScaffoldService::new(Box::new(fs.clone()));

    let name = ProjectName::new("demo").unwrap();
    let mode = new_project_mode("/work/demo");

    service
        .scaffold(&mode, &name, NewlinePreference::Lf)
        .unwrap();
    let first = fs.files();

    service
        .scaffold(&mode, &name, NewlinePreference::Lf)
        .unwrap();
    assert_eq!(first, fs.files());
}

#[test]
fn attach_writes_only_descriptor_and_build_dir() {
    let fs = RecordingFs::default();
    let service = ScaffoldService::new(Box::new(fs.clone()));

    let mode = ScaffoldMode::AttachExisting {
        cmake_file: PathBuf::from("/repo/CMakeLists.txt"),
        build_dir: PathBuf::from("/repo/build"),
    };
    let name = ProjectName::new("repo-app").unwrap();
    service
        .scaffold(&mode, &name, NewlinePreference::Lf)
        .unwrap();

    assert_eq!(fs.dirs(), vec![PathBuf::from("/repo/build")]);
    let files = fs.files();
    assert_eq!(files.len(), 1);
    assert!(files[&PathBuf::from("/repo/repo-app.cide")].contains("runCmd: ./repo-app\n"));
}

#[test]
fn plan_matches_what_scaffold_executes() {
    let fs = RecordingFs::default();
    let service = ScaffoldService::new(Box::new(fs.clone()));

    let mode = new_project_mode("/work/demo");
    let name = ProjectName::new("demo").unwrap();

    let preview = service.plan(&mode, &name, NewlinePreference::Crlf).unwrap();
    service
        .scaffold(&mode, &name, NewlinePreference::Crlf)
        .unwrap();

    let written = fs.files();
    for file in preview.files() {
        assert_eq!(written.get(&file.path), Some(&file.content));
    }
}
