//! cidekit core - domain and application layers.
//!
//! This crate provides the project-bootstrapping logic for cidekit,
//! following a ports-and-adapters split: the domain computes *what* to
//! write, and the application executes plans through a filesystem port.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          cidekit-cli (CLI)              │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (ScaffoldService)             │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │          (Driven: Filesystem)           │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     cidekit-adapters (Infrastructure)   │
//! │    (LocalFilesystem, MemoryFilesystem)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (NameGuesser, planner, ScaffoldPlan)   │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cidekit_core::domain::{
//!     NewlinePreference, ProjectName, ScaffoldMode, build_plan,
//! };
//!
//! let mode = ScaffoldMode::NewProject { project_dir: "/tmp/demo".into() };
//! let name = ProjectName::new("demo").unwrap();
//! let plan = build_plan(&mode, &name, NewlinePreference::Lf).unwrap();
//! for file in plan.files() {
//!     println!("would write {}", file.path.display());
//! }
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{ScaffoldService, ports::Filesystem};
    pub use crate::domain::{
        DirectoryToCreate, FileToWrite, FsEntry, NewlinePreference, ProjectName, ScaffoldMode,
        ScaffoldPlan, build_plan, guess,
    };
    pub use crate::error::{CidekitError, CidekitResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
