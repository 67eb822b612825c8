use thiserror::Error;

/// Root domain error type.
///
/// Every variant is a refused input: plan construction never starts I/O,
/// so all of these are reported before anything touches the disk.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Input Errors
    // ========================================================================
    #[error("Project name is empty")]
    EmptyProjectName,

    #[error("No relative path from '{from}' to '{to}'")]
    PathNotRelatable { from: String, to: String },

    // ========================================================================
    // Plan Invariant Violations
    // ========================================================================
    #[error("Duplicate path in scaffold plan: {path}")]
    DuplicatePath { path: String },

    #[error("Plan entry escapes the supplied roots: {path}")]
    PathOutsideRoot { path: String },

    #[error("Directory entry ordered after files in scaffold plan: {path}")]
    MisorderedPlan { path: String },

    #[error("Scaffold plan is empty")]
    EmptyPlan,
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyProjectName => vec![
                "Enter a name for the project".into(),
                "In attach mode, pass --name when the CMakeLists.txt yields no guess".into(),
            ],
            Self::PathNotRelatable { from, to } => vec![
                format!("'{to}' cannot be reached from '{from}' with a relative path"),
                "Pick a build directory on the same drive as the CMakeLists.txt file".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyProjectName | Self::PathNotRelatable { .. } => ErrorCategory::Validation,
            Self::DuplicatePath { .. }
            | Self::PathOutsideRoot { .. }
            | Self::MisorderedPlan { .. }
            | Self::EmptyPlan => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
