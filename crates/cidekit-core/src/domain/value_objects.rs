//! Value objects shared across the domain.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// A validated project name.
///
/// Invariant: never empty. Enforced at construction. Filename legality
/// (separators, leading dots) is the caller's concern; the host front-end
/// validates it before the domain is reached.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(String);

impl ProjectName {
    /// Fallible constructor; rejects the empty string.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::EmptyProjectName);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The build target produced for this project.
    ///
    /// The original tool never tries to discover the real target from an
    /// existing CMakeLists.txt; the binary simply shares the project name.
    pub fn binary_name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Newline convention applied to every generated file.
///
/// Owned by the host environment (one global preference), read once per
/// generation call and applied as a final transform over template output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewlinePreference {
    #[default]
    Lf,
    Crlf,
}

impl NewlinePreference {
    /// Rewrite `\n` to `\r\n` when the preference is CRLF.
    ///
    /// Templates are authored with bare `\n` throughout, so a single global
    /// replace cannot double a `\r`.
    pub fn apply(&self, text: String) -> String {
        match self {
            Self::Lf => text,
            Self::Crlf => text.replace('\n', "\r\n"),
        }
    }
}

impl fmt::Display for NewlinePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lf => write!(f, "lf"),
            Self::Crlf => write!(f, "crlf"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_name_rejects_empty() {
        assert_eq!(
            ProjectName::new("").unwrap_err(),
            DomainError::EmptyProjectName
        );
    }

    #[test]
    fn project_name_passes_through() {
        let name = ProjectName::new("Demo").unwrap();
        assert_eq!(name.as_str(), "Demo");
        assert_eq!(name.binary_name(), "Demo");
    }

    #[test]
    fn lf_leaves_text_untouched() {
        let text = "a\nb\n".to_string();
        assert_eq!(NewlinePreference::Lf.apply(text.clone()), text);
    }

    #[test]
    fn crlf_rewrites_every_newline() {
        let out = NewlinePreference::Crlf.apply("a\nb\n\n".into());
        assert_eq!(out, "a\r\nb\r\n\r\n");
    }

    #[test]
    fn crlf_output_has_no_bare_newline() {
        let out = NewlinePreference::Crlf.apply("name: x\nbuildDir: build\n".into());
        let bytes = out.as_bytes();
        for (i, b) in bytes.iter().enumerate() {
            if *b == b'\n' {
                assert_eq!(bytes[i - 1], b'\r', "bare \\n at byte {i}");
            }
        }
    }
}
