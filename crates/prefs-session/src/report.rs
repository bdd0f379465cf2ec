//! Load warnings reported to the host.

use std::fmt;
use std::path::{Path, PathBuf};

/// How serious a load warning is.
///
/// The distinction is presentational: neither severity stops a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// One problem encountered while loading the preferences file.
///
/// Warnings are collected rather than returned as errors: the load itself
/// always completes with a usable [`Preferences`](prefs_model::Preferences).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadWarning {
    pub severity: Severity,
    pub path: PathBuf,
    pub message: String,
}

impl LoadWarning {
    pub(crate) fn file_missing(path: &Path) -> Self {
        Self {
            severity: Severity::Error,
            path: path.to_path_buf(),
            message: "Cannot open preferences file, defaults will be used".to_string(),
        }
    }

    pub(crate) fn invalid_format(path: &Path, reason: &str) -> Self {
        Self {
            severity: Severity::Error,
            path: path.to_path_buf(),
            message: format!("Invalid preferences file, defaults will be used: {reason}"),
        }
    }

    pub(crate) fn read_failed(path: &Path, detail: &str) -> Self {
        Self {
            severity: Severity::Error,
            path: path.to_path_buf(),
            message: format!("Failed to read preferences file, defaults will be used: {detail}"),
        }
    }
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}: {}",
            self.severity,
            self.path.display(),
            self.message
        )
    }
}
