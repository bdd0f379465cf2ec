//! Resolution of stored path fragments.
//!
//! The preferences file stores media paths relative to the emulator's user
//! data directory. Resolution needs the absolute form in a couple of places
//! (teletext capture file defaults), so the session takes a collaborator
//! instead of assuming a directory layout.

use std::path::{Path, PathBuf};

/// Turns a stored path fragment into an absolute path.
pub trait DataPathResolver {
    /// Resolve `fragment`. Absolute fragments are returned unchanged;
    /// relative ones are anchored wherever the implementation decides.
    fn resolve(&self, fragment: &str) -> PathBuf;
}

/// Anchors relative fragments under a user data directory.
#[derive(Debug, Clone)]
pub struct UserDataPath {
    root: PathBuf,
}

impl UserDataPath {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl DataPathResolver for UserDataPath {
    fn resolve(&self, fragment: &str) -> PathBuf {
        let fragment = Path::new(fragment);
        if fragment.is_absolute() {
            fragment.to_path_buf()
        } else {
            self.root.join(fragment)
        }
    }
}

/// Leaves fragments as-is. Useful for tests and for hosts that run with
/// the user data directory as their working directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDataPath;

impl DataPathResolver for NoDataPath {
    fn resolve(&self, fragment: &str) -> PathBuf {
        PathBuf::from(fragment)
    }
}
