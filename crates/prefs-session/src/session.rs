//! One load/modify/save cycle over a preferences file.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use prefs_model::Preferences;
use prefs_store::{LoadOutcome, Snapshot, load_snapshot, save_snapshot};

use crate::error::SessionError;
use crate::paths::{DataPathResolver, NoDataPath};
use crate::report::LoadWarning;
use crate::resolve;
use crate::save;

/// Schema version written into every migrated file.
pub const PREFS_VERSION: &str = "2.1";

/// Owns the snapshot for one preferences file.
///
/// The session is plain owned state, created where the host wants it and
/// passed explicitly; there is no process-wide instance. A host typically
/// creates one at startup, calls [`load_all`](Self::load_all) once, and
/// keeps it around for saves.
pub struct PreferencesSession {
    path: PathBuf,
    snapshot: Snapshot,
    data_paths: Box<dyn DataPathResolver>,
}

impl PreferencesSession {
    /// Session over `path` with stored path fragments left unresolved.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_data_paths(path, NoDataPath)
    }

    /// Session over `path` resolving stored path fragments through
    /// `data_paths`.
    pub fn with_data_paths(
        path: impl Into<PathBuf>,
        data_paths: impl DataPathResolver + 'static,
    ) -> Self {
        Self {
            path: path.into(),
            snapshot: Snapshot::new(),
            data_paths: Box::new(data_paths),
        }
    }

    /// The preferences file this session reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The raw migrated snapshot. Mostly useful to hosts that persist a
    /// few keys of their own alongside the catalogue.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Load and resolve the preferences file.
    ///
    /// Never fails: a missing, unreadable or corrupt file yields the
    /// documented defaults plus a warning for the host's reporting sink.
    /// Afterwards the snapshot holds every setting under its canonical
    /// key, so the next full save writes a fully migrated file.
    pub fn load_all(&mut self) -> (Preferences, Vec<LoadWarning>) {
        let mut warnings = Vec::new();

        self.snapshot = match load_snapshot(&self.path) {
            Ok(LoadOutcome::Loaded(snapshot)) => {
                info!(
                    path = %self.path.display(),
                    entries = snapshot.len(),
                    "loaded preferences file"
                );
                snapshot
            }
            Ok(LoadOutcome::FileMissing) => {
                warn!(path = %self.path.display(), "preferences file missing, using defaults");
                warnings.push(LoadWarning::file_missing(&self.path));
                Snapshot::new()
            }
            Ok(LoadOutcome::InvalidFormat { reason }) => {
                warn!(
                    path = %self.path.display(),
                    reason = %reason,
                    "invalid preferences file, using defaults"
                );
                warnings.push(LoadWarning::invalid_format(&self.path, &reason));
                Snapshot::new()
            }
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "failed to read preferences file, using defaults"
                );
                warnings.push(LoadWarning::read_failed(&self.path, &err.to_string()));
                Snapshot::new()
            }
        };

        let prefs = resolve::resolve_all(&mut self.snapshot, self.data_paths.as_ref());
        (prefs, warnings)
    }

    /// Write `prefs` into the snapshot and save it.
    ///
    /// With `persist_all` false only the always-saved subset is updated
    /// (CMOS state when CMOS autosave is on, autosave flags, the
    /// instruction-count flag), matching the periodic autosave. On failure
    /// the snapshot keeps the pending values so a retry can succeed.
    pub fn save_all(&mut self, prefs: &Preferences, persist_all: bool) -> Result<(), SessionError> {
        if persist_all {
            save::write_all(&mut self.snapshot, prefs);
        }
        if persist_all || prefs.autosave.cmos {
            save::write_cmos(&mut self.snapshot, prefs);
        }
        save::write_always(&mut self.snapshot, prefs);

        match save_snapshot(&self.path, &self.snapshot) {
            Ok(()) => {
                info!(
                    path = %self.path.display(),
                    entries = self.snapshot.len(),
                    "saved preferences file"
                );
                self.snapshot.mark_clean();
                Ok(())
            }
            Err(source) => {
                warn!(
                    path = %self.path.display(),
                    error = %source,
                    "failed to save preferences file"
                );
                Err(SessionError::SaveFailed {
                    path: self.path.clone(),
                    source,
                })
            }
        }
    }
}
