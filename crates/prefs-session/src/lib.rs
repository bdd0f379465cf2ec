#![deny(unsafe_code)]

//! Preference resolution and legacy migration.
//!
//! The emulator's preferences file has been written by many incompatible
//! application generations: settings have been renamed, stored as raw menu
//! resource identifiers, packed into flag bytes, or split across several
//! enablement keys. This crate turns whatever is on disk into one canonical
//! [`Preferences`](prefs_model::Preferences) value.
//!
//! Resolution applies a strict precedence per setting: the canonical key
//! (well-typed and valid) wins; otherwise a legacy alias is decoded and
//! validated; otherwise the documented default applies. Every resolved
//! value is written back under the canonical key and tag, so one
//! load/save cycle converges the file to the newest schema. Resolution
//! never fails: a corrupt or missing file degrades to a fully defaulted
//! configuration plus a warning for the host to display.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use prefs_session::PreferencesSession;
//!
//! let mut session = PreferencesSession::new(Path::new("Preferences.cfg"));
//! let (prefs, warnings) = session.load_all();
//! for warning in &warnings {
//!     eprintln!("{warning}");
//! }
//! assert!(prefs.sound.volume >= 25);
//!
//! // ... run the emulator, mutate prefs ...
//!
//! session.save_all(&prefs, true).unwrap();
//! ```

mod error;
mod legacy;
mod paths;
mod report;
mod resolve;
mod save;
mod schema;
mod session;

pub use crate::error::{Result, SessionError};
pub use crate::paths::{DataPathResolver, NoDataPath, UserDataPath};
pub use crate::report::{LoadWarning, Severity};
pub use crate::session::{PREFS_VERSION, PreferencesSession};
