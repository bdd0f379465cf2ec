#![deny(unsafe_code)]

//! Typed key/value preferences file reader and writer.
//!
//! This crate holds the storage half of the preferences layer: a tagged
//! value type, an in-memory snapshot keyed by setting name, and a
//! line-based on-disk encoding that round-trips every value tag exactly.
//!
//! Type checking happens at the accessor level: asking the snapshot for a
//! `u32` under a key that holds a string answers "not found" rather than
//! coercing or failing. Migration of legacy encodings lives one layer up,
//! in `prefs-session`.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use prefs_store::{LoadOutcome, PrefValue, Snapshot, load_snapshot, save_snapshot};
//!
//! let mut snapshot = Snapshot::new();
//! snapshot.set_int("SoundVolume", 100);
//! snapshot.set_str("DiscsPath", "DiscIms");
//!
//! save_snapshot(Path::new("Preferences.cfg"), &snapshot).unwrap();
//!
//! match load_snapshot(Path::new("Preferences.cfg")).unwrap() {
//!     LoadOutcome::Loaded(snapshot) => {
//!         assert_eq!(snapshot.get_int("SoundVolume"), Some(100));
//!     }
//!     LoadOutcome::FileMissing => { /* fall back to defaults */ }
//!     LoadOutcome::InvalidFormat { .. } => { /* fall back to defaults */ }
//! }
//! ```

mod error;
mod reader;
mod store;
mod value;
mod writer;

pub use crate::error::{Result, StoreError};
pub use crate::reader::{LoadOutcome, load_snapshot, parse_snapshot};
pub use crate::store::Snapshot;
pub use crate::value::{PrefValue, ValueTag};
pub use crate::writer::save_snapshot;
