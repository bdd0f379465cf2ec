//! Preferences file writer.
//!
//! Serializes a snapshot to the line-based encoding and writes it with a
//! temp-file-plus-rename so a crash mid-save cannot corrupt the previous
//! file. Entries are written in sorted key order.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::error::{Result, StoreError};
use crate::store::Snapshot;
use crate::value::PrefValue;

/// Save a snapshot to `path`, atomically.
///
/// The snapshot itself is untouched; the caller clears the dirty flag once
/// the save is known to have succeeded, so a failed save can be retried.
pub fn save_snapshot(path: &Path, snapshot: &Snapshot) -> Result<()> {
    let text = encode_snapshot(snapshot)?;
    let temp_path = path.with_extension("cfg.tmp");

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| StoreError::io("create directory for", parent, e))?;
    }

    let mut file = File::create(&temp_path).map_err(|e| StoreError::io("create", &temp_path, e))?;
    file.write_all(text.as_bytes())
        .map_err(|e| StoreError::io("write", &temp_path, e))?;
    file.sync_all()
        .map_err(|e| StoreError::io("sync", &temp_path, e))?;
    drop(file);

    fs::rename(&temp_path, path).map_err(|e| StoreError::AtomicWriteFailed {
        temp_path: temp_path.clone(),
        target_path: path.to_path_buf(),
        source: e,
    })?;

    tracing::info!("saved {} preferences to {}", snapshot.len(), path.display());
    Ok(())
}

/// Encode a snapshot as file text.
fn encode_snapshot(snapshot: &Snapshot) -> Result<String> {
    let mut out = String::new();

    for (key, value) in snapshot.iter() {
        if key.contains('=') || key.contains('\n') || key.contains('\r') {
            return Err(StoreError::UnwritableKey { key: key.to_string() });
        }
        out.push_str(key);
        out.push('=');
        out.push_str(&encode_value(value));
        out.push('\n');
    }

    Ok(out)
}

/// Encode a single value. Inverse of the reader's `parse_value`.
fn encode_value(value: &PrefValue) -> String {
    match value {
        PrefValue::Str(s) => encode_quoted(s),
        PrefValue::U32(v) => format!("0x{v:X}"),
        PrefValue::Bool(v) => v.to_string(),
        PrefValue::Int(v) => v.to_string(),
        PrefValue::Binary(bytes) => format!("hex:{}", hex::encode(bytes)),
    }
}

fn encode_quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}
