//! Preferences file reader.
//!
//! Parses the line-based `Key=Value` encoding produced by
//! [`save_snapshot`](crate::save_snapshot). Each value tag has a disjoint
//! syntax, so a loaded snapshot carries exactly the tags that were saved:
//!
//! ```text
//! DiscsPath="DiscIms"
//! MachineType=hex:03
//! SampleRate=44100
//! DisplayRenderer=0x2
//! SoundEnabled=true
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Result, StoreError};
use crate::store::Snapshot;
use crate::value::PrefValue;

/// Outcome of loading a preferences file.
///
/// Both failure arms are recoverable by design: the caller proceeds with an
/// empty snapshot and defaults, surfacing a warning that names the path.
#[derive(Debug)]
pub enum LoadOutcome {
    /// File read and parsed; every entry is available in the snapshot.
    Loaded(Snapshot),
    /// No file exists at the given path.
    FileMissing,
    /// A file exists but is not a readable preferences file.
    InvalidFormat { reason: String },
}

/// Load a preferences file into a snapshot.
///
/// A missing file and a malformed file are ordinary outcomes, not errors;
/// only genuine I/O failures (permissions, hardware) return `Err`.
pub fn load_snapshot(path: &Path) -> Result<LoadOutcome> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(LoadOutcome::FileMissing),
        Err(e) if e.kind() == ErrorKind::InvalidData => {
            return Ok(LoadOutcome::InvalidFormat {
                reason: "not valid UTF-8".to_string(),
            });
        }
        Err(e) => return Err(StoreError::io("read", path, e)),
    };

    match parse_snapshot(&text) {
        Ok(snapshot) => {
            tracing::info!("loaded {} preferences from {}", snapshot.len(), path.display());
            Ok(LoadOutcome::Loaded(snapshot))
        }
        Err(reason) => Ok(LoadOutcome::InvalidFormat { reason }),
    }
}

/// Parse preferences file text into a snapshot.
///
/// Any malformed line condemns the whole file: a truncated or foreign file
/// must degrade to "use defaults", never to a half-loaded configuration.
/// Duplicate keys keep the last occurrence.
pub fn parse_snapshot(text: &str) -> std::result::Result<Snapshot, String> {
    let mut snapshot = Snapshot::new();

    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let (key, raw) = line
            .split_once('=')
            .ok_or_else(|| format!("line {}: missing '='", index + 1))?;

        if key.is_empty() {
            return Err(format!("line {}: empty key", index + 1));
        }

        let value = parse_value(raw)
            .ok_or_else(|| format!("line {}: unreadable value for key {key:?}", index + 1))?;

        snapshot.set(key, value);
    }

    snapshot.mark_clean();
    Ok(snapshot)
}

/// Parse a single encoded value. The syntaxes are disjoint by construction.
fn parse_value(raw: &str) -> Option<PrefValue> {
    if raw == "true" {
        return Some(PrefValue::Bool(true));
    }
    if raw == "false" {
        return Some(PrefValue::Bool(false));
    }
    if let Some(digits) = raw.strip_prefix("0x") {
        return u32::from_str_radix(digits, 16).ok().map(PrefValue::U32);
    }
    if let Some(blob) = raw.strip_prefix("hex:") {
        return hex::decode(blob).ok().map(PrefValue::Binary);
    }
    if raw.starts_with('"') {
        return parse_quoted(raw).map(PrefValue::Str);
    }
    raw.parse::<i64>().ok().map(PrefValue::Int)
}

/// Decode a quoted string, reversing the writer's escaping.
fn parse_quoted(raw: &str) -> Option<String> {
    let inner = raw.strip_prefix('"')?.strip_suffix('"')?;

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();

    while let Some(c) = chars.next() {
        if c == '"' {
            // Unescaped quote inside the body means the suffix we stripped
            // was not the real terminator.
            return None;
        }
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next()? {
            '\\' => out.push('\\'),
            '"' => out.push('"'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            _ => return None,
        }
    }

    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_each_tag() {
        let text = concat!(
            "DiscsPath=\"DiscIms\"\n",
            "SoundVolume=100\n",
            "AMXMouseAdjust=-30\n",
            "DisplayRenderer=0x2\n",
            "SoundEnabled=true\n",
            "PrinterEnabled=false\n",
            "MachineType=hex:03\n",
        );
        let snapshot = parse_snapshot(text).unwrap();

        assert_eq!(snapshot.get_str("DiscsPath"), Some("DiscIms"));
        assert_eq!(snapshot.get_int("SoundVolume"), Some(100));
        assert_eq!(snapshot.get_int("AMXMouseAdjust"), Some(-30));
        assert_eq!(snapshot.get_u32("DisplayRenderer"), Some(2));
        assert_eq!(snapshot.get_bool("SoundEnabled"), Some(true));
        assert_eq!(snapshot.get_bool("PrinterEnabled"), Some(false));
        assert_eq!(snapshot.get_binary("MachineType", 1), Some(&[3u8][..]));
        assert!(!snapshot.is_dirty());
    }

    #[test]
    fn test_keys_may_contain_spaces_and_colons() {
        let snapshot = parse_snapshot("LED Information=hex:05\nSoundConfig::Selection=0x1\n").unwrap();
        assert_eq!(snapshot.get_binary("LED Information", 1), Some(&[5u8][..]));
        assert_eq!(snapshot.get_u32("SoundConfig::Selection"), Some(1));
    }

    #[test]
    fn test_quoted_string_escapes() {
        let snapshot = parse_snapshot(r#"PrinterFile="a\"b\\c\nd""#).unwrap();
        assert_eq!(snapshot.get_str("PrinterFile"), Some("a\"b\\c\nd"));
    }

    #[test]
    fn test_blank_lines_tolerated() {
        let snapshot = parse_snapshot("\nSoundVolume=75\n\n").unwrap();
        assert_eq!(snapshot.get_int("SoundVolume"), Some(75));
    }

    #[test]
    fn test_duplicate_key_keeps_last() {
        let snapshot = parse_snapshot("SoundVolume=50\nSoundVolume=75\n").unwrap();
        assert_eq!(snapshot.get_int("SoundVolume"), Some(75));
        assert_eq!(snapshot.len(), 1);
    }

    #[test]
    fn test_malformed_line_condemns_file() {
        assert!(parse_snapshot("SoundVolume=100\ngarbage\n").is_err());
        assert!(parse_snapshot("=100\n").is_err());
        assert!(parse_snapshot("SampleRate=0xZZ\n").is_err());
        assert!(parse_snapshot("MachineType=hex:0\n").is_err());
        assert!(parse_snapshot("Name=\"unterminated\n").is_err());
        assert!(parse_snapshot("Speed=12.5\n").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = load_snapshot(&dir.path().join("nope.cfg")).unwrap();
        assert!(matches!(outcome, LoadOutcome::FileMissing));
    }

    #[test]
    fn test_load_invalid_utf8_is_invalid_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binary.cfg");
        fs::write(&path, [0xFFu8, 0xFE, 0x00, 0x01]).unwrap();

        let outcome = load_snapshot(&path).unwrap();
        assert!(matches!(outcome, LoadOutcome::InvalidFormat { .. }));
    }
}
