//! In-memory preferences snapshot.

use std::collections::BTreeMap;

use crate::value::PrefValue;

/// The full key → value mapping for one preferences session.
///
/// A snapshot is created empty, filled by a load, selectively rewritten
/// during the resolution pass, and serialized back out on save. It is owned
/// by exactly one session; nothing in this type is shared or locked.
///
/// Keys are unique. Entries iterate in sorted key order, which keeps saved
/// files stable and diffable regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    entries: BTreeMap<String, PrefValue>,
    dirty: bool,
}

impl Snapshot {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the snapshot holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True if the snapshot has been modified since it was loaded or saved.
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the dirty flag, e.g. after a successful save.
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// True if any value is stored under `key`, regardless of tag.
    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// The raw tagged value under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&PrefValue> {
        self.entries.get(key)
    }

    /// String value under `key`. Any other tag is "not found".
    pub fn get_str(&self, key: &str) -> Option<&str> {
        match self.entries.get(key) {
            Some(PrefValue::Str(s)) => Some(s),
            _ => None,
        }
    }

    /// `u32` value under `key`. Any other tag is "not found".
    pub fn get_u32(&self, key: &str) -> Option<u32> {
        match self.entries.get(key) {
            Some(PrefValue::U32(v)) => Some(*v),
            _ => None,
        }
    }

    /// Boolean value under `key`. Any other tag is "not found".
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.entries.get(key) {
            Some(PrefValue::Bool(v)) => Some(*v),
            _ => None,
        }
    }

    /// Signed integer value under `key`. Any other tag is "not found".
    pub fn get_int(&self, key: &str) -> Option<i64> {
        match self.entries.get(key) {
            Some(PrefValue::Int(v)) => Some(*v),
            _ => None,
        }
    }

    /// Binary value under `key` with exactly `expected_len` bytes.
    ///
    /// A blob of any other length is "not found", matching the behaviour of
    /// the typed getters: a shape mismatch degrades to the default path,
    /// never to an error.
    pub fn get_binary(&self, key: &str, expected_len: usize) -> Option<&[u8]> {
        match self.entries.get(key) {
            Some(PrefValue::Binary(bytes)) if bytes.len() == expected_len => Some(bytes),
            _ => None,
        }
    }

    /// Store `value` under `key`, replacing any previous entry.
    ///
    /// Marks the snapshot dirty.
    pub fn set(&mut self, key: impl Into<String>, value: PrefValue) {
        self.entries.insert(key.into(), value);
        self.dirty = true;
    }

    /// Store a string value.
    pub fn set_str(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.set(key, PrefValue::Str(value.into()));
    }

    /// Store a `u32` value.
    pub fn set_u32(&mut self, key: impl Into<String>, value: u32) {
        self.set(key, PrefValue::U32(value));
    }

    /// Store a boolean value.
    pub fn set_bool(&mut self, key: impl Into<String>, value: bool) {
        self.set(key, PrefValue::Bool(value));
    }

    /// Store a signed integer value.
    pub fn set_int(&mut self, key: impl Into<String>, value: i64) {
        self.set(key, PrefValue::Int(value));
    }

    /// Store a binary blob value.
    pub fn set_binary(&mut self, key: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.set(key, PrefValue::Binary(bytes.into()));
    }

    /// Remove the entry under `key`. Returns true if an entry was removed.
    ///
    /// Marks the snapshot dirty when an entry was actually present.
    pub fn erase(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            self.dirty = true;
        }
        removed
    }

    /// Iterate entries in sorted key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PrefValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_get_rejects_other_tags() {
        let mut snapshot = Snapshot::new();
        snapshot.set_u32("SampleRate", 40014);

        assert_eq!(snapshot.get_u32("SampleRate"), Some(40014));
        assert_eq!(snapshot.get_int("SampleRate"), None);
        assert_eq!(snapshot.get_str("SampleRate"), None);
        assert_eq!(snapshot.get_bool("SampleRate"), None);
        assert!(snapshot.has("SampleRate"));
    }

    #[test]
    fn test_binary_length_mismatch_is_not_found() {
        let mut snapshot = Snapshot::new();
        snapshot.set_binary("MachineType", vec![1u8]);

        assert_eq!(snapshot.get_binary("MachineType", 1), Some(&[1u8][..]));
        assert_eq!(snapshot.get_binary("MachineType", 2), None);
    }

    #[test]
    fn test_set_and_erase_mark_dirty() {
        let mut snapshot = Snapshot::new();
        assert!(!snapshot.is_dirty());

        snapshot.set_bool("SoundEnabled", true);
        assert!(snapshot.is_dirty());

        snapshot.mark_clean();
        let _ = snapshot.get_bool("SoundEnabled");
        assert!(!snapshot.is_dirty());

        assert!(snapshot.erase("SoundEnabled"));
        assert!(snapshot.is_dirty());

        snapshot.mark_clean();
        assert!(!snapshot.erase("SoundEnabled"));
        assert!(!snapshot.is_dirty());
    }

    #[test]
    fn test_set_replaces_existing_entry() {
        let mut snapshot = Snapshot::new();
        snapshot.set_int("SoundVolume", 50);
        snapshot.set_int("SoundVolume", 100);

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.get_int("SoundVolume"), Some(100));
    }
}
