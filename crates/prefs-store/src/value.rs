//! Tagged preference values.

use std::fmt;

/// A single preference value as held in a [`Snapshot`](crate::Snapshot).
///
/// The tag is part of the stored representation. Lookups check the tag:
/// asking for a `u32` where a string is stored behaves as "not found",
/// never as a coercion. Binary blobs additionally carry a fixed,
/// setting-specific length that lookups must match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrefValue {
    /// Free-form UTF-8 text.
    Str(String),
    /// 32-bit unsigned value. Historically a Windows DWORD; written as hex.
    U32(u32),
    /// Boolean flag.
    Bool(bool),
    /// Signed decimal integer.
    Int(i64),
    /// Opaque byte blob of fixed, setting-specific length.
    Binary(Vec<u8>),
}

impl PrefValue {
    /// Create a string value.
    pub fn str(value: impl Into<String>) -> Self {
        Self::Str(value.into())
    }

    /// Create a binary blob value.
    pub fn binary(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Binary(bytes.into())
    }

    /// The tag of this value.
    pub fn tag(&self) -> ValueTag {
        match self {
            Self::Str(_) => ValueTag::Str,
            Self::U32(_) => ValueTag::U32,
            Self::Bool(_) => ValueTag::Bool,
            Self::Int(_) => ValueTag::Int,
            Self::Binary(_) => ValueTag::Binary,
        }
    }
}

/// The type tag of a [`PrefValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueTag {
    Str,
    U32,
    Bool,
    Int,
    Binary,
}

impl ValueTag {
    /// Name used in diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Str => "string",
            Self::U32 => "u32",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Binary => "binary",
        }
    }
}

impl fmt::Display for ValueTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_matches_variant() {
        assert_eq!(PrefValue::str("x").tag(), ValueTag::Str);
        assert_eq!(PrefValue::U32(7).tag(), ValueTag::U32);
        assert_eq!(PrefValue::Bool(true).tag(), ValueTag::Bool);
        assert_eq!(PrefValue::Int(-3).tag(), ValueTag::Int);
        assert_eq!(PrefValue::binary([1, 2]).tag(), ValueTag::Binary);
    }
}
