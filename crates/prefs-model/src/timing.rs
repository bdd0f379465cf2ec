//! Emulation speed settings.

use serde::{Deserialize, Serialize};

/// How emulation speed is governed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimingMode {
    /// Run at a percentage of real speed; `speed` holds the percentage.
    #[default]
    FixedSpeed,
    /// Run at a fixed frame rate; `speed` holds frames per second.
    FixedFps,
}

impl TimingMode {
    pub const COUNT: u32 = 2;

    pub fn ordinal(self) -> u32 {
        match self {
            Self::FixedSpeed => 0,
            Self::FixedFps => 1,
        }
    }

    pub fn from_ordinal(ordinal: u32) -> Option<Self> {
        match ordinal {
            0 => Some(Self::FixedSpeed),
            1 => Some(Self::FixedFps),
            _ => None,
        }
    }

    /// Speed value used when the stored speed is missing or not legal for
    /// this mode.
    pub fn default_speed(self) -> i64 {
        match self {
            Self::FixedSpeed => 100,
            Self::FixedFps => 50,
        }
    }
}
