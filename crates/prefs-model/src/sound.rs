//! Sound output settings.

use serde::{Deserialize, Serialize};

/// Audio streaming backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoundStreamer {
    #[default]
    XAudio2,
    DirectSound,
}

impl SoundStreamer {
    pub const COUNT: u32 = 2;

    pub fn ordinal(self) -> u32 {
        match self {
            Self::XAudio2 => 0,
            Self::DirectSound => 1,
        }
    }

    pub fn from_ordinal(ordinal: u32) -> Option<Self> {
        match ordinal {
            0 => Some(Self::XAudio2),
            1 => Some(Self::DirectSound),
            _ => None,
        }
    }
}
