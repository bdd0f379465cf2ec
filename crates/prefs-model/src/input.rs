//! Keyboard, joystick and AMX mouse settings.

use serde::{Deserialize, Serialize};

/// Joystick emulation option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JoystickOption {
    #[default]
    Disabled,
    Joystick,
    AnalogueMouseStick,
    DigitalMouseStick,
}

impl JoystickOption {
    pub const COUNT: u32 = 4;

    pub fn ordinal(self) -> u32 {
        match self {
            Self::Disabled => 0,
            Self::Joystick => 1,
            Self::AnalogueMouseStick => 2,
            Self::DigitalMouseStick => 3,
        }
    }

    pub fn from_ordinal(ordinal: u32) -> Option<Self> {
        match ordinal {
            0 => Some(Self::Disabled),
            1 => Some(Self::Joystick),
            2 => Some(Self::AnalogueMouseStick),
            3 => Some(Self::DigitalMouseStick),
            _ => None,
        }
    }
}

/// Host-to-emulated keyboard mapping style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyboardMapping {
    /// User-defined key map loaded from a file.
    User,
    /// Positional default mapping.
    Default,
    /// Map by the character on the host key.
    #[default]
    Logical,
}

impl KeyboardMapping {
    pub const COUNT: u32 = 3;

    pub fn ordinal(self) -> u32 {
        match self {
            Self::User => 0,
            Self::Default => 1,
            Self::Logical => 2,
        }
    }

    pub fn from_ordinal(ordinal: u32) -> Option<Self> {
        match ordinal {
            0 => Some(Self::User),
            1 => Some(Self::Default),
            2 => Some(Self::Logical),
            _ => None,
        }
    }
}

/// AMX mouse pad size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AmxSize {
    Size160x256,
    #[default]
    Size320x256,
    Size640x256,
}

impl AmxSize {
    pub const COUNT: u32 = 3;

    pub fn ordinal(self) -> u32 {
        match self {
            Self::Size160x256 => 0,
            Self::Size320x256 => 1,
            Self::Size640x256 => 2,
        }
    }

    pub fn from_ordinal(ordinal: u32) -> Option<Self> {
        match ordinal {
            0 => Some(Self::Size160x256),
            1 => Some(Self::Size320x256),
            2 => Some(Self::Size640x256),
            _ => None,
        }
    }
}
