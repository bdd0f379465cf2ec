//! Video and bitmap capture settings.

use serde::{Deserialize, Serialize};

/// Resolution for video capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaptureResolution {
    /// Capture at the current display size.
    Display,
    #[default]
    Res640x512,
    Res320x256,
}

impl CaptureResolution {
    pub const COUNT: u32 = 3;

    pub fn ordinal(self) -> u32 {
        match self {
            Self::Display => 0,
            Self::Res640x512 => 1,
            Self::Res320x256 => 2,
        }
    }

    pub fn from_ordinal(ordinal: u32) -> Option<Self> {
        match ordinal {
            0 => Some(Self::Display),
            1 => Some(Self::Res640x512),
            2 => Some(Self::Res320x256),
            _ => None,
        }
    }
}

/// Resolution for single-frame bitmap capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BitmapCaptureResolution {
    Display,
    Res1280x1024,
    #[default]
    Res640x512,
    Res320x256,
}

impl BitmapCaptureResolution {
    pub const COUNT: u32 = 4;

    pub fn ordinal(self) -> u32 {
        match self {
            Self::Display => 0,
            Self::Res1280x1024 => 1,
            Self::Res640x512 => 2,
            Self::Res320x256 => 3,
        }
    }

    pub fn from_ordinal(ordinal: u32) -> Option<Self> {
        match ordinal {
            0 => Some(Self::Display),
            1 => Some(Self::Res1280x1024),
            2 => Some(Self::Res640x512),
            3 => Some(Self::Res320x256),
            _ => None,
        }
    }
}

/// Image format for single-frame bitmap capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BitmapCaptureFormat {
    #[default]
    Bmp,
    Jpeg,
    Gif,
    Png,
}

impl BitmapCaptureFormat {
    pub const COUNT: u32 = 4;

    pub fn ordinal(self) -> u32 {
        match self {
            Self::Bmp => 0,
            Self::Jpeg => 1,
            Self::Gif => 2,
            Self::Png => 3,
        }
    }

    pub fn from_ordinal(ordinal: u32) -> Option<Self> {
        match ordinal {
            0 => Some(Self::Bmp),
            1 => Some(Self::Jpeg),
            2 => Some(Self::Gif),
            3 => Some(Self::Png),
            _ => None,
        }
    }
}
