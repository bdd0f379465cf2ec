//! Display and video output settings.

use serde::{Deserialize, Serialize};

/// Renderer backend for the emulated screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayRenderer {
    Gdi,
    DirectDraw,
    #[default]
    DirectX9,
}

impl DisplayRenderer {
    pub const COUNT: u32 = 3;

    pub fn ordinal(self) -> u32 {
        match self {
            Self::Gdi => 0,
            Self::DirectDraw => 1,
            Self::DirectX9 => 2,
        }
    }

    pub fn from_ordinal(ordinal: u32) -> Option<Self> {
        match ordinal {
            0 => Some(Self::Gdi),
            1 => Some(Self::DirectDraw),
            2 => Some(Self::DirectX9),
            _ => None,
        }
    }
}

/// Full-screen display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FullScreenMode {
    /// Use the desktop resolution.
    #[default]
    ScreenResolution,
    Fs640x480,
    Fs720x576,
    Fs800x600,
    Fs1024x768,
    Fs1280x720,
    Fs1280x1024,
    Fs1280x768,
    Fs1280x960,
    Fs1440x900,
    Fs1600x1200,
    Fs1920x1080,
    Fs2560x1440,
    Fs3840x2160,
}

impl FullScreenMode {
    pub const COUNT: u32 = 14;

    pub fn ordinal(self) -> u32 {
        match self {
            Self::ScreenResolution => 0,
            Self::Fs640x480 => 1,
            Self::Fs720x576 => 2,
            Self::Fs800x600 => 3,
            Self::Fs1024x768 => 4,
            Self::Fs1280x720 => 5,
            Self::Fs1280x1024 => 6,
            Self::Fs1280x768 => 7,
            Self::Fs1280x960 => 8,
            Self::Fs1440x900 => 9,
            Self::Fs1600x1200 => 10,
            Self::Fs1920x1080 => 11,
            Self::Fs2560x1440 => 12,
            Self::Fs3840x2160 => 13,
        }
    }

    pub fn from_ordinal(ordinal: u32) -> Option<Self> {
        match ordinal {
            0 => Some(Self::ScreenResolution),
            1 => Some(Self::Fs640x480),
            2 => Some(Self::Fs720x576),
            3 => Some(Self::Fs800x600),
            4 => Some(Self::Fs1024x768),
            5 => Some(Self::Fs1280x720),
            6 => Some(Self::Fs1280x1024),
            7 => Some(Self::Fs1280x768),
            8 => Some(Self::Fs1280x960),
            9 => Some(Self::Fs1440x900),
            10 => Some(Self::Fs1600x1200),
            11 => Some(Self::Fs1920x1080),
            12 => Some(Self::Fs2560x1440),
            13 => Some(Self::Fs3840x2160),
            _ => None,
        }
    }
}

/// Monitor palette emulation.
///
/// Stored as a single binary byte under `Monitor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteType {
    #[default]
    Rgb,
    Bw,
    Amber,
    Green,
}

impl PaletteType {
    pub const COUNT: u8 = 4;

    pub fn ordinal(self) -> u8 {
        match self {
            Self::Rgb => 0,
            Self::Bw => 1,
            Self::Amber => 2,
            Self::Green => 3,
        }
    }

    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            0 => Some(Self::Rgb),
            1 => Some(Self::Bw),
            2 => Some(Self::Amber),
            3 => Some(Self::Green),
            _ => None,
        }
    }
}

/// Colour of the drive activity LEDs in the status area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LedColour {
    #[default]
    Red,
    Green,
}

/// Emulated screen window size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

impl WindowSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for WindowSize {
    fn default() -> Self {
        Self::new(640, 512)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_screen_mode_ordinals_round_trip() {
        for ordinal in 0..FullScreenMode::COUNT {
            let mode = FullScreenMode::from_ordinal(ordinal).unwrap();
            assert_eq!(mode.ordinal(), ordinal);
        }
        assert_eq!(FullScreenMode::from_ordinal(FullScreenMode::COUNT), None);
    }

    #[test]
    fn test_palette_ordinals_round_trip() {
        for ordinal in 0..PaletteType::COUNT {
            let palette = PaletteType::from_ordinal(ordinal).unwrap();
            assert_eq!(palette.ordinal(), ordinal);
        }
        assert_eq!(PaletteType::from_ordinal(9), None);
    }

    #[test]
    fn test_default_window_size() {
        assert_eq!(WindowSize::default(), WindowSize::new(640, 512));
    }
}
