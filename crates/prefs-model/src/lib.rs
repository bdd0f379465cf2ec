#![deny(unsafe_code)]

//! Emulator preference model.
//!
//! Type-safe enumerations for every setting the emulator persists, plus the
//! fully resolved [`Preferences`] struct handed to the rest of the
//! application after a load pass.
//!
//! Each enumeration carries a stable wire ordinal (the value written into
//! the preferences file) and a documented default. Conversions from raw
//! ordinals are total in the sense that callers fall back to the default
//! for unknown ordinals; `from_ordinal` itself reports the mismatch with
//! `None` so the resolver can decide.

pub mod capture;
pub mod display;
pub mod input;
pub mod machine;
pub mod peripherals;
pub mod preferences;
pub mod sound;
pub mod timing;

pub use crate::capture::{BitmapCaptureFormat, BitmapCaptureResolution, CaptureResolution};
pub use crate::display::{DisplayRenderer, FullScreenMode, LedColour, PaletteType, WindowSize};
pub use crate::input::{AmxSize, JoystickOption, KeyboardMapping};
pub use crate::machine::{MachineModel, TubeDevice};
pub use crate::peripherals::{PrinterPort, SerialDestination, TeletextSource};
pub use crate::preferences::{
    AmxPrefs, AutoSavePrefs, CMOS_RAM_LEN, CapturePrefs, DEFAULT_BLUR_INTENSITIES, DisplayPrefs,
    HardwarePrefs, InputPrefs, PathPrefs, Preferences, PrinterPrefs, SWRAM_SLOT_COUNT, SerialPrefs,
    SoundPrefs, TELETEXT_BASE_PORT, TELETEXT_CHANNEL_COUNT, TapePrefs, TeletextChannel,
    TeletextPrefs, TimingPrefs,
};
pub use crate::sound::SoundStreamer;
pub use crate::timing::TimingMode;
