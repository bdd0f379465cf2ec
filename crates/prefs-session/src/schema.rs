//! Declarative setting table.
//!
//! One [`SettingDef`] per stored setting: canonical key, expected tag,
//! validity rule, documented default and the ordered legacy fallbacks. The
//! generic engine in `resolve` evaluates these; composite settings (timing,
//! window size, the LED byte, teletext channels) have dedicated resolvers
//! and only their simple parts appear here.

use prefs_model::DEFAULT_BLUR_INTENSITIES;
use prefs_store::PrefValue;

use crate::legacy;

/// Expected tag (and length, for blobs) of a canonical value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Kind {
    Str,
    U32,
    Bool,
    Int,
    Binary(usize),
}

/// Validity rule applied to a well-tagged value.
///
/// A value that fails its rule is treated exactly like a missing one; it
/// is never clamped or partially accepted.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Legal {
    Any,
    IntSet(&'static [i64]),
    IntRange(i64, i64),
    U32Below(u32),
    U32Set(&'static [u32]),
    /// For one-byte blobs holding an enum ordinal.
    ByteBelow(u8),
}

/// One legacy source tried, in order, when the canonical value is missing
/// or invalid.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Fallback {
    /// Same kind and validity rules under a previous key name.
    Renamed(&'static str),
    /// Raw menu resource ID stored as a u32, decoded to a signed value.
    /// `key` of `None` reads the canonical key itself.
    MenuCodeInt {
        key: Option<&'static str>,
        map: &'static [(u32, i64)],
    },
    /// Raw menu resource ID under the canonical key, decoded to an ordinal.
    MenuCodeU32(&'static [(u32, u32)]),
    /// One-byte legacy enablement flags; the first set flag selects an
    /// ordinal for the canonical one-byte value.
    FirstTrueByte(&'static [(&'static str, u8)]),
}

/// Documented default, written back when nothing else resolves.
#[derive(Debug, Clone, Copy)]
pub(crate) enum DefaultValue {
    Str(&'static str),
    U32(u32),
    Bool(bool),
    Int(i64),
    Binary(&'static [u8]),
}

impl DefaultValue {
    pub(crate) fn to_value(self) -> PrefValue {
        match self {
            Self::Str(s) => PrefValue::Str(s.to_string()),
            Self::U32(v) => PrefValue::U32(v),
            Self::Bool(v) => PrefValue::Bool(v),
            Self::Int(v) => PrefValue::Int(v),
            Self::Binary(bytes) => PrefValue::Binary(bytes.to_vec()),
        }
    }
}

/// A single resolvable setting.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SettingDef {
    pub key: &'static str,
    pub kind: Kind,
    pub default: DefaultValue,
    pub legal: Legal,
    pub fallbacks: &'static [Fallback],
}

const fn bool_setting(key: &'static str, default: bool) -> SettingDef {
    SettingDef {
        key,
        kind: Kind::Bool,
        default: DefaultValue::Bool(default),
        legal: Legal::Any,
        fallbacks: &[],
    }
}

const fn str_setting(key: &'static str, default: &'static str) -> SettingDef {
    SettingDef {
        key,
        kind: Kind::Str,
        default: DefaultValue::Str(default),
        legal: Legal::Any,
        fallbacks: &[],
    }
}

// Machine and system.

pub(crate) const MACHINE_TYPE: SettingDef = SettingDef {
    key: "MachineType",
    kind: Kind::Binary(1),
    default: DefaultValue::Binary(&[0]),
    legal: Legal::ByteBelow(5),
    fallbacks: &[],
};

pub(crate) const TUBE_TYPE: SettingDef = SettingDef {
    key: "TubeType",
    kind: Kind::Binary(1),
    default: DefaultValue::Binary(&[0]),
    legal: Legal::ByteBelow(7),
    fallbacks: &[Fallback::FirstTrueByte(&[
        ("TubeEnabled", 1),
        ("AcornZ80", 3),
        ("TorchTube", 4),
        ("Tube186Enabled", 2),
        ("ArmTube", 5),
    ])],
};

pub(crate) const BASIC_HARDWARE: SettingDef = bool_setting("Basic Hardware", false);
pub(crate) const WRITE_PROTECT_ON_LOAD: SettingDef = bool_setting("WriteProtectOnLoad", true);
pub(crate) const WRITE_INSTRUCTION_COUNTS: SettingDef =
    bool_setting("WriteInstructionCounts", false);

pub(crate) const KEYBOARD_LINKS: SettingDef = SettingDef {
    key: "KeyboardLinks",
    kind: Kind::U32,
    default: DefaultValue::U32(0),
    legal: Legal::U32Below(256),
    fallbacks: &[],
};

// Display.

pub(crate) const DISPLAY_RENDERER: SettingDef = SettingDef {
    key: "DisplayRenderer",
    kind: Kind::U32,
    default: DefaultValue::U32(2),
    legal: Legal::U32Below(3),
    fallbacks: &[Fallback::MenuCodeU32(legacy::DISPLAY_RENDERER_CODES)],
};

pub(crate) const DX_SMOOTHING: SettingDef = bool_setting("DXSmoothing", true);
pub(crate) const DX_SMOOTH_MODE7_ONLY: SettingDef = bool_setting("DXSmoothMode7Only", false);

pub(crate) const FULL_SCREEN_MODE: SettingDef = SettingDef {
    key: "DDFullScreenMode",
    kind: Kind::U32,
    default: DefaultValue::U32(0),
    legal: Legal::U32Below(14),
    fallbacks: &[Fallback::MenuCodeU32(legacy::FULL_SCREEN_MODE_CODES)],
};

pub(crate) const FULL_SCREEN: SettingDef = bool_setting("FullScreen", false);
pub(crate) const MAINTAIN_ASPECT_RATIO: SettingDef = bool_setting("MaintainAspectRatio", true);

pub(crate) const SHOW_FPS: SettingDef = SettingDef {
    key: "ShowFPS",
    kind: Kind::Bool,
    default: DefaultValue::Bool(true),
    legal: Legal::Any,
    // Misspelt key used by 4.18 and earlier.
    fallbacks: &[Fallback::Renamed("ShowFSP")],
};

pub(crate) const MONITOR: SettingDef = SettingDef {
    key: "Monitor",
    kind: Kind::Binary(1),
    default: DefaultValue::Binary(&[0]),
    legal: Legal::ByteBelow(4),
    fallbacks: &[],
};

pub(crate) const HIDE_MENU: SettingDef = bool_setting("HideMenuEnabled", false);

pub(crate) const MOTION_BLUR: SettingDef = SettingDef {
    key: "MotionBlur",
    kind: Kind::U32,
    default: DefaultValue::U32(0),
    legal: Legal::U32Set(&[0, 2, 4, 8]),
    fallbacks: &[Fallback::MenuCodeU32(legacy::MOTION_BLUR_CODES)],
};

pub(crate) const BLUR_INTENSITIES: SettingDef = SettingDef {
    key: "MotionBlurIntensities",
    kind: Kind::Binary(8),
    default: DefaultValue::Binary(&DEFAULT_BLUR_INTENSITIES),
    legal: Legal::Any,
    fallbacks: &[],
};

pub(crate) const TEXT_VIEW: SettingDef = bool_setting("TextViewEnabled", false);

// Sound.

pub(crate) const SOUND_STREAMER: SettingDef = SettingDef {
    key: "SoundConfig::Selection",
    kind: Kind::U32,
    default: DefaultValue::U32(0),
    legal: Legal::U32Below(2),
    fallbacks: &[],
};

pub(crate) const SOUND_ENABLED: SettingDef = bool_setting("SoundEnabled", true);
pub(crate) const SOUND_CHIP: SettingDef = bool_setting("SoundChipEnabled", true);

pub(crate) const SAMPLE_RATE: SettingDef = SettingDef {
    key: "SampleRate",
    kind: Kind::Int,
    default: DefaultValue::Int(44100),
    legal: Legal::IntSet(&[11025, 22050, 44100]),
    fallbacks: &[Fallback::MenuCodeInt {
        key: None,
        map: legacy::SAMPLE_RATE_CODES,
    }],
};

pub(crate) const SOUND_VOLUME: SettingDef = SettingDef {
    key: "SoundVolume",
    kind: Kind::Int,
    default: DefaultValue::Int(100),
    legal: Legal::IntSet(&[25, 50, 75, 100]),
    fallbacks: &[Fallback::MenuCodeInt {
        key: None,
        map: legacy::VOLUME_CODES,
    }],
};

pub(crate) const RELAY_SOUND: SettingDef = bool_setting("RelaySoundEnabled", false);
pub(crate) const TAPE_SOUND: SettingDef = bool_setting("TapeSoundEnabled", false);
pub(crate) const DISC_DRIVE_SOUND: SettingDef = bool_setting("DiscDriveSoundEnabled", true);
pub(crate) const PART_SAMPLES: SettingDef = bool_setting("Part Samples", true);
pub(crate) const EXPONENTIAL_VOLUME: SettingDef = bool_setting("ExponentialVolume", true);
pub(crate) const TTS_ENABLED: SettingDef = bool_setting("TextToSpeechEnabled", false);
pub(crate) const TTS_AUTO_SPEAK: SettingDef = bool_setting("TextToSpeechAutoSpeak", true);
pub(crate) const TTS_PUNCTUATION: SettingDef =
    bool_setting("TextToSpeechSpeakPunctuation", false);
pub(crate) const MUSIC_5000: SettingDef = bool_setting("Music5000Enabled", false);
pub(crate) const SPEECH_ENABLED: SettingDef = bool_setting("SpeechEnabled", false);

// Input.

pub(crate) const STICKS: SettingDef = SettingDef {
    key: "Sticks",
    kind: Kind::U32,
    default: DefaultValue::U32(0),
    legal: Legal::U32Below(4),
    fallbacks: &[Fallback::MenuCodeU32(legacy::JOYSTICK_CODES)],
};

pub(crate) const FREEZE_WHEN_INACTIVE: SettingDef = bool_setting("FreezeWhenInactive", true);
pub(crate) const HIDE_CURSOR: SettingDef = bool_setting("HideCursor", false);
pub(crate) const CAPTURE_MOUSE: SettingDef = bool_setting("CaptureMouse", false);

pub(crate) const KEY_MAPPING: SettingDef = SettingDef {
    key: "KeyMapping",
    kind: Kind::U32,
    default: DefaultValue::U32(2),
    legal: Legal::U32Below(3),
    fallbacks: &[Fallback::MenuCodeU32(legacy::KEY_MAPPING_CODES)],
};

pub(crate) const USER_KEY_MAP_FILE: SettingDef =
    str_setting("UserKeyMapFile", "DefaultUser.kmap");
pub(crate) const KEY_MAP_AS: SettingDef = bool_setting("KeyMapAS", false);
pub(crate) const KEY_MAP_FUNC: SettingDef = bool_setting("KeyMapFunc", false);
pub(crate) const DISABLE_KEYS_BREAK: SettingDef = bool_setting("DisableKeysBreak", false);
pub(crate) const DISABLE_KEYS_ESCAPE: SettingDef = bool_setting("DisableKeysEscape", false);
pub(crate) const DISABLE_KEYS_SHORTCUT: SettingDef = bool_setting("DisableKeysShortcut", false);

pub(crate) const BIT_KEYS: SettingDef = SettingDef {
    key: "BitKeys",
    kind: Kind::Binary(8),
    default: DefaultValue::Binary(&[0; 8]),
    legal: Legal::Any,
    fallbacks: &[],
};

// AMX mouse.

pub(crate) const AMX_ENABLED: SettingDef = bool_setting("AMXMouseEnabled", false);

/// Stored as a u32 flag rather than a boolean.
pub(crate) const AMX_LR_FOR_MIDDLE: SettingDef = SettingDef {
    key: "AMXMouseLRForMiddle",
    kind: Kind::U32,
    default: DefaultValue::U32(1),
    legal: Legal::Any,
    fallbacks: &[],
};

pub(crate) const AMX_SIZE: SettingDef = SettingDef {
    key: "AMXMouseSize",
    kind: Kind::U32,
    default: DefaultValue::U32(1),
    legal: Legal::U32Below(3),
    fallbacks: &[Fallback::MenuCodeU32(legacy::AMX_SIZE_CODES)],
};

pub(crate) const AMX_ADJUST: SettingDef = SettingDef {
    key: "AMXMouseAdjust",
    kind: Kind::Int,
    default: DefaultValue::Int(30),
    legal: Legal::IntSet(&[-50, -30, -10, 0, 10, 30, 50]),
    fallbacks: &[Fallback::MenuCodeInt {
        key: None,
        map: legacy::AMX_ADJUST_CODES,
    }],
};

// Printer.

pub(crate) const PRINTER_ENABLED: SettingDef = bool_setting("PrinterEnabled", false);

pub(crate) const PRINTER_PORT: SettingDef = SettingDef {
    key: "PrinterPort",
    kind: Kind::U32,
    default: DefaultValue::U32(2),
    legal: Legal::U32Below(6),
    fallbacks: &[Fallback::MenuCodeU32(legacy::PRINTER_PORT_CODES)],
};

pub(crate) const PRINTER_FILE: SettingDef = str_setting("PrinterFile", "");

// Tape.

/// Clock speed as a little-endian 16-bit blob; default 5600.
pub(crate) const TAPE_CLOCK_SPEED: SettingDef = SettingDef {
    key: "Tape Clock Speed",
    kind: Kind::Binary(2),
    default: DefaultValue::Binary(&[0xE0, 0x15]),
    legal: Legal::Any,
    fallbacks: &[],
};

pub(crate) const UNLOCK_TAPE: SettingDef = bool_setting("UnlockTape", false);

// Serial and Econet.

pub(crate) const SERIAL_PORT_ENABLED: SettingDef = bool_setting("SerialPortEnabled", false);
pub(crate) const TOUCH_SCREEN_ENABLED: SettingDef = bool_setting("TouchScreenEnabled", false);
pub(crate) const IP232_ENABLED: SettingDef = bool_setting("IP232Enabled", false);

pub(crate) const IP232_ADDRESS: SettingDef = SettingDef {
    key: "IP232Address",
    kind: Kind::Str,
    default: DefaultValue::Str("127.0.0.1"),
    legal: Legal::Any,
    fallbacks: &[Fallback::Renamed("IP232customip")],
};

pub(crate) const IP232_PORT: SettingDef = SettingDef {
    key: "IP232Port",
    kind: Kind::U32,
    default: DefaultValue::U32(25232),
    legal: Legal::U32Below(65536),
    fallbacks: &[Fallback::Renamed("IP232customport")],
};

pub(crate) const IP232_MODE: SettingDef = SettingDef {
    key: "IP232Mode",
    kind: Kind::Bool,
    default: DefaultValue::Bool(false),
    legal: Legal::Any,
    fallbacks: &[Fallback::Renamed("IP232mode")],
};

pub(crate) const IP232_RAW: SettingDef = SettingDef {
    key: "IP232Raw",
    kind: Kind::Bool,
    default: DefaultValue::Bool(false),
    legal: Legal::Any,
    fallbacks: &[Fallback::Renamed("IP232raw")],
};

pub(crate) const ECONET_ENABLED: SettingDef = bool_setting("EconetEnabled", false);

// Sideways RAM.

pub(crate) const SWRAM_WRITABLE: SettingDef = SettingDef {
    key: "SWRAMWritable",
    kind: Kind::Binary(16),
    default: DefaultValue::Binary(&[1; 16]),
    legal: Legal::Any,
    fallbacks: &[],
};

pub(crate) const SWRAM_BOARD: SettingDef = bool_setting("SWRAMBoard", false);

// Teletext adapter.

pub(crate) const TELETEXT_HALF_MODE: SettingDef = bool_setting("Teletext Half Mode", false);
pub(crate) const TELETEXT_ADAPTER_ENABLED: SettingDef =
    bool_setting("TeletextAdapterEnabled", false);

// Disc and RTC hardware.

pub(crate) const FLOPPY_DRIVE_ENABLED: SettingDef = bool_setting("FloppyDriveEnabled", true);
pub(crate) const SCSI_DRIVE_ENABLED: SettingDef = bool_setting("SCSIDriveEnabled", false);
pub(crate) const IDE_DRIVE_ENABLED: SettingDef = bool_setting("IDEDriveEnabled", false);

pub(crate) const USERPORT_RTC_ENABLED: SettingDef = SettingDef {
    key: "UserPortRTCEnabled",
    kind: Kind::Bool,
    default: DefaultValue::Bool(false),
    legal: Legal::Any,
    fallbacks: &[Fallback::Renamed("RTCEnabled")],
};

pub(crate) const USERPORT_RTC_REGISTERS: SettingDef = SettingDef {
    key: "UserPortRTCRegisters",
    kind: Kind::Binary(8),
    default: DefaultValue::Binary(&[0; 8]),
    legal: Legal::Any,
    fallbacks: &[],
};

// Capture.

pub(crate) const CAPTURE_RESOLUTION: SettingDef = SettingDef {
    key: "CaptureResolution",
    kind: Kind::U32,
    default: DefaultValue::U32(1),
    legal: Legal::U32Below(3),
    fallbacks: &[Fallback::MenuCodeU32(legacy::CAPTURE_RESOLUTION_CODES)],
};

pub(crate) const CAPTURE_FRAME_SKIP: SettingDef = SettingDef {
    key: "CaptureFrameSkip",
    kind: Kind::Int,
    default: DefaultValue::Int(1),
    legal: Legal::IntRange(0, 5),
    // The old key only ever held menu IDs.
    fallbacks: &[Fallback::MenuCodeInt {
        key: Some("FrameSkip"),
        map: legacy::FRAME_SKIP_CODES,
    }],
};

pub(crate) const BITMAP_CAPTURE_RESOLUTION: SettingDef = SettingDef {
    key: "BitmapCaptureResolution",
    kind: Kind::U32,
    default: DefaultValue::U32(2),
    legal: Legal::U32Below(4),
    fallbacks: &[Fallback::MenuCodeU32(legacy::BITMAP_RESOLUTION_CODES)],
};

pub(crate) const BITMAP_CAPTURE_FORMAT: SettingDef = SettingDef {
    key: "BitmapCaptureFormat",
    kind: Kind::U32,
    default: DefaultValue::U32(0),
    legal: Legal::U32Below(4),
    fallbacks: &[Fallback::MenuCodeU32(legacy::BITMAP_FORMAT_CODES)],
};

// Media paths, kept verbatim when present.

pub(crate) const DISCS_PATH: SettingDef = str_setting("DiscsPath", "DiscIms");
pub(crate) const TAPES_PATH: SettingDef = str_setting("TapesPath", "Tapes");
pub(crate) const STATES_PATH: SettingDef = str_setting("StatesPath", "BeebState");
pub(crate) const AVI_PATH: SettingDef = str_setting("AVIPath", "");
pub(crate) const IMAGE_PATH: SettingDef = str_setting("ImagePath", "");
pub(crate) const HARD_DRIVE_PATH: SettingDef = str_setting("HardDrivePath", "DiscIms");

pub(crate) const DISCS_FILTER: SettingDef = SettingDef {
    key: "DiscsFilter",
    kind: Kind::U32,
    default: DefaultValue::U32(0),
    legal: Legal::Any,
    fallbacks: &[],
};

// Autosave.

pub(crate) const AUTOSAVE_CMOS: SettingDef = bool_setting("AutoSavePrefsCMOS", false);
pub(crate) const AUTOSAVE_FOLDERS: SettingDef = bool_setting("AutoSavePrefsFolders", false);
pub(crate) const AUTOSAVE_ALL: SettingDef = bool_setting("AutoSavePrefsAll", false);

/// Keys from retired features, erased unconditionally at the start of
/// every load pass.
pub(crate) const OBSOLETE_KEYS: &[&str] = &[
    "UserKeyMapRow",
    "UserKeyMapCol",
    "ShowBottomCursorLine",
    "Volume",
    "UsePrimaryBuffer",
    "IP232localhost",
    "IP232custom",
];

/// Legacy keys whose canonical replacement is rewritten by a full save;
/// erased at that point so migrated files stop carrying both spellings.
pub(crate) const SUPERSEDED_KEYS: &[&str] = &[
    "WinSize",
    "WindowPos",
    "FrameSkip",
    "IP232mode",
    "IP232raw",
    "ShowFSP",
    "RTCEnabled",
];

#[cfg(test)]
pub(crate) const ALL_SETTINGS: &[&SettingDef] = &[
    &MACHINE_TYPE,
    &TUBE_TYPE,
    &BASIC_HARDWARE,
    &WRITE_PROTECT_ON_LOAD,
    &WRITE_INSTRUCTION_COUNTS,
    &KEYBOARD_LINKS,
    &DISPLAY_RENDERER,
    &DX_SMOOTHING,
    &DX_SMOOTH_MODE7_ONLY,
    &FULL_SCREEN_MODE,
    &FULL_SCREEN,
    &MAINTAIN_ASPECT_RATIO,
    &SHOW_FPS,
    &MONITOR,
    &HIDE_MENU,
    &MOTION_BLUR,
    &BLUR_INTENSITIES,
    &TEXT_VIEW,
    &SOUND_STREAMER,
    &SOUND_ENABLED,
    &SOUND_CHIP,
    &SAMPLE_RATE,
    &SOUND_VOLUME,
    &RELAY_SOUND,
    &TAPE_SOUND,
    &DISC_DRIVE_SOUND,
    &PART_SAMPLES,
    &EXPONENTIAL_VOLUME,
    &TTS_ENABLED,
    &TTS_AUTO_SPEAK,
    &TTS_PUNCTUATION,
    &MUSIC_5000,
    &SPEECH_ENABLED,
    &STICKS,
    &FREEZE_WHEN_INACTIVE,
    &HIDE_CURSOR,
    &CAPTURE_MOUSE,
    &KEY_MAPPING,
    &USER_KEY_MAP_FILE,
    &KEY_MAP_AS,
    &KEY_MAP_FUNC,
    &DISABLE_KEYS_BREAK,
    &DISABLE_KEYS_ESCAPE,
    &DISABLE_KEYS_SHORTCUT,
    &BIT_KEYS,
    &AMX_ENABLED,
    &AMX_LR_FOR_MIDDLE,
    &AMX_SIZE,
    &AMX_ADJUST,
    &PRINTER_ENABLED,
    &PRINTER_PORT,
    &PRINTER_FILE,
    &TAPE_CLOCK_SPEED,
    &UNLOCK_TAPE,
    &SERIAL_PORT_ENABLED,
    &TOUCH_SCREEN_ENABLED,
    &IP232_ENABLED,
    &IP232_ADDRESS,
    &IP232_PORT,
    &IP232_MODE,
    &IP232_RAW,
    &ECONET_ENABLED,
    &SWRAM_WRITABLE,
    &SWRAM_BOARD,
    &TELETEXT_HALF_MODE,
    &TELETEXT_ADAPTER_ENABLED,
    &FLOPPY_DRIVE_ENABLED,
    &SCSI_DRIVE_ENABLED,
    &IDE_DRIVE_ENABLED,
    &USERPORT_RTC_ENABLED,
    &USERPORT_RTC_REGISTERS,
    &CAPTURE_RESOLUTION,
    &CAPTURE_FRAME_SKIP,
    &BITMAP_CAPTURE_RESOLUTION,
    &BITMAP_CAPTURE_FORMAT,
    &DISCS_PATH,
    &DISCS_FILTER,
    &TAPES_PATH,
    &STATES_PATH,
    &AVI_PATH,
    &IMAGE_PATH,
    &HARD_DRIVE_PATH,
    &AUTOSAVE_CMOS,
    &AUTOSAVE_FOLDERS,
    &AUTOSAVE_ALL,
];

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn test_canonical_keys_are_unique() {
        let keys: BTreeSet<_> = ALL_SETTINGS.iter().map(|def| def.key).collect();
        assert_eq!(keys.len(), ALL_SETTINGS.len());
    }

    fn default_matches_kind(def: &SettingDef) -> bool {
        matches!(
            (def.kind, def.default),
            (Kind::Str, DefaultValue::Str(_))
                | (Kind::U32, DefaultValue::U32(_))
                | (Kind::Bool, DefaultValue::Bool(_))
                | (Kind::Int, DefaultValue::Int(_))
                | (Kind::Binary(_), DefaultValue::Binary(_))
        )
    }

    #[test]
    fn test_default_tag_matches_declared_kind() {
        for def in ALL_SETTINGS {
            assert!(default_matches_kind(def), "bad default for {}", def.key);
            if let (Kind::Binary(len), DefaultValue::Binary(bytes)) = (def.kind, def.default) {
                assert_eq!(bytes.len(), len, "bad default length for {}", def.key);
            }
        }
    }

    /// A written-back default must survive the next load unchanged, so
    /// every default has to pass its own validity rule.
    #[test]
    fn test_defaults_are_legal() {
        for def in ALL_SETTINGS {
            let ok = match (def.legal, def.default) {
                (Legal::Any, _) => true,
                (Legal::IntSet(set), DefaultValue::Int(v)) => set.contains(&v),
                (Legal::IntRange(lo, hi), DefaultValue::Int(v)) => (lo..=hi).contains(&v),
                (Legal::U32Below(n), DefaultValue::U32(v)) => v < n,
                (Legal::U32Set(set), DefaultValue::U32(v)) => set.contains(&v),
                (Legal::ByteBelow(n), DefaultValue::Binary(bytes)) => {
                    bytes.len() == 1 && bytes[0] < n
                }
                _ => false,
            };
            assert!(ok, "default for {} fails its own validity rule", def.key);
        }
    }
}
