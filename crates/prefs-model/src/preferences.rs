//! The fully resolved preference set.
//!
//! [`Preferences`] is what the rest of the application sees after a load
//! pass: one typed field per setting, no raw keys, no legacy encodings.
//! `Default` produces the documented default for every setting, which is
//! also the exact result of loading with no preferences file present.

use crate::capture::{BitmapCaptureFormat, BitmapCaptureResolution, CaptureResolution};
use crate::display::{DisplayRenderer, FullScreenMode, LedColour, PaletteType, WindowSize};
use crate::input::{AmxSize, JoystickOption, KeyboardMapping};
use crate::machine::{MachineModel, TubeDevice};
use crate::peripherals::{PrinterPort, SerialDestination, TeletextSource};
use crate::sound::SoundStreamer;
use crate::timing::TimingMode;

/// Number of teletext adapter channels.
pub const TELETEXT_CHANNEL_COUNT: usize = 4;

/// TCP port for teletext channel 0; channel `n` uses `TELETEXT_BASE_PORT + n`.
pub const TELETEXT_BASE_PORT: u16 = 19761;

/// Default motion blur intensity ramp, full to faint.
pub const DEFAULT_BLUR_INTENSITIES: [u8; 8] = [100, 88, 75, 62, 50, 38, 25, 12];

/// Length of a CMOS RAM image in the preferences file.
pub const CMOS_RAM_LEN: usize = 50;

/// Number of sideways RAM slots.
pub const SWRAM_SLOT_COUNT: usize = 16;

/// The complete, resolved preference set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    pub machine: MachineModel,
    pub tube: TubeDevice,
    /// Emulate only hardware used by BASIC.
    pub basic_hardware_only: bool,
    pub write_protect_on_load: bool,
    /// Keyboard DIP link bits.
    pub keyboard_links: u8,
    pub write_instruction_counts: bool,

    pub display: DisplayPrefs,
    pub timing: TimingPrefs,
    pub sound: SoundPrefs,
    pub input: InputPrefs,
    pub amx: AmxPrefs,
    pub printer: PrinterPrefs,
    pub tape: TapePrefs,
    pub serial: SerialPrefs,
    pub teletext: TeletextPrefs,
    pub hardware: HardwarePrefs,
    pub capture: CapturePrefs,
    pub paths: PathPrefs,
    pub autosave: AutoSavePrefs,

    /// CMOS RAM image for the Master 128. `None` means the RTC subsystem
    /// applies its own defaults.
    pub cmos_master128: Option<[u8; CMOS_RAM_LEN]>,
    /// CMOS RAM image for the Master ET.
    pub cmos_master_et: Option<[u8; CMOS_RAM_LEN]>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            machine: MachineModel::default(),
            tube: TubeDevice::default(),
            basic_hardware_only: false,
            write_protect_on_load: true,
            keyboard_links: 0,
            write_instruction_counts: false,
            display: DisplayPrefs::default(),
            timing: TimingPrefs::default(),
            sound: SoundPrefs::default(),
            input: InputPrefs::default(),
            amx: AmxPrefs::default(),
            printer: PrinterPrefs::default(),
            tape: TapePrefs::default(),
            serial: SerialPrefs::default(),
            teletext: TeletextPrefs::default(),
            hardware: HardwarePrefs::default(),
            capture: CapturePrefs::default(),
            paths: PathPrefs::default(),
            autosave: AutoSavePrefs::default(),
            cmos_master128: None,
            cmos_master_et: None,
        }
    }
}

/// Display and window settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayPrefs {
    pub renderer: DisplayRenderer,
    pub dx_smoothing: bool,
    pub dx_smooth_mode7_only: bool,
    pub full_screen_mode: FullScreenMode,
    pub window_size: WindowSize,
    pub full_screen: bool,
    pub maintain_aspect_ratio: bool,
    pub show_fps: bool,
    pub palette: PaletteType,
    pub hide_menu: bool,
    pub led_colour: LedColour,
    pub show_keyboard_leds: bool,
    pub show_disc_leds: bool,
    pub motion_blur: u32,
    pub blur_intensities: [u8; 8],
    pub text_view: bool,
    /// Saved window position; (-1, -1) lets the host choose.
    pub window_x: i64,
    pub window_y: i64,
}

impl Default for DisplayPrefs {
    fn default() -> Self {
        Self {
            renderer: DisplayRenderer::default(),
            dx_smoothing: true,
            dx_smooth_mode7_only: false,
            full_screen_mode: FullScreenMode::default(),
            window_size: WindowSize::default(),
            full_screen: false,
            maintain_aspect_ratio: true,
            show_fps: true,
            palette: PaletteType::default(),
            hide_menu: false,
            led_colour: LedColour::default(),
            show_keyboard_leds: false,
            show_disc_leds: false,
            motion_blur: 0,
            blur_intensities: DEFAULT_BLUR_INTENSITIES,
            text_view: false,
            window_x: -1,
            window_y: -1,
        }
    }
}

/// Emulation speed settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingPrefs {
    pub mode: TimingMode,
    /// Percentage of real speed, or frames per second in fixed-FPS mode.
    pub speed: i64,
}

impl Default for TimingPrefs {
    fn default() -> Self {
        Self {
            mode: TimingMode::FixedSpeed,
            speed: 100,
        }
    }
}

/// Sound and speech settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundPrefs {
    pub streamer: SoundStreamer,
    pub enabled: bool,
    pub chip_enabled: bool,
    pub sample_rate: i64,
    pub volume: i64,
    pub relay_sound: bool,
    pub tape_sound: bool,
    pub disc_drive_sound: bool,
    pub part_samples: bool,
    pub exponential_volume: bool,
    pub music5000: bool,
    pub text_to_speech: bool,
    pub tts_auto_speak: bool,
    pub tts_speak_punctuation: bool,
    pub tts_rate: i64,
    pub speech_enabled: bool,
}

impl Default for SoundPrefs {
    fn default() -> Self {
        Self {
            streamer: SoundStreamer::default(),
            enabled: true,
            chip_enabled: true,
            sample_rate: 44100,
            volume: 100,
            relay_sound: false,
            tape_sound: false,
            disc_drive_sound: true,
            part_samples: true,
            exponential_volume: true,
            music5000: false,
            text_to_speech: false,
            tts_auto_speak: true,
            tts_speak_punctuation: false,
            tts_rate: 0,
            speech_enabled: false,
        }
    }
}

/// Keyboard and joystick settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputPrefs {
    pub joystick: JoystickOption,
    pub freeze_when_inactive: bool,
    pub hide_cursor: bool,
    pub capture_mouse: bool,
    pub key_mapping: KeyboardMapping,
    /// User key map file, relative to the user data directory.
    pub user_key_map_file: String,
    pub map_a_s_keys: bool,
    pub map_function_keys: bool,
    pub disable_break_key: bool,
    pub disable_escape_key: bool,
    pub disable_shortcut_keys: bool,
    /// Host key codes bound to the user-port breakout box bits.
    pub bit_keys: [u8; 8],
}

impl Default for InputPrefs {
    fn default() -> Self {
        Self {
            joystick: JoystickOption::default(),
            freeze_when_inactive: true,
            hide_cursor: false,
            capture_mouse: false,
            key_mapping: KeyboardMapping::default(),
            user_key_map_file: "DefaultUser.kmap".to_string(),
            map_a_s_keys: false,
            map_function_keys: false,
            disable_break_key: false,
            disable_escape_key: false,
            disable_shortcut_keys: false,
            bit_keys: [0; 8],
        }
    }
}

/// AMX mouse settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmxPrefs {
    pub enabled: bool,
    pub lr_for_middle: bool,
    pub size: AmxSize,
    pub adjust: i64,
}

impl Default for AmxPrefs {
    fn default() -> Self {
        Self {
            enabled: false,
            lr_for_middle: true,
            size: AmxSize::default(),
            adjust: 30,
        }
    }
}

/// Printer settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrinterPrefs {
    pub enabled: bool,
    pub port: PrinterPort,
    pub file_name: String,
}

/// Cassette tape settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TapePrefs {
    pub clock_speed: u16,
    pub unlock: bool,
}

impl Default for TapePrefs {
    fn default() -> Self {
        Self {
            clock_speed: 5600,
            unlock: false,
        }
    }
}

/// Serial port and Econet settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerialPrefs {
    pub enabled: bool,
    pub destination: SerialDestination,
    /// Host serial port name, e.g. "COM2".
    pub port_name: String,
    pub ip232_address: String,
    pub ip232_port: u32,
    pub ip232_mode: bool,
    pub ip232_raw: bool,
    pub econet: bool,
}

impl Default for SerialPrefs {
    fn default() -> Self {
        Self {
            enabled: false,
            destination: SerialDestination::default(),
            port_name: "COM2".to_string(),
            ip232_address: "127.0.0.1".to_string(),
            ip232_port: 25232,
            ip232_mode: false,
            ip232_raw: false,
            econet: false,
        }
    }
}

/// One teletext adapter channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeletextChannel {
    /// Capture file read when the source is [`TeletextSource::File`].
    pub file_name: String,
    pub ip_address: String,
    pub port: u16,
}

/// Teletext adapter settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeletextPrefs {
    pub half_mode: bool,
    pub adapter_enabled: bool,
    pub source: TeletextSource,
    pub channels: [TeletextChannel; TELETEXT_CHANNEL_COUNT],
}

impl Default for TeletextPrefs {
    fn default() -> Self {
        Self {
            half_mode: false,
            adapter_enabled: false,
            source: TeletextSource::default(),
            channels: std::array::from_fn(|ch| TeletextChannel {
                file_name: std::path::Path::new("DiscIms")
                    .join(format!("txt{ch}.dat"))
                    .to_string_lossy()
                    .into_owned(),
                ip_address: "127.0.0.1".to_string(),
                port: TELETEXT_BASE_PORT + ch as u16,
            }),
        }
    }
}

/// Disc, RTC and sideways RAM hardware settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HardwarePrefs {
    pub floppy_drive_enabled: bool,
    pub scsi_drive_enabled: bool,
    pub ide_drive_enabled: bool,
    pub userport_rtc_enabled: bool,
    pub userport_rtc_registers: [u8; 8],
    pub swram_writable: [bool; SWRAM_SLOT_COUNT],
    pub swram_board_enabled: bool,
}

impl Default for HardwarePrefs {
    fn default() -> Self {
        Self {
            floppy_drive_enabled: true,
            scsi_drive_enabled: false,
            ide_drive_enabled: false,
            userport_rtc_enabled: false,
            userport_rtc_registers: [0; 8],
            swram_writable: [true; SWRAM_SLOT_COUNT],
            swram_board_enabled: false,
        }
    }
}

/// Video and bitmap capture settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturePrefs {
    pub video_resolution: CaptureResolution,
    pub frame_skip: i64,
    pub bitmap_resolution: BitmapCaptureResolution,
    pub bitmap_format: BitmapCaptureFormat,
}

impl Default for CapturePrefs {
    fn default() -> Self {
        Self {
            video_resolution: CaptureResolution::default(),
            frame_skip: 1,
            bitmap_resolution: BitmapCaptureResolution::default(),
            bitmap_format: BitmapCaptureFormat::default(),
        }
    }
}

/// Media directory settings, relative to the user data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPrefs {
    pub discs_path: String,
    pub discs_filter: u32,
    pub tapes_path: String,
    pub states_path: String,
    pub avi_path: String,
    pub image_path: String,
    pub hard_drive_path: String,
    /// Disc controller board per non-Master machine (B, B+, Integra-B).
    pub fdc_dll: [String; 3],
}

impl Default for PathPrefs {
    fn default() -> Self {
        Self {
            discs_path: "DiscIms".to_string(),
            discs_filter: 0,
            tapes_path: "Tapes".to_string(),
            states_path: "BeebState".to_string(),
            avi_path: String::new(),
            image_path: String::new(),
            hard_drive_path: "DiscIms".to_string(),
            fdc_dll: [
                "None".to_string(),
                // The B+ ships with the Acorn 1770 controller.
                "Hardware/Acorn1770.dll".to_string(),
                "None".to_string(),
            ],
        }
    }
}

/// Which preference groups are written on the periodic autosave.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AutoSavePrefs {
    pub cmos: bool,
    pub folders: bool,
    pub all: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_defaults() {
        let prefs = Preferences::default();

        assert_eq!(prefs.machine, MachineModel::B);
        assert_eq!(prefs.tube, TubeDevice::None);
        assert_eq!(prefs.sound.volume, 100);
        assert_eq!(prefs.sound.sample_rate, 44100);
        assert_eq!(prefs.timing.mode, TimingMode::FixedSpeed);
        assert_eq!(prefs.timing.speed, 100);
        assert_eq!(prefs.display.window_size, WindowSize::new(640, 512));
        assert_eq!(prefs.serial.port_name, "COM2");
        assert_eq!(prefs.serial.ip232_port, 25232);
        assert_eq!(prefs.teletext.channels[3].port, TELETEXT_BASE_PORT + 3);
        assert!(prefs.hardware.swram_writable.iter().all(|&w| w));
        assert_eq!(prefs.paths.fdc_dll[1], "Hardware/Acorn1770.dll");
        assert!(prefs.cmos_master128.is_none());
    }
}
