//! The resolution pass.
//!
//! Turns a raw [`Snapshot`] into a [`Preferences`] value. Each setting is
//! resolved independently: the canonical key wins when it is well-tagged
//! and valid, otherwise the legacy fallbacks from the setting table are
//! tried in order, otherwise the documented default applies. Whatever wins
//! is written back under the canonical key and tag, so one load/save cycle
//! migrates a file of any age to the newest schema. Nothing in here can
//! fail; bad input only ever degrades to defaults.

use prefs_model::{
    AmxSize, BitmapCaptureFormat, BitmapCaptureResolution, CMOS_RAM_LEN, CaptureResolution,
    DisplayRenderer, FullScreenMode, JoystickOption, KeyboardMapping, LedColour, MachineModel,
    PaletteType, Preferences, PrinterPort, SerialDestination, SoundStreamer,
    TELETEXT_BASE_PORT, TELETEXT_CHANNEL_COUNT, TeletextChannel, TeletextSource, TimingMode,
    TimingPrefs, TubeDevice, WindowSize,
};
use prefs_store::{PrefValue, Snapshot};

use crate::legacy;
use crate::paths::DataPathResolver;
use crate::schema::{self, DefaultValue, Fallback, Kind, Legal, SettingDef};
use crate::session::PREFS_VERSION;

/// Speeds accepted in fixed-FPS mode (frames per second).
const FIXED_FPS_SPEEDS: &[i64] = &[1, 5, 10, 25, 50];

/// Speeds accepted in fixed-speed mode (percent of real speed).
const FIXED_SPEED_MULTIPLIERS: &[i64] = &[
    10, 25, 50, 75, 90, 100, 110, 125, 150, 200, 500, 1000, 5000, 10000,
];

fn read_kinded(snap: &Snapshot, key: &str, kind: Kind) -> Option<PrefValue> {
    match kind {
        Kind::Str => snap.get_str(key).map(|s| PrefValue::Str(s.to_string())),
        Kind::U32 => snap.get_u32(key).map(PrefValue::U32),
        Kind::Bool => snap.get_bool(key).map(PrefValue::Bool),
        Kind::Int => snap.get_int(key).map(PrefValue::Int),
        Kind::Binary(len) => snap
            .get_binary(key, len)
            .map(|bytes| PrefValue::Binary(bytes.to_vec())),
    }
}

fn is_legal(value: &PrefValue, legal: Legal) -> bool {
    match (legal, value) {
        (Legal::Any, _) => true,
        (Legal::IntSet(set), PrefValue::Int(v)) => set.contains(v),
        (Legal::IntRange(lo, hi), PrefValue::Int(v)) => (lo..=hi).contains(v),
        (Legal::U32Below(limit), PrefValue::U32(v)) => *v < limit,
        (Legal::U32Set(set), PrefValue::U32(v)) => set.contains(v),
        (Legal::ByteBelow(limit), PrefValue::Binary(bytes)) => {
            bytes.len() == 1 && bytes[0] < limit
        }
        _ => false,
    }
}

fn try_fallback(snap: &Snapshot, def: &SettingDef, fallback: &Fallback) -> Option<PrefValue> {
    match fallback {
        Fallback::Renamed(old_key) => {
            read_kinded(snap, old_key, def.kind).filter(|value| is_legal(value, def.legal))
        }
        Fallback::MenuCodeInt { key, map } => {
            let code = snap.get_u32(key.unwrap_or(def.key))?;
            legacy::lookup_i64(map, code).map(PrefValue::Int)
        }
        Fallback::MenuCodeU32(map) => {
            let code = snap.get_u32(def.key)?;
            legacy::lookup_u32(map, code).map(PrefValue::U32)
        }
        Fallback::FirstTrueByte(flags) => flags.iter().find_map(|(flag_key, ordinal)| {
            match snap.get_binary(flag_key, 1) {
                Some([b]) if *b != 0 => Some(PrefValue::Binary(vec![*ordinal])),
                _ => None,
            }
        }),
    }
}

/// Resolve one setting and write the winner back under the canonical key.
fn resolve(snap: &mut Snapshot, def: &SettingDef) -> PrefValue {
    let value = read_kinded(snap, def.key, def.kind)
        .filter(|value| is_legal(value, def.legal))
        .or_else(|| {
            def.fallbacks
                .iter()
                .find_map(|fallback| try_fallback(snap, def, fallback))
        })
        .unwrap_or_else(|| def.default.to_value());
    snap.set(def.key, value.clone());
    value
}

fn resolve_bool(snap: &mut Snapshot, def: &SettingDef) -> bool {
    matches!(resolve(snap, def), PrefValue::Bool(true))
}

fn resolve_u32(snap: &mut Snapshot, def: &SettingDef) -> u32 {
    match resolve(snap, def) {
        PrefValue::U32(v) => v,
        _ => match def.default {
            DefaultValue::U32(v) => v,
            _ => 0,
        },
    }
}

fn resolve_int(snap: &mut Snapshot, def: &SettingDef) -> i64 {
    match resolve(snap, def) {
        PrefValue::Int(v) => v,
        _ => match def.default {
            DefaultValue::Int(v) => v,
            _ => 0,
        },
    }
}

fn resolve_string(snap: &mut Snapshot, def: &SettingDef) -> String {
    match resolve(snap, def) {
        PrefValue::Str(s) => s,
        _ => String::new(),
    }
}

fn resolve_bytes<const N: usize>(snap: &mut Snapshot, def: &SettingDef) -> [u8; N] {
    let mut out = [0u8; N];
    let value = resolve(snap, def);
    let bytes = match &value {
        PrefValue::Binary(bytes) if bytes.len() == N => bytes.as_slice(),
        _ => match def.default {
            DefaultValue::Binary(bytes) if bytes.len() == N => bytes,
            _ => return out,
        },
    };
    out.copy_from_slice(bytes);
    out
}

fn resolve_byte(snap: &mut Snapshot, def: &SettingDef) -> u8 {
    resolve_bytes::<1>(snap, def)[0]
}

fn resolve_enum<T: Default>(
    snap: &mut Snapshot,
    def: &SettingDef,
    from_ordinal: fn(u32) -> Option<T>,
) -> T {
    from_ordinal(resolve_u32(snap, def)).unwrap_or_default()
}

/// `Timing` holds the mode ordinal, with the legal `Speed` values depending
/// on the mode; one legacy generation stored a menu ID that encodes both.
fn resolve_timing(snap: &mut Snapshot) -> TimingPrefs {
    let raw = snap.get_u32("Timing");
    let (mode, speed) = match raw.and_then(TimingMode::from_ordinal) {
        Some(mode) => {
            let speeds = match mode {
                TimingMode::FixedSpeed => FIXED_SPEED_MULTIPLIERS,
                TimingMode::FixedFps => FIXED_FPS_SPEEDS,
            };
            let speed = snap
                .get_int("Speed")
                .filter(|speed| speeds.contains(speed))
                .unwrap_or_else(|| mode.default_speed());
            (mode, speed)
        }
        None => raw
            .and_then(legacy::timing_from_code)
            .unwrap_or((TimingMode::FixedSpeed, 100)),
    };
    snap.set_u32("Timing", mode.ordinal());
    snap.set_int("Speed", speed);
    TimingPrefs { mode, speed }
}

/// `WinSizeX`/`WinSizeY` win over the legacy `WinSize` preset menu ID;
/// preset code 40281 meant "custom, read WinSizeX/WinSizeY" and needs no
/// special case here since the explicit sizes are tried first.
fn resolve_window_size(snap: &mut Snapshot) -> WindowSize {
    let width = snap.get_u32("WinSizeX").filter(|w| *w > 0);
    let height = snap.get_u32("WinSizeY").filter(|h| *h > 0);
    let size = match (width, height) {
        (Some(width), Some(height)) => WindowSize::new(width, height),
        _ => snap
            .get_u32("WinSize")
            .and_then(legacy::window_size_from_code)
            .unwrap_or_default(),
    };
    snap.set_u32("WinSizeX", size.width);
    snap.set_u32("WinSizeY", size.height);
    size
}

/// The one setting that clamps instead of falling back to the default.
/// Files written before the signed tag existed hold the two's-complement
/// bit pattern in a u32.
fn resolve_tts_rate(snap: &mut Snapshot) -> i64 {
    let rate = snap
        .get_int("TextToSpeechRate")
        .or_else(|| snap.get_u32("TextToSpeechRate").map(legacy::i64_from_dword))
        .map(|rate| rate.clamp(-10, 10))
        .unwrap_or(0);
    snap.set_int("TextToSpeechRate", rate);
    rate
}

fn resolve_serial_port_name(snap: &mut Snapshot) -> String {
    let name = match snap.get_str("SerialPort") {
        Some(stored) => legacy::serial_port_from_hex(stored).unwrap_or_else(|| stored.to_string()),
        None => "COM2".to_string(),
    };
    snap.set_str("SerialPort", name.clone());
    name
}

fn resolve_led(snap: &mut Snapshot, machine: MachineModel) -> (bool, bool, LedColour) {
    let byte = snap
        .get_binary("LED Information", 1)
        .map_or(0, |bytes| bytes[0]);
    let (show_keyboard, mut show_disc, colour) = legacy::unpack_led(byte);
    if !machine.has_disc_hardware() {
        show_disc = false;
    }
    snap.set_binary(
        "LED Information",
        vec![legacy::pack_led(show_keyboard, show_disc, colour)],
    );
    (show_keyboard, show_disc, colour)
}

/// Old files stored the whole window rectangle as a 16-byte blob.
fn resolve_window_pos(snap: &mut Snapshot) -> (i64, i64) {
    let pos = match (snap.get_int("WindowPosX"), snap.get_int("WindowPosY")) {
        (Some(x), Some(y)) => Some((x, y)),
        _ => snap
            .get_binary("WindowPos", 16)
            .and_then(legacy::rect_origin),
    };
    let (x, y) = pos.unwrap_or((-1, -1));
    snap.set_int("WindowPosX", x);
    snap.set_int("WindowPosY", y);
    (x, y)
}

fn resolve_teletext_source(snap: &mut Snapshot) -> TeletextSource {
    let source = snap
        .get_binary("TeletextAdapterSource", 1)
        .and_then(|bytes| TeletextSource::from_ordinal(bytes[0]))
        .unwrap_or_else(|| {
            let localhost = snap.get_bool("TeletextLocalhost").unwrap_or(false);
            let custom = snap.get_bool("TeletextCustom").unwrap_or(false);
            if localhost || custom {
                TeletextSource::Ip
            } else {
                TeletextSource::File
            }
        });
    snap.set_binary("TeletextAdapterSource", vec![source.ordinal()]);
    source
}

fn resolve_teletext_channels(
    snap: &mut Snapshot,
    data_paths: &dyn DataPathResolver,
    discs_path: &str,
) -> [TeletextChannel; TELETEXT_CHANNEL_COUNT] {
    std::array::from_fn(|ch| {
        let file_key = format!("TeletextFile{ch}");
        let file_name = match snap.get_str(&file_key) {
            Some(name) => name.to_string(),
            None => data_paths
                .resolve(discs_path)
                .join(format!("txt{ch}.dat"))
                .to_string_lossy()
                .into_owned(),
        };
        snap.set_str(&file_key, file_name.clone());

        let ip_key = format!("TeletextIP{ch}");
        let ip_address = snap
            .get_str(&ip_key)
            .or_else(|| snap.get_str(&format!("TeletextCustomIP{ch}")))
            .map_or_else(|| "127.0.0.1".to_string(), str::to_string);
        snap.set_str(&ip_key, ip_address.clone());

        let port_key = format!("TeletextPort{ch}");
        let port = snap
            .get_u32(&port_key)
            .or_else(|| snap.get_u32(&format!("TeletextCustomPort{ch}")))
            .and_then(|port| u16::try_from(port).ok())
            .unwrap_or(TELETEXT_BASE_PORT + ch as u16);
        snap.set_u32(&port_key, port.into());

        TeletextChannel {
            file_name,
            ip_address,
            port,
        }
    })
}

fn resolve_fdc(snap: &mut Snapshot, defaults: &[String; 3]) -> [String; 3] {
    std::array::from_fn(|machine| {
        let key = format!("FDCDLL{machine}");
        let value = snap
            .get_str(&key)
            .map_or_else(|| defaults[machine].clone(), str::to_string);
        snap.set_str(&key, value.clone());
        value
    })
}

fn resolve_cmos(snap: &Snapshot, key: &str) -> Option<[u8; CMOS_RAM_LEN]> {
    snap.get_binary(key, CMOS_RAM_LEN).map(|bytes| {
        let mut data = [0u8; CMOS_RAM_LEN];
        data.copy_from_slice(bytes);
        data
    })
}

/// Resolve every setting, migrating the snapshot in place.
pub(crate) fn resolve_all(snap: &mut Snapshot, data_paths: &dyn DataPathResolver) -> Preferences {
    for key in schema::OBSOLETE_KEYS {
        snap.erase(key);
    }

    let mut prefs = Preferences::default();

    prefs.machine =
        MachineModel::from_ordinal(resolve_byte(snap, &schema::MACHINE_TYPE)).unwrap_or_default();
    prefs.tube =
        TubeDevice::from_ordinal(resolve_byte(snap, &schema::TUBE_TYPE)).unwrap_or_default();
    prefs.basic_hardware_only = resolve_bool(snap, &schema::BASIC_HARDWARE);
    prefs.write_protect_on_load = resolve_bool(snap, &schema::WRITE_PROTECT_ON_LOAD);
    prefs.keyboard_links =
        u8::try_from(resolve_u32(snap, &schema::KEYBOARD_LINKS)).unwrap_or_default();
    prefs.write_instruction_counts = resolve_bool(snap, &schema::WRITE_INSTRUCTION_COUNTS);

    prefs.display.renderer =
        resolve_enum(snap, &schema::DISPLAY_RENDERER, DisplayRenderer::from_ordinal);
    prefs.display.dx_smoothing = resolve_bool(snap, &schema::DX_SMOOTHING);
    prefs.display.dx_smooth_mode7_only = resolve_bool(snap, &schema::DX_SMOOTH_MODE7_ONLY);
    prefs.display.full_screen_mode =
        resolve_enum(snap, &schema::FULL_SCREEN_MODE, FullScreenMode::from_ordinal);
    prefs.display.window_size = resolve_window_size(snap);
    prefs.display.full_screen = resolve_bool(snap, &schema::FULL_SCREEN);
    prefs.display.maintain_aspect_ratio = resolve_bool(snap, &schema::MAINTAIN_ASPECT_RATIO);
    prefs.display.show_fps = resolve_bool(snap, &schema::SHOW_FPS);
    prefs.display.palette =
        PaletteType::from_ordinal(resolve_byte(snap, &schema::MONITOR)).unwrap_or_default();
    prefs.display.hide_menu = resolve_bool(snap, &schema::HIDE_MENU);

    let (show_keyboard_leds, show_disc_leds, led_colour) = resolve_led(snap, prefs.machine);
    prefs.display.show_keyboard_leds = show_keyboard_leds;
    prefs.display.show_disc_leds = show_disc_leds;
    prefs.display.led_colour = led_colour;

    prefs.display.motion_blur = resolve_u32(snap, &schema::MOTION_BLUR);
    prefs.display.blur_intensities = resolve_bytes(snap, &schema::BLUR_INTENSITIES);
    prefs.display.text_view = resolve_bool(snap, &schema::TEXT_VIEW);

    let (window_x, window_y) = resolve_window_pos(snap);
    prefs.display.window_x = window_x;
    prefs.display.window_y = window_y;

    prefs.timing = resolve_timing(snap);

    prefs.sound.streamer = resolve_enum(snap, &schema::SOUND_STREAMER, SoundStreamer::from_ordinal);
    prefs.sound.enabled = resolve_bool(snap, &schema::SOUND_ENABLED);
    prefs.sound.chip_enabled = resolve_bool(snap, &schema::SOUND_CHIP);
    prefs.sound.sample_rate = resolve_int(snap, &schema::SAMPLE_RATE);
    prefs.sound.volume = resolve_int(snap, &schema::SOUND_VOLUME);
    prefs.sound.relay_sound = resolve_bool(snap, &schema::RELAY_SOUND);
    prefs.sound.tape_sound = resolve_bool(snap, &schema::TAPE_SOUND);
    prefs.sound.disc_drive_sound = resolve_bool(snap, &schema::DISC_DRIVE_SOUND);
    prefs.sound.part_samples = resolve_bool(snap, &schema::PART_SAMPLES);
    prefs.sound.exponential_volume = resolve_bool(snap, &schema::EXPONENTIAL_VOLUME);
    prefs.sound.music5000 = resolve_bool(snap, &schema::MUSIC_5000);
    prefs.sound.text_to_speech = resolve_bool(snap, &schema::TTS_ENABLED);
    prefs.sound.tts_auto_speak = resolve_bool(snap, &schema::TTS_AUTO_SPEAK);
    prefs.sound.tts_speak_punctuation = resolve_bool(snap, &schema::TTS_PUNCTUATION);
    prefs.sound.tts_rate = resolve_tts_rate(snap);
    prefs.sound.speech_enabled = resolve_bool(snap, &schema::SPEECH_ENABLED);

    prefs.input.joystick = resolve_enum(snap, &schema::STICKS, JoystickOption::from_ordinal);
    prefs.input.freeze_when_inactive = resolve_bool(snap, &schema::FREEZE_WHEN_INACTIVE);
    prefs.input.hide_cursor = resolve_bool(snap, &schema::HIDE_CURSOR);
    prefs.input.capture_mouse = resolve_bool(snap, &schema::CAPTURE_MOUSE);
    prefs.input.key_mapping =
        resolve_enum(snap, &schema::KEY_MAPPING, KeyboardMapping::from_ordinal);
    prefs.input.user_key_map_file = resolve_string(snap, &schema::USER_KEY_MAP_FILE);
    prefs.input.map_a_s_keys = resolve_bool(snap, &schema::KEY_MAP_AS);
    prefs.input.map_function_keys = resolve_bool(snap, &schema::KEY_MAP_FUNC);
    prefs.input.disable_break_key = resolve_bool(snap, &schema::DISABLE_KEYS_BREAK);
    prefs.input.disable_escape_key = resolve_bool(snap, &schema::DISABLE_KEYS_ESCAPE);
    prefs.input.disable_shortcut_keys = resolve_bool(snap, &schema::DISABLE_KEYS_SHORTCUT);
    prefs.input.bit_keys = resolve_bytes(snap, &schema::BIT_KEYS);

    prefs.amx.enabled = resolve_bool(snap, &schema::AMX_ENABLED);
    prefs.amx.lr_for_middle = resolve_u32(snap, &schema::AMX_LR_FOR_MIDDLE) != 0;
    prefs.amx.size = resolve_enum(snap, &schema::AMX_SIZE, AmxSize::from_ordinal);
    prefs.amx.adjust = resolve_int(snap, &schema::AMX_ADJUST);

    prefs.printer.enabled = resolve_bool(snap, &schema::PRINTER_ENABLED);
    prefs.printer.port = resolve_enum(snap, &schema::PRINTER_PORT, PrinterPort::from_ordinal);
    prefs.printer.file_name = resolve_string(snap, &schema::PRINTER_FILE);

    prefs.tape.clock_speed =
        u16::from_le_bytes(resolve_bytes::<2>(snap, &schema::TAPE_CLOCK_SPEED));
    prefs.tape.unlock = resolve_bool(snap, &schema::UNLOCK_TAPE);

    prefs.serial.enabled = resolve_bool(snap, &schema::SERIAL_PORT_ENABLED);
    let touch_screen = resolve_bool(snap, &schema::TOUCH_SCREEN_ENABLED);
    let ip232 = resolve_bool(snap, &schema::IP232_ENABLED);
    prefs.serial.destination = if touch_screen {
        SerialDestination::TouchScreen
    } else if ip232 {
        SerialDestination::Ip232
    } else {
        SerialDestination::SerialPort
    };
    prefs.serial.ip232_address = resolve_string(snap, &schema::IP232_ADDRESS);
    prefs.serial.ip232_port = resolve_u32(snap, &schema::IP232_PORT);
    prefs.serial.ip232_mode = resolve_bool(snap, &schema::IP232_MODE);
    prefs.serial.ip232_raw = resolve_bool(snap, &schema::IP232_RAW);
    prefs.serial.port_name = resolve_serial_port_name(snap);
    prefs.serial.econet = resolve_bool(snap, &schema::ECONET_ENABLED);

    let writable = resolve_bytes::<16>(snap, &schema::SWRAM_WRITABLE);
    prefs.hardware.swram_writable = writable.map(|slot| slot != 0);
    prefs.hardware.swram_board_enabled = resolve_bool(snap, &schema::SWRAM_BOARD);

    prefs.teletext.half_mode = resolve_bool(snap, &schema::TELETEXT_HALF_MODE);
    prefs.teletext.adapter_enabled = resolve_bool(snap, &schema::TELETEXT_ADAPTER_ENABLED);
    prefs.teletext.source = resolve_teletext_source(snap);

    prefs.paths.discs_path = resolve_string(snap, &schema::DISCS_PATH);
    prefs.paths.discs_filter = resolve_u32(snap, &schema::DISCS_FILTER);
    prefs.paths.tapes_path = resolve_string(snap, &schema::TAPES_PATH);
    prefs.paths.states_path = resolve_string(snap, &schema::STATES_PATH);
    prefs.paths.avi_path = resolve_string(snap, &schema::AVI_PATH);
    prefs.paths.image_path = resolve_string(snap, &schema::IMAGE_PATH);
    prefs.paths.hard_drive_path = resolve_string(snap, &schema::HARD_DRIVE_PATH);
    let fdc_defaults = prefs.paths.fdc_dll.clone();
    prefs.paths.fdc_dll = resolve_fdc(snap, &fdc_defaults);

    let discs_path = prefs.paths.discs_path.clone();
    prefs.teletext.channels = resolve_teletext_channels(snap, data_paths, &discs_path);

    prefs.hardware.floppy_drive_enabled = resolve_bool(snap, &schema::FLOPPY_DRIVE_ENABLED);
    prefs.hardware.scsi_drive_enabled = resolve_bool(snap, &schema::SCSI_DRIVE_ENABLED);
    prefs.hardware.ide_drive_enabled = resolve_bool(snap, &schema::IDE_DRIVE_ENABLED);
    prefs.hardware.userport_rtc_enabled = resolve_bool(snap, &schema::USERPORT_RTC_ENABLED);
    prefs.hardware.userport_rtc_registers =
        resolve_bytes(snap, &schema::USERPORT_RTC_REGISTERS);

    prefs.capture.video_resolution =
        resolve_enum(snap, &schema::CAPTURE_RESOLUTION, CaptureResolution::from_ordinal);
    prefs.capture.frame_skip = resolve_int(snap, &schema::CAPTURE_FRAME_SKIP);
    prefs.capture.bitmap_resolution = resolve_enum(
        snap,
        &schema::BITMAP_CAPTURE_RESOLUTION,
        BitmapCaptureResolution::from_ordinal,
    );
    prefs.capture.bitmap_format = resolve_enum(
        snap,
        &schema::BITMAP_CAPTURE_FORMAT,
        BitmapCaptureFormat::from_ordinal,
    );

    prefs.autosave.cmos = resolve_bool(snap, &schema::AUTOSAVE_CMOS);
    prefs.autosave.folders = resolve_bool(snap, &schema::AUTOSAVE_FOLDERS);
    prefs.autosave.all = resolve_bool(snap, &schema::AUTOSAVE_ALL);

    prefs.cmos_master128 = resolve_cmos(snap, "CMOSRam");
    prefs.cmos_master_et = resolve_cmos(snap, "CMOSRamMasterET");

    snap.set_str("PrefsVersion", PREFS_VERSION);

    prefs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::NoDataPath;

    #[test]
    fn test_empty_snapshot_resolves_to_documented_defaults() {
        let mut snap = Snapshot::new();
        let prefs = resolve_all(&mut snap, &NoDataPath);
        assert_eq!(prefs, Preferences::default());
        assert_eq!(snap.get_str("PrefsVersion"), Some("2.1"));
    }

    #[test]
    fn test_resolved_values_carry_the_canonical_tag() {
        let mut snap = Snapshot::new();
        for def in schema::ALL_SETTINGS {
            let value = resolve(&mut snap, def);
            let matches = match def.kind {
                Kind::Str => matches!(value, PrefValue::Str(_)),
                Kind::U32 => matches!(value, PrefValue::U32(_)),
                Kind::Bool => matches!(value, PrefValue::Bool(_)),
                Kind::Int => matches!(value, PrefValue::Int(_)),
                Kind::Binary(len) => {
                    matches!(&value, PrefValue::Binary(bytes) if bytes.len() == len)
                }
            };
            assert!(matches, "wrong tag resolved for {}", def.key);
            assert!(snap.has(def.key));
        }
    }

    #[test]
    fn test_volume_menu_id_migrates_to_value() {
        let mut snap = Snapshot::new();
        snap.set_u32("SoundVolume", 40017);
        let prefs = resolve_all(&mut snap, &NoDataPath);
        assert_eq!(prefs.sound.volume, 75);
        assert_eq!(snap.get_int("SoundVolume"), Some(75));
        assert_eq!(snap.get_u32("SoundVolume"), None);
    }

    #[test]
    fn test_out_of_set_volume_falls_back_to_default() {
        let mut snap = Snapshot::new();
        snap.set_int("SoundVolume", 999);
        let prefs = resolve_all(&mut snap, &NoDataPath);
        assert_eq!(prefs.sound.volume, 100);
        assert_eq!(snap.get_int("SoundVolume"), Some(100));
    }

    #[test]
    fn test_unknown_machine_byte_resolves_to_model_b() {
        let mut snap = Snapshot::new();
        snap.set_binary("MachineType", vec![7u8]);
        let prefs = resolve_all(&mut snap, &NoDataPath);
        assert_eq!(prefs.machine, MachineModel::B);
        assert_eq!(snap.get_binary("MachineType", 1), Some(&[0u8][..]));
    }

    #[test]
    fn test_canonical_value_wins_over_renamed_key() {
        let mut snap = Snapshot::new();
        snap.set_bool("ShowFPS", false);
        snap.set_bool("ShowFSP", true);
        let prefs = resolve_all(&mut snap, &NoDataPath);
        assert!(!prefs.display.show_fps);
    }

    #[test]
    fn test_renamed_key_applies_when_canonical_missing() {
        let mut snap = Snapshot::new();
        snap.set_bool("ShowFSP", false);
        let prefs = resolve_all(&mut snap, &NoDataPath);
        assert!(!prefs.display.show_fps);
        assert_eq!(snap.get_bool("ShowFPS"), Some(false));
    }

    #[test]
    fn test_tube_derived_from_legacy_enablement_flags() {
        let mut snap = Snapshot::new();
        snap.set_binary("TubeEnabled", vec![0u8]);
        snap.set_binary("TorchTube", vec![1u8]);
        let prefs = resolve_all(&mut snap, &NoDataPath);
        assert_eq!(prefs.tube, TubeDevice::TorchZ80);
        assert_eq!(snap.get_binary("TubeType", 1), Some(&[4u8][..]));
    }

    #[test]
    fn test_timing_menu_code_sets_mode_and_speed() {
        let mut snap = Snapshot::new();
        snap.set_u32("Timing", 40026);
        let prefs = resolve_all(&mut snap, &NoDataPath);
        assert_eq!(prefs.timing.mode, TimingMode::FixedFps);
        assert_eq!(prefs.timing.speed, 25);
        assert_eq!(snap.get_u32("Timing"), Some(1));
        assert_eq!(snap.get_int("Speed"), Some(25));
    }

    #[test]
    fn test_speed_outside_mode_whitelist_takes_mode_default() {
        let mut snap = Snapshot::new();
        snap.set_u32("Timing", 1);
        snap.set_int("Speed", 200);
        let prefs = resolve_all(&mut snap, &NoDataPath);
        assert_eq!(prefs.timing.mode, TimingMode::FixedFps);
        assert_eq!(prefs.timing.speed, 50);
    }

    #[test]
    fn test_tts_rate_clamps_instead_of_defaulting() {
        let mut snap = Snapshot::new();
        snap.set_int("TextToSpeechRate", 42);
        let prefs = resolve_all(&mut snap, &NoDataPath);
        assert_eq!(prefs.sound.tts_rate, 10);

        let mut snap = Snapshot::new();
        snap.set_u32("TextToSpeechRate", 0xFFFF_FFF0);
        let prefs = resolve_all(&mut snap, &NoDataPath);
        assert_eq!(prefs.sound.tts_rate, -10);
    }

    #[test]
    fn test_serial_port_hex_value_is_rewritten() {
        let mut snap = Snapshot::new();
        snap.set_str("SerialPort", "0a");
        let prefs = resolve_all(&mut snap, &NoDataPath);
        assert_eq!(prefs.serial.port_name, "COM10");
        assert_eq!(snap.get_str("SerialPort"), Some("COM10"));
    }

    #[test]
    fn test_explicit_window_size_wins_over_preset_code() {
        let mut snap = Snapshot::new();
        snap.set_u32("WinSize", 40008);
        snap.set_u32("WinSizeX", 800);
        snap.set_u32("WinSizeY", 600);
        let prefs = resolve_all(&mut snap, &NoDataPath);
        assert_eq!(prefs.display.window_size, WindowSize::new(800, 600));
    }

    #[test]
    fn test_window_size_preset_code_applies_without_explicit_size() {
        let mut snap = Snapshot::new();
        snap.set_u32("WinSize", 40005);
        let prefs = resolve_all(&mut snap, &NoDataPath);
        assert_eq!(prefs.display.window_size, WindowSize::new(320, 256));
        assert_eq!(snap.get_u32("WinSizeX"), Some(320));
    }

    #[test]
    fn test_disc_leds_forced_off_on_master_et() {
        let mut snap = Snapshot::new();
        snap.set_binary("MachineType", vec![4u8]);
        snap.set_binary("LED Information", vec![0b0000_0111u8]);
        let prefs = resolve_all(&mut snap, &NoDataPath);
        assert!(prefs.display.show_keyboard_leds);
        assert!(!prefs.display.show_disc_leds);
        assert_eq!(prefs.display.led_colour, LedColour::Green);
        assert_eq!(snap.get_binary("LED Information", 1), Some(&[0b101u8][..]));
    }

    #[test]
    fn test_legacy_window_rect_provides_origin() {
        let mut rect = Vec::new();
        for v in [120i32, 80, 760, 592] {
            rect.extend_from_slice(&v.to_le_bytes());
        }
        let mut snap = Snapshot::new();
        snap.set_binary("WindowPos", rect);
        let prefs = resolve_all(&mut snap, &NoDataPath);
        assert_eq!(prefs.display.window_x, 120);
        assert_eq!(prefs.display.window_y, 80);
    }

    #[test]
    fn test_obsolete_keys_are_erased() {
        let mut snap = Snapshot::new();
        snap.set_u32("Volume", 40017);
        snap.set_bool("IP232custom", true);
        let _ = resolve_all(&mut snap, &NoDataPath);
        assert!(!snap.has("Volume"));
        assert!(!snap.has("IP232custom"));
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let mut snap = Snapshot::new();
        snap.set_u32("SoundVolume", 40017);
        snap.set_u32("Timing", 40026);
        snap.set_str("SerialPort", "0a");
        snap.set_binary("TubeEnabled", vec![1u8]);

        let first = resolve_all(&mut snap, &NoDataPath);
        let after_first: Vec<_> = snap
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();

        let second = resolve_all(&mut snap, &NoDataPath);
        let after_second: Vec<_> = snap
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();

        assert_eq!(first, second);
        assert_eq!(after_first, after_second);
    }

    #[test]
    fn test_teletext_channel_fallbacks() {
        let mut snap = Snapshot::new();
        snap.set_str("TeletextCustomIP1", "10.0.0.7");
        snap.set_u32("TeletextCustomPort1", 20000);
        let prefs = resolve_all(&mut snap, &NoDataPath);
        assert_eq!(prefs.teletext.channels[1].ip_address, "10.0.0.7");
        assert_eq!(prefs.teletext.channels[1].port, 20000);
        assert_eq!(prefs.teletext.channels[0].ip_address, "127.0.0.1");
        assert_eq!(prefs.teletext.channels[0].port, TELETEXT_BASE_PORT);
        assert_eq!(prefs.teletext.channels[2].file_name, "DiscIms/txt2.dat");
    }

    #[test]
    fn test_amx_size_menu_id() {
        let mut snap = Snapshot::new();
        snap.set_u32("AMXMouseSize", 40080);
        let prefs = resolve_all(&mut snap, &NoDataPath);
        assert_eq!(prefs.amx.size, AmxSize::Size640x256);
    }
}
