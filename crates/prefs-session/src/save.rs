//! Writing resolved preferences back into a snapshot.
//!
//! Split the way the periodic autosave needs it: `write_all` covers the
//! full setting catalogue, `write_cmos` just the battery-backed state, and
//! `write_always` the handful of flags persisted on every save. A full
//! save also erases the superseded legacy keys whose canonical
//! replacements it has just written.

use prefs_model::Preferences;
use prefs_store::Snapshot;

use crate::legacy;
use crate::schema;
use crate::session::PREFS_VERSION;

pub(crate) fn write_all(snap: &mut Snapshot, prefs: &Preferences) {
    use prefs_model::SerialDestination;

    snap.set_binary("MachineType", vec![prefs.machine.ordinal()]);
    snap.set_bool("WriteProtectOnLoad", prefs.write_protect_on_load);

    snap.set_u32("DisplayRenderer", prefs.display.renderer.ordinal());
    snap.set_bool("DXSmoothing", prefs.display.dx_smoothing);
    snap.set_bool("DXSmoothMode7Only", prefs.display.dx_smooth_mode7_only);
    snap.set_u32("DDFullScreenMode", prefs.display.full_screen_mode.ordinal());
    snap.set_u32("WinSizeX", prefs.display.window_size.width);
    snap.set_u32("WinSizeY", prefs.display.window_size.height);
    snap.set_bool("FullScreen", prefs.display.full_screen);
    snap.set_bool("MaintainAspectRatio", prefs.display.maintain_aspect_ratio);
    snap.set_bool("ShowFPS", prefs.display.show_fps);
    snap.set_binary("Monitor", vec![prefs.display.palette.ordinal()]);
    snap.set_bool("HideMenuEnabled", prefs.display.hide_menu);
    snap.set_binary(
        "LED Information",
        vec![legacy::pack_led(
            prefs.display.show_keyboard_leds,
            prefs.display.show_disc_leds,
            prefs.display.led_colour,
        )],
    );
    snap.set_u32("MotionBlur", prefs.display.motion_blur);
    snap.set_binary(
        "MotionBlurIntensities",
        prefs.display.blur_intensities.to_vec(),
    );
    snap.set_bool("TextViewEnabled", prefs.display.text_view);
    snap.set_int("WindowPosX", prefs.display.window_x);
    snap.set_int("WindowPosY", prefs.display.window_y);

    snap.set_u32("Timing", prefs.timing.mode.ordinal());
    snap.set_int("Speed", prefs.timing.speed);

    snap.set_u32("SoundConfig::Selection", prefs.sound.streamer.ordinal());
    snap.set_bool("SoundEnabled", prefs.sound.enabled);
    snap.set_bool("SoundChipEnabled", prefs.sound.chip_enabled);
    snap.set_int("SampleRate", prefs.sound.sample_rate);
    snap.set_int("SoundVolume", prefs.sound.volume);
    snap.set_bool("RelaySoundEnabled", prefs.sound.relay_sound);
    snap.set_bool("TapeSoundEnabled", prefs.sound.tape_sound);
    snap.set_bool("DiscDriveSoundEnabled", prefs.sound.disc_drive_sound);
    snap.set_bool("Part Samples", prefs.sound.part_samples);
    snap.set_bool("ExponentialVolume", prefs.sound.exponential_volume);
    snap.set_bool("TextToSpeechEnabled", prefs.sound.text_to_speech);
    snap.set_int("TextToSpeechRate", prefs.sound.tts_rate);
    snap.set_bool("TextToSpeechAutoSpeak", prefs.sound.tts_auto_speak);
    snap.set_bool(
        "TextToSpeechSpeakPunctuation",
        prefs.sound.tts_speak_punctuation,
    );
    snap.set_bool("Music5000Enabled", prefs.sound.music5000);
    snap.set_bool("SpeechEnabled", prefs.sound.speech_enabled);

    snap.set_u32("Sticks", prefs.input.joystick.ordinal());
    snap.set_bool("FreezeWhenInactive", prefs.input.freeze_when_inactive);
    snap.set_bool("HideCursor", prefs.input.hide_cursor);
    snap.set_bool("CaptureMouse", prefs.input.capture_mouse);
    snap.set_u32("KeyMapping", prefs.input.key_mapping.ordinal());
    snap.set_str("UserKeyMapFile", prefs.input.user_key_map_file.clone());
    snap.set_bool("KeyMapAS", prefs.input.map_a_s_keys);
    snap.set_bool("KeyMapFunc", prefs.input.map_function_keys);
    snap.set_bool("DisableKeysBreak", prefs.input.disable_break_key);
    snap.set_bool("DisableKeysEscape", prefs.input.disable_escape_key);
    snap.set_bool("DisableKeysShortcut", prefs.input.disable_shortcut_keys);
    snap.set_binary("BitKeys", prefs.input.bit_keys.to_vec());

    snap.set_bool("AMXMouseEnabled", prefs.amx.enabled);
    snap.set_u32("AMXMouseLRForMiddle", u32::from(prefs.amx.lr_for_middle));
    snap.set_u32("AMXMouseSize", prefs.amx.size.ordinal());
    snap.set_int("AMXMouseAdjust", prefs.amx.adjust);

    snap.set_bool("PrinterEnabled", prefs.printer.enabled);
    snap.set_u32("PrinterPort", prefs.printer.port.ordinal());
    snap.set_str("PrinterFile", prefs.printer.file_name.clone());

    snap.set_binary("Tape Clock Speed", prefs.tape.clock_speed.to_le_bytes().to_vec());
    snap.set_bool("UnlockTape", prefs.tape.unlock);

    snap.set_bool("SerialPortEnabled", prefs.serial.enabled);
    snap.set_bool(
        "TouchScreenEnabled",
        prefs.serial.destination == SerialDestination::TouchScreen,
    );
    snap.set_bool(
        "IP232Enabled",
        prefs.serial.destination == SerialDestination::Ip232,
    );
    snap.set_str("IP232Address", prefs.serial.ip232_address.clone());
    snap.set_u32("IP232Port", prefs.serial.ip232_port);
    snap.set_bool("IP232Mode", prefs.serial.ip232_mode);
    snap.set_bool("IP232Raw", prefs.serial.ip232_raw);
    snap.set_str("SerialPort", prefs.serial.port_name.clone());
    snap.set_bool("EconetEnabled", prefs.serial.econet);

    snap.set_binary(
        "SWRAMWritable",
        prefs.hardware.swram_writable.map(u8::from).to_vec(),
    );
    snap.set_bool("SWRAMBoard", prefs.hardware.swram_board_enabled);

    snap.set_binary("TubeType", vec![prefs.tube.ordinal()]);

    snap.set_bool("Basic Hardware", prefs.basic_hardware_only);
    snap.set_bool("Teletext Half Mode", prefs.teletext.half_mode);
    snap.set_bool("TeletextAdapterEnabled", prefs.teletext.adapter_enabled);
    snap.set_binary(
        "TeletextAdapterSource",
        vec![prefs.teletext.source.ordinal()],
    );

    for (ch, channel) in prefs.teletext.channels.iter().enumerate() {
        snap.set_str(format!("TeletextFile{ch}"), channel.file_name.clone());
        snap.set_str(format!("TeletextIP{ch}"), channel.ip_address.clone());
        snap.set_u32(format!("TeletextPort{ch}"), u32::from(channel.port));
    }

    snap.set_u32("KeyboardLinks", u32::from(prefs.keyboard_links));

    snap.set_bool("FloppyDriveEnabled", prefs.hardware.floppy_drive_enabled);
    snap.set_bool("SCSIDriveEnabled", prefs.hardware.scsi_drive_enabled);
    snap.set_bool("IDEDriveEnabled", prefs.hardware.ide_drive_enabled);
    snap.set_bool("UserPortRTCEnabled", prefs.hardware.userport_rtc_enabled);

    snap.set_u32("CaptureResolution", prefs.capture.video_resolution.ordinal());
    snap.set_int("CaptureFrameSkip", prefs.capture.frame_skip);
    snap.set_u32(
        "BitmapCaptureResolution",
        prefs.capture.bitmap_resolution.ordinal(),
    );
    snap.set_u32("BitmapCaptureFormat", prefs.capture.bitmap_format.ordinal());

    snap.set_str("DiscsPath", prefs.paths.discs_path.clone());
    snap.set_u32("DiscsFilter", prefs.paths.discs_filter);
    snap.set_str("TapesPath", prefs.paths.tapes_path.clone());
    snap.set_str("StatesPath", prefs.paths.states_path.clone());
    snap.set_str("AVIPath", prefs.paths.avi_path.clone());
    snap.set_str("ImagePath", prefs.paths.image_path.clone());
    snap.set_str("HardDrivePath", prefs.paths.hard_drive_path.clone());
    for (machine, dll) in prefs.paths.fdc_dll.iter().enumerate() {
        snap.set_str(format!("FDCDLL{machine}"), dll.clone());
    }

    snap.set_str("PrefsVersion", PREFS_VERSION);

    for key in schema::SUPERSEDED_KEYS {
        snap.erase(key);
    }
}

pub(crate) fn write_cmos(snap: &mut Snapshot, prefs: &Preferences) {
    if let Some(data) = prefs.cmos_master128 {
        snap.set_binary("CMOSRam", data.to_vec());
    }
    if let Some(data) = prefs.cmos_master_et {
        snap.set_binary("CMOSRamMasterET", data.to_vec());
    }
    snap.set_binary(
        "UserPortRTCRegisters",
        prefs.hardware.userport_rtc_registers.to_vec(),
    );
}

pub(crate) fn write_always(snap: &mut Snapshot, prefs: &Preferences) {
    snap.set_bool("AutoSavePrefsCMOS", prefs.autosave.cmos);
    snap.set_bool("AutoSavePrefsFolders", prefs.autosave.folders);
    snap.set_bool("AutoSavePrefsAll", prefs.autosave.all);
    snap.set_bool("WriteInstructionCounts", prefs.write_instruction_counts);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::NoDataPath;
    use crate::resolve::resolve_all;

    #[test]
    fn test_full_save_round_trips_through_resolution() {
        let mut snap = Snapshot::new();
        let mut prefs = resolve_all(&mut snap, &NoDataPath);
        prefs.sound.volume = 25;
        prefs.display.show_fps = false;

        write_all(&mut snap, &prefs);
        write_cmos(&mut snap, &prefs);
        write_always(&mut snap, &prefs);

        let reloaded = resolve_all(&mut snap, &NoDataPath);
        assert_eq!(reloaded, prefs);
    }

    #[test]
    fn test_full_save_erases_superseded_keys() {
        let mut snap = Snapshot::new();
        snap.set_u32("WinSize", 40006);
        snap.set_bool("ShowFSP", true);
        snap.set_bool("RTCEnabled", true);

        let prefs = resolve_all(&mut snap, &NoDataPath);
        write_all(&mut snap, &prefs);

        for key in schema::SUPERSEDED_KEYS {
            assert!(!snap.has(key), "{key} survived a full save");
        }
        assert!(prefs.hardware.userport_rtc_enabled);
        assert_eq!(snap.get_bool("UserPortRTCEnabled"), Some(true));
    }

    #[test]
    fn test_cmos_only_written_when_present() {
        let mut snap = Snapshot::new();
        let prefs = Preferences::default();
        write_cmos(&mut snap, &prefs);
        assert!(!snap.has("CMOSRam"));
        assert!(!snap.has("CMOSRamMasterET"));
        assert!(snap.has("UserPortRTCRegisters"));
    }
}
