//! End-to-end migration tests: legacy files on disk through a full
//! load/save cycle.

use proptest::prelude::*;
use tempfile::tempdir;

use prefs_model::{MachineModel, Preferences, TimingMode, TubeDevice, WindowSize};
use prefs_session::PreferencesSession;
use prefs_store::{LoadOutcome, Snapshot, load_snapshot, save_snapshot};

fn write_file(path: &std::path::Path, fill: impl FnOnce(&mut Snapshot)) {
    let mut snapshot = Snapshot::new();
    fill(&mut snapshot);
    save_snapshot(path, &snapshot).unwrap();
}

fn loaded(path: &std::path::Path) -> Snapshot {
    match load_snapshot(path).unwrap() {
        LoadOutcome::Loaded(snapshot) => snapshot,
        other => panic!("expected a loadable file, got {other:?}"),
    }
}

#[test]
fn test_menu_id_era_file_migrates_in_one_cycle() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Preferences.cfg");

    write_file(&path, |snap| {
        snap.set_u32("SoundVolume", 40017);
        snap.set_u32("SampleRate", 40015);
        snap.set_u32("Timing", 40026);
        snap.set_u32("WinSize", 40008);
        snap.set_u32("DisplayRenderer", 40217);
        snap.set_u32("FrameSkip", 40192);
        snap.set_str("SerialPort", "0a");
        snap.set_binary("MachineType", vec![3u8]);
    });

    let mut session = PreferencesSession::new(&path);
    let (prefs, warnings) = session.load_all();
    assert!(warnings.is_empty());

    assert_eq!(prefs.sound.volume, 75);
    assert_eq!(prefs.sound.sample_rate, 22050);
    assert_eq!(prefs.timing.mode, TimingMode::FixedFps);
    assert_eq!(prefs.timing.speed, 25);
    assert_eq!(prefs.display.window_size, WindowSize::new(1024, 768));
    assert_eq!(prefs.capture.frame_skip, 4);
    assert_eq!(prefs.serial.port_name, "COM10");
    assert_eq!(prefs.machine, MachineModel::Master128);

    session.save_all(&prefs, true).unwrap();

    // The rewritten file carries canonical keys and values only.
    let migrated = loaded(&path);
    assert_eq!(migrated.get_int("SoundVolume"), Some(75));
    assert_eq!(migrated.get_u32("Timing"), Some(1));
    assert_eq!(migrated.get_int("Speed"), Some(25));
    assert_eq!(migrated.get_str("SerialPort"), Some("COM10"));
    assert_eq!(migrated.get_str("PrefsVersion"), Some("2.1"));
    assert!(!migrated.has("WinSize"));
    assert!(!migrated.has("FrameSkip"));
}

#[test]
fn test_pre_tube_type_era_flags_collapse() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Preferences.cfg");

    write_file(&path, |snap| {
        snap.set_binary("TubeEnabled", vec![0u8]);
        snap.set_binary("AcornZ80", vec![1u8]);
        snap.set_binary("Tube186Enabled", vec![1u8]);
    });

    let mut session = PreferencesSession::new(&path);
    let (prefs, _) = session.load_all();
    assert_eq!(prefs.tube, TubeDevice::AcornZ80);

    session.save_all(&prefs, true).unwrap();
    assert_eq!(loaded(&path).get_binary("TubeType", 1), Some(&[3u8][..]));
}

#[test]
fn test_renamed_keys_resolve_and_are_dropped_by_a_full_save() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Preferences.cfg");

    write_file(&path, |snap| {
        snap.set_bool("ShowFSP", false);
        snap.set_bool("RTCEnabled", true);
        snap.set_bool("IP232mode", true);
        snap.set_str("IP232customip", "192.168.1.9");
        snap.set_u32("IP232customport", 30000);
    });

    let mut session = PreferencesSession::new(&path);
    let (prefs, _) = session.load_all();
    assert!(!prefs.display.show_fps);
    assert!(prefs.hardware.userport_rtc_enabled);
    assert!(prefs.serial.ip232_mode);
    assert_eq!(prefs.serial.ip232_address, "192.168.1.9");
    assert_eq!(prefs.serial.ip232_port, 30000);

    session.save_all(&prefs, true).unwrap();

    let migrated = loaded(&path);
    assert_eq!(migrated.get_bool("ShowFPS"), Some(false));
    assert_eq!(migrated.get_bool("UserPortRTCEnabled"), Some(true));
    assert!(!migrated.has("ShowFSP"));
    assert!(!migrated.has("RTCEnabled"));
    assert!(!migrated.has("IP232mode"));
}

#[test]
fn test_obsolete_keys_do_not_reappear() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Preferences.cfg");

    write_file(&path, |snap| {
        snap.set_u32("Volume", 40017);
        snap.set_u32("UserKeyMapRow", 4);
        snap.set_bool("UsePrimaryBuffer", true);
        snap.set_bool("IP232localhost", true);
    });

    let mut session = PreferencesSession::new(&path);
    let (prefs, _) = session.load_all();
    session.save_all(&prefs, true).unwrap();

    let migrated = loaded(&path);
    for key in [
        "Volume",
        "UserKeyMapRow",
        "UsePrimaryBuffer",
        "IP232localhost",
    ] {
        assert!(!migrated.has(key), "{key} reappeared after migration");
    }
}

#[test]
fn test_double_save_produces_byte_identical_files() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Preferences.cfg");

    write_file(&path, |snap| {
        snap.set_u32("SoundVolume", 40018);
        snap.set_u32("Timing", 40029);
        snap.set_binary("MachineType", vec![1u8]);
        snap.set_bool("ShowFSP", true);
    });

    let mut session = PreferencesSession::new(&path);
    let (prefs, _) = session.load_all();
    session.save_all(&prefs, true).unwrap();
    let first = std::fs::read(&path).unwrap();

    let mut session = PreferencesSession::new(&path);
    let (reloaded, _) = session.load_all();
    assert_eq!(reloaded, prefs);
    session.save_all(&reloaded, true).unwrap();
    let second = std::fs::read(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_unknown_machine_byte_falls_back_to_model_b() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Preferences.cfg");

    write_file(&path, |snap| {
        snap.set_binary("MachineType", vec![7u8]);
    });

    let mut session = PreferencesSession::new(&path);
    let (prefs, _) = session.load_all();
    assert_eq!(prefs.machine, MachineModel::B);
}

#[test]
fn test_failed_save_keeps_snapshot_for_retry() {
    let dir = tempdir().unwrap();

    // A directory at the target path makes the final rename fail.
    let as_dir = dir.path().join("Preferences.cfg");
    std::fs::create_dir(&as_dir).unwrap();
    let mut session = PreferencesSession::new(&as_dir);
    let (prefs, _) = session.load_all();
    assert!(session.save_all(&prefs, true).is_err());
    assert!(session.snapshot().is_dirty());
    assert!(session.snapshot().has("SoundVolume"));
}

proptest! {
    /// Whatever a legacy generation left under these keys, resolution
    /// lands on a valid value and never fails.
    #[test]
    fn prop_resolution_is_total_over_raw_codes(
        volume in any::<u32>(),
        timing in any::<u32>(),
        win_size in any::<u32>(),
        machine in any::<u8>(),
    ) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Preferences.cfg");

        write_file(&path, |snap| {
            snap.set_u32("SoundVolume", volume);
            snap.set_u32("Timing", timing);
            snap.set_u32("WinSize", win_size);
            snap.set_binary("MachineType", vec![machine]);
        });

        let mut session = PreferencesSession::new(&path);
        let (prefs, warnings) = session.load_all();

        prop_assert!(warnings.is_empty());
        prop_assert!([25, 50, 75, 100].contains(&prefs.sound.volume));
        match prefs.timing.mode {
            TimingMode::FixedSpeed => prop_assert!(prefs.timing.speed >= 10),
            TimingMode::FixedFps => prop_assert!((1..=50).contains(&prefs.timing.speed)),
        }
        prop_assert!(prefs.display.window_size.width > 0);
        prop_assert!(prefs.machine.ordinal() < MachineModel::COUNT);
    }
}
