//! Decoding tables for values written by earlier application generations.
//!
//! Several generations of the emulator wrote raw Windows menu resource
//! identifiers into the preferences file instead of small ordinals, packed
//! flags into single bytes, or stored a value under a since-renamed key.
//! Everything here is a pure, total function over those historical
//! encodings: an unrecognized code simply decodes to `None` and the caller
//! falls back to the documented default. Nothing in this module touches a
//! snapshot or performs I/O.

use prefs_model::{LedColour, TimingMode, WindowSize};

/// `DisplayRenderer` menu IDs to ordinals.
pub(crate) const DISPLAY_RENDERER_CODES: &[(u32, u32)] = &[(40217, 0), (40218, 1), (40219, 2)];

/// `DDFullScreenMode` menu IDs to ordinals.
pub(crate) const FULL_SCREEN_MODE_CODES: &[(u32, u32)] = &[
    (40102, 0),
    (40099, 1),
    (40279, 2),
    (40280, 3),
    (40100, 4),
    (40288, 5),
    (40101, 6),
    (40221, 7),
    (40222, 8),
    (40223, 9),
    (40224, 10),
    (40289, 11),
    (40294, 12),
    (40295, 13),
];

/// `MotionBlur` menu IDs to frame counts.
pub(crate) const MOTION_BLUR_CODES: &[(u32, u32)] =
    &[(40177, 0), (40178, 2), (40179, 4), (40180, 8)];

/// `Sticks` menu IDs to joystick option ordinals.
pub(crate) const JOYSTICK_CODES: &[(u32, u32)] = &[(40030, 1), (40205, 2), (40206, 3)];

/// `KeyMapping` menu IDs to keyboard mapping ordinals.
pub(crate) const KEY_MAPPING_CODES: &[(u32, u32)] = &[(40060, 0), (40034, 1), (40035, 2)];

/// `AMXMouseSize` menu IDs to AMX size ordinals.
pub(crate) const AMX_SIZE_CODES: &[(u32, u32)] = &[(40078, 0), (40079, 1), (40080, 2)];

/// `PrinterPort` menu IDs to printer port ordinals.
pub(crate) const PRINTER_PORT_CODES: &[(u32, u32)] = &[
    (40081, 0),
    (40244, 1),
    (40082, 2),
    (40083, 3),
    (40084, 4),
    (40085, 5),
];

/// `CaptureResolution` menu IDs to video capture resolution ordinals.
pub(crate) const CAPTURE_RESOLUTION_CODES: &[(u32, u32)] = &[(40185, 0), (40186, 1), (40187, 2)];

/// `BitmapCaptureResolution` menu IDs to ordinals.
pub(crate) const BITMAP_RESOLUTION_CODES: &[(u32, u32)] =
    &[(40262, 0), (40263, 1), (40264, 2), (40265, 3)];

/// `BitmapCaptureFormat` menu IDs to ordinals.
pub(crate) const BITMAP_FORMAT_CODES: &[(u32, u32)] =
    &[(40266, 0), (40267, 1), (40268, 2), (40269, 3)];

/// `SampleRate` menu IDs to sample rates in Hz.
pub(crate) const SAMPLE_RATE_CODES: &[(u32, i64)] = &[(40016, 11025), (40015, 22050), (40014, 44100)];

/// `SoundVolume` menu IDs to volume percentages.
pub(crate) const VOLUME_CODES: &[(u32, i64)] = &[(40017, 75), (40018, 50), (40019, 25), (40021, 100)];

/// `AMXMouseAdjust` menu IDs to adjustment values.
pub(crate) const AMX_ADJUST_CODES: &[(u32, i64)] = &[
    (40072, 50),
    (40073, 30),
    (40074, 10),
    (40075, -10),
    (40076, -30),
    (40077, -50),
];

/// `FrameSkip` menu IDs to skip counts.
pub(crate) const FRAME_SKIP_CODES: &[(u32, i64)] = &[
    (40188, 0),
    (40189, 1),
    (40190, 2),
    (40191, 3),
    (40192, 4),
    (40193, 5),
];

/// `WinSize` menu ID meaning "custom size, read WinSizeX/WinSizeY".
pub(crate) const CUSTOM_WINDOW_SIZE_CODE: u32 = 40281;

const WINDOW_SIZE_CODES: &[(u32, WindowSize)] = &[
    (40005, WindowSize::new(320, 256)),
    (40006, WindowSize::new(640, 512)),
    (40007, WindowSize::new(800, 600)),
    (40008, WindowSize::new(1024, 768)),
    (40009, WindowSize::new(1024, 512)),
    (40225, WindowSize::new(1280, 1024)),
    (40226, WindowSize::new(1440, 1080)),
    (40227, WindowSize::new(1600, 1200)),
];

const TIMING_CODES: &[(u32, (TimingMode, i64))] = &[
    (40024, (TimingMode::FixedSpeed, 100)),
    (40025, (TimingMode::FixedFps, 50)),
    (40026, (TimingMode::FixedFps, 25)),
    (40027, (TimingMode::FixedFps, 10)),
    (40028, (TimingMode::FixedFps, 5)),
    (40029, (TimingMode::FixedFps, 1)),
    (40151, (TimingMode::FixedSpeed, 10000)),
    (40154, (TimingMode::FixedSpeed, 500)),
    (40155, (TimingMode::FixedSpeed, 200)),
    (40156, (TimingMode::FixedSpeed, 150)),
    (40157, (TimingMode::FixedSpeed, 125)),
    (40158, (TimingMode::FixedSpeed, 110)),
    (40159, (TimingMode::FixedSpeed, 90)),
    (40160, (TimingMode::FixedSpeed, 75)),
    (40161, (TimingMode::FixedSpeed, 5000)),
    (40162, (TimingMode::FixedSpeed, 25)),
    (40163, (TimingMode::FixedSpeed, 1000)),
    (40164, (TimingMode::FixedSpeed, 50)),
    (40165, (TimingMode::FixedSpeed, 10)),
];

pub(crate) fn lookup_u32(map: &[(u32, u32)], code: u32) -> Option<u32> {
    map.iter().find(|(c, _)| *c == code).map(|(_, v)| *v)
}

pub(crate) fn lookup_i64(map: &[(u32, i64)], code: u32) -> Option<i64> {
    map.iter().find(|(c, _)| *c == code).map(|(_, v)| *v)
}

/// Decode a legacy `WinSize` preset menu ID.
///
/// Returns `None` for [`CUSTOM_WINDOW_SIZE_CODE`] and for unknown codes;
/// the caller distinguishes the two by checking the code itself.
pub(crate) fn window_size_from_code(code: u32) -> Option<WindowSize> {
    WINDOW_SIZE_CODES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, size)| *size)
}

/// Decode a legacy speed/frame-rate menu ID into a timing mode and speed.
pub(crate) fn timing_from_code(code: u32) -> Option<(TimingMode, i64)> {
    TIMING_CODES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, timing)| *timing)
}

/// Rewrite a pre-4.18 serial port value to a modern port name.
///
/// Old files stored the port as two hex digits ("0a"); newer ones store
/// the full name ("COM10"). Anything that is not exactly two hex digits
/// is already a port name and passes through unchanged.
pub(crate) fn serial_port_from_hex(name: &str) -> Option<String> {
    let bytes = name.as_bytes();
    if bytes.len() == 2 && bytes.iter().all(u8::is_ascii_hexdigit) {
        u32::from_str_radix(name, 16).ok().map(|n| format!("COM{n}"))
    } else {
        None
    }
}

/// Unpack the `LED Information` flag byte.
///
/// Bit 0 shows the keyboard LEDs, bit 1 the disc LEDs, bit 2 selects the
/// green colour scheme.
pub(crate) fn unpack_led(byte: u8) -> (bool, bool, LedColour) {
    let show_keyboard = byte & 0x01 != 0;
    let show_disc = byte & 0x02 != 0;
    let colour = if byte & 0x04 != 0 {
        LedColour::Green
    } else {
        LedColour::Red
    };
    (show_keyboard, show_disc, colour)
}

/// Pack the `LED Information` flag byte.
pub(crate) fn pack_led(show_keyboard: bool, show_disc: bool, colour: LedColour) -> u8 {
    u8::from(show_keyboard)
        | (u8::from(show_disc) << 1)
        | (u8::from(colour == LedColour::Green) << 2)
}

/// Reinterpret a stored DWORD as a signed value.
///
/// Pre-dates the signed integer tag: negative numbers were written as
/// their two's-complement 32-bit pattern.
pub(crate) fn i64_from_dword(value: u32) -> i64 {
    i64::from(value as i32)
}

/// Origin of a legacy `WindowPos` blob.
///
/// Old files stored the whole window rectangle as four little-endian
/// 32-bit fields (left, top, right, bottom); only the origin is useful.
pub(crate) fn rect_origin(bytes: &[u8]) -> Option<(i64, i64)> {
    if bytes.len() != 16 {
        return None;
    }
    let field = |at: usize| {
        let mut buf = [0u8; 4];
        buf.copy_from_slice(&bytes[at..at + 4]);
        i64::from(i32::from_le_bytes(buf))
    };
    Some((field(0), field(4)))
}
