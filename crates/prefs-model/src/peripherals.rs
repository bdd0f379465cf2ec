//! Printer, serial port and teletext adapter settings.

use serde::{Deserialize, Serialize};

/// Destination for emulated printer output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrinterPort {
    /// Capture to a file.
    File,
    /// Capture to the host clipboard.
    Clipboard,
    #[default]
    Lpt1,
    Lpt2,
    Lpt3,
    Lpt4,
}

impl PrinterPort {
    pub const COUNT: u32 = 6;

    pub fn ordinal(self) -> u32 {
        match self {
            Self::File => 0,
            Self::Clipboard => 1,
            Self::Lpt1 => 2,
            Self::Lpt2 => 3,
            Self::Lpt3 => 4,
            Self::Lpt4 => 5,
        }
    }

    pub fn from_ordinal(ordinal: u32) -> Option<Self> {
        match ordinal {
            0 => Some(Self::File),
            1 => Some(Self::Clipboard),
            2 => Some(Self::Lpt1),
            3 => Some(Self::Lpt2),
            4 => Some(Self::Lpt3),
            5 => Some(Self::Lpt4),
            _ => None,
        }
    }
}

/// Where the emulated serial port is routed.
///
/// Not stored under its own key: the file carries the boolean enablement
/// keys `TouchScreenEnabled` and `IP232Enabled`, and the resolver derives
/// the destination from whichever is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SerialDestination {
    /// A host serial port, named by `SerialPort`.
    #[default]
    SerialPort,
    /// Emulated touch screen.
    TouchScreen,
    /// Serial-over-TCP (IP232).
    Ip232,
}

/// Source of teletext adapter data.
///
/// Stored as a single binary byte under `TeletextAdapterSource`. Older
/// files carried `TeletextLocalhost`/`TeletextCustom` booleans instead;
/// when none of those exist the adapter reads from capture files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeletextSource {
    /// Live packet stream over TCP.
    Ip,
    /// Captured teletext stream files.
    #[default]
    File,
}

impl TeletextSource {
    pub const COUNT: u8 = 2;

    pub fn ordinal(self) -> u8 {
        match self {
            Self::Ip => 0,
            Self::File => 1,
        }
    }

    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            0 => Some(Self::Ip),
            1 => Some(Self::File),
            _ => None,
        }
    }
}
