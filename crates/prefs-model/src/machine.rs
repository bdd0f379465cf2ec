//! Machine model and second-processor selection.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Emulated machine model.
///
/// The ordinal is persisted as a single binary byte under `MachineType`;
/// bytes outside the known range resolve to the default rather than being
/// accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MachineModel {
    /// BBC Model B.
    #[default]
    B,
    /// BBC Model B+.
    BPlus,
    /// Model B with Integra-B board.
    IntegraB,
    /// BBC Master 128.
    Master128,
    /// BBC Master ET.
    MasterEt,
}

impl MachineModel {
    /// Number of known machine models.
    pub const COUNT: u8 = 5;

    /// Wire ordinal as stored in the preferences file.
    pub fn ordinal(self) -> u8 {
        match self {
            Self::B => 0,
            Self::BPlus => 1,
            Self::IntegraB => 2,
            Self::Master128 => 3,
            Self::MasterEt => 4,
        }
    }

    /// Machine model for a stored ordinal, if the ordinal is known.
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            0 => Some(Self::B),
            1 => Some(Self::BPlus),
            2 => Some(Self::IntegraB),
            3 => Some(Self::Master128),
            4 => Some(Self::MasterEt),
            _ => None,
        }
    }

    /// Display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::B => "BBC B",
            Self::BPlus => "BBC B+",
            Self::IntegraB => "BBC B Integra-B",
            Self::Master128 => "Master 128",
            Self::MasterEt => "Master ET",
        }
    }

    /// The Master ET has no disc hardware, which suppresses the disc LED.
    pub fn has_disc_hardware(&self) -> bool {
        !matches!(self, Self::MasterEt)
    }
}

impl fmt::Display for MachineModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Second processor (Tube) attached to the host machine.
///
/// Stored as a single binary byte under `TubeType`. Files from before the
/// unified key instead carried one boolean enablement key per co-processor;
/// the resolver collapses those onto this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TubeDevice {
    /// No second processor.
    #[default]
    None,
    /// Acorn 65C02 second processor.
    Acorn65C02,
    /// Master 512 80186 co-processor.
    Master512CoPro,
    /// Acorn Z80 second processor.
    AcornZ80,
    /// Torch Z80 second processor.
    TorchZ80,
    /// Acorn ARM evaluation system.
    AcornArm,
    /// Sprow ARM7TDMI co-processor.
    SprowArm,
}

impl TubeDevice {
    /// Number of known tube devices.
    pub const COUNT: u8 = 7;

    /// Wire ordinal as stored in the preferences file.
    pub fn ordinal(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Acorn65C02 => 1,
            Self::Master512CoPro => 2,
            Self::AcornZ80 => 3,
            Self::TorchZ80 => 4,
            Self::AcornArm => 5,
            Self::SprowArm => 6,
        }
    }

    /// Tube device for a stored ordinal, if the ordinal is known.
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            0 => Some(Self::None),
            1 => Some(Self::Acorn65C02),
            2 => Some(Self::Master512CoPro),
            3 => Some(Self::AcornZ80),
            4 => Some(Self::TorchZ80),
            5 => Some(Self::AcornArm),
            6 => Some(Self::SprowArm),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_machine_ordinals_round_trip() {
        for ordinal in 0..MachineModel::COUNT {
            let model = MachineModel::from_ordinal(ordinal).unwrap();
            assert_eq!(model.ordinal(), ordinal);
        }
        assert_eq!(MachineModel::from_ordinal(MachineModel::COUNT), None);
    }

    #[test]
    fn test_tube_ordinals_round_trip() {
        for ordinal in 0..TubeDevice::COUNT {
            let device = TubeDevice::from_ordinal(ordinal).unwrap();
            assert_eq!(device.ordinal(), ordinal);
        }
        assert_eq!(TubeDevice::from_ordinal(TubeDevice::COUNT), None);
    }

    #[test]
    fn test_master_et_has_no_disc_hardware() {
        assert!(MachineModel::B.has_disc_hardware());
        assert!(!MachineModel::MasterEt.has_disc_hardware());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&MachineModel::Master128).unwrap();
        assert_eq!(json, "\"master128\"");
    }
}
