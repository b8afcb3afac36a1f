// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 HPM EdgeOS Contributors

//! Generic pin configuration parameters
//!
//! A configuration request is packed into one 32-bit word: the parameter
//! id sits in bits 7:0 and the argument in bits 31:8. Ids below
//! [`VENDOR_PARAM_BASE`] are generic; ids from it upward are HPMicro
//! specific.

use core::fmt;

/// First vendor-specific parameter id
pub const VENDOR_PARAM_BASE: u8 = 0x80;

/// Width of the packed argument field
const ARGUMENT_BITS: u32 = 24;
const ARGUMENT_MASK: u32 = (1 << ARGUMENT_BITS) - 1;

/// Pad configuration parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PinConfigParam {
    /// Disable pull resistors
    BiasDisable = 1,
    /// Enable the pull-down resistor
    BiasPullDown = 2,
    /// Enable the pull-up resistor
    BiasPullUp = 3,
    /// Open-drain output
    DriveOpenDrain = 4,
    /// Drive strength (3 bits)
    OutputImpedanceOhms = 5,
    /// Schmitt trigger input
    InputSchmittEnable = 6,
    /// Slew rate enable plus 2-bit addition
    SlewRate = 7,
    /// Internal pull resistance strength (2 bits)
    InterResistanceStrength = VENDOR_PARAM_BASE,
    /// Keeper capability (1 bit)
    InterKeeperCap = VENDOR_PARAM_BASE + 1,
}

impl PinConfigParam {
    /// Every parameter in the closed set
    pub const ALL: [Self; 9] = [
        Self::BiasDisable,
        Self::BiasPullDown,
        Self::BiasPullUp,
        Self::DriveOpenDrain,
        Self::OutputImpedanceOhms,
        Self::InputSchmittEnable,
        Self::SlewRate,
        Self::InterResistanceStrength,
        Self::InterKeeperCap,
    ];

    /// Decode a raw parameter id
    #[must_use]
    pub const fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Self::BiasDisable),
            2 => Some(Self::BiasPullDown),
            3 => Some(Self::BiasPullUp),
            4 => Some(Self::DriveOpenDrain),
            5 => Some(Self::OutputImpedanceOhms),
            6 => Some(Self::InputSchmittEnable),
            7 => Some(Self::SlewRate),
            0x80 => Some(Self::InterResistanceStrength),
            0x81 => Some(Self::InterKeeperCap),
            _ => None,
        }
    }

    /// Raw parameter id
    #[must_use]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Look up a parameter by its short name or its hardware description
    /// property name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "bias-disable" => Some(Self::BiasDisable),
            "pull-down" | "bias-pull-down" => Some(Self::BiasPullDown),
            "pull-up" | "bias-pull-up" => Some(Self::BiasPullUp),
            "drive-open-drain" => Some(Self::DriveOpenDrain),
            "output-impedance-ohms" => Some(Self::OutputImpedanceOhms),
            "input-schmitt-enable" => Some(Self::InputSchmittEnable),
            "slew-rate" => Some(Self::SlewRate),
            "inter-resistance-strength" | "hpmicro,strong-pull-up" => {
                Some(Self::InterResistanceStrength)
            }
            "inter-keeper-cap" | "hpmicro,keeper-cap" => Some(Self::InterKeeperCap),
            _ => None,
        }
    }

    /// Short parameter name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BiasDisable => "bias-disable",
            Self::BiasPullDown => "pull-down",
            Self::BiasPullUp => "pull-up",
            Self::DriveOpenDrain => "drive-open-drain",
            Self::OutputImpedanceOhms => "output-impedance-ohms",
            Self::InputSchmittEnable => "input-schmitt-enable",
            Self::SlewRate => "slew-rate",
            Self::InterResistanceStrength => "inter-resistance-strength",
            Self::InterKeeperCap => "inter-keeper-cap",
        }
    }

    /// Argument used when a description property carries no value
    #[must_use]
    pub const fn default_argument(self) -> u32 {
        match self {
            Self::BiasPullDown | Self::BiasPullUp | Self::InputSchmittEnable => 1,
            Self::InterResistanceStrength => 3,
            Self::InterKeeperCap => 1,
            Self::BiasDisable
            | Self::DriveOpenDrain
            | Self::OutputImpedanceOhms
            | Self::SlewRate => 0,
        }
    }
}

impl fmt::Display for PinConfigParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Packed configuration word
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PinConfig(u32);

impl PinConfig {
    /// Pack `param` with `argument` (truncated to 24 bits)
    #[must_use]
    pub const fn new(param: PinConfigParam, argument: u32) -> Self {
        Self::from_parts(param as u8, argument)
    }

    /// Pack a raw parameter id with `argument`
    #[must_use]
    pub const fn from_parts(id: u8, argument: u32) -> Self {
        Self(((argument & ARGUMENT_MASK) << 8) | id as u32)
    }

    /// Wrap an already packed word
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Packed word
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Raw parameter id
    #[must_use]
    pub const fn param_id(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// Decoded parameter, `None` for ids outside the closed set
    #[must_use]
    pub const fn param(self) -> Option<PinConfigParam> {
        PinConfigParam::from_id(self.param_id())
    }

    /// Argument
    #[must_use]
    pub const fn argument(self) -> u32 {
        self.0 >> 8
    }
}

impl fmt::Debug for PinConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.param() {
            Some(p) => write!(f, "PinConfig({}={})", p, self.argument()),
            None => write!(f, "PinConfig(#{:02x}={})", self.param_id(), self.argument()),
        }
    }
}

/// Decoded value of one parameter
///
/// For `drive-open-drain` and `input-schmitt-enable`, `value` only has a
/// meaning when `enabled` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinConfigState {
    /// Whether the parameter is active on the pad
    pub enabled: bool,
    /// Field value
    pub value: u32,
}

impl PinConfigState {
    /// Active parameter with `value`
    #[must_use]
    pub const fn enabled(value: u32) -> Self {
        Self { enabled: true, value }
    }

    /// Inactive parameter
    #[must_use]
    pub const fn disabled(value: u32) -> Self {
        Self { enabled: false, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packing_layout() {
        let cfg = PinConfig::new(PinConfigParam::SlewRate, 2);
        assert_eq!(cfg.raw(), (2 << 8) | 7);
        assert_eq!(cfg.param(), Some(PinConfigParam::SlewRate));
        assert_eq!(cfg.argument(), 2);
    }

    #[test]
    fn test_argument_truncated() {
        let cfg = PinConfig::new(PinConfigParam::OutputImpedanceOhms, 0xFFFF_FFFF);
        assert_eq!(cfg.argument(), ARGUMENT_MASK);
        assert_eq!(cfg.param_id(), 5);
    }

    #[test]
    fn test_unknown_id() {
        let cfg = PinConfig::from_parts(0x42, 1);
        assert_eq!(cfg.param(), None);
    }

    #[test]
    fn test_ids_round_trip() {
        for p in PinConfigParam::ALL {
            assert_eq!(PinConfigParam::from_id(p.id()), Some(p));
            assert_eq!(PinConfigParam::from_name(p.name()), Some(p));
        }
    }

    #[test]
    fn test_description_names() {
        assert_eq!(PinConfigParam::from_name("bias-pull-up"), Some(PinConfigParam::BiasPullUp));
        assert_eq!(
            PinConfigParam::from_name("hpmicro,strong-pull-up"),
            Some(PinConfigParam::InterResistanceStrength)
        );
        assert_eq!(PinConfigParam::from_name("hpmicro,keeper-cap"), Some(PinConfigParam::InterKeeperCap));
        assert_eq!(PinConfigParam::from_name("drive-strength"), None);
        assert_eq!(PinConfigParam::InterResistanceStrength.default_argument(), 3);
    }
}
