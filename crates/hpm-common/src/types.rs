// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 HPM EdgeOS Contributors

//! Common types for the HPMicro HAL
//!
//! This module defines the fundamental domain types shared by the GPIO and
//! pin control layers: global pin indices, line direction and level, and
//! interrupt trigger kinds.

use core::fmt;

use crate::constants::{LINES_PER_PORT, PIN_PORT_NAMES, TOTAL_PINS};
use crate::errors::{Error, Result};

/// Global pin index in `[0, 9 * 32)`
///
/// Pin `n` lives on pin port `n / 32` at bit `n % 32`; port order is
/// `PA, PB, PC, PD, PE, PF, PX, PY, PZ`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PinIndex(u16);

impl PinIndex {
    /// Create a pin index, rejecting values outside the pin space
    pub fn new(index: u32) -> Result<Self> {
        if (index as usize) < TOTAL_PINS {
            Ok(Self(index as u16))
        } else {
            Err(Error::InvalidPinIndex)
        }
    }

    /// Build a pin index from a port number and a bit offset
    pub fn from_port_line(port: u8, line: u8) -> Result<Self> {
        if line as usize >= LINES_PER_PORT {
            return Err(Error::InvalidLine);
        }
        Self::new(u32::from(port) * LINES_PER_PORT as u32 + u32::from(line))
    }

    /// Raw index value
    #[must_use]
    pub const fn get(self) -> u16 {
        self.0
    }

    /// Pin port number (0 = PA)
    #[must_use]
    pub const fn port(self) -> u8 {
        (self.0 as usize / LINES_PER_PORT) as u8
    }

    /// Bit offset within the pin port
    #[must_use]
    pub const fn line(self) -> u8 {
        (self.0 as usize % LINES_PER_PORT) as u8
    }

    /// Human readable pin name such as `PA0` or `PZ31`
    #[must_use]
    pub const fn name(self) -> PinName {
        PinName(self)
    }
}

impl fmt::Display for PinIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display adapter printing a pin as `P<port><line>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinName(PinIndex);

impl fmt::Display for PinName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let port = PIN_PORT_NAMES[self.0.port() as usize];
        write!(f, "P{}{}", port, self.0.line())
    }
}

/// GPIO line direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Line is an input
    Input,
    /// Line is an output
    Output,
}

/// Logical level of a GPIO line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Logical low / 0
    Low,
    /// Logical high / 1
    High,
}

impl From<bool> for Level {
    fn from(v: bool) -> Self {
        if v { Self::High } else { Self::Low }
    }
}

impl From<Level> for bool {
    fn from(v: Level) -> Self {
        v == Level::High
    }
}

/// Interrupt trigger kind of a GPIO line
///
/// The raw encoding follows the usual IRQ type bits: rising = 1,
/// falling = 2, both = 3, level high = 4, level low = 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum TriggerType {
    /// No trigger configured
    #[default]
    None = 0,
    /// Rising edge
    EdgeRising = 1,
    /// Falling edge
    EdgeFalling = 2,
    /// Both edges (emulated by flipping polarity after each firing)
    EdgeBoth = 3,
    /// High level
    LevelHigh = 4,
    /// Low level
    LevelLow = 8,
}

impl TriggerType {
    /// Decode a raw trigger kind, rejecting combinations the hardware
    /// cannot express
    pub const fn from_bits(bits: u32) -> Result<Self> {
        match bits {
            0 => Ok(Self::None),
            1 => Ok(Self::EdgeRising),
            2 => Ok(Self::EdgeFalling),
            3 => Ok(Self::EdgeBoth),
            4 => Ok(Self::LevelHigh),
            8 => Ok(Self::LevelLow),
            _ => Err(Error::InvalidTriggerType),
        }
    }

    /// Raw trigger bits
    #[must_use]
    pub const fn bits(self) -> u32 {
        self as u32
    }

    /// Check if this is an edge-sensitive kind
    #[must_use]
    pub const fn is_edge(self) -> bool {
        matches!(self, Self::EdgeRising | Self::EdgeFalling | Self::EdgeBoth)
    }

    /// Check if this is a level-sensitive kind
    #[must_use]
    pub const fn is_level(self) -> bool {
        matches!(self, Self::LevelHigh | Self::LevelLow)
    }

    /// Flow handler the owning interrupt controller must use for this kind
    #[must_use]
    pub const fn flow(self) -> Option<FlowHandler> {
        if self.is_level() {
            Some(FlowHandler::Level)
        } else if self.is_edge() {
            Some(FlowHandler::Edge)
        } else {
            None
        }
    }
}

/// Interrupt delivery policy for a virtual interrupt line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum FlowHandler {
    /// Level-triggered dispatch
    Level = 1,
    /// Edge-triggered dispatch
    Edge = 2,
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt::Write;
    use heapless::String;

    fn name_of(index: u32) -> String<8> {
        let mut s = String::new();
        let _ = write!(s, "{}", PinIndex::new(index).unwrap().name());
        s
    }

    #[test]
    fn test_pin_names() {
        assert_eq!(name_of(0).as_str(), "PA0");
        assert_eq!(name_of(33).as_str(), "PB1");
        assert_eq!(name_of(6 * 32).as_str(), "PX0");
        assert_eq!(name_of(9 * 32 - 1).as_str(), "PZ31");
    }

    #[test]
    fn test_pin_index_bounds() {
        assert!(PinIndex::new(287).is_ok());
        assert_eq!(PinIndex::new(288), Err(Error::InvalidPinIndex));
        assert_eq!(PinIndex::from_port_line(1, 32), Err(Error::InvalidLine));
        assert_eq!(PinIndex::from_port_line(1, 3).unwrap().get(), 35);
    }

    #[test]
    fn test_trigger_type_decoding() {
        assert_eq!(TriggerType::from_bits(3), Ok(TriggerType::EdgeBoth));
        assert_eq!(TriggerType::from_bits(8), Ok(TriggerType::LevelLow));
        assert_eq!(TriggerType::from_bits(5), Err(Error::InvalidTriggerType));
        assert_eq!(TriggerType::from_bits(12), Err(Error::InvalidTriggerType));
    }

    #[test]
    fn test_trigger_flow() {
        assert_eq!(TriggerType::EdgeBoth.flow(), Some(FlowHandler::Edge));
        assert_eq!(TriggerType::LevelLow.flow(), Some(FlowHandler::Level));
        assert_eq!(TriggerType::None.flow(), None);
    }
}
