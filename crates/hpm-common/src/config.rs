// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 HPM EdgeOS Contributors

//! Controller configuration for the HPMicro HAL
//!
//! This module defines the layout parameters of the GPIO and IOC blocks.
//! The defaults describe the HPM6xxx family; board support code may narrow
//! them but never exceed the hardware limits in [`crate::constants`].

use crate::constants::{
    GPIO_COMPATIBLE, GPIO_PIN_COUNT, GPIO_PORT_STRIDE, IOC_COMPATIBLE, IOC_FUNC_OFFSET,
    IOC_PAD_OFFSET, IOC_PIN_STRIDE, LINES_PER_PORT, MAX_GPIO_PORTS, MAX_PIN_STRIDE, MAX_PORT_STRIDE,
    TOTAL_PINS,
};
use crate::errors::{Error, Result};

/// System-wide configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemConfig {
    /// GPIO controller configuration
    pub gpio: GpioConfig,
    /// Pin controller configuration
    pub pinctrl: PinctrlConfig,
}

impl SystemConfig {
    /// Default configuration
    pub const DEFAULT: Self = Self {
        gpio: GpioConfig::DEFAULT,
        pinctrl: PinctrlConfig::DEFAULT,
    };

    /// Check every section against the hardware limits
    pub fn validate(&self) -> Result<()> {
        self.gpio.validate()?;
        self.pinctrl.validate()
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// GPIO controller configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpioConfig {
    /// Compatible string matched against hardware description nodes
    pub compatible: &'static str,
    /// Maximum number of port banks
    pub max_ports: usize,
    /// Line count used when a port node does not declare one
    pub default_line_count: u32,
    /// Address stride between port banks
    pub port_stride: u32,
}

impl GpioConfig {
    /// Default GPIO configuration
    pub const DEFAULT: Self = Self {
        compatible: GPIO_COMPATIBLE,
        max_ports: MAX_GPIO_PORTS,
        default_line_count: LINES_PER_PORT as u32,
        port_stride: GPIO_PORT_STRIDE,
    };

    /// Reject values the GPIO block cannot support
    pub fn validate(&self) -> Result<()> {
        if self.max_ports == 0 || self.max_ports > MAX_GPIO_PORTS {
            return Err(Error::InvalidPortIndex);
        }
        if self.default_line_count == 0 || self.default_line_count as usize > LINES_PER_PORT {
            return Err(Error::InvalidLineCount);
        }
        if self.port_stride == 0 || self.port_stride > MAX_PORT_STRIDE || self.port_stride % 4 != 0 {
            return Err(Error::InvalidParameter);
        }
        Ok(())
    }
}

impl Default for GpioConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Pin controller (IOC) configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinctrlConfig {
    /// Compatible string matched against hardware description nodes
    pub compatible: &'static str,
    /// Number of pins addressable by the IOC
    pub pin_count: usize,
    /// Number of leading pins that are routed to GPIO banks
    pub gpio_pin_count: usize,
    /// Address stride between per-pin register pairs
    pub pin_stride: u32,
    /// Offset of the function select register
    pub func_offset: u32,
    /// Offset of the pad control register
    pub pad_offset: u32,
}

impl PinctrlConfig {
    /// Default pin controller configuration
    pub const DEFAULT: Self = Self {
        compatible: IOC_COMPATIBLE,
        pin_count: TOTAL_PINS,
        gpio_pin_count: GPIO_PIN_COUNT,
        pin_stride: IOC_PIN_STRIDE,
        func_offset: IOC_FUNC_OFFSET,
        pad_offset: IOC_PAD_OFFSET,
    };

    /// Reject values the IOC cannot support
    pub fn validate(&self) -> Result<()> {
        if self.pin_count == 0 || self.pin_count > TOTAL_PINS {
            return Err(Error::InvalidPinIndex);
        }
        if self.gpio_pin_count > self.pin_count {
            return Err(Error::InvalidParameter);
        }
        if self.pin_stride > MAX_PIN_STRIDE {
            return Err(Error::InvalidParameter);
        }
        if self.pin_stride % 4 != 0 || self.func_offset % 4 != 0 || self.pad_offset % 4 != 0 {
            return Err(Error::InvalidParameter);
        }
        if self.func_offset >= self.pin_stride || self.pad_offset >= self.pin_stride {
            return Err(Error::InvalidParameter);
        }
        Ok(())
    }

    /// Offset of the function select register of `pin`
    #[must_use]
    pub const fn func_reg(&self, pin: u32) -> u32 {
        self.func_offset + self.pin_stride * pin
    }

    /// Offset of the pad control register of `pin`
    #[must_use]
    pub const fn pad_reg(&self, pin: u32) -> u32 {
        self.pad_offset + self.pin_stride * pin
    }
}

impl Default for PinctrlConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(SystemConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_limits_rejected() {
        let mut cfg = SystemConfig::DEFAULT;
        cfg.gpio.max_ports = 9;
        assert_eq!(cfg.validate(), Err(Error::InvalidPortIndex));

        let mut cfg = SystemConfig::DEFAULT;
        cfg.gpio.default_line_count = 33;
        assert_eq!(cfg.validate(), Err(Error::InvalidLineCount));

        let mut cfg = SystemConfig::DEFAULT;
        cfg.pinctrl.pin_count = TOTAL_PINS + 1;
        assert_eq!(cfg.validate(), Err(Error::InvalidPinIndex));
    }

    #[test]
    fn test_strides_bounded() {
        let mut cfg = SystemConfig::DEFAULT;
        cfg.gpio.port_stride = u32::MAX & !3;
        assert_eq!(cfg.validate(), Err(Error::InvalidParameter));

        let mut cfg = SystemConfig::DEFAULT;
        cfg.gpio.port_stride = 0;
        assert_eq!(cfg.validate(), Err(Error::InvalidParameter));

        let mut cfg = SystemConfig::DEFAULT;
        cfg.gpio.port_stride = MAX_PORT_STRIDE;
        assert_eq!(cfg.validate(), Ok(()));

        let mut cfg = SystemConfig::DEFAULT;
        cfg.pinctrl.pin_stride = MAX_PIN_STRIDE + 4;
        assert_eq!(cfg.validate(), Err(Error::InvalidParameter));
    }

    #[test]
    fn test_register_offsets() {
        let cfg = PinctrlConfig::DEFAULT;
        assert_eq!(cfg.func_reg(0), 0);
        assert_eq!(cfg.pad_reg(0), 4);
        assert_eq!(cfg.func_reg(5), 40);
        assert_eq!(cfg.pad_reg(5), 44);
    }
}
