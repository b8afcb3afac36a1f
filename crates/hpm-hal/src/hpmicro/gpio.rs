// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 HPM EdgeOS Contributors

//! HPMicro GPIO Driver
//!
//! One controller exposes up to eight 32-line port banks at a fixed stride
//! inside its register window. Output level, direction and interrupt
//! enables all have separate set and clear registers, so no line operation
//! needs a read-modify-write.
//!
//! # Usage
//!
//! ```no_run
//! use hpm_common::config::GpioConfig;
//! use hpm_hal::hpmicro::description::{GpioControllerNode, GpioPortNode};
//! use hpm_hal::hpmicro::gpio::GpioController;
//! use hpm_hal::sim::SimGpio;
//! use hpm_hal::GpioChip;
//!
//! let sim = SimGpio::new();
//! let ports = [GpioPortNode { name: "gpioa", reg: Some(0), ngpios: Some(16), interrupt: None }];
//! let node = GpioControllerNode { name: "gpio", ports: &ports };
//! let gpio = GpioController::probe(&sim, &node, &GpioConfig::DEFAULT)?;
//! let porta = gpio.port(0).unwrap();
//! porta.configure_direction(3, hpm_common::Direction::Output);
//! porta.write(3, true);
//! # Ok::<(), hpm_hal::HalError>(())
//! ```

use core::sync::atomic::{AtomicU8, Ordering};

use heapless::Vec;
use hpm_common::config::GpioConfig;
use hpm_common::constants::{LINES_PER_PORT, MAX_GPIO_PORTS};
use hpm_common::{log_error, log_info, log_warn, Direction, Level, TriggerType};

use super::description::{GpioControllerNode, GpioPortNode};
use super::name_from;
use super::regs::GpioRegisters;
use crate::error::{HalError, HalResult};
use crate::traits::{GpioChip, GpioPin, Name, RegisterBlock};

const LOG_MODULE: &str = "gpio";

/// Single-bit mask for `offset`; out-of-range offsets select nothing
#[inline]
pub(crate) const fn line_bit(offset: u32) -> u32 {
    if offset < LINES_PER_PORT as u32 {
        1 << offset
    } else {
        0
    }
}

// ============================================================================
// Port Metadata
// ============================================================================

/// Metadata of one enumerated port bank
#[derive(Debug)]
pub struct PortInfo {
    index: u8,
    base: u32,
    ngpio: u32,
    parent_irq: Option<u32>,
    label: Name,
    /// Trigger kind per line, as `TriggerType` bits
    triggers: [AtomicU8; LINES_PER_PORT],
}

impl PortInfo {
    #[allow(clippy::declare_interior_mutable_const)]
    const NO_TRIGGER: AtomicU8 = AtomicU8::new(TriggerType::None as u8);

    fn new(index: u8, base: u32, ngpio: u32, parent_irq: Option<u32>, label: Name) -> Self {
        Self {
            index,
            base,
            ngpio,
            parent_irq,
            label,
            triggers: [Self::NO_TRIGGER; LINES_PER_PORT],
        }
    }

    pub(crate) fn trigger(&self, offset: u32) -> TriggerType {
        self.triggers
            .get(offset as usize)
            .map_or(TriggerType::None, |t| {
                TriggerType::from_bits(u32::from(t.load(Ordering::Acquire))).unwrap_or_default()
            })
    }

    pub(crate) fn record_trigger(&self, offset: u32, kind: TriggerType) {
        if let Some(t) = self.triggers.get(offset as usize) {
            t.store(kind.bits() as u8, Ordering::Release);
        }
    }
}

// ============================================================================
// Controller
// ============================================================================

/// GPIO controller owning the register window and its port banks
pub struct GpioController<R> {
    regs: R,
    ports: Vec<PortInfo, MAX_GPIO_PORTS>,
}

impl<R: RegisterBlock> GpioController<R> {
    /// Enumerate the ports declared under `node`
    ///
    /// Ports with a missing or out-of-range index are logged and skipped,
    /// as are duplicates. A missing or oversized line count falls back to
    /// the configured default.
    pub fn probe(regs: R, node: &GpioControllerNode<'_>, config: &GpioConfig) -> HalResult<Self> {
        config.validate()?;

        let mut ports: Vec<PortInfo, MAX_GPIO_PORTS> = Vec::new();
        for child in node.ports {
            let Some(index) = Self::port_index(child, config) else {
                log_error!(
                    LOG_MODULE,
                    "missing/invalid port index for port {}",
                    child.name
                );
                continue;
            };

            if ports.iter().any(|p| u32::from(p.index) == index) {
                log_warn!(LOG_MODULE, "duplicate port index {} ({}), skipped", index, child.name);
                continue;
            }

            let ngpio = match child.ngpios {
                Some(n) if n > 0 && n as usize <= LINES_PER_PORT => n,
                _ => {
                    log_info!(
                        LOG_MODULE,
                        "{}: ngpios missing or larger than {}, using {}",
                        child.name,
                        LINES_PER_PORT,
                        config.default_line_count
                    );
                    config.default_line_count
                }
            };

            let label = name_from(child.name)?;
            let base = index
                .checked_mul(config.port_stride)
                .ok_or(HalError::InvalidDescription)?;
            ports
                .push(PortInfo::new(index as u8, base, ngpio, child.interrupt, label))
                .map_err(|_| HalError::ResourceExhausted)?;
            log_info!(LOG_MODULE, "port{} ({}), ngpios {}", index, child.name, ngpio);

            if let Some(irq) = child.interrupt {
                log_info!(LOG_MODULE, "port{} parent irq {}", index, irq);
            }
        }

        Ok(Self { regs, ports })
    }

    fn port_index(child: &GpioPortNode<'_>, config: &GpioConfig) -> Option<u32> {
        child.reg.filter(|&i| (i as usize) < config.max_ports)
    }

    /// Port bank with hardware index `index`
    pub fn port(&self, index: u32) -> Option<GpioPort<'_, R>> {
        self.ports
            .iter()
            .find(|p| u32::from(p.index) == index)
            .map(|info| GpioPort::new(&self.regs, info))
    }

    /// All enumerated port banks, in enumeration order
    pub fn ports(&self) -> impl Iterator<Item = GpioPort<'_, R>> + '_ {
        self.ports.iter().map(|info| GpioPort::new(&self.regs, info))
    }

    /// Number of enumerated port banks
    #[must_use]
    pub fn port_count(&self) -> usize {
        self.ports.len()
    }

    /// Line handle for a global pin index (`port * 32 + offset`)
    pub fn line(&self, global_pin: u32) -> HalResult<GpioLine<'_, R>> {
        let port_index = global_pin / LINES_PER_PORT as u32;
        let offset = global_pin % LINES_PER_PORT as u32;
        let port = self.port(port_index).ok_or(HalError::InvalidLine)?;
        port.line(offset)
    }
}

// ============================================================================
// Port Bank
// ============================================================================

/// Borrowed view of one port bank
pub struct GpioPort<'a, R> {
    pub(crate) regs: GpioRegisters<&'a R>,
    pub(crate) info: &'a PortInfo,
}

impl<R> Clone for GpioPort<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for GpioPort<'_, R> {}

impl<'a, R: RegisterBlock> GpioPort<'a, R> {
    fn new(regs: &'a R, info: &'a PortInfo) -> Self {
        Self {
            regs: GpioRegisters::new(regs, info.base),
            info,
        }
    }

    /// Hardware port index
    #[must_use]
    pub fn index(&self) -> u32 {
        u32::from(self.info.index)
    }

    /// Register offset of the bank inside the controller window
    #[must_use]
    pub fn base(&self) -> u32 {
        self.info.base
    }

    /// Port label
    #[must_use]
    pub fn label(&self) -> &'a str {
        self.info.label.as_str()
    }

    /// Parent interrupt line, if wired
    #[must_use]
    pub fn parent_irq(&self) -> Option<u32> {
        self.info.parent_irq
    }

    /// Trigger kind currently programmed on `offset`
    #[must_use]
    pub fn trigger(&self, offset: u32) -> TriggerType {
        self.info.trigger(offset)
    }

    /// Handle for one line of this bank
    pub fn line(&self, offset: u32) -> HalResult<GpioLine<'a, R>> {
        if offset >= self.info.ngpio {
            return Err(HalError::InvalidLine);
        }
        Ok(GpioLine { port: *self, offset })
    }

    /// Mask covering every line of the bank
    #[must_use]
    pub fn line_mask(&self) -> u32 {
        if self.info.ngpio as usize >= LINES_PER_PORT {
            u32::MAX
        } else {
            (1 << self.info.ngpio) - 1
        }
    }
}

impl<R: RegisterBlock> GpioChip for GpioPort<'_, R> {
    fn ngpio(&self) -> u32 {
        self.info.ngpio
    }

    fn configure_direction(&self, offset: u32, direction: Direction) {
        match direction {
            Direction::Input => self.regs.set_direction_input(line_bit(offset)),
            Direction::Output => self.regs.set_direction_output(line_bit(offset)),
        }
    }

    fn direction_output(&self, offset: u32, level: Level) {
        self.write(offset, level.into());
        self.regs.set_direction_output(line_bit(offset));
    }

    fn direction(&self, offset: u32) -> Direction {
        if self.regs.read_direction() & line_bit(offset) != 0 {
            Direction::Output
        } else {
            Direction::Input
        }
    }

    fn read(&self, offset: u32) -> bool {
        self.regs.read_input() & line_bit(offset) != 0
    }

    fn read_multiple(&self, mask: u32, bits: u32) -> u32 {
        let input = self.regs.read_input();
        (bits & !mask) | (input & mask)
    }

    fn write(&self, offset: u32, value: bool) {
        if value {
            self.regs.set_bits(line_bit(offset));
        } else {
            self.regs.clear_bits(line_bit(offset));
        }
    }

    fn write_multiple(&self, mask: u32, bits: u32) {
        self.regs.set_bits(bits & mask);
    }
}

// ============================================================================
// Line Handle
// ============================================================================

/// Handle for a single line, back-referencing its bank
pub struct GpioLine<'a, R> {
    port: GpioPort<'a, R>,
    offset: u32,
}

impl<'a, R: RegisterBlock> GpioLine<'a, R> {
    /// Owning bank
    #[must_use]
    pub fn port(&self) -> GpioPort<'a, R> {
        self.port
    }

    /// Bit offset within the bank
    #[must_use]
    pub const fn offset(&self) -> u32 {
        self.offset
    }

    /// Global pin index of this line
    #[must_use]
    pub fn global_index(&self) -> u32 {
        self.port.index() * LINES_PER_PORT as u32 + self.offset
    }

    /// Switch the line to input
    pub fn into_input(&self) {
        self.port.configure_direction(self.offset, Direction::Input);
    }

    /// Drive `level` and switch the line to output
    pub fn into_output(&self, level: Level) {
        self.port.direction_output(self.offset, level);
    }
}

impl<R: RegisterBlock> GpioPin for GpioLine<'_, R> {
    fn set_high(&mut self) -> HalResult<()> {
        self.port.write(self.offset, true);
        Ok(())
    }

    fn set_low(&mut self) -> HalResult<()> {
        self.port.write(self.offset, false);
        Ok(())
    }

    fn is_high(&self) -> HalResult<bool> {
        Ok(self.port.read(self.offset))
    }

    fn toggle(&mut self) -> HalResult<()> {
        self.port.regs.toggle_bits(line_bit(self.offset));
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(all(test, feature = "sim"))]
mod tests {
    use super::*;
    use crate::sim::SimGpio;

    fn node<'a>(ports: &'a [GpioPortNode<'a>]) -> GpioControllerNode<'a> {
        GpioControllerNode { name: "gpio", ports }
    }

    #[test]
    fn test_probe_skips_bad_ports() {
        let sim = SimGpio::new();
        let ports = [
            GpioPortNode { name: "gpioa", reg: Some(0), ngpios: Some(16), interrupt: Some(40) },
            GpioPortNode { name: "noreg", reg: None, ngpios: Some(8), interrupt: None },
            GpioPortNode { name: "toobig", reg: Some(8), ngpios: Some(8), interrupt: None },
            GpioPortNode { name: "dup", reg: Some(0), ngpios: Some(4), interrupt: None },
            GpioPortNode { name: "gpioz", reg: Some(7), ngpios: Some(40), interrupt: None },
        ];
        let gpio = GpioController::probe(&sim, &node(&ports), &GpioConfig::DEFAULT).unwrap();

        assert_eq!(gpio.port_count(), 2);
        let a = gpio.port(0).unwrap();
        assert_eq!(a.ngpio(), 16);
        assert_eq!(a.label(), "gpioa");
        assert_eq!(a.parent_irq(), Some(40));
        assert_eq!(a.line_mask(), 0xFFFF);

        let z = gpio.port(7).unwrap();
        assert_eq!(z.ngpio(), 32);
        assert_eq!(z.base(), 0x70);
        assert!(gpio.port(8).is_none());
    }

    #[test]
    fn test_probe_rejects_bad_config() {
        let sim = SimGpio::new();
        let config = GpioConfig { max_ports: 9, ..GpioConfig::DEFAULT };
        let result = GpioController::probe(&sim, &node(&[]), &config);
        assert!(matches!(result, Err(HalError::InvalidDescription)));
    }

    #[test]
    fn test_line_lookup() {
        let sim = SimGpio::new();
        let ports = [GpioPortNode { name: "gpiob", reg: Some(1), ngpios: Some(8), interrupt: None }];
        let gpio = GpioController::probe(&sim, &node(&ports), &GpioConfig::DEFAULT).unwrap();

        let line = gpio.line(32 + 5).unwrap();
        assert_eq!(line.offset(), 5);
        assert_eq!(line.global_index(), 37);
        assert!(matches!(gpio.line(32 + 8), Err(HalError::InvalidLine)));
        assert!(matches!(gpio.line(3), Err(HalError::InvalidLine)));
    }

    #[test]
    fn test_direction_output_drives_level_first() {
        let sim = SimGpio::new();
        let ports = [GpioPortNode { name: "gpioa", reg: Some(0), ngpios: None, interrupt: None }];
        let gpio = GpioController::probe(&sim, &node(&ports), &GpioConfig::DEFAULT).unwrap();
        let port = gpio.port(0).unwrap();

        port.direction_output(9, Level::High);
        assert_eq!(sim.output(0), 1 << 9);
        assert_eq!(sim.direction(0), 1 << 9);
        assert!(port.read(9));
        assert_eq!(port.direction(9), Direction::Output);

        port.configure_direction(9, Direction::Input);
        assert_eq!(port.direction(9), Direction::Input);
        assert!(!port.read(9));
    }

    #[test]
    fn test_line_handle_pin_trait() {
        let sim = SimGpio::new();
        let ports = [GpioPortNode { name: "gpioa", reg: Some(0), ngpios: None, interrupt: None }];
        let gpio = GpioController::probe(&sim, &node(&ports), &GpioConfig::DEFAULT).unwrap();

        let mut led = gpio.line(2).unwrap();
        led.into_output(Level::Low);
        assert!(!led.is_high().unwrap());
        led.toggle().unwrap();
        assert!(led.is_high().unwrap());
        led.set_low().unwrap();
        assert!(!led.is_high().unwrap());
        led.set_high().unwrap();
        assert_eq!(sim.output(0), 1 << 2);
    }

    #[test]
    fn test_out_of_range_offset_is_masked() {
        assert_eq!(line_bit(31), 1 << 31);
        assert_eq!(line_bit(32), 0);
    }
}
