// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 HPM EdgeOS Contributors

//! Host-side register models
//!
//! [`SimRegisterFile`] is plain RAM-backed storage, good enough for the IOC
//! whose registers have no side effects. [`SimGpio`] models the GPIO block:
//! set/clear/toggle registers, output loopback into the input register,
//! write-1-to-clear interrupt flags and edge/level detection honouring the
//! type, polarity and enable registers.

use core::sync::atomic::{AtomicU32, Ordering};

use hpm_common::constants::{GPIO_PORT_STRIDE, MAX_GPIO_PORTS, TOTAL_PINS};
use hpm_common::Level;
use spin::Mutex;

use crate::hpmicro::regs::{
    GPIO_DI, GPIO_DO, GPIO_DO_CLR, GPIO_DO_SET, GPIO_DO_TOGGLE, GPIO_IE, GPIO_IE_CLR, GPIO_IE_SET,
    GPIO_IF, GPIO_OE, GPIO_OE_CLR, GPIO_OE_SET, GPIO_PL, GPIO_PL_CLR, GPIO_PL_SET, GPIO_TP,
    GPIO_TP_CLR, GPIO_TP_SET,
};
use crate::traits::RegisterBlock;

// ============================================================================
// Plain Register File
// ============================================================================

/// `N` words of side-effect free registers
///
/// Accesses outside the file read as zero and drop writes.
pub struct SimRegisterFile<const N: usize> {
    words: [AtomicU32; N],
}

/// Register file sized for the IOC (two words per pin)
pub type SimIoc = SimRegisterFile<{ TOTAL_PINS * 2 }>;

impl<const N: usize> SimRegisterFile<N> {
    /// Create a zeroed register file
    #[must_use]
    pub fn new() -> Self {
        Self {
            words: core::array::from_fn(|_| AtomicU32::new(0)),
        }
    }

    fn slot(&self, offset: u32) -> Option<&AtomicU32> {
        if offset % 4 != 0 {
            return None;
        }
        self.words.get(offset as usize / 4)
    }

    /// Read a register without going through [`RegisterBlock`]
    pub fn peek(&self, offset: u32) -> u32 {
        self.slot(offset).map_or(0, |w| w.load(Ordering::SeqCst))
    }

    /// Write a register without going through [`RegisterBlock`]
    pub fn poke(&self, offset: u32, value: u32) {
        if let Some(w) = self.slot(offset) {
            w.store(value, Ordering::SeqCst);
        }
    }
}

impl<const N: usize> Default for SimRegisterFile<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> RegisterBlock for SimRegisterFile<N> {
    fn read(&self, offset: u32) -> u32 {
        self.peek(offset)
    }

    fn write(&self, offset: u32, value: u32) {
        self.poke(offset, value);
    }
}

// ============================================================================
// Behavioural GPIO Model
// ============================================================================

#[derive(Debug, Clone, Copy, Default)]
struct SimPort {
    /// Level applied from outside the chip
    external: u32,
    output: u32,
    output_enable: u32,
    flags: u32,
    irq_enable: u32,
    polarity: u32,
    edge: u32,
    /// Input value seen by the last evaluation
    last_input: u32,
}

impl SimPort {
    fn input(&self) -> u32 {
        (self.external & !self.output_enable) | (self.output & self.output_enable)
    }

    /// Latch edge and level conditions into the flag register
    fn evaluate(&mut self) {
        let now = self.input();
        let before = self.last_input;

        let rising = !before & now & !self.polarity;
        let falling = before & !now & self.polarity;
        let edges = (rising | falling) & self.edge;

        let high = now & !self.polarity;
        let low = !now & self.polarity;
        let levels = (high | low) & !self.edge;

        self.flags |= (edges | levels) & self.irq_enable;
        self.last_input = now;
    }
}

/// Behavioural model of the GPIO block with [`MAX_GPIO_PORTS`] banks
pub struct SimGpio {
    ports: Mutex<[SimPort; MAX_GPIO_PORTS]>,
}

impl SimGpio {
    /// Create a block with every line input, low and quiet
    #[must_use]
    pub fn new() -> Self {
        Self {
            ports: Mutex::new([SimPort::default(); MAX_GPIO_PORTS]),
        }
    }

    fn decode(offset: u32) -> Option<(usize, u32)> {
        let port = ((offset / GPIO_PORT_STRIDE) & 0xF) as usize;
        let reg = offset & !0xF0;
        (port < MAX_GPIO_PORTS).then_some((port, reg))
    }

    fn with_port<T>(&self, port: usize, f: impl FnOnce(&mut SimPort) -> T) -> T {
        let mut ports = self.ports.lock();
        f(&mut ports[port % MAX_GPIO_PORTS])
    }

    /// Apply `level` to `line` of `port` from outside the chip
    pub fn drive(&self, port: usize, line: u32, level: Level) {
        let bit = 1u32 << (line % 32);
        self.with_port(port, |p| {
            match level {
                Level::High => p.external |= bit,
                Level::Low => p.external &= !bit,
            }
            p.evaluate();
        });
    }

    /// Externally applied levels of `port`
    pub fn external(&self, port: usize) -> u32 {
        self.with_port(port, |p| p.external)
    }

    /// Pending interrupt flags of `port`
    pub fn pending(&self, port: usize) -> u32 {
        self.with_port(port, |p| p.flags)
    }

    /// Output latch of `port`
    pub fn output(&self, port: usize) -> u32 {
        self.with_port(port, |p| p.output)
    }

    /// Output enables of `port`
    pub fn direction(&self, port: usize) -> u32 {
        self.with_port(port, |p| p.output_enable)
    }

    /// Interrupt enables of `port`
    pub fn irq_enable(&self, port: usize) -> u32 {
        self.with_port(port, |p| p.irq_enable)
    }

    /// Interrupt polarity bits of `port`
    pub fn polarity(&self, port: usize) -> u32 {
        self.with_port(port, |p| p.polarity)
    }

    /// Interrupt type bits of `port`
    pub fn trigger_type(&self, port: usize) -> u32 {
        self.with_port(port, |p| p.edge)
    }
}

impl Default for SimGpio {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterBlock for SimGpio {
    fn read(&self, offset: u32) -> u32 {
        let Some((port, reg)) = Self::decode(offset) else {
            return 0;
        };
        self.with_port(port, |p| match reg {
            GPIO_DI => p.input(),
            GPIO_DO => p.output,
            GPIO_OE => p.output_enable,
            GPIO_IF => p.flags,
            GPIO_IE => p.irq_enable,
            GPIO_PL => p.polarity,
            GPIO_TP => p.edge,
            _ => 0,
        })
    }

    fn write(&self, offset: u32, value: u32) {
        let Some((port, reg)) = Self::decode(offset) else {
            return;
        };
        self.with_port(port, |p| {
            match reg {
                GPIO_DO => p.output = value,
                GPIO_DO_SET => p.output |= value,
                GPIO_DO_CLR => p.output &= !value,
                GPIO_DO_TOGGLE => p.output ^= value,
                GPIO_OE => p.output_enable = value,
                GPIO_OE_SET => p.output_enable |= value,
                GPIO_OE_CLR => p.output_enable &= !value,
                GPIO_IF => p.flags &= !value,
                GPIO_IE => p.irq_enable = value,
                GPIO_IE_SET => p.irq_enable |= value,
                GPIO_IE_CLR => p.irq_enable &= !value,
                GPIO_PL => p.polarity = value,
                GPIO_PL_SET => p.polarity |= value,
                GPIO_PL_CLR => p.polarity &= !value,
                GPIO_TP => p.edge = value,
                GPIO_TP_SET => p.edge |= value,
                GPIO_TP_CLR => p.edge &= !value,
                _ => return,
            }
            p.evaluate();
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PORT1: u32 = GPIO_PORT_STRIDE;

    #[test]
    fn test_register_file_bounds() {
        let file = SimRegisterFile::<4>::new();
        file.write(0xC, 7);
        file.write(0x10, 9);
        assert_eq!(file.read(0xC), 7);
        assert_eq!(file.read(0x10), 0);
        assert_eq!(file.read(0x2), 0);
    }

    #[test]
    fn test_output_loopback() {
        let sim = SimGpio::new();
        sim.write(PORT1 + GPIO_DO_SET, 0b11);
        assert_eq!(sim.read(PORT1 + GPIO_DI), 0);

        sim.write(PORT1 + GPIO_OE_SET, 0b01);
        assert_eq!(sim.read(PORT1 + GPIO_DI), 0b01);

        sim.drive(1, 1, Level::High);
        assert_eq!(sim.read(PORT1 + GPIO_DI), 0b11);
        assert_eq!(sim.read(GPIO_DI), 0);
    }

    #[test]
    fn test_rising_edge_latches_when_enabled() {
        let sim = SimGpio::new();
        sim.write(GPIO_TP_SET, 1 << 3);
        sim.drive(0, 3, Level::High);
        assert_eq!(sim.pending(0), 0);

        sim.drive(0, 3, Level::Low);
        sim.write(GPIO_IE_SET, 1 << 3);
        sim.drive(0, 3, Level::High);
        assert_eq!(sim.pending(0), 1 << 3);

        sim.write(GPIO_IF, 1 << 3);
        assert_eq!(sim.pending(0), 0);
    }

    #[test]
    fn test_falling_edge_polarity() {
        let sim = SimGpio::new();
        sim.drive(0, 0, Level::High);
        sim.write(GPIO_TP_SET, 1);
        sim.write(GPIO_PL_SET, 1);
        sim.write(GPIO_IE_SET, 1);
        sim.drive(0, 0, Level::High);
        assert_eq!(sim.pending(0), 0);
        sim.drive(0, 0, Level::Low);
        assert_eq!(sim.pending(0), 1);
    }

    #[test]
    fn test_level_relatches_while_asserted() {
        let sim = SimGpio::new();
        sim.write(GPIO_PL_SET, 1 << 5);
        sim.write(GPIO_IE_SET, 1 << 5);
        assert_eq!(sim.pending(0), 1 << 5);

        sim.write(GPIO_IF, 1 << 5);
        assert_eq!(sim.pending(0), 1 << 5);

        sim.drive(0, 5, Level::High);
        sim.write(GPIO_IF, 1 << 5);
        assert_eq!(sim.pending(0), 0);
    }
}
