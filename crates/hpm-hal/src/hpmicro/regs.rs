// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 HPM EdgeOS Contributors

//! HPMicro GPIO and IOC register accessors
//!
//! Pure mechanism: every method is one register access. Callers own any
//! locking needed across read-modify-write sequences.

use hpm_common::config::PinctrlConfig;

use crate::traits::RegisterBlock;

// ============================================================================
// GPIO Register Offsets (relative to the port base)
// ============================================================================

/// Data input
pub const GPIO_DI: u32 = 0x000;
/// Data output value
pub const GPIO_DO: u32 = 0x100;
/// Data output set
pub const GPIO_DO_SET: u32 = 0x104;
/// Data output clear
pub const GPIO_DO_CLR: u32 = 0x108;
/// Data output toggle
pub const GPIO_DO_TOGGLE: u32 = 0x10C;
/// Output enable value
pub const GPIO_OE: u32 = 0x200;
/// Output enable set
pub const GPIO_OE_SET: u32 = 0x204;
/// Output enable clear
pub const GPIO_OE_CLR: u32 = 0x208;
/// Interrupt flags, write 1 to clear
pub const GPIO_IF: u32 = 0x300;
/// Interrupt enable value
pub const GPIO_IE: u32 = 0x400;
/// Interrupt enable set
pub const GPIO_IE_SET: u32 = 0x404;
/// Interrupt enable clear
pub const GPIO_IE_CLR: u32 = 0x408;
/// Interrupt polarity value (1 = falling edge / low level)
pub const GPIO_PL: u32 = 0x500;
/// Interrupt polarity set
pub const GPIO_PL_SET: u32 = 0x504;
/// Interrupt polarity clear
pub const GPIO_PL_CLR: u32 = 0x508;
/// Interrupt type value (1 = edge, 0 = level)
pub const GPIO_TP: u32 = 0x600;
/// Interrupt type set
pub const GPIO_TP_SET: u32 = 0x604;
/// Interrupt type clear
pub const GPIO_TP_CLR: u32 = 0x608;

// ============================================================================
// GPIO Port Registers
// ============================================================================

/// Register view of one GPIO port bank
#[derive(Debug, Clone, Copy)]
pub struct GpioRegisters<R> {
    regs: R,
    base: u32,
}

impl<R: RegisterBlock> GpioRegisters<R> {
    /// Create a view of the bank at `base` inside `regs`
    #[must_use]
    pub const fn new(regs: R, base: u32) -> Self {
        Self { regs, base }
    }

    /// Port base offset
    #[must_use]
    pub const fn base(&self) -> u32 {
        self.base
    }

    #[inline]
    fn rd(&self, reg: u32) -> u32 {
        self.regs.read(self.base + reg)
    }

    #[inline]
    fn wr(&self, reg: u32, value: u32) {
        self.regs.write(self.base + reg, value);
    }

    /// Input levels
    pub fn read_input(&self) -> u32 {
        self.rd(GPIO_DI)
    }

    /// Output latch
    pub fn read_output(&self) -> u32 {
        self.rd(GPIO_DO)
    }

    /// Drive `mask` high
    pub fn set_bits(&self, mask: u32) {
        self.wr(GPIO_DO_SET, mask);
    }

    /// Drive `mask` low
    pub fn clear_bits(&self, mask: u32) {
        self.wr(GPIO_DO_CLR, mask);
    }

    /// Invert the output latch for `mask`
    pub fn toggle_bits(&self, mask: u32) {
        self.wr(GPIO_DO_TOGGLE, mask);
    }

    /// Output enables
    pub fn read_direction(&self) -> u32 {
        self.rd(GPIO_OE)
    }

    /// Switch `mask` to output
    pub fn set_direction_output(&self, mask: u32) {
        self.wr(GPIO_OE_SET, mask);
    }

    /// Switch `mask` to input
    pub fn set_direction_input(&self, mask: u32) {
        self.wr(GPIO_OE_CLR, mask);
    }

    /// Pending interrupt flags
    pub fn read_pending(&self) -> u32 {
        self.rd(GPIO_IF)
    }

    /// Clear the pending flags in `mask`
    pub fn ack_pending(&self, mask: u32) {
        self.wr(GPIO_IF, mask);
    }

    /// Interrupt enables
    pub fn read_irq_enable(&self) -> u32 {
        self.rd(GPIO_IE)
    }

    /// Enable interrupts for `mask`
    pub fn enable_irq(&self, mask: u32) {
        self.wr(GPIO_IE_SET, mask);
    }

    /// Disable interrupts for `mask`
    pub fn disable_irq(&self, mask: u32) {
        self.wr(GPIO_IE_CLR, mask);
    }

    /// Interrupt polarity bits
    pub fn read_polarity(&self) -> u32 {
        self.rd(GPIO_PL)
    }

    /// Select falling edge / low level for `mask`
    pub fn set_polarity(&self, mask: u32) {
        self.wr(GPIO_PL_SET, mask);
    }

    /// Select rising edge / high level for `mask`
    pub fn clear_polarity(&self, mask: u32) {
        self.wr(GPIO_PL_CLR, mask);
    }

    /// Interrupt type bits
    pub fn read_trigger_type(&self) -> u32 {
        self.rd(GPIO_TP)
    }

    /// Make `mask` edge sensitive
    pub fn set_edge_type(&self, mask: u32) {
        self.wr(GPIO_TP_SET, mask);
    }

    /// Make `mask` level sensitive
    pub fn set_level_type(&self, mask: u32) {
        self.wr(GPIO_TP_CLR, mask);
    }
}

// ============================================================================
// IOC Registers
// ============================================================================

/// Register view of the IOC (function select + pad control per pin)
#[derive(Debug)]
pub struct IocRegisters<R> {
    regs: R,
    layout: PinctrlConfig,
}

impl<R: RegisterBlock> IocRegisters<R> {
    /// Create a view using the register layout of `layout`
    #[must_use]
    pub const fn new(regs: R, layout: PinctrlConfig) -> Self {
        Self { regs, layout }
    }

    /// Register layout
    #[must_use]
    pub const fn layout(&self) -> &PinctrlConfig {
        &self.layout
    }

    /// Pad control word of `pin`
    pub fn read_pad_config(&self, pin: u32) -> u32 {
        self.regs.read(self.layout.pad_reg(pin))
    }

    /// Replace the pad control word of `pin`
    pub fn write_pad_config(&self, pin: u32, value: u32) {
        self.regs.write(self.layout.pad_reg(pin), value);
    }

    /// Function select word of `pin`
    pub fn read_mux(&self, pin: u32) -> u32 {
        self.regs.read(self.layout.func_reg(pin))
    }

    /// Replace the function select word of `pin`
    pub fn write_mux(&self, pin: u32, value: u32) {
        self.regs.write(self.layout.func_reg(pin), value);
    }
}

#[cfg(all(test, feature = "sim"))]
mod tests {
    use super::*;
    use crate::sim::{SimIoc, SimRegisterFile};

    #[test]
    fn test_port_offsets() {
        let file = SimRegisterFile::<0x200>::new();
        let port = GpioRegisters::new(&file, 0x30);
        port.set_bits(0x5);
        port.set_polarity(0x8);
        port.set_edge_type(0x2);
        assert_eq!(file.peek(0x30 + GPIO_DO_SET), 0x5);
        assert_eq!(file.peek(0x30 + GPIO_PL_SET), 0x8);
        assert_eq!(file.peek(0x30 + GPIO_TP_SET), 0x2);
        assert_eq!(file.peek(GPIO_DO_SET), 0);
    }

    #[test]
    fn test_ioc_pin_stride() {
        let file = SimIoc::new();
        let ioc = IocRegisters::new(&file, PinctrlConfig::DEFAULT);
        ioc.write_mux(4, 2);
        ioc.write_pad_config(4, 0x0002_0000);
        assert_eq!(file.peek(32), 2);
        assert_eq!(file.peek(36), 0x0002_0000);
        assert_eq!(ioc.read_mux(4), 2);
        assert_eq!(ioc.read_pad_config(5), 0);
    }
}
