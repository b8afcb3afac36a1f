// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 HPM EdgeOS Contributors

//! GPIO interrupt demultiplexer
//!
//! Each port bank multiplexes its lines onto one parent interrupt. The
//! chained handler snapshots the flag register once, dispatches every set
//! bit in ascending order, acknowledges each bit individually and re-arms
//! both-edge lines by flipping their polarity after the handler returns.
//!
//! The hardware only detects one edge per line. Both-edge triggering is
//! emulated: the line starts armed for the falling edge, and every service
//! flips the polarity so the opposite transition is caught next.
//!
//! Nothing in this path allocates, logs, takes a lock or fails.

use core::sync::atomic::{AtomicU8, AtomicUsize, Ordering};

use hpm_common::constants::LINES_PER_PORT;
use hpm_common::{FlowHandler, TriggerType};

use super::gpio::{line_bit, GpioPort};
use crate::error::{HalError, HalResult};
use crate::traits::{GpioChip, IrqChip, IrqDomain, ParentIrqChip, RegisterBlock};

/// Interrupt chip name
pub const IRQ_CHIP_NAME: &str = "hpm_gpio";

// ============================================================================
// Demultiplexer
// ============================================================================

impl<R: RegisterBlock> GpioPort<'_, R> {
    /// Re-arm `offset` for the opposite edge
    ///
    /// Keeps the line edge-sensitive and inverts its polarity bit through
    /// the set/clear registers.
    pub fn toggle_trigger(&self, offset: u32) {
        let bit = line_bit(offset);
        let polarity = self.regs.read_polarity();

        self.regs.set_edge_type(bit);
        if polarity & bit != 0 {
            self.regs.clear_polarity(bit);
        } else {
            self.regs.set_polarity(bit);
        }
    }

    /// Service one snapshot of the flag register
    ///
    /// Returns the snapshot. Bits at or above the line count are left
    /// alone; pending bits without a mapping are acknowledged and dropped.
    pub fn do_irq(&self, domain: &dyn IrqDomain) -> u32 {
        let status = self.regs.read_pending();
        let mut remaining = status & self.line_mask();

        while remaining != 0 {
            let hwirq = remaining.trailing_zeros();
            remaining &= remaining - 1;

            if let Some(virq) = domain.find_mapping(hwirq) {
                domain.generic_handle(virq);
            }
            self.regs.ack_pending(1 << hwirq);

            if self.info.trigger(hwirq) == TriggerType::EdgeBoth {
                self.toggle_trigger(hwirq);
            }
        }

        status
    }

    /// Chained handler for the port's parent interrupt
    ///
    /// Runs one service episode inside chained context, then clears any
    /// flag that was raised meanwhile. Fails only when the port has no
    /// parent interrupt, before touching any register.
    pub fn handle_chained_irq(
        &self,
        domain: &dyn IrqDomain,
        parent: &dyn ParentIrqChip,
    ) -> HalResult<u32> {
        let irq = self.parent_irq().ok_or(HalError::NoParentInterrupt)?;

        parent.chained_enter(irq);
        let status = self.do_irq(domain);
        // A flag latched after its bit was serviced is dropped here, including
        // a both-edge transition that arrives between re-arm and this clear.
        self.clear_all_pending();
        parent.chained_exit(irq);

        Ok(status)
    }

    /// Acknowledge everything currently pending on the bank
    pub fn clear_all_pending(&self) {
        let flags = self.regs.read_pending();
        self.regs.ack_pending(flags);
    }
}

// ============================================================================
// Interrupt Chip
// ============================================================================

impl<R: RegisterBlock> IrqChip for GpioPort<'_, R> {
    fn name(&self) -> &'static str {
        IRQ_CHIP_NAME
    }

    fn irq_enable(&self, hwirq: u32) {
        self.regs.enable_irq(line_bit(hwirq));
    }

    fn irq_disable(&self, hwirq: u32) {
        self.regs.disable_irq(line_bit(hwirq));
    }

    fn irq_set_type(&self, hwirq: u32, kind: TriggerType, domain: &dyn IrqDomain) -> HalResult<()> {
        if hwirq >= self.ngpio() {
            return Err(HalError::InvalidLine);
        }
        let bit = line_bit(hwirq);

        match kind {
            TriggerType::EdgeBoth | TriggerType::EdgeFalling => {
                self.regs.set_edge_type(bit);
                self.regs.set_polarity(bit);
            }
            TriggerType::EdgeRising => {
                self.regs.set_edge_type(bit);
                self.regs.clear_polarity(bit);
            }
            TriggerType::LevelHigh => {
                self.regs.set_level_type(bit);
                self.regs.clear_polarity(bit);
            }
            TriggerType::LevelLow => {
                self.regs.set_level_type(bit);
                self.regs.set_polarity(bit);
            }
            TriggerType::None => {}
        }
        self.info.record_trigger(hwirq, kind);

        if let Some(flow) = kind.flow() {
            domain.set_flow_handler(hwirq, flow);
        }
        Ok(())
    }

    fn irq_eoi(&self, _hwirq: u32, parent: &dyn ParentIrqChip) {
        self.clear_all_pending();
        if let Some(irq) = self.parent_irq() {
            parent.eoi_parent(irq);
        }
    }
}

// ============================================================================
// Linear Domain
// ============================================================================

/// Line handler attached to a virtual interrupt; receives the virq
pub type IrqHandler = fn(u32);

/// Virtual interrupt domain mapping `hwirq` to `virq_base + hwirq`
///
/// Handler slots are atomics, so `attach` and `detach` may race with
/// dispatch from the chained handler without either side waiting.
pub struct LinearIrqDomain {
    virq_base: u32,
    size: u32,
    /// Handler addresses; zero marks an empty slot
    handlers: [AtomicUsize; LINES_PER_PORT],
    flows: [AtomicU8; LINES_PER_PORT],
}

impl LinearIrqDomain {
    #[allow(clippy::declare_interior_mutable_const)]
    const NO_FLOW: AtomicU8 = AtomicU8::new(0);
    #[allow(clippy::declare_interior_mutable_const)]
    const NO_HANDLER: AtomicUsize = AtomicUsize::new(0);

    /// Create a domain of `size` lines (at most 32) starting at `virq_base`
    #[must_use]
    pub const fn new(virq_base: u32, size: u32) -> Self {
        let size = if size as usize > LINES_PER_PORT {
            LINES_PER_PORT as u32
        } else {
            size
        };
        Self {
            virq_base,
            size,
            handlers: [Self::NO_HANDLER; LINES_PER_PORT],
            flows: [Self::NO_FLOW; LINES_PER_PORT],
        }
    }

    /// First virtual interrupt number
    #[must_use]
    pub const fn virq_base(&self) -> u32 {
        self.virq_base
    }

    /// Attach `handler` to `hwirq`, replacing any previous one
    pub fn attach(&self, hwirq: u32, handler: IrqHandler) -> HalResult<()> {
        if hwirq >= self.size {
            return Err(HalError::InvalidLine);
        }
        self.handlers[hwirq as usize].store(handler as usize, Ordering::Release);
        Ok(())
    }

    /// Detach the handler of `hwirq`
    pub fn detach(&self, hwirq: u32) {
        if let Some(slot) = self.handlers.get(hwirq as usize) {
            slot.store(0, Ordering::Release);
        }
    }

    /// Handler attached to `hwirq`
    #[must_use]
    pub fn handler(&self, hwirq: u32) -> Option<IrqHandler> {
        let raw = self.handlers.get(hwirq as usize)?.load(Ordering::Acquire);
        if raw == 0 {
            return None;
        }
        // SAFETY: non-zero slots are only written by `attach`, which stores
        // the address of an `IrqHandler`; function pointers are never null.
        Some(unsafe { core::mem::transmute::<usize, IrqHandler>(raw) })
    }

    /// Flow handler selected for `hwirq`
    #[must_use]
    pub fn flow(&self, hwirq: u32) -> Option<FlowHandler> {
        match self.flows.get(hwirq as usize)?.load(Ordering::Acquire) {
            1 => Some(FlowHandler::Level),
            2 => Some(FlowHandler::Edge),
            _ => None,
        }
    }
}

impl IrqDomain for LinearIrqDomain {
    fn find_mapping(&self, hwirq: u32) -> Option<u32> {
        (hwirq < self.size).then(|| self.virq_base + hwirq)
    }

    fn generic_handle(&self, virq: u32) {
        let Some(hwirq) = virq.checked_sub(self.virq_base).filter(|&h| h < self.size) else {
            return;
        };
        if let Some(handler) = self.handler(hwirq) {
            handler(virq);
        }
    }

    fn set_flow_handler(&self, hwirq: u32, flow: FlowHandler) {
        if let Some(slot) = self.flows.get(hwirq as usize) {
            slot.store(flow as u8, Ordering::Release);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
