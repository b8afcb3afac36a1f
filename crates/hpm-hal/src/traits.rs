// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 HPM EdgeOS Contributors

//! HAL trait definitions
//!
//! This module defines the contracts between the HPMicro drivers and the
//! host platform: the register window the drivers program, the GPIO line
//! and interrupt chip surfaces they expose, the interrupt plumbing they
//! consume, and the pin control operations.

use core::fmt;

use heapless::{String, Vec};
use hpm_common::constants::{MAX_GROUPS_PER_FUNCTION, MAX_NAME_LEN, MAX_PINS_PER_GROUP};
use hpm_common::{Direction, FlowHandler, Level, PinName, TriggerType};

use crate::error::HalResult;
use crate::pinconf::{PinConfig, PinConfigParam, PinConfigState};

/// Group or function name
pub type Name = String<MAX_NAME_LEN>;

/// Ordered pin list of one group
pub type PinList = Vec<u32, MAX_PINS_PER_GROUP>;

/// Group names backing one function
pub type GroupList = Vec<Name, MAX_GROUPS_PER_FUNCTION>;

// ============================================================================
// Register Access
// ============================================================================

/// 32-bit register window
///
/// Offsets are byte offsets from the start of the window. Implementations
/// perform exactly one access per call; no caching, no merging.
pub trait RegisterBlock {
    /// Read the register at `offset`
    fn read(&self, offset: u32) -> u32;

    /// Write `value` to the register at `offset`
    fn write(&self, offset: u32, value: u32);
}

impl<T: RegisterBlock + ?Sized> RegisterBlock for &T {
    fn read(&self, offset: u32) -> u32 {
        (**self).read(offset)
    }

    fn write(&self, offset: u32, value: u32) {
        (**self).write(offset, value);
    }
}

// ============================================================================
// GPIO
// ============================================================================

/// GPIO pin interface
pub trait GpioPin {
    /// Set pin high
    fn set_high(&mut self) -> HalResult<()>;

    /// Set pin low
    fn set_low(&mut self) -> HalResult<()>;

    /// Read pin state
    fn is_high(&self) -> HalResult<bool>;

    /// Toggle pin state
    fn toggle(&mut self) -> HalResult<()>;
}

/// GPIO line contract of one port bank
///
/// Offsets at or beyond [`GpioChip::ngpio`] are a caller contract violation;
/// the bank masks them out instead of failing.
pub trait GpioChip {
    /// Number of lines in the bank
    fn ngpio(&self) -> u32;

    /// Switch a line to input or output
    fn configure_direction(&self, offset: u32, direction: Direction);

    /// Drive `level` on a line, then switch it to output
    fn direction_output(&self, offset: u32, level: Level);

    /// Current direction of a line
    fn direction(&self, offset: u32) -> Direction;

    /// Read the input level of a line
    fn read(&self, offset: u32) -> bool;

    /// Merge the live input value into `bits` for every bit in `mask`
    fn read_multiple(&self, mask: u32, bits: u32) -> u32;

    /// Drive a single line
    fn write(&self, offset: u32, value: bool);

    /// Set every line in `bits & mask`; lines are never cleared in bulk
    fn write_multiple(&self, mask: u32, bits: u32);
}

// ============================================================================
// Interrupts
// ============================================================================

/// Virtual interrupt allocator of the host
pub trait IrqDomain {
    /// Virtual interrupt number mapped to `hwirq`, if any
    fn find_mapping(&self, hwirq: u32) -> Option<u32>;

    /// Run the handler attached to `virq`
    fn generic_handle(&self, virq: u32);

    /// Select the delivery policy of `hwirq`
    fn set_flow_handler(&self, hwirq: u32, flow: FlowHandler);
}

/// Parent interrupt controller delivering a port's chained interrupt
pub trait ParentIrqChip {
    /// Enter chained context for parent line `irq`
    fn chained_enter(&self, irq: u32);

    /// Leave chained context for parent line `irq`
    fn chained_exit(&self, irq: u32);

    /// Forward end-of-interrupt to the parent line `irq`
    fn eoi_parent(&self, irq: u32);
}

/// Per-line interrupt chip
///
/// Acknowledge and mask are hardware operations on this chip; the default
/// implementations are no-ops and no mask state is kept in software.
pub trait IrqChip {
    /// Chip name
    fn name(&self) -> &'static str;

    /// Enable interrupt delivery for `hwirq`
    fn irq_enable(&self, hwirq: u32);

    /// Disable interrupt delivery for `hwirq`
    fn irq_disable(&self, hwirq: u32);

    /// Program the trigger kind of `hwirq` and select its flow handler
    fn irq_set_type(&self, hwirq: u32, kind: TriggerType, domain: &dyn IrqDomain) -> HalResult<()>;

    /// Clear everything pending on the bank and forward EOI to the parent
    fn irq_eoi(&self, hwirq: u32, parent: &dyn ParentIrqChip);

    /// Acknowledge `hwirq`
    fn irq_ack(&self, _hwirq: u32) {}

    /// Mask `hwirq`
    fn irq_mask(&self, _hwirq: u32) {}

    /// Unmask `hwirq`
    fn irq_unmask(&self, _hwirq: u32) {}
}

// ============================================================================
// Pin Control
// ============================================================================

/// Group enumeration and pin lookup
pub trait PinctrlOps {
    /// Number of addressable pins
    fn pins_count(&self) -> usize;

    /// Name of `pin`, if it exists
    fn pin_name(&self, pin: u32) -> Option<PinName>;

    /// Number of registered groups
    fn groups_count(&self) -> usize;

    /// Name of the group at `selector`
    fn group_name(&self, selector: usize) -> Option<Name>;

    /// Ordered pins of `group`
    fn group_pins(&self, group: &str) -> HalResult<PinList>;

    /// Dump the raw registers of `pin`
    fn pin_dbg_show(&self, pin: u32, out: &mut dyn fmt::Write) -> fmt::Result;
}

/// Function enumeration and mux application
pub trait PinmuxOps {
    /// Number of registered functions
    fn functions_count(&self) -> usize;

    /// Name of the function at `selector`
    fn function_name(&self, selector: usize) -> Option<Name>;

    /// Groups implementing `function`
    fn function_groups(&self, function: &str) -> HalResult<GroupList>;

    /// Route every pin of `group` to its function code
    fn set_mux(&self, function: &str, group: &str) -> HalResult<()>;
}

/// Pad configuration
pub trait PinconfOps {
    /// Decode `param` from the pad register of `pin`
    fn pin_config_get(&self, pin: u32, param: PinConfigParam) -> HalResult<PinConfigState>;

    /// Apply `configs` to `pin` in order
    fn pin_config_set(&self, pin: u32, configs: &[PinConfig]) -> HalResult<()>;

    /// Group-wide query
    fn pin_config_group_get(&self, group: &str, param: PinConfigParam) -> HalResult<PinConfigState>;

    /// Apply `configs` to every pin of `group`
    fn pin_config_group_set(&self, group: &str, configs: &[PinConfig]) -> HalResult<()>;

    /// Dump the pad register of `pin`
    fn pin_config_dbg_show(&self, pin: u32, out: &mut dyn fmt::Write) -> fmt::Result;
}
