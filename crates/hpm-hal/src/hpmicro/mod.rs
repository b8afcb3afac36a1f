// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 HPM EdgeOS Contributors

//! HPMicro GPIO and IOC drivers
//!
//! # Features
//!
//! - Up to 8 GPIO port banks of 32 lines each
//! - Per-line edge/level interrupts demultiplexed from one parent line per
//!   bank, with emulated both-edge triggering
//! - Pin function groups resolved from the hardware description
//! - Pad configuration: bias, drive strength, open drain, schmitt trigger,
//!   slew rate, pull strength and keeper
//!
//! # Memory Map
//!
//! | Block | Layout                                   |
//! |-------|------------------------------------------|
//! | GPIO  | port `n` at `n * 0x10`, registers below  |
//! | IOC   | pin `n` at `n * 8`: FUNC +0, PAD +4      |

pub mod description;
pub mod gpio;
pub mod irq;
pub mod pad;
pub mod pinctrl;
pub mod regs;

pub use description::{
    alt_select, ConfigProperty, FunctionNode, GpioControllerNode, GpioPortNode, GroupNode,
};
pub use gpio::{GpioController, GpioLine, GpioPort};
pub use irq::{IrqHandler, LinearIrqDomain};
pub use pad::PadConfigEngine;
pub use pinctrl::{MapEntry, PinController, PinMap};

use crate::error::{HalError, HalResult};
use crate::traits::Name;

/// Copy a description name into a fixed-capacity name
pub(crate) fn name_from(s: &str) -> HalResult<Name> {
    let mut name = Name::new();
    name.push_str(s).map_err(|()| HalError::ResourceExhausted)?;
    Ok(name)
}
