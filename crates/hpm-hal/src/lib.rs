// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 HPM EdgeOS Contributors

//! Hardware Abstraction Layer for HPMicro SoCs
//!
//! This crate drives the HPMicro GPIO controller and the IOC (pin mux and
//! pad configuration block):
//!
//! - **GPIO**: port banks with set/clear/toggle line operations
//! - **Interrupts**: per-bank demultiplexing of the parent interrupt
//! - **Pin control**: function groups, mux application, pad configuration
//!
//! # Architecture
//!
//! The HAL is structured in layers:
//!
//! 1. **Traits**: Host-facing contracts and register access (`traits`)
//! 2. **Register windows**: `mmio` on target, `sim` on the host
//! 3. **Drivers**: HPMicro implementations (`hpmicro`)

#![no_std]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod mmio;
pub mod pinconf;
pub mod traits;

#[cfg(feature = "hpmicro")]
pub mod hpmicro;

#[cfg(feature = "sim")]
pub mod sim;

// Re-export main traits
pub use error::{HalError, HalResult};
pub use pinconf::{PinConfig, PinConfigParam, PinConfigState};
pub use traits::*;
