// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 HPM EdgeOS Contributors

//! HPMicro HAL Common Library
//!
//! This crate provides the types, error definitions, configuration structures
//! and logging shared by the HPMicro GPIO / pin control drivers.
//!
//! # Features
//!
//! - `defmt`: Enable defmt formatting of [`Error`] for embedded debugging
//!
//! No heap allocations are performed - all tables use fixed-size arrays or
//! heapless collections sized by [`constants`].

#![no_std]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod types;
pub mod errors;
pub mod config;
pub mod log;
pub mod constants;

// Re-export commonly used items
pub use errors::{Error, Result};
pub use types::*;
pub use config::SystemConfig;
