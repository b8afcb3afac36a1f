// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 HPM EdgeOS Contributors

//! Error types for the HPMicro HAL
//!
//! This module defines the unified error type shared by the GPIO and pin
//! control layers. All errors are `no_std` compatible and carry no heap
//! allocated context.

use core::fmt;

/// Result type alias for HAL operations
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type
///
/// Each variant maps to a stable numeric code (see [`Error::code`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    // =========================================================================
    // Hardware Description Errors (0x01xx)
    // =========================================================================
    /// Hardware description is malformed or contradictory
    InvalidDescription,
    /// Group declares both a pinmux list and a plain pin list
    MixedGroupDeclaration,
    /// Group declares neither a pinmux list nor a plain pin list
    EmptyGroupDeclaration,
    /// Port index is missing or out of range
    InvalidPortIndex,
    /// Pin index is outside the addressable pin space
    InvalidPinIndex,
    /// Line count exceeds the port width
    InvalidLineCount,

    // =========================================================================
    // Pin Control Errors (0x02xx)
    // =========================================================================
    /// Group is already bound to a different function
    AmbiguousGroupBinding,
    /// Unrecognized pad configuration parameter
    UnsupportedConfig,

    // =========================================================================
    // GPIO / Interrupt Errors (0x03xx)
    // =========================================================================
    /// Invalid interrupt trigger kind
    InvalidTriggerType,
    /// GPIO line offset out of range
    InvalidLine,
    /// Port has no parent interrupt line
    NoParentInterrupt,

    // =========================================================================
    // Resource Errors (0x09xx)
    // =========================================================================
    /// Fixed-size table is full
    ResourceExhausted,

    // =========================================================================
    // General Errors (0xFFxx)
    // =========================================================================
    /// Invalid parameter provided
    InvalidParameter,
    /// Requested item not found
    NotFound,
}

impl Error {
    /// Get the error code for this error
    ///
    /// Error codes are organized by category:
    /// - 0x01xx: Hardware description errors
    /// - 0x02xx: Pin control errors
    /// - 0x03xx: GPIO / interrupt errors
    /// - 0x09xx: Resource errors
    /// - 0xFFxx: General errors
    #[must_use]
    pub const fn code(&self) -> u16 {
        match self {
            // Description errors (0x01xx)
            Self::InvalidDescription => 0x0101,
            Self::MixedGroupDeclaration => 0x0102,
            Self::EmptyGroupDeclaration => 0x0103,
            Self::InvalidPortIndex => 0x0104,
            Self::InvalidPinIndex => 0x0105,
            Self::InvalidLineCount => 0x0106,

            // Pin control errors (0x02xx)
            Self::AmbiguousGroupBinding => 0x0201,
            Self::UnsupportedConfig => 0x0202,

            // GPIO / interrupt errors (0x03xx)
            Self::InvalidTriggerType => 0x0301,
            Self::InvalidLine => 0x0302,
            Self::NoParentInterrupt => 0x0303,

            // Resource errors (0x09xx)
            Self::ResourceExhausted => 0x0901,

            // General errors (0xFFxx)
            Self::InvalidParameter => 0xFF01,
            Self::NotFound => 0xFF02,
        }
    }

    /// Check if this error aborts registration of a controller instance
    ///
    /// Description and resource errors are fatal to the construction pass;
    /// everything else is returned to the caller of a runtime operation.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::InvalidDescription
                | Self::MixedGroupDeclaration
                | Self::EmptyGroupDeclaration
                | Self::InvalidPinIndex
                | Self::InvalidLineCount
                | Self::AmbiguousGroupBinding
                | Self::ResourceExhausted
        )
    }

    /// Get a short description of the error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidDescription => "invalid hardware description",
            Self::MixedGroupDeclaration => "both pinmux and pins set",
            Self::EmptyGroupDeclaration => "neither pinmux nor pins set",
            Self::InvalidPortIndex => "missing/invalid port index",
            Self::InvalidPinIndex => "invalid pin index",
            Self::InvalidLineCount => "invalid line count",
            Self::AmbiguousGroupBinding => "group bound to another function",
            Self::UnsupportedConfig => "unsupported pin config",
            Self::InvalidTriggerType => "invalid trigger type",
            Self::InvalidLine => "invalid GPIO line",
            Self::NoParentInterrupt => "no parent interrupt",
            Self::ResourceExhausted => "resource exhausted",
            Self::InvalidParameter => "invalid parameter",
            Self::NotFound => "not found",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[0x{:04X}] {}", self.code(), self.description())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "[0x{:04X}] {}", self.code(), self.description());
    }
}
