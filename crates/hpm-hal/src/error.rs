// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 HPM EdgeOS Contributors

//! HAL error types

use core::fmt;

/// HAL error type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HalError {
    /// Hardware description is malformed
    InvalidDescription,
    /// Group declares both a pinmux list and a pin list
    MixedGroupDeclaration,
    /// Group declares neither a pinmux list nor a pin list
    EmptyGroupDeclaration,
    /// Pin index outside the controller's pin space
    InvalidPinIndex,
    /// Group already belongs to another function
    AmbiguousGroupBinding,
    /// Fixed-size table is full
    ResourceExhausted,
    /// Named group or function is unknown
    NotFound,
    /// Invalid interrupt trigger kind
    InvalidTriggerType,
    /// Line offset outside the port
    InvalidLine,
    /// Port has no parent interrupt
    NoParentInterrupt,
    /// Invalid parameter
    InvalidParameter,
    /// Operation not supported
    NotSupported,
}

impl HalError {
    /// Get error code
    #[must_use]
    pub const fn code(&self) -> u16 {
        match self {
            Self::InvalidDescription => 0x0810,
            Self::MixedGroupDeclaration => 0x0811,
            Self::EmptyGroupDeclaration => 0x0812,
            Self::InvalidPinIndex => 0x0813,
            Self::AmbiguousGroupBinding => 0x0814,
            Self::ResourceExhausted => 0x0820,
            Self::NotFound => 0x0830,
            Self::InvalidTriggerType => 0x0840,
            Self::InvalidLine => 0x0841,
            Self::NoParentInterrupt => 0x0842,
            Self::InvalidParameter => 0x08F0,
            Self::NotSupported => 0x08FF,
        }
    }

    /// Get error description
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidDescription => "invalid hardware description",
            Self::MixedGroupDeclaration => "both pinmux and pins set",
            Self::EmptyGroupDeclaration => "neither pinmux nor pins set",
            Self::InvalidPinIndex => "invalid pin index",
            Self::AmbiguousGroupBinding => "group bound to another function",
            Self::ResourceExhausted => "resource exhausted",
            Self::NotFound => "not found",
            Self::InvalidTriggerType => "invalid trigger type",
            Self::InvalidLine => "invalid GPIO line",
            Self::NoParentInterrupt => "no parent interrupt",
            Self::InvalidParameter => "invalid parameter",
            Self::NotSupported => "not supported",
        }
    }

    /// Check if this error came from a malformed hardware description
    ///
    /// Description errors abort the construction pass that produced them.
    #[must_use]
    pub const fn is_description_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidDescription
                | Self::MixedGroupDeclaration
                | Self::EmptyGroupDeclaration
                | Self::InvalidPinIndex
                | Self::AmbiguousGroupBinding
        )
    }
}

impl fmt::Display for HalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[0x{:04X}] {}", self.code(), self.description())
    }
}

impl From<HalError> for hpm_common::Error {
    fn from(e: HalError) -> Self {
        match e {
            HalError::InvalidDescription => Self::InvalidDescription,
            HalError::MixedGroupDeclaration => Self::MixedGroupDeclaration,
            HalError::EmptyGroupDeclaration => Self::EmptyGroupDeclaration,
            HalError::InvalidPinIndex => Self::InvalidPinIndex,
            HalError::AmbiguousGroupBinding => Self::AmbiguousGroupBinding,
            HalError::ResourceExhausted => Self::ResourceExhausted,
            HalError::NotFound => Self::NotFound,
            HalError::InvalidTriggerType => Self::InvalidTriggerType,
            HalError::InvalidLine => Self::InvalidLine,
            HalError::NoParentInterrupt => Self::NoParentInterrupt,
            HalError::InvalidParameter => Self::InvalidParameter,
            HalError::NotSupported => Self::UnsupportedConfig,
        }
    }
}

impl From<hpm_common::Error> for HalError {
    fn from(e: hpm_common::Error) -> Self {
        use hpm_common::Error;
        match e {
            Error::MixedGroupDeclaration => Self::MixedGroupDeclaration,
            Error::EmptyGroupDeclaration => Self::EmptyGroupDeclaration,
            Error::InvalidPinIndex => Self::InvalidPinIndex,
            Error::AmbiguousGroupBinding => Self::AmbiguousGroupBinding,
            Error::InvalidLine => Self::InvalidLine,
            Error::InvalidTriggerType => Self::InvalidTriggerType,
            Error::NoParentInterrupt => Self::NoParentInterrupt,
            Error::InvalidPortIndex | Error::InvalidLineCount | Error::InvalidDescription => {
                Self::InvalidDescription
            }
            Error::ResourceExhausted => Self::ResourceExhausted,
            Error::NotFound => Self::NotFound,
            Error::UnsupportedConfig => Self::NotSupported,
            _ => Self::InvalidParameter,
        }
    }
}

/// HAL Result type
pub type HalResult<T> = Result<T, HalError>;
