// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 HPM EdgeOS Contributors

//! Static hardware description input
//!
//! These are the already-parsed nodes the host hands to the drivers: one
//! GPIO controller node with its port children, and pin function nodes
//! whose children declare pin groups.

use crate::error::{HalError, HalResult};

/// Pin index bits of a pinmux word
pub const PINMUX_PIN_MASK: u32 = 0xFFF;

/// Shift of the alternate function field of a pinmux word
pub const PINMUX_ALT_SHIFT: u32 = 25;

/// Width mask of the alternate function field
pub const PINMUX_ALT_MASK: u32 = 0x1F;

/// Pin index carried by a pinmux word
#[must_use]
pub const fn pinmux_pin(word: u32) -> u32 {
    word & PINMUX_PIN_MASK
}

/// Alternate function code carried by a pinmux word
#[must_use]
pub const fn pinmux_function(word: u32) -> u32 {
    (word >> PINMUX_ALT_SHIFT) & PINMUX_ALT_MASK
}

/// Build a pinmux word routing `pin` to alternate function `alt`
#[must_use]
pub const fn alt_select(pin: u32, alt: u32) -> u32 {
    (pin & PINMUX_PIN_MASK) | ((alt & PINMUX_ALT_MASK) << PINMUX_ALT_SHIFT)
}

/// GPIO controller node
#[derive(Debug, Clone, Copy)]
pub struct GpioControllerNode<'a> {
    /// Node name
    pub name: &'a str,
    /// Port children
    pub ports: &'a [GpioPortNode<'a>],
}

/// GPIO port child node
#[derive(Debug, Clone, Copy, Default)]
pub struct GpioPortNode<'a> {
    /// Node name, used as the port label
    pub name: &'a str,
    /// `reg`: port index
    pub reg: Option<u32>,
    /// `ngpios`: line count
    pub ngpios: Option<u32>,
    /// Parent interrupt line, if wired
    pub interrupt: Option<u32>,
}

/// Pin function node
///
/// The function is named after the node; every child declares one group.
#[derive(Debug, Clone, Copy)]
pub struct FunctionNode<'a> {
    /// Function name
    pub name: &'a str,
    /// Group children
    pub groups: &'a [GroupNode<'a>],
}

/// Pin group child node
#[derive(Debug, Clone, Copy, Default)]
pub struct GroupNode<'a> {
    /// Group name
    pub name: &'a str,
    /// `pinmux`: packed pin + alternate function words
    pub pinmux: &'a [u32],
    /// `pins`: plain pin indices
    pub pins: &'a [u32],
    /// Pad configuration properties
    pub configs: &'a [ConfigProperty<'a>],
}

/// How a group declares its pins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    /// Pins come with mux words
    Mux,
    /// Plain pin list, configuration only
    Pins,
}

impl GroupNode<'_> {
    /// Classify the group; exactly one of `pinmux` and `pins` must be set
    pub fn kind(&self) -> HalResult<GroupKind> {
        match (self.pinmux.is_empty(), self.pins.is_empty()) {
            (false, false) => Err(HalError::MixedGroupDeclaration),
            (true, true) => Err(HalError::EmptyGroupDeclaration),
            (false, true) => Ok(GroupKind::Mux),
            (true, false) => Ok(GroupKind::Pins),
        }
    }

    /// Pin indices in declaration order
    pub fn pin_indices(&self) -> impl Iterator<Item = u32> + '_ {
        self.pinmux
            .iter()
            .map(|&w| pinmux_pin(w))
            .chain(self.pins.iter().copied())
    }
}

/// One pad configuration property of a group node
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigProperty<'a> {
    /// Property name, e.g. `bias-pull-up` or `hpmicro,keeper-cap`
    pub name: &'a str,
    /// Property value; `None` selects the parameter's default
    pub value: Option<u32>,
}

impl<'a> ConfigProperty<'a> {
    /// Flag property without a value
    #[must_use]
    pub const fn flag(name: &'a str) -> Self {
        Self { name, value: None }
    }

    /// Property with a value
    #[must_use]
    pub const fn with_value(name: &'a str, value: u32) -> Self {
        Self { name, value: Some(value) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pinmux_word() {
        let w = alt_select(4, 2);
        assert_eq!(pinmux_pin(w), 4);
        assert_eq!(pinmux_function(w), 2);
        assert_eq!(alt_select(0x1FFF, 0x3F), 0xFFF | (0x1F << 25));
    }

    #[test]
    fn test_group_kind() {
        let mux = [alt_select(4, 2)];
        let pins = [4];
        let both = GroupNode { name: "g", pinmux: &mux, pins: &pins, configs: &[] };
        let neither = GroupNode { name: "g", ..GroupNode::default() };
        let plain = GroupNode { name: "g", pins: &pins, ..GroupNode::default() };
        assert_eq!(both.kind(), Err(HalError::MixedGroupDeclaration));
        assert_eq!(neither.kind(), Err(HalError::EmptyGroupDeclaration));
        assert_eq!(plain.kind(), Ok(GroupKind::Pins));
    }
}
