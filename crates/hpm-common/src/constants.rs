// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 HPM EdgeOS Contributors

//! Hardware limits and table capacities
//!
//! All sizes are compile-time constants; the pin control tables are
//! heapless collections dimensioned from the values below.

// =============================================================================
// GPIO Controller Limits
// =============================================================================

/// Maximum number of GPIO port banks behind one controller
pub const MAX_GPIO_PORTS: usize = 8;

/// Number of lines in one GPIO port bank
pub const LINES_PER_PORT: usize = 32;

/// Address stride between consecutive port banks
pub const GPIO_PORT_STRIDE: u32 = 0x10;

/// Largest port stride accepted by configuration
pub const MAX_PORT_STRIDE: u32 = 0x1_0000;

// =============================================================================
// IOC (Pin Mux / Pad Config) Limits
// =============================================================================

/// Number of pin ports addressable by the IOC (PA..PF, PX, PY, PZ)
pub const MAX_PIN_PORTS: usize = 9;

/// Total number of pins addressable by the IOC
pub const TOTAL_PINS: usize = MAX_PIN_PORTS * LINES_PER_PORT;

/// Number of pins that are routed to GPIO banks (PA..PF)
pub const GPIO_PIN_COUNT: usize = 6 * LINES_PER_PORT;

/// Address stride between the register pairs of consecutive pins
pub const IOC_PIN_STRIDE: u32 = 8;

/// Largest pin stride accepted by configuration
pub const MAX_PIN_STRIDE: u32 = 0x100;

/// Offset of the function select register within a pin's register pair
pub const IOC_FUNC_OFFSET: u32 = 0;

/// Offset of the pad control register within a pin's register pair
pub const IOC_PAD_OFFSET: u32 = 4;

/// Port letters in global pin index order
pub const PIN_PORT_NAMES: [char; MAX_PIN_PORTS] = ['A', 'B', 'C', 'D', 'E', 'F', 'X', 'Y', 'Z'];

// =============================================================================
// Pin Control Table Capacities
// =============================================================================

/// Maximum length of a group or function name
pub const MAX_NAME_LEN: usize = 32;

/// Maximum number of pin groups per controller
pub const MAX_GROUPS: usize = 64;

/// Maximum number of functions per controller
pub const MAX_FUNCTIONS: usize = 32;

/// Maximum number of groups backing one function
pub const MAX_GROUPS_PER_FUNCTION: usize = 16;

/// Maximum number of pins in one group
pub const MAX_PINS_PER_GROUP: usize = 32;

/// Maximum number of pad configuration entries attached to one group
pub const MAX_CONFIGS_PER_GROUP: usize = 16;

/// Maximum number of map entries produced by one function node
pub const MAX_MAP_ENTRIES: usize = 2 * MAX_GROUPS_PER_FUNCTION;

// =============================================================================
// Compatible Strings
// =============================================================================

/// Device-tree compatible string of the GPIO controller
pub const GPIO_COMPATIBLE: &str = "hpmicro,gpio";

/// Device-tree compatible string of the IOC
pub const IOC_COMPATIBLE: &str = "hpmicro,ioc";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_space_covers_all_ports() {
        assert_eq!(TOTAL_PINS, 288);
        assert_eq!(GPIO_PIN_COUNT, 192);
        assert_eq!(PIN_PORT_NAMES.len(), MAX_PIN_PORTS);
    }

    #[test]
    fn test_map_capacity_fits_one_entry_pair_per_group() {
        assert!(MAX_MAP_ENTRIES >= 2 * MAX_GROUPS_PER_FUNCTION);
    }
}
