// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 HPM EdgeOS Contributors

//! HPMicro pin controller
//!
//! Owns the group and function tables built from the hardware description
//! and the pad configuration engine over the IOC. Group registration takes
//! the table write lock; mux and pad register updates take the engine's
//! register lock. When both are needed the table lock is taken first.
//!
//! Registration is an initialization step. Interrupt handlers may apply
//! mux states and pad configuration, but must not race with it.
//!
//! # Usage
//!
//! ```no_run
//! use hpm_common::config::PinctrlConfig;
//! use hpm_hal::hpmicro::description::{alt_select, FunctionNode, GroupNode};
//! use hpm_hal::hpmicro::pinctrl::PinController;
//! use hpm_hal::sim::SimIoc;
//!
//! let ioc = SimIoc::new();
//! let pinctrl = PinController::new(&ioc, &PinctrlConfig::DEFAULT)?;
//!
//! let pinmux = [alt_select(4, 2), alt_select(5, 3)];
//! let groups = [GroupNode { name: "uart0-default", pinmux: &pinmux, ..GroupNode::default() }];
//! let map = pinctrl.register_function(&FunctionNode { name: "uart0", groups: &groups })?;
//! pinctrl.apply_map(&map)?;
//! # Ok::<(), hpm_hal::HalError>(())
//! ```

use core::fmt;

use heapless::Vec;
use hpm_common::config::PinctrlConfig;
use hpm_common::constants::{
    MAX_CONFIGS_PER_GROUP, MAX_FUNCTIONS, MAX_GROUPS, MAX_MAP_ENTRIES, MAX_PINS_PER_GROUP,
};
use hpm_common::{log_debug, log_error, log_info, PinIndex, PinName};
use spin::RwLock;

use super::description::{pinmux_function, ConfigProperty, FunctionNode, GroupKind, GroupNode};
use super::name_from;
use super::pad::PadConfigEngine;
use super::regs::IocRegisters;
use crate::error::{HalError, HalResult};
use crate::pinconf::{PinConfig, PinConfigParam, PinConfigState};
use crate::traits::{
    GroupList, Name, PinList, PinconfOps, PinctrlOps, PinmuxOps, RegisterBlock,
};

const LOG_MODULE: &str = "pinctrl";

/// Pad configuration list of one group
pub type ConfigList = Vec<PinConfig, MAX_CONFIGS_PER_GROUP>;

/// Alternate function codes of a mux group, parallel to its pin list
type MuxList = Vec<u32, MAX_PINS_PER_GROUP>;

// ============================================================================
// Pin Map
// ============================================================================

/// One entry of the map produced by function registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapEntry {
    /// Route every pin of `group` to its function code
    MuxGroup {
        /// Function name
        function: Name,
        /// Group name
        group: Name,
    },
    /// Apply `configs` to every pin of `group`
    ConfigsGroup {
        /// Group name
        group: Name,
        /// Pad configuration
        configs: ConfigList,
    },
}

/// Map entries of one function
pub type PinMap = Vec<MapEntry, MAX_MAP_ENTRIES>;

// ============================================================================
// Tables
// ============================================================================

#[derive(Debug, Clone)]
struct GroupEntry {
    name: Name,
    function: Name,
    pins: PinList,
    /// Empty for configuration-only groups
    mux: MuxList,
    configs: ConfigList,
}

#[derive(Debug)]
struct FunctionEntry {
    name: Name,
    groups: GroupList,
}

struct Tables {
    groups: Vec<GroupEntry, MAX_GROUPS>,
    functions: Vec<FunctionEntry, MAX_FUNCTIONS>,
}

impl Tables {
    const fn new() -> Self {
        Self {
            groups: Vec::new(),
            functions: Vec::new(),
        }
    }

    fn group(&self, name: &str) -> Option<&GroupEntry> {
        self.groups.iter().find(|g| g.name == name)
    }

    fn function(&self, name: &str) -> Option<&FunctionEntry> {
        self.functions.iter().find(|f| f.name == name)
    }

    fn function_position(&self, name: &str) -> Option<usize> {
        self.functions.iter().position(|f| f.name == name)
    }
}

/// Table sizes captured before a registration, restored on failure
struct Checkpoint {
    groups: usize,
    functions: usize,
    /// Index and group count of a function that already existed
    function: Option<(usize, usize)>,
}

/// Validated form of one group node
struct ParsedGroup {
    entry: GroupEntry,
    kind: GroupKind,
}

fn parse_configs(group: &str, props: &[ConfigProperty<'_>]) -> HalResult<ConfigList> {
    let mut configs = ConfigList::new();
    for prop in props {
        let Some(param) = PinConfigParam::from_name(prop.name) else {
            log_debug!(LOG_MODULE, "{}: ignoring property {}", group, prop.name);
            continue;
        };
        let argument = prop.value.unwrap_or(param.default_argument());
        configs
            .push(PinConfig::new(param, argument))
            .map_err(|_| HalError::ResourceExhausted)?;
    }
    Ok(configs)
}

fn parse_group(function: &str, node: &GroupNode<'_>, pin_count: usize) -> HalResult<ParsedGroup> {
    let kind = node.kind()?;

    let mut pins = PinList::new();
    for pin in node.pin_indices() {
        if pin as usize >= pin_count {
            log_error!(LOG_MODULE, "{}: pin {} out of range", node.name, pin);
            return Err(HalError::InvalidPinIndex);
        }
        pins.push(pin).map_err(|_| HalError::ResourceExhausted)?;
    }

    let mut mux = MuxList::new();
    for &word in node.pinmux {
        mux.push(pinmux_function(word))
            .map_err(|_| HalError::ResourceExhausted)?;
    }

    Ok(ParsedGroup {
        entry: GroupEntry {
            name: name_from(node.name)?,
            function: name_from(function)?,
            pins,
            mux,
            configs: parse_configs(node.name, node.configs)?,
        },
        kind,
    })
}

// ============================================================================
// Controller
// ============================================================================

/// Pin controller over the IOC register window
pub struct PinController<R> {
    config: PinctrlConfig,
    pad: PadConfigEngine<R>,
    tables: RwLock<Tables>,
}

impl<R: RegisterBlock> PinController<R> {
    /// Create a controller with empty tables
    pub fn new(regs: R, config: &PinctrlConfig) -> HalResult<Self> {
        config.validate()?;
        log_info!(LOG_MODULE, "{} pins, {} with gpio", config.pin_count, config.gpio_pin_count);

        Ok(Self {
            config: *config,
            pad: PadConfigEngine::new(IocRegisters::new(regs, *config)),
            tables: RwLock::new(Tables::new()),
        })
    }

    /// Controller configuration
    #[must_use]
    pub const fn config(&self) -> &PinctrlConfig {
        &self.config
    }

    /// Pad configuration engine
    #[must_use]
    pub const fn pad(&self) -> &PadConfigEngine<R> {
        &self.pad
    }

    /// Register the groups of a function node
    ///
    /// Every group is validated before anything is registered. A group
    /// that already exists under the same function is reused when its pins,
    /// mux codes and configuration are unchanged, and rejected with
    /// `InvalidDescription` otherwise; a group owned by another function is
    /// rejected. On any failure the groups added by this call are removed
    /// again.
    ///
    /// Returns the map entries selecting this function's state.
    pub fn register_function(&self, node: &FunctionNode<'_>) -> HalResult<PinMap> {
        for group in node.groups {
            if let Err(e) = parse_group(node.name, group, self.config.pin_count) {
                log_error!(LOG_MODULE, "{}/{}: {}", node.name, group.name, e);
                return Err(e);
            }
        }

        let mut tables = self.tables.write();
        let checkpoint = Checkpoint {
            groups: tables.groups.len(),
            functions: tables.functions.len(),
            function: tables
                .function_position(node.name)
                .map(|i| (i, tables.functions[i].groups.len())),
        };

        match self.insert(&mut tables, node) {
            Ok(map) => {
                log_info!(LOG_MODULE, "function {}: {} groups", node.name, node.groups.len());
                Ok(map)
            }
            Err(e) => {
                Self::rollback(&mut tables, &checkpoint);
                log_error!(LOG_MODULE, "function {} not registered: {}", node.name, e);
                Err(e)
            }
        }
    }

    fn insert(&self, tables: &mut Tables, node: &FunctionNode<'_>) -> HalResult<PinMap> {
        let index = match tables.function_position(node.name) {
            Some(i) => i,
            None => {
                tables
                    .functions
                    .push(FunctionEntry { name: name_from(node.name)?, groups: GroupList::new() })
                    .map_err(|_| HalError::ResourceExhausted)?;
                tables.functions.len() - 1
            }
        };

        let mut map = PinMap::new();
        for group in node.groups {
            let ParsedGroup { entry, kind } = parse_group(node.name, group, self.config.pin_count)?;
            match tables.group(&entry.name) {
                Some(existing) if existing.function != entry.function => {
                    log_error!(
                        LOG_MODULE,
                        "group {} already belongs to {}",
                        entry.name,
                        existing.function
                    );
                    return Err(HalError::AmbiguousGroupBinding);
                }
                Some(existing)
                    if existing.pins != entry.pins
                        || existing.mux != entry.mux
                        || existing.configs != entry.configs =>
                {
                    log_error!(LOG_MODULE, "group {} redeclared with other contents", entry.name);
                    return Err(HalError::InvalidDescription);
                }
                Some(_) => {}
                None => tables
                    .groups
                    .push(entry.clone())
                    .map_err(|_| HalError::ResourceExhausted)?,
            }

            let groups = &mut tables.functions[index].groups;
            if !groups.contains(&entry.name) {
                groups
                    .push(entry.name.clone())
                    .map_err(|_| HalError::ResourceExhausted)?;
            }

            if kind == GroupKind::Mux {
                map.push(MapEntry::MuxGroup {
                    function: entry.function.clone(),
                    group: entry.name.clone(),
                })
                .map_err(|_| HalError::ResourceExhausted)?;
            }
            if !entry.configs.is_empty() {
                map.push(MapEntry::ConfigsGroup {
                    group: entry.name,
                    configs: entry.configs,
                })
                .map_err(|_| HalError::ResourceExhausted)?;
            }
        }

        Ok(map)
    }

    fn rollback(tables: &mut Tables, checkpoint: &Checkpoint) {
        tables.groups.truncate(checkpoint.groups);
        tables.functions.truncate(checkpoint.functions);
        if let Some((index, len)) = checkpoint.function {
            if let Some(function) = tables.functions.get_mut(index) {
                function.groups.truncate(len);
            }
        }
    }

    /// Route every pin of `group` to its function code
    ///
    /// `group` must be registered under `function`. The register lock is
    /// held across the whole group so applications of overlapping groups
    /// never interleave.
    pub fn apply_mux(&self, function: &str, group: &str) -> HalResult<()> {
        let tables = self.tables.read();
        let owner = tables.function(function).ok_or(HalError::NotFound)?;
        if !owner.groups.iter().any(|g| g == group) {
            return Err(HalError::NotFound);
        }
        let entry = tables.group(group).ok_or(HalError::NotFound)?;
        if entry.mux.is_empty() {
            return Err(HalError::NotSupported);
        }

        self.pad.locked(|ioc| {
            for (&pin, &alt) in entry.pins.iter().zip(entry.mux.iter()) {
                ioc.write_mux(pin, alt);
            }
        });

        for (&pin, &alt) in entry.pins.iter().zip(entry.mux.iter()) {
            log_debug!(LOG_MODULE, "{}: pin{} alt {}", group, pin, alt);
        }
        Ok(())
    }

    /// Ordered pins of `group`
    pub fn group_pins(&self, group: &str) -> HalResult<PinList> {
        let tables = self.tables.read();
        tables
            .group(group)
            .map(|g| g.pins.clone())
            .ok_or(HalError::NotFound)
    }

    /// Groups registered under `function`
    pub fn function_groups(&self, function: &str) -> HalResult<GroupList> {
        let tables = self.tables.read();
        tables
            .function(function)
            .map(|f| f.groups.clone())
            .ok_or(HalError::NotFound)
    }

    /// Apply `configs` to every pin of `group`
    ///
    /// A failing pin does not stop the others; the first error is returned
    /// once every pin has been visited.
    pub fn apply_group_configs(&self, group: &str, configs: &[PinConfig]) -> HalResult<()> {
        let mut result = Ok(());
        for pin in self.group_pins(group)? {
            if let Err(e) = self.pad.set(pin, configs) {
                result = result.and(Err(e));
            }
        }
        result
    }

    /// Apply map entries in order, stopping at the first failure
    pub fn apply_map(&self, map: &[MapEntry]) -> HalResult<()> {
        for entry in map {
            match entry {
                MapEntry::MuxGroup { function, group } => self.apply_mux(function, group)?,
                MapEntry::ConfigsGroup { group, configs } => {
                    self.apply_group_configs(group, configs)?;
                }
            }
        }
        Ok(())
    }

    /// Apply the mux and the stored pad configuration of every group of
    /// `function`
    pub fn select_state(&self, function: &str) -> HalResult<()> {
        for group in self.function_groups(function)? {
            let (has_mux, configs) = {
                let tables = self.tables.read();
                let entry = tables.group(&group).ok_or(HalError::NotFound)?;
                (!entry.mux.is_empty(), entry.configs.clone())
            };
            if has_mux {
                self.apply_mux(function, &group)?;
            }
            if !configs.is_empty() {
                self.apply_group_configs(&group, &configs)?;
            }
        }
        Ok(())
    }
}

impl<R: RegisterBlock> PinctrlOps for PinController<R> {
    fn pins_count(&self) -> usize {
        self.config.pin_count
    }

    fn pin_name(&self, pin: u32) -> Option<PinName> {
        PinIndex::new(pin)
            .ok()
            .filter(|_| (pin as usize) < self.config.pin_count)
            .map(PinIndex::name)
    }

    fn groups_count(&self) -> usize {
        self.tables.read().groups.len()
    }

    fn group_name(&self, selector: usize) -> Option<Name> {
        self.tables.read().groups.get(selector).map(|g| g.name.clone())
    }

    fn group_pins(&self, group: &str) -> HalResult<PinList> {
        PinController::group_pins(self, group)
    }

    fn pin_dbg_show(&self, pin: u32, out: &mut dyn fmt::Write) -> fmt::Result {
        if pin as usize >= self.config.gpio_pin_count {
            return Ok(());
        }
        let (Ok(func), Ok(pad)) = (self.pad.raw_mux(pin), self.pad.raw(pin)) else {
            return Ok(());
        };
        write!(out, "func={func:08x} pad={pad:08x}")
    }
}

impl<R: RegisterBlock> PinmuxOps for PinController<R> {
    fn functions_count(&self) -> usize {
        self.tables.read().functions.len()
    }

    fn function_name(&self, selector: usize) -> Option<Name> {
        self.tables.read().functions.get(selector).map(|f| f.name.clone())
    }

    fn function_groups(&self, function: &str) -> HalResult<GroupList> {
        PinController::function_groups(self, function)
    }

    fn set_mux(&self, function: &str, group: &str) -> HalResult<()> {
        self.apply_mux(function, group)
    }
}

impl<R: RegisterBlock> PinconfOps for PinController<R> {
    fn pin_config_get(&self, pin: u32, param: PinConfigParam) -> HalResult<PinConfigState> {
        self.pad.get(pin, param)
    }

    fn pin_config_set(&self, pin: u32, configs: &[PinConfig]) -> HalResult<()> {
        self.pad.set(pin, configs)
    }

    fn pin_config_group_get(&self, _group: &str, _param: PinConfigParam) -> HalResult<PinConfigState> {
        Err(HalError::NotSupported)
    }

    fn pin_config_group_set(&self, group: &str, configs: &[PinConfig]) -> HalResult<()> {
        self.apply_group_configs(group, configs)
    }

    fn pin_config_dbg_show(&self, pin: u32, out: &mut dyn fmt::Write) -> fmt::Result {
        match self.pad.raw(pin) {
            Ok(pad) => write!(out, " (0x{pad:03x})"),
            Err(_) => Ok(()),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(all(test, feature = "sim"))]
mod tests {
    use super::*;
    use heapless::String;

    use crate::hpmicro::description::alt_select;
    use crate::hpmicro::pad::{PAD_PE, PAD_PS};
    use crate::sim::SimIoc;

    fn controller(ioc: &SimIoc) -> PinController<&SimIoc> {
        PinController::new(ioc, &PinctrlConfig::DEFAULT).unwrap()
    }

    #[test]
    fn test_register_builds_map() {
        let ioc = SimIoc::new();
        let pinctrl = controller(&ioc);

        let pinmux = [alt_select(10, 1), alt_select(11, 1)];
        let configs = [ConfigProperty::flag("bias-pull-up"), ConfigProperty::flag("unknown-prop")];
        let pins = [40];
        let groups = [
            GroupNode { name: "spi1-mux", pinmux: &pinmux, configs: &configs, ..GroupNode::default() },
            GroupNode { name: "spi1-cs", pins: &pins, configs: &configs, ..GroupNode::default() },
        ];
        let map = pinctrl
            .register_function(&FunctionNode { name: "spi1", groups: &groups })
            .unwrap();

        assert_eq!(map.len(), 3);
        assert!(matches!(&map[0], MapEntry::MuxGroup { function, group } if function == "spi1" && group == "spi1-mux"));
        match &map[2] {
            MapEntry::ConfigsGroup { group, configs } => {
                assert_eq!(group, "spi1-cs");
                assert_eq!(configs.as_slice(), &[PinConfig::new(PinConfigParam::BiasPullUp, 1)]);
            }
            other => panic!("unexpected entry {other:?}"),
        }
        assert_eq!(pinctrl.groups_count(), 2);
        assert_eq!(pinctrl.functions_count(), 1);
        assert_eq!(pinctrl.group_pins("spi1-mux").unwrap().as_slice(), &[10, 11]);
    }

    #[test]
    fn test_validation_registers_nothing() {
        let ioc = SimIoc::new();
        let pinctrl = controller(&ioc);

        let pins = [1];
        let pinmux = [alt_select(2, 3)];
        let groups = [
            GroupNode { name: "ok", pins: &pins, ..GroupNode::default() },
            GroupNode { name: "both", pins: &pins, pinmux: &pinmux, ..GroupNode::default() },
        ];
        let result = pinctrl.register_function(&FunctionNode { name: "f", groups: &groups });
        assert_eq!(result, Err(HalError::MixedGroupDeclaration));
        assert_eq!(pinctrl.groups_count(), 0);
        assert_eq!(pinctrl.functions_count(), 0);

        let far = [288];
        let groups = [GroupNode { name: "far", pins: &far, ..GroupNode::default() }];
        let result = pinctrl.register_function(&FunctionNode { name: "f", groups: &groups });
        assert_eq!(result, Err(HalError::InvalidPinIndex));
    }

    #[test]
    fn test_group_owned_by_other_function() {
        let ioc = SimIoc::new();
        let pinctrl = controller(&ioc);
        let pins = [3];
        let shared = [GroupNode { name: "shared", pins: &pins, ..GroupNode::default() }];
        pinctrl.register_function(&FunctionNode { name: "a", groups: &shared }).unwrap();

        let extra = [4];
        let groups = [
            GroupNode { name: "b-own", pins: &extra, ..GroupNode::default() },
            GroupNode { name: "shared", pins: &pins, ..GroupNode::default() },
        ];
        let result = pinctrl.register_function(&FunctionNode { name: "b", groups: &groups });
        assert_eq!(result, Err(HalError::AmbiguousGroupBinding));
        assert_eq!(pinctrl.groups_count(), 1);
        assert_eq!(pinctrl.function_groups("b"), Err(HalError::NotFound));
    }

    #[test]
    fn test_reregistration_merges() {
        let ioc = SimIoc::new();
        let pinctrl = controller(&ioc);
        let pins = [3];
        let first = [GroupNode { name: "g0", pins: &pins, ..GroupNode::default() }];
        let second = [
            GroupNode { name: "g0", pins: &pins, ..GroupNode::default() },
            GroupNode { name: "g1", pins: &pins, ..GroupNode::default() },
        ];
        pinctrl.register_function(&FunctionNode { name: "f", groups: &first }).unwrap();
        pinctrl.register_function(&FunctionNode { name: "f", groups: &second }).unwrap();

        let groups = pinctrl.function_groups("f").unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(pinctrl.groups_count(), 2);
    }

    #[test]
    fn test_redeclared_group_must_match() {
        let ioc = SimIoc::new();
        let pinctrl = controller(&ioc);
        let pinmux = [alt_select(3, 1)];
        let first = [GroupNode { name: "g0", pinmux: &pinmux, ..GroupNode::default() }];
        pinctrl.register_function(&FunctionNode { name: "f", groups: &first }).unwrap();

        let moved = [alt_select(9, 1)];
        let pins = [12];
        let second = [
            GroupNode { name: "g1", pins: &pins, ..GroupNode::default() },
            GroupNode { name: "g0", pinmux: &moved, ..GroupNode::default() },
        ];
        let result = pinctrl.register_function(&FunctionNode { name: "f", groups: &second });
        assert_eq!(result, Err(HalError::InvalidDescription));
        assert_eq!(pinctrl.group_pins("g0").unwrap().as_slice(), &[3]);
        assert_eq!(pinctrl.group_pins("g1"), Err(HalError::NotFound));
        assert_eq!(pinctrl.function_groups("f").unwrap().len(), 1);

        let remuxed = [alt_select(3, 2)];
        let third = [GroupNode { name: "g0", pinmux: &remuxed, ..GroupNode::default() }];
        let result = pinctrl.register_function(&FunctionNode { name: "f", groups: &third });
        assert_eq!(result, Err(HalError::InvalidDescription));
    }

    #[test]
    fn test_apply_mux_lookup_errors() {
        let ioc = SimIoc::new();
        let pinctrl = controller(&ioc);
        let pins = [7];
        let pinmux = [alt_select(8, 5)];
        let groups = [
            GroupNode { name: "cfg-only", pins: &pins, ..GroupNode::default() },
            GroupNode { name: "muxed", pinmux: &pinmux, ..GroupNode::default() },
        ];
        pinctrl.register_function(&FunctionNode { name: "f", groups: &groups }).unwrap();

        assert_eq!(pinctrl.apply_mux("nope", "muxed"), Err(HalError::NotFound));
        assert_eq!(pinctrl.apply_mux("f", "nope"), Err(HalError::NotFound));
        assert_eq!(pinctrl.apply_mux("f", "cfg-only"), Err(HalError::NotSupported));

        pinctrl.set_mux("f", "muxed").unwrap();
        assert_eq!(ioc.peek(PinctrlConfig::DEFAULT.func_reg(8)), 5);
    }

    #[test]
    fn test_select_state_applies_mux_and_configs() {
        let ioc = SimIoc::new();
        let pinctrl = controller(&ioc);
        let pinmux = [alt_select(20, 4)];
        let configs = [ConfigProperty::flag("bias-pull-down")];
        let groups = [GroupNode { name: "i2c0", pinmux: &pinmux, configs: &configs, ..GroupNode::default() }];
        pinctrl.register_function(&FunctionNode { name: "i2c", groups: &groups }).unwrap();

        pinctrl.select_state("i2c").unwrap();
        assert_eq!(ioc.peek(PinctrlConfig::DEFAULT.func_reg(20)), 4);
        assert_eq!(ioc.peek(PinctrlConfig::DEFAULT.pad_reg(20)) & (PAD_PE | PAD_PS), PAD_PE);
        assert_eq!(pinctrl.select_state("uart9"), Err(HalError::NotFound));
    }

    #[test]
    fn test_group_config_get_unsupported() {
        let ioc = SimIoc::new();
        let pinctrl = controller(&ioc);
        assert_eq!(
            pinctrl.pin_config_group_get("any", PinConfigParam::BiasPullUp),
            Err(HalError::NotSupported)
        );
    }

    #[test]
    fn test_debug_dumps() {
        let ioc = SimIoc::new();
        let pinctrl = controller(&ioc);
        ioc.poke(PinctrlConfig::DEFAULT.func_reg(1), 0x3);
        ioc.poke(PinctrlConfig::DEFAULT.pad_reg(1), 0x20041);

        let mut out: String<64> = String::new();
        pinctrl.pin_dbg_show(1, &mut out).unwrap();
        assert_eq!(out.as_str(), "func=00000003 pad=00020041");

        out.clear();
        pinctrl.pin_dbg_show(200, &mut out).unwrap();
        assert!(out.is_empty());

        out.clear();
        pinctrl.pin_config_dbg_show(1, &mut out).unwrap();
        assert_eq!(out.as_str(), " (0x20041)");
    }

    #[test]
    fn test_pin_names() {
        let ioc = SimIoc::new();
        let pinctrl = controller(&ioc);
        assert_eq!(pinctrl.pins_count(), 288);

        let mut out: String<8> = String::new();
        core::fmt::write(&mut out, format_args!("{}", pinctrl.pin_name(33).unwrap())).unwrap();
        assert_eq!(out.as_str(), "PB1");
        assert!(pinctrl.pin_name(288).is_none());
    }
}
