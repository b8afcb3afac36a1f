// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 HPM EdgeOS Contributors

//! HPMicro pad configuration engine
//!
//! Translates [`PinConfigParam`] requests into read-modify-write sequences
//! on a pin's pad control register, and decodes the register back.
//!
//! # Pad Control Register
//!
//! | Bits  | Field                          |
//! |-------|--------------------------------|
//! | 2:0   | drive strength                 |
//! | 5:4   | slew rate addition             |
//! | 6     | slew rate enable               |
//! | 8     | open drain                     |
//! | 16    | keeper enable                  |
//! | 17    | pull enable                    |
//! | 18    | pull select (1 = up)           |
//! | 21:20 | pull resistance strength       |
//! | 24    | schmitt trigger                |

use hpm_common::constants::TOTAL_PINS;
use hpm_common::log_debug;
use spin::Mutex;

use super::regs::IocRegisters;
use crate::error::{HalError, HalResult};
use crate::pinconf::{PinConfig, PinConfigParam, PinConfigState};
use crate::traits::RegisterBlock;

const LOG_MODULE: &str = "pinconf";

// ============================================================================
// Pad Fields
// ============================================================================

/// Drive strength
pub const PAD_DS_MASK: u32 = 0b111;
/// Drive strength shift
pub const PAD_DS_SHIFT: u32 = 0;
/// Slew rate addition
pub const PAD_SR_ADD_MASK: u32 = 0b11 << 4;
/// Slew rate addition shift
pub const PAD_SR_ADD_SHIFT: u32 = 4;
/// Slew rate enable
pub const PAD_SR: u32 = 1 << 6;
/// Open drain
pub const PAD_OD: u32 = 1 << 8;
/// Keeper enable
pub const PAD_KE: u32 = 1 << 16;
/// Keeper shift
pub const PAD_KE_SHIFT: u32 = 16;
/// Pull enable
pub const PAD_PE: u32 = 1 << 17;
/// Pull select, set for pull-up
pub const PAD_PS: u32 = 1 << 18;
/// Both bias bits
pub const PAD_BIAS_MASK: u32 = PAD_PE | PAD_PS;
/// Pull resistance strength
pub const PAD_PRS_MASK: u32 = 0b11 << 20;
/// Pull resistance strength shift
pub const PAD_PRS_SHIFT: u32 = 20;
/// Schmitt trigger
pub const PAD_HYS: u32 = 1 << 24;

#[inline]
const fn field(mask: u32, shift: u32, value: u32) -> u32 {
    (value << shift) & mask
}

#[inline]
const fn extract(reg: u32, mask: u32, shift: u32) -> u32 {
    (reg & mask) >> shift
}

/// Mask and value a parameter writes into the pad register
///
/// Open drain is a presence flag and ignores the argument; a zero schmitt
/// argument clears the trigger.
#[must_use]
pub const fn encode(param: PinConfigParam, argument: u32) -> (u32, u32) {
    match param {
        PinConfigParam::InterResistanceStrength => {
            (PAD_PRS_MASK, field(PAD_PRS_MASK, PAD_PRS_SHIFT, argument))
        }
        PinConfigParam::InterKeeperCap => (PAD_KE, field(PAD_KE, PAD_KE_SHIFT, argument)),
        PinConfigParam::OutputImpedanceOhms => {
            (PAD_DS_MASK, field(PAD_DS_MASK, PAD_DS_SHIFT, argument))
        }
        PinConfigParam::DriveOpenDrain => (PAD_OD, PAD_OD),
        PinConfigParam::BiasDisable => (PAD_PE, 0),
        PinConfigParam::BiasPullDown => (PAD_BIAS_MASK, PAD_PE),
        PinConfigParam::BiasPullUp => (PAD_BIAS_MASK, PAD_PE | PAD_PS),
        PinConfigParam::InputSchmittEnable => (PAD_HYS, if argument != 0 { PAD_HYS } else { 0 }),
        PinConfigParam::SlewRate => (
            PAD_SR | PAD_SR_ADD_MASK,
            PAD_SR | field(PAD_SR_ADD_MASK, PAD_SR_ADD_SHIFT, argument),
        ),
    }
}

/// Decode `param` from a pad register value
///
/// Pull-down reads enabled only when bias is on and pull-up is not
/// selected; pull-up likewise requires bias to be on.
#[must_use]
pub const fn decode(param: PinConfigParam, reg: u32) -> PinConfigState {
    let bias = reg & PAD_PE != 0;
    let up = reg & PAD_PS != 0;

    match param {
        PinConfigParam::InterResistanceStrength => {
            PinConfigState::enabled(extract(reg, PAD_PRS_MASK, PAD_PRS_SHIFT))
        }
        PinConfigParam::InterKeeperCap => PinConfigState::enabled(extract(reg, PAD_KE, PAD_KE_SHIFT)),
        PinConfigParam::OutputImpedanceOhms => {
            PinConfigState::enabled(extract(reg, PAD_DS_MASK, PAD_DS_SHIFT))
        }
        PinConfigParam::DriveOpenDrain => {
            let on = reg & PAD_OD != 0;
            PinConfigState {
                enabled: on,
                value: on as u32,
            }
        }
        PinConfigParam::BiasDisable => PinConfigState {
            enabled: !bias,
            value: 0,
        },
        PinConfigParam::BiasPullDown => PinConfigState {
            enabled: bias && !up,
            value: 1,
        },
        PinConfigParam::BiasPullUp => PinConfigState {
            enabled: bias && up,
            value: 1,
        },
        PinConfigParam::InputSchmittEnable => {
            let on = reg & PAD_HYS != 0;
            PinConfigState {
                enabled: on,
                value: on as u32,
            }
        }
        PinConfigParam::SlewRate => PinConfigState {
            enabled: reg & PAD_SR != 0,
            value: extract(reg, PAD_SR_ADD_MASK, PAD_SR_ADD_SHIFT),
        },
    }
}

// ============================================================================
// Engine
// ============================================================================

/// Pad configuration engine over the IOC
///
/// The single lock serializes every read-modify-write of a pad register
/// and every mux group application, so neither can interleave with the
/// other.
pub struct PadConfigEngine<R> {
    ioc: IocRegisters<R>,
    lock: Mutex<()>,
}

impl<R: RegisterBlock> PadConfigEngine<R> {
    /// Create an engine over `ioc`
    #[must_use]
    pub const fn new(ioc: IocRegisters<R>) -> Self {
        Self {
            ioc,
            lock: Mutex::new(()),
        }
    }

    /// Number of pins addressable through this engine
    #[must_use]
    pub fn pin_count(&self) -> usize {
        self.ioc.layout().pin_count.min(TOTAL_PINS)
    }

    fn check_pin(&self, pin: u32) -> HalResult<()> {
        if (pin as usize) < self.pin_count() {
            Ok(())
        } else {
            Err(HalError::InvalidPinIndex)
        }
    }

    /// Run `f` with the register lock held
    ///
    /// The lock is taken inside a critical section, so an interrupt handler
    /// on the same core cannot preempt the holder and spin on it.
    pub fn locked<T>(&self, f: impl FnOnce(&IocRegisters<R>) -> T) -> T {
        critical_section::with(|_| {
            let _guard = self.lock.lock();
            f(&self.ioc)
        })
    }

    /// Read-modify-write the bits in `mask` of `pin`'s pad register
    pub fn update(&self, pin: u32, mask: u32, value: u32) -> HalResult<()> {
        self.check_pin(pin)?;
        self.locked(|ioc| {
            let reg = ioc.read_pad_config(pin);
            ioc.write_pad_config(pin, (reg & !mask) | (value & mask));
        });
        Ok(())
    }

    /// Raw pad register of `pin`
    pub fn raw(&self, pin: u32) -> HalResult<u32> {
        self.check_pin(pin)?;
        Ok(self.ioc.read_pad_config(pin))
    }

    /// Raw function select register of `pin`
    pub fn raw_mux(&self, pin: u32) -> HalResult<u32> {
        self.check_pin(pin)?;
        Ok(self.ioc.read_mux(pin))
    }

    /// Decode one parameter of `pin`
    pub fn get(&self, pin: u32, param: PinConfigParam) -> HalResult<PinConfigState> {
        Ok(decode(param, self.raw(pin)?))
    }

    /// Apply `configs` to `pin` in list order
    ///
    /// Stops with `NotSupported` at the first parameter outside the closed
    /// set. Entries before it stay applied.
    pub fn set(&self, pin: u32, configs: &[PinConfig]) -> HalResult<()> {
        self.check_pin(pin)?;
        for config in configs {
            let Some(param) = config.param() else {
                log_debug!(LOG_MODULE, "pin{}: unsupported param {:#x}", pin, config.param_id());
                return Err(HalError::NotSupported);
            };
            let (mask, value) = encode(param, config.argument());
            self.update(pin, mask, value)?;
            log_debug!(LOG_MODULE, "pin{} config set {}={}", pin, param, config.argument());
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(all(test, feature = "sim"))]
mod tests {
    extern crate std;

    use super::*;
    use hpm_common::config::PinctrlConfig;

    use crate::sim::SimIoc;

    fn engine(file: &SimIoc) -> PadConfigEngine<&SimIoc> {
        PadConfigEngine::new(IocRegisters::new(file, PinctrlConfig::DEFAULT))
    }

    #[test]
    fn test_field_writes_are_masked() {
        let file = SimIoc::new();
        let pad = engine(&file);
        pad.set(3, &[PinConfig::new(PinConfigParam::OutputImpedanceOhms, 0xFF)]).unwrap();
        assert_eq!(pad.raw(3).unwrap(), PAD_DS_MASK);

        pad.set(3, &[PinConfig::new(PinConfigParam::InterResistanceStrength, 0x7)]).unwrap();
        assert_eq!(pad.raw(3).unwrap(), PAD_DS_MASK | PAD_PRS_MASK);
    }

    #[test]
    fn test_other_fields_untouched() {
        let file = SimIoc::new();
        let pad = engine(&file);
        file.poke(PinctrlConfig::DEFAULT.pad_reg(9), PAD_HYS | PAD_OD | 0b101);

        pad.set(9, &[PinConfig::new(PinConfigParam::BiasPullUp, 1)]).unwrap();
        assert_eq!(pad.raw(9).unwrap(), PAD_HYS | PAD_OD | 0b101 | PAD_PE | PAD_PS);

        pad.set(9, &[PinConfig::new(PinConfigParam::BiasPullDown, 1)]).unwrap();
        assert_eq!(pad.raw(9).unwrap(), PAD_HYS | PAD_OD | 0b101 | PAD_PE);
    }

    #[test]
    fn test_slew_rate_sets_enable_and_addition() {
        let file = SimIoc::new();
        let pad = engine(&file);
        pad.set(0, &[PinConfig::new(PinConfigParam::SlewRate, 2)]).unwrap();
        assert_eq!(pad.raw(0).unwrap(), PAD_SR | (2 << 4));
        assert_eq!(pad.get(0, PinConfigParam::SlewRate).unwrap(), PinConfigState::enabled(2));
    }

    #[test]
    fn test_pull_up_requires_bias() {
        assert!(!decode(PinConfigParam::BiasPullUp, PAD_PS).enabled);
        assert!(!decode(PinConfigParam::BiasPullDown, PAD_PS).enabled);
        assert!(decode(PinConfigParam::BiasDisable, PAD_PS).enabled);
        assert!(!decode(PinConfigParam::BiasPullDown, PAD_PE | PAD_PS).enabled);
    }

    #[test]
    fn test_boolean_field_arguments() {
        assert_eq!(encode(PinConfigParam::DriveOpenDrain, 0), (PAD_OD, PAD_OD));
        assert_eq!(encode(PinConfigParam::InputSchmittEnable, 1), (PAD_HYS, PAD_HYS));
        assert_eq!(encode(PinConfigParam::InputSchmittEnable, 0), (PAD_HYS, 0));
        assert_eq!(encode(PinConfigParam::InterKeeperCap, 0), (PAD_KE, 0));
        assert_eq!(decode(PinConfigParam::DriveOpenDrain, 0), PinConfigState { enabled: false, value: 0 });
        assert_eq!(decode(PinConfigParam::InputSchmittEnable, 0), PinConfigState { enabled: false, value: 0 });
    }

    #[test]
    fn test_concurrent_updates_of_one_pad() {
        let file = SimIoc::new();
        let pad = engine(&file);
        const ROUNDS: u32 = 2_000;

        std::thread::scope(|s| {
            s.spawn(|| {
                for i in 0..ROUNDS {
                    pad.update(7, PAD_DS_MASK, i).unwrap();
                }
            });
            s.spawn(|| {
                for i in 0..ROUNDS {
                    pad.update(7, PAD_PRS_MASK, i << PAD_PRS_SHIFT).unwrap();
                }
            });
            for _ in 0..ROUNDS {
                pad.update(7, PAD_HYS, PAD_HYS).unwrap();
            }
        });

        let last = ROUNDS - 1;
        assert_eq!(
            pad.raw(7).unwrap(),
            (last & PAD_DS_MASK) | ((last << PAD_PRS_SHIFT) & PAD_PRS_MASK) | PAD_HYS
        );
    }

    #[test]
    fn test_pin_out_of_range() {
        let file = SimIoc::new();
        let pad = engine(&file);
        assert_eq!(pad.raw(288), Err(HalError::InvalidPinIndex));
        assert_eq!(
            pad.set(300, &[PinConfig::new(PinConfigParam::BiasDisable, 0)]),
            Err(HalError::InvalidPinIndex)
        );
    }
}
