// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 HPM EdgeOS Contributors

//! Tests for hpm-common
//!
//! Tests for common types, error handling, configuration and logging.

mod types_tests {
    use hpm_common::{Direction, Level, PinIndex, TriggerType};

    #[test]
    fn test_pin_index_round_trips_port_and_line() {
        for index in 0..288u32 {
            let pin = PinIndex::new(index).unwrap();
            assert_eq!(u32::from(pin.port()) * 32 + u32::from(pin.line()), index);
        }
    }

    #[test]
    fn test_pin_names_cover_all_ports() {
        let names: Vec<String> = (0..9u8)
            .map(|port| PinIndex::from_port_line(port, 0).unwrap().name().to_string())
            .collect();
        assert_eq!(names, ["PA0", "PB0", "PC0", "PD0", "PE0", "PF0", "PX0", "PY0", "PZ0"]);
    }

    #[test]
    fn test_level_conversions() {
        assert_eq!(Level::from(true), Level::High);
        assert!(!bool::from(Level::Low));
        assert_ne!(Direction::Input, Direction::Output);
    }

    #[test]
    fn test_trigger_kinds_partition() {
        let all = [
            TriggerType::EdgeRising,
            TriggerType::EdgeFalling,
            TriggerType::EdgeBoth,
            TriggerType::LevelHigh,
            TriggerType::LevelLow,
        ];
        for kind in all {
            assert_ne!(kind.is_edge(), kind.is_level());
            assert_eq!(TriggerType::from_bits(kind.bits()), Ok(kind));
        }
        assert!(!TriggerType::None.is_edge());
        assert!(!TriggerType::None.is_level());
    }
}

mod error_tests {
    use hpm_common::Error;
    use std::collections::HashSet;

    const ALL: [Error; 14] = [
        Error::InvalidDescription,
        Error::MixedGroupDeclaration,
        Error::EmptyGroupDeclaration,
        Error::InvalidPortIndex,
        Error::InvalidPinIndex,
        Error::InvalidLineCount,
        Error::AmbiguousGroupBinding,
        Error::UnsupportedConfig,
        Error::InvalidTriggerType,
        Error::InvalidLine,
        Error::NoParentInterrupt,
        Error::ResourceExhausted,
        Error::InvalidParameter,
        Error::NotFound,
    ];

    #[test]
    fn test_error_codes_unique() {
        let unique: HashSet<_> = ALL.iter().map(Error::code).collect();
        assert_eq!(unique.len(), ALL.len());
    }

    #[test]
    fn test_error_categories() {
        for err in ALL {
            let category = err.code() & 0xFF00;
            assert!(matches!(category, 0x0100 | 0x0200 | 0x0300 | 0x0900 | 0xFF00));
        }
    }

    #[test]
    fn test_error_display() {
        let display = Error::UnsupportedConfig.to_string();
        assert!(display.contains("0x0202"));
        assert!(display.contains("unsupported"));
    }
}

mod config_tests {
    use hpm_common::config::{GpioConfig, PinctrlConfig};
    use hpm_common::{Error, SystemConfig};

    #[test]
    fn test_system_config_defaults() {
        let cfg = SystemConfig::default();
        assert_eq!(cfg.gpio.compatible, "hpmicro,gpio");
        assert_eq!(cfg.gpio.max_ports, 8);
        assert_eq!(cfg.gpio.default_line_count, 32);
        assert_eq!(cfg.pinctrl.compatible, "hpmicro,ioc");
        assert_eq!(cfg.pinctrl.pin_count, 288);
        assert_eq!(cfg.pinctrl.gpio_pin_count, 192);
    }

    #[test]
    fn test_config_validation() {
        let gpio = GpioConfig {
            port_stride: 0x12,
            ..GpioConfig::DEFAULT
        };
        assert_eq!(gpio.validate(), Err(Error::InvalidParameter));

        let pinctrl = PinctrlConfig {
            gpio_pin_count: 300,
            ..PinctrlConfig::DEFAULT
        };
        assert_eq!(pinctrl.validate(), Err(Error::InvalidParameter));

        let pinctrl = PinctrlConfig {
            pad_offset: 8,
            ..PinctrlConfig::DEFAULT
        };
        assert_eq!(pinctrl.validate(), Err(Error::InvalidParameter));
    }
}

mod log_tests {
    use hpm_common::log::{with_system_log, LogLevel};
    use hpm_common::{log_info, log_warn};

    #[test]
    fn test_macros_record_into_system_log() {
        log_info!("log-test", "probed port {}", 3);
        log_warn!("log-test", "duplicate index {}", 7);

        with_system_log(|buf| {
            assert!(buf.contains("probed port 3"));
            assert!(buf.contains("duplicate index 7"));
            let warn = buf
                .iter()
                .find(|e| e.message.contains("duplicate index 7"))
                .unwrap();
            assert_eq!(warn.level, LogLevel::Warn);
            assert_eq!(warn.module, "log-test");
        });
    }
}
