// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 HPM EdgeOS Contributors

//! Diagnostic log for the HPMicro drivers
//!
//! Driver configuration paths (port enumeration, group registration, mux
//! application, pad configuration) record short messages into
//! [`SYSTEM_LOG`], a fixed-size ring that keeps the most recent
//! [`LOG_CAPACITY`] entries. The host drains or inspects it for
//! diagnostics.
//!
//! The interrupt demultiplexer never logs. Configuration calls made from
//! interrupt handlers may, so the ring lock is only taken inside a critical
//! section.
//!
//! # Example
//!
//! ```
//! use hpm_common::log_warn;
//! use hpm_common::log::with_system_log;
//!
//! log_warn!("gpio", "duplicate port index {}", 2);
//! with_system_log(|log| assert!(log.contains("duplicate port index 2")));
//! ```

use core::fmt::{self, Write};
use core::sync::atomic::{AtomicU32, AtomicU8, Ordering};

use heapless::{Deque, String};
use spin::Mutex;

/// Maximum message length in bytes
pub const MAX_MESSAGE_LEN: usize = 96;

/// Number of entries kept by [`SYSTEM_LOG`]
pub const LOG_CAPACITY: usize = 32;

/// Severity of a log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum LogLevel {
    /// Controller could not be set up as described
    Error = 0,
    /// Description entry ignored or replaced
    Warn = 1,
    /// Enumeration and registration progress
    Info = 2,
    /// Per-pin register updates
    Debug = 3,
    /// Very verbose
    Trace = 4,
}

impl LogLevel {
    /// Upper-case level name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warn => "WARN",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
            Self::Trace => "TRACE",
        }
    }

    const fn from_u8(raw: u8) -> Self {
        match raw {
            0 => Self::Error,
            1 => Self::Warn,
            2 => Self::Info,
            3 => Self::Debug,
            _ => Self::Trace,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One recorded message
#[derive(Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Severity
    pub level: LogLevel,
    /// Position in the global record order
    pub seq: u32,
    /// Recording driver, e.g. `gpio` or `pinctrl`
    pub module: &'static str,
    /// Message text, cut at [`MAX_MESSAGE_LEN`] on a char boundary
    pub message: String<MAX_MESSAGE_LEN>,
}

impl LogEntry {
    /// Build an entry from preformatted text
    #[must_use]
    pub fn new(level: LogLevel, seq: u32, module: &'static str, text: &str) -> Self {
        let mut message = String::new();
        let _ = TruncatingWriter(&mut message).write_str(text);
        Self { level, seq, module, message }
    }
}

impl fmt::Debug for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:<5} {:<5} {}: {}", self.seq, self.level, self.module, self.message)
    }
}

/// Writer that keeps as many whole chars as fit and drops the rest
struct TruncatingWriter<'a>(&'a mut String<MAX_MESSAGE_LEN>);

impl Write for TruncatingWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            if self.0.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}

/// Ring of the most recent [`LOG_CAPACITY`] entries
pub struct LogBuffer {
    entries: Deque<LogEntry, LOG_CAPACITY>,
    dropped: u32,
}

impl LogBuffer {
    /// Create an empty ring
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Deque::new(),
            dropped: 0,
        }
    }

    /// Append `entry`, evicting the oldest one when full
    pub fn push(&mut self, entry: LogEntry) {
        if self.entries.is_full() {
            self.entries.pop_front();
            self.dropped = self.dropped.wrapping_add(1);
        }
        let _ = self.entries.push_back(entry);
    }

    /// Number of entries held
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the ring holds nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries evicted since creation
    #[must_use]
    pub const fn dropped(&self) -> u32 {
        self.dropped
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> + '_ {
        self.entries.iter()
    }

    /// Remove and return the oldest entry
    pub fn pop(&mut self) -> Option<LogEntry> {
        self.entries.pop_front()
    }

    /// Check if any held message contains `needle`
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.iter().any(|e| e.message.contains(needle))
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// System Log
// =============================================================================

/// Log shared by every controller instance
pub static SYSTEM_LOG: Mutex<LogBuffer> = Mutex::new(LogBuffer::new());

static SEQUENCE: AtomicU32 = AtomicU32::new(0);

static MAX_LEVEL: AtomicU8 = AtomicU8::new(LogLevel::Debug as u8);

/// Most verbose level that is recorded
#[must_use]
pub fn max_level() -> LogLevel {
    LogLevel::from_u8(MAX_LEVEL.load(Ordering::Relaxed))
}

/// Set the most verbose level that is recorded
pub fn set_max_level(level: LogLevel) {
    MAX_LEVEL.store(level as u8, Ordering::Relaxed);
}

/// Check if messages at `level` are recorded
#[must_use]
pub fn enabled(level: LogLevel) -> bool {
    level as u8 <= MAX_LEVEL.load(Ordering::Relaxed)
}

/// Format and append a message to [`SYSTEM_LOG`]
///
/// Filtered messages are never formatted.
pub fn record(level: LogLevel, module: &'static str, args: fmt::Arguments<'_>) {
    if !enabled(level) {
        return;
    }

    let mut message = String::new();
    let _ = TruncatingWriter(&mut message).write_fmt(args);
    let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed);

    critical_section::with(|_| SYSTEM_LOG.lock().push(LogEntry { level, seq, module, message }));
}

/// Run `f` with [`SYSTEM_LOG`] locked
pub fn with_system_log<T>(f: impl FnOnce(&mut LogBuffer) -> T) -> T {
    critical_section::with(|_| f(&mut SYSTEM_LOG.lock()))
}

/// Log an error message
#[macro_export]
macro_rules! log_error {
    ($module:expr, $($arg:tt)*) => {
        $crate::log::record($crate::log::LogLevel::Error, $module, format_args!($($arg)*))
    };
}

/// Log a warning message
#[macro_export]
macro_rules! log_warn {
    ($module:expr, $($arg:tt)*) => {
        $crate::log::record($crate::log::LogLevel::Warn, $module, format_args!($($arg)*))
    };
}

/// Log an informational message
#[macro_export]
macro_rules! log_info {
    ($module:expr, $($arg:tt)*) => {
        $crate::log::record($crate::log::LogLevel::Info, $module, format_args!($($arg)*))
    };
}

/// Log a debug message
#[macro_export]
macro_rules! log_debug {
    ($module:expr, $($arg:tt)*) => {
        $crate::log::record($crate::log::LogLevel::Debug, $module, format_args!($($arg)*))
    };
}

/// Log a trace-level message
#[macro_export]
macro_rules! log_trace {
    ($module:expr, $($arg:tt)*) => {
        $crate::log::record($crate::log::LogLevel::Trace, $module, format_args!($($arg)*))
    };
}
