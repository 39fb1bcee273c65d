//! Severity levels and the shared threshold used to filter records.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use crate::error::ConfigError;

/// Record severity, ordered from most verbose to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Level {
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
    /// Development-time panic. Logged like an error; never panics here.
    DPanic = 4,
    Panic = 5,
    Fatal = 6,
}

/// Name table used by both strict parsing and [`Level::resolve`].
const LEVEL_NAMES: [(&str, Level); 7] = [
    ("debug", Level::Debug),
    ("info", Level::Info),
    ("warn", Level::Warn),
    ("error", Level::Error),
    ("dpanic", Level::DPanic),
    ("panic", Level::Panic),
    ("fatal", Level::Fatal),
];

impl Level {
    /// Every level, lowest first.
    pub const ALL: [Level; 7] = [
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::DPanic,
        Level::Panic,
        Level::Fatal,
    ];

    /// Resolve a configured level name, case-insensitively.
    ///
    /// Unknown or empty names fall back to [`Level::Debug`], the most verbose
    /// level; a bad name is never treated as an error.
    pub fn resolve(name: &str) -> Level {
        match name.parse() {
            Ok(level) => level,
            Err(_) => Level::Debug,
        }
    }

    /// Lowercase name, as accepted in configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::DPanic => "dpanic",
            Level::Panic => "panic",
            Level::Fatal => "fatal",
        }
    }

    /// Uppercase name, as written into the LEVEL field of a record.
    pub fn capital(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::DPanic => "DPANIC",
            Level::Panic => "PANIC",
            Level::Fatal => "FATAL",
        }
    }

    /// Map a `tracing` level onto the facade's levels. TRACE has no
    /// counterpart and folds into DEBUG.
    pub fn from_tracing(level: &tracing::Level) -> Level {
        match *level {
            tracing::Level::TRACE | tracing::Level::DEBUG => Level::Debug,
            tracing::Level::INFO => Level::Info,
            tracing::Level::WARN => Level::Warn,
            tracing::Level::ERROR => Level::Error,
        }
    }

    fn from_u8(raw: u8) -> Level {
        Level::ALL
            .get(raw as usize)
            .copied()
            .unwrap_or(Level::Fatal)
    }
}

impl FromStr for Level {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        LEVEL_NAMES
            .iter()
            .find(|(name, _)| *name == lowered)
            .map(|(_, level)| *level)
            .ok_or_else(|| ConfigError::UnknownLevel(s.to_string()))
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Minimum severity shared between a facade, its named children and its
/// tracing layer.
#[derive(Debug, Clone)]
pub struct AtomicLevel {
    inner: Arc<AtomicU8>,
}

impl AtomicLevel {
    pub fn new(level: Level) -> Self {
        Self {
            inner: Arc::new(AtomicU8::new(level as u8)),
        }
    }

    /// Current threshold.
    pub fn level(&self) -> Level {
        Level::from_u8(self.inner.load(Ordering::Relaxed))
    }

    /// Whether a record at `level` passes the threshold.
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.level()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_names() {
        for level in Level::ALL {
            assert_eq!(Level::resolve(level.as_str()), level);
        }
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        assert_eq!(Level::resolve("WARN"), Level::Warn);
        assert_eq!(Level::resolve("DPanic"), Level::DPanic);
        assert_eq!(Level::resolve("Fatal"), Level::Fatal);
    }

    #[test]
    fn test_resolve_falls_back_to_debug() {
        assert_eq!(Level::resolve(""), Level::Debug);
        assert_eq!(Level::resolve("verbose"), Level::Debug);
        assert_eq!(Level::resolve("trace"), Level::Debug);
        assert_eq!(Level::resolve(" info"), Level::Debug);
    }

    #[test]
    fn test_strict_parse_rejects_unknown() {
        let err = "loud".parse::<Level>().unwrap_err();
        assert!(err.to_string().contains("loud"));
    }

    #[test]
    fn test_ordering() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
        assert!(Level::Error < Level::DPanic);
        assert!(Level::DPanic < Level::Panic);
        assert!(Level::Panic < Level::Fatal);
    }

    #[test]
    fn test_capital_names() {
        assert_eq!(Level::Warn.capital(), "WARN");
        assert_eq!(Level::DPanic.capital(), "DPANIC");
    }

    #[test]
    fn test_from_tracing() {
        assert_eq!(Level::from_tracing(&tracing::Level::TRACE), Level::Debug);
        assert_eq!(Level::from_tracing(&tracing::Level::INFO), Level::Info);
        assert_eq!(Level::from_tracing(&tracing::Level::ERROR), Level::Error);
    }

    #[test]
    fn test_atomic_level_threshold() {
        let threshold = AtomicLevel::new(Level::Warn);
        assert_eq!(threshold.level(), Level::Warn);
        for level in Level::ALL {
            assert_eq!(threshold.enabled(level), level >= Level::Warn);
        }
    }

    #[test]
    fn test_atomic_level_is_shared_by_clones() {
        let threshold = AtomicLevel::new(Level::Error);
        let clone = threshold.clone();
        assert_eq!(clone.level(), Level::Error);
        assert!(!clone.enabled(Level::Warn));
    }
}
