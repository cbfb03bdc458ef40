//!
//! A module that contains the severity levels and their display tables
//!

use std::fmt::{Display, Formatter};
use std::str::FromStr;
use crate::error::UnknownLevel;

/// Level display names, index-aligned with [Level].
pub(crate) static LEVEL_NAMES: [&str; 6] = [
    "TRACE", "DEBUG", "INFO", "WARN", "ERROR", "FATAL"
];

/// Built-in level colors, index-aligned with [Level].
pub(crate) static LEVEL_COLORS: [&str; 6] = [
    "\x1b[0;37m", // dim white
    "\x1b[0;33m", // dim yellow
    "\x1b[0;92m", // bright green
    "\x1b[0;31m", // red
    "\x1b[0;91m", // bright red
    "\x1b[1;91m", // bold bright red
];

pub(crate) static RESET_COLOR: &str = "\x1b[0m";

///
/// Severity of a log message, ordered by increasing urgency
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Level {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Fatal = 5
}

impl Level {
    /// All levels, in urgency order.
    pub const ALL: [Level; 6] = [
        Level::Trace,
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Fatal
    ];

    ///
    /// Get the display name of this level
    ///
    pub fn name(self) -> &'static str {
        LEVEL_NAMES[self as usize]
    }

    ///
    /// Get the built-in color of this level
    ///
    pub fn default_color(self) -> &'static str {
        LEVEL_COLORS[self as usize]
    }

    ///
    /// Get the level for a numeric severity value, or [None] when
    /// the value is outside the six known levels
    ///
    pub fn from_index(index: usize) -> Option<Level> {
        Level::ALL.get(index).copied()
    }
}

impl TryFrom<u8> for Level {
    type Error = UnknownLevel;

    fn try_from(value: u8) -> Result<Self, UnknownLevel> {
        Level::from_index(value as usize)
            .ok_or_else(|| UnknownLevel::new(&format!("unknown severity value: {}", value)))
    }
}

impl FromStr for Level {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, UnknownLevel> {
        Level::ALL
            .into_iter()
            .find(|level| s.eq_ignore_ascii_case(level.name()))
            .ok_or_else(|| UnknownLevel::new(&format!("unknown severity name: {:?}", s)))
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_stay_index_aligned_with_levels() {
        assert_eq!(LEVEL_NAMES.len(), Level::ALL.len());
        assert_eq!(LEVEL_COLORS.len(), Level::ALL.len());

        for (index, level) in Level::ALL.into_iter().enumerate() {
            assert_eq!(level as usize, index);
            assert_eq!(level.name(), LEVEL_NAMES[index]);
            assert_eq!(level.default_color(), LEVEL_COLORS[index]);
        }
    }

    #[test]
    fn levels_are_ordered_by_urgency() {
        assert!(Level::Trace < Level::Debug);
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
        assert!(Level::Error < Level::Fatal);
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        assert_eq!(Level::from_index(2), Some(Level::Info));
        assert_eq!(Level::from_index(5), Some(Level::Fatal));
        assert_eq!(Level::from_index(6), None);
        assert_eq!(Level::from_index(usize::MAX), None);

        assert!(Level::try_from(3u8).is_ok());
        assert!(Level::try_from(6u8).is_err());
        assert!(Level::try_from(u8::MAX).is_err());
    }

    #[test]
    fn names_parse_case_insensitively() {
        assert_eq!("trace".parse::<Level>().unwrap(), Level::Trace);
        assert_eq!("WARN".parse::<Level>().unwrap(), Level::Warn);
        assert_eq!("Fatal".parse::<Level>().unwrap(), Level::Fatal);
        assert!("notice".parse::<Level>().is_err());
        assert!("".parse::<Level>().is_err());
    }

    #[test]
    fn display_prints_the_table_name() {
        assert_eq!(Level::Error.to_string(), "ERROR");
        assert_eq!(format!("{}", Level::Info), "INFO");
    }
}
