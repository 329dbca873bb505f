//! Log severity levels.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Severity of a log message.
///
/// Levels are ordered from least to most severe, so a threshold check is a
/// plain comparison: `level >= Level::Warn`. The set is closed; the backend
/// owns the active threshold, `Level` itself carries no state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Highly detailed information for developers.
    Trace,
    /// Detailed information for developers.
    Debug,
    /// Information on the processing status of the application.
    Info,
    /// A potentially harmful event has occurred.
    Warn,
    /// An unexpected error has occurred.
    Error,
}

impl Level {
    /// All levels in ascending order of severity.
    pub const ALL: [Level; 5] = [
        Level::Trace,
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
    ];

    /// Returns the level name in uppercase.
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a level name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown log level '{0}'")]
pub struct ParseLevelError(String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Level::Trace),
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(Level::Trace < Level::Debug);
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
    }

    #[test]
    fn test_all_is_ascending() {
        for pair in Level::ALL.windows(2) {
            assert!(pair[0] < pair[1], "{} should sort below {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_display_matches_as_str() {
        for level in Level::ALL {
            assert_eq!(format!("{}", level), level.as_str());
        }
    }

    #[test]
    fn test_parse_accepts_any_case() {
        assert_eq!("trace".parse::<Level>().unwrap(), Level::Trace);
        assert_eq!("DEBUG".parse::<Level>().unwrap(), Level::Debug);
        assert_eq!("Info".parse::<Level>().unwrap(), Level::Info);
        assert_eq!("wArN".parse::<Level>().unwrap(), Level::Warn);
        assert_eq!("error".parse::<Level>().unwrap(), Level::Error);
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        let err = "verbose".parse::<Level>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown log level 'verbose'");
        assert!("".parse::<Level>().is_err());
    }

    #[test]
    fn test_parse_round_trips_display() {
        for level in Level::ALL {
            assert_eq!(level.as_str().parse::<Level>().unwrap(), level);
        }
    }
}
