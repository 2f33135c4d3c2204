//! Logging infrastructure for the squall library.
//!
//! A simple stderr-based logger with three verbosity levels, configured
//! from CLI flags or the `SQUALL_LOG_MODE` environment variable.

use std::env;
use std::fmt;

/// Logging level, ordered from least to most verbose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Suppress all non-essential output.
    Quiet,
    /// Errors and warnings.
    Normal,
    /// Errors, warnings, info, and debug messages.
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl LogLevel {
    /// Parses a log level from a string (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not one of `quiet`, `normal`,
    /// `verbose`.
    ///
    /// # Examples
    ///
    /// ```
    /// use squall::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("loud").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }
}

/// A stderr logger honoring a [`LogLevel`].
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a logger with the given level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the configured level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Logs an error message (suppressed only at Quiet).
    pub fn error(&self, message: &str) {
        if self.level >= LogLevel::Normal {
            eprintln!("ERROR: {message}");
        }
    }

    /// Logs a warning message (suppressed only at Quiet).
    pub fn warn(&self, message: &str) {
        if self.level >= LogLevel::Normal {
            eprintln!("WARN: {message}");
        }
    }

    /// Logs an informational message (Verbose only).
    pub fn info(&self, message: &str) {
        if self.level >= LogLevel::Verbose {
            eprintln!("INFO: {message}");
        }
    }

    /// Logs a debug message (Verbose only).
    pub fn debug(&self, message: &str) {
        if self.level >= LogLevel::Verbose {
            eprintln!("DEBUG: {message}");
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

/// Initializes a logger from CLI flags and the environment.
///
/// CLI flags win over `SQUALL_LOG_MODE`; `verbose` wins over `quiet`
/// when both are set; the default is Normal.
///
/// # Examples
///
/// ```
/// use squall::{init_logger, LogLevel};
///
/// let logger = init_logger(true, false);
/// assert_eq!(logger.level(), LogLevel::Verbose);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    if verbose {
        return Logger::new(LogLevel::Verbose);
    }
    if quiet {
        return Logger::new(LogLevel::Quiet);
    }

    if let Ok(value) = env::var("SQUALL_LOG_MODE") {
        if let Ok(level) = LogLevel::parse(&value) {
            return Logger::new(level);
        }
    }

    Logger::new(LogLevel::Normal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Quiet < LogLevel::Normal);
        assert!(LogLevel::Normal < LogLevel::Verbose);
    }

    #[test]
    fn test_level_display() {
        assert_eq!(format!("{}", LogLevel::Quiet), "quiet");
        assert_eq!(format!("{}", LogLevel::Verbose), "verbose");
    }

    #[test]
    fn test_level_parse() {
        assert_eq!(LogLevel::parse("quiet").unwrap(), LogLevel::Quiet);
        assert_eq!(LogLevel::parse("Normal").unwrap(), LogLevel::Normal);
        assert!(LogLevel::parse("").is_err());
        assert!(LogLevel::parse("debug").is_err());
    }

    #[test]
    fn test_logger_default_level() {
        assert_eq!(Logger::default().level(), LogLevel::Normal);
    }

    #[test]
    fn test_init_logger_verbose_flag() {
        assert_eq!(init_logger(true, false).level(), LogLevel::Verbose);
    }

    #[test]
    fn test_init_logger_quiet_flag() {
        assert_eq!(init_logger(false, true).level(), LogLevel::Quiet);
    }

    #[test]
    fn test_init_logger_verbose_wins_over_quiet() {
        assert_eq!(init_logger(true, true).level(), LogLevel::Verbose);
    }
}
