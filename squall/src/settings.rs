//! Tool settings: connection defaults and command aliases.
//!
//! Settings live in `~/.squall/config.json` and are entirely optional.
//! A missing or unparseable file silently yields the built-in defaults;
//! the tool must keep working on a machine that has never seen it.

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Fallback port used when neither the settings file nor the caller
/// specifies one.
pub const DEFAULT_PORT: u16 = 22;

/// Settings loaded from the tool's JSON config file.
///
/// # Examples
///
/// ```
/// use squall::Settings;
///
/// let settings: Settings =
///     serde_json::from_str(r#"{"defaults": {"user": "ops"}}"#).unwrap();
/// assert_eq!(settings.defaults.user(), "ops");
/// assert_eq!(settings.defaults.port(), 22);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Connection defaults applied when the command line omits them.
    pub defaults: Defaults,
    /// Alias names mapped to the subcommand words they expand to.
    pub aliases: BTreeMap<String, String>,
}

/// Default user and port for new entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Default login user; falls back to the current user.
    pub user: Option<String>,
    /// Default port; falls back to [`DEFAULT_PORT`].
    pub port: Option<u16>,
}

impl Settings {
    /// Returns the settings file path, `~/.squall/config.json`.
    #[must_use]
    pub fn path() -> Option<PathBuf> {
        home::home_dir().map(|h| h.join(".squall").join("config.json"))
    }

    /// Loads settings from the default location.
    ///
    /// Never fails: any problem reading or parsing the file yields the
    /// built-in defaults.
    #[must_use]
    pub fn load() -> Self {
        Self::path().map_or_else(Self::default, |p| Self::load_from(&p))
    }

    /// Loads settings from an explicit path, with the same permissive
    /// behavior as [`Settings::load`].
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(text) => serde_json::from_str(&text).unwrap_or_else(|e| {
                log::debug!("ignoring unparseable settings file {}: {e}", path.display());
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }
}

impl Defaults {
    /// Returns the default user, falling back to the current user name.
    #[must_use]
    pub fn user(&self) -> String {
        self.user.clone().unwrap_or_else(current_user)
    }

    /// Returns the default port, falling back to [`DEFAULT_PORT`].
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }
}

fn current_user() -> String {
    env::var("USER")
        .or_else(|_| env::var("LOGNAME"))
        .or_else(|_| env::var("USERNAME"))
        .unwrap_or_else(|_| "user".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("config.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_corrupt_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{not json").unwrap();
        assert_eq!(Settings::load_from(&path), Settings::default());
    }

    #[test]
    fn test_full_settings_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{
                "defaults": {"user": "ops", "port": 2222},
                "aliases": {"ls": "list", "rm": "delete"}
            }"#,
        )
        .unwrap();

        let settings = Settings::load_from(&path);
        assert_eq!(settings.defaults.user(), "ops");
        assert_eq!(settings.defaults.port(), 2222);
        assert_eq!(settings.aliases.get("ls").unwrap(), "list");
        assert_eq!(settings.aliases.len(), 2);
    }

    #[test]
    fn test_partial_settings_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"defaults": {"port": 23}}"#).unwrap();

        let settings = Settings::load_from(&path);
        assert_eq!(settings.defaults.port(), 23);
        assert!(settings.aliases.is_empty());
    }

    #[test]
    fn test_default_port_fallback() {
        assert_eq!(Defaults::default().port(), DEFAULT_PORT);
    }

    #[test]
    fn test_user_falls_back_to_environment() {
        let defaults = Defaults::default();
        // Whatever the environment provides, the fallback is non-empty.
        assert!(!defaults.user().is_empty());
    }
}
