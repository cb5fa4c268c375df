//! # Application Settings
//!
//! Display preferences shared by the GUI and CLI. Settings live in a small
//! JSON file; a missing file means defaults, and saves are atomic so an
//! interrupted write never leaves a half-written file behind.
//!
//! ```json
//! {
//!   "dark_mode": false,
//!   "display": { "thousands_separator": ",", "decimal_separator": "." }
//! }
//! ```
//!
//! Calculator inputs are never stored here.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Directory name under the platform config dir
pub const APP_DIR_NAME: &str = "bangun";

/// Settings file name inside [`APP_DIR_NAME`]
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Number formatting preferences for result values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Grouping separator for whole-unit counts (e.g. `1,250 bricks`)
    pub thousands_separator: char,
    /// Separator between integer and fractional digits
    pub decimal_separator: char,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings {
            thousands_separator: ',',
            decimal_separator: '.',
        }
    }
}

/// Root settings document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Use the dark theme in the GUI
    pub dark_mode: bool,

    /// Number formatting
    pub display: DisplaySettings,
}

impl Settings {
    /// Reject separator combinations that would make numbers ambiguous.
    pub fn validate(&self) -> CalcResult<()> {
        let display = &self.display;
        if display.thousands_separator == display.decimal_separator {
            return Err(CalcError::invalid_input(
                "display.thousands_separator",
                display.thousands_separator.to_string(),
                "Thousands and decimal separators must differ",
            ));
        }
        if display.decimal_separator.is_ascii_digit() || display.thousands_separator.is_ascii_digit() {
            return Err(CalcError::invalid_input(
                "display",
                format!("{}{}", display.thousands_separator, display.decimal_separator),
                "Separators cannot be digits",
            ));
        }
        Ok(())
    }
}

/// Default settings path: `<config_dir>/bangun/settings.json`.
///
/// The platform config dir is resolved by the caller (the binaries use the
/// `dirs` crate) so this library stays free of platform lookups.
pub fn settings_path_in(config_dir: &Path) -> PathBuf {
    config_dir.join(APP_DIR_NAME).join(SETTINGS_FILE_NAME)
}

/// Load settings from a file.
///
/// A file that does not exist yields [`Settings::default`]. Unknown keys are
/// ignored and missing keys take their defaults.
pub fn load_settings(path: &Path) -> CalcResult<Settings> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Settings::default()),
        Err(e) => return Err(CalcError::file_error("read", path.display().to_string(), e.to_string())),
    };

    let settings: Settings = serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
        reason: format!("Invalid JSON in {}: {}", path.display(), e),
    })?;
    settings.validate()?;

    Ok(settings)
}

/// Save settings with atomic write semantics.
///
/// Writes to `<path>.tmp`, syncs, then renames over the target. Parent
/// directories are created as needed.
pub fn save_settings(settings: &Settings, path: &Path) -> CalcResult<()> {
    settings.validate()?;
    let json = serde_json::to_string_pretty(settings)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            CalcError::file_error("create directory", parent.display().to_string(), e.to_string())
        })?;
    }

    let tmp_path = path.with_extension("json.tmp");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;

    fn temp_settings_path(name: &str) -> PathBuf {
        temp_dir()
            .join(format!("bangun_test_{}_{}", name, std::process::id()))
            .join(SETTINGS_FILE_NAME)
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = temp_settings_path("missing");
        let settings = load_settings(&path).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_settings_path("roundtrip");
        let settings = Settings {
            dark_mode: true,
            display: DisplaySettings {
                thousands_separator: '.',
                decimal_separator: ',',
            },
        };

        save_settings(&settings, &path).unwrap();
        let loaded = load_settings(&path).unwrap();
        assert_eq!(loaded, settings);

        // Temp file should not exist after successful save
        assert!(!path.with_extension("json.tmp").exists());

        if let Some(dir) = path.parent() {
            let _ = fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn test_partial_document_fills_defaults() {
        let settings: Settings = serde_json::from_str(r#"{ "dark_mode": true }"#).unwrap();
        assert!(settings.dark_mode);
        assert_eq!(settings.display, DisplaySettings::default());
    }

    #[test]
    fn test_rejects_identical_separators() {
        let settings = Settings {
            dark_mode: false,
            display: DisplaySettings {
                thousands_separator: '.',
                decimal_separator: '.',
            },
        };
        assert!(settings.validate().is_err());
        assert!(save_settings(&settings, &temp_settings_path("bad")).is_err());
    }

    #[test]
    fn test_settings_path_layout() {
        let path = settings_path_in(Path::new("/home/user/.config"));
        assert_eq!(path, Path::new("/home/user/.config/bangun/settings.json"));
    }
}
