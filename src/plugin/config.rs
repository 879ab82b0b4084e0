// Configuration module for the unpotted reminder

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::core::color::{parse_hex_color, to_hex_color};
use crate::core::settings::{MeleeAlertStyle, ReminderSettings};

// =============================================================================
// CONFIGURATION STRUCTURES
// =============================================================================

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LoggingSettings {
    /// Write logs to stdout
    #[serde(default)]
    pub console: bool,
    /// Log file path (relative to the config directory or absolute). Empty = no file logging.
    #[serde(default)]
    pub log_file: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingSettings,
    #[serde(flatten)]
    pub reminder: ReminderSettings,
}

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug)]
pub enum ConfigError {
    ReadError(std::io::Error),
    ParseError(toml::de::Error),
    UnknownKey(String),
    InvalidValue { key: String, value: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ReadError(e) => write!(f, "Failed to read config file: {}", e),
            ConfigError::ParseError(e) => write!(f, "Failed to parse config file: {}", e),
            ConfigError::UnknownKey(key) => write!(f, "Unknown config key: {}", key),
            ConfigError::InvalidValue { key, value } => {
                write!(f, "Invalid value for {}: {:?}", key, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::ReadError(e) => Some(e),
            ConfigError::ParseError(e) => Some(e),
            _ => None,
        }
    }
}

// =============================================================================
// CONFIG LOADING
// =============================================================================

impl Config {
    pub const CONFIG_FILENAME: &'static str = "unpotted_reminder.toml";

    /// Config group the host uses for this plugin's keys
    pub const CONFIG_GROUP: &'static str = "unpottedreminder";

    /// Load configuration from a file, falling back to defaults if it does not exist
    pub fn load(config_path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %config_path.display(), "[CONFIG] Looking for config");

        if !config_path.exists() {
            debug!("[CONFIG] No config found, using defaults");
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(config_path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&contents).map_err(ConfigError::ParseError)?;

        info!(path = %config_path.display(), "[CONFIG] Loaded config");
        Ok(config)
    }

    /// Load `unpotted_reminder.toml` from a directory
    pub fn load_from_dir(dir: &Path) -> Result<Self, ConfigError> {
        Self::load(&dir.join(Self::CONFIG_FILENAME))
    }

    /// Resolve the log file path against the config directory
    pub fn log_file_path(&self, base_dir: &Path) -> Option<PathBuf> {
        let log_file = self.logging.log_file.trim();
        if log_file.is_empty() {
            return None;
        }
        let path = PathBuf::from(log_file);
        Some(if path.is_absolute() {
            path
        } else {
            base_dir.join(path)
        })
    }

    /// Apply a key/value update pushed by the host
    ///
    /// Returns `Ok(false)` when the update belongs to another plugin's
    /// group and `Ok(true)` once the value has been stored.
    pub fn apply_change(&mut self, group: &str, key: &str, value: &str) -> Result<bool, ConfigError> {
        if group != Self::CONFIG_GROUP {
            return Ok(false);
        }

        let settings = &mut self.reminder;
        match key {
            "enableMelee" => settings.alerts.enable_melee = parse_bool(key, value)?,
            "enableRanged" => settings.alerts.enable_ranged = parse_bool(key, value)?,
            "enableMagic" => settings.alerts.enable_magic = parse_bool(key, value)?,
            "meleeBoostThreshold" => settings.alerts.melee_boost_threshold = parse_number(key, value)?,
            "rangedBoostThreshold" => settings.alerts.ranged_boost_threshold = parse_number(key, value)?,
            "magicBoostThreshold" => settings.alerts.magic_boost_threshold = parse_number(key, value)?,
            "meleeAlertStyle" => {
                settings.alerts.melee_alert_style =
                    MeleeAlertStyle::from_name(value).ok_or_else(|| invalid(key, value))?
            }
            "timeout" => settings.alerts.timeout_secs = parse_number(key, value)?,
            "experienceThreshold" => settings.alerts.experience_threshold = parse_number(key, value)?,
            "showOverlay" => settings.overlay.show_overlay = parse_bool(key, value)?,
            "shouldFlash" => settings.overlay.should_flash = parse_bool(key, value)?,
            "flashColor1" => settings.overlay.flash_color_1 = parse_color(key, value)?,
            "flashColor2" => settings.overlay.flash_color_2 = parse_color(key, value)?,
            "shouldNotify" => settings.notifications.enabled = parse_bool(key, value)?,
            "notifyCooldown" => settings.notifications.cooldown_secs = parse_number(key, value)?,
            "useWhitelist" => settings.targets.use_whitelist = parse_bool(key, value)?,
            "whitelist" => settings.targets.whitelist = value.to_string(),
            "useBlacklist" => settings.targets.use_blacklist = parse_bool(key, value)?,
            "blacklist" => settings.targets.blacklist = value.to_string(),
            "alertWhenNotInteracting" => {
                settings.targets.alert_when_not_interacting = parse_bool(key, value)?
            }
            "onlyInInstances" => settings.targets.only_in_instances = parse_bool(key, value)?,
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }

        debug!(key, value, "[CONFIG] Applied change");
        Ok(true)
    }
}

// =============================================================================
// VALUE PARSING
// =============================================================================

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(invalid(key, value)),
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| invalid(key, value))
}

/// Accept "#RRGGBB" / "#RRGGBBAA" or the host's signed ARGB integer
fn parse_color(key: &str, value: &str) -> Result<String, ConfigError> {
    let value = value.trim();

    if let Some(hex) = value.strip_prefix('#') {
        let valid = matches!(hex.len(), 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit());
        if !valid {
            return Err(invalid(key, value));
        }
        return Ok(to_hex_color(parse_hex_color(value, 1.0)));
    }

    let argb = value
        .parse::<i32>()
        .map(|v| v as u32)
        .map_err(|_| invalid(key, value))?;
    let channel = |shift: u32| ((argb >> shift) & 0xFF) as f32 / 255.0;
    Ok(to_hex_color([channel(16), channel(8), channel(0), channel(24)]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::time::Duration;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join(Config::CONFIG_FILENAME);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    fn change(config: &mut Config, key: &str, value: &str) -> Result<bool, ConfigError> {
        config.apply_change(Config::CONFIG_GROUP, key, value)
    }

    // -------------------------------------------------------------------------
    // Loading
    // -------------------------------------------------------------------------

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from_dir(dir.path()).unwrap();

        assert!(!config.logging.console);
        assert!(config.reminder.alerts.enable_melee);
        assert_eq!(config.reminder.alerts.experience_threshold, 500);
        assert_eq!(config.reminder.overlay.flash_color_1, "#0080FF96");
    }

    #[test]
    fn test_load_full_file() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r##"
[logging]
console = true
log_file = "reminder.log"

[alerts]
enable_magic = true
magic_boost_threshold = 3
melee_alert_style = "strength_only"
timeout_secs = 20
experience_threshold = 0

[overlay]
should_flash = true
flash_color_1 = "#FF0000"

[notifications]
enabled = true
cooldown_secs = 30

[targets]
use_blacklist = true
blacklist = "Goblin, Cow*"
alert_when_not_interacting = true
"##,
        );

        let config = Config::load(&path).unwrap();
        let reminder = &config.reminder;

        assert!(config.logging.console);
        assert!(reminder.alerts.enable_magic);
        assert!(reminder.alerts.enable_ranged);
        assert_eq!(reminder.alerts.magic_boost_threshold, 3);
        assert_eq!(reminder.alerts.melee_alert_style, MeleeAlertStyle::StrengthOnly);
        assert_eq!(reminder.alerts.timeout(), Duration::from_secs(20));
        assert_eq!(reminder.alerts.experience_threshold, 0);
        assert!(reminder.overlay.should_flash);
        assert!(reminder.overlay.show_overlay);
        assert_eq!(reminder.overlay.flash_color_1, "#FF0000");
        assert_eq!(reminder.overlay.flash_color_2, "#32323296");
        assert!(reminder.notifications.enabled);
        assert_eq!(reminder.notifications.cooldown(), Duration::from_secs(30));
        assert!(reminder.targets.use_blacklist);
        assert_eq!(reminder.targets.blacklist, "Goblin, Cow*");
        assert!(reminder.targets.alert_when_not_interacting);
    }

    #[test]
    fn test_load_partial_section() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[alerts]\nenable_melee = false\n");

        let config = Config::load(&path).unwrap();
        assert!(!config.reminder.alerts.enable_melee);
        assert_eq!(config.reminder.alerts.timeout_secs, 10);
        assert!(config.reminder.overlay.show_overlay);
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[alerts\nenable_melee = ");

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
        assert!(err.to_string().starts_with("Failed to parse config file"));
    }

    #[test]
    fn test_load_wrong_type() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[alerts]\ntimeout_secs = \"soon\"\n");

        assert!(matches!(Config::load(&path), Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_shipped_config_parses() {
        let contents = include_str!("../../unpotted_reminder.toml");
        let config: Config = toml::from_str(contents).unwrap();
        assert_eq!(config.reminder, ReminderSettings::default());
    }

    #[test]
    fn test_log_file_path() {
        let base = Path::new("/plugins");
        let mut config = Config::default();
        assert_eq!(config.log_file_path(base), None);

        config.logging.log_file = "reminder.log".to_string();
        assert_eq!(
            config.log_file_path(base),
            Some(PathBuf::from("/plugins/reminder.log"))
        );

        config.logging.log_file = "/var/log/reminder.log".to_string();
        assert_eq!(
            config.log_file_path(base),
            Some(PathBuf::from("/var/log/reminder.log"))
        );
    }

    // -------------------------------------------------------------------------
    // Host changes
    // -------------------------------------------------------------------------

    #[test]
    fn test_apply_bool_and_number_keys() {
        let mut config = Config::default();

        assert!(change(&mut config, "enableMagic", "true").unwrap());
        assert!(change(&mut config, "enableMelee", "FALSE").unwrap());
        assert!(change(&mut config, "rangedBoostThreshold", "4").unwrap());
        assert!(change(&mut config, "meleeBoostThreshold", "-2").unwrap());
        assert!(change(&mut config, "timeout", "15").unwrap());
        assert!(change(&mut config, "experienceThreshold", "0").unwrap());
        assert!(change(&mut config, "shouldNotify", "true").unwrap());
        assert!(change(&mut config, "notifyCooldown", "0").unwrap());
        assert!(change(&mut config, "onlyInInstances", "true").unwrap());
        assert!(change(&mut config, "alertWhenNotInteracting", "true").unwrap());

        let alerts = &config.reminder.alerts;
        assert!(alerts.enable_magic);
        assert!(!alerts.enable_melee);
        assert_eq!(alerts.ranged_boost_threshold, 4);
        assert_eq!(alerts.melee_boost_threshold, -2);
        assert_eq!(alerts.timeout_secs, 15);
        assert_eq!(alerts.experience_threshold, 0);
        assert!(config.reminder.notifications.enabled);
        assert_eq!(config.reminder.notifications.cooldown_secs, 0);
        assert!(config.reminder.targets.only_in_instances);
        assert!(config.reminder.targets.alert_when_not_interacting);
    }

    #[test]
    fn test_apply_lists_and_style() {
        let mut config = Config::default();

        change(&mut config, "useWhitelist", "true").unwrap();
        change(&mut config, "whitelist", "Vorkath, Zul*").unwrap();
        change(&mut config, "meleeAlertStyle", "STR_ONLY").unwrap();

        assert!(config.reminder.targets.use_whitelist);
        assert_eq!(config.reminder.targets.whitelist, "Vorkath, Zul*");
        assert_eq!(
            config.reminder.alerts.melee_alert_style,
            MeleeAlertStyle::StrengthOnly
        );
    }

    #[test]
    fn test_apply_colors() {
        let mut config = Config::default();

        change(&mut config, "flashColor1", "#ff0000").unwrap();
        assert_eq!(config.reminder.overlay.flash_color_1, "#FF0000FF");

        change(&mut config, "flashColor1", "-1778351873").unwrap();
        assert_eq!(config.reminder.overlay.flash_color_1, "#0080FF96");

        change(&mut config, "flashColor2", "-13487566").unwrap();
        assert_eq!(config.reminder.overlay.flash_color_2, "#323232FF");
    }

    #[test]
    fn test_other_group_is_ignored() {
        let mut config = Config::default();
        assert!(!config.apply_change("xptracker", "enableMagic", "true").unwrap());
        assert!(!config.apply_change("xptracker", "whatever", "1").unwrap());
        assert!(!config.reminder.alerts.enable_magic);
    }

    #[test]
    fn test_unknown_key() {
        let mut config = Config::default();
        let err = change(&mut config, "enableSlayer", "true").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownKey(ref key) if key == "enableSlayer"));
    }

    #[test]
    fn test_invalid_values_leave_config_untouched() {
        let mut config = Config::default();

        for (key, value) in [
            ("enableMelee", "yes"),
            ("timeout", "-1"),
            ("meleeBoostThreshold", "five"),
            ("flashColor1", "#12345"),
            ("flashColor1", "red"),
            ("meleeAlertStyle", "MAGIC_ONLY"),
        ] {
            let err = change(&mut config, key, value).unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidValue { .. }),
                "{key}={value} should be invalid"
            );
        }

        assert!(config.reminder.alerts.enable_melee);
        assert_eq!(config.reminder.alerts.timeout_secs, 10);
        assert_eq!(config.reminder.overlay.flash_color_1, "#0080FF96");
    }
}
