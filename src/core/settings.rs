//! Reminder settings - the user-facing configuration surface
//!
//! Read-only from the engine's point of view. Loading from disk and
//! applying host key/value updates live in `plugin::config`.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::color::parse_hex_color;
use super::types::AlertCategory;

// =============================================================================
// MELEE ALERT STYLE
// =============================================================================

/// Which melee boosts have to be present to silence the reminder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeleeAlertStyle {
    /// Strength and Attack both count
    #[default]
    AttackAndStrength,
    /// Only Strength counts
    StrengthOnly,
}

impl MeleeAlertStyle {
    /// Parse the host's enum name or the display name
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "attack_and_strength" | "attack & strength" => Some(Self::AttackAndStrength),
            "str_only" | "strength_only" | "strength only" => Some(Self::StrengthOnly),
            _ => None,
        }
    }

    /// Name shown in the host's settings panel
    pub fn display_name(self) -> &'static str {
        match self {
            Self::AttackAndStrength => "Attack & Strength",
            Self::StrengthOnly => "Strength only",
        }
    }
}

impl std::fmt::Display for MeleeAlertStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

// =============================================================================
// ALERT SETTINGS
// =============================================================================

/// When to raise the reminder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertSettings {
    #[serde(default = "default_true")]
    pub enable_melee: bool,
    #[serde(default = "default_true")]
    pub enable_ranged: bool,
    #[serde(default)]
    pub enable_magic: bool,

    /// Don't alert when melee stats are boosted above this amount
    #[serde(default)]
    pub melee_boost_threshold: i32,
    /// Don't alert when Ranged is boosted above this amount
    #[serde(default)]
    pub ranged_boost_threshold: i32,
    /// Don't alert when Magic is boosted above this amount
    #[serde(default)]
    pub magic_boost_threshold: i32,

    /// Which melee skills are checked against the melee threshold
    #[serde(default)]
    pub melee_alert_style: MeleeAlertStyle,

    /// Hide the reminder after this many seconds unless raised again
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Skip evaluation when a single xp drop is larger than this (0 = never skip)
    #[serde(default = "default_experience_threshold")]
    pub experience_threshold: u32,
}

fn default_true() -> bool {
    true
}
fn default_timeout_secs() -> u64 {
    10
}
fn default_experience_threshold() -> u32 {
    500
}

impl Default for AlertSettings {
    fn default() -> Self {
        Self {
            enable_melee: true,
            enable_ranged: true,
            enable_magic: false,
            melee_boost_threshold: 0,
            ranged_boost_threshold: 0,
            magic_boost_threshold: 0,
            melee_alert_style: MeleeAlertStyle::default(),
            timeout_secs: default_timeout_secs(),
            experience_threshold: default_experience_threshold(),
        }
    }
}

impl AlertSettings {
    /// Whether alerts for a category are turned on
    pub fn is_enabled(&self, category: AlertCategory) -> bool {
        match category {
            AlertCategory::Melee => self.enable_melee,
            AlertCategory::Ranged => self.enable_ranged,
            AlertCategory::Magic => self.enable_magic,
        }
    }

    /// Boost threshold for a category
    pub fn threshold(&self, category: AlertCategory) -> i32 {
        match category {
            AlertCategory::Melee => self.melee_boost_threshold,
            AlertCategory::Ranged => self.ranged_boost_threshold,
            AlertCategory::Magic => self.magic_boost_threshold,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

// =============================================================================
// OVERLAY SETTINGS
// =============================================================================

/// Reminder panel display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlaySettings {
    #[serde(default = "default_true")]
    pub show_overlay: bool,

    /// Alternate the background between the two flash colors
    #[serde(default)]
    pub should_flash: bool,

    /// Background color "#RRGGBB" or "#RRGGBBAA"
    #[serde(default = "default_flash_color_1")]
    pub flash_color_1: String,

    /// Second flash color "#RRGGBB" or "#RRGGBBAA"
    #[serde(default = "default_flash_color_2")]
    pub flash_color_2: String,
}

fn default_flash_color_1() -> String {
    "#0080FF96".to_string()
}
fn default_flash_color_2() -> String {
    "#32323296".to_string()
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            show_overlay: true,
            should_flash: false,
            flash_color_1: default_flash_color_1(),
            flash_color_2: default_flash_color_2(),
        }
    }
}

impl OverlaySettings {
    /// First flash color as RGBA
    pub fn color_1(&self) -> [f32; 4] {
        parse_hex_color(&self.flash_color_1, 1.0)
    }

    /// Second flash color as RGBA
    pub fn color_2(&self) -> [f32; 4] {
        parse_hex_color(&self.flash_color_2, 1.0)
    }
}

// =============================================================================
// NOTIFICATION SETTINGS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationSettings {
    #[serde(default)]
    pub enabled: bool,

    /// Seconds before another notification can be sent (0 = no cooldown)
    #[serde(default = "default_notify_cooldown_secs")]
    pub cooldown_secs: u64,
}

fn default_notify_cooldown_secs() -> u64 {
    5
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            cooldown_secs: default_notify_cooldown_secs(),
        }
    }
}

impl NotificationSettings {
    pub fn cooldown(&self) -> Duration {
        Duration::from_secs(self.cooldown_secs)
    }
}

// =============================================================================
// TARGET SETTINGS
// =============================================================================

/// Which targets and areas the reminder applies to
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TargetSettings {
    /// Only alert when the target matches `whitelist`
    #[serde(default)]
    pub use_whitelist: bool,
    /// Comma-separated NPC name patterns (supports wildcards)
    #[serde(default)]
    pub whitelist: String,

    /// Never alert when the target matches `blacklist`
    #[serde(default)]
    pub use_blacklist: bool,
    /// Comma-separated NPC name patterns (supports wildcards)
    #[serde(default)]
    pub blacklist: String,

    /// Alert while not interacting with anything
    #[serde(default)]
    pub alert_when_not_interacting: bool,

    /// Only alert inside instanced areas
    #[serde(default)]
    pub only_in_instances: bool,
}

// =============================================================================
// REMINDER SETTINGS
// =============================================================================

/// Complete reminder configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReminderSettings {
    #[serde(default)]
    pub alerts: AlertSettings,
    #[serde(default)]
    pub overlay: OverlaySettings,
    #[serde(default)]
    pub notifications: NotificationSettings,
    #[serde(default)]
    pub targets: TargetSettings,
}
