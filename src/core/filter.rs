//! Target filter - allow-list and deny-list evaluation
//!
//! Both lists are comma-separated wildcard patterns. They are rebuilt from
//! the settings whenever the configuration changes.

use super::settings::TargetSettings;
use super::wildcard::WildcardPattern;

/// Split a comma-separated pattern list, dropping empty entries
pub fn split_list(list: &str) -> Vec<WildcardPattern> {
    list.split(',').filter_map(WildcardPattern::new).collect()
}

/// Compiled allow-list and deny-list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TargetFilter {
    whitelist: Vec<WildcardPattern>,
    blacklist: Vec<WildcardPattern>,
}

impl TargetFilter {
    /// Build the filter lists from settings
    pub fn from_settings(targets: &TargetSettings) -> Self {
        Self {
            whitelist: split_list(&targets.whitelist),
            blacklist: split_list(&targets.blacklist),
        }
    }

    pub fn whitelist(&self) -> &[WildcardPattern] {
        &self.whitelist
    }

    pub fn blacklist(&self) -> &[WildcardPattern] {
        &self.blacklist
    }

    /// Whether the current target allows an alert
    ///
    /// With no target the answer is `alert_when_not_interacting`. A named
    /// target must match the allow-list (when enabled) and must not match
    /// the deny-list (when enabled).
    pub fn allows(&self, targets: &TargetSettings, target: Option<&str>) -> bool {
        let Some(name) = target else {
            return targets.alert_when_not_interacting;
        };

        let blacklisted =
            targets.use_blacklist && self.blacklist.iter().any(|pattern| pattern.matches(name));
        let whitelisted =
            !targets.use_whitelist || self.whitelist.iter().any(|pattern| pattern.matches(name));

        whitelisted && !blacklisted
    }
}
