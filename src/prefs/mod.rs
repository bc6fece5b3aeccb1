//! User preferences
//!
//! A single JSON record of dashboard settings, persisted through
//! [`PreferenceStore`]. Every field carries a serde default so that a
//! stored record missing fields degrades field-by-field rather than
//! all-or-nothing.

mod store;

pub use store::{FileStore, KeyValueStore, MemoryStore, PreferenceStore, PrefsError, PREFS_KEY};

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::model::Severity;

/// Notification channel toggles
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationPrefs {
    #[serde(default = "default_enabled")]
    pub email: bool,
    #[serde(default = "default_enabled")]
    pub sms: bool,
    #[serde(default = "default_enabled")]
    pub push: bool,
}

fn default_enabled() -> bool {
    true
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            email: true,
            sms: true,
            push: true,
        }
    }
}

/// Dashboard color scheme choice
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Auto,
    Light,
    Dark,
}

/// How often the preferences record is backed up by the host
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BackupFrequency {
    Daily,
    Weekly,
    Monthly,
}

/// The singleton user settings record
///
/// Serialized with camelCase keys to stay compatible with the persisted
/// record shape:
/// `{"notifications":{"email":true,...},"minSeverity":"MEDIUM",...}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default)]
    pub notifications: NotificationPrefs,

    /// Minimum alert severity the user wants to be notified about
    #[serde(default = "default_min_severity")]
    pub min_severity: Severity,

    #[serde(default = "default_theme")]
    pub theme: Theme,

    /// Dashboard refresh interval in seconds
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval: u64,

    #[serde(default = "default_api_endpoint")]
    pub api_endpoint: String,

    #[serde(default = "default_backup_frequency")]
    pub backup_frequency: BackupFrequency,

    /// Opaque key attached to outbound requests; empty means unset
    #[serde(default)]
    pub api_key: String,
}

fn default_min_severity() -> Severity {
    Severity::Medium
}

fn default_theme() -> Theme {
    Theme::Auto
}

fn default_refresh_interval() -> u64 {
    10
}

fn default_api_endpoint() -> String {
    "https://api.coastalguard.com/v1".to_string()
}

fn default_backup_frequency() -> BackupFrequency {
    BackupFrequency::Daily
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            notifications: NotificationPrefs::default(),
            min_severity: default_min_severity(),
            theme: default_theme(),
            refresh_interval: default_refresh_interval(),
            api_endpoint: default_api_endpoint(),
            backup_frequency: default_backup_frequency(),
            api_key: String::new(),
        }
    }
}

impl Preferences {
    /// Refresh interval as a [`Duration`] for the scheduler
    pub fn refresh_duration(&self) -> Duration {
        Duration::from_secs(self.refresh_interval)
    }

    /// Whether an alert of the given severity clears the user's
    /// notification threshold
    pub fn wants_notification(&self, severity: Severity) -> bool {
        severity >= self.min_severity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_matches_documented_values() {
        let prefs = Preferences::default();
        assert!(prefs.notifications.email);
        assert!(prefs.notifications.sms);
        assert!(prefs.notifications.push);
        assert_eq!(prefs.min_severity, Severity::Medium);
        assert_eq!(prefs.theme, Theme::Auto);
        assert_eq!(prefs.refresh_interval, 10);
        assert_eq!(prefs.api_endpoint, "https://api.coastalguard.com/v1");
        assert_eq!(prefs.backup_frequency, BackupFrequency::Daily);
        assert_eq!(prefs.api_key, "");
    }

    #[test]
    fn test_serialized_record_shape() {
        let json = serde_json::to_value(Preferences::default()).unwrap();
        assert_eq!(json["minSeverity"], "MEDIUM");
        assert_eq!(json["theme"], "auto");
        assert_eq!(json["refreshInterval"], 10);
        assert_eq!(json["apiEndpoint"], "https://api.coastalguard.com/v1");
        assert_eq!(json["backupFrequency"], "daily");
        assert_eq!(json["apiKey"], "");
        assert_eq!(json["notifications"]["email"], true);
    }

    #[test]
    fn test_missing_fields_fall_back_individually() {
        // Only two fields stored; everything else takes its default
        let prefs: Preferences =
            serde_json::from_str(r#"{"theme":"dark","refreshInterval":30}"#).unwrap();
        assert_eq!(prefs.theme, Theme::Dark);
        assert_eq!(prefs.refresh_interval, 30);
        assert_eq!(prefs.min_severity, Severity::Medium);
        assert!(prefs.notifications.push);
        assert_eq!(prefs.api_endpoint, "https://api.coastalguard.com/v1");
    }

    #[test]
    fn test_refresh_duration() {
        let prefs = Preferences {
            refresh_interval: 5,
            ..Preferences::default()
        };
        assert_eq!(prefs.refresh_duration(), Duration::from_secs(5));
    }

    #[test]
    fn test_wants_notification_threshold() {
        let prefs = Preferences::default(); // minSeverity MEDIUM
        assert!(prefs.wants_notification(Severity::High));
        assert!(prefs.wants_notification(Severity::Medium));
        assert!(!prefs.wants_notification(Severity::Low));
    }
}
