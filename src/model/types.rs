//! Core data types for the coastal hazard model
//!
//! This module defines the fundamental types used throughout the core:
//! - `Region`: A monitored coastal region with a coarse threat level
//! - `SensorReading`: The latest measurements from one sensor station
//! - `WeatherRecord`: Current weather for one region
//! - `Alert`: A hazard alert, created from seed data or user submission
//! - `ThreatLevel`, `Severity` and `AlertStatus`: Classification enums

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Coarse threat classification attached to a coastal region
///
/// Distinct from [`Severity`], which classifies individual alerts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ThreatLevel {
    Low,
    Medium,
    High,
}

impl ThreatLevel {
    /// Get all threat levels for iteration
    pub fn all() -> &'static [ThreatLevel] {
        &[ThreatLevel::Low, ThreatLevel::Medium, ThreatLevel::High]
    }
}

impl std::fmt::Display for ThreatLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThreatLevel::Low => write!(f, "low"),
            ThreatLevel::Medium => write!(f, "medium"),
            ThreatLevel::High => write!(f, "high"),
        }
    }
}

/// Alert severity classification
///
/// Variants are declared in ascending order so that the derived ordering
/// can be used for minimum-severity threshold checks
/// (`Severity::High > Severity::Medium > Severity::Low`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Low => write!(f, "LOW"),
            Severity::Medium => write!(f, "MEDIUM"),
            Severity::High => write!(f, "HIGH"),
        }
    }
}

/// Lifecycle status of an alert
///
/// Alerts are never deleted, only transitioned from Active to Resolved.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AlertStatus {
    Active,
    Resolved,
}

/// A monitored coastal region
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Region {
    /// Unique identifier (e.g., "region_001")
    pub id: String,
    /// Human-readable name
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Current coarse threat classification
    pub threat_level: ThreatLevel,
    /// Tags for the threats currently active in this region
    pub current_threats: Vec<String>,
    /// Number of people at risk if a hazard materializes
    pub population_at_risk: u64,
    /// Refreshed whenever the region is mutated
    pub last_updated: DateTime<Utc>,
}

/// The latest measurements reported by one sensor station
///
/// The tide, wave, wind and water temperature fields drift under the
/// periodic simulation pass; salinity and pH are held steady. All
/// drifting fields are clamped to the ranges in
/// [`SimulationParams`](crate::model::SimulationParams).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SensorReading {
    /// Unique station identifier (e.g., "STN_001")
    pub station_id: String,
    /// Location label, matches a region name
    pub location: String,
    /// Tide level in meters
    pub tide_level: f64,
    /// Wave height in meters
    pub wave_height: f64,
    /// Wind speed in km/h
    pub wind_speed: f64,
    /// Water temperature in degrees Celsius
    pub water_temperature: f64,
    /// Salinity in parts per thousand
    pub salinity: f64,
    pub ph_level: f64,
    /// Refreshed on every simulation pass
    pub timestamp: DateTime<Utc>,
}

/// Current weather for one region
///
/// Temperature, humidity, pressure and wind speed drift under the
/// periodic simulation pass with the same clamp discipline as sensor
/// readings. Weather records carry no timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherRecord {
    /// Region name this record belongs to
    pub region: String,
    /// Air temperature in degrees Celsius
    pub temperature: f64,
    /// Relative humidity in percent
    pub humidity: f64,
    /// Barometric pressure in millibars
    pub pressure: f64,
    /// Wind speed in km/h
    pub wind_speed: f64,
    /// Compass direction (e.g., "SW")
    pub wind_direction: String,
    /// Current conditions (e.g., "Partly Cloudy")
    pub conditions: String,
    /// 48-hour forecast text
    pub forecast_48h: String,
    /// Visibility in km
    pub visibility: f64,
}

/// A coastal hazard alert
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Alert {
    /// Unique identifier, generated from the creation time for
    /// user-created alerts (e.g., "ALERT_1756100000000")
    pub id: String,
    /// Alert type label (e.g., "Storm Surge Warning")
    pub kind: String,
    /// Region name the alert applies to
    pub region: String,
    pub severity: Severity,
    pub issued_at: DateTime<Utc>,
    /// Expected impact description
    pub expected_impact: String,
    /// Ordered list of recommended actions
    pub recommended_actions: Vec<String>,
    /// Estimated number of people affected
    pub estimated_affected: u64,
    pub status: AlertStatus,
}

impl Alert {
    /// Check whether this alert is still active
    pub fn is_active(&self) -> bool {
        self.status == AlertStatus::Active
    }
}

/// Fields submitted by the user to create a new alert
///
/// Severity is typed, so only the free-text fields require presence
/// validation. `actions_text` is split on newlines into the alert's
/// ordered action list.
#[derive(Debug, Clone, Deserialize)]
pub struct AlertDraft {
    pub kind: String,
    pub region: String,
    pub severity: Severity,
    pub expected_impact: String,
    pub actions_text: String,
}

/// Monitoring status of one threat type in the catalog
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThreatStatus {
    Active,
    Monitoring,
    Clear,
}

/// One entry in the threat-type catalog shown on the monitoring tab
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThreatType {
    pub name: String,
    pub status: ThreatStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::High > Severity::Medium);
        assert!(Severity::Medium > Severity::Low);
    }

    #[test]
    fn test_severity_serde_representation() {
        assert_eq!(serde_json::to_string(&Severity::Medium).unwrap(), "\"MEDIUM\"");
        let parsed: Severity = serde_json::from_str("\"HIGH\"").unwrap();
        assert_eq!(parsed, Severity::High);
    }

    #[test]
    fn test_threat_level_serde_representation() {
        assert_eq!(serde_json::to_string(&ThreatLevel::High).unwrap(), "\"high\"");
        let parsed: ThreatLevel = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(parsed, ThreatLevel::Medium);
    }

    #[test]
    fn test_alert_is_active() {
        let alert = Alert {
            id: "ALERT_001".to_string(),
            kind: "Storm Surge Warning".to_string(),
            region: "Mumbai Coast".to_string(),
            severity: Severity::High,
            issued_at: Utc::now(),
            expected_impact: "Coastal flooding possible".to_string(),
            recommended_actions: vec!["Evacuate vulnerable areas".to_string()],
            estimated_affected: 50_000,
            status: AlertStatus::Active,
        };
        assert!(alert.is_active());

        let resolved = Alert {
            status: AlertStatus::Resolved,
            ..alert
        };
        assert!(!resolved.is_active());
    }
}
