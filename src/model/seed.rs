//! Seed dataset for the hazard model
//!
//! Three regions, three sensor stations, three weather records and three
//! alerts, matching the synthetic data the dashboard ships with. Alert
//! timestamps are expressed relative to now so the "issued N minutes
//! ago" presentation stays plausible.

use chrono::{Duration, Utc};

use super::types::{
    Alert, AlertStatus, Region, SensorReading, Severity, ThreatLevel, ThreatStatus, ThreatType,
    WeatherRecord,
};

pub fn regions() -> Vec<Region> {
    let now = Utc::now();
    vec![
        Region {
            id: "region_001".to_string(),
            name: "Mumbai Coast".to_string(),
            latitude: 19.0760,
            longitude: 72.8777,
            threat_level: ThreatLevel::Medium,
            current_threats: vec!["storm_surge".to_string(), "high_tide".to_string()],
            population_at_risk: 50_000,
            last_updated: now,
        },
        Region {
            id: "region_002".to_string(),
            name: "Chennai Marina".to_string(),
            latitude: 13.0827,
            longitude: 80.2707,
            threat_level: ThreatLevel::Low,
            current_threats: vec![],
            population_at_risk: 25_000,
            last_updated: now,
        },
        Region {
            id: "region_003".to_string(),
            name: "Goa Beaches".to_string(),
            latitude: 15.2993,
            longitude: 74.1240,
            threat_level: ThreatLevel::High,
            current_threats: vec!["coastal_erosion".to_string(), "pollution".to_string()],
            population_at_risk: 75_000,
            last_updated: now,
        },
    ]
}

pub fn sensors() -> Vec<SensorReading> {
    let now = Utc::now();
    vec![
        SensorReading {
            station_id: "STN_001".to_string(),
            location: "Mumbai Coast".to_string(),
            tide_level: 2.3,
            wave_height: 1.8,
            wind_speed: 25.0,
            water_temperature: 28.5,
            salinity: 35.2,
            ph_level: 8.1,
            timestamp: now,
        },
        SensorReading {
            station_id: "STN_002".to_string(),
            location: "Chennai Marina".to_string(),
            tide_level: 1.9,
            wave_height: 1.2,
            wind_speed: 18.0,
            water_temperature: 29.1,
            salinity: 34.8,
            ph_level: 8.0,
            timestamp: now,
        },
        SensorReading {
            station_id: "STN_003".to_string(),
            location: "Goa Beaches".to_string(),
            tide_level: 2.7,
            wave_height: 2.2,
            wind_speed: 32.0,
            water_temperature: 27.8,
            salinity: 35.5,
            ph_level: 7.9,
            timestamp: now,
        },
    ]
}

pub fn weather() -> Vec<WeatherRecord> {
    vec![
        WeatherRecord {
            region: "Mumbai Coast".to_string(),
            temperature: 32.0,
            humidity: 78.0,
            pressure: 1012.0,
            wind_speed: 25.0,
            wind_direction: "SW".to_string(),
            conditions: "Partly Cloudy".to_string(),
            forecast_48h: "Thunderstorms expected".to_string(),
            visibility: 8.0,
        },
        WeatherRecord {
            region: "Chennai Marina".to_string(),
            temperature: 34.0,
            humidity: 72.0,
            pressure: 1015.0,
            wind_speed: 18.0,
            wind_direction: "SE".to_string(),
            conditions: "Clear".to_string(),
            forecast_48h: "Stable conditions".to_string(),
            visibility: 10.0,
        },
        WeatherRecord {
            region: "Goa Beaches".to_string(),
            temperature: 30.0,
            humidity: 85.0,
            pressure: 1008.0,
            wind_speed: 32.0,
            wind_direction: "W".to_string(),
            conditions: "Overcast".to_string(),
            forecast_48h: "Heavy rain expected".to_string(),
            visibility: 6.0,
        },
    ]
}

pub fn alerts() -> Vec<Alert> {
    let now = Utc::now();
    vec![
        Alert {
            id: "ALERT_001".to_string(),
            kind: "Storm Surge Warning".to_string(),
            region: "Mumbai Coast".to_string(),
            severity: Severity::High,
            issued_at: now - Duration::minutes(45),
            expected_impact: "Coastal flooding possible in low-lying areas".to_string(),
            recommended_actions: vec![
                "Evacuate vulnerable areas".to_string(),
                "Activate emergency shelters".to_string(),
            ],
            estimated_affected: 50_000,
            status: AlertStatus::Active,
        },
        Alert {
            id: "ALERT_002".to_string(),
            kind: "Coastal Erosion Alert".to_string(),
            region: "Goa Beaches".to_string(),
            severity: Severity::Medium,
            issued_at: now - Duration::minutes(75),
            expected_impact: "Beach infrastructure at risk".to_string(),
            recommended_actions: vec![
                "Monitor beach access".to_string(),
                "Deploy protective barriers".to_string(),
            ],
            estimated_affected: 15_000,
            status: AlertStatus::Active,
        },
        Alert {
            id: "ALERT_003".to_string(),
            kind: "Water Quality Alert".to_string(),
            region: "Chennai Marina".to_string(),
            severity: Severity::Low,
            issued_at: now - Duration::hours(2),
            expected_impact: "Minor water quality concerns".to_string(),
            recommended_actions: vec![
                "Continue monitoring".to_string(),
                "Inform local authorities".to_string(),
            ],
            estimated_affected: 5_000,
            status: AlertStatus::Resolved,
        },
    ]
}

pub fn threat_types() -> Vec<ThreatType> {
    vec![
        ThreatType {
            name: "Storm Surge".to_string(),
            status: ThreatStatus::Active,
        },
        ThreatType {
            name: "Coastal Erosion".to_string(),
            status: ThreatStatus::Active,
        },
        ThreatType {
            name: "Water Pollution".to_string(),
            status: ThreatStatus::Monitoring,
        },
        ThreatType {
            name: "Illegal Dumping".to_string(),
            status: ThreatStatus::Clear,
        },
        ThreatType {
            name: "Cyclonic Activity".to_string(),
            status: ThreatStatus::Monitoring,
        },
        ThreatType {
            name: "High Tide".to_string(),
            status: ThreatStatus::Active,
        },
    ]
}
