//! Coastal hazard data model
//!
//! This module provides [`HazardModel`], the single owned source of truth
//! for regions, sensor readings, weather records and alerts. The model is
//! constructed explicitly (empty or from the seed dataset) and passed by
//! reference to whichever component needs it; there is no hidden
//! singleton.
//!
//! All randomness flows through a caller-supplied [`rand::Rng`], so the
//! bounded random walk is reproducible under a seeded source.

mod drift;
mod error;
pub mod seed;
mod types;

pub use drift::{FieldDrift, SimulationParams};
pub use error::{ModelError, ModelResult};
pub use types::{
    Alert, AlertDraft, AlertStatus, Region, SensorReading, Severity, ThreatLevel, ThreatStatus,
    ThreatType, WeatherRecord,
};

use chrono::Utc;
use rand::Rng;

/// In-memory collections of coastal hazard data
///
/// Mutation happens only through the periodic simulation pass
/// ([`mutate_environment`](Self::mutate_environment)) and the alert
/// entry points; readers get shared slices.
#[derive(Debug, Clone)]
pub struct HazardModel {
    regions: Vec<Region>,
    sensors: Vec<SensorReading>,
    weather: Vec<WeatherRecord>,
    alerts: Vec<Alert>,
    threat_types: Vec<ThreatType>,
    params: SimulationParams,
}

impl HazardModel {
    /// Create an empty model with default simulation parameters
    pub fn new() -> Self {
        Self::with_params(SimulationParams::default())
    }

    /// Create an empty model with custom simulation parameters
    pub fn with_params(params: SimulationParams) -> Self {
        Self {
            regions: Vec::new(),
            sensors: Vec::new(),
            weather: Vec::new(),
            alerts: Vec::new(),
            threat_types: Vec::new(),
            params,
        }
    }

    /// Create a model populated with the seed dataset
    pub fn seeded() -> Self {
        Self {
            regions: seed::regions(),
            sensors: seed::sensors(),
            weather: seed::weather(),
            alerts: seed::alerts(),
            threat_types: seed::threat_types(),
            params: SimulationParams::default(),
        }
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn sensors(&self) -> &[SensorReading] {
        &self.sensors
    }

    pub fn weather(&self) -> &[WeatherRecord] {
        &self.weather
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn threat_types(&self) -> &[ThreatType] {
        &self.threat_types
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    /// Add a region to the model (seeding / external update path)
    pub fn insert_region(&mut self, region: Region) {
        self.regions.push(region);
    }

    /// Add a sensor reading to the model
    pub fn insert_sensor(&mut self, sensor: SensorReading) {
        self.sensors.push(sensor);
    }

    /// Add a weather record to the model
    pub fn insert_weather(&mut self, record: WeatherRecord) {
        self.weather.push(record);
    }

    /// Run one simulation pass over the whole model
    ///
    /// Perturbs each sensor's four drifting fields by a uniform delta
    /// scaled to the field's magnitude and clamps to the declared range,
    /// refreshing the sensor timestamp. Applies the same step to every
    /// weather record. With `threat_reshuffle_chance` probability, one
    /// region chosen uniformly at random has its threat level reassigned
    /// uniformly among low/medium/high and its `last_updated` refreshed.
    pub fn mutate_environment(&mut self, rng: &mut impl Rng) {
        let now = Utc::now();

        for sensor in &mut self.sensors {
            sensor.tide_level = self.params.tide_level.step(sensor.tide_level, rng);
            sensor.wave_height = self.params.wave_height.step(sensor.wave_height, rng);
            sensor.wind_speed = self.params.wind_speed.step(sensor.wind_speed, rng);
            sensor.water_temperature = self
                .params
                .water_temperature
                .step(sensor.water_temperature, rng);
            sensor.timestamp = now;
        }

        for weather in &mut self.weather {
            weather.temperature = self.params.temperature.step(weather.temperature, rng);
            weather.humidity = self.params.humidity.step(weather.humidity, rng);
            weather.pressure = self.params.pressure.step(weather.pressure, rng);
            weather.wind_speed = self.params.weather_wind_speed.step(weather.wind_speed, rng);
        }

        if !self.regions.is_empty() && rng.gen::<f64>() < self.params.threat_reshuffle_chance {
            let index = rng.gen_range(0..self.regions.len());
            let levels = ThreatLevel::all();
            let level = levels[rng.gen_range(0..levels.len())];

            let region = &mut self.regions[index];
            tracing::debug!(
                region = %region.id,
                old_level = %region.threat_level,
                new_level = %level,
                "Threat level reassigned"
            );
            region.threat_level = level;
            region.last_updated = now;
        }
    }

    /// Create a new alert from user-submitted fields
    ///
    /// Validates that the free-text fields are non-empty, generates a
    /// time-derived unique identifier, splits the actions text on
    /// newlines (dropping blank lines) and inserts the alert at the
    /// front of the collection. On validation failure the collection is
    /// left untouched.
    pub fn create_alert(&mut self, draft: AlertDraft, rng: &mut impl Rng) -> ModelResult<&Alert> {
        if draft.kind.trim().is_empty() {
            return Err(ModelError::Validation("type"));
        }
        if draft.region.trim().is_empty() {
            return Err(ModelError::Validation("region"));
        }
        if draft.expected_impact.trim().is_empty() {
            return Err(ModelError::Validation("expected impact"));
        }
        let actions: Vec<String> = draft
            .actions_text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        if actions.is_empty() {
            return Err(ModelError::Validation("recommended actions"));
        }

        let now = Utc::now();
        let alert = Alert {
            id: self.next_alert_id(now.timestamp_millis()),
            kind: draft.kind,
            region: draft.region,
            severity: draft.severity,
            issued_at: now,
            expected_impact: draft.expected_impact,
            recommended_actions: actions,
            estimated_affected: rng.gen_range(1_000..51_000),
            status: AlertStatus::Active,
        };

        tracing::info!(
            alert_id = %alert.id,
            severity = %alert.severity,
            region = %alert.region,
            "Alert created"
        );
        self.alerts.insert(0, alert);
        Ok(&self.alerts[0])
    }

    /// Generate an alert identifier from a millisecond timestamp,
    /// disambiguating with a numeric suffix when two alerts land on the
    /// same millisecond
    fn next_alert_id(&self, millis: i64) -> String {
        let base = format!("ALERT_{millis}");
        if self.find_alert(&base).is_none() {
            return base;
        }
        let mut n = 1;
        loop {
            let candidate = format!("{base}_{n}");
            if self.find_alert(&candidate).is_none() {
                return candidate;
            }
            n += 1;
        }
    }

    /// Return alerts matching the given severity, or all alerts when no
    /// severity is given, preserving original order
    pub fn filter_alerts(&self, severity: Option<Severity>) -> Vec<&Alert> {
        match severity {
            None => self.alerts.iter().collect(),
            Some(s) => self.alerts.iter().filter(|a| a.severity == s).collect(),
        }
    }

    /// Look up a region by identifier; absence is a normal outcome
    pub fn find_region(&self, id: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.id == id)
    }

    /// Look up an alert by identifier; absence is a normal outcome
    pub fn find_alert(&self, id: &str) -> Option<&Alert> {
        self.alerts.iter().find(|a| a.id == id)
    }

    /// Transition an alert to Resolved, returning it if found
    ///
    /// Alerts are never deleted from the collection.
    pub fn resolve_alert(&mut self, id: &str) -> Option<&Alert> {
        let alert = self.alerts.iter_mut().find(|a| a.id == id)?;
        alert.status = AlertStatus::Resolved;
        tracing::info!(alert_id = %id, "Alert resolved");
        Some(alert)
    }
}

impl Default for HazardModel {
    fn default() -> Self {
        Self::new()
    }
}
