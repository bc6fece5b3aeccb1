//! Dashboard controller
//!
//! Orchestrates the core for the presentation layer: tab switching,
//! preference loading/saving, scheduler wiring, and snapshot assembly.
//! The controller never renders anything itself; it hands out
//! [`DashboardSnapshot`] values and lets the UI layer re-render after
//! each entry point call or scheduler tick.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::model::{
    Alert, AlertDraft, HazardModel, ModelResult, Region, SensorReading, Severity, ThreatLevel,
    ThreatType, WeatherRecord,
};
use crate::prefs::{PreferenceStore, Preferences};
use crate::scheduler::{RefreshScheduler, RenderSink};

/// The five dashboard tabs
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Dashboard,
    Monitoring,
    Alerts,
    Analytics,
    Settings,
}

/// Roll-up figures for the dashboard and analytics tabs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardSummary {
    /// Count of alerts with status Active
    pub active_alerts: usize,
    pub high_alerts: usize,
    pub medium_alerts: usize,
    pub low_alerts: usize,
    /// All alerts regardless of status
    pub total_alerts: usize,
    /// Population across regions with threat level above low
    pub population_at_risk: u64,
    /// Weather card shown on the overview tab
    pub primary_weather: Option<WeatherRecord>,
}

/// Immutable point-in-time copy of model state for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardSnapshot {
    pub regions: Vec<Region>,
    pub sensors: Vec<SensorReading>,
    pub weather: Vec<WeatherRecord>,
    pub alerts: Vec<Alert>,
    pub threat_types: Vec<ThreatType>,
    pub summary: DashboardSummary,
    pub generated_at: DateTime<Utc>,
}

impl DashboardSnapshot {
    /// Clone the model's current state into a snapshot
    pub fn capture(model: &HazardModel) -> Self {
        let active: Vec<&Alert> = model.alerts().iter().filter(|a| a.is_active()).collect();
        let count_by = |s: Severity| active.iter().filter(|a| a.severity == s).count();

        let summary = DashboardSummary {
            active_alerts: active.len(),
            high_alerts: count_by(Severity::High),
            medium_alerts: count_by(Severity::Medium),
            low_alerts: count_by(Severity::Low),
            total_alerts: model.alerts().len(),
            population_at_risk: model
                .regions()
                .iter()
                .filter(|r| r.threat_level != ThreatLevel::Low)
                .map(|r| r.population_at_risk)
                .sum(),
            primary_weather: model.weather().first().cloned(),
        };

        Self {
            regions: model.regions().to_vec(),
            sensors: model.sensors().to_vec(),
            weather: model.weather().to_vec(),
            alerts: model.alerts().to_vec(),
            threat_types: model.threat_types().to_vec(),
            summary,
            generated_at: Utc::now(),
        }
    }
}

/// Ties the model, preference store and scheduler together
pub struct DashboardController {
    model: Arc<RwLock<HazardModel>>,
    store: PreferenceStore,
    scheduler: RefreshScheduler,
    settings: Preferences,
    active_tab: Tab,
    rng: StdRng,
}

impl DashboardController {
    /// Build a controller over a shared model
    ///
    /// Preferences are loaded immediately; the scheduler stays Stopped
    /// until [`start`](Self::start).
    pub fn new(
        model: Arc<RwLock<HazardModel>>,
        store: PreferenceStore,
        sink: Arc<dyn RenderSink>,
    ) -> Self {
        let settings = store.load();
        let scheduler = RefreshScheduler::new(model.clone(), sink);
        Self {
            model,
            store,
            scheduler,
            settings,
            active_tab: Tab::default(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Start periodic refresh at the preferred interval
    pub fn start(&mut self) {
        self.scheduler.start(self.settings.refresh_duration());
    }

    /// Stop periodic refresh
    pub fn stop(&mut self) {
        self.scheduler.stop();
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn switch_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    /// Current in-memory settings
    pub fn settings(&self) -> &Preferences {
        &self.settings
    }

    /// Persist new settings and restart the refresh cadence
    ///
    /// The scheduler restarts unconditionally so a changed refresh
    /// interval takes effect on the next tick.
    pub fn save_settings(&mut self, settings: Preferences) {
        self.store.save(&settings);
        self.settings = settings;
        if self.scheduler.is_running() {
            self.scheduler.restart(self.settings.refresh_duration());
        }
    }

    /// Reset settings to the documented defaults and persist
    pub fn reset_settings(&mut self) {
        self.save_settings(Preferences::default());
    }

    /// Manual refresh: run one simulation pass and return the result
    pub async fn refresh_now(&mut self) -> DashboardSnapshot {
        let mut model = self.model.write().await;
        model.mutate_environment(&mut self.rng);
        DashboardSnapshot::capture(&model)
    }

    /// Snapshot the model without mutating it
    pub async fn snapshot(&self) -> DashboardSnapshot {
        let model = self.model.read().await;
        DashboardSnapshot::capture(&model)
    }

    /// Create a user-submitted alert, returning the stored copy
    pub async fn create_alert(&mut self, draft: AlertDraft) -> ModelResult<Alert> {
        let mut model = self.model.write().await;
        model.create_alert(draft, &mut self.rng).map(Alert::clone)
    }

    /// Alerts filtered by severity, in original order
    pub async fn filter_alerts(&self, severity: Option<Severity>) -> Vec<Alert> {
        let model = self.model.read().await;
        model
            .filter_alerts(severity)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Look up an alert by identifier
    pub async fn find_alert(&self, id: &str) -> Option<Alert> {
        self.model.read().await.find_alert(id).cloned()
    }

    /// Look up a region by identifier
    pub async fn find_region(&self, id: &str) -> Option<Region> {
        self.model.read().await.find_region(id).cloned()
    }

    /// Transition an alert to Resolved
    pub async fn resolve_alert(&mut self, id: &str) -> Option<Alert> {
        self.model.write().await.resolve_alert(id).cloned()
    }

    /// Shared handle to the underlying model
    pub fn model(&self) -> Arc<RwLock<HazardModel>> {
        self.model.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::MemoryStore;

    fn controller() -> DashboardController {
        let model = Arc::new(RwLock::new(HazardModel::seeded()));
        let sink: Arc<dyn RenderSink> = Arc::new(|_: &DashboardSnapshot| {});
        DashboardController::new(model, PreferenceStore::new(MemoryStore::new()), sink)
    }

    #[test]
    fn test_summary_counts_from_seed_data() {
        let model = HazardModel::seeded();
        let snapshot = DashboardSnapshot::capture(&model);
        let summary = &snapshot.summary;

        // Seed data: two active alerts (HIGH + MEDIUM), one resolved LOW
        assert_eq!(summary.active_alerts, 2);
        assert_eq!(summary.high_alerts, 1);
        assert_eq!(summary.medium_alerts, 1);
        assert_eq!(summary.low_alerts, 0);
        assert_eq!(summary.total_alerts, 3);

        // Mumbai (medium, 50k) + Goa (high, 75k); Chennai is low
        assert_eq!(summary.population_at_risk, 125_000);
        assert_eq!(
            summary.primary_weather.as_ref().map(|w| w.region.as_str()),
            Some("Mumbai Coast")
        );
    }

    #[test]
    fn test_snapshot_is_serializable() {
        let model = HazardModel::seeded();
        let snapshot = DashboardSnapshot::capture(&model);
        let json = serde_json::to_string(&snapshot).unwrap();
        let restored: DashboardSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.alerts.len(), snapshot.alerts.len());
        assert_eq!(restored.summary, snapshot.summary);
    }

    #[tokio::test]
    async fn test_tab_switching() {
        let mut ctrl = controller();
        assert_eq!(ctrl.active_tab(), Tab::Dashboard);
        ctrl.switch_tab(Tab::Monitoring);
        assert_eq!(ctrl.active_tab(), Tab::Monitoring);
    }

    #[tokio::test]
    async fn test_save_settings_persists_and_updates() {
        let mut ctrl = controller();
        let new_settings = Preferences {
            refresh_interval: 30,
            ..Preferences::default()
        };

        ctrl.save_settings(new_settings.clone());
        assert_eq!(ctrl.settings(), &new_settings);
    }

    #[tokio::test]
    async fn test_save_settings_restarts_running_scheduler() {
        let mut ctrl = controller();
        ctrl.start();
        assert!(ctrl.is_running());

        ctrl.save_settings(Preferences {
            refresh_interval: 5,
            ..Preferences::default()
        });
        assert!(ctrl.is_running());

        ctrl.stop();
        assert!(!ctrl.is_running());
    }

    #[tokio::test]
    async fn test_reset_settings_restores_defaults() {
        let mut ctrl = controller();
        ctrl.save_settings(Preferences {
            refresh_interval: 60,
            api_key: "some-key".to_string(),
            ..Preferences::default()
        });

        ctrl.reset_settings();
        assert_eq!(ctrl.settings(), &Preferences::default());
    }

    #[tokio::test]
    async fn test_refresh_now_produces_fresh_snapshot() {
        let mut ctrl = controller();
        let before = ctrl.snapshot().await;
        let after = ctrl.refresh_now().await;
        assert!(after.generated_at >= before.generated_at);
        assert_eq!(after.sensors.len(), before.sensors.len());
    }

    #[tokio::test]
    async fn test_create_and_resolve_alert_through_controller() {
        let mut ctrl = controller();
        let draft = AlertDraft {
            kind: "High Tide Advisory".to_string(),
            region: "Chennai Marina".to_string(),
            severity: Severity::Low,
            expected_impact: "Minor flooding of walkways".to_string(),
            actions_text: "Close beach access".to_string(),
        };

        let alert = ctrl.create_alert(draft).await.unwrap();
        assert!(ctrl.find_alert(&alert.id).await.is_some());

        let resolved = ctrl.resolve_alert(&alert.id).await.unwrap();
        assert!(!resolved.is_active());
    }
}
