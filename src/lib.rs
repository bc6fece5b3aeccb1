//! # Coastwatch
//!
//! Coastal hazard monitoring core: the state-bearing engine behind a
//! hazard dashboard, minus the rendering.
//!
//! ## Features
//!
//! - **Synthetic telemetry**: Bounded random-walk simulation over sensor
//!   and weather data, with clamp ranges preserved as named constants
//! - **Alert management**: Validated user-submitted alerts, severity
//!   filtering, resolve-only lifecycle
//! - **Preferences**: A single JSON settings record with field-by-field
//!   default substitution on load
//! - **Refresh scheduling**: Timer-driven refresh with start/stop/restart
//!   and a passive render-sink contract
//!
//! ## Modules
//!
//! - [`model`]: In-memory hazard data model and simulation pass
//! - [`prefs`]: Preferences record and key-value persistence
//! - [`scheduler`]: Periodic refresh driver
//! - [`dashboard`]: Controller, tabs and snapshot assembly
//! - [`client`]: Outbound HTTP with the stored API key attached
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tokio::sync::RwLock;
//! use coastwatch::{
//!     DashboardController, DashboardSnapshot, HazardModel, MemoryStore, PreferenceStore,
//! };
//!
//! #[tokio::main]
//! async fn main() {
//!     let model = Arc::new(RwLock::new(HazardModel::seeded()));
//!     let store = PreferenceStore::new(MemoryStore::new());
//!     let sink = Arc::new(|snapshot: &DashboardSnapshot| {
//!         println!("{} active alerts", snapshot.summary.active_alerts);
//!     });
//!
//!     let mut controller = DashboardController::new(model, store, sink);
//!     controller.start();
//!
//!     tokio::signal::ctrl_c().await.ok();
//!     controller.stop();
//! }
//! ```

pub mod client;
pub mod dashboard;
pub mod model;
pub mod prefs;
pub mod scheduler;

// Re-export top-level types for convenience
pub use model::{
    Alert, AlertDraft, AlertStatus, FieldDrift, HazardModel, ModelError, ModelResult, Region,
    SensorReading, Severity, SimulationParams, ThreatLevel, ThreatStatus, ThreatType,
    WeatherRecord,
};

pub use prefs::{
    BackupFrequency, FileStore, KeyValueStore, MemoryStore, NotificationPrefs, PreferenceStore,
    Preferences, PrefsError, Theme, PREFS_KEY,
};

pub use scheduler::{RefreshScheduler, RenderSink};

pub use dashboard::{DashboardController, DashboardSnapshot, DashboardSummary, Tab};

pub use client::{ApiClient, ClientError};
