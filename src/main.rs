//! Coastwatch demo binary
//!
//! Runs the core headless: seeds the model, loads preferences, starts
//! the refresh scheduler and logs each snapshot until Ctrl-C.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use coastwatch::{
    DashboardController, DashboardSnapshot, HazardModel, PreferenceStore, RenderSink,
};

/// Render sink that logs the summary line a UI would display
struct LogSink;

impl RenderSink for LogSink {
    fn render(&self, snapshot: &DashboardSnapshot) {
        let summary = &snapshot.summary;
        tracing::info!(
            active = summary.active_alerts,
            high = summary.high_alerts,
            medium = summary.medium_alerts,
            low = summary.low_alerts,
            population_at_risk = summary.population_at_risk,
            "Dashboard refreshed"
        );
        if let Some(weather) = &summary.primary_weather {
            tracing::info!(
                region = %weather.region,
                temperature = weather.temperature,
                conditions = %weather.conditions,
                "Primary weather"
            );
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "coastwatch=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Coastwatch v{}", env!("CARGO_PKG_VERSION"));

    let model = Arc::new(RwLock::new(HazardModel::seeded()));
    let store = PreferenceStore::default_location();

    let mut controller = DashboardController::new(model, store, Arc::new(LogSink));
    tracing::info!(
        refresh_interval_secs = controller.settings().refresh_interval,
        "Loaded preferences"
    );

    let initial = controller.snapshot().await;
    tracing::info!(
        regions = initial.regions.len(),
        sensors = initial.sensors.len(),
        alerts = initial.alerts.len(),
        "Model seeded"
    );

    controller.start();

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down...");
    controller.stop();

    Ok(())
}
