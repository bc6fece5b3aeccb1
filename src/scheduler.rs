//! Refresh scheduler
//!
//! Drives the periodic simulation pass. A two-state machine (Stopped,
//! Running with an interval) backed by a spawned tokio task: each tick
//! mutates the shared [`HazardModel`] and hands a fresh
//! [`DashboardSnapshot`] to the registered [`RenderSink`]. The model is
//! the single source of truth; no fresh fetch happens on a tick.

use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::dashboard::DashboardSnapshot;
use crate::model::HazardModel;

/// Passive view-model callback
///
/// The core emits plain data snapshots; rendering is the UI layer's
/// exclusive responsibility.
pub trait RenderSink: Send + Sync + 'static {
    fn render(&self, snapshot: &DashboardSnapshot);
}

impl<F> RenderSink for F
where
    F: Fn(&DashboardSnapshot) + Send + Sync + 'static,
{
    fn render(&self, snapshot: &DashboardSnapshot) {
        self(snapshot)
    }
}

/// Repeating timer that refreshes the model and notifies the sink
///
/// Stopping aborts the spawned task, which cancels the pending timer;
/// no tick from a stopped cadence fires afterwards.
pub struct RefreshScheduler {
    model: Arc<RwLock<HazardModel>>,
    sink: Arc<dyn RenderSink>,
    task: Option<JoinHandle<()>>,
    interval: Option<Duration>,
}

impl RefreshScheduler {
    pub fn new(model: Arc<RwLock<HazardModel>>, sink: Arc<dyn RenderSink>) -> Self {
        Self {
            model,
            sink,
            task: None,
            interval: None,
        }
    }

    /// Transition Stopped -> Running, firing a tick every `interval`
    ///
    /// The first tick fires one full interval after start. A scheduler
    /// that is already running is left untouched; use
    /// [`restart`](Self::restart) to change cadence.
    pub fn start(&mut self, interval: Duration) {
        if self.task.is_some() {
            tracing::warn!("Refresh scheduler already running, ignoring start");
            return;
        }

        tracing::info!(interval_ms = interval.as_millis() as u64, "Starting refresh scheduler");

        let model = self.model.clone();
        let sink = self.sink.clone();
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // Consume the immediate first tick so the cadence starts
            // one full interval from now
            ticker.tick().await;

            let mut rng = StdRng::from_entropy();
            loop {
                ticker.tick().await;

                let snapshot = {
                    let mut model = model.write().await;
                    model.mutate_environment(&mut rng);
                    DashboardSnapshot::capture(&model)
                };
                tracing::debug!(
                    active_alerts = snapshot.summary.active_alerts,
                    "Refresh tick"
                );
                sink.render(&snapshot);
            }
        });

        self.task = Some(task);
        self.interval = Some(interval);
    }

    /// Stop, then start with a new interval
    ///
    /// Used whenever the user changes the refresh-interval preference.
    /// No tick from the old cadence fires after this point.
    pub fn restart(&mut self, interval: Duration) {
        self.stop();
        self.start(interval);
    }

    /// Transition Running -> Stopped, cancelling the pending timer
    ///
    /// Idempotent when already stopped.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            tracing::info!("Refresh scheduler stopped");
        }
        self.interval = None;
    }

    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    /// The active interval while Running, `None` while Stopped
    pub fn interval(&self) -> Option<Duration> {
        self.interval
    }
}

impl Drop for RefreshScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet_sink() -> Arc<dyn RenderSink> {
        Arc::new(|_: &DashboardSnapshot| {})
    }

    #[tokio::test]
    async fn test_scheduler_state_transitions() {
        let model = Arc::new(RwLock::new(HazardModel::seeded()));
        let mut scheduler = RefreshScheduler::new(model, quiet_sink());

        assert!(!scheduler.is_running());
        assert_eq!(scheduler.interval(), None);

        scheduler.start(Duration::from_secs(10));
        assert!(scheduler.is_running());
        assert_eq!(scheduler.interval(), Some(Duration::from_secs(10)));

        scheduler.restart(Duration::from_secs(5));
        assert!(scheduler.is_running());
        assert_eq!(scheduler.interval(), Some(Duration::from_secs(5)));

        scheduler.stop();
        assert!(!scheduler.is_running());
        assert_eq!(scheduler.interval(), None);

        // stop is idempotent
        scheduler.stop();
        assert!(!scheduler.is_running());
    }

    #[tokio::test]
    async fn test_start_while_running_keeps_existing_cadence() {
        let model = Arc::new(RwLock::new(HazardModel::seeded()));
        let mut scheduler = RefreshScheduler::new(model, quiet_sink());

        scheduler.start(Duration::from_secs(10));
        scheduler.start(Duration::from_secs(1));
        assert_eq!(scheduler.interval(), Some(Duration::from_secs(10)));
    }
}
