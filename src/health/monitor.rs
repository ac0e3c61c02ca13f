// src/health/monitor.rs - polling health query
use super::client::HealthClient;
use super::types::HealthState;
use crate::core::prelude::*;
use tokio::sync::{watch, Notify};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Background task publishing the classified health state on a fixed cadence.
#[derive(Debug)]
pub struct HealthMonitor {
    state: watch::Receiver<HealthState>,
    refresh: Arc<Notify>,
    handle: JoinHandle<()>,
}

impl HealthMonitor {
    /// Starts in `Loading`; the first fetch runs immediately.
    pub fn spawn(client: HealthClient, interval: Duration) -> Self {
        let (tx, rx) = watch::channel(HealthState::Loading);
        let refresh = Arc::new(Notify::new());
        let handle = tokio::spawn(Self::poll(client, interval, tx, refresh.clone()));

        log::debug!("Health monitor started ({}ms)", interval.as_millis());
        Self {
            state: rx,
            refresh,
            handle,
        }
    }

    async fn poll(
        client: HealthClient,
        interval: Duration,
        tx: watch::Sender<HealthState>,
        refresh: Arc<Notify>,
    ) {
        let mut ticker = tokio::time::interval(interval.max(Duration::from_millis(1)));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {}
                _ = refresh.notified() => log::debug!("Manual health refresh"),
            }

            let state = HealthState::from_result(client.fetch().await);
            if let HealthState::Error(msg) = &state {
                log::debug!("Health check failed: {}", msg);
            }

            // Every receiver is gone, including the monitor's own.
            if tx.send(state).is_err() {
                break;
            }
        }
    }

    pub fn state(&self) -> HealthState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<HealthState> {
        self.state.clone()
    }

    /// Requests an extra fetch right away. Not deduplicated against in-flight requests.
    pub fn refresh(&self) {
        self.refresh.notify_one();
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    /// Ends polling; an in-flight result is discarded.
    pub fn stop(&self) {
        self.handle.abort();
    }
}

impl Drop for HealthMonitor {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
