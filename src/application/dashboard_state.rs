// Dashboard state - the two document slots plus the display mode
use crate::domain::display_mode::DisplayMode;
use crate::domain::load_state::{LoadError, LoadState};
use crate::domain::speedtest::SpeedtestDocument;
use crate::domain::telemetry::TelemetryDocument;
use std::sync::Arc;
use tokio::sync::watch;

/// Immutable view of the state at one point in time. Documents are shared
/// behind `Arc`, so cloning a snapshot never copies document bodies.
#[derive(Debug, Clone, Default)]
pub struct DashboardSnapshot {
    pub telemetry: LoadState<TelemetryDocument>,
    pub speedtest: LoadState<SpeedtestDocument>,
    pub mode: DisplayMode,
}

impl DashboardSnapshot {
    /// Both documents reached a terminal state.
    pub fn is_settled(&self) -> bool {
        self.telemetry.is_settled() && self.speedtest.is_settled()
    }
}

#[derive(Clone)]
pub struct DashboardState {
    tx: Arc<watch::Sender<DashboardSnapshot>>,
}

impl DashboardState {
    pub fn new(mode: DisplayMode) -> Self {
        let (tx, _rx) = watch::channel(DashboardSnapshot {
            mode,
            ..Default::default()
        });
        Self { tx: Arc::new(tx) }
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        self.tx.borrow().clone()
    }

    /// Receiver that is notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<DashboardSnapshot> {
        self.tx.subscribe()
    }

    pub fn mode(&self) -> DisplayMode {
        self.tx.borrow().mode
    }

    pub fn set_mode(&self, mode: DisplayMode) {
        self.tx.send_if_modified(|snapshot| {
            let changed = snapshot.mode != mode;
            snapshot.mode = mode;
            changed
        });
    }

    pub fn toggle_mode(&self) -> DisplayMode {
        let mut mode = DisplayMode::default();
        self.tx.send_modify(|snapshot| {
            snapshot.mode = snapshot.mode.toggled();
            mode = snapshot.mode;
        });
        tracing::debug!("Display mode switched to {}", mode);
        mode
    }

    /// Settle the telemetry slot. Returns false if it had already settled.
    pub fn set_telemetry(&self, result: Result<TelemetryDocument, LoadError>) -> bool {
        self.tx
            .send_if_modified(|snapshot| settle(&mut snapshot.telemetry, result, "telemetry"))
    }

    /// Settle the speed-test slot. Returns false if it had already settled.
    pub fn set_speedtest(&self, result: Result<SpeedtestDocument, LoadError>) -> bool {
        self.tx
            .send_if_modified(|snapshot| settle(&mut snapshot.speedtest, result, "speedtest"))
    }
}

#[cfg(test)]
impl DashboardState {
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

fn settle<T>(slot: &mut LoadState<T>, result: Result<T, LoadError>, name: &str) -> bool {
    if slot.is_settled() {
        tracing::warn!("Ignoring second result for the {} document", name);
        return false;
    }
    *slot = LoadState::from(result);
    true
}
