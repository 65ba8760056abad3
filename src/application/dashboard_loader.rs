// Dashboard loader - starts the two independent document loads
use crate::application::dashboard_state::DashboardState;
use crate::application::document_source::{load, DocumentSource};
use crate::domain::load_state::LoadError;
use crate::domain::speedtest::SpeedtestDocument;
use crate::domain::telemetry::TelemetryDocument;
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinSet;

/// Owns the load tasks. Dropping the loader (or calling `shutdown`) aborts
/// any load that has not finished yet.
pub struct DashboardLoader {
    tasks: JoinSet<()>,
}

impl DashboardLoader {
    pub fn start(
        state: DashboardState,
        source: Arc<dyn DocumentSource>,
        telemetry_resource: String,
        speedtest_resource: String,
    ) -> Self {
        let mut tasks = JoinSet::new();

        {
            let state = state.clone();
            let source = source.clone();
            tasks.spawn(async move {
                let result = timed_load::<TelemetryDocument>(source.as_ref(), &telemetry_resource).await;
                state.set_telemetry(result);
            });
        }

        tasks.spawn(async move {
            let result = timed_load::<SpeedtestDocument>(source.as_ref(), &speedtest_resource).await;
            state.set_speedtest(result);
        });

        Self { tasks }
    }

    /// Wait until every load has settled or been aborted.
    pub async fn wait(&mut self) {
        while let Some(joined) = self.tasks.join_next().await {
            if let Err(e) = joined {
                if e.is_panic() {
                    tracing::error!("Document load task panicked: {}", e);
                }
            }
        }
    }

    pub fn shutdown(&mut self) {
        if !self.tasks.is_empty() {
            tracing::info!("Aborting {} unfinished document load(s)", self.tasks.len());
        }
        self.tasks.abort_all();
    }
}

async fn timed_load<D: serde::de::DeserializeOwned>(
    source: &dyn DocumentSource,
    resource: &str,
) -> Result<D, LoadError> {
    let started = Instant::now();
    let result = load::<D>(source, resource).await;
    let elapsed_ms = started.elapsed().as_millis() as u64;

    match &result {
        Ok(_) => tracing::info!(resource, elapsed_ms, "Loaded document"),
        Err(e) => tracing::error!(resource, elapsed_ms, kind = e.kind(), "Error loading document: {}", e),
    }

    result
}
