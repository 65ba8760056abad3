// Streaming dashboard service - progressive frames while documents settle
use crate::application::dashboard_service::compose;
use crate::application::dashboard_state::DashboardState;
use crate::domain::dashboard::DashboardView;
use std::sync::Arc;
use tokio::sync::{mpsc, watch};

const FRAME_BUFFER: usize = 16;

#[derive(Clone)]
pub struct StreamingDashboardService {
    state: DashboardState,
    stopped: Arc<watch::Sender<bool>>,
}

impl StreamingDashboardService {
    pub fn new(state: DashboardState) -> Self {
        let (stopped, _rx) = watch::channel(false);
        Self {
            state,
            stopped: Arc::new(stopped),
        }
    }

    /// Sends the current dashboard right away, then one frame per state
    /// change. The channel closes once both documents have settled, once
    /// `shutdown` is called, or as soon as the receiver goes away.
    pub fn stream_dashboard(&self) -> mpsc::Receiver<DashboardView> {
        let (tx, rx) = mpsc::channel(FRAME_BUFFER);
        let mut updates = self.state.subscribe();
        let mut stopped = self.stopped.subscribe();

        tokio::spawn(async move {
            let mut frames = 0usize;
            loop {
                let snapshot = updates.borrow_and_update().clone();
                let settled = snapshot.is_settled();

                if tx.send(compose(&snapshot)).await.is_err() {
                    tracing::debug!("Dashboard stream receiver dropped after {} frame(s)", frames);
                    return;
                }
                frames += 1;

                if settled {
                    break;
                }

                tokio::select! {
                    changed = updates.changed() => {
                        if changed.is_err() {
                            break;
                        }
                    }
                    _ = tx.closed() => {
                        tracing::debug!("Dashboard stream receiver dropped after {} frame(s)", frames);
                        return;
                    }
                    _ = async { let _ = stopped.wait_for(|stop| *stop).await; } => {
                        tracing::debug!("Dashboard stream closed by shutdown");
                        break;
                    }
                }
            }
            tracing::debug!("Dashboard stream complete after {} frame(s)", frames);
        });

        rx
    }

    /// End every open stream, including ones still waiting on a pending document.
    pub fn shutdown(&self) {
        self.stopped.send_replace(true);
    }
}
