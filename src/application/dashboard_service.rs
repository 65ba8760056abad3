// Dashboard service - composes every panel from the current state
use crate::application::dashboard_state::{DashboardSnapshot, DashboardState};
use crate::application::views::{distribution, geo_summary, hourly, metrics_summary, time_series};
use crate::domain::dashboard::DashboardView;

pub const DASHBOARD_TITLE: &str = "5G Network Monitor - ML Analytics Dashboard";
pub const DASHBOARD_FOOTER: &str = "5G Network Monitor | ML-Powered Network Analytics";

#[derive(Clone)]
pub struct DashboardService {
    state: DashboardState,
}

impl DashboardService {
    pub fn new(state: DashboardState) -> Self {
        Self { state }
    }

    pub fn get_dashboard(&self) -> DashboardView {
        compose(&self.state.snapshot())
    }
}

/// Project a snapshot into the full dashboard. Pure; views never see each other.
pub fn compose(snapshot: &DashboardSnapshot) -> DashboardView {
    DashboardView {
        title: DASHBOARD_TITLE,
        mode: snapshot.mode,
        palette: snapshot.mode.palette(),
        metrics: metrics_summary::project(snapshot),
        timeseries: time_series::project(snapshot),
        scenarios: distribution::project(snapshot),
        hourly: hourly::project(snapshot),
        geo: geo_summary::project(snapshot),
        footer: DASHBOARD_FOOTER,
    }
}
