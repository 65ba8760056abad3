// Application state for HTTP handlers
use crate::application::dashboard_service::DashboardService;
use crate::application::dashboard_state::DashboardState;
use crate::application::streaming_service::StreamingDashboardService;

#[derive(Clone)]
pub struct AppState {
    pub state: DashboardState,
    pub dashboard_service: DashboardService,
    pub streaming_service: StreamingDashboardService,
}

impl AppState {
    pub fn new(state: DashboardState) -> Self {
        Self {
            dashboard_service: DashboardService::new(state.clone()),
            streaming_service: StreamingDashboardService::new(state.clone()),
            state,
        }
    }
}
