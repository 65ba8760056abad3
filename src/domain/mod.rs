// Domain layer - Documents, load states and view models
pub mod dashboard;
pub mod display_mode;
pub mod load_state;
pub mod speedtest;
pub mod telemetry;
