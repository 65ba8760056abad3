// Application layer - state, loading and view composition
pub mod dashboard_loader;
pub mod dashboard_service;
pub mod dashboard_state;
pub mod document_source;
pub mod streaming_service;
pub mod views;
