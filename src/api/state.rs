//! Application state for the API server

use std::sync::Arc;

use crate::mission::MissionControl;

/// Application state shared across all API handlers
#[derive(Clone)]
pub struct AppState {
    /// The rover session every request operates on
    pub mission: Arc<MissionControl>,
}

impl AppState {
    pub fn new(mission: MissionControl) -> Self {
        Self {
            mission: Arc::new(mission),
        }
    }
}
