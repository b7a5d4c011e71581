//! Shared application state for the HTTP layer.

use std::sync::Arc;
use std::time::Instant;

use crate::recommend::Recommender;

/// Shared application state. The recommender holds the once-loaded
/// classifier artifact; nothing here is mutated after startup.
pub struct AppState {
    pub recommender: Recommender,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(recommender: Recommender) -> Self {
        Self {
            recommender,
            started_at: Instant::now(),
        }
    }

    /// Get uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

pub type SharedState = Arc<AppState>;
