//! Service configuration.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Runtime configuration for the crop advisor service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Path to the trained classifier model
    pub model_path: PathBuf,
    /// Path to the label decoder
    pub labels_path: PathBuf,
    /// Base URL of the translation backend
    pub translator_url: String,
    /// Timeout for a single translation request, in seconds
    pub translator_timeout_secs: u64,
    /// Allowed CORS origins; empty means any origin
    pub cors_origins: Vec<String>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("artifacts/model.json"),
            labels_path: PathBuf::from("artifacts/labels.json"),
            translator_url: "http://localhost:5000".to_string(),
            translator_timeout_secs: 5,
            cors_origins: Vec::new(),
        }
    }
}

impl ServiceConfig {
    pub fn translator_timeout(&self) -> Duration {
        Duration::from_secs(self.translator_timeout_secs)
    }
}
