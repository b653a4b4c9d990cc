use std::sync::Arc;

use crate::config::{AppConfig, ScoringConfig};
use crate::storage::StorageConfig;

#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<StorageConfig>,
    pub scoring: Arc<ScoringConfig>,
    pub cors_origin: String,
}

impl AppState {
    pub fn new(storage: StorageConfig, scoring: ScoringConfig) -> Self {
        Self {
            storage: Arc::new(storage),
            scoring: Arc::new(scoring),
            cors_origin: "*".to_string(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            cors_origin: config.server.cors_origin.clone(),
            ..Self::new(
                StorageConfig::new(config.data_dir.clone()),
                config.scoring.clone(),
            )
        }
    }
}
