//! Loading a RecommendService from persistent storage.

use crate::application::error::AppError;
use crate::domain::ports::DatasetSource;
use std::sync::Arc;

use super::core::RecommendService;
use super::types::ServiceConfig;

impl RecommendService {
    /// Load and validate the dataset once, then build the service around it.
    pub fn load(config: ServiceConfig, source: &dyn DatasetSource) -> Result<Self, AppError> {
        if config.default_k == 0 || config.default_k > config.max_k {
            return Err(AppError::InvalidConfig(format!(
                "default_k ({}) must be between 1 and max_k ({})",
                config.default_k, config.max_k
            )));
        }

        let dataset = source.load()?;
        tracing::info!(
            path = %source.path().display(),
            items = dataset.len(),
            "dataset loaded"
        );
        Ok(Self::new(config, Arc::new(dataset)))
    }
}
