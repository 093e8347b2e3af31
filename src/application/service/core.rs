//! Core RecommendService struct definition and private helpers.

use crate::application::error::AppError;
use crate::domain::model::{Dataset, Item};
use crate::domain::recommender::Recommender;
use std::sync::Arc;

use super::types::{ItemSummary, ServiceConfig};

/// Recommendation service over one immutable dataset.
///
/// Holds no interior mutability, so a single instance can be shared behind an
/// `Arc` and queried from many threads at once.
#[derive(Debug, Clone)]
pub struct RecommendService {
    pub(super) recommender: Recommender,
    pub(super) default_k: usize,
    pub(super) max_k: usize,
}

impl RecommendService {
    pub fn new(config: ServiceConfig, dataset: Arc<Dataset>) -> Self {
        Self {
            recommender: Recommender::new(dataset),
            default_k: config.default_k,
            max_k: config.max_k,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        self.recommender.dataset()
    }

    /// Find an item by exact title.
    pub(super) fn find_item(&self, title: &str) -> Result<Item<'_>, AppError> {
        let dataset = self.dataset();
        dataset
            .position(title)
            .and_then(|id| dataset.item(id))
            .ok_or_else(|| AppError::NotFound(format!("title not found: {}", title)))
    }
}

impl From<Item<'_>> for ItemSummary {
    fn from(item: Item<'_>) -> Self {
        Self {
            index_id: item.id,
            title: item.title.to_string(),
            genre: item.genre.to_string(),
        }
    }
}
