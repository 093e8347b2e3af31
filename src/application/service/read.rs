//! Read operations (defaults, get, list) for RecommendService.

use crate::application::error::AppError;

use super::core::RecommendService;
use super::traits::{ItemRead, RecommendDefaults};
use super::types::ItemSummary;

impl RecommendDefaults for RecommendService {
    fn default_k(&self) -> usize {
        self.default_k
    }

    fn max_k(&self) -> usize {
        self.max_k
    }
}

impl ItemRead for RecommendService {
    fn get(&self, title: &str) -> Result<ItemSummary, AppError> {
        Ok(self.find_item(title)?.into())
    }

    fn list(&self, offset: usize, limit: usize) -> (usize, Vec<ItemSummary>) {
        let dataset = self.dataset();
        let total = dataset.len();
        if offset >= total {
            return (total, Vec::new());
        }

        let items = dataset
            .iter()
            .skip(offset)
            .take(limit)
            .map(ItemSummary::from)
            .collect();

        (total, items)
    }
}
