//! Trait definitions for RecommendService capabilities.
//!
//! - `ItemRecommend`: ranking for a selected item
//! - `ItemRead`: catalogue lookups for selectors and detail views
//! - `RecommendDefaults`: request defaults and limits

use crate::application::error::AppError;

use super::types::{ItemSummary, RecommendationHit, ValidatedRecommendQuery};

/// Recommendation operations.
pub trait ItemRecommend {
    /// Top-k items most similar to the query title, best first.
    fn recommend(&self, query: ValidatedRecommendQuery)
        -> Result<Vec<RecommendationHit>, AppError>;
}

pub trait ItemRead {
    /// Look up one item by exact title.
    fn get(&self, title: &str) -> Result<ItemSummary, AppError>;

    /// Page through the catalogue in dataset order. Returns (total, page).
    fn list(&self, offset: usize, limit: usize) -> (usize, Vec<ItemSummary>);
}

pub trait RecommendDefaults {
    fn default_k(&self) -> usize;

    fn max_k(&self) -> usize;
}
