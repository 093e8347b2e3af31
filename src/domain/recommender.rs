//! Top-K retrieval over a precomputed similarity matrix.

use crate::domain::error::RecommendError;
use crate::domain::model::{Dataset, Recommendation};
use crate::domain::types::{ItemId, Neighbor};
use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use std::sync::Arc;

/// Number of recommendations returned when the caller does not choose one.
pub const DEFAULT_K: usize = 10;

/// Largest k accepted when no explicit limit is configured.
pub const DEFAULT_MAX_K: usize = 100;

/// Rank every other item against `query` and keep the best `k`.
///
/// The sort is stable, so equal scores stay in ascending id order. The query
/// item is removed by id, wherever it landed in the ordering.
pub fn rank(dataset: &Dataset, query: ItemId, k: usize) -> Vec<Neighbor> {
    let mut scored: Vec<Neighbor> = dataset
        .row(query)
        .iter()
        .enumerate()
        .map(|(id, &score)| Neighbor { id, score })
        .collect();
    scored.sort_by_key(|neighbor| Reverse(OrderedFloat(neighbor.score)));

    scored
        .into_iter()
        .filter(|neighbor| neighbor.id != query)
        .take(k)
        .collect()
}

/// Top-`k` items most similar to `query_title`, as (title, genre) pairs.
pub fn recommend(
    query_title: &str,
    dataset: &Dataset,
    k: usize,
) -> Result<Vec<Recommendation>, RecommendError> {
    let query = resolve(dataset, query_title)?;
    Ok(rank(dataset, query, k)
        .into_iter()
        .map(|neighbor| Recommendation {
            title: dataset.titles()[neighbor.id].clone(),
            genre: dataset.genres()[neighbor.id].clone(),
        })
        .collect())
}

fn resolve(dataset: &Dataset, title: &str) -> Result<ItemId, RecommendError> {
    dataset
        .position(title)
        .ok_or_else(|| RecommendError::NotFound {
            title: title.to_string(),
        })
}

/// Recommender bound to one shared, read-only dataset.
#[derive(Debug, Clone)]
pub struct Recommender {
    dataset: Arc<Dataset>,
}

impl Recommender {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn recommend(
        &self,
        query_title: &str,
        k: usize,
    ) -> Result<Vec<Recommendation>, RecommendError> {
        recommend(query_title, &self.dataset, k)
    }

    pub fn recommend_default(
        &self,
        query_title: &str,
    ) -> Result<Vec<Recommendation>, RecommendError> {
        self.recommend(query_title, DEFAULT_K)
    }

    /// Same ranking as [`Recommender::recommend`], keeping ids and scores.
    pub fn neighbors(&self, query_title: &str, k: usize) -> Result<Vec<Neighbor>, RecommendError> {
        let query = resolve(&self.dataset, query_title)?;
        Ok(rank(&self.dataset, query, k))
    }
}
