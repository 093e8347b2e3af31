//! Recommendation operations for RecommendService.

use crate::application::error::AppError;

use super::core::RecommendService;
use super::traits::ItemRecommend;
use super::types::{RecommendationHit, ValidatedRecommendQuery};

impl ItemRecommend for RecommendService {
    fn recommend(
        &self,
        query: ValidatedRecommendQuery,
    ) -> Result<Vec<RecommendationHit>, AppError> {
        let neighbors = self.recommender.neighbors(&query.title, query.k)?;
        let dataset = self.dataset();

        Ok(neighbors
            .into_iter()
            .enumerate()
            .map(|(position, neighbor)| RecommendationHit {
                rank: position + 1,
                index_id: neighbor.id,
                title: dataset.titles()[neighbor.id].clone(),
                genre: dataset.genres()[neighbor.id].clone(),
                score: neighbor.score,
            })
            .collect())
    }
}
