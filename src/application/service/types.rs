//! Type definitions for the recommendation service.

use crate::domain::recommender::{DEFAULT_K, DEFAULT_MAX_K};
use serde::{Deserialize, Serialize};

/// Service configuration
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// k used when a request does not set one
    pub default_k: usize,
    /// Upper bound accepted for k
    pub max_k: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            default_k: DEFAULT_K,
            max_k: DEFAULT_MAX_K,
        }
    }
}

/// Raw recommendation request - used for parsing before validation
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecommendRequest {
    pub title: String,
    pub k: Option<usize>,
}

/// Validated recommendation query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRecommendQuery {
    /// Exact title of the selected item
    pub title: String,
    /// Number of recommendations, at least 1
    pub k: usize,
}

/// Error type for recommendation request validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecommendValidationError {
    #[error("title must not be empty")]
    EmptyTitle,
    #[error("k must be at least 1")]
    InvalidK,
    #[error("k must not exceed {max}, got {k}")]
    KTooLarge { k: usize, max: usize },
}

impl ValidatedRecommendQuery {
    /// Validate and construct a query from a raw request.
    ///
    /// The title is not trimmed: lookup is an exact match, so surrounding
    /// whitespace is part of what the caller selected.
    pub fn from_request(
        req: RecommendRequest,
        default_k: usize,
        max_k: usize,
    ) -> Result<Self, RecommendValidationError> {
        if req.title.trim().is_empty() {
            return Err(RecommendValidationError::EmptyTitle);
        }

        let k = req.k.unwrap_or(default_k);
        if k == 0 {
            return Err(RecommendValidationError::InvalidK);
        }
        if k > max_k {
            return Err(RecommendValidationError::KTooLarge { k, max: max_k });
        }

        Ok(Self {
            title: req.title,
            k,
        })
    }
}

/// One ranked recommendation with its score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationHit {
    /// 1-based position in the result
    pub rank: usize,
    pub index_id: usize,
    pub title: String,
    pub genre: String,
    pub score: f32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemSummary {
    pub index_id: usize,
    pub title: String,
    pub genre: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(title: &str, k: Option<usize>) -> RecommendRequest {
        RecommendRequest {
            title: title.to_string(),
            k,
        }
    }

    #[test]
    fn test_service_config_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.default_k, DEFAULT_K);
        assert_eq!(config.max_k, DEFAULT_MAX_K);
    }

    #[test]
    fn test_default_k_applied() {
        let query =
            ValidatedRecommendQuery::from_request(request("Monster", None), 10, 100).unwrap();
        assert_eq!(query.k, 10);
        assert_eq!(query.title, "Monster");
    }

    #[test]
    fn test_title_kept_verbatim() {
        let query =
            ValidatedRecommendQuery::from_request(request(" Monster ", Some(3)), 10, 100).unwrap();
        assert_eq!(query.title, " Monster ");
    }

    #[test]
    fn test_rejects_blank_title() {
        let err = ValidatedRecommendQuery::from_request(request("   ", None), 10, 100).unwrap_err();
        assert_eq!(err, RecommendValidationError::EmptyTitle);
    }

    #[test]
    fn test_rejects_zero_k() {
        let err = ValidatedRecommendQuery::from_request(request("Monster", Some(0)), 10, 100)
            .unwrap_err();
        assert_eq!(err, RecommendValidationError::InvalidK);
    }

    #[test]
    fn test_rejects_k_over_max() {
        let err = ValidatedRecommendQuery::from_request(request("Monster", Some(101)), 10, 100)
            .unwrap_err();
        assert_eq!(
            err,
            RecommendValidationError::KTooLarge { k: 101, max: 100 }
        );
        assert_eq!(err.to_string(), "k must not exceed 100, got 101");
    }
}
