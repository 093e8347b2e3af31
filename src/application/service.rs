//! Recommendation service: validated requests in, ranked hits out.

mod core;
mod load;
mod read;
mod recommend;
mod traits;
mod types;


pub use self::core::RecommendService;
pub use traits::{ItemRead, ItemRecommend, RecommendDefaults};
pub use types::{
    ItemSummary, RecommendRequest, RecommendValidationError, RecommendationHit, ServiceConfig,
    ValidatedRecommendQuery,
};
