//! Item-to-item recommendations over a precomputed similarity matrix.
//!
//! - `domain`: dataset model, top-k ranking, ports and errors
//! - `application`: configuration and the recommendation service
//! - `infrastructure`: dataset loaders (JSON, binary snapshot)
//! - `interface`: HTTP API

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

pub use crate::domain::error::{DatasetError, LoadError, RecommendError};
pub use crate::domain::model::{Dataset, Recommendation};
pub use crate::domain::recommender::{recommend, Recommender, DEFAULT_K, DEFAULT_MAX_K};
pub use crate::domain::types::{ItemId, Neighbor};
