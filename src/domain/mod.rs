pub mod error;
pub mod model;
pub mod ports;
pub mod recommender;
pub mod types;
