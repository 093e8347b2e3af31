use crate::domain::error::LoadError;
use crate::domain::model::Dataset;
use std::path::Path;

/// Supplies a validated dataset from persistent storage.
pub trait DatasetSource: Send + Sync {
    /// Read and validate the dataset
    fn load(&self) -> Result<Dataset, LoadError>;
    /// Get the storage path
    fn path(&self) -> &Path;
}
