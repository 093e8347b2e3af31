use crate::domain::error::LoadError;
use crate::domain::model::Dataset;
use crate::domain::ports::DatasetSource;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk JSON layout: three parallel arrays.
#[derive(Debug, Serialize, Deserialize)]
struct RawDataset {
    titles: Vec<String>,
    genres: Vec<String>,
    #[serde(alias = "similarity")]
    cosine_sim: Vec<Vec<f32>>,
}

pub struct JsonDatasetSource {
    path: PathBuf,
}

impl JsonDatasetSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn save(&self, dataset: &Dataset) -> Result<(), LoadError> {
        let raw = RawDataset {
            titles: dataset.titles().to_vec(),
            genres: dataset.genres().to_vec(),
            cosine_sim: dataset
                .similarity()
                .rows()
                .into_iter()
                .map(|row| row.to_vec())
                .collect(),
        };
        let bytes = serde_json::to_vec(&raw).map_err(|err| LoadError::Malformed {
            path: self.path.display().to_string(),
            message: err.to_string(),
        })?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }
        fs::write(&self.path, bytes).map_err(|source| self.io_error(source))
    }

    fn io_error(&self, source: std::io::Error) -> LoadError {
        LoadError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl DatasetSource for JsonDatasetSource {
    fn load(&self) -> Result<Dataset, LoadError> {
        let bytes = fs::read(&self.path).map_err(|source| self.io_error(source))?;
        let raw: RawDataset =
            serde_json::from_slice(&bytes).map_err(|err| LoadError::Malformed {
                path: self.path.display().to_string(),
                message: err.to_string(),
            })?;
        Dataset::new(raw.titles, raw.genres, raw.cosine_sim).map_err(|source| {
            LoadError::Invalid {
                path: self.path.display().to_string(),
                source,
            }
        })
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
