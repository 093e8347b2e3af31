//! Application configuration loaded from environment variables.

use crate::application::service::ServiceConfig;
use crate::domain::recommender::{DEFAULT_K, DEFAULT_MAX_K};
use crate::infrastructure::storage::DatasetFormat;
use std::env;
use std::path::PathBuf;
use thiserror::Error;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP server address
    pub addr: String,
    /// Path to the persisted dataset
    pub dataset_path: PathBuf,
    /// Encoding of the dataset file
    pub dataset_format: DatasetFormat,
    /// k used when a request omits it
    pub default_k: usize,
    /// Largest k a request may ask for
    pub max_k: usize,
}

/// Error type for configuration validation
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `ANIREC_ADDR`: Server address (default: "127.0.0.1:8080")
    /// - `ANIREC_DATASET_PATH`: Dataset file (default: "data/anime_recommendations.json")
    /// - `ANIREC_DATASET_FORMAT`: `json` or `binary` (default: inferred from the extension)
    /// - `ANIREC_DEFAULT_K`: Recommendations per request when unspecified (default: 10)
    /// - `ANIREC_MAX_K`: Upper bound for k (default: 100)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`], reading values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr = lookup("ANIREC_ADDR").unwrap_or_else(|| "127.0.0.1:8080".to_string());
        let dataset_path = lookup("ANIREC_DATASET_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("data/anime_recommendations.json"));

        let dataset_format = match lookup("ANIREC_DATASET_FORMAT") {
            Some(raw) => raw.parse::<DatasetFormat>().map_err(|err| {
                ConfigError::InvalidValue(format!("ANIREC_DATASET_FORMAT: {}", err))
            })?,
            None => DatasetFormat::infer(&dataset_path),
        };

        let default_k = parse_usize(&lookup, "ANIREC_DEFAULT_K")?.unwrap_or(DEFAULT_K);
        let max_k = parse_usize(&lookup, "ANIREC_MAX_K")?.unwrap_or(DEFAULT_MAX_K.max(default_k));

        if default_k == 0 {
            return Err(ConfigError::InvalidValue(
                "ANIREC_DEFAULT_K must be at least 1".to_string(),
            ));
        }
        if max_k < default_k {
            return Err(ConfigError::InvalidValue(format!(
                "ANIREC_MAX_K ({}) must not be smaller than ANIREC_DEFAULT_K ({})",
                max_k, default_k
            )));
        }

        Ok(Self {
            addr,
            dataset_path,
            dataset_format,
            default_k,
            max_k,
        })
    }

    /// Build ServiceConfig from AppConfig
    pub fn service_config(&self) -> ServiceConfig {
        ServiceConfig {
            default_k: self.default_k,
            max_k: self.max_k,
        }
    }

    pub fn log(&self) {
        tracing::info!(
            addr = %self.addr,
            dataset = %self.dataset_path.display(),
            format = ?self.dataset_format,
            default_k = self.default_k,
            max_k = self.max_k,
            "configuration loaded"
        );
    }
}

fn parse_usize<F>(lookup: &F, key: &str) -> Result<Option<usize>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    match raw.trim().parse::<usize>() {
        Ok(value) => Ok(Some(value)),
        Err(_) => {
            let message = format!("{} must be an integer, got {:?}", key, raw);
            Err(ConfigError::InvalidValue(message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.addr, "127.0.0.1:8080");
        assert_eq!(
            config.dataset_path,
            PathBuf::from("data/anime_recommendations.json")
        );
        assert_eq!(config.dataset_format, DatasetFormat::Json);
        assert_eq!(config.default_k, 10);
        assert_eq!(config.max_k, 100);
    }

    #[test]
    fn test_binary_inferred_from_path() {
        let config = config(&[("ANIREC_DATASET_PATH", "data/anime.bin")]).unwrap();
        assert_eq!(config.dataset_format, DatasetFormat::Binary);
    }

    #[test]
    fn test_explicit_format_wins() {
        let config = config(&[
            ("ANIREC_DATASET_PATH", "data/anime.bin"),
            ("ANIREC_DATASET_FORMAT", "json"),
        ])
        .unwrap();
        assert_eq!(config.dataset_format, DatasetFormat::Json);
    }

    #[test]
    fn test_unknown_format_rejected() {
        let err = config(&[("ANIREC_DATASET_FORMAT", "pickle")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
    }

    #[test]
    fn test_invalid_k_values() {
        assert!(matches!(
            config(&[("ANIREC_DEFAULT_K", "0")]),
            Err(ConfigError::InvalidValue(_))
        ));
        assert!(matches!(
            config(&[("ANIREC_DEFAULT_K", "ten")]),
            Err(ConfigError::InvalidValue(_))
        ));
        assert!(matches!(
            config(&[("ANIREC_DEFAULT_K", "20"), ("ANIREC_MAX_K", "5")]),
            Err(ConfigError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_large_default_raises_implicit_max() {
        let config = config(&[("ANIREC_DEFAULT_K", "250")]).unwrap();
        assert_eq!(config.max_k, 250);
        let service = config.service_config();
        assert_eq!(service.default_k, 250);
        assert_eq!(service.max_k, 250);
    }
}
