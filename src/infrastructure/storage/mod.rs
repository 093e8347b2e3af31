pub mod file;
pub mod json;

pub use file::BinaryDatasetSource;
pub use json::JsonDatasetSource;

use crate::domain::ports::DatasetSource;
use std::path::Path;
use std::str::FromStr;

/// Persisted dataset encodings understood by the loaders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Json,
    Binary,
}

impl DatasetFormat {
    /// `.bin` means a binary snapshot; anything else is read as JSON.
    pub fn infer(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("bin") => Self::Binary,
            _ => Self::Json,
        }
    }
}

impl FromStr for DatasetFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "binary" | "bin" => Ok(Self::Binary),
            other => Err(format!("unknown dataset format: {}", other)),
        }
    }
}

pub fn open_dataset_source(path: &Path, format: DatasetFormat) -> Box<dyn DatasetSource> {
    match format {
        DatasetFormat::Json => Box::new(JsonDatasetSource::new(path)),
        DatasetFormat::Binary => Box::new(BinaryDatasetSource::new(path)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_from_extension() {
        let cases = [
            ("data/anime.bin", DatasetFormat::Binary),
            ("data/anime.BIN", DatasetFormat::Binary),
            ("data/anime.json", DatasetFormat::Json),
            ("anime", DatasetFormat::Json),
        ];
        for (path, expected) in cases {
            assert_eq!(DatasetFormat::infer(Path::new(path)), expected);
        }
    }

    #[test]
    fn test_parse_format() {
        assert_eq!("JSON".parse::<DatasetFormat>(), Ok(DatasetFormat::Json));
        assert_eq!("bin".parse::<DatasetFormat>(), Ok(DatasetFormat::Binary));
        assert!("pickle".parse::<DatasetFormat>().is_err());
    }

    #[test]
    fn test_open_keeps_path() {
        let source = open_dataset_source(Path::new("x/anime.bin"), DatasetFormat::Binary);
        assert_eq!(source.path(), Path::new("x/anime.bin"));
    }
}
