use thiserror::Error;

/// Dataset invariant violations, raised once when a dataset is constructed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DatasetError {
    #[error("genres length ({genres}) does not match titles length ({titles})")]
    GenreCountMismatch { titles: usize, genres: usize },
    #[error("similarity matrix has {rows} rows, expected {expected}")]
    RowCountMismatch { expected: usize, rows: usize },
    #[error("similarity row {row} has {len} columns, expected {expected}")]
    RowLengthMismatch {
        row: usize,
        expected: usize,
        len: usize,
    },
    #[error("duplicate title {title:?} at positions {first} and {second}")]
    DuplicateTitle {
        title: String,
        first: usize,
        second: usize,
    },
    #[error("similarity[{row}][{col}] is not a finite number")]
    NonFiniteScore { row: usize, col: usize },
}

/// Query-time failure of the recommender.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecommendError {
    #[error("title not found: {title}")]
    NotFound { title: String },
}

/// Failure while reading a persisted dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed dataset {path}: {message}")]
    Malformed { path: String, message: String },
    #[error("invalid dataset {path}: {source}")]
    Invalid {
        path: String,
        #[source]
        source: DatasetError,
    },
}
