use crate::domain::error::DatasetError;
use crate::domain::types::ItemId;
use ndarray::{Array2, ArrayView1};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Immutable item catalogue plus its precomputed pairwise similarity matrix.
///
/// `titles[i]`, `genres[i]` and row/column `i` of `similarity` all describe
/// the same item. The invariants are checked once in [`Dataset::new`] /
/// [`Dataset::from_matrix`]; everything downstream relies on them.
#[derive(Debug, Clone)]
pub struct Dataset {
    titles: Vec<String>,
    genres: Vec<String>,
    similarity: Array2<f32>,
    positions: HashMap<String, ItemId>,
}

/// Borrowed view of a single item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item<'a> {
    pub id: ItemId,
    pub title: &'a str,
    pub genre: &'a str,
}

/// One recommended item as handed to presentation layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub genre: String,
}

impl Dataset {
    /// Build a dataset from row vectors, validating every invariant.
    pub fn new(
        titles: Vec<String>,
        genres: Vec<String>,
        similarity: Vec<Vec<f32>>,
    ) -> Result<Self, DatasetError> {
        let n = titles.len();
        if similarity.len() != n {
            return Err(DatasetError::RowCountMismatch {
                expected: n,
                rows: similarity.len(),
            });
        }
        if let Some((row, values)) = similarity
            .iter()
            .enumerate()
            .find(|(_, values)| values.len() != n)
        {
            return Err(DatasetError::RowLengthMismatch {
                row,
                expected: n,
                len: values.len(),
            });
        }

        let matrix = Array2::from_shape_fn((n, n), |(i, j)| similarity[i][j]);
        Self::from_matrix(titles, genres, matrix)
    }

    /// Build a dataset from an already shaped matrix.
    pub fn from_matrix(
        titles: Vec<String>,
        genres: Vec<String>,
        similarity: Array2<f32>,
    ) -> Result<Self, DatasetError> {
        let n = titles.len();
        if genres.len() != n {
            return Err(DatasetError::GenreCountMismatch {
                titles: n,
                genres: genres.len(),
            });
        }
        let (rows, cols) = similarity.dim();
        if rows != n {
            return Err(DatasetError::RowCountMismatch { expected: n, rows });
        }
        if cols != n {
            return Err(DatasetError::RowLengthMismatch {
                row: 0,
                expected: n,
                len: cols,
            });
        }
        if let Some(((row, col), _)) = similarity.indexed_iter().find(|(_, v)| !v.is_finite()) {
            return Err(DatasetError::NonFiniteScore { row, col });
        }

        let mut positions = HashMap::with_capacity(n);
        for (id, title) in titles.iter().enumerate() {
            if let Some(&first) = positions.get(title) {
                return Err(DatasetError::DuplicateTitle {
                    title: title.clone(),
                    first,
                    second: id,
                });
            }
            positions.insert(title.clone(), id);
        }

        Ok(Self {
            titles,
            genres,
            similarity,
            positions,
        })
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    pub fn similarity(&self) -> &Array2<f32> {
        &self.similarity
    }

    /// Exact, case-sensitive title lookup.
    pub fn position(&self, title: &str) -> Option<ItemId> {
        self.positions.get(title).copied()
    }

    pub fn item(&self, id: ItemId) -> Option<Item<'_>> {
        Some(Item {
            id,
            title: self.titles.get(id)?,
            genre: self.genres.get(id)?,
        })
    }

    /// Similarity row of `id`. Panics if `id` is out of range.
    pub fn row(&self, id: ItemId) -> ArrayView1<'_, f32> {
        self.similarity.row(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = Item<'_>> + '_ {
        self.titles
            .iter()
            .zip(self.genres.iter())
            .enumerate()
            .map(|(id, (title, genre))| Item { id, title, genre })
    }
}
