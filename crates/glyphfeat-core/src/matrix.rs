//! FeatureMatrix - Ordered collection of feature vectors
//!
//! One feature vector per input grid, in dataset order. Row `i` of the
//! matrix is the feature vector extracted from grid `i`.

use crate::featvec::FeatureVector;

/// Ordered collection of feature vectors
///
/// `FeatureMatrix` preserves the dataset order 1:1; it is created fresh by
/// every `transform` call and handed to a downstream classifier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureMatrix {
    rows: Vec<FeatureVector>,
}

impl FeatureMatrix {
    /// Create a new empty matrix
    pub fn new() -> Self {
        FeatureMatrix { rows: Vec::new() }
    }

    /// Create a matrix with pre-allocated row capacity
    pub fn with_capacity(capacity: usize) -> Self {
        FeatureMatrix {
            rows: Vec::with_capacity(capacity),
        }
    }

    /// Get the number of rows
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get a row by index
    pub fn get(&self, index: usize) -> Option<&FeatureVector> {
        self.rows.get(index)
    }

    /// Append a row
    pub fn push(&mut self, row: FeatureVector) {
        self.rows.push(row);
    }

    /// Iterate over the rows
    pub fn iter(&self) -> impl Iterator<Item = &FeatureVector> {
        self.rows.iter()
    }

    /// Get the common row length, if all rows agree.
    ///
    /// Returns `Some(0)` for an empty matrix and `None` when rows have
    /// differing lengths.
    pub fn uniform_len(&self) -> Option<usize> {
        let Some(first) = self.rows.first() else {
            return Some(0);
        };
        let len = first.len();
        self.rows.iter().all(|r| r.len() == len).then_some(len)
    }
}
