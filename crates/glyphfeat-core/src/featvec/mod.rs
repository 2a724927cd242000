//! FeatureVector - Numeric feature array
//!
//! An ordered array of `f32` feature values produced for a single grid.
//! Most extractors emit integer counts, which `f32` represents exactly for
//! the grid sizes in play; the weighted zones extractor mixes in fractional
//! weights, which is why the element type is floating point.

/// Ordered array of feature values
///
/// `FeatureVector` manages a dynamic array of `f32` values. All vectors
/// produced by a single extractor configuration have identical length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureVector {
    data: Vec<f32>,
}

impl FeatureVector {
    /// Create a new empty feature vector
    pub fn new() -> Self {
        FeatureVector { data: Vec::new() }
    }

    /// Create a feature vector with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        FeatureVector {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Create a feature vector from a vector of values
    pub fn from_vec(data: Vec<f32>) -> Self {
        FeatureVector { data }
    }

    /// Create a feature vector from a slice of values
    pub fn from_slice(data: &[f32]) -> Self {
        FeatureVector {
            data: data.to_vec(),
        }
    }

    /// Get the number of values
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get a value by index
    #[inline]
    pub fn get(&self, index: usize) -> Option<f32> {
        self.data.get(index).copied()
    }

    /// Add a value to the end
    #[inline]
    pub fn push(&mut self, val: f32) {
        self.data.push(val);
    }

    /// Append all values from a slice
    pub fn extend_from_slice(&mut self, vals: &[f32]) {
        self.data.extend_from_slice(vals);
    }

    /// View the values as a slice
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Iterate over the values
    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        self.data.iter().copied()
    }
}

impl From<Vec<f32>> for FeatureVector {
    fn from(data: Vec<f32>) -> Self {
        FeatureVector { data }
    }
}
