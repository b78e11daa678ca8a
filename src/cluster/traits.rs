//! Clustering traits.

use crate::data::{ClusterData, Point};
use crate::error::Result;

/// Trait for clustering algorithms that allocate points to clusters.
pub trait Clustering {
    /// Run the algorithm and return the allocated clusters.
    fn process(&self, data: &[Point]) -> Result<ClusterData>;

    /// Get the number of clusters.
    fn n_clusters(&self) -> usize;

    /// Run the algorithm and return one cluster label per input point.
    fn fit_predict(&self, data: &[Point]) -> Result<Vec<usize>> {
        self.process(data)?.to_labels(data.len())
    }
}
