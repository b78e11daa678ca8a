//! Hierarchical (agglomerative) clustering.
//!
//! Bottom-up clustering that iteratively merges the two closest clusters
//! until `n_clusters` remain.
//!
//! # Linkage Methods
//!
//! | Linkage | Formula | Effect |
//! |---------|---------|--------|
//! | Single | min(d(a,b)) for a∈A, b∈B | Chaining; elongated clusters |
//! | Complete | max(d(a,b)) | Compact, spherical clusters |
//! | Average | mean(d(a,b)) | Balanced compromise |
//! | Centroid | d(μₐ, μᵦ) | Merge the closest cluster centers |
//! | Ward | Δ variance | Minimizes within-cluster variance |
//!
//! Centroid linkage is the default: it is the classic formulation and the
//! baseline CURE improves on.
//!
//! # Complexity
//!
//! O(n²) space for the condensed distance matrix, O(n²)–O(n³) time
//! depending on linkage. Suitable for small-medium samples.

use super::traits::Clustering;
use crate::data::{ClusterData, Point};
use crate::error::{Error, Result};
use kodama::{linkage as kodama_linkage, Method as KodamaMethod};
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Linkage method for hierarchical clustering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Linkage {
    /// Single linkage: minimum distance between clusters.
    Single,
    /// Complete linkage: maximum distance between clusters.
    Complete,
    /// Average linkage: mean distance between clusters.
    Average,
    /// Centroid linkage: distance between cluster means.
    #[default]
    Centroid,
    /// Ward's method: minimize within-cluster variance.
    Ward,
}

impl Linkage {
    fn method(self) -> KodamaMethod {
        match self {
            Linkage::Single => KodamaMethod::Single,
            Linkage::Complete => KodamaMethod::Complete,
            Linkage::Average => KodamaMethod::Average,
            Linkage::Centroid => KodamaMethod::Centroid,
            Linkage::Ward => KodamaMethod::Ward,
        }
    }
}

/// Hierarchical (agglomerative) clustering.
#[derive(Debug, Clone)]
pub struct HierarchicalClustering {
    /// Number of clusters to produce.
    n_clusters: usize,
    /// Linkage method.
    linkage: Linkage,
}

impl HierarchicalClustering {
    /// Create a new hierarchical clusterer.
    pub fn new(n_clusters: usize) -> Self {
        Self {
            n_clusters,
            linkage: Linkage::default(),
        }
    }

    /// Set linkage method.
    pub fn with_linkage(mut self, linkage: Linkage) -> Self {
        self.linkage = linkage;
        self
    }

    /// Linkage method in use.
    pub fn linkage(&self) -> Linkage {
        self.linkage
    }

    fn check_input(&self, data: &[Point]) -> Result<()> {
        let Some(first) = data.first() else {
            return Err(Error::EmptyInput);
        };

        let d = first.len();
        if let Some(p) = data.iter().find(|p| p.len() != d) {
            return Err(Error::DimensionMismatch {
                expected: d,
                found: p.len(),
            });
        }
        if data.iter().flatten().any(|x| !x.is_finite()) {
            return Err(Error::InvalidParameter {
                name: "data",
                message: "coordinates must be finite",
            });
        }
        if self.n_clusters == 0 || self.n_clusters > data.len() {
            return Err(Error::InvalidClusterCount {
                requested: self.n_clusters,
                n_items: data.len(),
            });
        }
        Ok(())
    }
}

/// Condensed dissimilarity matrix (upper triangle, row-major).
/// Length is N-choose-2.
#[cfg(feature = "parallel")]
fn condensed(data: &[Point]) -> Vec<f64> {
    let n = data.len();
    (0..n.saturating_sub(1))
        .into_par_iter()
        .flat_map_iter(|row| {
            ((row + 1)..n).map(move |col| euclidean_distance(&data[row], &data[col]))
        })
        .collect()
}

/// Condensed dissimilarity matrix (upper triangle, row-major).
/// Length is N-choose-2.
#[cfg(not(feature = "parallel"))]
fn condensed(data: &[Point]) -> Vec<f64> {
    let n = data.len();
    let mut condensed = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for row in 0..n.saturating_sub(1) {
        for col in (row + 1)..n {
            condensed.push(euclidean_distance(&data[row], &data[col]));
        }
    }
    condensed
}

/// Euclidean distance between two points.
#[inline]
fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

/// Root of `id`, halving paths along the way.
fn find(parent: &mut [usize], mut id: usize) -> usize {
    while parent[id] != id {
        parent[id] = parent[parent[id]];
        id = parent[id];
    }
    id
}

impl Clustering for HierarchicalClustering {
    /// Clusters are ordered by their smallest member; members are ascending.
    fn process(&self, data: &[Point]) -> Result<ClusterData> {
        self.check_input(data)?;

        let n = data.len();
        debug!(
            n_points = n,
            n_clusters = self.n_clusters,
            linkage = ?self.linkage,
            "hierarchical clustering"
        );

        if self.n_clusters == n {
            return Ok(ClusterData::from_clusters((0..n).map(|i| vec![i]).collect()));
        }

        let mut dissimilarities = condensed(data);

        // kodama labels leaves 0..n-1; step i creates cluster n+i and only
        // refers to leaves or clusters created by earlier steps.
        let dend = kodama_linkage(&mut dissimilarities, n, self.linkage.method());

        let n_merges = n - self.n_clusters;
        let mut parent: Vec<usize> = (0..(2 * n - 1)).collect();
        for (i, step) in dend.steps().iter().take(n_merges).enumerate() {
            let merged = n + i;
            let a = find(&mut parent, step.cluster1);
            let b = find(&mut parent, step.cluster2);
            parent[a] = merged;
            parent[b] = merged;
        }

        let roots: Vec<usize> = (0..n).map(|leaf| find(&mut parent, leaf)).collect();
        let clusters = ClusterData::from_labels(&roots);
        debug!(sizes = ?clusters.sizes(), "hierarchical clustering done");

        Ok(clusters)
    }

    fn n_clusters(&self) -> usize {
        self.n_clusters
    }
}
