//! Generic cluster membership.

use super::{Cluster, ClusterSequence, Dataset, Point};
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::ops::Index;

/// Label given to points that belong to no cluster.
pub const NOISE: usize = usize::MAX;

/// Allocated clusters, each an ordered list of input point indices.
///
/// Cluster `k` is `clusters()[k]`. Indexing with `data[k]` panics when `k`
/// is out of range, like a slice; use [`ClusterData::get`] or
/// [`ClusterData::cluster_checked`] for fallible access.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterData {
    clusters: ClusterSequence,
}

impl ClusterData {
    /// Create empty clustering data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing cluster sequence.
    pub fn from_clusters(clusters: ClusterSequence) -> Self {
        Self { clusters }
    }

    /// Build clusters from per-point labels.
    ///
    /// Points labelled [`NOISE`] are left out. Clusters are numbered in the
    /// order their label first appears, and members are listed in point order.
    pub fn from_labels(labels: &[usize]) -> Self {
        let mut slots: HashMap<usize, usize> = HashMap::new();
        let mut clusters: ClusterSequence = Vec::new();

        for (point, &label) in labels.iter().enumerate() {
            if label == NOISE {
                continue;
            }
            let slot = *slots.entry(label).or_insert_with(|| {
                clusters.push(Vec::new());
                clusters.len() - 1
            });
            clusters[slot].push(point);
        }

        Self { clusters }
    }

    /// The cluster sequence.
    pub fn clusters(&self) -> &ClusterSequence {
        &self.clusters
    }

    /// Mutable access to the cluster sequence, for producers.
    pub fn clusters_mut(&mut self) -> &mut ClusterSequence {
        &mut self.clusters
    }

    /// Append a cluster.
    pub fn push(&mut self, cluster: Cluster) {
        self.clusters.push(cluster);
    }

    /// Number of clusters.
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    /// Whether no cluster has been recorded.
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Cluster `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<&Cluster> {
        self.clusters.get(index)
    }

    /// Cluster `index`, failing with [`Error::IndexOutOfBounds`].
    pub fn cluster_checked(&self, index: usize) -> Result<&Cluster> {
        self.clusters.get(index).ok_or(Error::IndexOutOfBounds {
            index,
            len: self.clusters.len(),
        })
    }

    /// Total number of assigned point indices over all clusters.
    pub fn n_points(&self) -> usize {
        self.clusters.iter().map(Vec::len).sum()
    }

    /// Size of each cluster.
    pub fn sizes(&self) -> Vec<usize> {
        self.clusters.iter().map(Vec::len).collect()
    }

    /// Consume and return the cluster sequence.
    pub fn into_clusters(self) -> ClusterSequence {
        self.clusters
    }

    /// Per-point labels for a sample of `n_points` points.
    ///
    /// `labels[p]` is the cluster holding point `p`, or [`NOISE`] if no
    /// cluster holds it.
    ///
    /// # Errors
    ///
    /// - [`Error::IndexOutOfBounds`] if a member is `>= n_points`.
    /// - [`Error::DuplicateAssignment`] if a point is listed twice.
    pub fn to_labels(&self, n_points: usize) -> Result<Vec<usize>> {
        let mut labels = vec![NOISE; n_points];

        for (k, cluster) in self.clusters.iter().enumerate() {
            for &point in cluster {
                let slot = labels.get_mut(point).ok_or(Error::IndexOutOfBounds {
                    index: point,
                    len: n_points,
                })?;
                if *slot != NOISE {
                    return Err(Error::DuplicateAssignment { point });
                }
                *slot = k;
            }
        }

        Ok(labels)
    }

    /// Group the points of `data` by cluster.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] if a member does not index into `data`.
    pub fn to_objects(&self, data: &[Point]) -> Result<Vec<Dataset>> {
        self.clusters
            .iter()
            .map(|cluster| {
                cluster
                    .iter()
                    .map(|&point| {
                        data.get(point).cloned().ok_or(Error::IndexOutOfBounds {
                            index: point,
                            len: data.len(),
                        })
                    })
                    .collect()
            })
            .collect()
    }
}

impl Index<usize> for ClusterData {
    type Output = Cluster;

    fn index(&self, index: usize) -> &Cluster {
        &self.clusters[index]
    }
}

impl From<ClusterSequence> for ClusterData {
    fn from(clusters: ClusterSequence) -> Self {
        Self::from_clusters(clusters)
    }
}
