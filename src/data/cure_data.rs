//! CURE clustering results.
//!
//! CURE (Guha, Rastogi & Shim, 1998) describes each cluster by a handful of
//! well-scattered **representative points** shrunk toward the cluster
//! **mean**, rather than by the mean alone. This lets it follow elongated or
//! non-spherical clusters that centroid methods split apart.
//!
//! [`CureData`] is what a CURE run hands back: membership plus, for each
//! cluster, its representative set and its mean.

use super::{Cluster, ClusterData, Dataset, Point, RepresentorSequence};
use crate::error::{Error, Result};
use std::ops::{Deref, DerefMut};
use tracing::trace;

/// Clustering results of CURE: membership, representative points and means.
///
/// Cluster index `i` addresses `representatives()[i]`, `means()[i]` and,
/// when membership is recorded, `clusters()[i]`.
///
/// Producers either push through [`CureData::representatives_mut`] and
/// [`CureData::means_mut`] (the two may be out of step while a cluster is
/// being written) or use [`CureData::add_cluster`], which appends to every
/// collection at once. [`CureData::validate`] checks the finished result.
///
/// Membership operations of [`ClusterData`] are available directly through
/// `Deref`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CureData {
    base: ClusterData,
    representatives: RepresentorSequence,
    means: Dataset,
}

/// Borrowed view of a single CURE cluster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CureCluster<'a> {
    /// Cluster index.
    pub index: usize,
    /// Member point indices, if membership was recorded.
    pub members: Option<&'a [usize]>,
    /// Representative points.
    pub representatives: &'a [Point],
    /// Mean point.
    pub mean: &'a [f64],
}

impl CureData {
    /// Create empty clustering data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Representative points of each cluster.
    ///
    /// An example for two clusters:
    /// `[[[1.0, 2.0], [3.4, 4.0]], [[7.5, 6.3], [-1.4, -4.7]]]`, where the
    /// first pair belongs to cluster 0 and the second to cluster 1.
    pub fn representatives(&self) -> &RepresentorSequence {
        &self.representatives
    }

    /// Mutable access to the representative points, for producers.
    pub fn representatives_mut(&mut self) -> &mut RepresentorSequence {
        &mut self.representatives
    }

    /// Mean point of each cluster.
    ///
    /// An example for three clusters: `[[1.0, 2.0], [3.4, 4.0], [7.0, 9.1]]`.
    pub fn means(&self) -> &Dataset {
        &self.means
    }

    /// Mutable access to the means, for producers.
    pub fn means_mut(&mut self) -> &mut Dataset {
        &mut self.means
    }

    /// Membership data.
    pub fn base(&self) -> &ClusterData {
        &self.base
    }

    /// Mutable membership data.
    pub fn base_mut(&mut self) -> &mut ClusterData {
        &mut self.base
    }

    /// Number of clusters with a recorded mean.
    pub fn n_clusters(&self) -> usize {
        self.means.len()
    }

    /// Whether nothing has been recorded in any collection.
    pub fn is_empty(&self) -> bool {
        self.base.is_empty() && self.representatives.is_empty() && self.means.is_empty()
    }

    /// Dimension of the stored points, taken from the first mean.
    pub fn dimension(&self) -> Option<usize> {
        self.means.first().map(Vec::len)
    }

    /// Append one finished cluster to membership, representatives and means.
    ///
    /// An empty `members` list is allowed only while no membership has been
    /// recorded, so results that carry no membership stay consistent.
    ///
    /// # Errors
    ///
    /// - [`Error::LengthMismatch`] / [`Error::MembershipMismatch`] if the
    ///   collections are already out of step.
    /// - [`Error::EmptyRepresentatives`] if `representatives` is empty.
    /// - [`Error::DimensionMismatch`] if a point's length differs from the
    ///   mean's, or the mean's from previously stored points.
    ///
    /// Nothing is modified on error.
    pub fn add_cluster(
        &mut self,
        members: Cluster,
        representatives: Dataset,
        mean: Point,
    ) -> Result<()> {
        self.check_lengths()?;

        let index = self.means.len();
        if representatives.is_empty() {
            return Err(Error::EmptyRepresentatives { cluster: index });
        }

        let expected = self.dimension().unwrap_or(mean.len());
        if mean.len() != expected {
            return Err(Error::DimensionMismatch {
                expected,
                found: mean.len(),
            });
        }
        if let Some(p) = representatives.iter().find(|p| p.len() != expected) {
            return Err(Error::DimensionMismatch {
                expected,
                found: p.len(),
            });
        }

        let track_members = !self.base.is_empty() || !members.is_empty();
        if track_members && self.base.len() != index {
            return Err(Error::MembershipMismatch {
                clusters: self.base.len(),
                means: index,
            });
        }

        trace!(
            cluster = index,
            members = members.len(),
            representatives = representatives.len(),
            "adding CURE cluster"
        );

        if track_members {
            self.base.push(members);
        }
        self.representatives.push(representatives);
        self.means.push(mean);
        Ok(())
    }

    /// Check the completed-population contract.
    ///
    /// Representative sets and means have equal length, membership is
    /// either empty or of the same length, every cluster has at least one
    /// representative, and all points share one dimension.
    pub fn validate(&self) -> Result<()> {
        self.check_lengths()?;

        if let Some(cluster) = self.representatives.iter().position(Vec::is_empty) {
            return Err(Error::EmptyRepresentatives { cluster });
        }

        let Some(expected) = self.dimension() else {
            return Ok(());
        };
        let points = self
            .means
            .iter()
            .chain(self.representatives.iter().flatten());
        for p in points {
            if p.len() != expected {
                return Err(Error::DimensionMismatch {
                    expected,
                    found: p.len(),
                });
            }
        }

        Ok(())
    }

    fn check_lengths(&self) -> Result<()> {
        if self.representatives.len() != self.means.len() {
            return Err(Error::LengthMismatch {
                representatives: self.representatives.len(),
                means: self.means.len(),
            });
        }
        if !self.base.is_empty() && self.base.len() != self.means.len() {
            return Err(Error::MembershipMismatch {
                clusters: self.base.len(),
                means: self.means.len(),
            });
        }
        Ok(())
    }

    /// View of cluster `index`, or `None` if either CURE collection lacks it.
    pub fn cluster(&self, index: usize) -> Option<CureCluster<'_>> {
        let representatives = self.representatives.get(index)?;
        let mean = self.means.get(index)?;
        Some(CureCluster {
            index,
            members: self.base.get(index).map(Vec::as_slice),
            representatives,
            mean,
        })
    }

    /// Iterate over cluster views in index order.
    pub fn iter(&self) -> impl Iterator<Item = CureCluster<'_>> + '_ {
        let n = self.representatives.len().min(self.means.len());
        (0..n).filter_map(move |i| self.cluster(i))
    }

    /// Consume into membership, representatives and means.
    pub fn into_parts(self) -> (ClusterData, RepresentorSequence, Dataset) {
        (self.base, self.representatives, self.means)
    }
}

impl Deref for CureData {
    type Target = ClusterData;

    fn deref(&self) -> &ClusterData {
        &self.base
    }
}

impl DerefMut for CureData {
    fn deref_mut(&mut self) -> &mut ClusterData {
        &mut self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn two_clusters() -> CureData {
        let mut data = CureData::new();
        data.representatives_mut()
            .push(vec![vec![1.0, 2.0], vec![3.4, 4.0]]);
        data.means_mut().push(vec![2.2, 3.0]);
        data.representatives_mut()
            .push(vec![vec![7.5, 6.3], vec![-1.4, -4.7]]);
        data.means_mut().push(vec![3.05, 0.8]);
        data
    }

    #[test]
    fn test_default_is_empty() {
        let data = CureData::new();
        assert!(data.representatives().is_empty());
        assert!(data.means().is_empty());
        assert!(data.is_empty());
        assert_eq!(data.n_clusters(), 0);
        assert_eq!(data.dimension(), None);
        assert!(data.validate().is_ok());
    }

    #[test]
    fn test_two_cluster_example() {
        let data = two_clusters();

        assert_eq!(
            data.representatives(),
            &vec![
                vec![vec![1.0, 2.0], vec![3.4, 4.0]],
                vec![vec![7.5, 6.3], vec![-1.4, -4.7]],
            ]
        );
        assert_eq!(data.means(), &vec![vec![2.2, 3.0], vec![3.05, 0.8]]);
        assert_eq!(data.n_clusters(), 2);
        assert_eq!(data.dimension(), Some(2));
        assert!(data.validate().is_ok());
    }

    #[test]
    fn test_accessor_identity_is_stable() {
        let data = two_clusters();
        let a = data.representatives() as *const RepresentorSequence;
        let b = data.representatives() as *const RepresentorSequence;
        assert_eq!(a, b);
        assert!(std::ptr::eq(data.means(), data.means()));
        assert_eq!(data.means(), data.means());
    }

    #[test]
    fn test_clone_is_independent() {
        let original = two_clusters();
        let mut copy = original.clone();
        assert_eq!(copy, original);

        copy.means_mut()[0][0] = 100.0;
        copy.representatives_mut()[1].push(vec![0.0, 0.0]);

        assert_eq!(original.means()[0], vec![2.2, 3.0]);
        assert_eq!(original.representatives()[1].len(), 2);
        assert_ne!(copy, original);
    }

    #[test]
    fn test_take_leaves_source_empty() {
        let mut source = two_clusters();
        let expected = source.clone();

        let moved = std::mem::take(&mut source);

        assert_eq!(moved, expected);
        assert!(source.is_empty());
    }

    #[test]
    fn test_add_cluster_grows_in_step() {
        let mut data = CureData::new();
        data.add_cluster(vec![0, 1], vec![vec![0.0, 0.0]], vec![0.5, 0.5])
            .unwrap();
        data.add_cluster(vec![2], vec![vec![9.0, 9.0], vec![8.0, 8.0]], vec![8.5, 8.5])
            .unwrap();

        assert_eq!(data.len(), 2);
        assert_eq!(data.representatives().len(), 2);
        assert_eq!(data.means().len(), 2);
        assert_eq!(data.to_labels(3).unwrap(), vec![0, 0, 1]);
        assert!(data.validate().is_ok());
    }

    #[test]
    fn test_add_cluster_without_membership() {
        let mut data = CureData::new();
        data.add_cluster(Vec::new(), vec![vec![1.0]], vec![1.0]).unwrap();
        data.add_cluster(Vec::new(), vec![vec![2.0]], vec![2.0]).unwrap();
        assert!(data.base().is_empty());
        assert_eq!(data.n_clusters(), 2);
        assert!(data.cluster(1).unwrap().members.is_none());
    }

    #[test]
    fn test_add_cluster_rejects_empty_representatives() {
        let mut data = CureData::new();
        let err = data.add_cluster(vec![0], Vec::new(), vec![0.0]).unwrap_err();
        assert_eq!(err, Error::EmptyRepresentatives { cluster: 0 });
        assert!(data.is_empty());
    }

    #[test]
    fn test_add_cluster_rejects_dimension_mismatch() {
        let mut data = CureData::new();
        let err = data
            .add_cluster(vec![0], vec![vec![1.0, 2.0, 3.0]], vec![1.0, 2.0])
            .unwrap_err();
        assert_eq!(err, Error::DimensionMismatch { expected: 2, found: 3 });

        data.add_cluster(vec![0], vec![vec![1.0, 2.0]], vec![1.0, 2.0])
            .unwrap();
        let err = data
            .add_cluster(vec![1], vec![vec![1.0]], vec![1.0])
            .unwrap_err();
        assert_eq!(err, Error::DimensionMismatch { expected: 2, found: 1 });
        assert_eq!(data.n_clusters(), 1);
    }

    #[test]
    fn test_add_cluster_after_transient_mismatch() {
        let mut data = CureData::new();
        data.representatives_mut().push(vec![vec![1.0]]);
        let err = data.add_cluster(vec![], vec![vec![2.0]], vec![2.0]).unwrap_err();
        assert_eq!(
            err,
            Error::LengthMismatch {
                representatives: 1,
                means: 0
            }
        );

        // Completing the half-written cluster restores the contract.
        data.means_mut().push(vec![1.0]);
        assert!(data.validate().is_ok());
    }

    #[test]
    fn test_add_cluster_membership_mismatch() {
        let mut data = CureData::new();
        data.add_cluster(Vec::new(), vec![vec![1.0]], vec![1.0]).unwrap();
        let err = data.add_cluster(vec![3], vec![vec![2.0]], vec![2.0]).unwrap_err();
        assert_eq!(err, Error::MembershipMismatch { clusters: 0, means: 1 });
    }

    #[test]
    fn test_validate_detects_problems() {
        let mut data = two_clusters();
        data.means_mut().pop();
        assert_eq!(
            data.validate(),
            Err(Error::LengthMismatch {
                representatives: 2,
                means: 1
            })
        );

        let mut data = two_clusters();
        data.representatives_mut()[1].clear();
        assert_eq!(data.validate(), Err(Error::EmptyRepresentatives { cluster: 1 }));

        let mut data = two_clusters();
        data.representatives_mut()[0][1].push(5.0);
        assert_eq!(
            data.validate(),
            Err(Error::DimensionMismatch { expected: 2, found: 3 })
        );

        let mut data = two_clusters();
        data.push(vec![0, 1]);
        assert_eq!(
            data.validate(),
            Err(Error::MembershipMismatch { clusters: 1, means: 2 })
        );
    }

    #[test]
    fn test_cluster_views() {
        let mut data = two_clusters();
        data.clusters_mut().extend([vec![0, 3], vec![1, 2]]);

        let view = data.cluster(1).unwrap();
        assert_eq!(view.index, 1);
        assert_eq!(view.members, Some(&[1usize, 2][..]));
        assert_eq!(view.mean, &[3.05, 0.8][..]);
        assert_eq!(view.representatives.len(), 2);
        assert!(data.cluster(2).is_none());

        let indices: Vec<usize> = data.iter().map(|c| c.index).collect();
        assert_eq!(indices, vec![0, 1]);
    }

    #[test]
    fn test_into_parts() {
        let mut data = two_clusters();
        data.clusters_mut().extend([vec![0], vec![1]]);
        let (base, reps, means) = data.into_parts();
        assert_eq!(base.len(), 2);
        assert_eq!(reps.len(), 2);
        assert_eq!(means[1], vec![3.05, 0.8]);
    }

    proptest! {
        #[test]
        fn appended_clusters_keep_lengths_equal(
            clusters in proptest::collection::vec(
                (proptest::collection::vec(proptest::collection::vec(-1e3f64..1e3, 3), 1..5),
                 proptest::collection::vec(-1e3f64..1e3, 3)),
                0..20,
            )
        ) {
            let mut data = CureData::new();
            for (reps, mean) in &clusters {
                data.representatives_mut().push(reps.clone());
                data.means_mut().push(mean.clone());
            }

            prop_assert_eq!(data.representatives().len(), clusters.len());
            prop_assert_eq!(data.means().len(), clusters.len());
            prop_assert!(data.validate().is_ok());
            for (i, (reps, mean)) in clusters.iter().enumerate() {
                prop_assert_eq!(&data.representatives()[i], reps);
                prop_assert_eq!(&data.means()[i], mean);
            }
        }
    }
}
