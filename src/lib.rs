//! # cure-data
//!
//! Result containers for the CURE clustering algorithm: per-cluster
//! representative points and mean points on top of generic cluster
//! membership.
//!
//! **Default build** includes an agglomerative producer of cluster
//! membership (`cluster` feature). The containers themselves carry no
//! algorithmic logic.

#[cfg(feature = "cluster")]
pub mod cluster;
pub mod data;
/// Error types used across `cure-data`.
pub mod error;

pub use data::{
    Cluster, ClusterData, ClusterSequence, CureCluster, CureData, Dataset, Point,
    RepresentorSequence, NOISE,
};
pub use error::{Error, Result};

#[cfg(feature = "cluster")]
pub use cluster::{Clustering, HierarchicalClustering, Linkage};
