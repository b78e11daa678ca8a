//! Clustering result containers.
//!
//! Two layers:
//!
//! - [`ClusterData`]: which input points belong to which cluster. Every
//!   clustering algorithm produces one of these.
//! - [`CureData`]: CURE results. Wraps a [`ClusterData`] and adds, per
//!   cluster, a set of **representative points** and a **mean point**.
//!
//! ```text
//! cluster │ members      │ representatives          │ mean
//! ────────┼──────────────┼──────────────────────────┼────────────
//!    0    │ [0, 1, 4]    │ [[1.0, 2.0], [3.4, 4.0]] │ [2.2, 3.0]
//!    1    │ [2, 3]       │ [[7.5, 6.3], [-1.4,-4.7]]│ [3.05, 0.8]
//! ```
//!
//! Index `i` in every collection refers to cluster `i`.
//!
//! ## Encodings
//!
//! Membership can be viewed three ways:
//!
//! | Encoding | Shape | Produced by |
//! |----------|-------|-------------|
//! | Index lists | `clusters[k] = [point, ...]` | [`ClusterData::clusters`] |
//! | Labels | `labels[point] = k` | [`ClusterData::to_labels`] |
//! | Objects | `objects[k] = [coords, ...]` | [`ClusterData::to_objects`] |
//!
//! ## Usage
//!
//! ```rust
//! use cure_data::CureData;
//!
//! let mut result = CureData::new();
//! result
//!     .add_cluster(vec![0, 1], vec![vec![1.0, 2.0], vec![3.4, 4.0]], vec![2.2, 3.0])
//!     .unwrap();
//!
//! assert_eq!(result.n_clusters(), 1);
//! assert_eq!(result.means()[0], vec![2.2, 3.0]);
//! // Membership operations are available directly.
//! assert_eq!(result.n_points(), 2);
//! ```

mod cluster_data;
mod cure_data;

pub use cluster_data::{ClusterData, NOISE};
pub use cure_data::{CureCluster, CureData};

/// A point: fixed-length numeric vector.
pub type Point = Vec<f64>;

/// An ordered collection of points.
pub type Dataset = Vec<Point>;

/// Representative points of each cluster, indexed by cluster.
pub type RepresentorSequence = Vec<Dataset>;

/// Indices of the input points that form one cluster.
pub type Cluster = Vec<usize>;

/// Clusters indexed by cluster number.
pub type ClusterSequence = Vec<Cluster>;
