//! Clustering algorithms that produce [`ClusterData`](crate::ClusterData).
//!
//! ## Hierarchical (Agglomerative) Clustering
//!
//! Bottom-up: start with each point as its own cluster, repeatedly merge
//! the two closest clusters until the requested number remains.
//!
//! **Linkage methods** determine "distance between clusters":
//!
//! | Linkage | Distance | Effect |
//! |---------|----------|--------|
//! | Single | min(pairwise) | Chaining; elongated clusters |
//! | Complete | max(pairwise) | Compact, spherical clusters |
//! | Average | mean(pairwise) | Balanced compromise |
//! | Centroid | distance between means | Classic "merge closest centers" |
//! | Ward | Variance increase | Minimizes within-cluster variance |
//!
//! CURE sits between Single and Centroid: several representatives per
//! cluster instead of all points or one center. Its results are stored in
//! [`CureData`](crate::CureData).
//!
//! ## Usage
//!
//! ```rust
//! use cure_data::cluster::{Clustering, HierarchicalClustering};
//!
//! let data = vec![
//!     vec![0.0, 0.0],
//!     vec![0.1, 0.1],
//!     vec![10.0, 10.0],
//!     vec![10.1, 10.1],
//! ];
//!
//! let clusters = HierarchicalClustering::new(2).process(&data).unwrap();
//! assert_eq!(clusters.clusters(), &vec![vec![0, 1], vec![2, 3]]);
//! ```

mod hierarchical;
mod traits;

pub use hierarchical::{HierarchicalClustering, Linkage};
pub use traits::Clustering;
