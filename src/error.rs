use core::fmt;

/// Result alias for `cure-data`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by cluster containers and producers.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Input was empty.
    EmptyInput,

    /// Point dimension mismatch.
    DimensionMismatch {
        /// Expected dimension.
        expected: usize,
        /// Found dimension.
        found: usize,
    },

    /// Invalid number of clusters requested.
    InvalidClusterCount {
        /// Requested count.
        requested: usize,
        /// Number of items.
        n_items: usize,
    },

    /// Invalid parameter value.
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Error message.
        message: &'static str,
    },

    /// Representative sets and means are out of step.
    LengthMismatch {
        /// Number of representative sets.
        representatives: usize,
        /// Number of means.
        means: usize,
    },

    /// Membership was recorded for a different number of clusters than the means.
    MembershipMismatch {
        /// Number of membership clusters.
        clusters: usize,
        /// Number of means.
        means: usize,
    },

    /// A cluster has no representative points.
    EmptyRepresentatives {
        /// Cluster index.
        cluster: usize,
    },

    /// Index outside of the addressed collection.
    IndexOutOfBounds {
        /// Offending index.
        index: usize,
        /// Length of the collection.
        len: usize,
    },

    /// A point index appears in more than one place of a cluster sequence.
    DuplicateAssignment {
        /// Point index.
        point: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyInput => write!(f, "empty input provided"),
            Error::DimensionMismatch { expected, found } => {
                write!(f, "dimension mismatch: expected {expected}, found {found}")
            }
            Error::InvalidClusterCount { requested, n_items } => {
                write!(f, "cannot create {requested} clusters from {n_items} items")
            }
            Error::InvalidParameter { name, message } => {
                write!(f, "invalid parameter '{name}': {message}")
            }
            Error::LengthMismatch {
                representatives,
                means,
            } => write!(
                f,
                "{representatives} representative sets recorded for {means} means"
            ),
            Error::MembershipMismatch { clusters, means } => {
                write!(f, "membership holds {clusters} clusters but {means} means recorded")
            }
            Error::EmptyRepresentatives { cluster } => {
                write!(f, "cluster {cluster} has no representative points")
            }
            Error::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
            Error::DuplicateAssignment { point } => {
                write!(f, "point {point} is assigned more than once")
            }
        }
    }
}

impl std::error::Error for Error {}
