use thiserror::Error;

/// Errors surfaced by the spectral clustering pipeline.
///
/// All of these are fatal for the run that raised them: no stage retries,
/// no partial artifacts.
#[derive(Debug, Error)]
pub enum Error {
    /// An edge row that cannot become an edge: fewer than two fields, a
    /// non-numeric field, or a vertex id that is not a positive integer.
    #[error("malformed edge row {row}: {message}")]
    EdgeFormat {
        /// 1-based row number in the input sequence.
        row: usize,
        /// Human-readable explanation.
        message: String,
    },

    /// An isolated vertex rejected by a strict normalization entry point.
    #[error("zero degree vertex at index {0}")]
    ZeroDegree(usize),

    /// The eigensolver failed to converge or produced eigenvalues with
    /// non-negligible imaginary components.
    #[error("eigendecomposition failed: {0}")]
    Eigendecomposition(String),

    /// Requested cluster count is incompatible with the graph.
    #[error("invalid cluster count: requested {requested}, but graph has {n_vertices} vertices")]
    InvalidClusterCount {
        /// Requested number of clusters.
        requested: usize,
        /// Number of vertices available for clustering.
        n_vertices: usize,
    },

    /// Failure inside the clustering capability.
    #[error("clustering failed: {0}")]
    Clustering(String),

    /// Underlying I/O failure while reading input.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type used across the workspace.
pub type Result<T> = std::result::Result<T, Error>;
