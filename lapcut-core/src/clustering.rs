//! Cluster assignment via the external k-means capability.
//!
//! The assigner owns the contract, not the algorithm: it validates the
//! requested cluster count against the data, hands the matrix to
//! `smartcore`'s k-means, and maps capability failures into crate errors.
//! No retries: a failed clustering fails the run.
//!
//! What the capability sees is chosen by [`ClusterData`]. The established
//! pipeline behavior clusters the raw dense adjacency (one row per vertex),
//! not the spectral embedding; [`ClusterData::Embedding`] is the typed
//! alternative for callers who want k-means over the embedding coordinates.

use log::{debug, info};
use smartcore::cluster::kmeans::{KMeans, KMeansParameters};
use smartcore::linalg::basic::arrays::Array;
use smartcore::linalg::basic::matrix::DenseMatrix;

use crate::error::{Error, Result};

/// Which per-vertex matrix is handed to k-means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClusterData {
    /// Raw dense adjacency, one row per vertex. The pipeline default.
    #[default]
    Adjacency,
    /// Vertex-major spectral embedding (n×k).
    Embedding,
}

/// Tunables passed through to the k-means capability.
#[derive(Debug, Clone)]
pub struct ClusterParams {
    /// Maximum Lloyd iterations for a single k-means run.
    pub max_iter: usize,
}

impl Default for ClusterParams {
    fn default() -> Self {
        Self { max_iter: 100 }
    }
}

/// Assigns one cluster label per data row via k-means.
pub struct ClusterAssigner {
    params: ClusterParams,
}

impl ClusterAssigner {
    pub fn new(params: ClusterParams) -> Self {
        Self { params }
    }

    pub fn with_defaults() -> Self {
        Self::new(ClusterParams::default())
    }

    /// Cluster the rows of `data` into `k` groups.
    ///
    /// Returns one label per row, labels in `[0, k)`. `k == 0` and
    /// `k > rows` are rejected before the capability runs; anything the
    /// capability itself refuses (including empty input) propagates as
    /// [`Error::Clustering`].
    pub fn assign(&self, data: &DenseMatrix<f64>, k: usize) -> Result<Vec<usize>> {
        let (n, dim) = data.shape();
        if k == 0 || k > n {
            return Err(Error::InvalidClusterCount {
                requested: k,
                n_vertices: n,
            });
        }

        debug!("running k-means: {n} rows × {dim} columns, k={k}");
        let parameters = KMeansParameters::default()
            .with_k(k)
            .with_max_iter(self.params.max_iter);

        let model: KMeans<f64, usize, DenseMatrix<f64>, Vec<usize>> =
            KMeans::fit(data, parameters).map_err(|e| Error::Clustering(e.to_string()))?;
        let labels: Vec<usize> = model
            .predict(data)
            .map_err(|e| Error::Clustering(e.to_string()))?;

        if labels.len() != n {
            return Err(Error::Clustering(format!(
                "capability returned {} labels for {} rows",
                labels.len(),
                n
            )));
        }

        info!("k-means assigned {} labels across k={} clusters", labels.len(), k);
        Ok(labels)
    }
}
