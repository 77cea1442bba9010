//! Run configuration for the pipeline.
//!
//! Two values parameterize a run: the edge-list path and the cluster count.
//! Everything else is an ambient knob with a default.

use std::path::PathBuf;

use lapcut_core::{ClusterData, ClusterParams, SpectralParams};

/// Delimiter assumed for edge files unless overridden.
pub const DEFAULT_DELIMITER: u8 = b',';

/// Configuration for one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Path of the delimited edge-list file.
    pub input: PathBuf,
    /// Requested number of clusters (k).
    pub n_clusters: usize,
    /// Field delimiter of the input file.
    pub delimiter: u8,
    /// Spectral stage tunables.
    pub spectral: SpectralParams,
    /// Which per-vertex matrix k-means sees.
    pub cluster_data: ClusterData,
    /// Clustering capability tunables.
    pub cluster: ClusterParams,
}

impl PipelineConfig {
    /// Configuration with the two run parameters and default knobs.
    pub fn new(input: impl Into<PathBuf>, n_clusters: usize) -> Self {
        Self {
            input: input.into(),
            n_clusters,
            delimiter: DEFAULT_DELIMITER,
            spectral: SpectralParams::default(),
            cluster_data: ClusterData::default(),
            cluster: ClusterParams::default(),
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_imag_tolerance(mut self, tolerance: f64) -> Self {
        self.spectral.imag_tolerance = tolerance;
        self
    }

    pub fn with_cluster_data(mut self, cluster_data: ClusterData) -> Self {
        self.cluster_data = cluster_data;
        self
    }

    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.cluster.max_iter = max_iter;
        self
    }
}
