//! Pipeline orchestration: edge list in, labeled edges out.
//!
//! The stages run strictly in sequence; each consumes the completed output
//! of the previous one and every intermediate artifact is an explicit,
//! immutable value:
//!
//! ```text
//! rows → graph → {adjacency, L, L_sym} → eigenpairs → top-k → embedding
//!      → labels → labeled edges (sorted) → edge matrix
//! ```
//!
//! Per-stage summaries go through `log` (`RUST_LOG=debug` for artifact
//! details); the returned [`PipelineOutput`] carries everything a caller or
//! a renderer needs, including the spectrum reports of both Laplacians.

pub mod config;
pub mod io;

use log::{debug, info, trace};

use lapcut_core::{
    labeling, ClusterAssigner, ClusterData, EdgeLabeler, Embedding, GraphBuilder, LabeledEdge,
    MatrixFactory, Result, SpectralEmbedder,
};

pub use config::PipelineConfig;

/// Everything a completed run produced.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// Matrix dimension (max vertex id).
    pub nnodes: usize,
    /// Number of input edges.
    pub nedges: usize,
    /// Full spectrum of the unnormalized Laplacian, ascending.
    pub laplacian_spectrum: Vec<f64>,
    /// Eigenvalues backing the embedding: normalized-Laplacian values as
    /// selected, i.e. the k largest in descending order.
    pub selected_eigenvalues: Vec<f64>,
    /// Row-normalized spectral embedding (k×n).
    pub embedding: Embedding,
    /// Cluster label per vertex, 0-based.
    pub labels: Vec<usize>,
    /// Labeled edges, sorted ascending by their mixed weight/cluster key.
    pub edges: Vec<LabeledEdge>,
    /// Dense n×n rendering of the labeled edges (background −1).
    pub edge_matrix: Vec<Vec<f64>>,
}

/// Read the configured edge file and run the pipeline on it.
pub fn run(config: &PipelineConfig) -> Result<PipelineOutput> {
    let rows = io::read_edge_rows(&config.input, config.delimiter)?;
    run_rows(&rows, config)
}

/// Run the pipeline on already-read edge rows.
pub fn run_rows(rows: &[Vec<f64>], config: &PipelineConfig) -> Result<PipelineOutput> {
    let k = config.n_clusters;
    info!("pipeline start: {} rows, k={}", rows.len(), k);

    // Stage 1: graph construction (all-or-nothing validation).
    let graph = GraphBuilder::from_rows(rows)?;
    let n = graph.nnodes();
    info!(
        "graph: {} vertices, {} edges, {} distinct pairs",
        n,
        graph.edges().len(),
        graph.npairs()
    );

    // Stage 2: matrices.
    let adjacency = MatrixFactory::adjacency(&graph);
    let laplacian = MatrixFactory::laplacian(&graph);
    let normalized = MatrixFactory::normalized_laplacian(&graph);
    debug!(
        "matrices: adjacency nnz={}, laplacian nnz={}, normalized nnz={}",
        adjacency.nnz(),
        laplacian.nnz(),
        normalized.nnz()
    );
    let report = MatrixFactory::report(&laplacian, 1e-9);
    debug!(
        "laplacian check: symmetric={}, max row-sum error {:.2e}",
        report.symmetric, report.max_row_sum_error
    );

    // Stage 3: spectra. The unnormalized spectrum is a diagnostic artifact;
    // the normalized one feeds the embedding.
    let embedder = SpectralEmbedder::new(config.spectral.clone());

    let laplacian_pairs = embedder.eigendecompose(&MatrixFactory::to_dense(&laplacian))?;
    let laplacian_spectrum = lapcut_core::spectral::sorted_spectrum(&laplacian_pairs);
    debug!(
        "laplacian spectrum (first 10 of {}): {:?}",
        laplacian_spectrum.len(),
        &laplacian_spectrum[..laplacian_spectrum.len().min(10)]
    );

    let normalized_pairs = embedder.eigendecompose(&MatrixFactory::to_dense(&normalized))?;
    let selected = SpectralEmbedder::select_top_k(normalized_pairs, k);
    let selected_eigenvalues: Vec<f64> = selected.iter().map(|p| p.value).collect();
    info!(
        "selected {} of {} eigenpairs: {:?}",
        selected.len(),
        n,
        selected_eigenvalues
    );

    for pair in &selected {
        trace!("eigenvalue {:.6}: eigenvector {:?}", pair.value, pair.vector);
    }

    let embedding = SpectralEmbedder::normalize_rows(&selected, n);
    debug!("embedding shape: {:?}", embedding.shape());
    trace!("normalized eigenvector rows: {:?}", embedding.rows());

    // Stage 4: cluster assignment over the configured per-vertex data.
    let assigner = ClusterAssigner::new(config.cluster.clone());
    let data = match config.cluster_data {
        ClusterData::Adjacency => MatrixFactory::to_dense(&adjacency),
        ClusterData::Embedding => MatrixFactory::rows_to_dense(&embedding.vertex_major()),
    };
    let labels = assigner.assign(&data, k)?;
    debug!("labels: {labels:?}");

    // Stage 5: edge labeling and final ordering.
    let edges = EdgeLabeler::label(graph.edges(), &labels)?;
    let edge_matrix = EdgeLabeler::edge_matrix(&edges, n);
    info!("pipeline complete: {} labeled edges", edges.len());

    Ok(PipelineOutput {
        nnodes: n,
        nedges: graph.edges().len(),
        laplacian_spectrum,
        selected_eigenvalues,
        embedding,
        labels,
        edges,
        edge_matrix,
    })
}

/// Render the output's edge matrix as text, one row per line.
pub fn render_output(output: &PipelineOutput) -> String {
    labeling::render_matrix(&output.edge_matrix)
}

#[cfg(test)]
mod tests;
