//! Spectral clustering primitives for weighted undirected graphs.
//!
//! `lapcut-core` turns an edge list into per-edge cluster labels through a
//! fixed sequence of derived, immutable artifacts:
//!
//! 1. **Graph**: validated edges collapsed into an undirected weight map
//!    ([`graph::GraphBuilder`]).
//! 2. **Matrices**: adjacency, Laplacian `L = D − A`, and symmetric
//!    normalized Laplacian `D^{-1/2} L D^{-1/2}` ([`matrix::MatrixFactory`]).
//! 3. **Embedding**: eigendecomposition of the normalized Laplacian, top-k
//!    selection by eigenvalue, row-wise L2 normalization
//!    ([`spectral::SpectralEmbedder`]).
//! 4. **Labels**: k-means over the chosen per-vertex data
//!    ([`clustering::ClusterAssigner`]).
//! 5. **Labeled edges**: each edge stamped with its endpoints' shared
//!    cluster id, sorted for rendering ([`labeling::EdgeLabeler`]).
//!
//! Every stage is a pure function of its inputs; nothing is mutated after
//! construction and nothing is retained between runs. Eigendecomposition and
//! k-means are delegated to `smartcore`; graph-shaped matrices are kept
//! sparse (`sprs`) until dense algebra needs them.
//!
//! # Quick start
//!
//! ```ignore
//! use lapcut_core::{ClusterAssigner, EdgeLabeler, GraphBuilder, MatrixFactory, SpectralEmbedder};
//!
//! let rows = vec![vec![1.0, 2.0, 1.0], vec![2.0, 3.0], vec![3.0, 1.0]];
//! let graph = GraphBuilder::from_rows(&rows)?;
//! let lap_norm = MatrixFactory::normalized_laplacian(&graph);
//!
//! let embedder = SpectralEmbedder::with_defaults();
//! let embedding = embedder.embed(&MatrixFactory::to_dense(&lap_norm), 2)?;
//!
//! let assigner = ClusterAssigner::with_defaults();
//! let data = MatrixFactory::to_dense(&MatrixFactory::adjacency(&graph));
//! let labels = assigner.assign(&data, 2)?;
//!
//! let labeled = EdgeLabeler::label(graph.edges(), &labels)?;
//! ```

pub mod clustering;
pub mod error;
pub mod graph;
pub mod labeling;
pub mod matrix;
pub mod spectral;

pub use clustering::{ClusterAssigner, ClusterData, ClusterParams};
pub use error::{Error, Result};
pub use graph::{Edge, Graph, GraphBuilder};
pub use labeling::{EdgeLabeler, LabeledEdge};
pub use matrix::{LaplacianReport, MatrixFactory};
pub use spectral::{EigenPair, Embedding, SpectralEmbedder, SpectralParams};

#[cfg(test)]
mod tests;
