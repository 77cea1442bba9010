//! Per-edge cluster stamping and the final labeled-edge ordering.
//!
//! An edge whose endpoints land in the same cluster is stamped with that
//! cluster id; an edge crossing clusters keeps only its weight. The final
//! ordering sorts ascending by the historical third field: the cluster id
//! where one was stamped, the original weight where not. That key mixes two
//! meanings across edges; internally they stay separate fields and
//! [`LabeledEdge::sort_value`] is the single place the overload lives.

use log::{debug, info};

use crate::error::{Error, Result};
use crate::graph::Edge;

/// An input edge after cluster stamping.
///
/// `weight` is always the original (possibly defaulted) edge weight;
/// `cluster` is present iff both endpoints share a cluster.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledEdge {
    pub source: usize,
    pub target: usize,
    pub weight: f64,
    pub cluster: Option<usize>,
}

impl LabeledEdge {
    /// The historical third field: cluster id where stamped, weight
    /// otherwise. This is the final sort key.
    pub fn sort_value(&self) -> f64 {
        self.cluster.map(|c| c as f64).unwrap_or(self.weight)
    }
}

/// Stamps edges with shared-cluster ids and orders the result.
pub struct EdgeLabeler;

impl EdgeLabeler {
    /// Label every edge and sort ascending by [`LabeledEdge::sort_value`].
    ///
    /// `labels` maps 0-based vertex index to cluster id; every vertex an
    /// edge references must be covered. The sort is stable, so edges with
    /// equal keys keep their input order.
    pub fn label(edges: &[Edge], labels: &[usize]) -> Result<Vec<LabeledEdge>> {
        let mut labeled = Vec::with_capacity(edges.len());
        for edge in edges {
            let source_cluster = vertex_label(labels, edge.source)?;
            let target_cluster = vertex_label(labels, edge.target)?;
            let cluster = (source_cluster == target_cluster).then_some(source_cluster);
            labeled.push(LabeledEdge {
                source: edge.source,
                target: edge.target,
                weight: edge.weight,
                cluster,
            });
        }

        labeled.sort_by(|a, b| a.sort_value().total_cmp(&b.sort_value()));

        let stamped = labeled.iter().filter(|e| e.cluster.is_some()).count();
        info!(
            "labeled {} edges: {} within clusters, {} crossing",
            labeled.len(),
            stamped,
            labeled.len() - stamped
        );
        Ok(labeled)
    }

    /// Render labeled edges as the n×n matrix used for visualization:
    /// background −1, entry (source−1, target−1) = the edge's sort value.
    pub fn edge_matrix(labeled: &[LabeledEdge], nnodes: usize) -> Vec<Vec<f64>> {
        let mut matrix = vec![vec![-1.0; nnodes]; nnodes];
        for edge in labeled {
            matrix[edge.source - 1][edge.target - 1] = edge.sort_value();
        }
        debug!("edge matrix rendered: {nnodes}×{nnodes}");
        matrix
    }
}

fn vertex_label(labels: &[usize], vertex: usize) -> Result<usize> {
    labels.get(vertex - 1).copied().ok_or_else(|| {
        Error::Clustering(format!(
            "labels cover {} vertices but an edge references vertex {}",
            labels.len(),
            vertex
        ))
    })
}

/// Plain-text rendering of an edge matrix, one row per line.
pub fn render_matrix(matrix: &[Vec<f64>]) -> String {
    let mut out = String::new();
    for row in matrix {
        let cells: Vec<String> = row.iter().map(|v| format!("{v:>6.1}")).collect();
        out.push_str(&cells.join(" "));
        out.push('\n');
    }
    out
}
