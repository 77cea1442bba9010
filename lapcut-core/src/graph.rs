//! Edge validation and undirected graph construction.
//!
//! Input is a sequence of raw numeric rows, one edge each: two vertex ids
//! and an optional weight. Validation is all-or-nothing: the first bad row
//! aborts the build and no graph is produced. Vertex ids are positive
//! integers; the matrix dimension downstream is the maximum id seen, so ids
//! may be sparse but every id up to the maximum occupies a row/column.
//!
//! Re-adding a vertex pair (in either orientation) replaces its weight: the
//! last write wins, weights never accumulate. Self-loops are accepted and
//! kept; callers that need simple-graph semantics must pre-filter.

use std::collections::BTreeMap;

use log::{debug, trace};

use crate::error::{Error, Result};

/// Weight assumed for a two-field row.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// A single input edge, after validation and weight defaulting.
///
/// `source`/`target` are the 1-based vertex ids as given; subtract 1 for
/// matrix indices. `source == target` (a self-loop) is allowed but
/// degenerate for clustering purposes.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub source: usize,
    pub target: usize,
    pub weight: f64,
}

/// An undirected weighted graph collapsed from an edge sequence.
///
/// Keeps both views of the input: the original edge order (the labeling
/// stage re-emits edges in that order) and the canonical pair → weight map
/// the matrices are built from.
#[derive(Debug, Clone)]
pub struct Graph {
    edges: Vec<Edge>,
    weights: BTreeMap<(usize, usize), f64>,
    nnodes: usize,
}

impl Graph {
    /// Matrix dimension: the maximum vertex id observed across all edges.
    pub fn nnodes(&self) -> usize {
        self.nnodes
    }

    /// Input edges in their original order, weights defaulted.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of distinct undirected vertex pairs (self-loops included).
    pub fn npairs(&self) -> usize {
        self.weights.len()
    }

    /// Collapsed weight for a 0-based vertex pair, if the pair has an edge.
    pub fn weight(&self, i: usize, j: usize) -> Option<f64> {
        self.weights.get(&canonical(i, j)).copied()
    }

    /// Iterate collapsed undirected pairs as (i, j, weight), 0-based, i <= j.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.weights.iter().map(|(&(i, j), &w)| (i, j, w))
    }
}

fn canonical(i: usize, j: usize) -> (usize, usize) {
    if i <= j { (i, j) } else { (j, i) }
}

/// Builds a [`Graph`] from raw numeric rows.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    edges: Vec<Edge>,
    weights: BTreeMap<(usize, usize), f64>,
    max_vertex: usize,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and build in one pass. Fails on the first malformed row,
    /// before any graph escapes.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Graph> {
        let mut builder = Self::new();
        for (idx, row) in rows.iter().enumerate() {
            builder.push_row(idx + 1, row)?;
        }
        Ok(builder.finish())
    }

    /// Add one edge row. `row_no` is 1-based and only used in diagnostics.
    ///
    /// Rows carry (source, target[, weight]); fields past the third are
    /// ignored. A missing weight defaults to [`DEFAULT_WEIGHT`].
    pub fn push_row(&mut self, row_no: usize, row: &[f64]) -> Result<()> {
        if row.len() < 2 {
            return Err(Error::EdgeFormat {
                row: row_no,
                message: format!("expected at least 2 numeric fields, found {}", row.len()),
            });
        }

        let source = vertex_id(row[0]).ok_or_else(|| Error::EdgeFormat {
            row: row_no,
            message: format!("vertex id {} is not a positive integer", row[0]),
        })?;
        let target = vertex_id(row[1]).ok_or_else(|| Error::EdgeFormat {
            row: row_no,
            message: format!("vertex id {} is not a positive integer", row[1]),
        })?;
        let weight = row.get(2).copied().unwrap_or(DEFAULT_WEIGHT);

        self.max_vertex = self.max_vertex.max(source).max(target);

        let key = canonical(source - 1, target - 1);
        if let Some(previous) = self.weights.insert(key, weight) {
            trace!(
                "pair ({source}, {target}) seen again: weight {previous} replaced by {weight}"
            );
        }

        self.edges.push(Edge {
            source,
            target,
            weight,
        });
        Ok(())
    }

    pub fn finish(self) -> Graph {
        debug!(
            "graph built: {} vertices, {} edges, {} distinct pairs",
            self.max_vertex,
            self.edges.len(),
            self.weights.len()
        );
        Graph {
            edges: self.edges,
            weights: self.weights,
            nnodes: self.max_vertex,
        }
    }
}

/// A vertex id field must be a finite positive integer value.
fn vertex_id(value: f64) -> Option<usize> {
    if value.is_finite() && value >= 1.0 && value.fract() == 0.0 {
        Some(value as usize)
    } else {
        None
    }
}
