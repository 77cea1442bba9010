//! Derivation of graph matrices: adjacency, Laplacian, normalized Laplacian.
//!
//! All three are deterministic functions of the collapsed graph and its
//! vertex count; no randomness, no mutation. Graph-shaped matrices stay
//! sparse ([`sprs::CsMat`]) and are densified only at the seams where dense
//! algebra (eigendecomposition, k-means input) takes over.
//!
//! Normalization convention: `L_sym = D^{-1/2} (D − A) D^{-1/2}` with the
//! rows and columns of zero-degree vertices mapped to 0 instead of NaN/∞.
//! [`MatrixFactory::normalized_laplacian_checked`] rejects isolated vertices
//! instead, for callers that want the strict contract.

use log::{debug, trace};
use smartcore::linalg::basic::matrix::DenseMatrix;
use sprs::{CsMat, TriMat};

use crate::error::{Error, Result};
use crate::graph::Graph;

/// Matrix factory: every matrix the pipeline consumes is derived here.
pub struct MatrixFactory;

impl MatrixFactory {
    /// Symmetric n×n adjacency matrix. Entry (i, j) carries the collapsed
    /// weight of pair {i+1, j+1}; absent pairs are structural zeros. The
    /// diagonal is zero unless a self-loop edge exists.
    pub fn adjacency(graph: &Graph) -> CsMat<f64> {
        let n = graph.nnodes();
        let mut triplets = TriMat::new((n, n));
        for (i, j, w) in graph.pairs() {
            triplets.add_triplet(i, j, w);
            if i != j {
                triplets.add_triplet(j, i, w);
            }
        }
        let adjacency: CsMat<f64> = triplets.to_csr();
        debug!(
            "adjacency: {}×{} with {} non-zeros",
            n,
            n,
            adjacency.nnz()
        );
        adjacency
    }

    /// Vertex degrees: sum of incident weights, one entry per row.
    pub fn degrees(adjacency: &CsMat<f64>) -> Vec<f64> {
        let n = adjacency.rows();
        let mut degrees = vec![0.0; n];
        for (i, row) in adjacency.outer_iterator().enumerate() {
            degrees[i] = row.iter().map(|(_, &w)| w).sum();
        }
        degrees
    }

    /// Unnormalized Laplacian `L = D − A`.
    pub fn laplacian(graph: &Graph) -> CsMat<f64> {
        let adjacency = Self::adjacency(graph);
        let degrees = Self::degrees(&adjacency);
        let n = adjacency.rows();

        let mut triplets = TriMat::new((n, n));
        for (i, &degree) in degrees.iter().enumerate() {
            if degree != 0.0 {
                triplets.add_triplet(i, i, degree);
            }
        }
        for (i, row) in adjacency.outer_iterator().enumerate() {
            for (j, &weight) in row.iter() {
                if i != j {
                    triplets.add_triplet(i, j, -weight);
                } else {
                    // A self-loop contributes to the degree and stays on the
                    // diagonal of A, so it cancels out of L's diagonal.
                    triplets.add_triplet(i, i, -weight);
                }
            }
        }

        let laplacian: CsMat<f64> = triplets.to_csr();
        debug!(
            "laplacian: {}×{} with {} non-zeros",
            n,
            n,
            laplacian.nnz()
        );
        laplacian
    }

    /// Symmetric normalized Laplacian `D^{-1/2} L D^{-1/2}`.
    ///
    /// Vertices with non-positive degree take `D^{-1/2} = 0`, which zeroes
    /// their whole row and column (diagonal included) rather than producing
    /// NaN or ∞.
    pub fn normalized_laplacian(graph: &Graph) -> CsMat<f64> {
        let adjacency = Self::adjacency(graph);
        let degrees = Self::degrees(&adjacency);
        let laplacian = Self::laplacian(graph);
        let n = laplacian.rows();

        let d_inv_sqrt: Vec<f64> = degrees
            .iter()
            .map(|&d| if d > 0.0 { 1.0 / d.sqrt() } else { 0.0 })
            .collect();

        let mut triplets = TriMat::new((n, n));
        for (i, row) in laplacian.outer_iterator().enumerate() {
            for (j, &value) in row.iter() {
                let scaled = d_inv_sqrt[i] * value * d_inv_sqrt[j];
                if scaled != 0.0 {
                    triplets.add_triplet(i, j, scaled);
                }
            }
        }

        let normalized: CsMat<f64> = triplets.to_csr();
        trace!(
            "normalized laplacian: {}×{} with {} non-zeros",
            n,
            n,
            normalized.nnz()
        );
        normalized
    }

    /// Strict variant: fails with [`Error::ZeroDegree`] on the first
    /// isolated vertex instead of substituting zeros.
    pub fn normalized_laplacian_checked(graph: &Graph) -> Result<CsMat<f64>> {
        let adjacency = Self::adjacency(graph);
        let degrees = Self::degrees(&adjacency);
        if let Some((idx, _)) = degrees.iter().enumerate().find(|(_, &d)| d <= 0.0) {
            return Err(Error::ZeroDegree(idx));
        }
        Ok(Self::normalized_laplacian(graph))
    }

    /// Densify a sparse matrix for the dense-algebra consumers.
    pub fn to_dense(sparse: &CsMat<f64>) -> DenseMatrix<f64> {
        let (rows, cols) = sparse.shape();
        if rows == 0 || cols == 0 {
            return DenseMatrix::new(0, 0, vec![], true);
        }

        let mut data = vec![vec![0.0; cols]; rows];
        for (i, row) in sparse.outer_iterator().enumerate() {
            for (j, &value) in row.iter() {
                data[i][j] = value;
            }
        }
        DenseMatrix::from_2d_vec(&data)
    }

    /// Dense matrix from row vectors; tolerates empty shapes.
    pub fn rows_to_dense(rows: &[Vec<f64>]) -> DenseMatrix<f64> {
        let ncols = rows.first().map(Vec::len).unwrap_or(0);
        if rows.is_empty() || ncols == 0 {
            return DenseMatrix::new(rows.len(), ncols, vec![], true);
        }
        DenseMatrix::from_2d_vec(&rows.to_vec())
    }

    /// Diagnostic checks over a Laplacian-shaped matrix.
    pub fn report(matrix: &CsMat<f64>, tolerance: f64) -> LaplacianReport {
        let n = matrix.rows();
        let mut max_row_sum_error: f64 = 0.0;
        for row in matrix.outer_iterator() {
            let row_sum: f64 = row.iter().map(|(_, &v)| v).sum();
            max_row_sum_error = max_row_sum_error.max(row_sum.abs());
        }

        let mut max_asymmetry: f64 = 0.0;
        for (i, row) in matrix.outer_iterator().enumerate() {
            for (j, &value) in row.iter() {
                let mirrored = matrix.get(j, i).copied().unwrap_or(0.0);
                max_asymmetry = max_asymmetry.max((value - mirrored).abs());
            }
        }

        let report = LaplacianReport {
            nnodes: n,
            nnz: matrix.nnz(),
            max_row_sum_error,
            symmetric: max_asymmetry <= tolerance,
        };
        debug!(
            "laplacian report: n={}, nnz={}, max row-sum error {:.2e}, symmetric={}",
            report.nnodes, report.nnz, report.max_row_sum_error, report.symmetric
        );
        report
    }
}

/// Summary produced by [`MatrixFactory::report`] for logging and tests.
#[derive(Debug, Clone)]
pub struct LaplacianReport {
    pub nnodes: usize,
    pub nnz: usize,
    pub max_row_sum_error: f64,
    pub symmetric: bool,
}
