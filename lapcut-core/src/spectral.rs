//! Eigendecomposition, eigenpair selection, and the spectral embedding.
//!
//! The eigensolver contract mirrors what a general-purpose solver gives you
//! for a real matrix: eigenvalues with real and imaginary parts. A true
//! symmetric Laplacian has a real spectrum, so imaginary parts are numerical
//! artifacts; anything below [`SpectralParams::imag_tolerance`] is dropped,
//! anything above is surfaced as [`Error::Eigendecomposition`].
//!
//! Selection takes the k eigenvectors with the LARGEST eigenvalues. This is
//! the pipeline's established convention and is kept deliberately; the
//! textbook recipe (Ng–Jordan–Weiss) takes the smallest nontrivial ones
//! instead, so callers porting results from other stacks should not expect
//! the classical embedding here.

use std::cmp::Ordering;

use log::{debug, info, trace};
use smartcore::linalg::basic::arrays::Array;
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::linalg::traits::evd::EVDDecomposable;

use crate::error::{Error, Result};

/// Largest imaginary component still considered a numerical artifact.
pub const DEFAULT_IMAG_TOLERANCE: f64 = 1e-9;

/// One eigenvalue with its eigenvector (length n, one entry per vertex).
#[derive(Debug, Clone, PartialEq)]
pub struct EigenPair {
    pub value: f64,
    pub vector: Vec<f64>,
}

/// Tunables for the spectral stage.
#[derive(Debug, Clone)]
pub struct SpectralParams {
    /// Imaginary components of eigenvalues below this magnitude are
    /// discarded; above it the decomposition is rejected.
    pub imag_tolerance: f64,
}

impl Default for SpectralParams {
    fn default() -> Self {
        Self {
            imag_tolerance: DEFAULT_IMAG_TOLERANCE,
        }
    }
}

/// k row-normalized eigenvectors stacked as a k×n matrix: one row per
/// selected eigenvector, one column per vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct Embedding {
    vectors: Vec<Vec<f64>>,
    nnodes: usize,
}

impl Embedding {
    /// (k, n) shape of the embedding.
    pub fn shape(&self) -> (usize, usize) {
        (self.vectors.len(), self.nnodes)
    }

    /// Eigenvector rows, normalized.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.vectors
    }

    /// Vertex-major view (n×k): one row per vertex, ready to be clustered.
    pub fn vertex_major(&self) -> Vec<Vec<f64>> {
        let (k, n) = self.shape();
        (0..n)
            .map(|v| (0..k).map(|r| self.vectors[r][v]).collect())
            .collect()
    }
}

/// Computes spectra and spectral embeddings of dense real matrices.
pub struct SpectralEmbedder {
    params: SpectralParams,
}

impl SpectralEmbedder {
    pub fn new(params: SpectralParams) -> Self {
        Self { params }
    }

    pub fn with_defaults() -> Self {
        Self::new(SpectralParams::default())
    }

    /// Full eigendecomposition of a square dense matrix.
    ///
    /// Returns one pair per dimension, in the solver's order (unordered as
    /// far as callers are concerned, see [`SpectralEmbedder::select_top_k`]).
    pub fn eigendecompose(&self, matrix: &DenseMatrix<f64>) -> Result<Vec<EigenPair>> {
        let (rows, cols) = matrix.shape();
        if rows != cols {
            return Err(Error::Eigendecomposition(format!(
                "matrix is not square: {rows}×{cols}"
            )));
        }
        if rows == 0 {
            return Ok(Vec::new());
        }

        trace!("eigendecomposing {rows}×{rows} matrix");
        let evd = matrix
            .clone()
            .evd(false)
            .map_err(|e| Error::Eigendecomposition(e.to_string()))?;

        let tolerance = self.params.imag_tolerance;
        let mut pairs = Vec::with_capacity(rows);
        for idx in 0..rows {
            let imag = evd.e[idx];
            if imag.abs() > tolerance {
                return Err(Error::Eigendecomposition(format!(
                    "eigenvalue {idx} has non-negligible imaginary component {imag:.3e}"
                )));
            }
            let vector: Vec<f64> = (0..rows).map(|r| *evd.V.get((r, idx))).collect();
            pairs.push(EigenPair {
                value: evd.d[idx],
                vector,
            });
        }

        debug!("eigendecomposition complete: {} pairs", pairs.len());
        Ok(pairs)
    }

    /// Sort pairs by eigenvalue descending and keep the first k.
    ///
    /// The sort is stable, so equal eigenvalues (multiplicities from
    /// disconnected graphs) keep the solver's original order, so the selection
    /// is deterministic for a fixed input. Returns fewer than k pairs only
    /// when fewer exist.
    pub fn select_top_k(mut pairs: Vec<EigenPair>, k: usize) -> Vec<EigenPair> {
        pairs.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal));
        pairs.truncate(k);
        debug!(
            "selected {} eigenpairs, eigenvalues {:?}",
            pairs.len(),
            pairs.iter().map(|p| p.value).collect::<Vec<_>>()
        );
        pairs
    }

    /// L2-normalize each eigenvector independently and stack them as rows.
    ///
    /// A zero-norm vector is kept as an all-zero row; there is no division
    /// by zero on degenerate spectra.
    pub fn normalize_rows(pairs: &[EigenPair], nnodes: usize) -> Embedding {
        let vectors = pairs
            .iter()
            .map(|pair| {
                let norm = pair.vector.iter().map(|x| x * x).sum::<f64>().sqrt();
                if norm > 0.0 {
                    pair.vector.iter().map(|x| x / norm).collect()
                } else {
                    pair.vector.clone()
                }
            })
            .collect();
        Embedding { vectors, nnodes }
    }

    /// Decompose, select the top k, and normalize, in one call.
    pub fn embed(&self, matrix: &DenseMatrix<f64>, k: usize) -> Result<Embedding> {
        let (n, _) = matrix.shape();
        let pairs = self.eigendecompose(matrix)?;
        let selected = Self::select_top_k(pairs, k);
        let embedding = Self::normalize_rows(&selected, n);
        info!(
            "spectral embedding: {}×{} from {} requested clusters",
            embedding.shape().0,
            embedding.shape().1,
            k
        );
        Ok(embedding)
    }
}

/// Eigenvalues of a matrix sorted ascending; the spectrum report consumed by
/// diagnostics.
pub fn sorted_spectrum(pairs: &[EigenPair]) -> Vec<f64> {
    let mut values: Vec<f64> = pairs.iter().map(|p| p.value).collect();
    values.sort_by(|a, b| a.total_cmp(b));
    values
}
