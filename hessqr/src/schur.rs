//! Shift-free QR iteration on Hessenberg matrices
//!
//! One sweep annihilates the subdiagonal with a forward pass of row
//! rotations (the implicit R factor), then replays the cached rotations
//! as column operations in the same order, forming A' = R·Q. The sweep is
//! a similarity transform, so the spectrum is preserved; iterating it
//! drives the matrix toward quasi-triangular (real Schur) form where
//! every remaining subdiagonal coupling is an isolated 2×2 block.

use ndarray::Array2;

use crate::error::EigenError;
use crate::givens::{apply_left, apply_right, GivensRotation};
use crate::hessenberg::reduce_to_hessenberg;
use crate::tolerance::Tolerance;

/// Settings for the QR iteration loop.
///
/// The default `max_sweeps = None` reproduces the classical unbounded
/// loop: shift-free QR has no convergence guarantee when eigenvalues
/// share a modulus, and such inputs iterate forever. Callers that prefer
/// a hard failure over a hang can opt into a cap.
#[derive(Debug, Clone)]
pub struct SchurConfig {
    /// Threshold deciding when a subdiagonal entry counts as zero.
    pub tolerance: Tolerance,
    /// Abort with [`EigenError::NotConverged`] after this many sweeps.
    pub max_sweeps: Option<usize>,
}

impl SchurConfig {
    pub fn new(tolerance: Tolerance) -> Self {
        Self {
            tolerance,
            max_sweeps: None,
        }
    }

    pub fn with_max_sweeps(mut self, cap: usize) -> Self {
        self.max_sweeps = Some(cap);
        self
    }
}

impl Default for SchurConfig {
    fn default() -> Self {
        Self::new(Tolerance::default())
    }
}

/// Diagnostics from a completed iteration.
#[derive(Debug, Clone, Copy)]
pub struct SchurReport {
    /// Number of QR sweeps performed after the Hessenberg reduction.
    pub sweeps: usize,
}

/// Perform one QR sweep in place on a matrix in Hessenberg form.
///
/// Forward pass: for each column k, a rotation built from the diagonal
/// pivot (k, k) and subdiagonal target (k+1, k) is applied to rows
/// (k, k+1) and pushed into `cache`. Backward pass: the cached rotations
/// are replayed in the same order as column operations on (k, k+1).
///
/// The backward pass must reuse the cached values verbatim; recomputing
/// them from the partially transformed matrix would break the similarity
/// and corrupt the spectrum. The cache is cleared on entry, so no
/// rotation data survives from one sweep into the next.
pub fn qr_sweep(matrix: &mut Array2<f64>, cache: &mut Vec<GivensRotation>) {
    let n = matrix.nrows();
    cache.clear();
    if n < 2 {
        return;
    }
    for k in 0..n - 1 {
        let rot = GivensRotation::annihilating(matrix[[k, k]], matrix[[k + 1, k]]);
        apply_left(matrix, rot, k, k + 1);
        cache.push(rot);
    }
    for (k, &rot) in cache.iter().enumerate() {
        apply_right(matrix, rot, k, k + 1);
    }
}

/// Whether the matrix has settled into isolated 1×1 and 2×2 blocks.
///
/// A subdiagonal position fails the test only when it is nonzero and the
/// next subdiagonal entry down-right is nonzero too, i.e. three or more
/// rows are still coupled.
pub fn is_quasi_triangular(matrix: &Array2<f64>, tol: Tolerance) -> bool {
    let n = matrix.nrows();
    for i in 1..n {
        if !tol.is_zero(matrix[[i, i - 1]]) && i != n - 1 && !tol.is_zero(matrix[[i + 1, i]]) {
            return false;
        }
    }
    true
}

/// Drive `matrix` to quasi-triangular (real Schur) form in place.
///
/// Reduces to Hessenberg form once, then alternates [`qr_sweep`] with the
/// convergence test until the subdiagonal structure collapses.
pub fn real_schur(matrix: &mut Array2<f64>, config: &SchurConfig) -> Result<SchurReport, EigenError> {
    reduce_to_hessenberg(matrix);

    let n = matrix.nrows();
    let mut cache = Vec::with_capacity(n.saturating_sub(1));
    let mut sweeps = 0;
    while !is_quasi_triangular(matrix, config.tolerance) {
        if let Some(cap) = config.max_sweeps {
            if sweeps >= cap {
                return Err(EigenError::NotConverged { sweeps });
            }
        }
        qr_sweep(matrix, &mut cache);
        sweeps += 1;
    }
    Ok(SchurReport { sweeps })
}
