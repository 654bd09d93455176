//! Eigenvalue extraction from quasi-triangular form
//!
//! Once the QR iteration has settled, the matrix is block upper
//! triangular with 1×1 and 2×2 diagonal blocks. A 1×1 block is a real
//! eigenvalue; a 2×2 block is resolved with the quadratic formula and
//! yields either two reals or a complex-conjugate pair.

use ndarray::Array2;
use num_complex::Complex64;

use crate::error::EigenError;
use crate::schur::{real_schur, SchurConfig};
use crate::tolerance::Tolerance;

/// Read the eigenvalues off a converged quasi-triangular matrix.
///
/// Walks the diagonal top to bottom. A position whose subdiagonal
/// neighbor is effectively zero contributes its diagonal entry as a real
/// eigenvalue. Otherwise the 2×2 block [[a, b], [c, d]] contributes both
/// of its eigenvalues via the discriminant D = (a−d)² + 4bc: two reals
/// (a+d ± √D)/2 when D ≥ 0, or the conjugate pair (a+d)/2 ± i·√(−D)/2
/// emitted positive-imaginary first.
///
/// The result has exactly one entry per diagonal position, in order.
pub fn extract_eigenvalues(matrix: &Array2<f64>, tol: Tolerance) -> Vec<Complex64> {
    let n = matrix.nrows();
    let mut values = Vec::with_capacity(n);
    let mut i = 0;
    while i < n {
        if i + 1 < n && !tol.is_zero(matrix[[i + 1, i]]) {
            let a = matrix[[i, i]];
            let b = matrix[[i, i + 1]];
            let c = matrix[[i + 1, i]];
            let d = matrix[[i + 1, i + 1]];
            let disc = (a - d) * (a - d) + 4.0 * b * c;
            let half_trace = (a + d) / 2.0;
            if disc >= 0.0 {
                let half_root = disc.sqrt() / 2.0;
                values.push(Complex64::new(half_trace + half_root, 0.0));
                values.push(Complex64::new(half_trace - half_root, 0.0));
            } else {
                let imag = (-disc).sqrt() / 2.0;
                values.push(Complex64::new(half_trace, imag));
                values.push(Complex64::new(half_trace, -imag));
            }
            i += 2;
        } else {
            values.push(Complex64::new(matrix[[i, i]], 0.0));
            i += 1;
        }
    }
    values
}

/// Compute all eigenvalues of a real square matrix.
///
/// Clones the input, drives the copy to quasi-triangular form with
/// [`real_schur`] and extracts one eigenvalue per diagonal position.
/// Conjugate pairs occupy adjacent entries, positive imaginary part
/// first; real eigenvalues carry an exactly zero imaginary part.
pub fn eigenvalues(
    matrix: &Array2<f64>,
    config: &SchurConfig,
) -> Result<Vec<Complex64>, EigenError> {
    let (rows, cols) = matrix.dim();
    if rows == 0 || cols == 0 {
        return Err(EigenError::Empty);
    }
    if rows != cols {
        return Err(EigenError::NotSquare { rows, cols });
    }

    let mut work = matrix.clone();
    real_schur(&mut work, config)?;
    Ok(extract_eigenvalues(&work, config.tolerance))
}
