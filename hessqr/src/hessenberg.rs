//! Reduction to upper Hessenberg form
//!
//! Zeroes every entry below the first subdiagonal with matched Givens
//! row/column rotations, so the result is similar to the input. QR sweeps
//! only operate on Hessenberg matrices; running them on a full matrix
//! would not preserve the subdiagonal structure the convergence test
//! relies on.

use ndarray::Array2;

use crate::givens::{apply_left, apply_right, GivensRotation};
use crate::tolerance::Tolerance;

/// Reduce `matrix` to upper Hessenberg form in place.
///
/// For each column k the entries below the subdiagonal are annihilated
/// one row at a time, using the subdiagonal entry (k+1, k) as the pivot.
/// Each rotation is applied to the rows and then to the same column pair,
/// keeping the matrix similar to the input. O(n³) total.
pub fn reduce_to_hessenberg(matrix: &mut Array2<f64>) {
    let n = matrix.nrows();
    if n < 3 {
        // Nothing below the first subdiagonal.
        return;
    }
    for k in 0..n - 2 {
        for i in k + 2..n {
            let rot = GivensRotation::annihilating(matrix[[k + 1, k]], matrix[[i, k]]);
            apply_left(matrix, rot, k + 1, i);
            apply_right(matrix, rot, k + 1, i);
        }
    }
}

/// Whether every entry below the first subdiagonal is effectively zero.
pub fn is_hessenberg(matrix: &Array2<f64>, tol: Tolerance) -> bool {
    let n = matrix.nrows();
    for i in 2..n {
        for j in 0..i - 1 {
            if !tol.is_zero(matrix[[i, j]]) {
                return false;
            }
        }
    }
    true
}
