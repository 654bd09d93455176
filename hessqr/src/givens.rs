//! Givens rotation primitives
//!
//! A Givens rotation is an orthogonal plane rotation acting on one pair of
//! row or column indices. Applied from the left and then (transposed) from
//! the right on the same index pair it is a similarity transform, which is
//! how the Hessenberg reducer and the QR sweep both use it.

use ndarray::Array2;

/// A (cosine, sine) pair parameterizing a plane rotation, c² + s² = 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GivensRotation {
    pub c: f64,
    pub s: f64,
}

impl GivensRotation {
    /// The rotation that leaves everything unchanged.
    pub fn identity() -> Self {
        Self { c: 1.0, s: 0.0 }
    }

    /// The unique rotation with c·a + s·b = r ≥ 0 and c² + s² = 1,
    /// where r = sqrt(a² + b²). Applying it from the left to the
    /// two-vector (a, b) zeroes the second component.
    ///
    /// When a and b are both exactly zero there is nothing to annihilate
    /// and the identity rotation is returned.
    pub fn annihilating(a: f64, b: f64) -> Self {
        if a == 0.0 && b == 0.0 {
            return Self::identity();
        }
        let r = (a * a + b * b).sqrt();
        Self { c: a / r, s: b / r }
    }
}

/// Left-multiply by the rotation: rows `x` and `y` are replaced by
/// (c·rowₓ + s·row_y, −s·rowₓ + c·row_y). O(n) over the columns.
pub fn apply_left(matrix: &mut Array2<f64>, rot: GivensRotation, x: usize, y: usize) {
    let n = matrix.ncols();
    for j in 0..n {
        let xj = matrix[[x, j]];
        let yj = matrix[[y, j]];
        matrix[[x, j]] = rot.c * xj + rot.s * yj;
        matrix[[y, j]] = -rot.s * xj + rot.c * yj;
    }
}

/// Right-multiply by the transpose of the rotation: columns `x` and `y`
/// are combined with the same coefficients as [`apply_left`] uses on
/// rows, so a matched left/right application is a similarity transform.
pub fn apply_right(matrix: &mut Array2<f64>, rot: GivensRotation, x: usize, y: usize) {
    let m = matrix.nrows();
    for i in 0..m {
        let xi = matrix[[i, x]];
        let yi = matrix[[i, y]];
        matrix[[i, x]] = rot.c * xi + rot.s * yi;
        matrix[[i, y]] = -rot.s * xi + rot.c * yi;
    }
}
