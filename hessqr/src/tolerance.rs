//! Magnitude-scaled zero threshold
//!
//! Subdiagonal entries are never driven to exact zero by floating-point
//! rotations, so every "is this zero" decision in the pipeline goes
//! through a [`Tolerance`]. The threshold starts at a fixed default and
//! tightens while the input is read, so that zero-tests scale with the
//! dynamic range of the matrix entries. Once the caller has built it, the
//! value is passed down by copy and never mutated again.

/// Absolute threshold below which a value is treated as zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance(f64);

impl Tolerance {
    /// Starting threshold before any entry has been observed.
    pub const DEFAULT_EPS: f64 = 1e-9;

    /// Divisor relating entry magnitude to the tightened threshold.
    const MAGNITUDE_SCALE: f64 = 1e9;

    /// A tolerance with an explicit threshold.
    pub fn new(eps: f64) -> Self {
        Self(eps)
    }

    /// Tighten the threshold for one observed matrix entry.
    ///
    /// A nonzero entry x lowers the threshold to |x| / 1e9 when that is
    /// smaller than the current value; the threshold only ever decreases.
    pub fn tighten(&mut self, entry: f64) {
        if entry != 0.0 {
            let scaled = entry.abs() / Self::MAGNITUDE_SCALE;
            if scaled < self.0 {
                self.0 = scaled;
            }
        }
    }

    /// Derive the tolerance for a whole matrix in one pass.
    pub fn from_matrix(matrix: &ndarray::Array2<f64>) -> Self {
        let mut tol = Self::default();
        for &entry in matrix.iter() {
            tol.tighten(entry);
        }
        tol
    }

    /// Whether `value` is effectively zero under this threshold.
    #[inline]
    pub fn is_zero(&self, value: f64) -> bool {
        value.abs() < self.0
    }

    /// The current absolute threshold.
    #[inline]
    pub fn eps(&self) -> f64 {
        self.0
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self(Self::DEFAULT_EPS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn default_threshold() {
        let tol = Tolerance::default();
        assert_eq!(tol.eps(), 1e-9);
        assert!(tol.is_zero(1e-10));
        assert!(!tol.is_zero(1e-8));
    }

    #[test]
    fn tighten_only_decreases() {
        let mut tol = Tolerance::default();
        tol.tighten(1e3);
        assert_eq!(tol.eps(), 1e-9);

        tol.tighten(0.5);
        assert_eq!(tol.eps(), 0.5e-9);

        // A larger entry afterwards must not loosen the threshold again.
        tol.tighten(100.0);
        assert_eq!(tol.eps(), 0.5e-9);
    }

    #[test]
    fn zero_entries_are_ignored() {
        let mut tol = Tolerance::default();
        tol.tighten(0.0);
        assert_eq!(tol.eps(), Tolerance::DEFAULT_EPS);
    }

    #[test]
    fn from_matrix_scans_every_entry() {
        let m = array![[2.0, 0.0], [1e-3, 4.0]];
        let tol = Tolerance::from_matrix(&m);
        assert_eq!(tol.eps(), 1e-3 / 1e9);
    }
}
