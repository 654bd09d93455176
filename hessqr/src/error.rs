//! Error types for the eigenvalue pipeline

/// Errors raised by the eigenvalue computation.
///
/// The numeric core itself is infallible on valid input; these cover the
/// entry-point validations and the opt-in sweep cap.
#[derive(Debug, thiserror::Error)]
pub enum EigenError {
    #[error("matrix is empty")]
    Empty,

    #[error("matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("QR iteration did not settle after {sweeps} sweeps")]
    NotConverged { sweeps: usize },
}
