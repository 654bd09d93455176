//! # hessqr: real-matrix eigenvalues via Hessenberg reduction and Givens QR
//!
//! Computes all eigenvalues of a dense real square matrix. The pipeline is
//! the classical shift-free QR iteration: the input is first reduced to
//! upper Hessenberg form by orthogonal similarity transforms built from
//! Givens rotations, then QR sweeps are repeated until the subdiagonal
//! collapses into isolated 1×1 and 2×2 diagonal blocks, from which the
//! eigenvalues (real scalars or complex-conjugate pairs) are read off
//! directly.
//!
//! Every transform applied anywhere in the pipeline is an orthogonal
//! similarity, so the working matrix keeps the spectrum of the input at
//! all times.

pub mod eig;
pub mod error;
pub mod givens;
pub mod hessenberg;
pub mod schur;
pub mod tolerance;

pub use eig::{eigenvalues, extract_eigenvalues};
pub use error::EigenError;
pub use givens::{apply_left, apply_right, GivensRotation};
pub use hessenberg::{is_hessenberg, reduce_to_hessenberg};
pub use schur::{is_quasi_triangular, qr_sweep, real_schur, SchurConfig, SchurReport};
pub use tolerance::Tolerance;

// Re-export the matrix and scalar types used throughout the public API
pub use ndarray::Array2;
pub use num_complex::Complex64;

/// Dense row-major n×n working matrix.
pub type Matrix = Array2<f64>;
