//! Matrix input parsing
//!
//! The input is a dimension n followed by n² whitespace-separated values
//! in row-major order. Every token is validated individually, so a
//! malformed entry and a premature end of input are reported with their
//! position. The zero threshold is tightened entry by entry while
//! reading, exactly once, before the solver ever sees the matrix.

use std::io::Read;

use hessqr::{Matrix, Tolerance};

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("cannot read input: {0}")]
    Read(#[from] std::io::Error),

    #[error("missing matrix dimension")]
    MissingDimension,

    #[error("invalid matrix dimension '{token}'")]
    InvalidDimension { token: String },

    #[error("matrix data ended after {read} of {expected} entries")]
    Truncated { read: usize, expected: usize },

    #[error("invalid matrix entry '{token}' at position {index}")]
    InvalidEntry { token: String, index: usize },

    #[error("matrix of dimension {n} does not fit in memory")]
    OutOfMemory { n: usize },
}

/// Read an n×n matrix and its derived zero threshold from `reader`.
///
/// Tokens beyond the n² expected entries are ignored. Allocation is
/// checked up front so an absurd dimension fails cleanly instead of
/// aborting the process.
pub fn read_matrix<R: Read>(mut reader: R) -> Result<(Matrix, Tolerance), InputError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    let mut tokens = text.split_whitespace();

    let dim_token = tokens.next().ok_or(InputError::MissingDimension)?;
    let n: usize = dim_token.parse().map_err(|_| InputError::InvalidDimension {
        token: dim_token.to_string(),
    })?;

    let expected = n.checked_mul(n).ok_or(InputError::OutOfMemory { n })?;
    let mut data: Vec<f64> = Vec::new();
    data.try_reserve_exact(expected)
        .map_err(|_| InputError::OutOfMemory { n })?;

    let mut tolerance = Tolerance::default();
    for index in 0..expected {
        let token = tokens.next().ok_or(InputError::Truncated {
            read: index,
            expected,
        })?;
        let value: f64 = token.parse().map_err(|_| InputError::InvalidEntry {
            token: token.to_string(),
            index,
        })?;
        tolerance.tighten(value);
        data.push(value);
    }

    let matrix = Matrix::from_shape_vec((n, n), data).expect("buffer length matches n*n");
    Ok((matrix, tolerance))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn reads_row_major_matrix() {
        let (matrix, _) = read_matrix("2\n4 1\n2 3\n".as_bytes()).unwrap();
        assert_eq!(matrix, array![[4.0, 1.0], [2.0, 3.0]]);
    }

    #[test]
    fn accepts_arbitrary_whitespace() {
        let (matrix, _) = read_matrix("2 4\t1\n\n2   3".as_bytes()).unwrap();
        assert_eq!(matrix, array![[4.0, 1.0], [2.0, 3.0]]);
    }

    #[test]
    fn tightens_tolerance_from_entries() {
        let (_, tolerance) = read_matrix("2\n1e-3 0\n0 2\n".as_bytes()).unwrap();
        assert_eq!(tolerance.eps(), 1e-3 / 1e9);
    }

    #[test]
    fn zero_dimension_gives_empty_matrix() {
        let (matrix, _) = read_matrix("0\n".as_bytes()).unwrap();
        assert_eq!(matrix.dim(), (0, 0));
    }

    #[test]
    fn trailing_tokens_are_ignored() {
        let (matrix, _) = read_matrix("1\n5.0 99 98 97\n".as_bytes()).unwrap();
        assert_eq!(matrix, array![[5.0]]);
    }

    #[test]
    fn empty_input_is_missing_dimension() {
        assert!(matches!(
            read_matrix("".as_bytes()),
            Err(InputError::MissingDimension)
        ));
    }

    #[test]
    fn non_numeric_dimension_is_rejected() {
        assert!(matches!(
            read_matrix("banana 1 2".as_bytes()),
            Err(InputError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn negative_dimension_is_rejected() {
        assert!(matches!(
            read_matrix("-2 1 2 3 4".as_bytes()),
            Err(InputError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn malformed_entry_reports_its_position() {
        match read_matrix("2\n4 x\n2 3\n".as_bytes()) {
            Err(InputError::InvalidEntry { token, index }) => {
                assert_eq!(token, "x");
                assert_eq!(index, 1);
            }
            other => panic!("expected InvalidEntry, got {other:?}"),
        }
    }

    #[test]
    fn truncated_input_reports_progress() {
        match read_matrix("3\n1 2 3 4\n".as_bytes()) {
            Err(InputError::Truncated { read, expected }) => {
                assert_eq!(read, 4);
                assert_eq!(expected, 9);
            }
            other => panic!("expected Truncated, got {other:?}"),
        }
    }

    #[test]
    fn absurd_dimension_fails_before_allocating() {
        assert!(matches!(
            read_matrix(format!("{} 1 2 3", usize::MAX).as_bytes()),
            Err(InputError::OutOfMemory { .. })
        ));
    }
}
