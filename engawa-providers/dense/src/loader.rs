//! Plain-text dense matrix reader.
//!
//! The format is whitespace-delimited numbers, one matrix row per line.
//! Dimensions are inferred: the first non-blank line fixes the column
//! count and every following line must match it. Blank lines are skipped.

use std::io::BufRead;

use nalgebra::DMatrix;

use crate::errors::DenseLoadError;

/// Reads a whitespace-delimited numeric matrix from `reader`.
///
/// # Errors
/// Returns [`DenseLoadError::InvalidToken`] for an unparseable value,
/// [`DenseLoadError::RaggedRow`] when a line disagrees with the inferred
/// column count, [`DenseLoadError::EmptyInput`] when no numeric row was
/// found, and [`DenseLoadError::Io`] when the stream fails.
///
/// # Examples
/// ```
/// use engawa_providers_dense::read_dense_matrix;
///
/// let matrix = read_dense_matrix("1 2 3\n4 5 6\n".as_bytes())?;
/// assert_eq!(matrix.shape(), (2, 3));
/// assert_eq!(matrix[(1, 2)], 6.0);
/// # Ok::<(), engawa_providers_dense::DenseLoadError>(())
/// ```
pub fn read_dense_matrix<R: BufRead>(reader: R) -> Result<DMatrix<f64>, DenseLoadError> {
    let mut values = Vec::new();
    let mut nrows = 0_usize;
    let mut ncols = 0_usize;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;
        let mut row_width = 0_usize;
        for token in line.split_whitespace() {
            let value: f64 = token.parse().map_err(|_| DenseLoadError::InvalidToken {
                line: line_number,
                token: token.to_owned(),
            })?;
            values.push(value);
            row_width += 1;
        }
        if row_width == 0 {
            continue;
        }
        if nrows == 0 {
            ncols = row_width;
        } else if row_width != ncols {
            return Err(DenseLoadError::RaggedRow {
                line: line_number,
                expected: ncols,
                got: row_width,
            });
        }
        nrows += 1;
    }

    if nrows == 0 {
        return Err(DenseLoadError::EmptyInput);
    }
    Ok(DMatrix::from_row_iterator(nrows, ncols, values))
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[test]
    fn reads_rows_and_infers_dimensions() {
        let matrix = read_dense_matrix("1 2 3\n4 5 6\n".as_bytes())
            .expect("well-formed input must load");
        assert_eq!(matrix.shape(), (2, 3));
        assert_eq!(matrix[(0, 0)], 1.0);
        assert_eq!(matrix[(1, 1)], 5.0);
    }

    #[test]
    fn skips_blank_lines() {
        let matrix = read_dense_matrix("1 2\n\n3 4\n\n".as_bytes())
            .expect("blank lines must not count as rows");
        assert_eq!(matrix.shape(), (2, 2));
        assert_eq!(matrix[(1, 0)], 3.0);
    }

    #[test]
    fn accepts_arbitrary_whitespace_between_values() {
        let matrix = read_dense_matrix("1\t2   3\n 4 5 6\n".as_bytes())
            .expect("tabs and runs of spaces must delimit");
        assert_eq!(matrix.shape(), (2, 3));
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = read_dense_matrix("1 2 3\n4 5\n".as_bytes())
            .expect_err("ragged input must fail");
        assert!(matches!(
            err,
            DenseLoadError::RaggedRow {
                line: 2,
                expected: 3,
                got: 2,
            }
        ));
    }

    #[rstest]
    #[case("1 x 3\n", "x")]
    #[case("1 2\n3 4..5\n", "4..5")]
    fn rejects_unparseable_tokens(#[case] input: &str, #[case] bad: &str) {
        let err = read_dense_matrix(input.as_bytes()).expect_err("bad token must fail");
        match err {
            DenseLoadError::InvalidToken { token, .. } => assert_eq!(token, bad),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[rstest]
    #[case("")]
    #[case("\n\n")]
    fn rejects_empty_input(#[case] input: &str) {
        let err = read_dense_matrix(input.as_bytes()).expect_err("empty input must fail");
        assert!(matches!(err, DenseLoadError::EmptyInput));
        assert_eq!(err.code(), "DENSE_EMPTY_INPUT");
    }
}
