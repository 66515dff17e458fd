//! Serialization of embedding results to writers.
//!
//! Values are written with `f64`'s `Display`, whose output parses back to
//! the identical bit pattern, so a written matrix survives a round trip
//! through the text loader.

use std::io::{self, Write};

use nalgebra::{DMatrix, DVector};

/// Writes the coordinate matrix transposed: one line per sample, one
/// value per target dimension.
///
/// # Errors
/// Returns [`io::Error`] when the writer fails.
///
/// # Examples
/// ```
/// use engawa_cli::output::write_embedding;
/// use nalgebra::DMatrix;
///
/// let coordinates = DMatrix::from_column_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
/// let mut buffer = Vec::new();
/// write_embedding(&coordinates, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?, "1 2\n3 4\n5 6\n");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn write_embedding<W: Write>(coordinates: &DMatrix<f64>, writer: &mut W) -> io::Result<()> {
    for sample in 0..coordinates.ncols() {
        for dimension in 0..coordinates.nrows() {
            if dimension > 0 {
                write!(writer, " ")?;
            }
            write!(writer, "{}", coordinates[(dimension, sample)])?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Writes a matrix row-major, one line per row.
///
/// # Errors
/// Returns [`io::Error`] when the writer fails.
pub fn write_matrix<W: Write>(matrix: &DMatrix<f64>, writer: &mut W) -> io::Result<()> {
    for row in 0..matrix.nrows() {
        for col in 0..matrix.ncols() {
            if col > 0 {
                write!(writer, " ")?;
            }
            write!(writer, "{}", matrix[(row, col)])?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Writes a vector, one value per line.
///
/// # Errors
/// Returns [`io::Error`] when the writer fails.
pub fn write_vector<W: Write>(vector: &DVector<f64>, writer: &mut W) -> io::Result<()> {
    for value in vector.iter() {
        writeln!(writer, "{value}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use engawa_providers_dense::read_dense_matrix;
    use nalgebra::DVector;

    #[test]
    fn embedding_round_trips_through_the_loader() {
        let coordinates = DMatrix::from_column_slice(
            2,
            3,
            &[0.125, -3.5, 1.0e-9, 42.75, -0.0625, 7.0],
        );
        let mut buffer = Vec::new();
        write_embedding(&coordinates, &mut buffer).expect("writing to a vec cannot fail");

        let restored = read_dense_matrix(buffer.as_slice()).expect("output must parse back");
        // The writer transposes, so samples come back as rows.
        assert_eq!(restored.shape(), (3, 2));
        for sample in 0..3 {
            for dimension in 0..2 {
                assert_relative_eq!(
                    restored[(sample, dimension)],
                    coordinates[(dimension, sample)],
                );
            }
        }
    }

    #[test]
    fn matrix_is_written_row_major() {
        let matrix = DMatrix::from_row_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let mut buffer = Vec::new();
        write_matrix(&matrix, &mut buffer).expect("writing to a vec cannot fail");
        assert_eq!(String::from_utf8(buffer).expect("ascii"), "1 2 3\n4 5 6\n");
    }

    #[test]
    fn vector_is_written_one_value_per_line() {
        let vector = DVector::from_vec(vec![1.5, -2.0]);
        let mut buffer = Vec::new();
        write_vector(&vector, &mut buffer).expect("writing to a vec cannot fail");
        assert_eq!(String::from_utf8(buffer).expect("ascii"), "1.5\n-2\n");
    }
}
