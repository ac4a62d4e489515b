/// Errors from matrix construction, access and linear algebra.
///
/// Every fallible operation in the crate returns this type, and the
/// decompositions propagate errors from their building blocks unchanged.
///
/// ```
/// use densela::{Matrix, MatrixError};
///
/// let err = Matrix::new(2, 2, &[1.0_f64, 2.0, 3.0, 4.0, 5.0]).unwrap_err();
/// assert_eq!(err, MatrixError::TooManyElements { capacity: 4, got: 5 });
///
/// let wide = Matrix::new(2, 3, &[1.0_f64; 6]).unwrap();
/// assert_eq!(wide.inverse().unwrap_err(), MatrixError::NotSquare { rows: 2, cols: 3 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatrixError {
    /// A matrix was requested with zero rows or zero columns.
    InvalidDimensions { rows: usize, cols: usize },
    /// The initializer holds more elements than `rows * cols`.
    TooManyElements { capacity: usize, got: usize },
    /// A binary operation received operands of incompatible shapes.
    ShapeMismatch {
        expected: (usize, usize),
        got: (usize, usize),
    },
    /// Element access outside the matrix.
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    /// A block range ends outside the matrix.
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    /// A block range starts after it ends.
    IndexMismatch {
        start: (usize, usize),
        end: (usize, usize),
    },
    /// The operation requires a square matrix.
    NotSquare { rows: usize, cols: usize },
    /// The operation requires an upper- or lower-triangular matrix.
    NotTriangular,
    /// The operation requires a single row or a single column.
    NotAVector { rows: usize, cols: usize },
    /// A vector of zero length cannot be normalized.
    ZeroNorm,
    /// Zero pivot on the diagonal at `index`.
    SingularMatrix { index: usize },
    /// The Householder vector at elimination `step` has no usable direction.
    DegenerateReflection { step: usize },
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match *self {
            MatrixError::InvalidDimensions { rows, cols } => {
                write!(f, "invalid matrix dimensions {}x{}", rows, cols)
            }
            MatrixError::TooManyElements { capacity, got } => write!(
                f,
                "{} elements supplied for a matrix holding {}",
                got, capacity
            ),
            MatrixError::ShapeMismatch { expected, got } => write!(
                f,
                "shape mismatch: expected {}x{}, got {}x{}",
                expected.0, expected.1, got.0, got.1
            ),
            MatrixError::IndexOutOfBounds { row, col, rows, cols } => write!(
                f,
                "index ({}, {}) out of bounds for {}x{} matrix",
                row, col, rows, cols
            ),
            MatrixError::IndexOutOfRange { row, col, rows, cols } => write!(
                f,
                "block end ({}, {}) out of range for {}x{} matrix",
                row, col, rows, cols
            ),
            MatrixError::IndexMismatch { start, end } => write!(
                f,
                "block start ({}, {}) lies after block end ({}, {})",
                start.0, start.1, end.0, end.1
            ),
            MatrixError::NotSquare { rows, cols } => {
                write!(f, "matrix is not square ({}x{})", rows, cols)
            }
            MatrixError::NotTriangular => write!(f, "matrix is not triangular"),
            MatrixError::NotAVector { rows, cols } => {
                write!(f, "{}x{} matrix is not a vector", rows, cols)
            }
            MatrixError::ZeroNorm => write!(f, "vector has zero norm"),
            MatrixError::SingularMatrix { index } => {
                write!(f, "matrix is singular: zero pivot at diagonal {}", index)
            }
            MatrixError::DegenerateReflection { step } => {
                write!(f, "degenerate Householder reflection at step {}", step)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MatrixError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_messages() {
        assert_eq!(
            MatrixError::InvalidDimensions { rows: 0, cols: 3 }.to_string(),
            "invalid matrix dimensions 0x3"
        );
        assert_eq!(
            MatrixError::SingularMatrix { index: 2 }.to_string(),
            "matrix is singular: zero pivot at diagonal 2"
        );
        assert_eq!(
            MatrixError::ShapeMismatch { expected: (2, 2), got: (3, 1) }.to_string(),
            "shape mismatch: expected 2x2, got 3x1"
        );
    }
}
