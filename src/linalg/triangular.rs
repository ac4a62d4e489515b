use crate::error::MatrixError;
use crate::traits::FloatScalar;
use crate::Matrix;

fn check_pivots<T: FloatScalar>(t: &Matrix<T>) -> Result<(), MatrixError> {
    for i in 0..t.nrows() {
        if t[(i, i)] == T::zero() {
            return Err(MatrixError::SingularMatrix { index: i });
        }
    }
    Ok(())
}

/// Dot product of the row segment `t[row, cols]` with the column segment
/// `inv[cols, col]`, both inclusive ranges.
fn segment_dot<T: FloatScalar>(
    t: &Matrix<T>,
    inv: &Matrix<T>,
    row: usize,
    first: usize,
    last: usize,
    col: usize,
) -> Result<T, MatrixError> {
    let lhs = t.minor(row, row, first, last)?;
    let rhs = inv.minor(first, last, col, col)?;
    Ok(lhs.multiply(&rhs)?[(0, 0)])
}

/// Back substitution, last column first.
fn upper_inverse<T: FloatScalar>(t: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
    let n = t.nrows();
    let mut inv = Matrix::zeros(n, n)?;
    for k in (0..n).rev() {
        inv[(k, k)] = T::one() / t[(k, k)];
        for i in (0..k).rev() {
            // inv[(i, k)] is still zero, so including it in the segment is harmless
            let dot = segment_dot(t, &inv, i, i, k, k)?;
            inv[(i, k)] = -dot / t[(i, i)];
        }
    }
    Ok(inv)
}

/// Forward substitution, first column first.
fn lower_inverse<T: FloatScalar>(t: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
    let n = t.nrows();
    let mut inv = Matrix::zeros(n, n)?;
    for k in 0..n {
        inv[(k, k)] = T::one() / t[(k, k)];
        for i in (k + 1)..n {
            let dot = segment_dot(t, &inv, i, k, i, k)?;
            inv[(i, k)] = -dot / t[(i, i)];
        }
    }
    Ok(inv)
}

/// Invert a triangular matrix by substitution.
///
/// Upper-triangular input is checked first, so a diagonal matrix takes the
/// upper path. Each column of the inverse is resolved from the diagonal
/// outwards using only entries already computed, so the zero half of the
/// input is never touched.
///
/// Fails with `NotSquare`, `NotTriangular` (exact-zero test, see
/// [`Matrix::is_upper_triangular`]) or `SingularMatrix` for a zero on the
/// diagonal.
pub fn triangle_inverse<T: FloatScalar>(t: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
    if !t.is_square() {
        return Err(MatrixError::NotSquare {
            rows: t.nrows(),
            cols: t.ncols(),
        });
    }
    if t.is_upper_triangular() {
        check_pivots(t)?;
        upper_inverse(t)
    } else if t.is_lower_triangular() {
        check_pivots(t)?;
        lower_inverse(t)
    } else {
        Err(MatrixError::NotTriangular)
    }
}

impl<T: FloatScalar> Matrix<T> {
    /// Inverse of an upper- or lower-triangular matrix.
    ///
    /// ```
    /// use densela::Matrix;
    /// let t = Matrix::new(2, 2, &[2.0_f64, 1.0, 0.0, 4.0]).unwrap();
    /// let inv = t.triangle_inverse().unwrap();
    /// assert_eq!(inv.as_slice(), &[0.5, -0.125, 0.0, 0.25]);
    /// ```
    pub fn triangle_inverse(&self) -> Result<Self, MatrixError> {
        triangle_inverse(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    fn assert_matrix_near(a: &Matrix<f64>, b: &Matrix<f64>, tol: f64) {
        assert_eq!(a.shape(), b.shape());
        for i in 0..a.nrows() {
            for j in 0..a.ncols() {
                let (x, y) = (a[(i, j)], b[(i, j)]);
                assert!((x - y).abs() < tol, "[({},{})]: {} vs {}", i, j, x, y);
            }
        }
    }

    fn upper4() -> Matrix<f64> {
        Matrix::new(
            4,
            4,
            &[1.0, 2.0, 3.0, 4.0, 0.0, 5.0, 6.0, 7.0, 0.0, 0.0, 8.0, 9.0, 0.0, 0.0, 0.0, 10.0],
        )
        .unwrap()
    }

    #[test]
    fn upper_inverse_known() {
        let inv = triangle_inverse(&upper4()).unwrap();
        let expected = Matrix::new(
            4,
            4,
            &[
                1.0, -0.4, -0.075, -0.0525, 0.0, 0.2, -0.15, -0.005, 0.0, 0.0, 0.125, -0.1125,
                0.0, 0.0, 0.0, 0.1,
            ],
        )
        .unwrap();
        assert_matrix_near(&inv, &expected, TOL);
        assert!(inv.is_upper_triangular());
    }

    #[test]
    fn upper_inverse_times_original() {
        let t = upper4();
        let inv = t.triangle_inverse().unwrap();
        let id = Matrix::identity(4, 4).unwrap();
        assert_matrix_near(&t.multiply(&inv).unwrap(), &id, TOL);
        assert_matrix_near(&inv.multiply(&t).unwrap(), &id, TOL);
    }

    #[test]
    fn lower_inverse() {
        let l = upper4().transpose();
        let inv = l.triangle_inverse().unwrap();
        assert!(inv.is_lower_triangular());
        let id = Matrix::identity(4, 4).unwrap();
        assert_matrix_near(&l.multiply(&inv).unwrap(), &id, TOL);
        // inverse of the transpose is the transpose of the inverse
        let up_inv = upper4().triangle_inverse().unwrap();
        assert_matrix_near(&inv, &up_inv.transpose(), TOL);
    }

    #[test]
    fn diagonal_inverse() {
        let d = Matrix::new(3, 3, &[2.0, 0.0, 0.0, 0.0, 4.0, 0.0, 0.0, 0.0, -8.0]).unwrap();
        let inv = d.triangle_inverse().unwrap();
        assert_eq!(
            inv.as_slice(),
            &[0.5, 0.0, 0.0, 0.0, 0.25, 0.0, 0.0, 0.0, -0.125]
        );
    }

    #[test]
    fn not_square() {
        let m = Matrix::<f64>::zeros(2, 3).unwrap();
        assert_eq!(
            triangle_inverse(&m).unwrap_err(),
            MatrixError::NotSquare { rows: 2, cols: 3 }
        );
    }

    #[test]
    fn not_triangular() {
        let m = Matrix::new(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(triangle_inverse(&m).unwrap_err(), MatrixError::NotTriangular);
    }

    #[test]
    fn zero_pivot_is_singular() {
        let upper = Matrix::new(3, 3, &[1.0, 2.0, 3.0, 0.0, 0.0, 4.0, 0.0, 0.0, 5.0]).unwrap();
        assert_eq!(
            triangle_inverse(&upper).unwrap_err(),
            MatrixError::SingularMatrix { index: 1 }
        );
        let lower = upper.transpose();
        assert_eq!(
            triangle_inverse(&lower).unwrap_err(),
            MatrixError::SingularMatrix { index: 1 }
        );
    }

    #[test]
    fn one_by_one() {
        let m = Matrix::new(1, 1, &[4.0]).unwrap();
        assert_eq!(m.triangle_inverse().unwrap().as_slice(), &[0.25]);
    }
}
