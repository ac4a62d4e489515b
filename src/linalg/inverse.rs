use crate::error::MatrixError;
use crate::traits::FloatScalar;
use crate::Matrix;

use super::qr::householder_qr;
use super::triangular::triangle_inverse;

/// Invert a square matrix through its QR decomposition.
///
/// With `A = QR`, `A⁻¹ = R⁻¹Qᵗ`. The rounding noise Householder leaves below
/// the diagonal of `R` is pruned at [`FloatScalar::PRUNE_TOLERANCE`] so that
/// `R` passes the exact triangularity check; a diagonal entry of `R` that
/// prunes to zero surfaces as `SingularMatrix`.
pub fn inverse<T: FloatScalar>(a: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
    if !a.is_square() {
        return Err(MatrixError::NotSquare {
            rows: a.nrows(),
            cols: a.ncols(),
        });
    }
    let (q, r) = householder_qr(a)?;
    let r_inv = triangle_inverse(&r.prune_default())?;
    r_inv.multiply(&q.transpose())
}

impl<T: FloatScalar> Matrix<T> {
    /// Matrix inverse via Householder QR.
    ///
    /// ```
    /// use densela::Matrix;
    /// let a = Matrix::new(2, 2, &[4.0_f64, 7.0, 2.0, 6.0]).unwrap();
    /// let a_inv = a.inverse().unwrap();
    /// let id = a.multiply(&a_inv).unwrap();
    /// assert!((id[(0, 0)] - 1.0).abs() < 1e-12);
    /// assert!((id[(0, 1)]).abs() < 1e-12);
    /// ```
    pub fn inverse(&self) -> Result<Self, MatrixError> {
        inverse(self)
    }
}
