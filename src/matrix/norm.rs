use num_traits::{One, Zero};

use crate::error::MatrixError;
use crate::traits::{FloatScalar, Scalar};

use super::Matrix;

/// Norm kinds accepted by [`Matrix::norm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Norm {
    /// Euclidean (L2) norm, see [`Matrix::norm2`].
    #[default]
    Euclidean,
}

impl<T: Scalar> Matrix<T> {
    /// Whether the matrix is a single row or a single column.
    ///
    /// ```
    /// use densela::Matrix;
    /// assert!(Matrix::vector(&[1.0, 0.0, 0.0]).unwrap().is_vector());
    /// assert!(!Matrix::<f64>::zeros(2, 2).unwrap().is_vector());
    /// ```
    #[inline]
    pub fn is_vector(&self) -> bool {
        self.nrows == 1 || self.ncols == 1
    }
}

impl<T: FloatScalar> Matrix<T> {
    /// Norm of the requested kind.
    pub fn norm(&self, kind: Norm) -> T {
        match kind {
            Norm::Euclidean => self.norm2(),
        }
    }

    /// Column-wise Euclidean norm.
    ///
    /// Sums the squares of each column and returns the square root of the
    /// largest sum. For a row or column vector this is the ordinary L2 norm.
    /// For other shapes it is the largest column length, not the spectral norm.
    ///
    /// ```
    /// use densela::Matrix;
    /// let v = Matrix::vector(&[3.0_f64, 4.0]).unwrap();
    /// assert!((v.norm2() - 5.0).abs() < 1e-12);
    /// let row = v.transpose();
    /// assert!((row.norm2() - 5.0).abs() < 1e-12);
    /// ```
    pub fn norm2(&self) -> T {
        // A row vector is one column per element; sum across it instead.
        if self.nrows == 1 {
            return self.frobenius_norm();
        }
        let mut max = <T as Zero>::zero();
        for j in 0..self.ncols {
            let mut sum = <T as Zero>::zero();
            for i in 0..self.nrows {
                let x = self[(i, j)];
                sum = sum + x * x;
            }
            if sum > max {
                max = sum;
            }
        }
        max.sqrt()
    }

    /// Frobenius norm (square root of the sum of all squared elements).
    ///
    /// ```
    /// use densela::Matrix;
    /// let m = Matrix::new(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]).unwrap();
    /// assert!((m.frobenius_norm() - 30.0_f64.sqrt()).abs() < 1e-12);
    /// ```
    pub fn frobenius_norm(&self) -> T {
        let mut sum = <T as Zero>::zero();
        for &x in &self.data {
            sum = sum + x * x;
        }
        sum.sqrt()
    }

    /// Scale a vector to unit Euclidean length.
    ///
    /// Fails with `NotAVector` for any shape other than a single row or
    /// column, and with `ZeroNorm` for the zero vector.
    ///
    /// ```
    /// use densela::Matrix;
    /// let v = Matrix::vector(&[3.0_f64, 4.0]).unwrap();
    /// let u = v.unit().unwrap();
    /// assert!((u[(0, 0)] - 0.6).abs() < 1e-12);
    /// assert!((u.norm2() - 1.0).abs() < 1e-12);
    /// ```
    pub fn unit(&self) -> Result<Self, MatrixError> {
        if !self.is_vector() {
            return Err(MatrixError::NotAVector {
                rows: self.nrows,
                cols: self.ncols,
            });
        }
        let n = self.norm2();
        if n == <T as Zero>::zero() {
            return Err(MatrixError::ZeroNorm);
        }
        Ok(self.scale(<T as One>::one() / n))
    }
}
