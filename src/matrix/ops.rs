use alloc::vec;
use core::ops::Neg;

use crate::error::MatrixError;
use crate::traits::Scalar;

use super::Matrix;

impl<T: Scalar> Matrix<T> {
    fn check_same_shape(&self, rhs: &Self) -> Result<(), MatrixError> {
        if self.shape() != rhs.shape() {
            return Err(MatrixError::ShapeMismatch {
                expected: self.shape(),
                got: rhs.shape(),
            });
        }
        Ok(())
    }

    fn zip_with(&self, rhs: &Self, f: impl Fn(T, T) -> T) -> Result<Self, MatrixError> {
        self.check_same_shape(rhs)?;
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Matrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        })
    }

    /// Element-wise sum. Shapes must match.
    ///
    /// ```
    /// use densela::Matrix;
    /// let a = Matrix::new(1, 2, &[1.0, 2.0]).unwrap();
    /// let b = Matrix::new(1, 2, &[3.0, 4.0]).unwrap();
    /// assert_eq!(a.add(&b).unwrap().as_slice(), &[4.0, 6.0]);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, rhs: &Self) -> Result<Self, MatrixError> {
        self.zip_with(rhs, |a, b| a + b)
    }

    /// Element-wise difference `self - rhs`. Shapes must match.
    pub fn subtract(&self, rhs: &Self) -> Result<Self, MatrixError> {
        self.zip_with(rhs, |a, b| a - b)
    }

    /// Matrix product `self * rhs`.
    ///
    /// Requires `self.ncols() == rhs.nrows()`; the result is
    /// `self.nrows() x rhs.ncols()`.
    ///
    /// ```
    /// use densela::Matrix;
    /// let a = Matrix::new(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
    /// let b = Matrix::new(2, 2, &[5.0, 6.0, 7.0, 8.0]).unwrap();
    /// let c = a.multiply(&b).unwrap();
    /// assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
    /// ```
    pub fn multiply(&self, rhs: &Self) -> Result<Self, MatrixError> {
        if self.ncols != rhs.nrows {
            return Err(MatrixError::ShapeMismatch {
                expected: (self.ncols, rhs.ncols),
                got: rhs.shape(),
            });
        }
        let m = self.nrows;
        let n = rhs.ncols;
        let p = self.ncols;
        let mut data = vec![T::zero(); m * n];
        // i-k-j order keeps both inner accesses row-contiguous
        for i in 0..m {
            let out = &mut data[i * n..(i + 1) * n];
            for k in 0..p {
                let a_ik = self.data[i * p + k];
                let rhs_row = &rhs.data[k * n..(k + 1) * n];
                for (o, &b) in out.iter_mut().zip(rhs_row) {
                    *o = *o + a_ik * b;
                }
            }
        }
        Ok(Matrix {
            data,
            nrows: m,
            ncols: n,
        })
    }

    /// Multiply every element by `s`.
    pub fn scale(&self, s: T) -> Self {
        self.map(|x| x * s)
    }

    /// Transpose: `m x n` becomes `n x m`.
    ///
    /// ```
    /// use densela::Matrix;
    /// let m = Matrix::new(2, 3, &[1, 2, 3, 4, 5, 6]).unwrap();
    /// let t = m.transpose();
    /// assert_eq!(t.shape(), (3, 2));
    /// assert_eq!(t.as_slice(), &[1, 4, 2, 5, 3, 6]);
    /// ```
    pub fn transpose(&self) -> Self {
        let mut data = vec![T::zero(); self.data.len()];
        for i in 0..self.nrows {
            for j in 0..self.ncols {
                data[j * self.nrows + i] = self.data[i * self.ncols + j];
            }
        }
        Matrix {
            data,
            nrows: self.ncols,
            ncols: self.nrows,
        }
    }
}

impl<T: Scalar + Neg<Output = T>> Neg for Matrix<T> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|x| -x)
    }
}

impl<T: Scalar + Neg<Output = T>> Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        self.map(|x| -x)
    }
}
