use crate::traits::{FloatScalar, Scalar};

use super::Matrix;

impl<T: Scalar> Matrix<T> {
    /// Sum of the `min(nrows, ncols)` leading diagonal elements.
    ///
    /// ```
    /// use densela::Matrix;
    /// let m = Matrix::new(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(m.trace(), 5.0);
    /// ```
    pub fn trace(&self) -> T {
        let n = self.nrows.min(self.ncols);
        let mut sum = T::zero();
        for i in 0..n {
            sum = sum + self[(i, i)];
        }
        sum
    }

    /// Whether the matrix is square with only zeros strictly below the diagonal.
    ///
    /// Uses exact comparison against zero; run [`prune`](Matrix::prune) first
    /// to absorb rounding noise.
    ///
    /// ```
    /// use densela::Matrix;
    /// let u = Matrix::new(2, 2, &[1.0, 2.0, 0.0, 3.0]).unwrap();
    /// assert!(u.is_upper_triangular());
    /// assert!(!u.transpose().is_upper_triangular());
    /// ```
    pub fn is_upper_triangular(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        for i in 1..self.nrows {
            for j in 0..i {
                if self[(i, j)] != T::zero() {
                    return false;
                }
            }
        }
        true
    }

    /// Whether the matrix is square with only zeros strictly above the diagonal.
    pub fn is_lower_triangular(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        for i in 0..self.nrows {
            for j in (i + 1)..self.ncols {
                if self[(i, j)] != T::zero() {
                    return false;
                }
            }
        }
        true
    }
}

impl<T: FloatScalar> Matrix<T> {
    /// Flush every element with `|x| < tolerance` to exact zero.
    ///
    /// ```
    /// use densela::Matrix;
    /// let m = Matrix::new(1, 3, &[1e-12_f64, 4e-3, -1e-11]).unwrap();
    /// assert_eq!(m.prune(1e-10).as_slice(), &[0.0, 4e-3, 0.0]);
    /// ```
    pub fn prune(&self, tolerance: T) -> Self {
        self.map(|x| if x.abs() < tolerance { T::zero() } else { x })
    }

    /// [`prune`](Matrix::prune) with [`FloatScalar::PRUNE_TOLERANCE`].
    pub fn prune_default(&self) -> Self {
        self.prune(T::PRUNE_TOLERANCE)
    }
}
