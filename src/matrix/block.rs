use crate::error::MatrixError;
use crate::traits::Scalar;

use super::Matrix;

impl<T: Scalar> Matrix<T> {
    fn check_block(
        &self,
        row1: usize,
        row2: usize,
        col1: usize,
        col2: usize,
    ) -> Result<(), MatrixError> {
        if row1 > row2 || col1 > col2 {
            return Err(MatrixError::IndexMismatch {
                start: (row1, col1),
                end: (row2, col2),
            });
        }
        if row2 >= self.nrows || col2 >= self.ncols {
            return Err(MatrixError::IndexOutOfRange {
                row: row2,
                col: col2,
                rows: self.nrows,
                cols: self.ncols,
            });
        }
        Ok(())
    }

    /// Extract the inclusive block `[row1, row2] x [col1, col2]`.
    ///
    /// The result is `(row2 - row1 + 1) x (col2 - col1 + 1)` and owns a copy
    /// of the block.
    ///
    /// ```
    /// use densela::Matrix;
    /// let m = Matrix::from_fn(3, 3, |i, j| (i * 3 + j) as f64).unwrap();
    /// let b = m.minor(1, 2, 1, 2).unwrap();
    /// assert_eq!(b[(0, 0)], 4.0);
    /// assert_eq!(b[(1, 1)], 8.0);
    /// ```
    pub fn minor(
        &self,
        row1: usize,
        row2: usize,
        col1: usize,
        col2: usize,
    ) -> Result<Self, MatrixError> {
        self.check_block(row1, row2, col1, col2)?;
        Matrix::from_fn(row2 - row1 + 1, col2 - col1 + 1, |r, c| {
            self[(row1 + r, col1 + c)]
        })
    }

    /// Return a copy of `self` with the block `[row1, row2] x [col1, col2]`
    /// replaced by `replacement`.
    ///
    /// `replacement` must have exactly the block's shape. `self` is left
    /// untouched.
    ///
    /// ```
    /// use densela::Matrix;
    /// let m = Matrix::<f64>::zeros(3, 3).unwrap();
    /// let patch = Matrix::new(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
    /// let u = m.update_minor(1, 2, 1, 2, &patch).unwrap();
    /// assert_eq!(u[(1, 1)], 1.0);
    /// assert_eq!(u[(2, 2)], 4.0);
    /// assert_eq!(m[(2, 2)], 0.0);
    /// ```
    pub fn update_minor(
        &self,
        row1: usize,
        row2: usize,
        col1: usize,
        col2: usize,
        replacement: &Matrix<T>,
    ) -> Result<Self, MatrixError> {
        self.check_block(row1, row2, col1, col2)?;
        let block = (row2 - row1 + 1, col2 - col1 + 1);
        if replacement.shape() != block {
            return Err(MatrixError::ShapeMismatch {
                expected: block,
                got: replacement.shape(),
            });
        }
        let mut out = self.clone();
        for r in 0..block.0 {
            for c in 0..block.1 {
                out[(row1 + r, col1 + c)] = replacement[(r, c)];
            }
        }
        Ok(out)
    }
}
