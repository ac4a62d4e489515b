pub mod aliases;
mod block;
mod norm;
mod ops;
mod square;
mod util;

pub use aliases::*;
pub use norm::Norm;

use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::error::MatrixError;
use crate::traits::Scalar;

/// Dense heap-allocated matrix with runtime dimensions.
///
/// Row-major `Vec<T>` storage: element `(i, j)` lives at `i * ncols + j`.
/// Both dimensions are at least one and the shape never changes after
/// construction. Every transforming operation returns a matrix with its own
/// storage; only [`set`](Matrix::set) and `IndexMut` write in place.
///
/// # Examples
///
/// ```
/// use densela::Matrix;
///
/// let a = Matrix::new(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]).unwrap();
/// assert_eq!(a.get(0, 1).unwrap(), 2.0);
/// assert_eq!(a[(1, 0)], 3.0);
/// assert_eq!(a.nrows(), 2);
/// assert_eq!(a.ncols(), 2);
///
/// let b = Matrix::<f64>::identity(3, 3).unwrap();
/// assert_eq!(b[(0, 0)], 1.0);
/// assert_eq!(b[(0, 1)], 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    nrows: usize,
    ncols: usize,
}

/// Validate a shape and return its element count.
#[inline]
fn check_dims(nrows: usize, ncols: usize) -> Result<usize, MatrixError> {
    let invalid = MatrixError::InvalidDimensions {
        rows: nrows,
        cols: ncols,
    };
    if nrows < 1 || ncols < 1 {
        return Err(invalid);
    }
    nrows.checked_mul(ncols).ok_or(invalid)
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Create an `nrows x ncols` matrix from row-major `elements`.
    ///
    /// A short initializer is valid: positions past its end are zero.
    /// Fails with `InvalidDimensions` on a zero dimension and with
    /// `TooManyElements` if `elements` does not fit.
    ///
    /// ```
    /// use densela::Matrix;
    /// let m = Matrix::new(2, 3, &[1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(m[(1, 0)], 4.0);
    /// assert_eq!(m[(1, 2)], 0.0);
    /// ```
    pub fn new(nrows: usize, ncols: usize, elements: &[T]) -> Result<Self, MatrixError> {
        let capacity = check_dims(nrows, ncols)?;
        if elements.len() > capacity {
            return Err(MatrixError::TooManyElements {
                capacity,
                got: elements.len(),
            });
        }
        let mut data = vec![T::zero(); capacity];
        data[..elements.len()].copy_from_slice(elements);
        Ok(Self { data, nrows, ncols })
    }

    /// Create an `nrows x ncols` matrix of zeros.
    ///
    /// ```
    /// use densela::Matrix;
    /// let m = Matrix::<f64>::zeros(2, 3).unwrap();
    /// assert_eq!(m.nrows(), 2);
    /// assert_eq!(m.ncols(), 3);
    /// assert_eq!(m[(1, 2)], 0.0);
    /// ```
    pub fn zeros(nrows: usize, ncols: usize) -> Result<Self, MatrixError> {
        Self::fill(nrows, ncols, T::zero())
    }

    /// Create an `nrows x ncols` matrix of ones.
    pub fn ones(nrows: usize, ncols: usize) -> Result<Self, MatrixError> {
        Self::fill(nrows, ncols, T::one())
    }

    /// Create a matrix filled with a given value.
    ///
    /// ```
    /// use densela::Matrix;
    /// let m = Matrix::fill(2, 3, 7.0_f64).unwrap();
    /// assert_eq!(m[(0, 0)], 7.0);
    /// assert_eq!(m[(1, 2)], 7.0);
    /// ```
    pub fn fill(nrows: usize, ncols: usize, value: T) -> Result<Self, MatrixError> {
        let len = check_dims(nrows, ncols)?;
        Ok(Self {
            data: vec![value; len],
            nrows,
            ncols,
        })
    }

    /// Create an `nrows x ncols` identity matrix.
    ///
    /// Ones run along the leading diagonal of length `min(nrows, ncols)`.
    ///
    /// ```
    /// use densela::Matrix;
    /// let id = Matrix::<f64>::identity(2, 3).unwrap();
    /// assert_eq!(id[(1, 1)], 1.0);
    /// assert_eq!(id[(1, 2)], 0.0);
    /// ```
    pub fn identity(nrows: usize, ncols: usize) -> Result<Self, MatrixError> {
        let mut m = Self::zeros(nrows, ncols)?;
        for i in 0..nrows.min(ncols) {
            m[(i, i)] = T::one();
        }
        Ok(m)
    }

    /// Create a column vector holding `values`.
    ///
    /// Transpose the result for a row vector.
    ///
    /// ```
    /// use densela::Matrix;
    /// let v = Matrix::vector(&[1.0, 0.0, 0.0]).unwrap();
    /// assert_eq!(v.nrows(), 3);
    /// assert_eq!(v.ncols(), 1);
    /// ```
    pub fn vector(values: &[T]) -> Result<Self, MatrixError> {
        Self::new(values.len(), 1, values)
    }
}

impl<T> Matrix<T> {
    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use densela::Matrix;
    /// let m = Matrix::from_fn(3, 3, |i, j| if i == j { 1.0_f64 } else { 0.0 }).unwrap();
    /// assert_eq!(m[(0, 0)], 1.0);
    /// assert_eq!(m[(0, 1)], 0.0);
    /// ```
    pub fn from_fn(
        nrows: usize,
        ncols: usize,
        f: impl Fn(usize, usize) -> T,
    ) -> Result<Self, MatrixError> {
        let len = check_dims(nrows, ncols)?;
        let mut data = Vec::with_capacity(len);
        for i in 0..nrows {
            for j in 0..ncols {
                data.push(f(i, j));
            }
        }
        Ok(Self { data, nrows, ncols })
    }

    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Number of stored elements, `nrows * ncols`.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false`: a matrix holds at least one element.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether the matrix is square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// `(nrows, ncols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// View the elements as a flat row-major slice.
    ///
    /// ```
    /// use densela::Matrix;
    /// let m = Matrix::new(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    /// ```
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    fn check_index(&self, row: usize, col: usize) -> Result<usize, MatrixError> {
        if row >= self.nrows || col >= self.ncols {
            return Err(MatrixError::IndexOutOfBounds {
                row,
                col,
                rows: self.nrows,
                cols: self.ncols,
            });
        }
        Ok(row * self.ncols + col)
    }
}

// ── Checked access ──────────────────────────────────────────────────

impl<T: Copy> Matrix<T> {
    /// Read element `(row, col)`.
    ///
    /// ```
    /// use densela::{Matrix, MatrixError};
    /// let m = Matrix::new(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(m.get(1, 1), Ok(4.0));
    /// assert!(matches!(m.get(2, 0), Err(MatrixError::IndexOutOfBounds { .. })));
    /// ```
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Result<T, MatrixError> {
        let idx = self.check_index(row, col)?;
        Ok(self.data[idx])
    }

    /// Overwrite element `(row, col)` in place.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), MatrixError> {
        let idx = self.check_index(row, col)?;
        self.data[idx] = value;
        Ok(())
    }
}

// ── Index ───────────────────────────────────────────────────────────

/// Unchecked-shape indexing. Panics if `(row, col)` lies outside the matrix;
/// use [`Matrix::get`] / [`Matrix::set`] for fallible access.
impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.nrows && col < self.ncols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row, col, self.nrows, self.ncols,
        );
        &self.data[row * self.ncols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < self.nrows && col < self.ncols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row, col, self.nrows, self.ncols,
        );
        &mut self.data[row * self.ncols + col]
    }
}
