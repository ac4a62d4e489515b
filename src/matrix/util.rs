use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::{self, Write as _};

use super::Matrix;

// ── Map ─────────────────────────────────────────────────────────────

impl<T> Matrix<T> {
    /// Apply a function to every element, producing a new matrix.
    ///
    /// ```
    /// use densela::Matrix;
    /// let m = Matrix::new(2, 2, &[1.0_f64, 4.0, 9.0, 16.0]).unwrap();
    /// let r = m.map(|x: f64| x.sqrt());
    /// assert_eq!(r[(0, 0)], 1.0);
    /// assert_eq!(r[(1, 1)], 4.0);
    /// ```
    pub fn map<U>(&self, f: impl Fn(T) -> U) -> Matrix<U>
    where
        T: Copy,
    {
        let data: Vec<U> = self.data.iter().map(|&x| f(x)).collect();
        Matrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

// ── Display ─────────────────────────────────────────────────────────

/// One bracketed line per row, columns right-aligned.
impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<String> = self.data.iter().map(|x| x.to_string()).collect();

        let mut widths: Vec<usize> = alloc::vec![0; self.ncols];
        for row in cells.chunks(self.ncols) {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        for (i, row) in cells.chunks(self.ncols).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_char('[')?;
            for (j, (cell, &width)) in row.iter().zip(&widths).enumerate() {
                if j > 0 {
                    f.write_str("  ")?;
                }
                write!(f, "{:>width$}", cell, width = width)?;
            }
            f.write_char(']')?;
        }
        Ok(())
    }
}
