use crate::error::MatrixError;
use crate::traits::FloatScalar;
use crate::Matrix;

/// Apply the reflector `H = I - 2uuᵗ` to `block` from the left.
///
/// Computes `block - 2u(uᵗ block)` without forming `H`.
fn reflect<T: FloatScalar>(u: &Matrix<T>, block: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
    let proj = u.transpose().multiply(block)?;
    let update = u.multiply(&proj)?.scale(T::two());
    block.subtract(&update)
}

/// QR decomposition by Householder reflections, `A = Q * R`.
///
/// For an `m x n` input returns `(Q, R)` with `Q` orthogonal (`m x m`) and
/// `R` upper triangular (`m x n`). Entries of `R` below the diagonal are
/// exactly zero.
///
/// Step `k` reflects the sub-column `R[k.., k]` onto `∓‖x‖e₀`, choosing the
/// sign opposite to `x[0]`. A sub-column that is already exactly zero needs no
/// reflection and the step is skipped. Fails with `DegenerateReflection` when
/// the Householder vector has zero or non-finite length, which happens only
/// for non-finite input.
pub fn householder_qr<T: FloatScalar>(
    a: &Matrix<T>,
) -> Result<(Matrix<T>, Matrix<T>), MatrixError> {
    let m = a.nrows();
    let n = a.ncols();

    // Reflections accumulate into Qᵗ.
    let mut qt = Matrix::identity(m, m)?;
    let mut r = a.clone();

    for k in 0..m.min(n) {
        let x = r.minor(k, m - 1, k, k)?;
        let norm_x = x.norm2();
        if norm_x == T::zero() {
            continue;
        }

        let mut y = Matrix::zeros(m - k, 1)?;
        let y0 = if x[(0, 0)] < T::zero() { norm_x } else { -norm_x };
        y.set(0, 0, y0)?;

        let v = x.subtract(&y)?;
        let norm_v = v.norm2();
        if norm_v == T::zero() || !norm_v.is_finite() {
            return Err(MatrixError::DegenerateReflection { step: k });
        }
        let u = v.scale(T::one() / norm_v);

        let r1 = r.minor(k, m - 1, k, n - 1)?;
        r = r.update_minor(k, m - 1, k, n - 1, &reflect(&u, &r1)?)?;
        // H x = y0 e₀ exactly
        r[(k, k)] = y0;
        for i in k + 1..m {
            r[(i, k)] = T::zero();
        }

        let q1 = qt.minor(k, m - 1, 0, m - 1)?;
        qt = qt.update_minor(k, m - 1, 0, m - 1, &reflect(&u, &q1)?)?;
    }

    Ok((qt.transpose(), r))
}

/// QR decomposition of a dense matrix.
///
/// Owns the orthogonal factor `Q` and the upper-triangular factor `R`.
///
/// # Example
///
/// ```
/// use densela::Matrix;
///
/// let a = Matrix::new(3, 3, &[
///     12.0_f64, -51.0, 4.0,
///     6.0, 167.0, -68.0,
///     -4.0, 24.0, -41.0,
/// ]).unwrap();
/// let qr = a.qr().unwrap();
/// let prod = qr.q().multiply(qr.r()).unwrap();
/// for i in 0..3 {
///     for j in 0..3 {
///         assert!((prod[(i, j)] - a[(i, j)]).abs() < 1e-10);
///     }
/// }
/// assert!((qr.r()[(0, 0)].abs() - 14.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct QrDecomposition<T> {
    q: Matrix<T>,
    r: Matrix<T>,
}

impl<T: FloatScalar> QrDecomposition<T> {
    /// Decompose a matrix.
    pub fn new(a: &Matrix<T>) -> Result<Self, MatrixError> {
        let (q, r) = householder_qr(a)?;
        Ok(Self { q, r })
    }

    /// The orthogonal factor (`m x m`).
    pub fn q(&self) -> &Matrix<T> {
        &self.q
    }

    /// The upper-triangular factor (`m x n`).
    pub fn r(&self) -> &Matrix<T> {
        &self.r
    }

    /// Hand both factors to the caller as `(Q, R)`.
    pub fn into_parts(self) -> (Matrix<T>, Matrix<T>) {
        (self.q, self.r)
    }
}

impl<T: FloatScalar> Matrix<T> {
    /// QR decomposition using Householder reflections.
    pub fn qr(&self) -> Result<QrDecomposition<T>, MatrixError> {
        QrDecomposition::new(self)
    }
}
