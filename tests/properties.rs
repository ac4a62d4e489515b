use densela::{Matrix, MatrixError, Matrixf64};

const TOL: f64 = 1e-9;

fn assert_matrix_near(a: &Matrixf64, b: &Matrixf64, tol: f64, what: &str) {
    assert_eq!(a.shape(), b.shape(), "{}: shape", what);
    for i in 0..a.nrows() {
        for j in 0..a.ncols() {
            let (x, y) = (a[(i, j)], b[(i, j)]);
            assert!(
                (x - y).abs() < tol,
                "{}[({},{})]: {} vs {} (diff {})",
                what,
                i,
                j,
                x,
                y,
                (x - y).abs()
            );
        }
    }
}

fn a4() -> Matrixf64 {
    Matrix::new(
        4,
        4,
        &[
            1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0,
        ],
    )
    .unwrap()
}

/// Deterministic, diagonally dominant test matrices.
fn well_conditioned(n: usize, seed: u64) -> Matrixf64 {
    Matrix::from_fn(n, n, |i, j| {
        let mix = (i as u64 * 31 + j as u64 * 17 + seed * 13) % 19;
        let off = mix as f64 / 19.0 - 0.5;
        if i == j {
            n as f64 + 1.0 + off
        } else {
            off
        }
    })
    .unwrap()
}

// ── Construction ────────────────────────────────────────────────────

#[test]
fn construct_zero_pads_short_initializers() {
    for rows in 1..4 {
        for cols in 1..4 {
            for len in 0..=rows * cols {
                let values: Vec<f64> = (0..len).map(|k| k as f64 + 1.0).collect();
                let m = Matrix::new(rows, cols, values.as_slice()).unwrap();
                for i in 0..rows {
                    for j in 0..cols {
                        let k = i * cols + j;
                        let expected = if k < len { values[k] } else { 0.0 };
                        assert_eq!(m.get(i, j).unwrap(), expected);
                    }
                }
            }
        }
    }
}

#[test]
fn construct_rejects_bad_shapes() {
    assert!(matches!(
        Matrix::<f64>::new(0, 3, &[]),
        Err(MatrixError::InvalidDimensions { .. })
    ));
    assert!(matches!(
        Matrix::<f64>::new(3, 0, &[]),
        Err(MatrixError::InvalidDimensions { .. })
    ));
    assert!(matches!(
        Matrix::new(2, 2, &[1.0; 5]),
        Err(MatrixError::TooManyElements { .. })
    ));
}

// ── Arithmetic ──────────────────────────────────────────────────────

#[test]
fn transpose_roundtrip() {
    for (rows, cols) in [(1, 1), (1, 4), (3, 2), (4, 4)] {
        let a = Matrix::from_fn(rows, cols, |i, j| (i * 10 + j) as f64 - 3.5).unwrap();
        assert_eq!(a.transpose().transpose(), a);
    }
}

#[test]
fn identity_is_neutral() {
    let a = a4();
    let id = Matrix::identity(4, 4).unwrap();
    assert_eq!(id.multiply(&a).unwrap(), a);
    assert_eq!(a.multiply(&id).unwrap(), a);
}

#[test]
fn square_of_a4() {
    let expected = Matrix::new(
        4,
        4,
        &[
            90.0, 100.0, 110.0, 120.0, 202.0, 228.0, 254.0, 280.0, 314.0, 356.0, 398.0, 440.0,
            426.0, 484.0, 542.0, 600.0,
        ],
    )
    .unwrap();
    assert_eq!(a4().multiply(&a4()).unwrap(), expected);
}

// ── QR ──────────────────────────────────────────────────────────────

#[test]
fn qr_reconstructs_a4() {
    let a = a4();
    let (q, r) = a.qr().unwrap().into_parts();
    assert_matrix_near(&q.multiply(&r).unwrap(), &a, TOL, "QR");
    let id = Matrix::identity(4, 4).unwrap();
    assert_matrix_near(&q.transpose().multiply(&q).unwrap(), &id, TOL, "QtQ");
    assert!(r.prune_default().is_upper_triangular());
}

#[test]
fn qr_reconstructs_generated_matrices() {
    for n in 1..7 {
        let a = well_conditioned(n, n as u64);
        let qr = a.qr().unwrap();
        assert_matrix_near(&qr.q().multiply(qr.r()).unwrap(), &a, TOL, "QR");
    }
}

// ── Triangular inverse ──────────────────────────────────────────────

#[test]
fn triangle_inverse_known_values() {
    let t = Matrix::new(
        4,
        4,
        &[1.0, 2.0, 3.0, 4.0, 0.0, 5.0, 6.0, 7.0, 0.0, 0.0, 8.0, 9.0, 0.0, 0.0, 0.0, 10.0],
    )
    .unwrap();
    let expected = Matrix::new(
        4,
        4,
        &[
            1.0, -0.4, -0.075, -0.0525, 0.0, 0.2, -0.15, -0.005, 0.0, 0.0, 0.125, -0.1125, 0.0,
            0.0, 0.0, 0.1,
        ],
    )
    .unwrap();
    assert_matrix_near(&t.triangle_inverse().unwrap(), &expected, TOL, "T^-1");
}

#[test]
fn triangle_inverse_rejects_full_matrix() {
    assert_eq!(
        a4().triangle_inverse().unwrap_err(),
        MatrixError::NotTriangular
    );
}

// ── Prune ───────────────────────────────────────────────────────────

#[test]
fn prune_flushes_small_values() {
    let m = Matrix::new(1, 2, &[1e-12, 4e-3]).unwrap();
    assert_eq!(m.prune(1e-10).as_slice(), &[0.0, 4e-3]);
    assert_eq!(m.prune_default().as_slice(), &[0.0, 4e-3]);
}

// ── General inverse ─────────────────────────────────────────────────

#[test]
fn inverse_times_original_is_identity() {
    for n in 1..7 {
        let a = well_conditioned(n, 3 * n as u64 + 1);
        let inv = a.inverse().unwrap();
        let id = Matrix::identity(n, n).unwrap();
        assert_matrix_near(&inv.multiply(&a).unwrap(), &id, TOL, "A^-1 A");
    }
}

#[test]
fn inverse_of_large_magnitude_matrix() {
    let base = Matrix::new(3, 3, &[2.0, 1.0, -1.0, -3.0, -1.0, 2.0, -2.0, 1.0, 2.0]).unwrap();
    let id = Matrix::identity(3, 3).unwrap();
    for scale in [1e6, 1e8] {
        let a = base.scale(scale);
        let inv = a.inverse().unwrap();
        assert_matrix_near(&inv.multiply(&a).unwrap(), &id, TOL, "A^-1 A");
    }
}

#[test]
fn qr_r_is_exactly_upper_triangular() {
    for n in 2..7 {
        let a = well_conditioned(n, n as u64 + 5).scale(1e7);
        let r = a.qr().unwrap().into_parts().1;
        for i in 0..n {
            for j in 0..i {
                assert_eq!(r[(i, j)], 0.0, "R[({},{})]", i, j);
            }
        }
    }
}

#[test]
fn inverse_of_triangular_matches_triangle_inverse() {
    let t = Matrix::new(3, 3, &[2.0, -1.0, 3.0, 0.0, 4.0, 1.0, 0.0, 0.0, -5.0]).unwrap();
    assert_matrix_near(
        &t.inverse().unwrap(),
        &t.triangle_inverse().unwrap(),
        TOL,
        "inverse",
    );
}

#[test]
fn inverse_rejects_non_square() {
    let a = Matrix::<f64>::ones(2, 3).unwrap();
    assert_eq!(
        a.inverse().unwrap_err(),
        MatrixError::NotSquare { rows: 2, cols: 3 }
    );
}

#[test]
fn inverse_of_rank_deficient_matrix_is_singular() {
    assert!(matches!(
        a4().inverse(),
        Err(MatrixError::SingularMatrix { .. })
    ));
}

#[cfg(feature = "std")]
#[test]
fn errors_are_std_errors() {
    fn boxed(e: MatrixError) -> Box<dyn std::error::Error> {
        Box::new(e)
    }
    let e = boxed(MatrixError::NotTriangular);
    assert_eq!(e.to_string(), "matrix is not triangular");
}
