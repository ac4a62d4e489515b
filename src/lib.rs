//! # densela
//!
//! Dense real matrices with a Householder QR kernel and QR-based inversion,
//! no-std compatible.
//!
//! ## Quick start
//!
//! ```
//! use densela::Matrix;
//!
//! let a = Matrix::new(3, 3, &[
//!     2.0_f64, 1.0, -1.0,
//!     -3.0, -1.0, 2.0,
//!     -2.0, 1.0, 2.0,
//! ]).unwrap();
//!
//! let qr = a.qr().unwrap();
//! let a_inv = a.inverse().unwrap();
//! let id = a_inv.multiply(&a).unwrap();
//! assert!((id[(1, 1)] - 1.0).abs() < 1e-12);
//! assert!(qr.r()[(1, 0)].abs() < 1e-12);
//! ```
//!
//! ## Modules
//!
//! - [`matrix`] — Heap-allocated [`Matrix<T>`] with runtime dimensions and
//!   row-major `Vec<T>` storage. Validating constructors, bounds-checked
//!   `get` / `set`, block extraction (`minor`) and splicing (`update_minor`),
//!   arithmetic, norms, triangularity predicates, pruning and `Display`.
//!
//! - [`linalg`] — Householder QR ([`householder_qr`], [`QrDecomposition`]),
//!   triangular inversion by substitution ([`triangle_inverse`]) and the
//!   general inverse `A⁻¹ = R⁻¹Qᵗ` ([`inverse`]). Each is also available as a
//!   method on `Matrix`.
//!
//! - [`traits`] — Element traits:
//!   - [`Scalar`] — all matrix elements (`Copy + PartialEq + Debug + Num`)
//!   - [`FloatScalar`] — `f32` / `f64`, required by norms and decompositions
//!
//! Every fallible operation returns [`MatrixError`].
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std`   | yes     | Hardware FPU via system libm, `std::error::Error` for `MatrixError` |
//! | `libm`  | no      | Pure-Rust float fallback for `no_std` targets |

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("densela needs a float backend: enable the `std` or `libm` feature");

extern crate alloc;

pub mod error;
pub mod linalg;
pub mod matrix;
pub mod traits;

pub use error::MatrixError;
pub use linalg::{householder_qr, inverse, triangle_inverse, QrDecomposition};
pub use matrix::{Matrix, Matrixf32, Matrixf64, Norm};
pub use traits::{FloatScalar, Scalar};
