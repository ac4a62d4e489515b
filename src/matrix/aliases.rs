//! Type aliases for the float element types the decompositions support.

use super::Matrix;

/// Matrix with `f32` elements.
pub type Matrixf32 = Matrix<f32>;
/// Matrix with `f64` elements, the reference precision.
pub type Matrixf64 = Matrix<f64>;
