use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

/// Trait for types that can be used as matrix elements.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, and all integer types.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for floating-point matrix elements.
///
/// Required by operations that need `sqrt`, `abs` or division by a pivot:
/// norms, Householder QR, triangular and general inversion.
pub trait FloatScalar: Scalar + Float {
    /// Magnitude below which [`prune_default`](crate::Matrix::prune_default)
    /// flushes an element to exact zero.
    const PRUNE_TOLERANCE: Self;

    /// The constant `2`, used by the Householder update `I - 2uuᵗ`.
    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }
}

macro_rules! impl_float_scalar {
    ($($t:ty),*) => {
        $(
            impl FloatScalar for $t {
                const PRUNE_TOLERANCE: $t = 1e-10;
            }
        )*
    };
}

impl_float_scalar!(f32, f64);
