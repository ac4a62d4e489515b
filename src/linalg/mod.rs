pub(crate) mod inverse;
pub(crate) mod qr;
pub(crate) mod triangular;

pub use inverse::inverse;
pub use qr::{householder_qr, QrDecomposition};
pub use triangular::triangle_inverse;
