use std::fmt::{Debug, Display};

use num_traits::{One, WrappingAdd, WrappingMul, Zero};

use crate::lane::{Portable, VectorOps};

/// Scalar types that can be stored in a matrix.
///
/// `lane_add` and `lane_mul` are the arithmetic every lane performs: IEEE
/// for floats, two's-complement wrapping for integers. Scalar-array lanes
/// go through them so they match the vector registers on overflow.
pub trait Scalar:
    Copy + Default + PartialEq + Debug + Display + Zero + One + Send + Sync + 'static
{
    /// Lane addition.
    fn lane_add(self, rhs: Self) -> Self;

    /// Lane multiplication.
    fn lane_mul(self, rhs: Self) -> Self;
}

/// Scalar types with a natural lane for the target.
///
/// The associated [`Lane`](LaneScalar::Lane) is the default lane strategy of
/// [`BatchedMatrix`](crate::BatchedMatrix).
pub trait LaneScalar: Scalar {
    /// Default lane for this scalar.
    type Lane: VectorOps<Scalar = Self>;
}

macro_rules! impl_float_scalar {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn lane_add(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline]
                fn lane_mul(self, rhs: Self) -> Self {
                    self * rhs
                }
            }
        )*
    };
}

macro_rules! impl_int_scalar {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn lane_add(self, rhs: Self) -> Self {
                    WrappingAdd::wrapping_add(&self, &rhs)
                }

                #[inline]
                fn lane_mul(self, rhs: Self) -> Self {
                    WrappingMul::wrapping_mul(&self, &rhs)
                }
            }
        )*
    };
}

impl_float_scalar!(f32, f64);
impl_int_scalar!(i32, i64);

macro_rules! impl_lane_scalar {
    ($($t:ty => $lane:ty, $width:literal);* $(;)?) => {
        $(
            impl LaneScalar for $t {
                #[cfg(not(feature = "portable"))]
                type Lane = $lane;
                #[cfg(feature = "portable")]
                type Lane = Portable<$t, $width>;
            }
        )*
    };
}

impl_lane_scalar! {
    f32 => wide::f32x4, 4;
    f64 => wide::f64x2, 2;
    i32 => wide::i32x4, 4;
    i64 => Portable<i64, 2>, 2;
}
