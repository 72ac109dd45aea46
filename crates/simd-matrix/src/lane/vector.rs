//! `wide`-backed lanes. Each type maps to one 128-bit register on x86_64
//! (SSE2), aarch64 (NEON) and wasm32 (simd128), and to a scalar array
//! elsewhere.

use wide::{f32x4, f64x2, i32x4};

use num_traits::Zero;

use crate::lane::VectorOps;

macro_rules! impl_wide_lane {
    ($($lane:ident => $t:ty, $width:literal);* $(;)?) => {
        $(
            impl VectorOps for $lane {
                type Scalar = $t;
                const LANES: usize = $width;

                #[inline]
                fn broadcast(value: $t) -> Self {
                    $lane::splat(value)
                }

                #[inline]
                fn load(src: &[$t]) -> Self {
                    let mut values = [<$t as Zero>::zero(); $width];
                    values.copy_from_slice(&src[..$width]);
                    $lane::new(values)
                }

                #[inline]
                fn store(self, dst: &mut [$t]) {
                    dst[..$width].copy_from_slice(&self.to_array());
                }

                #[inline]
                fn extract(self, index: usize) -> $t {
                    self.to_array()[index]
                }

                #[inline]
                fn add_lanes(self, other: Self) -> Self {
                    self + other
                }

                #[inline]
                fn mul_acc(self, b: Self, acc: Self) -> Self {
                    // Separate mul and add: wide's mul_add may fuse.
                    self * b + acc
                }
            }
        )*
    };
}

impl_wide_lane! {
    f32x4 => f32, 4;
    f64x2 => f64, 2;
    i32x4 => i32, 4;
}
