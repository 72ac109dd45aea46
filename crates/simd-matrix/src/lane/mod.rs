//! Lane abstraction over hardware vector registers.
//!
//! A **lane** is a fixed-width group of `L` scalars processed together by one
//! vector instruction. The matrix container never touches intrinsics directly:
//! it is written once against the [`VectorOps`] capability and instantiated
//! per element type and lane width.
//!
//! # Lane Types
//!
//! | Scalar | Default lane | Width | Backing |
//! |--------|--------------|-------|---------|
//! | `f32` | `wide::f32x4` | 4 | SSE2 / NEON / simd128 |
//! | `f64` | `wide::f64x2` | 2 | SSE2 / NEON / simd128 |
//! | `i32` | `wide::i32x4` | 4 | SSE2 / NEON / simd128 |
//! | `i64` | [`Portable<i64, 2>`] | 2 | Scalar loop |
//!
//! With the `portable` feature every scalar uses [`Portable`] at the same
//! width, so matrix shapes that compile on one configuration compile on the
//! other and produce identical results.
//!
//! # Capability
//!
//! ```text
//! broadcast(s)        -> [s, s, .., s]
//! load(src)           -> src[0..L]          (unaligned)
//! store(dst)          -> dst[0..L] = lane   (unaligned)
//! add_lanes(a, b)     -> a + b
//! mul_acc(a, b, acc)  -> a * b + acc        (two roundings, never fused)
//! ```
//!
//! Integer lanes wrap on overflow, the way the vector registers do.
//!
//! # Example
//!
//! ```
//! use simd_matrix::lane::{Portable, VectorOps};
//!
//! let a = Portable::<f32, 4>::load(&[1.0, 2.0, 3.0, 4.0]);
//! let s = Portable::<f32, 4>::broadcast(2.0);
//! let c = a.mul_acc(s, Portable::zero());
//!
//! let mut out = [0.0f32; 4];
//! c.store(&mut out);
//! assert_eq!(out, [2.0, 4.0, 6.0, 8.0]);
//! ```

mod portable;
mod scalar;
mod traits;
mod vector;

pub use portable::Portable;
pub use scalar::{LaneScalar, Scalar};
pub use traits::VectorOps;
