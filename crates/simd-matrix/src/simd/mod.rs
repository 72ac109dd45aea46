//! SIMD capability detection.
//!
//! Lane widths are fixed at compile time (see [`lane`](crate::lane)); this
//! module only reports what the host offers and which instruction set the
//! compiled lanes run on.
//!
//! # Levels
//!
//! | Architecture | Level | Register Width |
//! |--------------|-------|----------------|
//! | x86_64 | AVX-512 | 512-bit |
//! | x86_64 | AVX2 | 256-bit |
//! | x86_64 | SSE2 | 128-bit |
//! | aarch64 | NEON | 128-bit |
//! | wasm32 | simd128 | 128-bit |
//! | Any | Scalar | - |
//!
//! ```rust
//! use simd_matrix::simd::{lane_backend, simd_level};
//!
//! // The host can never offer less than what the lanes were compiled for.
//! assert!(simd_level().register_bits() >= lane_backend().register_bits());
//! ```

mod detect;

pub use detect::{lane_backend, simd_level, SimdLevel};
